//! # luach-hebdate
//!
//! Hebrew calendar date conversion and display tables.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Gregorian (y, m, d)"] -->|"icu_calendar"| B["Hebrew day/month/year"]
//!     B -->|"day_label()"| C["day label"]
//!     B -->|"months catalogue"| D["month name"]
//!     B -->|"luach_gematria"| E["year numeral"]
//!     C --> F["ConvertedDate"]
//!     D --> F
//!     E --> F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_hebdate::{gregorian_to_hebrew, day_label, months};
//!
//! let converted = gregorian_to_hebrew(2025, 9, 23).unwrap();
//! assert_eq!(converted.formatted(), "א׳ תשרי ה'תשפ\"ו");
//!
//! // Fixed tables for selection controls.
//! assert_eq!(day_label(15), Some("ט״ו"));
//! assert_eq!(months().len(), 14);
//! ```
//!
//! Calendar arithmetic (leap years, month lengths) is delegated to
//! `icu_calendar`; this crate owns only the display tables and the
//! composition of the formatted string.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `months` | Month catalogue with leap-variant ordering |
//! | `days` | Pre-rendered day-of-month labels |
//! | `convert` | Gregorian to Hebrew conversion |
//! | `gregorian` | Gregorian-side display helpers |
//! | `error` | Error types |

mod convert;
mod days;
mod error;
mod gregorian;
mod months;

pub use convert::{gregorian_to_hebrew, try_gregorian_to_hebrew, ConvertedDate};
pub use days::{day_label, day_labels};
pub use error::ConvertError;
pub use gregorian::{
    approximate_hebrew_year, format_gregorian_hebrew, format_gregorian_short, weekday_name,
};
pub use months::{months, HebrewMonth};
