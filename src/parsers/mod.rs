//! Text adapters for the console's display output.
//!
//! Everything that depends on how the console formats its tables and `info`
//! blocks lives here, so format drift is fixed in one place and can be tested
//! against recorded output.

pub mod detail;
pub mod listing;

pub use detail::parse_detail;
pub use listing::{ListingParse, parse_listing};
