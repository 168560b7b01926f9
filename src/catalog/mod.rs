//! Static reference data
//!
//! Currency symbols and category display metadata. Both tables are
//! compile-time constants keyed by enum, never mutated at runtime.

pub mod category;
pub mod currency;

pub use category::{Category, CategoryInfo};
pub use currency::Currency;
