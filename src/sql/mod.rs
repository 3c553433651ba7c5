//! Safe SQL builder: identifiers and keywords from closed sets only, values as parameters.

mod builder;
pub mod params;
pub mod whitelist;
pub use builder::*;
pub use params::*;
pub use whitelist::{SortColumn, SortOrder, KNOWN_CATEGORIES};
