pub mod errors;
pub mod politician;

pub use errors::{Error, Result, ResultExt};
pub use politician::{Affiliation, Politician};
