/// Centralized error handling for partner-core
pub mod partner;

pub use partner::{PartnerError, Result};
