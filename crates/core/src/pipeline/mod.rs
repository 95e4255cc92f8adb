// Pipeline module - component trait, orchestration and composition

pub mod builder;
pub mod core;
pub mod registry;

// Re-export core types
pub use builder::*;
pub use self::core::*;
pub use registry::*;
