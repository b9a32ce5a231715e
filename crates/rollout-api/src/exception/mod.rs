//! The HTTP error boundary.

pub mod chain;
pub mod translator;

pub use chain::{cause_chain, root_cause};
pub use translator::{ErrorResponse, ErrorTranslator};
