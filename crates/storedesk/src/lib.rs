//! # storedesk
//!
//! Command-line harness around the storedesk mutation validator.
//!
//! The back-office dashboard pastes hand-written GraphQL mutations into the
//! validator before they are sent to the store API; this crate exposes the
//! same engine on the command line for operators and CI.
//!
//! ## Example
//!
//! ```ignore
//! use storedesk::validate::{fix, validate};
//!
//! let text = std::fs::read_to_string("order.graphql")?;
//! let result = validate(&fix(&text));
//! println!("valid: {}", result.valid);
//! ```

pub mod cli;
pub mod logging;

pub use cli::{Cli, Execution, execute, run};

/// Validator engine
///
/// Re-exports from the validator crate for convenience
pub mod validate {
    pub use storedesk_validate::*;
}
