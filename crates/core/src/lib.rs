//! Purchase Tally Core - Domain entities, services, and traits.
//!
//! This crate holds the business logic of a purchase tracker: purchases made
//! in a foreign currency, the states they were bought in (each with its own
//! tax), the two configurable rates, and the converted totals computed from
//! them. It is storage-agnostic and only defines the repository traits.

pub mod constants;
pub mod errors;
pub mod purchases;
pub mod results;
pub mod settings;
pub mod states;

// Re-export the totals calculation at the crate root
pub use results::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
