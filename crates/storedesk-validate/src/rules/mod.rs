//! Static rule tables
//!
//! The mutation registry, the anti-pattern table and the example catalog.
//! All three are built once per process and only ever read.

pub mod anti_patterns;
pub mod catalog;
pub mod registry;

pub use anti_patterns::{AntiPattern, anti_patterns, standard_anti_patterns};
pub use catalog::{example, examples};
pub use registry::{
    FixRule, Hint, MutationRegistry, RegistryEntry, fulfillment_entries, order_entries,
    product_entries, registry,
};
