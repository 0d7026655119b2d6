//! Options system for the table read/write pipeline
//!
//! The options system provides:
//! - A fixed, ordered registry of named, typed, defaulted options
//! - Per-job configurations read through those definitions
//! - Self-describing metadata for help output

pub mod builder;
pub mod keys;
pub mod registrations;
pub mod registry;
pub mod store;
pub mod types;

pub use builder::OptionDefBuilder;
pub use registry::OptionsRegistry;
pub use store::Configuration;
pub use types::{OptionDefinition, OptionValue, ValueType};
