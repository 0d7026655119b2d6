//! Configuration layer for the table read/write pipeline
//!
//! `options` declares the vocabulary; the sibling modules turn maps, property
//! files and legacy streamer configs into a [`Configuration`].

pub mod options;
pub mod properties;
pub mod props_file;
pub mod streamer;

pub use options::{
    Configuration, OptionDefBuilder, OptionDefinition, OptionValue, OptionsRegistry, ValueType,
    keys,
};
pub use properties::{
    changed_options, flat_options, from_map, get_hoodie_properties,
    get_hoodie_properties_with_prefix, is_default_value_defined,
};
pub use streamer::{StreamerConfig, WriteOperationType, from_streamer_config};
