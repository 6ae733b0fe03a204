//! Channel vocabulary shared by option completion and mapping construction.

pub mod channel;
pub mod mapping;
pub mod registry;

pub use channel::{ChannelSet, ChannelType, VisualSample, VisualValue};
pub use mapping::MappingRecord;
pub use registry::{BuiltinChannelRegistry, ChannelRegistry, VisualVariant};
