//! visual-range: data-range visual mapping resolver.
//!
//! Given a numeric domain and a partial configuration of visual channels
//! (color, symbol, symbol size, ...) for the `inRange`/`outOfRange` states,
//! this crate resolves a complete, consistent mapping table for both the
//! controller widget and the visualized target data. Sampling those mappings
//! at concrete values is left to the rendering layer.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod visual;

pub use api::{VisualRangeModel, VisualRangeOption};
pub use error::{VisualRangeError, VisualRangeResult};
