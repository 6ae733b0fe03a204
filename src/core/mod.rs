pub mod extent;
pub mod scale;
pub mod state;
pub mod types;

pub use extent::resolve_extent;
pub use scale::linear_map;
pub use state::{Consumer, PerState, VisualState};
pub use types::{Domain, ItemSize};
