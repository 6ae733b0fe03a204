//! Option surface and resolution pipeline.
//!
//! Declared option → extent → visual option completion → mapping table, all
//! owned by [`VisualRangeModel`]. The individual passes are public so hosts
//! can run them on their own option trees.

mod controller_visual_completer;
mod json_contract;
mod mapping_table_builder;
mod range_label_formatter;
mod target_series_resolver;
mod validation;
mod visual_option_completer;
mod visual_range_model;
mod visual_range_option;

pub use controller_visual_completer::{
    CANONICAL_CONTROLLER_SYMBOL, SequenceSource, canonicalize_symbols,
    complete_controller_visuals, normalize_symbol_size, resolve_sequence_source,
};
pub use json_contract::{
    RESOLVED_VISUALS_JSON_SCHEMA_V1, ResolvedVisualsJsonContractV1, ResolvedVisualsSnapshot,
};
pub use mapping_table_builder::{
    ChannelMappings, MappingTable, StateMappings, build_mapping_table, build_mapping_table_with,
};
pub use range_label_formatter::{
    LOWER_BOUND_PLACEHOLDER, RangeFormatter, RangeLabelFormatterFn, UPPER_BOUND_PLACEHOLDER,
    format_fixed, format_range,
};
pub use target_series_resolver::{
    DataKind, DataSource, DataSourceDescriptor, DataSourceEnumerator, TargetSelection,
    resolve_data_dimension, resolve_targets,
};
pub use validation::{MAX_LABEL_PRECISION, validate_visual_range_option};
pub use visual_option_completer::{
    CompletedVisualOption, complete_visual_options, derive_inactive_states, expand_shorthand,
    propagate_base,
};
pub use visual_range_model::VisualRangeModel;
pub use visual_range_option::{
    ConsumerDeclaration, DEFAULT_INACTIVE_COLOR, DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH,
    DEFAULT_LEGACY_COLOR, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_PRECISION, DimensionRef, LegacyColor,
    SeriesIndexDeclaration, StateDeclaration, VisualRangeOption,
};
