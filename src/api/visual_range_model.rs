use std::sync::Arc;

use tracing::debug;

use crate::core::{Consumer, Domain, ItemSize, VisualState, resolve_extent};
use crate::error::VisualRangeResult;
use crate::visual::{BuiltinChannelRegistry, ChannelRegistry, ChannelType, MappingRecord};

use super::mapping_table_builder::{MappingTable, build_mapping_table};
use super::range_label_formatter::{RangeFormatter, format_range};
use super::target_series_resolver::{
    DataSource, DataSourceEnumerator, TargetSelection, resolve_data_dimension, resolve_targets,
};
use super::visual_option_completer::{CompletedVisualOption, complete_visual_options};
use super::visual_range_option::{DimensionRef, VisualRangeOption};

/// Data-range visual model.
///
/// Owns the declared option and everything derived from it: extent, item
/// size, target selection, completed visual options and the mapping table.
/// Every derived value is recomputed together whenever the option changes.
pub struct VisualRangeModel<R: ChannelRegistry = BuiltinChannelRegistry> {
    registry: R,
    option: VisualRangeOption,
    range_formatter: Option<RangeFormatter>,
    extent: Domain,
    item_size: ItemSize,
    targets: TargetSelection,
    completed: CompletedVisualOption,
    mappings: Arc<MappingTable>,
}

impl VisualRangeModel<BuiltinChannelRegistry> {
    /// Resolves `option` against `sources` with the stock channel registry.
    pub fn new<S>(option: VisualRangeOption, sources: &S) -> Self
    where
        S: DataSourceEnumerator + ?Sized,
    {
        Self::with_registry(option, sources, BuiltinChannelRegistry)
    }

    /// Parses a JSON option and resolves it with the stock channel registry.
    pub fn from_json_str<S>(input: &str, sources: &S) -> VisualRangeResult<Self>
    where
        S: DataSourceEnumerator + ?Sized,
    {
        Ok(Self::new(VisualRangeOption::from_json_str(input)?, sources))
    }
}

impl<R: ChannelRegistry> VisualRangeModel<R> {
    pub fn with_registry<S>(option: VisualRangeOption, sources: &S, registry: R) -> Self
    where
        S: DataSourceEnumerator + ?Sized,
    {
        let targets = resolve_targets(option.series_index.as_ref(), sources);
        let mut model = Self {
            registry,
            option,
            range_formatter: None,
            extent: Domain { lo: 0.0, hi: 0.0 },
            item_size: ItemSize::new(0.0, 0.0),
            targets,
            completed: CompletedVisualOption::default(),
            mappings: Arc::new(MappingTable::default()),
        };
        model.rebuild();
        model
    }

    /// Merges `patch` into the declared option and re-resolves everything.
    pub fn merge_option<S>(&mut self, patch: &VisualRangeOption, sources: &S)
    where
        S: DataSourceEnumerator + ?Sized,
    {
        self.option.merge(patch);
        self.targets = resolve_targets(self.option.series_index.as_ref(), sources);
        self.rebuild();
    }

    /// JSON flavour of [`Self::merge_option`]. The model is untouched when
    /// the patch does not parse.
    pub fn merge_option_json<S>(&mut self, input: &str, sources: &S) -> VisualRangeResult<()>
    where
        S: DataSourceEnumerator + ?Sized,
    {
        let patch = VisualRangeOption::from_json_str(input)?;
        self.merge_option(&patch, sources);
        Ok(())
    }

    /// Re-runs target discovery after the source set changed.
    ///
    /// Explicitly declared targets are kept as they are.
    pub fn reset_targets<S>(&mut self, sources: &S)
    where
        S: DataSourceEnumerator + ?Sized,
    {
        if self.targets.auto_discovered {
            self.targets = resolve_targets(None, sources);
            debug!(targets = self.targets.indices.len(), "rediscover target sources");
        }
    }

    /// Registers a label formatter that takes precedence over the option's
    /// template.
    pub fn set_range_formatter(&mut self, formatter: Option<RangeFormatter>) {
        self.range_formatter = formatter;
    }

    #[must_use]
    pub fn option(&self) -> &VisualRangeOption {
        &self.option
    }

    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    #[must_use]
    pub fn extent(&self) -> Domain {
        self.extent
    }

    /// Sentinel pair range labels treat as open bounds.
    #[must_use]
    pub fn data_bound(&self) -> Domain {
        Domain::UNBOUNDED
    }

    #[must_use]
    pub fn item_size(&self) -> ItemSize {
        self.item_size
    }

    #[must_use]
    pub fn target_indices(&self) -> &[usize] {
        &self.targets.indices
    }

    #[must_use]
    pub fn target_selection(&self) -> &TargetSelection {
        &self.targets
    }

    #[must_use]
    pub fn is_auto_target_discovery(&self) -> bool {
        self.targets.auto_discovered
    }

    #[must_use]
    pub fn completed_visuals(&self) -> &CompletedVisualOption {
        &self.completed
    }

    /// Current table snapshot. A later rebuild swaps in a new table and
    /// leaves snapshots already handed out unchanged.
    #[must_use]
    pub fn mapping_table(&self) -> Arc<MappingTable> {
        Arc::clone(&self.mappings)
    }

    #[must_use]
    pub fn mapping_record(
        &self,
        consumer: Consumer,
        state: VisualState,
        channel: ChannelType,
    ) -> Option<&MappingRecord> {
        self.mappings.record(consumer, state, channel)
    }

    /// Label for the `(start, end)` sub-range using the configured precision
    /// and formatter.
    #[must_use]
    pub fn format_range(&self, start: f64, end: Option<f64>) -> String {
        let template = self
            .option
            .formatter
            .as_ref()
            .map(|template| RangeFormatter::Template(template.clone()));
        format_range(
            start,
            end,
            self.data_bound(),
            self.option.resolved_precision(),
            self.range_formatter.as_ref().or(template.as_ref()),
        )
    }

    #[must_use]
    pub fn data_dimension(&self, source: &dyn DataSource) -> Option<DimensionRef> {
        resolve_data_dimension(self.option.dimension.as_ref(), source)
    }

    /// Visits target sources in target order. Indices that no longer resolve
    /// to a source are skipped.
    pub fn each_target_source<S, F>(&self, sources: &S, mut visit: F)
    where
        S: DataSourceEnumerator + ?Sized,
        F: FnMut(&dyn DataSource),
    {
        for index in &self.targets.indices {
            if let Some(source) = sources.data_source(*index) {
                visit(source);
            }
        }
    }

    fn rebuild(&mut self) {
        self.item_size = self.option.resolved_item_size();
        self.extent = resolve_extent(self.option.resolved_min(), self.option.resolved_max());
        self.completed = complete_visual_options(&self.option, self.item_size, &self.registry);
        self.mappings = Arc::new(build_mapping_table(
            &self.completed,
            self.extent,
            &self.registry,
        ));
        debug!(
            lo = self.extent.lo,
            hi = self.extent.hi,
            targets = self.targets.indices.len(),
            records = self.mappings.record_count(),
            "rebuild visual range mappings"
        );
    }
}
