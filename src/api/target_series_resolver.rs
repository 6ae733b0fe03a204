use serde::{Deserialize, Serialize};
use tracing::trace;

use super::visual_range_option::{DimensionRef, SeriesIndexDeclaration};

/// Shape of the data a source holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataKind {
    List,
    Tree,
    Graph,
}

/// External data source a data-range configuration can be attached to.
pub trait DataSource {
    fn index(&self) -> usize;

    /// Whether the source holds list-shaped data that a value range can drive.
    fn has_list_data(&self) -> bool;

    fn dimensions(&self) -> &[String];
}

/// Enumerates available data sources in their natural order.
pub trait DataSourceEnumerator {
    fn data_sources(&self) -> Vec<&dyn DataSource>;

    fn data_source(&self, index: usize) -> Option<&dyn DataSource> {
        self.data_sources()
            .into_iter()
            .find(|source| source.index() == index)
    }
}

/// Plain description of a data source, enough for target discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceDescriptor {
    pub index: usize,
    pub kind: DataKind,
    #[serde(default)]
    pub dimensions: Vec<String>,
}

impl DataSourceDescriptor {
    #[must_use]
    pub fn new(index: usize, kind: DataKind) -> Self {
        Self {
            index,
            kind,
            dimensions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dimensions<S: Into<String>>(
        mut self,
        dimensions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }
}

impl DataSource for DataSourceDescriptor {
    fn index(&self) -> usize {
        self.index
    }

    fn has_list_data(&self) -> bool {
        self.kind == DataKind::List
    }

    fn dimensions(&self) -> &[String] {
        &self.dimensions
    }
}

impl DataSourceEnumerator for [DataSourceDescriptor] {
    fn data_sources(&self) -> Vec<&dyn DataSource> {
        self.iter().map(|source| source as &dyn DataSource).collect()
    }
}

impl DataSourceEnumerator for Vec<DataSourceDescriptor> {
    fn data_sources(&self) -> Vec<&dyn DataSource> {
        self.as_slice().data_sources()
    }
}

/// Resolved set of sources a configuration applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSelection {
    pub indices: Vec<usize>,
    /// `true` when `indices` came from discovery rather than the option.
    pub auto_discovered: bool,
}

/// Resolves target indices from an explicit declaration or by discovering
/// every list-shaped source.
pub fn resolve_targets<S>(declared: Option<&SeriesIndexDeclaration>, sources: &S) -> TargetSelection
where
    S: DataSourceEnumerator + ?Sized,
{
    if let Some(declared) = declared {
        return TargetSelection {
            indices: declared.to_indices(),
            auto_discovered: false,
        };
    }

    let mut indices = Vec::new();
    for source in sources.data_sources() {
        if source.has_list_data() {
            indices.push(source.index());
        } else {
            trace!(index = source.index(), "skip non-list data source");
        }
    }
    TargetSelection {
        indices,
        auto_discovered: true,
    }
}

/// Dimension feeding the domain: the declared one, else the last dimension
/// of `source`.
#[must_use]
pub fn resolve_data_dimension(
    declared: Option<&DimensionRef>,
    source: &dyn DataSource,
) -> Option<DimensionRef> {
    if let Some(declared) = declared {
        return Some(declared.clone());
    }
    source
        .dimensions()
        .last()
        .map(|name| DimensionRef::Name(name.clone()))
}
