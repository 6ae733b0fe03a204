use serde::{Deserialize, Serialize};

use crate::core::{Domain, ItemSize};
use crate::error::{VisualRangeError, VisualRangeResult};
use crate::visual::ChannelRegistry;

use super::VisualRangeModel;
use super::mapping_table_builder::MappingTable;

pub const RESOLVED_VISUALS_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of everything a model resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVisualsSnapshot {
    pub extent: Domain,
    pub item_size: ItemSize,
    pub target_indices: Vec<usize>,
    pub auto_target_discovery: bool,
    pub mappings: MappingTable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedVisualsJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ResolvedVisualsSnapshot,
}

impl ResolvedVisualsSnapshot {
    pub fn to_json_pretty(&self) -> VisualRangeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            VisualRangeError::InvalidData(format!("failed to serialize resolved visuals: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> VisualRangeResult<String> {
        let payload = ResolvedVisualsJsonContractV1 {
            schema_version: RESOLVED_VISUALS_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            VisualRangeError::InvalidData(format!(
                "failed to serialize resolved visuals contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> VisualRangeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ResolvedVisualsSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ResolvedVisualsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            VisualRangeError::InvalidData(format!("failed to parse resolved visuals payload: {e}"))
        })?;
        if payload.schema_version != RESOLVED_VISUALS_JSON_SCHEMA_V1 {
            return Err(VisualRangeError::InvalidData(format!(
                "unsupported resolved visuals schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: ChannelRegistry> VisualRangeModel<R> {
    #[must_use]
    pub fn snapshot(&self) -> ResolvedVisualsSnapshot {
        ResolvedVisualsSnapshot {
            extent: self.extent(),
            item_size: self.item_size(),
            target_indices: self.target_indices().to_vec(),
            auto_target_discovery: self.is_auto_target_discovery(),
            mappings: MappingTable::clone(&self.mapping_table()),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> VisualRangeResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
