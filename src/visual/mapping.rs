use serde::{Deserialize, Serialize};

use crate::core::Domain;

use super::channel::{ChannelType, VisualValue};

/// Resolved unit handed to the sampling layer: one channel, the domain it
/// spans and the declared visual to interpolate across that domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    pub channel_type: ChannelType,
    pub domain: Domain,
    pub visual: VisualValue,
}

impl MappingRecord {
    #[must_use]
    pub fn new(channel_type: ChannelType, domain: Domain, visual: VisualValue) -> Self {
        Self {
            channel_type,
            domain,
            visual,
        }
    }
}
