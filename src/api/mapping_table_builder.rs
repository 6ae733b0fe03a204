use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Consumer, Domain, VisualState};
use crate::visual::{ChannelRegistry, ChannelType, MappingRecord};

use super::visual_option_completer::CompletedVisualOption;

pub type ChannelMappings = IndexMap<ChannelType, MappingRecord>;
pub type StateMappings = IndexMap<VisualState, ChannelMappings>;

/// Mapping records of both consumers, keyed by state then channel.
///
/// Rebuilt wholesale on every configuration change; never patched in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingTable {
    pub controller: StateMappings,
    pub target: StateMappings,
}

impl MappingTable {
    #[must_use]
    pub fn consumer(&self, consumer: Consumer) -> &StateMappings {
        match consumer {
            Consumer::Controller => &self.controller,
            Consumer::Target => &self.target,
        }
    }

    fn consumer_mut(&mut self, consumer: Consumer) -> &mut StateMappings {
        match consumer {
            Consumer::Controller => &mut self.controller,
            Consumer::Target => &mut self.target,
        }
    }

    #[must_use]
    pub fn record(
        &self,
        consumer: Consumer,
        state: VisualState,
        channel: ChannelType,
    ) -> Option<&MappingRecord> {
        self.consumer(consumer).get(&state)?.get(&channel)
    }

    /// Every record with its position, in consumer/state/declaration order.
    pub fn records(&self) -> impl Iterator<Item = (Consumer, VisualState, &MappingRecord)> {
        Consumer::ALL.into_iter().flat_map(move |consumer| {
            self.consumer(consumer).iter().flat_map(move |(state, channels)| {
                channels
                    .values()
                    .map(move |record| (consumer, *state, record))
            })
        })
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        Consumer::ALL
            .into_iter()
            .map(|consumer| self.consumer(consumer).values().map(IndexMap::len).sum::<usize>())
            .sum()
    }
}

/// Builds one record per declared, recognized channel of every consumer and
/// state.
pub fn build_mapping_table<R>(
    completed: &CompletedVisualOption,
    domain: Domain,
    registry: &R,
) -> MappingTable
where
    R: ChannelRegistry + ?Sized,
{
    build_mapping_table_with(completed, domain, registry, |_, _, _| {})
}

/// Same as [`build_mapping_table`], letting `fill` adjust each record before
/// it is stored.
///
/// Unknown channel tags are skipped here, so nothing downstream ever sees
/// one.
pub fn build_mapping_table_with<R, F>(
    completed: &CompletedVisualOption,
    domain: Domain,
    registry: &R,
    mut fill: F,
) -> MappingTable
where
    R: ChannelRegistry + ?Sized,
    F: FnMut(Consumer, VisualState, &mut MappingRecord),
{
    let mut table = MappingTable::default();
    for consumer in Consumer::ALL {
        for state in VisualState::ALL {
            let mut channels = ChannelMappings::new();
            if let Some(declared) = completed.state(consumer, state) {
                for (tag, visual) in declared.iter() {
                    let Some(channel_type) = registry.channel_type(tag) else {
                        trace!(state = state.as_str(), tag, "skip unknown channel type");
                        continue;
                    };
                    let mut record = MappingRecord::new(channel_type, domain, visual.clone());
                    fill(consumer, state, &mut record);
                    channels.insert(channel_type, record);
                }
            }
            table.consumer_mut(consumer).insert(state, channels);
        }
    }
    table
}
