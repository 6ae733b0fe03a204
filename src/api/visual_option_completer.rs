use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Consumer, ItemSize, PerState, VisualState};
use crate::visual::{ChannelRegistry, ChannelSet, ChannelType, VisualValue, VisualVariant};

use super::controller_visual_completer::complete_controller_visuals;
use super::visual_range_option::{ConsumerDeclaration, StateDeclaration, VisualRangeOption};

/// Fully populated visual channel sets for both consumers.
///
/// Produced fresh from a declared option; it never aliases the option it was
/// built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedVisualOption {
    pub target: PerState<ChannelSet>,
    pub controller: PerState<ChannelSet>,
}

impl CompletedVisualOption {
    #[must_use]
    pub fn consumer(&self, consumer: Consumer) -> &PerState<ChannelSet> {
        match consumer {
            Consumer::Controller => &self.controller,
            Consumer::Target => &self.target,
        }
    }

    #[must_use]
    pub fn state(&self, consumer: Consumer, state: VisualState) -> Option<&ChannelSet> {
        self.consumer(consumer).get(state)
    }
}

/// Runs every completion pass over a declared option.
///
/// Pass order matters: later passes assume shorthand forms are already
/// expanded.
pub fn complete_visual_options<R>(
    option: &VisualRangeOption,
    item_size: ItemSize,
    registry: &R,
) -> CompletedVisualOption
where
    R: ChannelRegistry + ?Sized,
{
    let base = option.base_declaration();
    let legacy_color = option.color.resolve();

    let target = propagate_base(&base, option.target.as_ref());
    let controller = propagate_base(&base, option.controller.as_ref());

    let target = expand_shorthand(&target, legacy_color.as_deref(), registry);
    let controller = expand_shorthand(&controller, legacy_color.as_deref(), registry);

    let target = derive_inactive_states(&target, registry);
    let controller =
        complete_controller_visuals(&controller, item_size, option.resolved_inactive_color());

    CompletedVisualOption { target, controller }
}

/// Pass 1: seeds a consumer block with the top-level declarations without
/// overwriting anything the consumer declares itself.
#[must_use]
pub fn propagate_base(
    base: &ConsumerDeclaration,
    consumer: Option<&ConsumerDeclaration>,
) -> ConsumerDeclaration {
    let empty = ConsumerDeclaration::default();
    let consumer = consumer.unwrap_or(&empty);

    consumer.map_states(|state, own| match (own, base.get(state)) {
        (None, inherited) => inherited.cloned(),
        (Some(StateDeclaration::Explicit(own)), Some(StateDeclaration::Explicit(inherited))) => {
            let mut merged = own.clone();
            merged.fill_missing_from(inherited);
            Some(StateDeclaration::Explicit(merged))
        }
        (Some(own), _) => Some(own.clone()),
    })
}

/// Pass 2: applies the legacy top-level palette and expands shorthand
/// declarations into explicit channel sets.
///
/// The legacy palette is ordered high to low, so it is reversed, and it only
/// applies when no `inRange` declaration exists. A shorthand without an
/// active default is dropped.
pub fn expand_shorthand<R>(
    declared: &ConsumerDeclaration,
    legacy_color: Option<&[String]>,
    registry: &R,
) -> PerState<ChannelSet>
where
    R: ChannelRegistry + ?Sized,
{
    let mut declared = declared.clone();
    if let Some(colors) = legacy_color {
        if !declared.is_set(VisualState::InRange) {
            let reversed = VisualValue::texts(colors).reversed();
            declared.in_range = Some(StateDeclaration::Explicit(
                ChannelSet::new().with_channel(ChannelType::Color, reversed),
            ));
        }
    }

    declared.map_states(|state, declaration| match declaration? {
        StateDeclaration::Explicit(channels) => Some(channels.clone()),
        StateDeclaration::Shorthand(tag) => {
            match registry.default_value(tag, VisualVariant::Active) {
                Some(default) => Some(ChannelSet::new().with(tag.clone(), default)),
                None => {
                    trace!(state = state.as_str(), tag = %tag, "drop shorthand without default");
                    None
                }
            }
        }
    })
}

/// Pass 3: when exactly one state is declared, synthesizes the other from the
/// inactive defaults of the declared channels.
///
/// Channels that are unknown or have no inactive default are skipped.
pub fn derive_inactive_states<R>(
    visuals: &PerState<ChannelSet>,
    registry: &R,
) -> PerState<ChannelSet>
where
    R: ChannelRegistry + ?Sized,
{
    let mut derived = visuals.clone();
    for (existing, absent) in [
        (VisualState::InRange, VisualState::OutOfRange),
        (VisualState::OutOfRange, VisualState::InRange),
    ] {
        if derived.is_set(absent) {
            continue;
        }
        let Some(source) = derived.get(existing) else {
            continue;
        };
        let inactive: ChannelSet = source
            .iter()
            .filter(|(tag, _)| registry.is_valid_channel_type(tag))
            .filter_map(|(tag, _)| {
                registry
                    .default_value(tag, VisualVariant::Inactive)
                    .map(|default| (tag, default))
            })
            .collect();
        derived.set(absent, Some(inactive));
    }
    derived
}
