use tracing::trace;

use crate::core::{ItemSize, PerState, VisualState, linear_map};
use crate::visual::{ChannelSet, ChannelType, VisualSample, VisualValue};

/// Symbol identifier every controller glyph falls back to.
pub const CANONICAL_CONTROLLER_SYMBOL: &str = "roundRect";

/// Symbols the controller cannot draw; rewritten to the canonical symbol.
const REWRITTEN_SYMBOLS: [&str; 2] = ["none", "square"];

/// Where a controller state that lacks a `symbol` or `symbolSize` sequence
/// takes it from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceSource {
    /// The state declares the sequence itself.
    OwnState,
    /// Borrowed from the first state, in canonical order, that declares it.
    DeclaringState(VisualState),
    /// Nothing declares it: the stock sequence is used.
    StockDefault,
}

type SequenceProvider =
    fn(ChannelType, VisualState, &PerState<ChannelSet>) -> Option<SequenceSource>;

/// Providers consulted in priority order.
const SEQUENCE_PROVIDERS: [SequenceProvider; 3] = [
    own_state_provider,
    declaring_state_provider,
    stock_default_provider,
];

fn own_state_provider(
    channel: ChannelType,
    state: VisualState,
    declared: &PerState<ChannelSet>,
) -> Option<SequenceSource> {
    declared
        .get(state)
        .and_then(|channels| channels.channel(channel))
        .map(|_| SequenceSource::OwnState)
}

fn declaring_state_provider(
    channel: ChannelType,
    _state: VisualState,
    declared: &PerState<ChannelSet>,
) -> Option<SequenceSource> {
    VisualState::ALL
        .into_iter()
        .find(|candidate| {
            declared
                .get(*candidate)
                .is_some_and(|channels| channels.channel(channel).is_some())
        })
        .map(SequenceSource::DeclaringState)
}

fn stock_default_provider(
    _channel: ChannelType,
    _state: VisualState,
    _declared: &PerState<ChannelSet>,
) -> Option<SequenceSource> {
    Some(SequenceSource::StockDefault)
}

/// Picks the provider that supplies `channel` for `state`.
#[must_use]
pub fn resolve_sequence_source(
    channel: ChannelType,
    state: VisualState,
    declared: &PerState<ChannelSet>,
) -> SequenceSource {
    SEQUENCE_PROVIDERS
        .iter()
        .find_map(|provider| provider(channel, state, declared))
        .unwrap_or(SequenceSource::StockDefault)
}

/// Pass 4: completes the controller block.
///
/// Every state ends up with a color-ish declaration, a `symbol` sequence and
/// a `symbolSize` sequence normalized into pixel space of `item_size`.
#[must_use]
pub fn complete_controller_visuals(
    declared: &PerState<ChannelSet>,
    item_size: ItemSize,
    inactive_color: &str,
) -> PerState<ChannelSet> {
    let stock_symbol = VisualValue::texts(&[CANONICAL_CONTROLLER_SYMBOL]);
    let stock_symbol_size = VisualValue::numbers(&[item_size.width, item_size.width]);

    let mut completed = PerState::default();
    for state in VisualState::ALL {
        let mut channels = declared.get(state).cloned().unwrap_or_else(|| {
            ChannelSet::new()
                .with_channel(ChannelType::Color, VisualValue::texts(&[inactive_color]))
        });

        for (channel, stock) in [
            (ChannelType::Symbol, &stock_symbol),
            (ChannelType::SymbolSize, &stock_symbol_size),
        ] {
            let sequence = match resolve_sequence_source(channel, state, declared) {
                SequenceSource::OwnState => continue,
                SequenceSource::DeclaringState(source) => {
                    borrowed_sequence(channel, source, declared, &completed)
                        .unwrap_or_else(|| stock.clone())
                }
                SequenceSource::StockDefault => stock.clone(),
            };
            channels.insert(channel.tag(), sequence);
        }

        if let Some(symbols) = channels.channel_mut(ChannelType::Symbol) {
            *symbols = canonicalize_symbols(symbols);
        }
        if let Some(sizes) = channels.channel_mut(ChannelType::SymbolSize) {
            normalize_symbol_size(sizes, item_size.width);
        }

        completed.set(state, Some(channels));
    }
    completed
}

/// A state completed earlier in this pass lends its already normalized
/// sequence; otherwise the declared one is used.
fn borrowed_sequence(
    channel: ChannelType,
    source: VisualState,
    declared: &PerState<ChannelSet>,
    completed: &PerState<ChannelSet>,
) -> Option<VisualValue> {
    completed
        .get(source)
        .or_else(|| declared.get(source))
        .and_then(|channels| channels.channel(channel))
        .cloned()
}

#[must_use]
pub fn canonicalize_symbols(symbols: &VisualValue) -> VisualValue {
    VisualValue::new(symbols.samples().iter().map(|sample| match sample {
        VisualSample::Text(symbol) if REWRITTEN_SYMBOLS.contains(&symbol.as_str()) => {
            VisualSample::Text(CANONICAL_CONTROLLER_SYMBOL.to_owned())
        }
        other => other.clone(),
    }))
}

/// Rescales the first two sizes from `[0, sizes[1]]` into `[0, item_width]`.
///
/// Both elements use the declared second element as the reference maximum.
pub fn normalize_symbol_size(sizes: &mut VisualValue, item_width: f64) {
    let samples = sizes.samples_mut();
    let (Some(first), Some(reference)) = (
        samples.first().and_then(VisualSample::as_number),
        samples.get(1).and_then(VisualSample::as_number),
    ) else {
        trace!(len = samples.len(), "symbol size needs two numeric samples, left as declared");
        return;
    };

    let input = [0.0, reference];
    let output = [0.0, item_width];
    samples[0] = VisualSample::Number(linear_map(first, input, output, true));
    samples[1] = VisualSample::Number(linear_map(reference, input, output, true));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared_with(
        state: VisualState,
        channel: ChannelType,
        value: VisualValue,
    ) -> PerState<ChannelSet> {
        let mut declared = PerState::default();
        declared.set(state, Some(ChannelSet::new().with_channel(channel, value)));
        declared
    }

    #[test]
    fn own_state_has_highest_priority() {
        let mut declared = declared_with(
            VisualState::InRange,
            ChannelType::Symbol,
            VisualValue::texts(&["circle"]),
        );
        declared.out_of_range = Some(
            ChannelSet::new().with_channel(ChannelType::Symbol, VisualValue::texts(&["pin"])),
        );

        assert_eq!(
            resolve_sequence_source(ChannelType::Symbol, VisualState::OutOfRange, &declared),
            SequenceSource::OwnState
        );
    }

    #[test]
    fn declaring_state_is_second_priority() {
        let declared = declared_with(
            VisualState::OutOfRange,
            ChannelType::SymbolSize,
            VisualValue::numbers(&[4.0, 8.0]),
        );

        assert_eq!(
            resolve_sequence_source(ChannelType::SymbolSize, VisualState::InRange, &declared),
            SequenceSource::DeclaringState(VisualState::OutOfRange)
        );
    }

    #[test]
    fn stock_default_is_last_resort() {
        let declared = declared_with(
            VisualState::InRange,
            ChannelType::Color,
            VisualValue::texts(&["red"]),
        );

        assert_eq!(
            resolve_sequence_source(ChannelType::Symbol, VisualState::OutOfRange, &declared),
            SequenceSource::StockDefault
        );
    }

    #[test]
    fn symbol_size_scales_against_second_element() {
        let mut sizes = VisualValue::numbers(&[10.0, 50.0]);
        normalize_symbol_size(&mut sizes, 20.0);
        assert_eq!(sizes, VisualValue::numbers(&[4.0, 20.0]));
    }

    #[test]
    fn symbol_size_first_element_is_clamped() {
        let mut sizes = VisualValue::numbers(&[80.0, 40.0]);
        normalize_symbol_size(&mut sizes, 20.0);
        assert_eq!(sizes, VisualValue::numbers(&[20.0, 20.0]));
    }

    #[test]
    fn short_symbol_size_is_left_untouched() {
        let mut sizes = VisualValue::numbers(&[12.0]);
        normalize_symbol_size(&mut sizes, 20.0);
        assert_eq!(sizes, VisualValue::numbers(&[12.0]));
    }
}
