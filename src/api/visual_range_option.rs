use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::core::{ItemSize, PerState, VisualState};
use crate::error::{VisualRangeError, VisualRangeResult};
use crate::visual::{ChannelSet, ChannelType};

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 200.0;
pub const DEFAULT_PRECISION: u32 = 0;
pub const DEFAULT_ITEM_WIDTH: f64 = 20.0;
pub const DEFAULT_ITEM_HEIGHT: f64 = 140.0;
pub const DEFAULT_INACTIVE_COLOR: &str = "#aaa";
/// Stock palette of the deprecated top-level `color` key, ordered high to low.
pub const DEFAULT_LEGACY_COLOR: [&str; 2] = ["#006edd", "#e0ffff"];

/// Visual declaration of one state as written in the option.
///
/// A bare string names a channel whose registry default should be used
/// (`"inRange": "symbol"`); an object declares channels explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateDeclaration {
    Shorthand(String),
    Explicit(ChannelSet),
}

impl StateDeclaration {
    #[must_use]
    pub fn shorthand(channel: ChannelType) -> Self {
        Self::Shorthand(channel.tag().to_owned())
    }
}

impl From<ChannelSet> for StateDeclaration {
    fn from(value: ChannelSet) -> Self {
        Self::Explicit(value)
    }
}

/// Per-consumer override block (`target` / `controller`).
pub type ConsumerDeclaration = PerState<StateDeclaration>;

/// Explicit target selection: one index or a list of indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesIndexDeclaration {
    One(usize),
    Many(Vec<usize>),
}

impl SeriesIndexDeclaration {
    #[must_use]
    pub fn to_indices(&self) -> Vec<usize> {
        match self {
            Self::One(index) => vec![*index],
            Self::Many(indices) => indices.clone(),
        }
    }
}

/// Data dimension feeding the domain, by position or by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionRef {
    Index(usize),
    Name(String),
}

/// State of the deprecated top-level `color` key.
///
/// Absent means the stock palette applies, `null` switches the legacy path
/// off entirely. Values that are not arrays are ignored like an absent key;
/// non-string array entries are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LegacyColor {
    #[default]
    Unset,
    Disabled,
    Palette(Vec<String>),
}

impl LegacyColor {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Palette in declaration order (high to low), if the legacy path is on.
    #[must_use]
    pub fn resolve(&self) -> Option<Vec<String>> {
        match self {
            Self::Unset => Some(DEFAULT_LEGACY_COLOR.iter().map(|c| (*c).to_owned()).collect()),
            Self::Disabled => None,
            Self::Palette(colors) => Some(colors.clone()),
        }
    }
}

impl Serialize for LegacyColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset | Self::Disabled => serializer.serialize_none(),
            Self::Palette(colors) => colors.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LegacyColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Self::Disabled,
            serde_json::Value::Array(items) => Self::Palette(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(color) => Some(color),
                        _ => None,
                    })
                    .collect(),
            ),
            other => {
                trace!(value = %other, "ignore non-array legacy color");
                Self::Unset
            }
        })
    }
}

/// Declared data-range visual configuration.
///
/// Every field is optional; defaults are applied by the `resolved_*`
/// accessors so that [`VisualRangeOption::merge`] can tell "not declared"
/// apart from "declared with the default value".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualRangeOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_range: Option<StateDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_of_range: Option<StateDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ConsumerDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<ConsumerDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_index: Option<SeriesIndexDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_color: Option<String>,
    #[serde(default, skip_serializing_if = "LegacyColor::is_unset")]
    pub color: LegacyColor,
}

impl VisualRangeOption {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets declared domain bounds, in any order.
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: DimensionRef) -> Self {
        self.dimension = Some(dimension);
        self
    }

    #[must_use]
    pub fn with_in_range(mut self, declaration: impl Into<StateDeclaration>) -> Self {
        self.in_range = Some(declaration.into());
        self
    }

    #[must_use]
    pub fn with_out_of_range(mut self, declaration: impl Into<StateDeclaration>) -> Self {
        self.out_of_range = Some(declaration.into());
        self
    }

    #[must_use]
    pub fn with_target(mut self, declaration: ConsumerDeclaration) -> Self {
        self.target = Some(declaration);
        self
    }

    #[must_use]
    pub fn with_controller(mut self, declaration: ConsumerDeclaration) -> Self {
        self.controller = Some(declaration);
        self
    }

    #[must_use]
    pub fn with_series_index(mut self, selection: SeriesIndexDeclaration) -> Self {
        self.series_index = Some(selection);
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets a label template using `{value}` / `{value2}` placeholders.
    #[must_use]
    pub fn with_formatter_template(mut self, template: impl Into<String>) -> Self {
        self.formatter = Some(template.into());
        self
    }

    #[must_use]
    pub fn with_item_size(mut self, width: f64, height: f64) -> Self {
        self.item_width = Some(width);
        self.item_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_inactive_color(mut self, color: impl Into<String>) -> Self {
        self.inactive_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_legacy_color(mut self, color: LegacyColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn resolved_min(&self) -> f64 {
        self.min.unwrap_or(DEFAULT_MIN)
    }

    #[must_use]
    pub fn resolved_max(&self) -> f64 {
        self.max.unwrap_or(DEFAULT_MAX)
    }

    #[must_use]
    pub fn resolved_precision(&self) -> u32 {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    #[must_use]
    pub fn resolved_item_size(&self) -> ItemSize {
        ItemSize::new(
            self.item_width.unwrap_or(DEFAULT_ITEM_WIDTH),
            self.item_height.unwrap_or(DEFAULT_ITEM_HEIGHT),
        )
    }

    #[must_use]
    pub fn resolved_inactive_color(&self) -> &str {
        self.inactive_color
            .as_deref()
            .unwrap_or(DEFAULT_INACTIVE_COLOR)
    }

    /// Top-level state declarations that seed both consumers.
    #[must_use]
    pub fn base_declaration(&self) -> ConsumerDeclaration {
        PerState::new(self.in_range.clone(), self.out_of_range.clone())
    }

    /// Deep-merges `patch` into this option.
    ///
    /// Scalars in the patch overwrite, explicit channel sets merge channel by
    /// channel with the patch winning, and anything the patch leaves out is
    /// kept.
    pub fn merge(&mut self, patch: &VisualRangeOption) {
        merge_value(&mut self.min, &patch.min);
        merge_value(&mut self.max, &patch.max);
        merge_value(&mut self.dimension, &patch.dimension);
        merge_state(&mut self.in_range, &patch.in_range);
        merge_state(&mut self.out_of_range, &patch.out_of_range);
        merge_consumer(&mut self.target, &patch.target);
        merge_consumer(&mut self.controller, &patch.controller);
        merge_value(&mut self.series_index, &patch.series_index);
        merge_value(&mut self.precision, &patch.precision);
        merge_value(&mut self.formatter, &patch.formatter);
        merge_value(&mut self.item_width, &patch.item_width);
        merge_value(&mut self.item_height, &patch.item_height);
        merge_value(&mut self.inactive_color, &patch.inactive_color);
        if !patch.color.is_unset() {
            self.color = patch.color.clone();
        }
    }

    /// Serializes the declared option to pretty JSON.
    pub fn to_json_pretty(&self) -> VisualRangeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            VisualRangeError::InvalidOption(format!("failed to serialize option: {e}"))
        })
    }

    /// Parses a declared option from JSON.
    pub fn from_json_str(input: &str) -> VisualRangeResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| VisualRangeError::InvalidOption(format!("failed to parse option: {e}")))
    }
}

fn merge_value<T: Clone>(current: &mut Option<T>, patch: &Option<T>) {
    if let Some(value) = patch {
        *current = Some(value.clone());
    }
}

fn merge_state(current: &mut Option<StateDeclaration>, patch: &Option<StateDeclaration>) {
    match (current.as_mut(), patch) {
        (_, None) => {}
        (Some(StateDeclaration::Explicit(channels)), Some(StateDeclaration::Explicit(update))) => {
            channels.overwrite_from(update);
        }
        (_, Some(update)) => *current = Some(update.clone()),
    }
}

fn merge_consumer(current: &mut Option<ConsumerDeclaration>, patch: &Option<ConsumerDeclaration>) {
    let Some(update) = patch else {
        return;
    };
    let consumer = current.get_or_insert_with(ConsumerDeclaration::default);
    for state in VisualState::ALL {
        let mut slot = consumer.get(state).cloned();
        merge_state(&mut slot, &update.get(state).cloned());
        consumer.set(state, slot);
    }
}
