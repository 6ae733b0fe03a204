use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;
use tracing::trace;

/// Visual property that can be driven by a data value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelType {
    Color,
    ColorHue,
    ColorSaturation,
    ColorLightness,
    ColorAlpha,
    Symbol,
    SymbolSize,
}

impl ChannelType {
    pub const ALL: [Self; 7] = [
        Self::Color,
        Self::ColorHue,
        Self::ColorSaturation,
        Self::ColorLightness,
        Self::ColorAlpha,
        Self::Symbol,
        Self::SymbolSize,
    ];

    /// Canonical option key for this channel.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::ColorHue => "colorHue",
            Self::ColorSaturation => "colorSaturation",
            Self::ColorLightness => "colorLightness",
            Self::ColorAlpha => "colorAlpha",
            Self::Symbol => "symbol",
            Self::SymbolSize => "symbolSize",
        }
    }

    /// Parses an option key. Accepts the short `colorH`/`colorS`/`colorL`/`colorA`
    /// aliases used by older configurations.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "color" => Some(Self::Color),
            "colorHue" | "colorH" => Some(Self::ColorHue),
            "colorSaturation" | "colorS" => Some(Self::ColorSaturation),
            "colorLightness" | "colorL" => Some(Self::ColorLightness),
            "colorAlpha" | "colorA" => Some(Self::ColorAlpha),
            "symbol" => Some(Self::Symbol),
            "symbolSize" => Some(Self::SymbolSize),
            _ => None,
        }
    }
}

/// One sample of a declared visual: a number (size, hue, alpha, ...) or a
/// string (color literal, symbol identifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisualSample {
    Number(f64),
    Text(String),
}

impl VisualSample {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<f64> for VisualSample {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for VisualSample {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for VisualSample {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrManySamples {
    One(VisualSample),
    Many(Vec<VisualSample>),
}

/// Ordered sample sequence declared for one channel.
///
/// Deserializes from either a single sample or an array of samples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "OneOrManySamples", into = "Vec<VisualSample>")]
pub struct VisualValue(SmallVec<[VisualSample; 4]>);

impl VisualValue {
    #[must_use]
    pub fn new(samples: impl IntoIterator<Item = VisualSample>) -> Self {
        Self(samples.into_iter().collect())
    }

    #[must_use]
    pub fn texts<S: AsRef<str>>(values: &[S]) -> Self {
        Self::new(values.iter().map(|v| VisualSample::Text(v.as_ref().to_owned())))
    }

    #[must_use]
    pub fn numbers(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(VisualSample::Number))
    }

    #[must_use]
    pub fn samples(&self) -> &[VisualSample] {
        &self.0
    }

    pub fn samples_mut(&mut self) -> &mut [VisualSample] {
        &mut self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().cloned().collect())
    }

    /// Numeric view of every sample; strings are skipped.
    pub fn number_samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().filter_map(VisualSample::as_number)
    }
}

impl From<OneOrManySamples> for VisualValue {
    fn from(value: OneOrManySamples) -> Self {
        match value {
            OneOrManySamples::One(sample) => Self::new([sample]),
            OneOrManySamples::Many(samples) => Self::new(samples),
        }
    }
}

impl From<VisualValue> for Vec<VisualSample> {
    fn from(value: VisualValue) -> Self {
        value.0.into_vec()
    }
}

/// Channel declarations of one state, keyed by the raw option tag.
///
/// Keys are kept verbatim so that unrecognized tags survive completion and
/// are only dropped when mapping records are built. Declaration order is
/// preserved.
///
/// Deserialization is lenient: a channel whose value is not a sample or a
/// sample sequence is skipped instead of failing the whole declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ChannelSet(IndexMap<String, VisualValue>);

impl ChannelSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, value: VisualValue) -> Self {
        self.insert(tag, value);
        self
    }

    #[must_use]
    pub fn with_channel(self, channel: ChannelType, value: VisualValue) -> Self {
        self.with(channel.tag(), value)
    }

    pub fn insert(&mut self, tag: impl Into<String>, value: VisualValue) -> Option<VisualValue> {
        self.0.insert(tag.into(), value)
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&VisualValue> {
        self.0.get(tag)
    }

    #[must_use]
    pub fn channel(&self, channel: ChannelType) -> Option<&VisualValue> {
        self.get(channel.tag())
    }

    pub fn channel_mut(&mut self, channel: ChannelType) -> Option<&mut VisualValue> {
        self.0.get_mut(channel.tag())
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VisualValue)> {
        self.0.iter().map(|(tag, value)| (tag.as_str(), value))
    }

    /// Copies every channel of `defaults` this set does not declare yet.
    pub fn fill_missing_from(&mut self, defaults: &ChannelSet) {
        for (tag, value) in &defaults.0 {
            if !self.0.contains_key(tag) {
                self.0.insert(tag.clone(), value.clone());
            }
        }
    }

    /// Overwrites channels with those declared by `patch`.
    pub fn overwrite_from(&mut self, patch: &ChannelSet) {
        for (tag, value) in &patch.0 {
            self.0.insert(tag.clone(), value.clone());
        }
    }
}

impl<'de> Deserialize<'de> for ChannelSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(tag, value)| match VisualValue::deserialize(value) {
                Ok(visual) => Some((tag, visual)),
                Err(error) => {
                    trace!(tag = %tag, %error, "skip channel with unusable value");
                    None
                }
            })
            .collect())
    }
}

impl<S: Into<String>> FromIterator<(S, VisualValue)> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = (S, VisualValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(tag, value)| (tag.into(), value)).collect())
    }
}
