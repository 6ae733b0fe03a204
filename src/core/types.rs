use serde::{Deserialize, Serialize};

/// Ascending numeric range a visual mapping is defined over.
///
/// Either end may be an infinite sentinel meaning "unbounded in this
/// direction". Use [`crate::core::resolve_extent`] to build one from bounds
/// given in arbitrary order. Sentinels serialize as `"Infinity"` /
/// `"-Infinity"` since JSON has no infinite numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(with = "extended_number")]
    pub lo: f64,
    #[serde(with = "extended_number")]
    pub hi: f64,
}

impl Domain {
    /// Unbounded sentinel pair used by range labels.
    pub const UNBOUNDED: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    #[must_use]
    pub fn is_lower_sentinel(self, value: f64) -> bool {
        value == self.lo
    }

    #[must_use]
    pub fn is_upper_sentinel(self, value: f64) -> bool {
        value == self.hi
    }
}

/// Rendering geometry of one controller glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemSize {
    pub width: f64,
    pub height: f64,
}

impl ItemSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

mod extended_number {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_sign_positive() {
            serializer.serialize_str("Infinity")
        } else {
            serializer.serialize_str("-Infinity")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid domain bound `{other}`"))),
            },
        }
    }
}
