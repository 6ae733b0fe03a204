use super::channel::{ChannelType, VisualValue};

/// Which flavour of a channel default is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualVariant {
    /// Visual used for values inside the selection.
    Active,
    /// Visual used for values outside the selection.
    Inactive,
}

/// Channel vocabulary consulted by completion and mapping construction.
///
/// Hosts with extra channel defaults can provide their own registry; the
/// pipeline only ever talks to this trait.
pub trait ChannelRegistry {
    /// Resolves an option tag to a known channel, `None` for unknown tags.
    fn channel_type(&self, tag: &str) -> Option<ChannelType>;

    /// Default visual for `tag`, `None` when the registry has none.
    fn default_value(&self, tag: &str, variant: VisualVariant) -> Option<VisualValue>;

    fn is_valid_channel_type(&self, tag: &str) -> bool {
        self.channel_type(tag).is_some()
    }
}

/// Registry with the stock channel set and its default visuals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinChannelRegistry;

impl BuiltinChannelRegistry {
    #[must_use]
    pub fn channel_default(channel: ChannelType, variant: VisualVariant) -> VisualValue {
        use VisualVariant::{Active, Inactive};

        match (channel, variant) {
            (ChannelType::Color, Active) => VisualValue::texts(&["#006edd", "#e0ffff"]),
            (ChannelType::Color, Inactive) => VisualValue::texts(&["rgba(0,0,0,0)"]),
            (ChannelType::ColorHue, Active) => VisualValue::numbers(&[0.0, 360.0]),
            (ChannelType::ColorSaturation, Active) => VisualValue::numbers(&[0.3, 1.0]),
            (ChannelType::ColorLightness, Active) => VisualValue::numbers(&[0.9, 0.5]),
            (ChannelType::ColorAlpha, Active) => VisualValue::numbers(&[0.3, 1.0]),
            (
                ChannelType::ColorHue
                | ChannelType::ColorSaturation
                | ChannelType::ColorLightness
                | ChannelType::ColorAlpha,
                Inactive,
            ) => VisualValue::numbers(&[0.0, 0.0]),
            (ChannelType::Symbol, Active) => {
                VisualValue::texts(&["circle", "roundRect", "diamond"])
            }
            (ChannelType::Symbol, Inactive) => VisualValue::texts(&["none"]),
            (ChannelType::SymbolSize, Active) => VisualValue::numbers(&[10.0, 50.0]),
            (ChannelType::SymbolSize, Inactive) => VisualValue::numbers(&[0.0, 0.0]),
        }
    }
}

impl ChannelRegistry for BuiltinChannelRegistry {
    fn channel_type(&self, tag: &str) -> Option<ChannelType> {
        ChannelType::from_tag(tag)
    }

    fn default_value(&self, tag: &str, variant: VisualVariant) -> Option<VisualValue> {
        self.channel_type(tag)
            .map(|channel| Self::channel_default(channel, variant))
    }
}

impl<R: ChannelRegistry + ?Sized> ChannelRegistry for &R {
    fn channel_type(&self, tag: &str) -> Option<ChannelType> {
        (**self).channel_type(tag)
    }

    fn default_value(&self, tag: &str, variant: VisualVariant) -> Option<VisualValue> {
        (**self).default_value(tag, variant)
    }

    fn is_valid_channel_type(&self, tag: &str) -> bool {
        (**self).is_valid_channel_type(tag)
    }
}
