use crate::core::VisualState;
use crate::error::{VisualRangeError, VisualRangeResult};
use crate::visual::{ChannelRegistry, VisualVariant};

use super::visual_range_option::{ConsumerDeclaration, StateDeclaration, VisualRangeOption};

/// Largest label precision accepted by strict validation.
pub const MAX_LABEL_PRECISION: u32 = 20;

/// Strict pass for callers that want malformed options rejected instead of
/// silently resolved. The resolution pipeline never calls this.
pub fn validate_visual_range_option<R>(
    option: &VisualRangeOption,
    registry: &R,
) -> VisualRangeResult<()>
where
    R: ChannelRegistry + ?Sized,
{
    for (name, bound) in [("min", option.min), ("max", option.max)] {
        if bound.is_some_and(f64::is_nan) {
            return Err(VisualRangeError::InvalidOption(format!(
                "`{name}` must be a number"
            )));
        }
    }

    if let Some(precision) = option.precision {
        if precision > MAX_LABEL_PRECISION {
            return Err(VisualRangeError::InvalidOption(format!(
                "`precision` must be <= {MAX_LABEL_PRECISION}"
            )));
        }
    }

    for (name, size) in [("itemWidth", option.item_width), ("itemHeight", option.item_height)] {
        if let Some(size) = size {
            if !size.is_finite() || size < 0.0 {
                return Err(VisualRangeError::InvalidOption(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
    }

    validate_state_declaration("inRange", option.in_range.as_ref(), registry)?;
    validate_state_declaration("outOfRange", option.out_of_range.as_ref(), registry)?;
    validate_consumer_declaration("target", option.target.as_ref(), registry)?;
    validate_consumer_declaration("controller", option.controller.as_ref(), registry)?;
    Ok(())
}

fn validate_consumer_declaration<R>(
    scope: &str,
    declaration: Option<&ConsumerDeclaration>,
    registry: &R,
) -> VisualRangeResult<()>
where
    R: ChannelRegistry + ?Sized,
{
    let Some(declaration) = declaration else {
        return Ok(());
    };
    for state in VisualState::ALL {
        let path = format!("{scope}.{}", state.as_str());
        validate_state_declaration(&path, declaration.get(state), registry)?;
    }
    Ok(())
}

fn validate_state_declaration<R>(
    path: &str,
    declaration: Option<&StateDeclaration>,
    registry: &R,
) -> VisualRangeResult<()>
where
    R: ChannelRegistry + ?Sized,
{
    match declaration {
        None => Ok(()),
        Some(StateDeclaration::Shorthand(tag)) => {
            if registry.default_value(tag, VisualVariant::Active).is_none() {
                return Err(VisualRangeError::InvalidOption(format!(
                    "`{path}` shorthand `{tag}` has no default visual"
                )));
            }
            Ok(())
        }
        Some(StateDeclaration::Explicit(channels)) => {
            for (tag, visual) in channels.iter() {
                if !registry.is_valid_channel_type(tag) {
                    return Err(VisualRangeError::InvalidOption(format!(
                        "`{path}` declares unknown channel type `{tag}`"
                    )));
                }
                if visual.is_empty() {
                    return Err(VisualRangeError::InvalidOption(format!(
                        "`{path}.{tag}` must declare at least one visual"
                    )));
                }
            }
            Ok(())
        }
    }
}
