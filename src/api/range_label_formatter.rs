use std::fmt;
use std::sync::Arc;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::Domain;

/// Placeholder replaced by the lower bound in label templates.
pub const LOWER_BOUND_PLACEHOLDER: &str = "{value}";
/// Placeholder replaced by the upper bound in label templates.
pub const UPPER_BOUND_PLACEHOLDER: &str = "{value2}";

const MAX_DECIMAL_SCALE: u32 = 28;

pub type RangeLabelFormatterFn = Arc<dyn Fn(f64, Option<f64>) -> String + Send + Sync + 'static>;

/// Custom range label formatting.
#[derive(Clone)]
pub enum RangeFormatter {
    /// Template with `{value}` / `{value2}` placeholders. Open bounds render
    /// as `min` / `max`.
    Template(String),
    /// Callback receiving the raw `(start, end)` pair; its output is used
    /// verbatim.
    Callback(RangeLabelFormatterFn),
}

impl RangeFormatter {
    #[must_use]
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    pub fn callback<F>(formatter: F) -> Self
    where
        F: Fn(f64, Option<f64>) -> String + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(formatter))
    }
}

impl fmt::Debug for RangeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Renders the `(start, end)` sub-range of `bound` as a label.
///
/// `start` equal to `bound.lo` and `end` equal to `bound.hi` are treated as
/// open bounds. Other endpoints are rounded to `precision` fixed decimals.
/// Without `end` the label is the single start value.
#[must_use]
pub fn format_range(
    start: f64,
    end: Option<f64>,
    bound: Domain,
    precision: u32,
    formatter: Option<&RangeFormatter>,
) -> String {
    if let Some(RangeFormatter::Callback(callback)) = formatter {
        return callback(start, end);
    }

    let start_open = bound.is_lower_sentinel(start);
    let end_open = end.is_some_and(|value| bound.is_upper_sentinel(value));

    let start_text = if start_open {
        format_plain_number(start)
    } else {
        format_fixed(start, precision)
    };
    let end_text = end.map(|value| {
        if end_open {
            format_plain_number(value)
        } else {
            format_fixed(value, precision)
        }
    });

    if let Some(RangeFormatter::Template(template)) = formatter {
        let lower = if start_open { "min" } else { start_text.as_str() };
        let upper = match end_text.as_deref() {
            Some(_) if end_open => "max",
            Some(text) => text,
            None => "",
        };
        return template
            .replacen(LOWER_BOUND_PLACEHOLDER, lower, 1)
            .replacen(UPPER_BOUND_PLACEHOLDER, upper, 1);
    }

    let Some(end_text) = end_text else {
        return start_text;
    };
    if start_open {
        format!("< {end_text}")
    } else if end_open {
        format!("> {start_text}")
    } else {
        format!("{start_text} - {end_text}")
    }
}

/// Fixed-point rendering with half-away-from-zero rounding.
#[must_use]
pub fn format_fixed(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return format_plain_number(value);
    }
    if precision <= MAX_DECIMAL_SCALE {
        if let Some(decimal) = Decimal::from_f64(value) {
            let mut rounded =
                decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(precision);
            return rounded.to_string();
        }
    }
    format!("{value:.prec$}", prec = precision as usize)
}

fn format_plain_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value == f64::INFINITY {
        "Infinity".to_owned()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(1.0, 2), "1.00");
    }

    #[test]
    fn plain_number_spells_out_infinities() {
        assert_eq!(format_plain_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_plain_number(f64::INFINITY), "Infinity");
        assert_eq!(format_plain_number(3.0), "3");
    }
}
