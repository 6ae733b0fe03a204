use super::types::Domain;

/// Orders declared bounds into an ascending domain.
///
/// Only the declared bounds count; the data range of attached series is not
/// consulted.
#[must_use]
pub fn resolve_extent(min: f64, max: f64) -> Domain {
    if max < min {
        Domain { lo: max, hi: min }
    } else {
        Domain { lo: min, hi: max }
    }
}
