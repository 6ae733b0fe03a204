/// Maps `value` linearly from `domain` into `range`.
///
/// With `clamp` set, values outside `domain` land on the nearest `range`
/// bound. A degenerate domain maps every value to the middle of `range`.
#[must_use]
pub fn linear_map(value: f64, domain: [f64; 2], range: [f64; 2], clamp: bool) -> f64 {
    let span = domain[1] - domain[0];
    if span == 0.0 {
        return (range[0] + range[1]) / 2.0;
    }

    let mut normalized = (value - domain[0]) / span;
    if clamp {
        normalized = normalized.clamp(0.0, 1.0);
    }
    normalized * (range[1] - range[0]) + range[0]
}
