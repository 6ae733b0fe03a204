use visual_range::api::{RangeFormatter, format_range};
use visual_range::core::Domain;

#[test]
fn open_lower_bound_renders_less_than() {
    let label = format_range(f64::NEG_INFINITY, Some(10.0), Domain::UNBOUNDED, 0, None);
    assert_eq!(label, "< 10");
}

#[test]
fn open_upper_bound_renders_greater_than() {
    let label = format_range(10.0, Some(f64::INFINITY), Domain::UNBOUNDED, 0, None);
    assert_eq!(label, "> 10");
}

#[test]
fn closed_range_is_rounded_to_precision() {
    let label = format_range(1.234, Some(5.678), Domain { lo: 0.0, hi: 10.0 }, 1, None);
    assert_eq!(label, "1.2 - 5.7");
}

#[test]
fn single_value_label_without_end() {
    let label = format_range(3.14159, None, Domain::UNBOUNDED, 2, None);
    assert_eq!(label, "3.14");
}

#[test]
fn precision_zero_rounds_half_away_from_zero() {
    let label = format_range(9.5, Some(20.0), Domain::UNBOUNDED, 0, None);
    assert_eq!(label, "10 - 20");
}

#[test]
fn finite_domain_bounds_act_as_sentinels() {
    let domain = Domain { lo: 0.0, hi: 10.0 };
    assert_eq!(format_range(0.0, Some(5.0), domain, 0, None), "< 5");
    assert_eq!(format_range(5.0, Some(10.0), domain, 0, None), "> 5");
}

#[test]
fn template_substitutes_min_and_max_for_open_bounds() {
    let formatter = RangeFormatter::template("{value} to {value2}");
    assert_eq!(
        format_range(
            f64::NEG_INFINITY,
            Some(5.0),
            Domain::UNBOUNDED,
            0,
            Some(&formatter)
        ),
        "min to 5"
    );
    assert_eq!(
        format_range(5.0, Some(f64::INFINITY), Domain::UNBOUNDED, 0, Some(&formatter)),
        "5 to max"
    );
}

#[test]
fn template_formats_closed_bounds_with_precision() {
    let formatter = RangeFormatter::template("[{value}, {value2}]");
    let label = format_range(1.25, Some(2.5), Domain::UNBOUNDED, 2, Some(&formatter));
    assert_eq!(label, "[1.25, 2.50]");
}

#[test]
fn template_single_value_leaves_upper_placeholder_empty() {
    let formatter = RangeFormatter::template("value: {value}{value2}");
    let label = format_range(3.0, None, Domain::UNBOUNDED, 0, Some(&formatter));
    assert_eq!(label, "value: 3");
}

#[test]
fn callback_receives_raw_values_and_wins() {
    let formatter =
        RangeFormatter::callback(|start, end| format!("{start}:{}", end.unwrap_or_default()));
    let label = format_range(1.5, Some(2.25), Domain::UNBOUNDED, 0, Some(&formatter));
    assert_eq!(label, "1.5:2.25");
}
