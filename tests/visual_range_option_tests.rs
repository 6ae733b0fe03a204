use visual_range::api::{
    DEFAULT_INACTIVE_COLOR, DimensionRef, LegacyColor, SeriesIndexDeclaration, StateDeclaration,
    VisualRangeOption,
};
use visual_range::core::ItemSize;
use visual_range::visual::{ChannelSet, ChannelType, VisualValue};

#[test]
fn defaults_apply_when_nothing_is_declared() {
    let option = VisualRangeOption::from_json_str("{}").expect("empty option");

    assert_eq!(option.resolved_min(), 0.0);
    assert_eq!(option.resolved_max(), 200.0);
    assert_eq!(option.resolved_precision(), 0);
    assert_eq!(option.resolved_item_size(), ItemSize::new(20.0, 140.0));
    assert_eq!(option.resolved_inactive_color(), DEFAULT_INACTIVE_COLOR);
    assert_eq!(option.color, LegacyColor::Unset);
    assert_eq!(
        option.color.resolve(),
        Some(vec!["#006edd".to_owned(), "#e0ffff".to_owned()])
    );
}

#[test]
fn state_declarations_parse_as_shorthand_or_explicit() {
    let option = VisualRangeOption::from_json_str(
        r#"{"inRange": "symbolSize", "outOfRange": {"color": "gray", "opacity": [0.1, 0.2]}}"#,
    )
    .expect("parse option");

    assert_eq!(
        option.in_range,
        Some(StateDeclaration::shorthand(ChannelType::SymbolSize))
    );
    let Some(StateDeclaration::Explicit(out_of_range)) = option.out_of_range else {
        panic!("outOfRange should be explicit");
    };
    assert_eq!(
        out_of_range.channel(ChannelType::Color),
        Some(&VisualValue::texts(&["gray"]))
    );
    assert_eq!(
        out_of_range.get("opacity"),
        Some(&VisualValue::numbers(&[0.1, 0.2]))
    );
}

#[test]
fn legacy_color_null_disables_the_stock_palette() {
    let option = VisualRangeOption::from_json_str(r#"{"color": null}"#).expect("parse option");
    assert_eq!(option.color, LegacyColor::Disabled);
    assert_eq!(option.color.resolve(), None);

    let option =
        VisualRangeOption::from_json_str(r##"{"color": ["#f00", "#0f0"]}"##).expect("parse option");
    assert_eq!(
        option.color,
        LegacyColor::Palette(vec!["#f00".to_owned(), "#0f0".to_owned()])
    );
}

#[test]
fn non_array_legacy_color_is_ignored() {
    let option = VisualRangeOption::from_json_str(r#"{"color": "red"}"#).expect("parse option");
    assert_eq!(option.color, LegacyColor::Unset);

    let option = VisualRangeOption::from_json_str(r##"{"color": ["#f00", 3]}"##)
        .expect("parse option");
    assert_eq!(option.color, LegacyColor::Palette(vec!["#f00".to_owned()]));
}

#[test]
fn explicit_state_skips_values_that_are_not_samples() {
    let option = VisualRangeOption::from_json_str(
        r#"{"outOfRange": {"symbol": "pin", "glow": {"radius": 2}, "blink": null}}"#,
    )
    .expect("parse option");

    let Some(StateDeclaration::Explicit(channels)) = option.out_of_range else {
        panic!("outOfRange should be explicit");
    };
    assert_eq!(channels.len(), 1);
    assert_eq!(
        channels.channel(ChannelType::Symbol),
        Some(&VisualValue::texts(&["pin"]))
    );
}

#[test]
fn target_block_parses_with_a_single_state() {
    let option = VisualRangeOption::from_json_str(r#"{"target": {"outOfRange": "color"}}"#)
        .expect("parse option");

    let target = option.target.expect("target block");
    assert!(target.in_range.is_none());
    assert_eq!(
        target.out_of_range,
        Some(StateDeclaration::shorthand(ChannelType::Color))
    );
}

#[test]
fn series_index_and_dimension_accept_both_shapes() {
    let option = VisualRangeOption::from_json_str(r#"{"seriesIndex": 2, "dimension": "price"}"#)
        .expect("parse option");
    assert_eq!(option.series_index, Some(SeriesIndexDeclaration::One(2)));
    assert_eq!(option.dimension, Some(DimensionRef::Name("price".to_owned())));

    let option = VisualRangeOption::from_json_str(r#"{"seriesIndex": [1, 3], "dimension": 0}"#)
        .expect("parse option");
    assert_eq!(
        option.series_index.as_ref().map(SeriesIndexDeclaration::to_indices),
        Some(vec![1, 3])
    );
    assert_eq!(option.dimension, Some(DimensionRef::Index(0)));
}

#[test]
fn consumer_blocks_parse_per_state() {
    let option = VisualRangeOption::from_json_str(
        r#"{"controller": {"inRange": {"symbol": ["circle", "diamond"]}}}"#,
    )
    .expect("parse option");

    let controller = option.controller.expect("controller block");
    assert!(controller.out_of_range.is_none());
    assert_eq!(
        controller.in_range,
        Some(StateDeclaration::Explicit(ChannelSet::new().with_channel(
            ChannelType::Symbol,
            VisualValue::texts(&["circle", "diamond"])
        )))
    );
}

#[test]
fn merge_overwrites_channels_and_keeps_the_rest() {
    let mut option = VisualRangeOption::new()
        .with_bounds(0.0, 10.0)
        .with_precision(2)
        .with_in_range(
            ChannelSet::new()
                .with_channel(ChannelType::Color, VisualValue::texts(&["blue"]))
                .with_channel(ChannelType::Symbol, VisualValue::texts(&["pin"])),
        );

    let patch = VisualRangeOption::from_json_str(
        r#"{"max": 20, "inRange": {"color": ["red"]}, "outOfRange": "symbol", "color": null}"#,
    )
    .expect("parse patch");
    option.merge(&patch);

    assert_eq!(option.min, Some(0.0));
    assert_eq!(option.max, Some(20.0));
    assert_eq!(option.precision, Some(2));
    assert_eq!(option.color, LegacyColor::Disabled);
    assert_eq!(
        option.in_range,
        Some(StateDeclaration::Explicit(
            ChannelSet::new()
                .with_channel(ChannelType::Color, VisualValue::texts(&["red"]))
                .with_channel(ChannelType::Symbol, VisualValue::texts(&["pin"]))
        ))
    );
    assert_eq!(
        option.out_of_range,
        Some(StateDeclaration::shorthand(ChannelType::Symbol))
    );
}

#[test]
fn merge_replaces_shorthand_with_explicit_and_merges_consumers() {
    let mut option = VisualRangeOption::from_json_str(
        r#"{"inRange": "symbol", "target": {"inRange": {"color": ["a"]}}}"#,
    )
    .expect("parse option");
    let patch = VisualRangeOption::from_json_str(
        r#"{"inRange": {"colorAlpha": [0.5, 1]}, "target": {"outOfRange": {"color": ["b"]}}}"#,
    )
    .expect("parse patch");
    option.merge(&patch);

    assert_eq!(
        option.in_range,
        Some(StateDeclaration::Explicit(ChannelSet::new().with_channel(
            ChannelType::ColorAlpha,
            VisualValue::numbers(&[0.5, 1.0])
        )))
    );
    let target = option.target.expect("target block");
    assert!(target.in_range.is_some());
    assert!(target.out_of_range.is_some());
}

#[test]
fn declared_option_survives_json_round_trip() {
    let option = VisualRangeOption::new()
        .with_bounds(-1.0, 1.0)
        .with_in_range(StateDeclaration::shorthand(ChannelType::Color))
        .with_formatter_template("{value}")
        .with_legacy_color(LegacyColor::Disabled);

    let json = option.to_json_pretty().expect("serialize option");
    let parsed = VisualRangeOption::from_json_str(&json).expect("parse option");
    assert_eq!(parsed, option);
}
