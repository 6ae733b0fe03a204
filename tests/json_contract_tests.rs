use visual_range::api::{
    DataKind, DataSourceDescriptor, ResolvedVisualsSnapshot, StateDeclaration, VisualRangeModel,
    VisualRangeOption,
};
use visual_range::core::{Consumer, VisualState};
use visual_range::visual::{ChannelSet, ChannelType, VisualValue};

fn model() -> VisualRangeModel {
    let sources = vec![DataSourceDescriptor::new(0, DataKind::List)];
    let option = VisualRangeOption::new().with_bounds(10.0, 90.0).with_in_range(
        ChannelSet::new()
            .with_channel(ChannelType::Color, VisualValue::texts(&["blue", "red"]))
            .with_channel(ChannelType::SymbolSize, VisualValue::numbers(&[10.0, 40.0])),
    );
    VisualRangeModel::new(option, &sources)
}

#[test]
fn contract_payload_parses_back_to_snapshot() {
    let model = model();
    let json = model
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains("\"schema_version\": 1"));
    assert!(json.contains("\"inRange\""));

    let parsed = ResolvedVisualsSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, model.snapshot());
    assert!(
        parsed
            .mappings
            .record(Consumer::Controller, VisualState::OutOfRange, ChannelType::Symbol)
            .is_some()
    );
}

#[test]
fn bare_snapshot_is_accepted() {
    let snapshot = model().snapshot();
    let json = snapshot.to_json_pretty().expect("serialize snapshot");

    let parsed = ResolvedVisualsSnapshot::from_json_compat_str(&json).expect("parse snapshot");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = model().snapshot();
    let payload = serde_json::json!({
        "schema_version": 2,
        "snapshot": snapshot,
    });

    let result = ResolvedVisualsSnapshot::from_json_compat_str(&payload.to_string());
    assert!(result.is_err());
}

#[test]
fn open_bounds_survive_the_contract() {
    let sources = vec![DataSourceDescriptor::new(0, DataKind::List)];
    let option = VisualRangeOption::new()
        .with_bounds(f64::INFINITY, -5.0)
        .with_in_range(StateDeclaration::shorthand(ChannelType::Color));
    let model = VisualRangeModel::new(option, &sources);

    let json = model
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains("\"Infinity\""));
    assert!(!json.contains("null"));

    let parsed = ResolvedVisualsSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed.extent.lo, -5.0);
    assert_eq!(parsed.extent.hi, f64::INFINITY);
    assert_eq!(parsed, model.snapshot());
}
