use visual_range::api::{
    DataKind, DataSourceDescriptor, DimensionRef, SeriesIndexDeclaration, resolve_data_dimension,
    resolve_targets,
};

fn mixed_sources() -> Vec<DataSourceDescriptor> {
    vec![
        DataSourceDescriptor::new(0, DataKind::List).with_dimensions(["x", "y", "value"]),
        DataSourceDescriptor::new(1, DataKind::Tree),
        DataSourceDescriptor::new(2, DataKind::List).with_dimensions(["lng", "lat"]),
        DataSourceDescriptor::new(3, DataKind::Graph),
    ]
}

#[test]
fn discovery_collects_list_sources_in_order() {
    let selection = resolve_targets(None, &mixed_sources());
    assert_eq!(selection.indices, vec![0, 2]);
    assert!(selection.auto_discovered);
}

#[test]
fn scalar_declaration_is_normalized_to_sequence() {
    let declared = SeriesIndexDeclaration::One(3);
    let selection = resolve_targets(Some(&declared), &mixed_sources());
    assert_eq!(selection.indices, vec![3]);
    assert!(!selection.auto_discovered);
}

#[test]
fn sequence_declaration_is_used_verbatim() {
    let declared = SeriesIndexDeclaration::Many(vec![2, 1, 7]);
    let selection = resolve_targets(Some(&declared), &mixed_sources());
    assert_eq!(selection.indices, vec![2, 1, 7]);
    assert!(!selection.auto_discovered);
}

#[test]
fn discovery_over_no_sources_is_empty() {
    let sources: Vec<DataSourceDescriptor> = Vec::new();
    let selection = resolve_targets(None, &sources);
    assert!(selection.indices.is_empty());
    assert!(selection.auto_discovered);
}

#[test]
fn data_dimension_defaults_to_last_source_dimension() {
    let sources = mixed_sources();
    assert_eq!(
        resolve_data_dimension(None, &sources[0]),
        Some(DimensionRef::Name("value".to_owned()))
    );
    assert_eq!(resolve_data_dimension(None, &sources[1]), None);
}

#[test]
fn declared_data_dimension_wins() {
    let sources = mixed_sources();
    let declared = DimensionRef::Index(0);
    assert_eq!(
        resolve_data_dimension(Some(&declared), &sources[2]),
        Some(DimensionRef::Index(0))
    );
}
