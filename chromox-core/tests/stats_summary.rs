use chromox_core::*;

fn chry() -> ChromosomeAnnotation {
    let json = r#"{
        "length": 57227415,
        "regions": {
            "PAR": [{"start": 10001, "end": 2781479, "name": "PAR1"}, {"start": 56887903, "end": 57217415}],
            "AMPLICONIC": [{"start": 22500000, "end": 23000000}],
            "STR": [{"start": 12000000, "end": 12000100}]
        }
    }"#;
    serde_json::from_str(json).unwrap()
}

#[test]
fn summary_counts_every_status_and_region_type() {
    let variants = vec![
        VariantMarker::new(2_887_824, VariantStatus::Confirmed).with_allele_state(AlleleState::Derived),
        VariantMarker::new(14_000_000, VariantStatus::Novel).with_allele_state(AlleleState::Ancestral),
        VariantMarker::new(15_000_000, VariantStatus::Conflict),
        VariantMarker::new(16_000_000, VariantStatus::Pending).with_allele_state(AlleleState::Derived),
    ];
    let summary = summarize(&chry(), &variants);

    assert_eq!(summary.total_variants, 4);
    assert_eq!(summary.derived, 2);
    assert_eq!(summary.ancestral, 1);
    for status in VariantStatus::ALL {
        assert_eq!(summary.status_count(status), 1, "{}", status);
    }
    assert_eq!(summary.region_count(RegionType::Par), 2);
    assert_eq!(summary.region_count(RegionType::Str), 1);
    assert_eq!(summary.region_count(RegionType::Centromere), 0);
}

#[test]
fn summary_serializes_region_keys_in_wire_form() {
    let summary = summarize(&chry(), &[]);
    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"PAR\":2"));
    assert!(json.contains("\"AMPLICONIC\":1"));
}

#[test]
fn mapper_agrees_with_annotation_length() {
    let ann = chry();
    let mapper = CoordinateMapper::new(ann.length, 800.0, 40.0).unwrap();
    assert_eq!(mapper.pos_to_x(0), 40.0);
    assert_eq!(mapper.pos_to_x(ann.length), 760.0);
}
