use std::collections::HashMap;

use titledb_catalog::{Catalog, VersionHistory, build_catalog};
use titledb_core::{IdError, TitleAttributes};

fn attrs(id: &str, name: &str, release_date: i64) -> TitleAttributes {
    TitleAttributes::new(id)
        .with_name(name)
        .with_release_date(release_date)
}

fn history(entries: &[(u64, &str)]) -> VersionHistory {
    entries.iter().map(|(v, d)| (*v, d.to_string())).collect()
}

fn sample_records() -> Vec<(String, TitleAttributes)> {
    vec![
        (
            "0100A2C3D4E50000".into(),
            attrs("0100A2C3D4E50000", "Example Quest", 20230615),
        ),
        (
            "0100a2c3d4e50800".into(),
            attrs("0100a2c3d4e50800", "Example Quest Update", 0),
        ),
        (
            "0100a2c3d4e51001".into(),
            attrs("0100a2c3d4e51001", "Example Quest: Expansion Pass", 20231201),
        ),
        (
            "0100a2c3d4e51002".into(),
            attrs("0100a2c3d4e51002", "Example Quest: Costume Pack", 615),
        ),
        (
            "01007ef00011e000".into(),
            attrs("01007ef00011e000", "Other Game", 20170303),
        ),
    ]
}

fn sample_histories() -> HashMap<String, VersionHistory> {
    HashMap::from([(
        "0100a2c3d4e50000".to_string(),
        history(&[(65536, "2023-07-01"), (131072, "2023-09-12")]),
    )])
}

#[test]
fn groups_base_update_and_dlc_under_one_key() {
    let catalog = build_catalog(sample_records(), &sample_histories());
    assert_eq!(catalog.len(), 2);

    let title = catalog.get("0100a2c3d4e50").unwrap();
    let base = title.attributes.as_ref().unwrap();
    assert_eq!(base.name, "Example Quest");
    assert_eq!(base.parsed_release_date, "2023-06-15");

    let updates = title.updates.as_ref().unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[&131072], "2023-09-12");

    assert_eq!(title.dlc.len(), 2);
    let pass = &title.dlc["0100a2c3d4e51001"];
    assert_eq!(pass.parsed_release_date, "2023-12-01");
    assert_eq!(title.dlc["0100a2c3d4e51002"].parsed_release_date, "615");

    let other = catalog.get("01007ef00011e").unwrap();
    assert_eq!(other.attributes.as_ref().unwrap().parsed_release_date, "2017-03-03");
    assert!(other.updates.is_none());
    assert!(other.dlc.is_empty());
}

#[test]
fn dlc_keys_are_own_lowercased_ids() {
    let records = vec![(
        "0100A2C3D4E5B01F".to_string(),
        attrs("0100A2C3D4E5B01F", "Pack", 0),
    )];
    let catalog = build_catalog(records, &HashMap::new());
    let title = catalog.get("0100a2c3d4e5a").unwrap();
    assert!(title.dlc.contains_key("0100a2c3d4e5b01f"));
    assert!(!title.dlc.contains_key("0100a2c3d4e5a"));
}

#[test]
fn visiting_order_does_not_change_the_catalog() {
    let histories = sample_histories();
    let forward = build_catalog(sample_records(), &histories);

    let mut reversed = sample_records();
    reversed.reverse();
    assert_eq!(build_catalog(reversed, &histories), forward);

    let mut rotated = sample_records();
    rotated.rotate_left(2);
    assert_eq!(build_catalog(rotated, &histories), forward);

    let hashed: HashMap<String, TitleAttributes> = sample_records().into_iter().collect();
    assert_eq!(build_catalog(hashed, &histories), forward);
}

#[test]
fn update_alone_creates_aggregate_without_base() {
    let records = vec![(
        "0100a2c3d4e50800".to_string(),
        attrs("0100a2c3d4e50800", "", 0),
    )];
    let catalog = build_catalog(records, &sample_histories());

    let title = catalog.get("0100a2c3d4e50").unwrap();
    assert!(title.attributes.is_none());
    assert_eq!(title.updates.as_ref().unwrap().len(), 2);
    assert!(title.dlc.is_empty());
}

#[test]
fn dlc_alone_creates_aggregate_without_base() {
    let records = vec![(
        "0100a2c3d4e51001".to_string(),
        attrs("0100a2c3d4e51001", "Expansion Pass", 0),
    )];
    let catalog = build_catalog(records, &HashMap::new());

    let title = catalog.get("0100a2c3d4e50").unwrap();
    assert!(title.attributes.is_none());
    assert!(title.updates.is_none());
    assert_eq!(title.dlc.len(), 1);
    assert_eq!(title.display_name(), Some("Expansion Pass"));
}

#[test]
fn update_without_history_gets_empty_history() {
    let records = vec![(
        "01007ef00011e800".to_string(),
        attrs("01007ef00011e800", "", 0),
    )];
    let catalog = build_catalog(records, &sample_histories());
    let title = catalog.get("01007ef00011e").unwrap();
    assert_eq!(title.updates.as_ref().map(|h| h.len()), Some(0));
    assert_eq!(title.latest_update(), None);
}

#[test]
fn history_lookup_ignores_case() {
    let records = vec![(
        "0100a2c3d4e50800".to_string(),
        attrs("0100a2c3d4e50800", "", 0),
    )];
    let histories = HashMap::from([(
        "0100A2C3D4E50000".to_string(),
        history(&[(65536, "2023-07-01")]),
    )]);
    let catalog = build_catalog(records, &histories);
    let title = catalog.get("0100a2c3d4e50").unwrap();
    assert_eq!(title.latest_update(), Some((65536, "2023-07-01")));
}

#[test]
fn mixed_case_ids_aggregate_together() {
    let records = vec![
        (
            "0100A2C3D4E50000".to_string(),
            attrs("0100A2C3D4E50000", "Example Quest", 0),
        ),
        (
            "0100a2c3d4e51001".to_string(),
            attrs("0100a2c3d4e51001", "Pass", 0),
        ),
        (
            "0100A2C3D4E50800".to_string(),
            attrs("0100A2C3D4E50800", "", 0),
        ),
    ];
    let catalog = build_catalog(records, &sample_histories());
    assert_eq!(catalog.len(), 1);
    let title = catalog.get("0100a2c3d4e50").unwrap();
    assert!(title.attributes.is_some());
    assert!(title.updates.is_some());
    assert_eq!(title.dlc.len(), 1);
}

#[test]
fn case_only_duplicates_resolve_the_same_in_any_order() {
    let records = vec![
        (
            "0100A2C3D4E50000".to_string(),
            attrs("0100A2C3D4E50000", "upper", 0),
        ),
        (
            "0100a2c3d4e50000".to_string(),
            attrs("0100a2c3d4e50000", "lower", 0),
        ),
        (
            "0100A2C3D4E51001".to_string(),
            attrs("0100A2C3D4E51001", "dlc upper", 0),
        ),
        (
            "0100a2c3D4e51001".to_string(),
            attrs("0100a2c3D4e51001", "dlc mixed", 0),
        ),
    ];
    let forward = build_catalog(records.clone(), &HashMap::new());
    let mut reversed = records;
    reversed.reverse();
    assert_eq!(build_catalog(reversed, &HashMap::new()), forward);

    let title = forward.get("0100a2c3d4e50").unwrap();
    assert_eq!(title.attributes.as_ref().unwrap().name, "lower");
    // Neither DLC key is lowercase, so the smaller raw key wins
    assert_eq!(title.dlc["0100a2c3d4e51001"].name, "dlc upper");
}

#[test]
fn case_only_duplicate_histories_prefer_lowercase_key() {
    let records = vec![(
        "0100a2c3d4e50800".to_string(),
        attrs("0100a2c3d4e50800", "", 0),
    )];
    let histories = HashMap::from([
        (
            "0100A2C3D4E50000".to_string(),
            history(&[(65536, "upper")]),
        ),
        (
            "0100a2c3d4e50000".to_string(),
            history(&[(65536, "lower")]),
        ),
    ]);
    let catalog = build_catalog(records, &histories);
    let title = catalog.get("0100a2c3d4e50").unwrap();
    assert_eq!(title.latest_update(), Some((65536, "lower")));
}

#[test]
fn malformed_ids_are_skipped_and_recorded() {
    let mut records = sample_records();
    records.push(("abc".into(), attrs("abc", "Short", 0)));
    records.push(("0100a2c3d4e50001".into(), attrs("x", "Underflow", 0)));
    records.push(("0100a2c3d4e5g001".into(), attrs("x", "Bad digit", 0)));

    let catalog = build_catalog(records, &sample_histories());
    assert_eq!(catalog, {
        let mut expected = build_catalog(sample_records(), &sample_histories());
        let rejects = build_catalog(
            vec![
                ("abc".to_string(), TitleAttributes::default()),
                ("0100a2c3d4e50001".to_string(), TitleAttributes::default()),
                ("0100a2c3d4e5g001".to_string(), TitleAttributes::default()),
            ],
            &HashMap::new(),
        );
        expected.merge(rejects);
        expected
    });

    let rejected = catalog.rejected();
    assert_eq!(rejected.len(), 3);
    assert!(matches!(rejected["abc"], IdError::TooShort { len: 3, .. }));
    assert!(matches!(
        rejected["0100a2c3d4e50001"],
        IdError::DigitUnderflow(_)
    ));
    assert!(matches!(
        rejected["0100a2c3d4e5g001"],
        IdError::InvalidDigit { digit: 'g', .. }
    ));
    assert_eq!(catalog.stats().rejected, 3);
}

#[test]
fn empty_inputs_build_empty_catalog() {
    let catalog = build_catalog(Vec::new(), &sample_histories());
    assert!(catalog.is_empty());
    assert_eq!(catalog, Catalog::new());
}
