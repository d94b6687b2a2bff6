use chrono::{TimeZone, Utc};
use msf_inventory::aggregate::{CATCH_ALL_CATEGORY, ReportBuilder, categorize, format_timestamp};
use msf_inventory::model::ItemType;

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn groups_by_first_segment_keeping_full_identifier() {
    let categories = categorize(&ids(&[
        "windows/smb/ms17_010",
        "linux/http/foo",
        "windows/http/bar",
        "standalone",
    ]));

    assert_eq!(categories["windows"], ids(&["windows/smb/ms17_010", "windows/http/bar"]));
    assert_eq!(categories["linux"], ids(&["linux/http/foo"]));
    assert_eq!(categories[CATCH_ALL_CATEGORY], ids(&["standalone"]));
}

#[test]
fn categorization_is_lossless() {
    let identifiers = ids(&["a/1", "b/2", "a/1", "c", "a/3/4", "c"]);

    let categories = categorize(&identifiers);

    let total: usize = categories.values().map(Vec::len).sum();
    assert_eq!(total, identifiers.len());
}

#[test]
fn report_counts_follow_filtered_lists() {
    let mut builder = ReportBuilder::new();
    builder.add(ItemType::Auxiliary, &ids(&["scanner/http/title", "scanner/smb/version"]));
    builder.add(ItemType::Encoder, &ids(&["x86/shikata_ga_nai"]));
    builder.add(ItemType::Nop, &[]);

    let report = builder.build();

    assert_eq!(report.count_for(ItemType::Auxiliary), 2);
    assert_eq!(report.count_for(ItemType::Encoder), 1);
    assert_eq!(report.count_for(ItemType::Nop), 0);
    assert_eq!(report.metadata.total_modules, 3);
    assert!(report.categories_for(ItemType::Nop).is_some_and(|map| map.is_empty()));
}

#[test]
fn re_adding_a_type_replaces_it() {
    let mut builder = ReportBuilder::new();
    builder.add(ItemType::Post, &ids(&["a/b", "c/d"]));
    builder.add(ItemType::Post, &ids(&["e/f"]));

    let report = builder.build();

    assert_eq!(report.metadata.total_modules, 1);
}

#[test]
fn report_document_shape() {
    let mut builder = ReportBuilder::new();
    builder.add(ItemType::Exploit, &ids(&["windows/smb/ms17_010"]));
    builder.add(ItemType::Encoder, &ids(&["x86/shikata_ga_nai"]));
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

    let report = builder.build_at(at);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["metadata"]["generated_at"], "2024-05-01T12:30:00.000000Z");
    assert_eq!(json["metadata"]["total_modules"], 2);
    assert_eq!(json["metadata"]["by_type"]["exploit"], 1);
    assert_eq!(json["modules"]["exploit"]["windows"][0], "windows/smb/ms17_010");
    assert_eq!(json["modules"]["encoder"]["x86"][0], "x86/shikata_ga_nai");

    let by_type: Vec<&String> = json["metadata"]["by_type"].as_object().unwrap().keys().collect();
    assert_eq!(by_type, vec!["encoder", "exploit"]);
}

#[test]
fn timestamp_is_utc_iso8601() {
    let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

    assert_eq!(format_timestamp(at), "2026-01-02T03:04:05.000000Z");
}
