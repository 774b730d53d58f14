// tests/csv_export.rs
use chrono::NaiveDate;
use serde_json::Value;

use pcda_presenter::config::options::{ CsvLayout, EngineConfig };
use pcda_presenter::csv::{ summary_fields, to_csv_string, SUMMARY_LABELS };
use pcda_presenter::schools::SchoolDirectory;
use pcda_presenter::session::{ derive, form::{ DesiredLevel, ResidencyStatus }, SessionForm };

fn sample_form() -> SessionForm {
    let mut form = SessionForm::default();
    form.profile.gpa = "3.6".into();
    form.profile.college_classes = "2".into();
    form.residency = ResidencyStatus::PermanentResident;
    form.desired_level = Some(DesiredLevel::NcaaDII);
    form.credits_taken = 12;
    form.financial.down_payment = 5_000.0;
    form.financial.fafsa_reduction_estimate = 1_500.0;
    form.financial.reduction_per_semester = 500.0;
    form.visits.first = NaiveDate::from_ymd_opt(2025, 9, 14);
    form
}

#[test]
fn wide_layout_is_always_two_lines() {
    let dir = SchoolDirectory::bundled().unwrap();
    let config = EngineConfig::default();

    for n in [0, 1, 3, dir.len()] {
        let mut form = sample_form();
        form.schools = dir.all().iter().take(n).map(|s| s.id.as_str()).collect();
        let fields = summary_fields(&form, &derive(&form, &config), &dir);
        let text = to_csv_string(&fields, CsvLayout::Wide).unwrap();
        assert_eq!(text.lines().count(), 2, "schools={n}");
        assert!(!text.ends_with('\n'));
    }
}

#[test]
fn header_row_lists_labels_in_order() {
    let dir = SchoolDirectory::bundled().unwrap();
    let form = sample_form();
    let fields = summary_fields(&form, &derive(&form, &EngineConfig::default()), &dir);
    let text = to_csv_string(&fields, CsvLayout::Wide).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(header, SUMMARY_LABELS.join(","));
}

#[test]
fn values_are_json_encoded() {
    let dir = SchoolDirectory::bundled().unwrap();
    let mut form = sample_form();
    form.schools = ["summit-ridge", "coastal-tech"].into_iter().collect();
    let fields = summary_fields(&form, &derive(&form, &EngineConfig::default()), &dir);

    let get = |label: &str| fields.iter().find(|f| f.label == label).unwrap().value.clone();
    assert_eq!(get("GPA"), Value::from("3.6"));
    assert_eq!(get("Residency"), Value::from("pr"));
    assert_eq!(get("FAFSA Eligible"), Value::from("Yes"));
    assert_eq!(get("Desired Level"), Value::from("NCAA DII"));
    assert_eq!(get("Down Payment"), Value::from(5000));
    assert_eq!(get("Work Reduction (Total)"), Value::from(1000));
    assert_eq!(get("Net Remaining Balance"), Value::from(24250));
    assert_eq!(get("Pathway Length"), Value::from("2"));
    assert_eq!(get("Visit Date #1"), Value::from("2025-09-14"));
    assert_eq!(get("Visit Date #2"), Value::from("TBD"));
    // Directory order, not pick order.
    assert_eq!(
        get("Selected Schools"),
        Value::from("Coastal Institute of Technology; Summit Ridge University")
    );

    let data_row = to_csv_string(&fields, CsvLayout::Wide).unwrap().lines().nth(1).unwrap().to_string();
    assert!(data_row.starts_with("\"3.6\",\"2\",\"pr\",\"Yes\",12,\"NCAA DII\",5000,1500,1000,24250,"));
}

#[test]
fn quotes_in_text_fields_are_escaped() {
    let dir = SchoolDirectory::bundled().unwrap();
    let mut form = sample_form();
    form.profile.gpa = "3.9 \"weighted\"".into();
    let fields = summary_fields(&form, &derive(&form, &EngineConfig::default()), &dir);
    let text = to_csv_string(&fields, CsvLayout::Wide).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with(r#""3.9 \"weighted\"","#));
}

#[test]
fn key_value_layout_has_one_row_per_field() {
    let dir = SchoolDirectory::bundled().unwrap();
    let form = sample_form();
    let fields = summary_fields(&form, &derive(&form, &EngineConfig::default()), &dir);
    let text = to_csv_string(&fields, CsvLayout::KeyValue).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + SUMMARY_LABELS.len());
    assert_eq!(lines[0], "Field,Value");
    assert_eq!(lines[1], r#""GPA","3.6""#);
    assert_eq!(lines[5], r#""Credits Taken",12"#);
}

#[test]
fn ineligible_fafsa_exports_zero_reduction() {
    let dir = SchoolDirectory::bundled().unwrap();
    let mut form = sample_form();
    form.residency = ResidencyStatus::VisaHolder;
    let fields = summary_fields(&form, &derive(&form, &EngineConfig::default()), &dir);
    let get = |label: &str| fields.iter().find(|f| f.label == label).unwrap().value.clone();
    assert_eq!(get("FAFSA Eligible"), Value::from("No"));
    assert_eq!(get("FAFSA Reduction"), Value::from(0));
    assert_eq!(get("Residency"), Value::from("visa"));
}
