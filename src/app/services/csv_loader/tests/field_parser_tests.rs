//! Unit tests for field parsing utilities

use chrono::NaiveDate;
use csv::StringRecord;

use crate::app::services::csv_loader::column_map::ColumnMap;
use crate::app::services::csv_loader::field_parsers::{
    get_field, parse_completed_flag, parse_optional_date, parse_optional_score,
    parse_required_text,
};
use crate::app::services::csv_loader::record_parser::parse_training_record;
use crate::constants::fields;
use crate::Error;

fn standard_columns() -> ColumnMap {
    let headers = StringRecord::from(vec!["Name", "Module", "Score", "Date", "Completed"]);
    ColumnMap::from_headers(&headers).unwrap()
}

fn row(fields: Vec<&str>) -> StringRecord {
    StringRecord::from(fields)
}

#[test]
fn test_column_map_reports_all_missing_fields_sorted() {
    let headers = StringRecord::from(vec!["Name", "Email"]);
    let err = ColumnMap::from_headers(&headers).unwrap_err();

    match err {
        Error::MissingRequiredFields { fields } => {
            assert_eq!(fields, vec!["Completed", "Date", "Module", "Score"]);
        }
        other => panic!("expected MissingRequiredFields, got {:?}", other),
    }
}

#[test]
fn test_column_map_ignores_header_order_and_padding() {
    let headers = StringRecord::from(vec![" Completed ", "Score", "Date", "Module", "Name"]);
    let columns = ColumnMap::from_headers(&headers).unwrap();

    assert_eq!(columns.index_of(fields::COMPLETED), Some(0));
    assert_eq!(columns.index_of(fields::NAME), Some(4));
    assert!(columns.has_column(fields::SCORE));
    assert!(!columns.has_column("Email"));
}

#[test]
fn test_required_text_trims_and_rejects_empty() {
    let columns = standard_columns();

    let ok = row(vec!["  Alice  ", "Safety", "90", "2024-01-01", "yes"]);
    assert_eq!(
        parse_required_text(&ok, &columns, fields::NAME).unwrap(),
        "Alice"
    );

    let blank_name = row(vec!["   ", "Safety", "90", "2024-01-01", "yes"]);
    assert!(parse_required_text(&blank_name, &columns, fields::NAME).is_err());
}

#[test]
fn test_optional_score_blank_and_malformed() {
    let columns = standard_columns();

    let blank = row(vec!["Alice", "Safety", "", "2024-01-01", "yes"]);
    assert_eq!(parse_optional_score(&blank, &columns).unwrap(), None);

    let valid = row(vec!["Alice", "Safety", " 82.5 ", "2024-01-01", "yes"]);
    assert_eq!(parse_optional_score(&valid, &columns).unwrap(), Some(82.5));

    let malformed = row(vec!["Alice", "Safety", "ninety", "2024-01-01", "yes"]);
    let err = parse_optional_score(&malformed, &columns).unwrap_err();
    assert!(err.to_string().contains("ninety"));
}

#[test]
fn test_completed_flag_accepts_only_yes() {
    let columns = standard_columns();

    for value in ["yes", "Yes", "YES", "  yes  "] {
        let record = row(vec!["Alice", "Safety", "90", "2024-01-01", value]);
        assert!(parse_completed_flag(&record, &columns), "value: {value:?}");
    }

    for value in ["no", "", "y", "true", "1", "yess"] {
        let record = row(vec!["Alice", "Safety", "90", "2024-01-01", value]);
        assert!(!parse_completed_flag(&record, &columns), "value: {value:?}");
    }
}

#[test]
fn test_optional_date_is_lenient() {
    let columns = standard_columns();

    let valid = row(vec!["Alice", "Safety", "90", "2024-01-01", "yes"]);
    assert_eq!(
        parse_optional_date(&valid, &columns),
        NaiveDate::from_ymd_opt(2024, 1, 1)
    );

    let malformed = row(vec!["Alice", "Safety", "90", "01/02/2024", "yes"]);
    assert_eq!(parse_optional_date(&malformed, &columns), None);

    let blank = row(vec!["Alice", "Safety", "90", "", "yes"]);
    assert_eq!(parse_optional_date(&blank, &columns), None);
}

#[test]
fn test_get_field_handles_short_rows() {
    let columns = standard_columns();

    // Row with fewer cells than the header has columns
    let short = row(vec!["Alice", "Safety"]);
    assert_eq!(get_field(&short, &columns, fields::NAME), Some("Alice"));
    assert_eq!(get_field(&short, &columns, fields::SCORE), None);
    assert_eq!(get_field(&short, &columns, fields::COMPLETED), None);
}

#[test]
fn test_record_parser_builds_full_record() {
    let columns = standard_columns();
    let record = row(vec!["Alice", "Safety", "90", "2024-01-01", "yes"]);

    let parsed = parse_training_record(&record, &columns).unwrap();
    assert_eq!(parsed.name, "Alice");
    assert_eq!(parsed.module, "Safety");
    assert_eq!(parsed.score, Some(90.0));
    assert!(parsed.completed);
    assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 1, 1));
}

#[test]
fn test_record_parser_degrades_date_and_flag_but_not_score() {
    let columns = standard_columns();

    // Bad date and unknown flag survive as None / false
    let tolerated = row(vec!["Alice", "Safety", "", "garbage", "maybe"]);
    let parsed = parse_training_record(&tolerated, &columns).unwrap();
    assert_eq!(parsed.score, None);
    assert_eq!(parsed.date, None);
    assert!(!parsed.completed);

    // A malformed score rejects the whole row
    let rejected = row(vec!["Alice", "Safety", "9O", "2024-01-01", "yes"]);
    assert!(parse_training_record(&rejected, &columns).is_err());
}
