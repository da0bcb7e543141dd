use std::fs;
use std::path::PathBuf;

use survey_charts::ChartError;
use survey_charts::data::{
    CsvDataSource, DataSource, StaticDataSource, Testimonial, parse_csv_rows,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("survey-charts-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn csv_source_reads_relative_to_root() {
    let dir = scratch_dir("root");
    fs::write(
        dir.join("testimonials.csv"),
        "text,gender,age\n  Keeps me sane  ,Female,24\n\"Bitter, but needed\",Male,41\n",
    )
    .expect("write csv");

    let rows = CsvDataSource::default()
        .with_root(&dir)
        .load("testimonials.csv")
        .expect("load");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["text"], "Keeps me sane");
    assert_eq!(rows[1]["text"], "Bitter, but needed");
    let headers: Vec<&str> = rows[0].keys().map(String::as_str).collect();
    assert_eq!(headers, vec!["text", "gender", "age"]);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn csv_source_honours_custom_delimiter() {
    let dir = scratch_dir("delimiter");
    fs::write(dir.join("quotes.tsv"), "quote;gender;age\nStrong;Female;33\n").expect("write");

    let rows = CsvDataSource::default()
        .with_root(&dir)
        .with_delimiter(b';')
        .load("quotes.tsv")
        .expect("load");
    let item = Testimonial::from_row(&rows[0]);
    assert_eq!(item, Testimonial::new("Strong", "Female", "33"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_file_reports_its_path() {
    let dir = scratch_dir("missing");
    let err = CsvDataSource::default()
        .with_root(&dir)
        .load("nope.csv")
        .expect_err("missing file");

    match err {
        ChartError::DataSource { path, .. } => assert!(path.ends_with("nope.csv")),
        other => panic!("unexpected error: {other}"),
    }
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn static_source_serves_registered_paths_only() {
    let source = StaticDataSource::default().with_file("a.csv", "text\nhello\n");

    assert_eq!(source.load("a.csv").expect("load").len(), 1);
    assert!(matches!(
        source.load("b.csv"),
        Err(ChartError::DataSource { path, .. }) if path == "b.csv"
    ));
}

#[test]
fn header_only_file_has_no_rows() {
    assert!(parse_csv_rows("text,gender,age\n").expect("parse").is_empty());
}

#[test]
fn extra_cells_are_dropped() {
    let rows = parse_csv_rows("text,gender\nOne,Male,unexpected\n").expect("parse");
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[0]["gender"], "Male");
}

#[test]
fn testimonial_mapping_accepts_header_aliases() {
    let rows = parse_csv_rows("Comment, GENDER ,Age Group\nSmooth,Female,18-24\n").expect("parse");
    let item = Testimonial::from_row(&rows[0]);

    assert_eq!(item.text, "Smooth");
    assert_eq!(item.gender, "Female");
    assert_eq!(item.age, "18-24");
    assert_eq!(item.attribution(), "Female, 18-24");
}
