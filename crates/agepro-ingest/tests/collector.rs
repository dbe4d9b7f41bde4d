use std::fs;
use std::path::{Path, PathBuf};

use agepro_ingest::{Collector, IngestError, collect_records};
use agepro_model::{Record, SizeMb};

const LUPUS: &str = "\
Region,Disk,Band,Molecule,Link,Data Type,Link Imagen,Size (MB)
Lupus,Sz65,B6,CO,https://example.org/lupus/Sz65/B6/Sz65_CO.fits,Cube   data,,12.5
Lupus,Sz65,B6,13CO,https://example.org/lupus/Sz65/B6/Sz65_13CO.fits/,Moment 0,,\t3.25\t
,,,,,,,

Lupus,Sz66,B6,C18O,https://example.org/lupus/Sz66/B6/Sz66_C18O.fits,Cube data,,
";

const USCO: &str = "\
Region,Disk,Band,Molecule,Link,Data Type,Link Imagen,Size (MB)
UpperSco,J1,B7,CO,https://example.org/usco/J1/B7/J1_CO.fits,Continuum,,abc
UpperSco,J2,B7
UpperSco,J2,B7,CO,   ,Continuum,,1
";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn collects_in_file_then_line_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let lupus = write(dir.path(), "lupus.csv", LUPUS);
    let usco = write(dir.path(), "usco.csv", USCO);

    let records = collect_records(&[lupus, usco]).expect("collect");

    let summary: Vec<(usize, &str, &str)> = records
        .iter()
        .map(|r| (r.id, r.disk.as_str(), r.molecule.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, "Sz65", "12CO"),
            (1, "Sz65", "13CO"),
            (2, "Sz66", "C18O"),
            (3, "J1", "12CO"),
        ]
    );
    assert!(records.iter().all(|r| r.region != "Region"));
    assert!(records.iter().all(|r| !r.region.is_empty() && !r.url.is_empty()));
}

#[test]
fn normalizes_fields_and_defaults_size() {
    let dir = tempfile::tempdir().expect("temp dir");
    let lupus = write(dir.path(), "lupus.csv", LUPUS);
    let usco = write(dir.path(), "usco.csv", USCO);

    let records = collect_records(&[lupus, usco]).expect("collect");

    assert_eq!(records[0].data_type, "Cube data");
    assert_eq!(records[0].size_mb, SizeMb::Megabytes(12.5));
    assert_eq!(records[1].size_mb, SizeMb::Megabytes(3.25));
    assert_eq!(records[1].filename(), "Sz65_13CO.fits");
    assert_eq!(records[2].size_mb, SizeMb::Unknown);
    assert_eq!(records[3].size_mb, SizeMb::Unknown);
    assert_eq!(records[3].target_dir(), "AGEPRO_DATA/UpperSco/J1/B7/12CO");
}

#[test]
fn file_stats_count_every_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let usco = write(dir.path(), "usco.csv", USCO);

    let mut collector = Collector::new();
    let stats = collector.ingest_files(&[usco]).expect("ingest");

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].rows, 4);
    assert_eq!(stats[0].accepted, 1);
    assert_eq!(stats[0].skipped, 3);
    assert_eq!(collector.len(), 1);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let present = write(dir.path(), "lupus.csv", LUPUS);
    let missing = dir.path().join("missing.csv");

    let err = collect_records(&[present, missing.clone()]).expect_err("missing file");
    match err {
        IngestError::FileOpen { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn header_skipped_in_every_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let header_only = write(
        dir.path(),
        "empty.csv",
        "Region,Disk,Band,Molecule,Link,Data Type,Link Imagen,Size (MB)\n",
    );
    let usco = write(dir.path(), "usco.csv", USCO);

    let records = collect_records(&[header_only, usco]).expect("collect");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 0);
    assert_eq!(records[0].region, "UpperSco");
}

fn collect_with_line_ending(dir: &Path, ending: &str) -> Vec<Record> {
    let lupus = write(
        dir,
        &format!("lupus-{}.csv", ending.len()),
        &LUPUS.replace('\n', ending),
    );
    let usco = write(
        dir,
        &format!("usco-{}.csv", ending.len()),
        &USCO.replace('\n', ending),
    );
    collect_records(&[lupus, usco]).expect("collect")
}

#[test]
fn line_endings_do_not_change_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let unix = collect_with_line_ending(dir.path(), "\n");
    assert_eq!(unix.len(), 4);

    let windows = collect_with_line_ending(dir.path(), "\r\n");
    assert_eq!(windows, unix);

    let classic_mac = collect_with_line_ending(dir.path(), "\r");
    assert_eq!(classic_mac, unix);
}

#[test]
fn bare_carriage_return_file_keeps_every_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write(
        dir.path(),
        "mac.csv",
        "Region,Disk,Band,Molecule,Link,Data Type,Link Imagen,Size (MB)\r\
         Lupus,Sz65,B6,CO,http://x/a.fits,Cube,,1\r\
         Lupus,Sz66,B6,CO,http://x/b.fits,Cube,,2\r",
    );

    let mut collector = Collector::new();
    let stats = collector.ingest_file(&path).expect("ingest");

    assert_eq!((stats.rows, stats.accepted, stats.skipped), (3, 2, 1));
    let ids: Vec<(usize, &str)> = collector
        .records()
        .iter()
        .map(|r| (r.id, r.disk.as_str()))
        .collect();
    assert_eq!(ids, vec![(0, "Sz65"), (1, "Sz66")]);
}
