use agepro_model::{Record, SizeMb};
use agepro_output::CatalogSummary;

fn record(id: usize, region: &str, disk: &str, molecule: &str, data_type: &str) -> Record {
    Record {
        id,
        region: region.to_string(),
        disk: disk.to_string(),
        band: "B6".to_string(),
        molecule: molecule.to_string(),
        url: format!("https://example.org/{disk}_{molecule}.fits"),
        data_type: data_type.to_string(),
        size_mb: SizeMb::Megabytes(1.5),
    }
}

#[test]
fn distinct_values_are_sorted() {
    let records = vec![
        record(0, "UpperSco", "J2", "13CO", "Cube data"),
        record(1, "Lupus", "Sz65", "12CO", "Continuum"),
        record(2, "UpperSco", "J1", "12CO", "Cube data"),
    ];

    let summary = CatalogSummary::from_records(&records);

    assert_eq!(summary.total, 3);
    assert!((summary.total_size_mb - 4.5).abs() < 1e-9);
    let regions: Vec<&str> = summary.regions.iter().map(String::as_str).collect();
    assert_eq!(regions, vec!["Lupus", "UpperSco"]);
    let disks: Vec<&str> = summary.disks.iter().map(String::as_str).collect();
    assert_eq!(disks, vec!["J1", "J2", "Sz65"]);
    assert_eq!(summary.bands.len(), 1);
    let molecules: Vec<&str> = summary.molecules.iter().map(String::as_str).collect();
    assert_eq!(molecules, vec!["12CO", "13CO"]);
    assert_eq!(summary.data_types.len(), 2);
}

#[test]
fn fields_follow_report_order() {
    let summary = CatalogSummary::from_records(&[]);
    let labels: Vec<&str> = summary.fields().iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec!["Regions", "Disks", "Bands", "Molecules", "Data Types"]
    );
    assert_eq!(summary.total, 0);
}
