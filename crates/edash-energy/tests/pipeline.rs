//! End-to-end checks: CSV on disk through the I/O layer into every view.

use std::fs;

use edash_energy::{
    available_countries, available_years, compute, filtered_table, ranking, summary_metrics,
    time_series, yearly_composition, Error, Selection, DEFAULT_TOP_N,
};
use tempfile::tempdir;

const HEADER: &str = "country,year,iso_code,population,biofuel_electricity,coal_electricity,\
gas_electricity,hydro_electricity,nuclear_electricity,oil_electricity,\
other_renewable_electricity,solar_electricity,wind_electricity";

fn write_dataset(rows: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("World_Energy_Consumption.csv");
    let mut body = String::from(HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(&path, body).unwrap();
    (dir, path)
}

#[test]
fn csv_to_views() {
    let (_dir, path) = write_dataset(&[
        "World,2019,OWID_WRL,7700000000,1,40,20,15,10,3,1,5,5",
        "World,2020,OWID_WRL,7800000000,1,38,22,16,10,2,1,5,5",
        "World,2021,OWID_WRL,7900000000,1,36,22,16,10,2,1,6,6",
        "Iceland,2020,ISL,360000,0,0,0,13,0,0,6,0,0",
        "Iceland,2021,ISL,370000,0,0,0,14,0,0,6,0,0",
        "Nowhere,2021,,0,0,0,0,0,0,0,0,0,0",
        "Sparse,2021,SPR,100,,5,5,,,,,,",
    ]);

    let raw = edash_io::read_table(&path).unwrap();
    let derived = compute(&raw).unwrap();

    // zero-total and gap rows are dropped
    assert_eq!(derived.height(), 5);
    assert_eq!(available_years(&derived).unwrap(), [2019, 2020, 2021]);
    assert_eq!(available_countries(&derived).unwrap(), ["Iceland", "World"]);

    let sel = Selection::default();
    let metrics = summary_metrics(&derived, &sel).unwrap();
    assert_eq!(metrics.rows, 2);
    assert!((metrics.mean_total.0 - 100.0).abs() < 1e-9);
    // 2020: 1+16+5+5 = 27, 2021: 1+16+6+6 = 29
    assert!((metrics.mean_renewable_share.0 - 28.0).abs() < 1e-9);
    assert!((metrics.mean_non_renewable_share.0 - 71.0).abs() < 1e-9);

    assert_eq!(time_series(&derived, &sel).unwrap().height(), 4);
    assert_eq!(yearly_composition(&derived, &sel).unwrap().height(), 16);
    assert_eq!(filtered_table(&derived, &sel).unwrap().height(), 2);

    let both = Selection::new([2020, 2021], ["World", "Iceland"]);
    let top = ranking(&derived, &both, DEFAULT_TOP_N).unwrap();
    assert_eq!(top.height(), 2);
    let first = top.column("country").unwrap().utf8().unwrap().get(0);
    assert_eq!(first, Some("World"));
}

#[test]
fn unrelated_table_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("other.csv");
    fs::write(&path, "country,year,gdp\nWorld,2020,1\n").unwrap();

    let raw = edash_io::read_table(&path).unwrap();
    match compute(&raw) {
        Err(Error::MissingColumns { missing }) => assert_eq!(missing.len(), 9),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}
