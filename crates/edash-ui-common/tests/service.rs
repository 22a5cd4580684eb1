//! Dashboard service against a dataset on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use edash_core::Celsius;
use edash_energy::{MissingValuePolicy, Selection};
use edash_io::TableCache;
use edash_thermal::SimulationParams;
use edash_ui_common::{DashboardConfig, DashboardService, Error};
use tempfile::tempdir;

const DATASET: &str = "\
country,year,biofuel_electricity,coal_electricity,gas_electricity,hydro_electricity,nuclear_electricity,oil_electricity,other_renewable_electricity,solar_electricity,wind_electricity
World,2020,1,38,22,16,10,2,1,5,5
World,2021,1,36,22,16,10,2,1,6,6
Norway,2021,0,0,1,88,0,0,0,0,11
Poland,2021,1,70,10,2,0,1,0,6,10
Gapland,2021,1,,9,,,,,,
";

fn service_for(path: &Path) -> DashboardService {
    let mut config = DashboardConfig::default();
    config.data.path = path.to_path_buf();
    DashboardService::with_config(config)
}

#[test]
fn energy_page_for_default_selection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("energy.csv");
    fs::write(&path, DATASET).unwrap();
    let service = service_for(&path);

    let page = service.energy_page(&service.default_selection()).unwrap();
    assert!(!page.is_empty());
    assert_eq!(page.year_options, [2020, 2021]);
    assert_eq!(page.country_options, ["Norway", "Poland", "World"]);
    assert_eq!(page.metrics.summary.rows, 2);
    assert_eq!(page.metrics.mean_total.formatted(), "100.0");
    assert_eq!(page.metrics.mean_renewable_share.formatted(), "28.0%");
    assert_eq!(page.metrics.mean_non_renewable_share.formatted(), "71.0%");
    assert_eq!(page.time_series.height(), 4);
    assert_eq!(page.composition.height(), 16);
    assert_eq!(page.table.height(), 2);
}

#[test]
fn ranking_uses_configured_top_n() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("energy.csv");
    fs::write(&path, DATASET).unwrap();
    let service = service_for(&path);
    service.config().write().energy.top_n = 2;

    let sel = Selection::new([2021], ["World", "Norway", "Poland"]);
    let page = service.energy_page(&sel).unwrap();
    let ranked = page.ranking.column("country").unwrap().utf8().unwrap();
    assert_eq!(page.ranking.height(), 2);
    assert_eq!(ranked.get(0), Some("Poland"));
    assert_eq!(ranked.get(1), Some("World"));
}

#[test]
fn empty_selection_renders_na() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("energy.csv");
    fs::write(&path, DATASET).unwrap();
    let service = service_for(&path);

    let page = service.energy_page(&Selection::new([1990], ["World"])).unwrap();
    assert!(page.is_empty());
    for metric in page.metrics.as_array() {
        assert_eq!(metric.formatted(), "N/A");
    }
    assert_eq!(page.ranking.height(), 0);
}

#[test]
fn zero_policy_keeps_incomplete_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("energy.csv");
    fs::write(&path, DATASET).unwrap();
    let service = service_for(&path);

    let strict = service.derived_table().unwrap();
    service.config().write().data.missing_values = MissingValuePolicy::TreatAsZero;
    let lenient = service.derived_table().unwrap();
    assert_eq!(strict.height(), 4);
    assert_eq!(lenient.height(), 5);
}

#[test]
fn repeated_pages_reuse_cached_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("energy.csv");
    fs::write(&path, DATASET).unwrap();

    let cache = Arc::new(TableCache::new());
    let mut config = DashboardConfig::default();
    config.data.path = path.clone();
    let service = DashboardService::with_cache(config, Arc::clone(&cache));

    service.energy_page(&service.default_selection()).unwrap();
    let first = cache.get_or_load(&path).unwrap();
    service
        .energy_page(&Selection::new([2021], ["Norway"]))
        .unwrap();
    let second = cache.get_or_load(&path).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn missing_dataset_is_load_failure() {
    let dir = tempdir().unwrap();
    let service = service_for(&dir.path().join("absent.csv"));
    assert!(matches!(
        service.derived_table(),
        Err(Error::LoadFailed { .. })
    ));
}

#[test]
fn wrong_dataset_is_energy_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("weather.csv");
    fs::write(&path, "country,year,rain\nWorld,2020,3\n").unwrap();
    let service = service_for(&path);
    assert!(matches!(
        service.energy_page(&Selection::default()),
        Err(Error::Energy(_))
    ));
}

#[test]
fn cooling_page_from_defaults() {
    let service = DashboardService::with_config(DashboardConfig::default());
    let page = service.cooling_page(&service.default_params()).unwrap();

    assert_eq!(page.frame.shape(), (181, 3));
    assert_eq!(page.final_concrete.formatted(), "35.2 °C");
    assert_eq!(page.final_grass.formatted(), "25.7 °C");
    assert_eq!(page.final_concrete.label, "Final temperature - Concrete");
}

#[test]
fn cooling_page_follows_sliders() {
    let service = DashboardService::with_config(DashboardConfig::default());
    let params = SimulationParams {
        initial_temp: Celsius(70.0),
        ambient_temp: Celsius(15.0),
        duration_minutes: 30,
        coefficient_concrete: 0.0,
        coefficient_grass: 0.05,
    };
    let page = service.cooling_page(&params).unwrap();
    assert_eq!(page.run.concrete().len(), 31);
    assert_eq!(page.final_concrete.formatted(), "70.0 °C");
    assert!(page.run.final_temperatures().grass < Celsius(70.0));
}
