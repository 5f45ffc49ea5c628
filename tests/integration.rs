use galilean_orbits::config::moons::{MoonCatalog, MoonSource};
use galilean_orbits::driver;
use galilean_orbits::error::{DriverError, LoadError, RenderError};
use galilean_orbits::loader::load_moon_series;
use galilean_orbits::plotting::{ChartKind, ChartPresenter, ChartSpec, SvgPresenter};
use std::fs;
use std::path::Path;

/// Keeps every chart it is shown.
#[derive(Default)]
struct RecordingPresenter {
    charts: Vec<ChartSpec>,
}

impl ChartPresenter for RecordingPresenter {
    fn present(&mut self, chart: &ChartSpec) -> Result<(), RenderError> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

fn write_fixture(dir: &Path, moon: &str, rows: &[(&str, f64, f64)]) {
    let mut data = String::from("datetime_str,e,a\n");
    for (t, e, a) in rows {
        data.push_str(&format!("{t},{e},{a}\n"));
    }
    fs::write(dir.join(MoonCatalog::data_file_name(moon)), data).unwrap();
}

fn write_galilean_fixtures(dir: &Path) {
    write_fixture(dir, "Io", &[("2000-01-01", 0.0041, 0.002819)]);
    write_fixture(
        dir,
        "Europa",
        &[("2000-01-01", 0.0094, 0.004486), ("2001-01-01", 0.0101, 0.004485)],
    );
    write_fixture(dir, "Ganymede", &[("2000-01-01", 0.0013, 0.007155)]);
    write_fixture(dir, "Callisto", &[("2000-01-01", 0.0074, 0.012585)]);
}

#[test]
fn four_moons_give_eight_charts_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_galilean_fixtures(dir.path());

    let mut presenter = RecordingPresenter::default();
    let count = driver::run(&MoonCatalog::galilean_in(dir.path()), &mut presenter).unwrap();

    assert_eq!(count, 8);
    let order: Vec<(&str, ChartKind)> = presenter
        .charts
        .iter()
        .map(|c| (c.moon_name.as_str(), c.kind))
        .collect();
    assert_eq!(
        order,
        [
            ("Io", ChartKind::Eccentricity),
            ("Io", ChartKind::OrbitalDistance),
            ("Europa", ChartKind::Eccentricity),
            ("Europa", ChartKind::OrbitalDistance),
            ("Ganymede", ChartKind::Eccentricity),
            ("Ganymede", ChartKind::OrbitalDistance),
            ("Callisto", ChartKind::Eccentricity),
            ("Callisto", ChartKind::OrbitalDistance),
        ]
    );
}

#[test]
fn io_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_galilean_fixtures(dir.path());

    let series = load_moon_series("Io", dir.path().join("Io_1000_years_data.csv")).unwrap();
    assert_eq!(series.len(), 1);
    assert!((series.rows[0].semi_major_axis_m - 4.217224e8).abs() < 1.0);

    let mut presenter = RecordingPresenter::default();
    let catalog = MoonCatalog::new(vec![MoonSource::new(
        "Io",
        dir.path().join("Io_1000_years_data.csv"),
    )]);
    driver::run(&catalog, &mut presenter).unwrap();

    assert_eq!(presenter.charts.len(), 2);
    for chart in &presenter.charts {
        assert_eq!(chart.timestamps, ["2000-01-01"]);
        assert_eq!(chart.points().len(), 1);
        assert_eq!(chart.points()[0].0, 0.0);
    }
    assert_eq!(presenter.charts[0].values, [0.0041]);
    assert_eq!(presenter.charts[1].values, [0.002819 * 1.496e11]);
}

#[test]
fn missing_file_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_galilean_fixtures(dir.path());
    fs::remove_file(dir.path().join("Ganymede_1000_years_data.csv")).unwrap();

    let mut presenter = RecordingPresenter::default();
    let err = driver::run(&MoonCatalog::galilean_in(dir.path()), &mut presenter).unwrap_err();

    assert_eq!(err.moon(), "Ganymede");
    assert!(matches!(
        err,
        DriverError::Load {
            source: LoadError::FileNotFound(_),
            ..
        }
    ));
    // Io and Europa were already presented
    assert_eq!(presenter.charts.len(), 4);
}

#[test]
fn missing_column_aborts_before_any_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Io.csv");
    fs::write(&path, "datetime_str,a\n2000-01-01,0.002819\n").unwrap();

    let mut presenter = RecordingPresenter::default();
    let catalog = MoonCatalog::new(vec![MoonSource::new("Io", &path)]);
    let err = driver::run(&catalog, &mut presenter).unwrap_err();

    match err {
        DriverError::Load {
            source: LoadError::MissingColumn { column, .. },
            ..
        } => assert_eq!(column, "e"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(presenter.charts.is_empty());
}

#[test]
fn malformed_value_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Europa.csv");
    fs::write(&path, "datetime_str,e,a\n2000-01-01,0.0094,n/a\n").unwrap();

    let mut presenter = RecordingPresenter::default();
    let catalog = MoonCatalog::new(vec![MoonSource::new("Europa", &path)]);
    let err = driver::run(&catalog, &mut presenter).unwrap_err();

    assert!(matches!(
        err,
        DriverError::Load {
            source: LoadError::MalformedValue { .. },
            ..
        }
    ));
}

#[test]
fn svg_presenter_writes_eight_files() {
    let dir = tempfile::tempdir().unwrap();
    write_galilean_fixtures(dir.path());
    let out = dir.path().join("output");

    let mut presenter = SvgPresenter::new(&out);
    let count = driver::run(&MoonCatalog::galilean_in(dir.path()), &mut presenter).unwrap();

    assert_eq!(count, 8);
    assert_eq!(presenter.presented().len(), 8);
    assert_eq!(presenter.presented()[0], out.join("Io_eccentricity.svg"));
    assert_eq!(presenter.presented()[7], out.join("Callisto_orbital_distance.svg"));
    for path in presenter.presented() {
        assert!(path.exists(), "{} was not written", path.display());
    }

    let svg = fs::read_to_string(out.join("Io_orbital_distance.svg")).unwrap();
    assert!(svg.contains("Orbital Distance of Io Over 1000 Years"));
    assert!(svg.contains("Distance (m)"));
}

#[test]
fn empty_catalog_presents_nothing() {
    let mut presenter = RecordingPresenter::default();
    let count = driver::run(&MoonCatalog::new(Vec::new()), &mut presenter).unwrap();

    assert_eq!(count, 0);
    assert!(presenter.charts.is_empty());
}
