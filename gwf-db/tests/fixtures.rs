//! Checks against the bundled artifact directory.

use gwf_core::artifact::ArtifactSet;
use gwf_core::forecast::ForecastTable;
use gwf_core::model::Trace;
use gwf_core::well::WellKey;
use gwf_data::residual::analyze_residuals;
use gwf_db::Database;

const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures");

fn fixture_db() -> Database {
    let artifacts = ArtifactSet::from_dir(FIXTURE_DIR).unwrap();
    Database::with_artifacts(&artifacts).unwrap()
}

#[test]
fn every_well_has_a_forecast() {
    let db = fixture_db();
    for key in WellKey::ALL {
        assert!(db.has_forecast(key).unwrap(), "{} has no forecast", key);
    }
}

#[test]
fn forecast_dates_are_strictly_increasing() {
    let artifacts = ArtifactSet::from_dir(FIXTURE_DIR).unwrap();
    for (key, files) in artifacts.iter() {
        let Some(csv) = &files.forecast_csv else {
            continue;
        };
        let table = ForecastTable::parse_csv(csv).unwrap();
        assert!(!table.is_empty(), "{} has an empty table", key);
        assert!(
            table.records.windows(2).all(|w| w[0].date < w[1].date),
            "{} dates are not strictly increasing",
            key
        );
    }
}

#[test]
fn forecasts_run_past_the_last_observation() {
    let db = fixture_db();
    let span = db.query_date_span(WellKey::Withams).unwrap().unwrap();
    let observed = db.query_observed_series(WellKey::Withams).unwrap();
    let last_observed = &observed
        .iter()
        .rev()
        .find(|p| p.value.is_some())
        .unwrap()
        .date;
    assert!(last_observed < &span.last);
    assert!(observed.last().unwrap().value.is_none());
    assert_eq!(span.first, "2019-01-06");
}

#[test]
fn capecharles_has_no_scores() {
    let db = fixture_db();
    assert!(db.has_forecast(WellKey::Capecharles).unwrap());
    assert!(!db.has_scores(WellKey::Capecharles).unwrap());
    assert!(db.query_scores(WellKey::Capecharles).unwrap().is_empty());
}

#[test]
fn greenbush_reads_fallback_columns() {
    let db = fixture_db();
    let observed = db.query_observed_series(WellKey::Greenbush).unwrap();
    assert!(observed.iter().any(|p| p.value.is_some()));
    assert_eq!(db.query_scores(WellKey::Greenbush).unwrap().len(), 3);
}

#[test]
fn scores_cover_the_same_models_as_the_forecasts() {
    let db = fixture_db();
    for key in [WellKey::Withams, WellKey::Greenbush, WellKey::Churchneck] {
        let mut models = db.query_models(key).unwrap();
        models.sort();
        let scored: Vec<String> = db
            .query_scores(key)
            .unwrap()
            .into_iter()
            .map(|s| s.model)
            .collect();
        assert_eq!(scored, models, "{}", key);
    }
}

#[test]
fn churchneck_cnn_residuals_start_late() {
    let db = fixture_db();
    let cnn = db.query_residual_inputs(WellKey::Churchneck, "CNN").unwrap();
    let lstm = db.query_residual_inputs(WellKey::Churchneck, "LSTM").unwrap();
    assert!(cnn.len() < lstm.len());
    assert!(cnn.first().unwrap().date.as_str() >= "2020-01-01");

    let analysis = analyze_residuals("CNN", &cnn).unwrap();
    assert_eq!(analysis.points.len(), cnn.len());
}

#[test]
fn absent_model_yields_no_trace() {
    let db = fixture_db();
    let series = db
        .query_trace_series(WellKey::Withams, &Trace::Model("GRU".into()))
        .unwrap();
    assert!(series.is_empty());
    assert!(db.query_residual_inputs(WellKey::Withams, "GRU").unwrap().is_empty());
}
