//! End-to-end flow: sample source -> analysis service -> report, plus the
//! generate-then-analyze path through the on-disk store.

use std::fs;
use std::path::PathBuf;
use voltrover::application::analysis_service::BatteryAnalysisService;
use voltrover::domain::ports::SampleSource;
use voltrover::infrastructure::{JsonSampleStore, SyntheticSampleSource};
use voltrover::interfaces::report;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("voltrover-flow-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn synthetic_series_analyzes_end_to_end() {
    let source = SyntheticSampleSource::with_seed(30, 1234);
    let analysis = BatteryAnalysisService::new(7).analyze(&source).unwrap();

    assert_eq!(analysis.samples.len(), 31);
    assert_eq!(analysis.prediction.forecast.len(), 7);

    let text = report::render_text(&analysis);
    assert!(text.contains("Battery Health Analysis"));
    assert!(text.contains("Status:"));
    assert!(text.contains("Now"));
}

#[test]
fn seeded_analysis_is_reproducible_modulo_timestamps() {
    let service = BatteryAnalysisService::new(7);

    let a = service
        .analyze(&SyntheticSampleSource::with_seed(30, 99))
        .unwrap();
    let b = service
        .analyze(&SyntheticSampleSource::with_seed(30, 99))
        .unwrap();

    // Timestamps come from the wall clock; everything derived from the
    // seeded readings must match exactly.
    assert_eq!(a.prediction, b.prediction);
}

#[test]
fn generate_then_analyze_through_the_store() {
    let dir = temp_dir("generate-analyze");
    let store = JsonSampleStore::with_dir(dir.clone()).unwrap();

    let samples = SyntheticSampleSource::with_seed(30, 7).fetch().unwrap();
    store.save(&samples).unwrap();

    let analysis = BatteryAnalysisService::new(7).analyze(&store).unwrap();
    assert_eq!(analysis.samples, samples);
    assert_eq!(analysis.prediction.forecast.len(), 7);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn analyzing_an_empty_store_reports_missing_history() {
    let dir = temp_dir("empty-store");
    let store = JsonSampleStore::with_dir(dir.clone()).unwrap();

    let err = BatteryAnalysisService::new(7).analyze(&store).unwrap_err();
    assert!(format!("{err:#}").contains("No stored battery history"));

    let _ = fs::remove_dir_all(dir);
}
