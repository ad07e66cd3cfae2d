//! Presentation derivation over an analysis result.
//!
//! Everything here is purely derived from `BatteryAnalysis`; no computation
//! that affects the forecast or classification lives in this module.

use crate::application::analysis_service::BatteryAnalysis;
use crate::domain::battery::{BatterySample, HealthStatus, PredictionResult};
use std::fmt::Write as _;

/// Colored status badge as shown on the analysis screen.
pub struct StatusBadge {
    pub label: &'static str,
    pub color_hex: &'static str,
}

/// Downsampled health-score series for charting.
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub points: Vec<f64>,
}

/// Keep every 5th sample to match the mobile chart density.
const CHART_STRIDE: usize = 5;

pub struct BatteryReportViewModel;

impl BatteryReportViewModel {
    pub fn status_badge(status: HealthStatus) -> StatusBadge {
        match status {
            HealthStatus::Excellent => StatusBadge {
                label: "Excellent",
                color_hex: "#22C55E",
            },
            HealthStatus::Good => StatusBadge {
                label: "Good",
                color_hex: "#3B82F6",
            },
            HealthStatus::Fair => StatusBadge {
                label: "Fair",
                color_hex: "#F59E0B",
            },
            HealthStatus::Poor => StatusBadge {
                label: "Poor",
                color_hex: "#EF4444",
            },
        }
    }

    /// Every `CHART_STRIDE`-th sample, labeled by days before the most
    /// recent one ("10d", "5d", "Now").
    pub fn health_chart(samples: &[BatterySample]) -> ChartSeries {
        let n = samples.len();
        let mut labels = Vec::new();
        let mut points = Vec::new();

        for (i, sample) in samples.iter().enumerate() {
            if i % CHART_STRIDE != 0 && i != n - 1 {
                continue;
            }
            let days_ago = n - 1 - i;
            labels.push(if days_ago == 0 {
                "Now".to_string()
            } else {
                format!("{days_ago}d")
            });
            points.push(sample.health_score);
        }

        ChartSeries { labels, points }
    }

    /// The one-line forecast summary of the analysis screen.
    pub fn prediction_summary(prediction: &PredictionResult) -> String {
        match prediction.forecast.last() {
            Some(value) => format!(
                "Based on your usage patterns, your battery health is predicted to be {:.1}% in {} days.",
                value,
                prediction.forecast.len()
            ),
            None => "No forecast requested.".to_string(),
        }
    }
}

/// Plain-text rendering of a full analysis, used by the CLI.
pub fn render_text(analysis: &BatteryAnalysis) -> String {
    let badge = BatteryReportViewModel::status_badge(analysis.prediction.status);
    let chart = BatteryReportViewModel::health_chart(&analysis.samples);

    let mut out = String::new();
    let _ = writeln!(out, "Battery Health Analysis");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out, "Status: {} ({})", badge.label, badge.color_hex);

    let _ = writeln!(out, "\nHealth trend:");
    for (label, point) in chart.labels.iter().zip(&chart.points) {
        let _ = writeln!(out, "  {label:>5}  {point:.1}%");
    }

    if !analysis.prediction.forecast.is_empty() {
        let _ = writeln!(out, "\nForecast:");
        for (k, value) in analysis.prediction.forecast.iter().enumerate() {
            let _ = writeln!(out, "  +{}d  {value:.1}%", k + 1);
        }
        let _ = writeln!(
            out,
            "\n{}",
            BatteryReportViewModel::prediction_summary(&analysis.prediction)
        );
    }

    if analysis.prediction.recommendations.is_empty() {
        let _ = writeln!(out, "\nNo recommendations, battery usage looks healthy.");
    } else {
        let _ = writeln!(out, "\nRecommendations:");
        for rec in &analysis.prediction.recommendations {
            let _ = writeln!(out, "  - {rec}");
        }
    }

    out
}
