//! Cross-patient weight vs. shunt size data and its trend analysis.

use pcs_ingest::PatientTable;
use pcs_model::{
    AnalysisPoint, PatientId, ScatterDataset, ScatterMode, ScatterPoint, ShuntAnalysis, TrendLine,
};

/// Collect one point per record with both surgical weight and shunt size.
///
/// Records missing either value are dropped, never imputed. Every point
/// whose identifier equals `current` is tagged as the current patient.
pub fn scatter_dataset(table: &PatientTable, current: &PatientId) -> ScatterDataset {
    let points = table
        .iter()
        .filter_map(|record| {
            let weight_kg = record.surgical_weight_kg?;
            let shunt_mm = record.shunt_size_mm?;
            Some(ScatterPoint {
                patient_id: record.id.clone(),
                weight_kg,
                shunt_mm,
                is_current: &record.id == current,
            })
        })
        .collect();
    ScatterDataset {
        points,
        current_patient_id: current.clone(),
    }
}

/// Project the dataset onto the chosen y axis and fit a trend line.
///
/// x is the point's 1-based rank in the dataset. Ratio mode skips points
/// whose weight is not positive; their rank is left unused.
pub fn shunt_analysis(dataset: &ScatterDataset, mode: ScatterMode) -> ShuntAnalysis {
    let points: Vec<AnalysisPoint> = dataset
        .points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| {
            let y = match mode {
                ScatterMode::Ratio if point.weight_kg > 0.0 => point.shunt_mm / point.weight_kg,
                ScatterMode::Ratio => return None,
                ScatterMode::Size => point.shunt_mm,
            };
            Some(AnalysisPoint {
                x: (index + 1) as f64,
                y,
                patient_id: point.patient_id.clone(),
                is_current: point.is_current,
            })
        })
        .collect();

    let xy: Vec<(f64, f64)> = points.iter().map(|point| (point.x, point.y)).collect();
    let trend = fit_trend(&xy);
    let y_range = points.iter().map(|point| point.y).fold(None, |range, y| {
        Some(match range {
            None => (y, y),
            Some((low, high)) => (f64::min(low, y), f64::max(high, y)),
        })
    });

    ShuntAnalysis {
        mode,
        y_label: mode.axis_label().to_string(),
        points,
        trend,
        y_range,
    }
}

/// Ordinary least-squares line through `points`.
///
/// Returns None when fewer than two distinct x values make the slope
/// undefined.
pub fn fit_trend(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
        let dx = x - mean_x;
        (sxy + dx * (y - mean_y), sxx + dx * dx)
    });
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let min_x = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let max_x = points
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut line = TrendLine {
        slope,
        intercept,
        start: (min_x, 0.0),
        end: (max_x, 0.0),
    };
    line.start.1 = line.at(min_x);
    line.end.1 = line.at(max_x);
    Some(line)
}
