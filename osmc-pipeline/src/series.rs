use chrono::{DateTime, Utc};
use osmc_erddap::frame::ObservationFrame;
use serde::{Deserialize, Serialize};

/// A single charted (time, value) point
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

/// One variable's displayable time series.
///
/// `visible` is false when the frame held no usable value for the
/// variable, so the host can collapse the panel instead of rendering
/// an empty chart.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct VariableSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
    pub visible: bool,
}

impl VariableSeries {
    /// A hidden series with no points
    pub fn hidden(label: &str) -> Self {
        VariableSeries {
            label: label.to_string(),
            points: Vec::new(),
            visible: false,
        }
    }
}

/// Extract one variable's series from a frame, dropping rows where the
/// variable has no value. A variable the frame never carried, or one
/// with no values at all, yields a hidden series rather than an error.
pub fn extract_series(frame: &ObservationFrame, label: &str) -> VariableSeries {
    if frame.is_no_data() {
        return VariableSeries::hidden(label);
    }
    let column = match frame.column_index(label) {
        Some(column) => column,
        None => return VariableSeries::hidden(label),
    };
    let points: Vec<SeriesPoint> = frame
        .rows()
        .iter()
        .filter_map(|row| {
            row.values
                .get(column)
                .copied()
                .flatten()
                .filter(|v| v.is_finite())
                .map(|value| SeriesPoint {
                    time: row.time,
                    value,
                })
        })
        .collect();
    let visible = !points.is_empty();
    VariableSeries {
        label: label.to_string(),
        points,
        visible,
    }
}

/// Extract a series per label, in label order
pub fn extract_all(frame: &ObservationFrame, labels: &[&str]) -> Vec<VariableSeries> {
    labels
        .iter()
        .map(|label| extract_series(frame, label))
        .collect()
}
