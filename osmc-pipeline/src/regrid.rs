use chrono::{DateTime, Utc};
use osmc_erddap::frame::ObservationFrame;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of points on the shared regular depth axis
pub const DEPTH_AXIS_POINTS: usize = 250;

/// A dense depth-by-time grid of interpolated values for one variable,
/// ready for heatmap rendering.
///
/// Every dive in the source frame is resampled onto the same regular
/// depth axis so the dives stack into one contiguous matrix. A hidden
/// grid has no axis and an empty matrix.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DepthGrid {
    pub variable: String,
    /// Regularly spaced depths, ascending
    pub depths: Vec<f64>,
    /// Dive timestamps, ascending
    pub times: Vec<DateTime<Utc>>,
    /// `matrix[depth_index][time_index]`; `None` where a dive
    /// contributed no usable profile
    pub matrix: Vec<Vec<Option<f64>>>,
    pub visible: bool,
}

impl DepthGrid {
    /// An empty grid for a variable with nothing to show
    pub fn hidden(variable: &str) -> Self {
        DepthGrid {
            variable: variable.to_string(),
            depths: Vec::new(),
            times: Vec::new(),
            matrix: Vec::new(),
            visible: false,
        }
    }
}

/// Resample a frame's depth profiles for one variable onto a shared
/// regular depth axis.
///
/// Rows missing a depth or a value for the variable are dropped first.
/// The remaining rows are partitioned into dives by timestamp, the axis
/// spans the min/max depth over all dives, and each dive is linearly
/// interpolated onto the axis independently. Depths outside a dive's
/// own range take the dive's boundary value (flat extrapolation), so a
/// single-sample dive paints a constant column.
///
/// A frame with no usable rows yields a hidden grid, never a numeric
/// fault. A dive whose depths do not strictly increase contributes an
/// empty column; if every dive is unusable the grid is hidden.
pub fn regrid_depth_profiles(frame: &ObservationFrame, variable: &str) -> DepthGrid {
    if frame.is_no_data() {
        return DepthGrid::hidden(variable);
    }
    let column = match frame.column_index(variable) {
        Some(column) => column,
        None => return DepthGrid::hidden(variable),
    };

    let mut dives: BTreeMap<DateTime<Utc>, Vec<(f64, f64)>> = BTreeMap::new();
    for row in frame.rows() {
        let depth = match row.depth {
            Some(depth) if depth.is_finite() => depth,
            _ => continue,
        };
        let value = match row.values.get(column).copied().flatten() {
            Some(value) if value.is_finite() => value,
            _ => continue,
        };
        dives.entry(row.time).or_default().push((depth, value));
    }
    if dives.is_empty() {
        return DepthGrid::hidden(variable);
    }

    let mut min_depth = f64::INFINITY;
    let mut max_depth = f64::NEG_INFINITY;
    for samples in dives.values() {
        for &(depth, _) in samples {
            min_depth = min_depth.min(depth);
            max_depth = max_depth.max(depth);
        }
    }
    let depths = linspace(min_depth, max_depth, DEPTH_AXIS_POINTS);

    let times: Vec<DateTime<Utc>> = dives.keys().copied().collect();
    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(times.len());
    for (time, samples) in dives.iter() {
        let ordered = samples.windows(2).all(|pair| pair[0].0 < pair[1].0);
        if !ordered {
            log::warn!(
                "dive at {} for {} has non-increasing depths, leaving its column empty",
                time,
                variable
            );
            columns.push(vec![None; DEPTH_AXIS_POINTS]);
            continue;
        }
        let native_depths: Vec<f64> = samples.iter().map(|s| s.0).collect();
        let native_values: Vec<f64> = samples.iter().map(|s| s.1).collect();
        columns.push(
            depths
                .iter()
                .map(|&depth| Some(interpolate_clamped(depth, &native_depths, &native_values)))
                .collect(),
        );
    }

    let mut matrix = vec![vec![None; times.len()]; DEPTH_AXIS_POINTS];
    for (time_index, column) in columns.iter().enumerate() {
        for (depth_index, value) in column.iter().enumerate() {
            matrix[depth_index][time_index] = *value;
        }
    }
    let visible = matrix
        .iter()
        .any(|row| row.iter().any(|value| value.is_some()));
    DepthGrid {
        variable: variable.to_string(),
        depths,
        times,
        matrix,
        visible,
    }
}

/// `count` evenly spaced values from `start` to `stop` inclusive
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let span = stop - start;
    let divisions = (count - 1) as f64;
    (0..count)
        .map(|i| start + span * (i as f64) / divisions)
        .collect()
}

/// Piecewise-linear interpolation of `(xs, ys)` at `x`, clamped to the
/// boundary values outside `[xs.first(), xs.last()]`.
/// `xs` must be nonempty and strictly increasing.
fn interpolate_clamped(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    let upper = xs.partition_point(|&sample| sample < x);
    let lower = upper - 1;
    let fraction = (x - xs[lower]) / (xs[upper] - xs[lower]);
    ys[lower] + fraction * (ys[upper] - ys[lower])
}
