use chrono::{DateTime, Utc};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Column carrying the observation timestamp in tabledap responses
pub const TIME_COLUMN: &str = "time";

/// Column carrying the observation depth for profile responses
pub const DEPTH_COLUMN: &str = "observation_depth";

/// Errors that can occur when parsing a tabledap CSV response.
#[derive(Debug, PartialEq, Clone)]
pub enum FrameError {
    MissingTimeColumn,
    BadTimestamp(String),
    CsvError(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::MissingTimeColumn => {
                write!(f, "response has no \"{}\" column", TIME_COLUMN)
            }
            FrameError::BadTimestamp(cell) => write!(f, "unparseable timestamp: {}", cell),
            FrameError::CsvError(detail) => write!(f, "csv error: {}", detail),
        }
    }
}

impl std::error::Error for FrameError {}

/// A single observation report: a timestamp, an optional depth, and one
/// optional value per frame variable. A `None` value means the platform
/// reported nothing for that variable.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ObservationRow {
    pub time: DateTime<Utc>,
    pub depth: Option<f64>,
    /// 0-based position of this row within its dive (rows sharing a
    /// timestamp); always 0 for surface data
    pub dive_row: usize,
    /// One slot per frame variable, in frame column order
    pub values: Vec<Option<f64>>,
}

impl ObservationRow {
    pub fn new(time: DateTime<Utc>, depth: Option<f64>, values: Vec<Option<f64>>) -> Self {
        ObservationRow {
            time,
            depth,
            dive_row: 0,
            values,
        }
    }
}

/// An immutable table of observation rows for one query's response.
///
/// Frames are never modified after construction; every downstream
/// transformation reads from the frame and produces fresh output. The
/// no-data sentinel stands in when a category had no query to run or
/// the upstream fetch returned nothing.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ObservationFrame {
    variables: Vec<String>,
    rows: Vec<ObservationRow>,
    no_data: bool,
}

impl ObservationFrame {
    /// Build a frame, numbering each row within its dive
    pub fn new(variables: Vec<String>, mut rows: Vec<ObservationRow>) -> Self {
        let mut dive_counts: HashMap<DateTime<Utc>, usize> = HashMap::new();
        for row in rows.iter_mut() {
            let count = dive_counts.entry(row.time).or_insert(0);
            row.dive_row = *count;
            *count += 1;
        }
        ObservationFrame {
            variables,
            rows,
            no_data: false,
        }
    }

    /// The sentinel frame for a category with nothing to show
    pub fn no_data() -> Self {
        ObservationFrame {
            variables: Vec::new(),
            rows: Vec::new(),
            no_data: true,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.no_data
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[ObservationRow] {
        &self.rows
    }

    /// Position of a variable in each row's `values`, if present
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == label)
    }

    pub fn has_variable(&self, label: &str) -> bool {
        self.column_index(label).is_some()
    }

    /// Parse a tabledap CSV response body into a frame.
    ///
    /// ERDDAP emits a units row directly under the header; it is skipped.
    /// Empty, "NaN" and non-finite cells become `None`. An unparseable
    /// timestamp is malformed data and fails the whole response.
    pub fn from_erddap_csv(body: &str) -> Result<Self, FrameError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(body.as_bytes());
        let headers = rdr
            .headers()
            .map_err(|e| FrameError::CsvError(e.to_string()))?
            .clone();
        let time_index = headers
            .iter()
            .position(|h| h == TIME_COLUMN)
            .ok_or(FrameError::MissingTimeColumn)?;
        let depth_index = headers.iter().position(|h| h == DEPTH_COLUMN);
        let mut variables: Vec<String> = Vec::new();
        let mut value_indices: Vec<usize> = Vec::new();
        for (index, name) in headers.iter().enumerate() {
            if index == time_index || Some(index) == depth_index {
                continue;
            }
            variables.push(name.to_string());
            value_indices.push(index);
        }

        let mut rows: Vec<ObservationRow> = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| FrameError::CsvError(e.to_string()))?;
            // units row
            if index == 0 {
                continue;
            }
            let time_cell = record.get(time_index).unwrap_or("");
            let time = osmc_utils::time::parse_time(time_cell)
                .map_err(|_| FrameError::BadTimestamp(time_cell.to_string()))?;
            let depth = depth_index.and_then(|i| parse_value(record.get(i).unwrap_or("")));
            let values = value_indices
                .iter()
                .map(|&i| parse_value(record.get(i).unwrap_or("")))
                .collect();
            rows.push(ObservationRow::new(time, depth, values));
        }
        Ok(ObservationFrame::new(variables, rows))
    }
}

/// Read a numeric cell. ERDDAP writes missing values as "NaN" or an
/// empty cell; both, along with anything non-finite, become `None`.
fn parse_value(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SURFACE_CSV: &str = "\
time,sst,slp
UTC,degree_C,hPa
2020-03-10T12:00:00Z,18.2,1013.1
2020-03-10T13:00:00Z,NaN,1012.8
2020-03-10T14:00:00Z,18.4,
";

    const DEPTH_CSV: &str = "\
time,observation_depth,ztmp,zsal
UTC,m,degree_C,PSU
2020-03-10T06:00:00Z,0.0,17.9,33.1
2020-03-10T06:00:00Z,10.0,16.2,33.4
2020-03-10T06:00:00Z,20.0,14.8,33.9
2020-03-10T18:00:00Z,0.0,18.1,33.0
2020-03-10T18:00:00Z,12.0,15.9,33.5
";

    #[test]
    fn test_parse_surface_csv() {
        let frame = ObservationFrame::from_erddap_csv(SURFACE_CSV).unwrap();
        assert!(!frame.is_no_data());
        assert_eq!(frame.variables(), &["sst", "slp"]);
        assert_eq!(frame.rows().len(), 3);
        let first = &frame.rows()[0];
        assert_eq!(
            first.time,
            Utc.with_ymd_and_hms(2020, 3, 10, 12, 0, 0).unwrap()
        );
        assert_eq!(first.depth, None);
        assert_eq!(first.values, vec![Some(18.2), Some(1013.1)]);
    }

    #[test]
    fn test_nan_and_empty_cells_become_none() {
        let frame = ObservationFrame::from_erddap_csv(SURFACE_CSV).unwrap();
        assert_eq!(frame.rows()[1].values, vec![None, Some(1012.8)]);
        assert_eq!(frame.rows()[2].values, vec![Some(18.4), None]);
    }

    #[test]
    fn test_dive_rows_numbered_within_timestamp() {
        let frame = ObservationFrame::from_erddap_csv(DEPTH_CSV).unwrap();
        assert_eq!(frame.variables(), &["ztmp", "zsal"]);
        let dive_rows: Vec<usize> = frame.rows().iter().map(|r| r.dive_row).collect();
        assert_eq!(dive_rows, vec![0, 1, 2, 0, 1]);
        assert_eq!(frame.rows()[1].depth, Some(10.0));
    }

    #[test]
    fn test_surface_rows_all_dive_row_zero() {
        let frame = ObservationFrame::from_erddap_csv(SURFACE_CSV).unwrap();
        assert!(frame.rows().iter().all(|r| r.dive_row == 0));
    }

    #[test]
    fn test_missing_time_column() {
        let body = "sst,slp\ndegree_C,hPa\n18.2,1013.1\n";
        assert_eq!(
            ObservationFrame::from_erddap_csv(body),
            Err(FrameError::MissingTimeColumn)
        );
    }

    #[test]
    fn test_bad_timestamp_is_malformed() {
        let body = "time,sst\nUTC,degree_C\nyesterday,18.2\n";
        assert_eq!(
            ObservationFrame::from_erddap_csv(body),
            Err(FrameError::BadTimestamp(String::from("yesterday")))
        );
    }

    #[test]
    fn test_header_and_units_only_is_empty() {
        let body = "time,sst\nUTC,degree_C\n";
        let frame = ObservationFrame::from_erddap_csv(body).unwrap();
        assert!(frame.is_empty());
        assert!(!frame.is_no_data());
        assert_eq!(frame.variables(), &["sst"]);
    }

    #[test]
    fn test_no_data_sentinel() {
        let frame = ObservationFrame::no_data();
        assert!(frame.is_no_data());
        assert!(frame.is_empty());
        assert!(frame.variables().is_empty());
    }

    #[test]
    fn test_column_index() {
        let frame = ObservationFrame::from_erddap_csv(DEPTH_CSV).unwrap();
        assert_eq!(frame.column_index("ztmp"), Some(0));
        assert_eq!(frame.column_index("zsal"), Some(1));
        assert_eq!(frame.column_index("sst"), None);
        assert!(frame.has_variable("zsal"));
    }
}
