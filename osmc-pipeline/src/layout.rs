use crate::series::VariableSeries;
use serde::{Deserialize, Serialize};

/// Visible-panel count below which panels widen to a double span.
/// A presentation heuristic: with few panels, wider charts fill the row.
pub const DOUBLE_SPAN_THRESHOLD: usize = 4;

/// Column span of a chart panel
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PanelSpan {
    Single,
    Double,
}

/// Presentation hint attached to each series panel
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutHint {
    pub span: PanelSpan,
    pub visible: bool,
}

/// Assign a span to each series based on how many are visible.
/// Hidden series keep a hint too so the output stays index-aligned
/// with the input.
pub fn allocate_layout(series: &[VariableSeries]) -> Vec<LayoutHint> {
    let visible_count = series.iter().filter(|s| s.visible).count();
    let span = if visible_count < DOUBLE_SPAN_THRESHOLD {
        PanelSpan::Double
    } else {
        PanelSpan::Single
    };
    series
        .iter()
        .map(|s| LayoutHint {
            span,
            visible: s.visible,
        })
        .collect()
}
