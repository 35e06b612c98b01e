//! Rendering payload structs for one platform selection.
//!
//! All structs derive `Serialize` so the host UI can consume the
//! finished render state as JSON.

use crate::layout::PanelSpan;
use crate::regrid::DepthGrid;
use crate::series::SeriesPoint;
use osmc_erddap::platform::PlatformType;
use serde::Serialize;

/// One surface chart panel: a variable's time series plus its
/// presentation hints.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SurfacePanel {
    /// Variable label as queried (e.g. "sst")
    pub label: String,
    /// Chart title (e.g. "Sea Surface Temperature")
    pub title: String,
    pub points: Vec<SeriesPoint>,
    /// False collapses the panel entirely
    pub visible: bool,
    pub span: PanelSpan,
}

/// One depth heatmap panel: a variable's regridded profile matrix
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepthPanel {
    /// Variable label as queried (e.g. "zsal")
    pub variable: String,
    /// Chart title (e.g. "Salinity")
    pub title: String,
    pub grid: DepthGrid,
    pub visible: bool,
}

/// Everything the host needs to render one platform selection.
///
/// `generation` is the selection token the run was started with; the
/// host must discard any payload whose token is no longer current.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderPayload {
    pub platform_code: String,
    pub platform_type: PlatformType,
    /// Header line above the charts
    pub title: String,
    /// Marker color of the selected platform
    pub color: String,
    pub generation: u64,
    pub surface: Vec<SurfacePanel>,
    pub depth: Vec<DepthPanel>,
}

impl RenderPayload {
    /// Whether any panel in either category has something to show
    pub fn has_visible_panels(&self) -> bool {
        self.surface.iter().any(|panel| panel.visible)
            || self.depth.iter().any(|panel| panel.visible)
    }
}
