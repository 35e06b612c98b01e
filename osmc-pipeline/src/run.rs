use crate::layout::allocate_layout;
use crate::payload::{DepthPanel, RenderPayload, SurfacePanel};
use crate::regrid::regrid_depth_profiles;
use crate::series::extract_all;
use log::info;
use osmc_erddap::catalog;
use osmc_erddap::frame::ObservationFrame;
use osmc_erddap::platform::Platform;

/// Depth variables rendered as heatmap panels, in display order
pub const DEPTH_PANEL_VARIABLES: [&str; 2] = ["zsal", "ztmp"];

/// Assemble the render payload for one platform selection from its
/// already-fetched surface and depth frames.
///
/// Surface panels appear for every variable the platform type can
/// report, in catalog order, hidden where the frame held nothing. The
/// depth category always yields its two panels (salinity, temperature),
/// each evaluated for visibility on its own.
pub fn run_pipeline(
    platform: &Platform,
    generation: u64,
    surface_frame: &ObservationFrame,
    depth_frame: &ObservationFrame,
) -> RenderPayload {
    let labels = catalog::surface_variables(&platform.platform_type);
    let series = extract_all(surface_frame, labels);
    let hints = allocate_layout(&series);
    let surface: Vec<SurfacePanel> = series
        .into_iter()
        .zip(hints)
        .map(|(series, hint)| SurfacePanel {
            title: catalog::variable_title(&series.label).to_string(),
            label: series.label,
            points: series.points,
            visible: hint.visible,
            span: hint.span,
        })
        .collect();

    let depth: Vec<DepthPanel> = DEPTH_PANEL_VARIABLES
        .iter()
        .map(|variable| {
            let grid = regrid_depth_profiles(depth_frame, variable);
            DepthPanel {
                variable: variable.to_string(),
                title: catalog::variable_title(variable).to_string(),
                visible: grid.visible,
                grid,
            }
        })
        .collect();

    let payload = RenderPayload {
        platform_code: platform.platform_code.clone(),
        platform_type: platform.platform_type.clone(),
        title: platform.header_title(),
        color: platform.color().to_string(),
        generation,
        surface,
        depth,
    };
    info!(
        "pipeline for {}: {}/{} surface panels visible, {}/{} depth panels visible",
        payload.platform_code,
        payload.surface.iter().filter(|p| p.visible).count(),
        payload.surface.len(),
        payload.depth.iter().filter(|p| p.visible).count(),
        payload.depth.len()
    );
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PanelSpan;
    use chrono::{TimeZone, Utc};
    use osmc_erddap::frame::{ObservationFrame, ObservationRow};
    use osmc_erddap::platform::{Platform, PlatformType};
    use osmc_erddap::query::{build_queries, WindowStart};

    fn platform(code: &str, platform_type: &str) -> Platform {
        Platform {
            platform_code: code.to_string(),
            platform_type: PlatformType::new(platform_type),
            time: Utc.with_ymd_and_hms(2020, 3, 12, 23, 50, 0).unwrap(),
            longitude: -72.317,
            latitude: 34.625,
        }
    }

    fn moored_buoy_surface_frame() -> ObservationFrame {
        let variables = ["sst", "atmp", "slp", "windspd", "winddir", "wvht", "dewpoint"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        let rows = (0..3)
            .map(|hour| {
                ObservationRow::new(
                    Utc.with_ymd_and_hms(2020, 3, 10, 12 + hour, 0, 0).unwrap(),
                    None,
                    vec![
                        Some(18.0 + hour as f64),
                        None,
                        Some(1013.0),
                        None,
                        None,
                        None,
                        None,
                    ],
                )
            })
            .collect();
        ObservationFrame::new(variables, rows)
    }

    #[test]
    fn test_moored_buoy_selection_end_to_end() {
        let platform = platform("41001", "MOORED BUOYS (GENERIC)");
        let pair = build_queries(
            &platform.platform_code,
            &platform.platform_type,
            &WindowStart::NowMinusDays(14),
        );
        let surface_query = pair.surface.unwrap();
        assert_eq!(
            surface_query.variables,
            vec!["time", "sst", "atmp", "slp", "windspd", "winddir", "wvht", "dewpoint"]
        );
        assert!(pair.depth.is_none());

        let payload = run_pipeline(
            &platform,
            1,
            &moored_buoy_surface_frame(),
            &ObservationFrame::no_data(),
        );
        assert_eq!(payload.surface.len(), 7);
        let labels: Vec<&str> = payload.surface.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["sst", "atmp", "slp", "windspd", "winddir", "wvht", "dewpoint"]
        );
        let visible: Vec<&str> = payload
            .surface
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(visible, vec!["sst", "slp"]);
        // 2 visible panels, below the threshold
        assert!(payload
            .surface
            .iter()
            .all(|p| p.span == PanelSpan::Double));
        assert!(payload.depth.iter().all(|p| !p.visible));
    }

    #[test]
    fn test_glider_selection_builds_depth_panels() {
        let platform = platform("ce_383", "GLIDERS");
        let depth_rows = vec![
            ObservationRow::new(
                Utc.with_ymd_and_hms(2020, 3, 10, 6, 0, 0).unwrap(),
                Some(0.0),
                vec![Some(17.9), None],
            ),
            ObservationRow::new(
                Utc.with_ymd_and_hms(2020, 3, 10, 6, 0, 0).unwrap(),
                Some(10.0),
                vec![Some(16.2), None],
            ),
        ];
        let depth_frame = ObservationFrame::new(
            vec![String::from("ztmp"), String::from("zsal")],
            depth_rows,
        );

        let payload = run_pipeline(&platform, 3, &ObservationFrame::no_data(), &depth_frame);
        assert!(payload.surface.is_empty());
        assert_eq!(payload.depth.len(), 2);
        assert_eq!(payload.depth[0].variable, "zsal");
        assert_eq!(payload.depth[0].title, "Salinity");
        assert!(!payload.depth[0].visible);
        assert_eq!(payload.depth[1].variable, "ztmp");
        assert_eq!(payload.depth[1].title, "Temperature");
        assert!(payload.depth[1].visible);
        assert_eq!(payload.generation, 3);
    }

    #[test]
    fn test_no_data_selection_hides_everything() {
        let platform = platform("41001", "MOORED BUOYS (GENERIC)");
        let payload = run_pipeline(
            &platform,
            1,
            &ObservationFrame::no_data(),
            &ObservationFrame::no_data(),
        );
        assert!(!payload.has_visible_panels());
        assert_eq!(payload.surface.len(), 7);
    }

    #[test]
    fn test_payload_carries_platform_identity() {
        let platform = platform("41001", "MOORED BUOYS (GENERIC)");
        let payload = run_pipeline(
            &platform,
            9,
            &ObservationFrame::no_data(),
            &ObservationFrame::no_data(),
        );
        assert_eq!(
            payload.title,
            "Platform code=41001 Platform type=MOORED BUOYS (GENERIC)"
        );
        assert_eq!(payload.color, "#00EAFF");
        assert_eq!(payload.platform_code, "41001");
        assert_eq!(payload.generation, 9);
    }

    #[test]
    fn test_unknown_platform_type_yields_empty_payload() {
        let platform = platform("x1", "SPACE ELEVATOR");
        let payload = run_pipeline(
            &platform,
            1,
            &ObservationFrame::no_data(),
            &ObservationFrame::no_data(),
        );
        assert!(payload.surface.is_empty());
        assert!(!payload.has_visible_panels());
        assert_eq!(payload.color, "#FFFFFF");
    }
}
