//! Observation fetch and query inspection commands.

use log::info;
use osmc_erddap::fetch::{fetch_frame, fetch_platforms};
use osmc_erddap::platform::PlatformType;
use osmc_erddap::query::{build_queries, WindowStart};
use osmc_pipeline::run::run_pipeline;
use osmc_pipeline::selection::SelectionTracker;

/// Print the tabledap URLs a selection of this platform would fetch,
/// as JSON. A category the platform type cannot report is null.
pub fn run_urls(
    base_url: &str,
    platform_code: &str,
    platform_type: &str,
    window_start: &WindowStart,
) -> anyhow::Result<()> {
    let platform_type = PlatformType::new(platform_type);
    let pair = build_queries(platform_code, &platform_type, window_start);
    let calls = serde_json::json!({
        "surface": pair.surface.as_ref().map(|q| q.to_url(base_url)),
        "depth": pair.depth.as_ref().map(|q| q.to_url(base_url)),
    });
    println!("{}", serde_json::to_string_pretty(&calls)?);
    Ok(())
}

/// Fetch one platform's surface and depth observations and emit the
/// assembled render payload as JSON.
///
/// The platform's type is resolved from the location snapshot for the
/// same window; a platform that has not reported within the window is
/// an error.
pub async fn run_observations(
    base_url: &str,
    platform_code: &str,
    window_start: &WindowStart,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let client = reqwest::Client::new();

    let platforms = fetch_platforms(&client, base_url, window_start)
        .await
        .map_err(|e| anyhow::anyhow!("platform fetch failed: {}", e))?;
    let platform = platforms
        .iter()
        .find(|p| p.platform_code == platform_code)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "platform {} has not reported since {}",
                platform_code,
                window_start.to_erddap()
            )
        })?;
    info!(
        "Selected {} ({})",
        platform.platform_code, platform.platform_type
    );

    let pair = build_queries(platform_code, &platform.platform_type, window_start);
    let tracker = SelectionTracker::new();
    let generation = tracker.begin();

    let surface_frame = fetch_frame(&client, base_url, pair.surface.as_ref())
        .await
        .map_err(|e| anyhow::anyhow!("surface fetch failed: {}", e))?;
    let depth_frame = fetch_frame(&client, base_url, pair.depth.as_ref())
        .await
        .map_err(|e| anyhow::anyhow!("depth fetch failed: {}", e))?;
    info!(
        "Fetched {} surface rows, {} depth rows",
        surface_frame.rows().len(),
        depth_frame.rows().len()
    );

    let payload = run_pipeline(platform, generation, &surface_frame, &depth_frame);
    let rendered = serde_json::to_string_pretty(&payload)?;
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!("Payload written to {}", path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
