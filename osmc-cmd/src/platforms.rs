//! Platform listing command.

use log::info;
use osmc_erddap::fetch::fetch_platforms;
use osmc_erddap::query::WindowStart;

/// List every platform reporting within the window, as JSON with each
/// platform's latest position and marker color.
pub async fn run_platforms(base_url: &str, window_start: &WindowStart) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let platforms = fetch_platforms(&client, base_url, window_start)
        .await
        .map_err(|e| anyhow::anyhow!("platform fetch failed: {}", e))?;

    info!(
        "{} platforms reporting since {}",
        platforms.len(),
        window_start.to_erddap()
    );

    let listing: Vec<serde_json::Value> = platforms
        .iter()
        .map(|platform| {
            serde_json::json!({
                "platform_code": platform.platform_code,
                "platform_type": platform.platform_type,
                "time": platform.time,
                "longitude": platform.longitude,
                "latitude": platform.latitude,
                "color": platform.color(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
