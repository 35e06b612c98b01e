//! Command implementations for the OSMC CLI.
//!
//! Provides subcommands for listing observing platforms, inspecting the
//! tabledap queries a selection would issue, and fetching a platform's
//! observations as a rendering payload.

use clap::Subcommand;

pub mod observations;
pub mod platforms;

#[derive(Subcommand)]
pub enum Command {
    /// List platforms reporting within the location window
    Platforms {
        /// ERDDAP tabledap base URL
        #[arg(long, default_value = osmc_erddap::query::DEFAULT_BASE_URL)]
        base_url: String,

        /// Trailing window in days
        #[arg(long, default_value_t = osmc_erddap::query::DEFAULT_LOCATION_WINDOW_DAYS)]
        window_days: u32,

        /// Absolute window start (YYYY-MM-DD) instead of a trailing window
        #[arg(long)]
        since: Option<String>,
    },

    /// Print the tabledap URLs a platform selection would fetch
    Urls {
        /// ERDDAP tabledap base URL
        #[arg(long, default_value = osmc_erddap::query::DEFAULT_BASE_URL)]
        base_url: String,

        /// Platform code (e.g. "41001")
        #[arg(short = 'p', long)]
        platform_code: String,

        /// Platform type (e.g. "MOORED BUOYS (GENERIC)")
        #[arg(short = 't', long)]
        platform_type: String,

        /// Trailing window in days
        #[arg(long, default_value_t = osmc_erddap::query::DEFAULT_PLOT_WINDOW_DAYS)]
        window_days: u32,

        /// Absolute window start (YYYY-MM-DD) instead of a trailing window
        #[arg(long)]
        since: Option<String>,
    },

    /// Fetch a platform's observations and emit the render payload as JSON
    Observations {
        /// ERDDAP tabledap base URL
        #[arg(long, default_value = osmc_erddap::query::DEFAULT_BASE_URL)]
        base_url: String,

        /// Platform code (e.g. "41001")
        #[arg(short = 'p', long)]
        platform_code: String,

        /// Trailing window in days
        #[arg(long, default_value_t = osmc_erddap::query::DEFAULT_PLOT_WINDOW_DAYS)]
        window_days: u32,

        /// Absolute window start (YYYY-MM-DD) instead of a trailing window
        #[arg(long)]
        since: Option<String>,

        /// Write the payload to this path instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Platforms {
            base_url,
            window_days,
            since,
        } => {
            let window_start = window_start(window_days, since.as_deref())?;
            platforms::run_platforms(&base_url, &window_start).await
        }
        Command::Urls {
            base_url,
            platform_code,
            platform_type,
            window_days,
            since,
        } => {
            let window_start = window_start(window_days, since.as_deref())?;
            observations::run_urls(&base_url, &platform_code, &platform_type, &window_start)
        }
        Command::Observations {
            base_url,
            platform_code,
            window_days,
            since,
            output,
        } => {
            let window_start = window_start(window_days, since.as_deref())?;
            observations::run_observations(
                &base_url,
                &platform_code,
                &window_start,
                output.as_deref(),
            )
            .await
        }
    }
}

fn window_start(
    window_days: u32,
    since: Option<&str>,
) -> anyhow::Result<osmc_erddap::query::WindowStart> {
    match since {
        Some(date) => Ok(osmc_erddap::query::WindowStart::Absolute(
            osmc_utils::time::parse_date(date)?,
        )),
        None => Ok(osmc_erddap::query::WindowStart::NowMinusDays(window_days)),
    }
}
