use crate::frame::{FrameError, ObservationFrame};
use crate::platform::Platform;
use crate::query::{platform_locations_url, QueryDescriptor, WindowStart};
use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::fmt;
use tokio::time::{sleep, Duration};

/// Errors that can occur when fetching observation data from ERDDAP.
#[derive(Debug, PartialEq, Clone)]
pub enum FetchError {
    HttpRequestError(String),
    HttpResponseParseError(String),
    FrameParseError(FrameError),
    PlatformParseError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::HttpRequestError(detail) => write!(f, "http request failed: {}", detail),
            FetchError::HttpResponseParseError(detail) => {
                write!(f, "could not read response body: {}", detail)
            }
            FetchError::FrameParseError(err) => write!(f, "malformed observation csv: {}", err),
            FetchError::PlatformParseError(detail) => {
                write!(f, "malformed platform csv: {}", detail)
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FrameError> for FetchError {
    fn from(err: FrameError) -> Self {
        FetchError::FrameParseError(err)
    }
}

/// GET a tabledap CSV with retry and exponential backoff.
///
/// `Ok(None)` means the query matched no rows; ERDDAP signals this with
/// HTTP 404 rather than an empty result set.
async fn fetch_csv(client: &Client, url: &str) -> Result<Option<String>, FetchError> {
    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;
    let mut last_error = FetchError::HttpRequestError(String::from("no attempts made"));

    for attempt in 1..=max_tries {
        match client.get(url).send().await {
            Ok(response) => {
                if response.status() == StatusCode::NOT_FOUND {
                    info!("No matching rows for {}", url);
                    return Ok(None);
                }
                if response.status() != StatusCode::OK {
                    warn!(
                        "Attempt {}/{}: Bad response status for {}: {}",
                        attempt,
                        max_tries,
                        url,
                        response.status()
                    );
                    last_error =
                        FetchError::HttpRequestError(format!("status {}", response.status()));
                } else {
                    match response.text().await {
                        Ok(response_body) => {
                            if response_body.len() <= 2 {
                                warn!(
                                    "Attempt {}/{}: Empty response for {}",
                                    attempt, max_tries, url
                                );
                                last_error = FetchError::HttpResponseParseError(String::from(
                                    "empty response body",
                                ));
                            } else {
                                return Ok(Some(response_body));
                            }
                        }
                        Err(e) => {
                            warn!(
                                "Attempt {}/{}: Failed to read response body for {}: {}",
                                attempt, max_tries, url, e
                            );
                            last_error = FetchError::HttpResponseParseError(e.to_string());
                        }
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{}: Request failed for {}: {}",
                    attempt, max_tries, url, e
                );
                last_error = FetchError::HttpRequestError(e.to_string());
            }
        }

        if attempt < max_tries {
            info!("Sleeping for {} milliseconds before retry", sleep_millis);
            sleep(Duration::from_millis(sleep_millis)).await;
            sleep_millis *= 2;
        }
    }

    warn!("All attempts failed for {}", url);
    Err(last_error)
}

/// Fetch one category's observations for a platform.
///
/// `None` (no query for the category) resolves to the no-data sentinel
/// without touching the network, as does a query matching no rows.
pub async fn fetch_frame(
    client: &Client,
    base_url: &str,
    query: Option<&QueryDescriptor>,
) -> Result<ObservationFrame, FetchError> {
    let descriptor = match query {
        Some(descriptor) => descriptor,
        None => return Ok(ObservationFrame::no_data()),
    };
    let url = descriptor.to_url(base_url);
    match fetch_csv(client, &url).await? {
        Some(body) => Ok(ObservationFrame::from_erddap_csv(&body)?),
        None => Ok(ObservationFrame::no_data()),
    }
}

/// Fetch the platform location snapshot: one row per platform reporting
/// within the window, carrying its latest position.
pub async fn fetch_platforms(
    client: &Client,
    base_url: &str,
    window_start: &WindowStart,
) -> Result<Vec<Platform>, FetchError> {
    let url = platform_locations_url(base_url, window_start);
    match fetch_csv(client, &url).await? {
        Some(body) => Platform::parse_platform_csv(&body)
            .map_err(|e| FetchError::PlatformParseError(e.to_string())),
        None => Ok(Vec::new()),
    }
}
