//! API client for the constituency portal's read-side REST endpoints.
//!
//! The client only ever consumes data snapshots - seasons, attendance,
//! schedules, busy dates. The portal's mutation endpoints (verify, approve,
//! cancel) belong to its admin UI and are never called from here.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::models::{AttendanceRecord, Schedule, Season};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// The portal runs on modest shared hosting; 30s covers its slow tail.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retries for rate-limited (429) requests.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
/// Doubles on every retry.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// API client for the portal backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if a response is successful. Returns Ok(Some(response)) for
    /// success, Ok(None) for rate limit (should retry), or Err otherwise.
    async fn check_response_for_retry(
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status().as_u16() == 429 {
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .get(&url)
                .headers(self.auth_headers()?)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => {
                    return response
                        .json()
                        .await
                        .with_context(|| format!("Failed to parse JSON response from {}", url));
                }
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = %url, retry = retries, backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
            }
        }
    }

    /// GET a list endpoint, tolerating both a bare JSON array and the
    /// portal's occasional `{"data": [...]}` wrapper.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.url(path);
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        let text = loop {
            let response = self
                .client
                .get(&url)
                .headers(self.auth_headers()?)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => {
                    break response
                        .text()
                        .await
                        .with_context(|| format!("Failed to read response body from {}", url));
                }
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(ApiError::RateLimited.into());
                    }
                    warn!(url = %url, retry = retries, backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2;
                }
            }
        }?;

        parse_list(&text).with_context(|| format!("Failed to parse list response from {}", url))
    }

    // ===== Data Fetching Methods =====

    /// Fetch all seasons
    pub async fn fetch_seasons(&self) -> Result<Vec<Season>> {
        let seasons: Vec<Season> = self.get_list("/api/seasons").await?;
        debug!(count = seasons.len(), "Seasons fetched");
        Ok(seasons)
    }

    /// Fetch attendance records, optionally scoped to one season.
    /// The report index is built from the full list either way; season
    /// scoping only trims what travels over the wire.
    pub async fn fetch_attendance(&self, season_id: Option<&str>) -> Result<Vec<AttendanceRecord>> {
        let path = match season_id {
            Some(id) => format!("/api/attendance?seasonId={}", id),
            None => "/api/attendance/all".to_string(),
        };
        let records: Vec<AttendanceRecord> = self.get_list(&path).await?;
        debug!(count = records.len(), "Attendance fetched");
        Ok(records)
    }

    /// Fetch all schedule entries
    pub async fn fetch_schedules(&self) -> Result<Vec<Schedule>> {
        self.get_list("/api/schedules").await
    }

    /// Fetch the admin's busy dates as raw date-key strings
    pub async fn fetch_busy_dates(&self) -> Result<Vec<String>> {
        self.get("/api/busy-dates").await
    }
}

/// Parse a list response that may be a bare array or wrapped in an object
fn parse_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    if let Ok(items) = serde_json::from_str::<Vec<T>>(text) {
        return Ok(items);
    }

    #[derive(Deserialize)]
    struct ListWrapper<T> {
        #[serde(default = "Vec::new")]
        data: Vec<T>,
    }

    let wrapper: ListWrapper<T> = serde_json::from_str(text)?;
    Ok(wrapper.data)
}
