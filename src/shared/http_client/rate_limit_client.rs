//! HTTP client with per-backend rate limiting and a bounded request timeout
//!
//! Every backend call goes through exactly one request: there is no retry
//! loop here. Retrying is left to the user re-triggering a search.

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{Client, Response, StatusCode};
use std::num::NonZeroU32;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult, NetworkFailure};
use crate::shared::utils::{LogContext, TimedOperation};

const USER_AGENT: &str = concat!("playfinder/", env!("CARGO_PKG_VERSION"));

/// Rate limited HTTP client shared by one backend adapter
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
    provider_name: String,
}

impl RateLimitClient {
    /// Client for the Google Geocoding and Places APIs
    pub fn for_google(timeout: Duration) -> AppResult<Self> {
        // Google allows 50 QPS per project; stay well below it
        Self::new("Google", 10.0, 5, timeout)
    }

    /// Client for the Foursquare Places API
    pub fn for_foursquare(timeout: Duration) -> AppResult<Self> {
        Self::new("Foursquare", 5.0, 3, timeout)
    }

    /// Client for the Eventbrite API (2000 calls/hour)
    pub fn for_eventbrite(timeout: Duration) -> AppResult<Self> {
        Self::new("Eventbrite", 0.5, 3, timeout)
    }

    pub fn new(
        provider_name: &str,
        requests_per_second: f64,
        burst_size: u32,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ConfigError(format!(
                    "Failed to build {} HTTP client: {}",
                    provider_name, e
                ))
            })?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(requests_per_second, burst_size),
            provider_name: provider_name.to_string(),
        })
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DefaultDirectRateLimiter {
        let burst = NonZeroU32::new(burst_size.max(1)).unwrap_or(NonZeroU32::MIN);

        let quota = if requests_per_second > 0.0 {
            Quota::with_period(Duration::from_secs_f64(1.0 / requests_per_second))
        } else {
            None
        }
        .unwrap_or_else(|| Quota::per_hour(NonZeroU32::MIN));

        GovernorRateLimiter::direct(quota.allow_burst(burst))
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// `url` is logged, so credentials must travel in `query` or `headers`.
    pub async fn get_json<T>(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> Result<T, NetworkFailure>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        let timer = TimedOperation::start();
        LogContext::api_call(&self.provider_name, url, "", None);

        let mut request = self
            .client
            .get(url)
            .query(query)
            .header("Accept", "application/json");
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let failure = NetworkFailure::from(e);
                log::warn!("{} request failed: {}", self.provider_name, failure);
                return Err(failure);
            }
        };

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            url,
            status.as_str(),
            Some(timer.elapsed_ms()),
        );
        check_status(status)?;

        self.parse_response(response).await
    }

    async fn parse_response<T>(&self, response: Response) -> Result<T, NetworkFailure>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = response.text().await.map_err(NetworkFailure::from)?;
        decode_body(&self.provider_name, &body)
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Any non-2xx status is a network failure carrying the code
pub(crate) fn check_status(status: StatusCode) -> Result<(), NetworkFailure> {
    if status.is_success() {
        Ok(())
    } else {
        Err(NetworkFailure::Status(status.as_u16()))
    }
}

pub(crate) fn decode_body<T>(provider_name: &str, body: &str) -> Result<T, NetworkFailure>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        NetworkFailure::Decode(format!(
            "Failed to parse {} response: {}. Response: {}",
            provider_name, e, preview
        ))
    })
}
