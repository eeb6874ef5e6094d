use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde_json::{json, Value};

use super::AvailabilityBackend;
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::models::{AvailabilityOverview, BufferTimeSettings, TimezoneSetting, WeeklySlot};

pub struct HttpBackend {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: String, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.backend_url.clone(),
            config.auth_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response> {
        let request = match &self.token {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        };

        let resp = request.send().await.map_err(|e| {
            tracing::warn!(endpoint, error = %e, "backend request failed");
            AppError::from(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body: Value = resp.json().await.unwrap_or_else(|_| json!({}));
        let message = body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        tracing::warn!(endpoint, status = status.as_u16(), %message, "backend returned error");
        Err(AppError::Network(message))
    }
}

#[async_trait]
impl AvailabilityBackend for HttpBackend {
    async fn fetch_overview(&self) -> Result<AvailabilityOverview> {
        let endpoint = "/availability/overview/";
        let resp = self.send(self.client.get(self.url(endpoint)), endpoint).await?;
        let overview: AvailabilityOverview = resp.json().await?;
        tracing::info!(
            slots = overview.weekly_availability.len(),
            calendars = overview.calendar_integrations.len(),
            "fetched availability overview"
        );
        Ok(overview)
    }

    async fn save_weekly_availability(&self, slots: &[WeeklySlot]) -> Result<()> {
        let endpoint = "/availability/weekly/bulk-update/";
        let body = json!({ "availability_data": slots });
        self.send(self.client.post(self.url(endpoint)).json(&body), endpoint)
            .await?;
        tracing::info!(slots = slots.len(), "saved weekly availability");
        Ok(())
    }

    async fn save_buffer_time(&self, buffer: &BufferTimeSettings) -> Result<()> {
        let endpoint = "/availability/buffer-time/";
        self.send(self.client.put(self.url(endpoint)).json(buffer), endpoint)
            .await?;
        tracing::info!("saved buffer time");
        Ok(())
    }

    async fn save_timezone(&self, timezone: &TimezoneSetting) -> Result<()> {
        let endpoint = "/availability/timezone/";
        self.send(self.client.put(self.url(endpoint)).json(timezone), endpoint)
            .await?;
        tracing::info!(timezone = %timezone.timezone, "saved time zone");
        Ok(())
    }
}
