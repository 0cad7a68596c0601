use std::env;
use anyhow::{Context, Result};
use axum::http::HeaderName;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    /// Presence of this request header selects full JSON responses
    pub full_response_header: HeaderName,
    /// Max characters returned in preview mode
    pub preview_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let full_response_header = env::var("NOTES_FULL_RESPONSE_HEADER")
            .unwrap_or_else(|_| "x-full-response".to_string())
            .parse::<HeaderName>()
            .context("NOTES_FULL_RESPONSE_HEADER must be a valid HTTP header name")?;

        let preview_length = env::var("NOTES_PREVIEW_LENGTH")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<usize>()
            .context("NOTES_PREVIEW_LENGTH must be a non-negative integer")?;

        Ok(Config {
            service_port,
            service_host,
            full_response_header,
            preview_length,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Full response header: {}", self.full_response_header);
        tracing::info!("  Preview length: {} characters", self.preview_length);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
