//! Configuration module for revenue-service.

use std::env;

#[derive(Debug, Clone)]
pub struct RevenueConfig {
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
}

impl RevenueConfig {
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "revenue-service".to_string()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
