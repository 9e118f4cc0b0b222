//! Frontend configuration module
//!
//! This module provides configuration for the backend base URL.

/// Frontend configuration for backend URLs
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the HD Notes REST API
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("HDNOTES_API_BASE_URL")
                .unwrap_or("/api")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
