use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from lyst.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Settings for the share link and the QR image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Page address the fragment is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// QR image generator endpoint. The image is referenced, never fetched.
    #[serde(default = "default_qr_endpoint")]
    pub qr_endpoint: String,
    /// Requested QR image edge length in pixels.
    #[serde(default = "default_qr_size")]
    pub qr_size: u16,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            base_url: default_base_url(),
            qr_endpoint: default_qr_endpoint(),
            qr_size: default_qr_size(),
        }
    }
}

fn default_base_url() -> String {
    "https://lyst.page/".to_string()
}

fn default_qr_endpoint() -> String {
    "https://api.qrserver.com/v1/create-qr-code/".to_string()
}

fn default_qr_size() -> u16 {
    150
}
