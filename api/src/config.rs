//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::types::SummaryId;

/// Base used when nothing else is configured (the backend's development server).
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Trailing slashes are dropped so endpoint paths can be appended verbatim.
    pub fn from_base(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    /// Base baked in at build time via `CHEMVIZ_API_BASE`, otherwise [`DEFAULT_API_BASE`].
    pub fn from_build_env() -> Self {
        match option_env!("CHEMVIZ_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::from_base(base),
            _ => Self::default(),
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload/", self.base())
    }

    pub fn history_url(&self) -> String {
        format!("{}/history/", self.base())
    }

    pub fn report_url(&self, id: SummaryId) -> String {
        format!("{}/report/{id}/", self.base())
    }

    // Deserialized configs bypass `from_base`, so normalize again here.
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
