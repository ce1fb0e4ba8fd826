use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analytics::constants::DEFAULT_UMAMI_SERVER_URL;
use crate::analytics::error::{config_unavailable, invalid_config, AnalyticsResult};

/// Site-wide analytics settings, usually the `analytics` block of the site's `config.json`.
///
/// Every field is optional on input. Missing identifiers deserialize as empty strings and
/// missing vendor blocks as `None`; either way the vendor is simply not rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsConfig {
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub umami: Option<UmamiConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<GoogleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microsoft_clarity: Option<ClarityConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baidu: Option<BaiduConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UmamiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    pub website_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleConfig {
    pub measurement_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClarityConfig {
    pub project_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaiduConfig {
    pub project_id: String,
}

impl AnalyticsConfig {
    /// An enabled config with no vendors; chain the `with_*` helpers to add some.
    pub fn enabled() -> Self {
        Self {
            enable: true,
            ..Default::default()
        }
    }

    pub fn with_umami(mut self, umami: UmamiConfig) -> Self {
        self.umami = Some(umami);
        self
    }

    pub fn with_google(mut self, google: GoogleConfig) -> Self {
        self.google = Some(google);
        self
    }

    pub fn with_microsoft_clarity(mut self, clarity: ClarityConfig) -> Self {
        self.microsoft_clarity = Some(clarity);
        self
    }

    pub fn with_baidu(mut self, baidu: BaiduConfig) -> Self {
        self.baidu = Some(baidu);
        self
    }

    /// Returns `true` when at least one vendor has its identifier set.
    pub fn has_any_vendor(&self) -> bool {
        self.umami.as_ref().and_then(UmamiConfig::website_id).is_some()
            || self.google.as_ref().and_then(GoogleConfig::measurement_id).is_some()
            || self
                .microsoft_clarity
                .as_ref()
                .and_then(ClarityConfig::project_id)
                .is_some()
            || self.baidu.as_ref().and_then(BaiduConfig::project_id).is_some()
    }

    /// Parses either a bare analytics object or a whole site config carrying an
    /// `analytics` object.
    pub fn from_json_str(raw: &str) -> AnalyticsResult<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: Value) -> AnalyticsResult<Self> {
        let Value::Object(mut map) = value else {
            return Err(invalid_config("analytics config must be a JSON object"));
        };
        let section = match map.remove("analytics") {
            Some(section @ Value::Object(_)) => section,
            Some(_) => return Err(invalid_config("`analytics` must be a JSON object")),
            None => Value::Object(map),
        };
        Ok(serde_json::from_value(section)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AnalyticsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| {
            config_unavailable(format!(
                "unable to read analytics config `{}`: {err}",
                path.display()
            ))
        })?;
        log::debug!("loaded analytics config from {}", path.display());
        Self::from_json_str(&content)
    }
}

impl UmamiConfig {
    pub fn new(website_id: impl Into<String>) -> Self {
        Self {
            server_url: None,
            website_id: website_id.into(),
        }
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Some(server_url.into());
        self
    }

    pub fn website_id(&self) -> Option<&str> {
        non_empty(&self.website_id)
    }

    /// Tracker script location; an absent or empty server URL means Umami Cloud.
    pub fn script_src(&self) -> String {
        let server = self
            .server_url
            .as_deref()
            .and_then(non_empty)
            .unwrap_or(DEFAULT_UMAMI_SERVER_URL);
        format!("{server}/script.js")
    }
}

impl GoogleConfig {
    pub fn new(measurement_id: impl Into<String>) -> Self {
        Self {
            measurement_id: measurement_id.into(),
        }
    }

    pub fn measurement_id(&self) -> Option<&str> {
        non_empty(&self.measurement_id)
    }
}

impl ClarityConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        non_empty(&self.project_id)
    }
}

impl BaiduConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        non_empty(&self.project_id)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
