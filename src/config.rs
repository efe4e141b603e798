use serde::{Deserialize, Serialize};

/// Scheme used when building absolute base paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Settings shared by every document of a release.
///
/// Missing keys fall back to their defaults when deserializing, so a
/// partial JSON or TOML table is enough:
///
/// ```rust,ignore
/// let config: DocsConfig = serde_json::from_str(r#"{"api_version": "2.1"}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Version of the documented API (`apiVersion`)
    pub api_version: String,
    pub swagger_version: String,
    /// Mount point of the resource listing; declarations live below it
    pub docs_path: String,
    pub scheme: Scheme,
    /// Value of the `X-Powered-By` header on docs responses
    pub powered_by: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            api_version: "1.0.0".to_string(),
            swagger_version: "1.2".to_string(),
            docs_path: "/api-docs".to_string(),
            scheme: Scheme::Https,
            powered_by: Some(env!("CARGO_PKG_NAME").to_string()),
        }
    }
}

impl DocsConfig {
    /// Defaults overridden from the process environment.
    ///
    /// - `APP_ENV=local` serves base paths over plain `http`
    /// - `API_VERSION` sets the documented API version
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DocsConfig::from_env`] with an arbitrary variable source
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if lookup("APP_ENV").as_deref() == Some("local") {
            config.scheme = Scheme::Http;
        }
        if let Some(version) = lookup("API_VERSION").filter(|v| !v.trim().is_empty()) {
            config.api_version = version;
        }
        config
    }

    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    #[must_use]
    pub fn docs_path(mut self, docs_path: impl Into<String>) -> Self {
        self.docs_path = docs_path.into();
        self
    }

    #[must_use]
    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }
}
