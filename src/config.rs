use serde::Deserialize;

/// Process-wide configuration, fixed at startup.
///
/// Loaded once in `main` and shared read-only with every connection.
/// A YAML file can be supplied via `SUNDIAL_CONFIG`; otherwise the
/// `LISTEN` and `DOC_ROOT` environment variables override the defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the TCP listener binds to.
    pub listen_addr: String,
    /// Directory all file requests are resolved under.
    pub doc_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8001".to_string(),
            doc_root: "httpdocs".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("SUNDIAL_CONFIG") {
            match Self::from_file(&path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Failed to load config file, falling back to environment");
                }
            }
        }

        Self::from_env()
    }

    /// Parses a YAML config file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Builds a config from environment variables, with defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN").unwrap_or(defaults.listen_addr),
            doc_root: std::env::var("DOC_ROOT").unwrap_or(defaults.doc_root),
        }
    }
}
