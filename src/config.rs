use crate::error::{CollectorError, Result};
use crate::resolve::split_host_port;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::net::Ipv6Addr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub array: ArrayConfig,
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArrayConfig {
    /// Array hostname, optionally with `:port`
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: SecretString,
    #[serde(default = "default_true")]
    pub use_tls: bool,
    /// Management interfaces usually ship self-signed certificates
    #[serde(default)]
    pub verify_ssl: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TargetConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub verify_ssl: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            password: empty_secret(),
            use_tls: default_true(),
            verify_ssl: false,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

/// Values taken from the command line or the well-known environment variables.
///
/// These win over the config file and `XIO_COLLECTOR__*` variables.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub array_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub target_api_url: Option<String>,
    pub array_verify_ssl: Option<bool>,
    pub target_verify_ssl: Option<bool>,
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn default_true() -> bool {
    true
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl ArrayConfig {
    pub fn scheme(&self) -> &'static str {
        if self.use_tls {
            "https"
        } else {
            "http"
        }
    }

    /// Port used for the resolution check when `name` carries none
    pub fn default_port(&self) -> u16 {
        if self.use_tls {
            443
        } else {
            80
        }
    }

    /// URL authority for `name`; a bare IPv6 literal gets brackets
    pub fn authority(&self) -> String {
        if self.name.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn cluster_url(&self) -> String {
        format!(
            "{}://{}/api/json/v2/types/clusters/1",
            self.scheme(),
            self.authority()
        )
    }

    /// `name` must be a bare host with an optional port
    fn validate_name(&self) -> Result<()> {
        let invalid = || {
            CollectorError::Config(format!(
                "array name (XIO_ARRAYNAME) must be a host with an optional port, got {:?}",
                self.name
            ))
        };

        let has_forbidden_char = self
            .name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '@' | '?' | '#' | '%'));
        if has_forbidden_char || split_host_port(&self.name, self.default_port()).is_none() {
            return Err(invalid());
        }

        let url = Url::parse(&self.cluster_url()).map_err(|_| invalid())?;
        if url.host_str().is_none() {
            return Err(invalid());
        }
        Ok(())
    }
}

impl Config {
    pub fn load(path: &str, overrides: &Overrides) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("XIO_COLLECTOR").separator("__"))
            .set_override_option("array.name", overrides.array_name.clone())
            .and_then(|b| b.set_override_option("array.username", overrides.username.clone()))
            .and_then(|b| b.set_override_option("array.password", overrides.password.clone()))
            .and_then(|b| b.set_override_option("array.verify_ssl", overrides.array_verify_ssl))
            .and_then(|b| b.set_override_option("target.url", overrides.target_api_url.clone()))
            .and_then(|b| {
                b.set_override_option("target.verify_ssl", overrides.target_verify_ssl)
            })
            .and_then(|b| b.build())
            .map_err(|e| CollectorError::Config(format!("failed to build configuration: {e}")))?;

        let config: Config = config.try_deserialize().map_err(|e| {
            CollectorError::Config(format!("failed to deserialize configuration: {e}"))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject incomplete configuration before any network activity
    pub fn validate(&self) -> Result<()> {
        require(&self.array.name, "array name (XIO_ARRAYNAME)")?;
        self.array.validate_name()?;
        require(&self.array.username, "array username (XIO_USERNAME)")?;
        require(
            self.array.password.expose_secret(),
            "array password (XIO_PASSWD)",
        )?;
        require(&self.target.url, "target API URL (TARGET_API_URL)")?;

        let url = Url::parse(&self.target.url).map_err(|e| {
            CollectorError::Config(format!(
                "target API URL (TARGET_API_URL) is not an absolute URL: {e}"
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(CollectorError::Config(format!(
                "target API URL (TARGET_API_URL) must be an http(s) URL with a host, got {}",
                self.target.url
            )));
        }

        if self.http.connect_timeout_seconds == 0 || self.http.request_timeout_seconds == 0 {
            return Err(CollectorError::Config(
                "HTTP timeouts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse a boolean switch given as text (`true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`)
pub fn parse_flag(value: Option<&str>, what: &str) -> Result<Option<bool>> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(Some(true)),
        "false" | "no" | "off" | "0" => Ok(Some(false)),
        _ => Err(CollectorError::Config(format!(
            "{what} must be true or false, got {value:?}"
        ))),
    }
}

fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(CollectorError::Config(format!("{what} is not set")))
    } else {
        Ok(())
    }
}
