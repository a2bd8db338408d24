use crate::adapters::auth_endpoint::DEFAULT_AUTH_PATH;
use crate::adapters::header::DEFAULT_PRINCIPAL_HEADER;
use crate::core::ConfigProvider;
use crate::domain::model::IdentityStrategy;
use crate::utils::error::{GateError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub server: ServerSection,
    pub gate: GateSection,
    pub identity: IdentitySection,
    pub content: ContentSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GateSection {
    pub expected_domain: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentitySection {
    pub strategy: IdentityStrategy,
    pub header_name: String,
    pub auth_base_url: String,
    pub auth_path: String,
    pub timeout_seconds: u64,
    pub forward_headers: Vec<String>,
}

impl IdentitySection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            strategy: IdentityStrategy::Header,
            header_name: DEFAULT_PRINCIPAL_HEADER.to_string(),
            auth_base_url: "http://127.0.0.1:8080".to_string(),
            auth_path: DEFAULT_AUTH_PATH.to_string(),
            timeout_seconds: 5,
            forward_headers: vec![
                "cookie".to_string(),
                "authorization".to_string(),
                "x-zumo-auth".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    pub root: String,
    pub allowed_file: String,
    pub forbidden_file: String,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            root: "wwwroot".to_string(),
            allowed_file: "static.html".to_string(),
            forbidden_file: "403.html".to_string(),
        }
    }
}

impl GateConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads the file when it exists, otherwise starts from defaults. Either way
    /// `GATE_*` environment variables are applied on top.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() || required {
            Self::from_file(path)?
        } else {
            tracing::info!(
                "Config file {} not found, using defaults",
                path.display()
            );
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EXPECTED_DOMAIN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GateError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GATE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GATE_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| GateError::InvalidConfigValueError {
                    field: "GATE_PORT".to_string(),
                    value: port.clone(),
                    reason: "Must be a port number".to_string(),
                })?;
        }
        if let Some(domain) = lookup("GATE_EXPECTED_DOMAIN") {
            self.gate.expected_domain = Some(domain);
        }
        if let Some(strategy) = lookup("GATE_IDENTITY_STRATEGY") {
            self.identity.strategy =
                strategy
                    .parse()
                    .map_err(|reason| GateError::InvalidConfigValueError {
                        field: "GATE_IDENTITY_STRATEGY".to_string(),
                        value: strategy.clone(),
                        reason,
                    })?;
        }
        if let Some(url) = lookup("GATE_AUTH_BASE_URL") {
            self.identity.auth_base_url = url;
        }
        if let Some(root) = lookup("GATE_CONTENT_ROOT") {
            self.content.root = root;
        }
        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        let expected =
            validation::validate_required_field("gate.expected_domain", &self.gate.expected_domain)?;
        validation::validate_non_empty_string("gate.expected_domain", expected)?;
        if expected.contains("${") {
            return Err(GateError::InvalidConfigValueError {
                field: "gate.expected_domain".to_string(),
                value: expected.clone(),
                reason: "Unresolved environment variable".to_string(),
            });
        }

        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_positive_number("server.port", self.server.port as usize, 1)?;
        validation::validate_range(
            "server.request_timeout_seconds",
            self.server.request_timeout_seconds,
            1,
            600,
        )?;

        match self.identity.strategy {
            IdentityStrategy::Header => {
                validation::validate_header_name("identity.header_name", &self.identity.header_name)?;
            }
            IdentityStrategy::AuthEndpoint => {
                validation::validate_url("identity.auth_base_url", &self.identity.auth_base_url)?;
                validation::validate_path("identity.auth_path", &self.identity.auth_path)?;
                validation::validate_range(
                    "identity.timeout_seconds",
                    self.identity.timeout_seconds,
                    1,
                    60,
                )?;
                // The route timeout must outlast the identity call, or a slow
                // endpoint surfaces as 408 instead of the forbidden page.
                if self.identity.timeout_seconds >= self.server.request_timeout_seconds {
                    return Err(GateError::InvalidConfigValueError {
                        field: "identity.timeout_seconds".to_string(),
                        value: self.identity.timeout_seconds.to_string(),
                        reason: format!(
                            "Must be less than server.request_timeout_seconds ({})",
                            self.server.request_timeout_seconds
                        ),
                    });
                }
                for name in &self.identity.forward_headers {
                    validation::validate_header_name("identity.forward_headers", name)?;
                }
            }
        }

        validation::validate_path("content.root", &self.content.root)?;
        validation::validate_file_name("content.allowed_file", &self.content.allowed_file)?;
        validation::validate_file_name("content.forbidden_file", &self.content.forbidden_file)?;

        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| GateError::InvalidConfigValueError {
            field: "server.host".to_string(),
            value: addr,
            reason: "Not a valid socket address".to_string(),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_seconds)
    }
}

impl ConfigProvider for GateConfig {
    fn expected_domain(&self) -> &str {
        self.gate.expected_domain.as_deref().unwrap_or("")
    }

    fn content_root(&self) -> &str {
        &self.content.root
    }

    fn allowed_file(&self) -> &str {
        &self.content.allowed_file
    }

    fn forbidden_file(&self) -> &str {
        &self.content.forbidden_file
    }
}

impl Validate for GateConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
