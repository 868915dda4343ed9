//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Loan defaults used by the query dispatcher
    #[serde(default)]
    pub loan: LoanConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_loan()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.server.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.timeout_seconds".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.environment.is_production()
            && self.server.cors_enabled
            && self.server.cors_origins.is_empty()
        {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 This may block legitimate requests."
            );
        }

        Ok(())
    }

    fn validate_loan(&self) -> Result<(), ConfigError> {
        let loan = &self.loan;

        if loan.default_principal <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "loan.default_principal".to_string(),
                message: format!("Must be positive, got {}", loan.default_principal),
            });
        }

        if loan.annual_rate_percent < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "loan.annual_rate_percent".to_string(),
                message: format!("Must not be negative, got {}", loan.annual_rate_percent),
            });
        }

        if loan.tenure_years <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "loan.tenure_years".to_string(),
                message: format!("Must be positive, got {}", loan.tenure_years),
            });
        }

        if loan.default_budget <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "loan.default_budget".to_string(),
                message: format!("Must be positive, got {}", loan.default_budget),
            });
        }

        if !(0.0..=1.0).contains(&loan.affordable_income_share)
            || loan.affordable_income_share == 0.0
        {
            return Err(ConfigError::InvalidValue {
                field: "loan.affordable_income_share".to_string(),
                message: format!(
                    "Must be in (0.0, 1.0], got {}",
                    loan.affordable_income_share
                ),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_seconds: default_timeout(),
            cors_enabled: default_true(),
            // Empty by default - must be explicitly configured for production
            cors_origins: Vec::new(),
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the car catalog JSON file. A missing file is not an error;
    /// the service starts with an empty catalog.
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

fn default_data_path() -> String {
    "data/cars.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

/// Loan defaults used by the query dispatcher.
///
/// The defaults here ARE the dispatch constants: the dispatcher never parses
/// loan terms out of the query text, it always applies these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Principal assumed when the query carries no budget (rupees)
    #[serde(default = "default_principal")]
    pub default_principal: f64,

    /// Annual interest rate applied to every EMI estimate (percent)
    #[serde(default = "default_annual_rate")]
    pub annual_rate_percent: f64,

    /// Tenure applied to every EMI estimate (years)
    #[serde(default = "default_tenure_years")]
    pub tenure_years: f64,

    /// Budget assumed when a budget search carries no budget (rupees)
    #[serde(default = "default_budget")]
    pub default_budget: f64,

    /// Share of monthly income considered a safe installment
    #[serde(default = "default_income_share")]
    pub affordable_income_share: f64,
}

fn default_principal() -> f64 {
    1_500_000.0
}
fn default_annual_rate() -> f64 {
    9.5
}
fn default_tenure_years() -> f64 {
    5.0
}
fn default_budget() -> f64 {
    2_000_000.0
}
fn default_income_share() -> f64 {
    0.3
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            default_principal: default_principal(),
            annual_rate_percent: default_annual_rate(),
            tenure_years: default_tenure_years(),
            default_budget: default_budget(),
            affordable_income_share: default_income_share(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (CAR_ADVISOR_ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("CAR_ADVISOR")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}
