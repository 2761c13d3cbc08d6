// Environment configuration loaded once, with defaults for every value.

use std::{borrow::Cow, collections::HashMap, fmt, str::FromStr};
// anyhow for convenient error handling
use anyhow::{anyhow, Context, Result};
// once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASSWORD: &str = "postgres";
const DEFAULT_DB_NAME: &str = "lottery";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds
const DEFAULT_DB_PORT: u16 = 5432; // Default Postgres port
const DEFAULT_PAGE_SIZE: usize = 25;

/// Where list endpoints read their rows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Postgres,
    /// Built-in sample rows, for local development and tests.
    Fixtures,
}

impl FromStr for DataSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(DataSource::Postgres),
            "fixtures" => Ok(DataSource::Fixtures),
            other => Err(anyhow!("unknown data source '{other}' (expected 'postgres' or 'fixtures')")),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Postgres => f.write_str("postgres"),
            DataSource::Fixtures => f.write_str("fixtures"),
        }
    }
}

// A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub protocol: Cow<'static, str>,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub db_host: Cow<'static, str>,
    pub db_port: u16,
    pub db_user: Cow<'static, str>,
    pub db_password: Cow<'static, str>,
    pub db_name: Cow<'static, str>,
    pub data_source: DataSource,
    pub default_page_size: usize,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            protocol: Cow::Borrowed(DEFAULT_PROTOCOL),
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
            db_host: Cow::Borrowed(DEFAULT_DB_HOST),
            db_port: DEFAULT_DB_PORT,
            db_user: Cow::Borrowed(DEFAULT_DB_USER),
            db_password: Cow::Borrowed(DEFAULT_DB_PASSWORD),
            db_name: Cow::Borrowed(DEFAULT_DB_NAME),
            data_source: DataSource::Postgres,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EnvironmentVariables {
    // Loads environment variables.
    // Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars().collect();

        Self::from_vars(&vars)
    }

    // Builds the configuration from an explicit key/value set
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let defaults: Self = Self::default();

        // A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        let owned_or = |key: &str, fallback: Cow<'static, str>, warn_missing: bool| -> Cow<'static, str> {
            match get_var(key) {
                Some(value) => Cow::Owned(value.to_owned()),
                None => {
                    if warn_missing {
                        warn!("Missing {key}, defaulting to '{fallback}'");
                    }
                    fallback
                }
            }
        };

        let config: Self = Self {
            environment: owned_or("ENVIRONMENT", defaults.environment, true),
            host: owned_or("HOST", defaults.host, false),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(defaults.port),

            protocol: owned_or("PROTOCOL", defaults.protocol, false),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(defaults.max_request_body_size),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(defaults.default_timeout_seconds),

            db_host: owned_or("DB_HOST", defaults.db_host, true),

            db_port: get_var("DB_PORT")
                .map(|s| s.parse().context("Invalid DB_PORT"))
                .transpose()?
                .unwrap_or(defaults.db_port),

            db_user: owned_or("DB_USER", defaults.db_user, true),
            db_password: owned_or("DB_PASSWORD", defaults.db_password, true),
            db_name: owned_or("DB_NAME", defaults.db_name, true),

            data_source: get_var("DATA_SOURCE")
                .map(|s| s.parse::<DataSource>().context("Invalid DATA_SOURCE"))
                .transpose()?
                .unwrap_or(defaults.data_source),

            default_page_size: get_var("DEFAULT_PAGE_SIZE")
                .map(|s| s.parse().context("Invalid DEFAULT_PAGE_SIZE"))
                .transpose()?
                .unwrap_or(defaults.default_page_size),
        };

        if config.default_page_size == 0 {
            return Err(anyhow!("DEFAULT_PAGE_SIZE must be greater than zero"));
        }

        Ok(config)
    }

    // Returns a reference to the lazily-initialized environment configuration
    pub fn instance() -> Result<&'static Self> {
        static INSTANCE: Lazy<Result<EnvironmentVariables, anyhow::Error>> = Lazy::new(|| {
            let config: EnvironmentVariables = EnvironmentVariables::load()?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        INSTANCE
            .as_ref()
            .map_err(|err: &anyhow::Error| anyhow!("Failed to load environment configuration: {err:#}"))
    }
}
