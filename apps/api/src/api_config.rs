use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use teamroles_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub storage_backend: StorageBackend,
    pub api_host: String,
    pub api_port: u16,
    pub teams_service_url: Url,
    pub users_service_url: Url,
    pub directory_timeout: Duration,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(env::args().nth(1).as_deref(), |name| env::var(name).ok())
    }

    fn from_lookup(
        first_argument: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let migrate_only = first_argument == Some("migrate");

        let storage_backend = match lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "postgres".to_owned())
            .as_str()
        {
            "postgres" => StorageBackend::Postgres {
                database_url: required_non_empty(&lookup, "DATABASE_URL")?,
            },
            "memory" => StorageBackend::Memory,
            other => {
                return Err(AppError::InvalidArgument(format!(
                    "STORAGE_BACKEND must be either 'postgres' or 'memory', got '{other}'"
                )));
            }
        };

        if migrate_only && storage_backend == StorageBackend::Memory {
            return Err(AppError::InvalidArgument(
                "migrate requires STORAGE_BACKEND=postgres".to_owned(),
            ));
        }

        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .map(|value| {
                value.parse::<u16>().map_err(|error| {
                    AppError::InvalidArgument(format!("invalid API_PORT '{value}': {error}"))
                })
            })
            .transpose()?
            .unwrap_or(8080);

        let teams_service_url = required_url(&lookup, "TEAMS_SERVICE_URL")?;
        let users_service_url = required_url(&lookup, "USERS_SERVICE_URL")?;

        let directory_timeout_ms = lookup("DIRECTORY_TIMEOUT_MS")
            .map(|value| {
                value.parse::<u64>().map_err(|error| {
                    AppError::InvalidArgument(format!(
                        "invalid DIRECTORY_TIMEOUT_MS '{value}': {error}"
                    ))
                })
            })
            .transpose()?
            .unwrap_or(5000);

        Ok(Self {
            migrate_only,
            storage_backend,
            api_host,
            api_port,
            teams_service_url,
            users_service_url,
            directory_timeout: Duration::from_millis(directory_timeout_ms.max(1)),
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, AppError> {
    let value = lookup(name).ok_or_else(|| AppError::missing_argument(name))?;
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(format!("{name} must not be empty")));
    }

    Ok(value)
}

fn required_url(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Url, AppError> {
    let value = required_non_empty(lookup, name)?;
    Url::parse(value.as_str())
        .map_err(|error| AppError::InvalidArgument(format!("invalid {name} '{value}': {error}")))
}
