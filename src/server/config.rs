use crate::server::{
    error::{config::ConfigError, AppError},
    model::progression::HealthGrowth,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// How level-ups change maximum health.
    pub health_growth: HealthGrowth,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            health_growth: parse_health_growth(std::env::var("LEVEL_UP_HEALTH_GROWTH").ok())?,
        })
    }
}

fn parse_health_growth(value: Option<String>) -> Result<HealthGrowth, ConfigError> {
    match value {
        None => Ok(HealthGrowth::default()),
        Some(value) => value
            .parse::<HealthGrowth>()
            .map_err(|reason| ConfigError::InvalidEnvVar {
                name: "LEVEL_UP_HEALTH_GROWTH".to_string(),
                reason,
            }),
    }
}
