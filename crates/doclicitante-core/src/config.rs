//! Configuration module
//!
//! This module provides the environment-driven application configuration:
//! server, database, authentication, and reporting-timezone settings.
//! The reporting timezone drives the "today" reference date used by the
//! vencimento engine; it is captured once per request, never per document.

use std::env;
use std::str::FromStr;

use chrono::NaiveDate;
use chrono_tz::Tz;

// Common constants
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const JWT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Application configuration, loaded from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    cors_origins: Vec<String>,
    database_url: String,
    db_max_connections: u32,
    db_timeout_seconds: u64,
    jwt_secret: String,
    jwt_expiry_hours: i64,
    environment: String,
    timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let timezone_str = env::var("REPORT_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.into());

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins: parse_cors_origins(&cors_origins_str),
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| JWT_EXPIRY_HOURS.to_string())
                .parse()
                .unwrap_or(JWT_EXPIRY_HOURS),
            environment,
            timezone: parse_timezone(&timezone_str)?,
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 characters long"
            ));
        }
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!("CORS_ORIGINS cannot be '*' in production"));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase().eq("production") || self.environment.to_lowercase().eq("prod")
    }

    /// Current calendar date in the reporting timezone.
    ///
    /// This is the single "today" capture point: callers take one value per
    /// request and thread it through every classification, so a request that
    /// straddles midnight still classifies all documents consistently.
    pub fn today(&self) -> NaiveDate {
        chrono::Utc::now().with_timezone(&self.timezone).date_naive()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.db_timeout_seconds
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn jwt_expiry_hours(&self) -> i64 {
        self.jwt_expiry_hours
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_timezone(raw: &str) -> Result<Tz, anyhow::Error> {
    Tz::from_str(raw.trim())
        .map_err(|_| anyhow::anyhow!("REPORT_TIMEZONE '{}' is not a valid IANA timezone", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(environment: &str, jwt_secret: &str, cors: &[&str]) -> Config {
        Config {
            server_port: 4000,
            cors_origins: cors.iter().map(|s| s.to_string()).collect(),
            database_url: "postgres://localhost/doclicitante_test".to_string(),
            db_max_connections: MAX_CONNECTIONS,
            db_timeout_seconds: CONNECTION_TIMEOUT_SECS,
            jwt_secret: jwt_secret.to_string(),
            jwt_expiry_hours: JWT_EXPIRY_HOURS,
            environment: environment.to_string(),
            timezone: chrono_tz::America::Sao_Paulo,
        }
    }

    #[test]
    fn test_parse_cors_origins_splits_and_trims() {
        let origins = parse_cors_origins("https://app.example.com , https://admin.example.com");
        assert_eq!(
            origins,
            vec![
                "https://app.example.com".to_string(),
                "https://admin.example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_cors_origins_drops_empty_entries() {
        let origins = parse_cors_origins("https://app.example.com,,");
        assert_eq!(origins, vec!["https://app.example.com".to_string()]);
    }

    #[test]
    fn test_parse_timezone_accepts_iana_names() {
        assert_eq!(
            parse_timezone("America/Sao_Paulo").unwrap(),
            chrono_tz::America::Sao_Paulo
        );
        assert!(parse_timezone("Not/AZone").is_err());
    }

    #[test]
    fn test_validate_rejects_short_jwt_secret() {
        let config = test_config("development", "short", &["*"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wildcard_cors_in_production() {
        let config = test_config(
            "production",
            "0123456789abcdef0123456789abcdef",
            &["*"],
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_explicit_origins_in_production() {
        let config = test_config(
            "production",
            "0123456789abcdef0123456789abcdef",
            &["https://app.doclicitante.com.br"],
        );
        assert!(config.validate().is_ok());
        assert!(config.is_production());
    }
}
