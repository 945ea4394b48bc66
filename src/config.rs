use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub fetch_delay_ms: u64,
    pub lookup_delay_ms: u64,
    pub login_delay_ms: u64,
    pub signup_delay_ms: u64,
    pub generate_delay_ms: u64,
    pub save_delay_ms: u64,
    pub default_currency: String,
    pub deadline_days: i64,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 300,
            lookup_delay_ms: 200,
            login_delay_ms: 800,
            signup_delay_ms: 1000,
            generate_delay_ms: 1500,
            save_delay_ms: 500,
            default_currency: "EUR".to_string(),
            deadline_days: 30,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            fetch_delay_ms: get_env_parse_or("NORDMATCH_FETCH_DELAY_MS", defaults.fetch_delay_ms)?,
            lookup_delay_ms: get_env_parse_or("NORDMATCH_LOOKUP_DELAY_MS", defaults.lookup_delay_ms)?,
            login_delay_ms: get_env_parse_or("NORDMATCH_LOGIN_DELAY_MS", defaults.login_delay_ms)?,
            signup_delay_ms: get_env_parse_or("NORDMATCH_SIGNUP_DELAY_MS", defaults.signup_delay_ms)?,
            generate_delay_ms: get_env_parse_or(
                "NORDMATCH_GENERATE_DELAY_MS",
                defaults.generate_delay_ms,
            )?,
            save_delay_ms: get_env_parse_or("NORDMATCH_SAVE_DELAY_MS", defaults.save_delay_ms)?,
            default_currency: get_env("NORDMATCH_DEFAULT_CURRENCY")
                .unwrap_or(defaults.default_currency),
            deadline_days: get_env_parse_or("NORDMATCH_DEADLINE_DAYS", defaults.deadline_days)?,
            log_json: get_env_parse_or("NORDMATCH_LOG_JSON", defaults.log_json)?,
        })
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn signup_delay(&self) -> Duration {
        Duration::from_millis(self.signup_delay_ms)
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
