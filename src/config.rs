use std::collections::HashMap;
use thiserror::Error;

/// Engine tuning.
///
/// The defaults carry the canonical simulation parameters; environment
/// variables can override them for experiments without touching the math.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path used by the file-backed snapshot store.
    pub store_path: String,
    /// Credits granted on first login (or when the stored balance is
    /// zero/invalid).
    pub login_grant: f64,
    /// Valuation points retained per artwork.
    pub history_capacity: usize,
    /// Audit entries retained per user.
    pub activity_capacity: usize,
    /// Rows shown on a market leaderboard tab.
    pub market_top_n: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: "musemarket-state.json".to_string(),
            login_grant: 1500.0,
            history_capacity: 18,
            activity_capacity: 20,
            market_top_n: 6,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let store_path = env_map
            .get("MUSEMARKET_STORE_PATH")
            .cloned()
            .unwrap_or(defaults.store_path);

        let login_grant = match env_map.get("MUSEMARKET_LOGIN_GRANT") {
            Some(raw) => raw.parse::<f64>().ok().filter(|g| g.is_finite() && *g > 0.0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "MUSEMARKET_LOGIN_GRANT".to_string(),
                    "must be a finite number > 0".to_string(),
                )
            })?,
            None => defaults.login_grant,
        };

        let history_capacity = parse_capacity(
            &env_map,
            "MUSEMARKET_HISTORY_CAPACITY",
            defaults.history_capacity,
        )?;
        let activity_capacity = parse_capacity(
            &env_map,
            "MUSEMARKET_ACTIVITY_CAPACITY",
            defaults.activity_capacity,
        )?;
        let market_top_n =
            parse_capacity(&env_map, "MUSEMARKET_MARKET_TOP_N", defaults.market_top_n)?;

        Ok(Config {
            store_path,
            login_grant,
            history_capacity,
            activity_capacity,
            market_top_n,
        })
    }
}

fn parse_capacity(
    env_map: &HashMap<String, String>,
    key: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    match env_map.get(key) {
        Some(raw) => raw.parse::<usize>().ok().filter(|n| *n >= 1).ok_or_else(|| {
            ConfigError::InvalidValue(key.to_string(), "must be an integer >= 1".to_string())
        }),
        None => Ok(default),
    }
}
