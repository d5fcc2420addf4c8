//! # Shop Configuration
//!
//! Tunable limits for order drafts. Every field has a default, so an empty
//! environment yields the stock shop rules.
//!
//! ```bash
//! POTION_SHOP_ORDER_PREFIX=ELX POTION_SHOP_MIN_INGREDIENTS=4 cargo run
//! ```

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Prefix shared by every environment variable read by [`ShopConfig::from_env`].
pub const ENV_PREFIX: &str = "POTION_SHOP_";

/// Longest lead time a new draft may propose, about a century.
pub const MAX_READY_LEAD_DAYS: i64 = 36_500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// First segment of every order number.
    pub order_prefix: String,
    /// Fewest ingredient lines an order may have.
    pub min_ingredients: usize,
    pub ordered_by_min_len: usize,
    pub ordered_by_max_len: usize,
    pub address_min_len: usize,
    pub address_max_len: usize,
    /// Days between the order date and the ready date a new draft proposes.
    pub ready_lead_days: i64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            order_prefix: "POT".to_string(),
            min_ingredients: 3,
            ordered_by_min_len: 2,
            ordered_by_max_len: 100,
            address_min_len: 5,
            address_max_len: 200,
            ready_lead_days: 1,
        }
    }
}

impl ShopConfig {
    /// Reads `POTION_SHOP_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`ShopConfig::from_env`], but from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: ShopConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        config.check()?;
        debug!(?config, "Loaded shop configuration");
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.order_prefix.is_empty() {
            return Err(ConfigError::Invalid("order_prefix must not be empty".into()));
        }
        if self.ordered_by_min_len > self.ordered_by_max_len {
            return Err(ConfigError::Invalid(
                "ordered_by_min_len exceeds ordered_by_max_len".into(),
            ));
        }
        if self.address_min_len > self.address_max_len {
            return Err(ConfigError::Invalid(
                "address_min_len exceeds address_max_len".into(),
            ));
        }
        if !(1..=MAX_READY_LEAD_DAYS).contains(&self.ready_lead_days) {
            return Err(ConfigError::Invalid(format!(
                "ready_lead_days must be between 1 and {MAX_READY_LEAD_DAYS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = ShopConfig::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_prefixed_overrides() {
        let config = ShopConfig::from_vars(vars(&[
            ("POTION_SHOP_ORDER_PREFIX", "ELX"),
            ("POTION_SHOP_MIN_INGREDIENTS", "4"),
        ]))
        .unwrap();
        assert_eq!(config.order_prefix, "ELX");
        assert_eq!(config.min_ingredients, 4);
        assert_eq!(config.address_max_len, 200);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = ShopConfig::from_vars(vars(&[("POTION_SHOP_MIN_INGREDIENTS", "many")]));
        assert!(matches!(err, Err(ConfigError::Env(_))));

        let err = ShopConfig::from_vars(vars(&[("POTION_SHOP_READY_LEAD_DAYS", "0")]));
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let err = ShopConfig::from_vars(vars(&[("POTION_SHOP_READY_LEAD_DAYS", "100000000")]));
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let config =
            ShopConfig::from_vars(vars(&[("POTION_SHOP_READY_LEAD_DAYS", "36500")])).unwrap();
        assert_eq!(config.ready_lead_days, MAX_READY_LEAD_DAYS);
    }
}
