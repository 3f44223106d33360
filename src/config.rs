use crate::constants::*;
use std::env;

/// What a quote does with a place name that is not registered.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UnknownLocationPolicy {
    #[default]
    Fallback, // Measure from the hub and flag the name in the quote
    Reject, // Refuse the quote with an UnknownLocation error
}

impl std::str::FromStr for UnknownLocationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fallback" => Ok(UnknownLocationPolicy::Fallback),
            "reject" => Ok(UnknownLocationPolicy::Reject),
            _ => Err(format!(
                "Invalid unknown location policy: {}. Use 'fallback' or 'reject'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Registered location used in place of unknown names
    pub hub_location: String,
    pub unknown_location_policy: UnknownLocationPolicy,
    /// Maximum suggestions returned when the caller gives no limit
    pub suggestion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            hub_location: DEFAULT_HUB_LOCATION.to_string(),
            unknown_location_policy: UnknownLocationPolicy::default(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let suggestion_limit: usize = env::var("SUGGESTION_LIMIT")
            .unwrap_or_else(|_| DEFAULT_SUGGESTION_LIMIT.to_string())
            .parse()
            .map_err(|_| "Invalid SUGGESTION_LIMIT")?;

        if suggestion_limit == 0 || suggestion_limit > MAX_SUGGESTION_LIMIT {
            return Err(format!(
                "SUGGESTION_LIMIT must be between 1 and {}",
                MAX_SUGGESTION_LIMIT
            ));
        }

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            hub_location: env::var("HUB_LOCATION")
                .unwrap_or_else(|_| DEFAULT_HUB_LOCATION.to_string()),
            unknown_location_policy: env::var("UNKNOWN_LOCATION_POLICY")
                .unwrap_or_else(|_| "fallback".to_string())
                .parse()?,
            suggestion_limit,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "HOST",
        "PORT",
        "HUB_LOCATION",
        "UNKNOWN_LOCATION_POLICY",
        "SUGGESTION_LIMIT",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "fallback".parse::<UnknownLocationPolicy>(),
            Ok(UnknownLocationPolicy::Fallback)
        );
        assert_eq!(
            "Reject".parse::<UnknownLocationPolicy>(),
            Ok(UnknownLocationPolicy::Reject)
        );
        assert!("ignore".parse::<UnknownLocationPolicy>().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.hub_location, "hyderabad");
        assert_eq!(config.unknown_location_policy, UnknownLocationPolicy::Fallback);
        assert_eq!(config.suggestion_limit, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(config.server_address(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_default_matches_empty_env() {
        clear_env();
        let from_env = Config::from_env().unwrap();
        let default = Config::default();
        assert_eq!(default.port, DEFAULT_PORT);
        assert_eq!(default.server_address(), from_env.server_address());
        assert_eq!(default.suggestion_limit, from_env.suggestion_limit);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("PORT", "8080");
        env::set_var("HUB_LOCATION", "khammam");
        env::set_var("UNKNOWN_LOCATION_POLICY", "reject");
        env::set_var("SUGGESTION_LIMIT", "5");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.hub_location, "khammam");
        assert_eq!(config.unknown_location_policy, UnknownLocationPolicy::Reject);
        assert_eq!(config.suggestion_limit, 5);
    }

    #[test]
    #[serial]
    fn test_invalid_values() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        assert!(Config::from_env().is_err());
        clear_env();

        env::set_var("SUGGESTION_LIMIT", "0");
        assert!(Config::from_env().is_err());
        env::set_var("SUGGESTION_LIMIT", "500");
        assert!(Config::from_env().is_err());
        clear_env();

        env::set_var("UNKNOWN_LOCATION_POLICY", "shrug");
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
