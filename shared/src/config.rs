pub struct Config {
    pub host: String,
    pub port: u16,
    /// Development mode. Only raises the default log level; never set it in production.
    pub debug: bool,
    /// Raw `DEMO_PORT` value that failed to parse, reported once logging is up.
    pub rejected_port: Option<String>,
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 5000;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DEMO_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let (port, rejected_port) = match lookup("DEMO_PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => (port, None),
                Err(_) => (Self::DEFAULT_PORT, Some(raw)),
            },
            None => (Self::DEFAULT_PORT, None),
        };
        let debug = lookup("DEMO_DEBUG").is_some_and(|raw| parse_flag(&raw));

        Self {
            host,
            port,
            debug,
            rejected_port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log directive used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            debug: false,
            rejected_port: None,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert!(!config.debug);
        assert_eq!(config.default_log_level(), "info");
    }

    #[test]
    fn test_default_impl_matches_empty_env() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), config_from(&[]).bind_addr());
        assert!(!config.debug);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DEMO_HOST", "127.0.0.1"),
            ("DEMO_PORT", "8081"),
            ("DEMO_DEBUG", "TRUE"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert!(config.debug);
        assert_eq!(config.default_log_level(), "debug");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = config_from(&[("DEMO_PORT", "not-a-port")]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.rejected_port.as_deref(), Some("not-a-port"));

        let config = config_from(&[("DEMO_PORT", "70000")]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.rejected_port.as_deref(), Some("70000"));

        assert!(config_from(&[("DEMO_PORT", "5001")]).rejected_port.is_none());
    }

    #[test]
    fn test_debug_flag_values() {
        for value in ["1", "true", "Yes", " on "] {
            assert!(config_from(&[("DEMO_DEBUG", value)]).debug, "{value}");
        }
        for value in ["0", "false", "off", ""] {
            assert!(!config_from(&[("DEMO_DEBUG", value)]).debug, "{value}");
        }
    }
}
