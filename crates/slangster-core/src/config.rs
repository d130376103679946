use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a provided value fails to parse. All variables
/// have defaults, so a bare environment is valid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a provided value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("SLANGSTER_ENV", "development"));
    let bind_addr = parse_addr("SLANGSTER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SLANGSTER_LOG_LEVEL", "info");
    let emoticon_lexicon_path = lookup("SLANGSTER_EMOTICON_LEXICON_PATH")
        .ok()
        .map(PathBuf::from);
    let slang_glossary_path = lookup("SLANGSTER_SLANG_PATH").ok().map(PathBuf::from);
    let rate_limit_per_min = parse_usize("SLANGSTER_RATE_LIMIT_PER_MIN", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        emoticon_lexicon_path,
        slang_glossary_path,
        rate_limit_per_min,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.emoticon_lexicon_path.is_none());
        assert!(cfg.slang_glossary_path.is_none());
        assert_eq!(cfg.rate_limit_per_min, 120);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SLANGSTER_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SLANGSTER_BIND_ADDR"),
            "expected InvalidEnvVar(SLANGSTER_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_rate_limit() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SLANGSTER_RATE_LIMIT_PER_MIN", "lots");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SLANGSTER_RATE_LIMIT_PER_MIN"),
            "expected InvalidEnvVar(SLANGSTER_RATE_LIMIT_PER_MIN), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_reads_lexicon_overrides() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SLANGSTER_EMOTICON_LEXICON_PATH", "./data/emoticons.csv");
        map.insert("SLANGSTER_SLANG_PATH", "./data/slang.csv");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(
            cfg.emoticon_lexicon_path.as_deref(),
            Some(std::path::Path::new("./data/emoticons.csv"))
        );
        assert_eq!(
            cfg.slang_glossary_path.as_deref(),
            Some(std::path::Path::new("./data/slang.csv"))
        );
    }

    #[test]
    fn build_app_config_rate_limit_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SLANGSTER_RATE_LIMIT_PER_MIN", "30");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.rate_limit_per_min, 30);
    }
}
