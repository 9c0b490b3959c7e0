//! Environment-driven configuration.
//!
//! Every knob has a default so a bare `simulador-web` starts a working
//! instance; deployments override through process environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port, bound on 0.0.0.0.
    pub port: u16,
    /// Verbose logging toggle.
    pub debug: bool,
    /// Admin credential pair checked by /admin/login.
    pub admin_usuario: String,
    pub admin_senha: String,
    /// Lead CSV location.
    pub data_file: PathBuf,
    /// Pre-built SPA bundle directory.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok()),
            debug: parse_debug(env::var("DEBUG").ok()),
            admin_usuario: env::var("ADMIN_USUARIO").unwrap_or_else(|_| "Elfem/154".to_string()),
            admin_senha: env::var("ADMIN_SENHA").unwrap_or_else(|_| "5567E".to_string()),
            data_file: env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dados_controle.csv")),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn parse_debug(value: Option<String>) -> bool {
    value
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_parsing() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
        assert_eq!(parse_port(Some("8080".to_string())), 8080);
        assert_eq!(parse_port(Some("not-a-port".to_string())), DEFAULT_PORT);
    }

    #[test]
    fn test_debug_parsing() {
        assert!(!parse_debug(None));
        assert!(parse_debug(Some("true".to_string())));
        assert!(parse_debug(Some("True".to_string())));
        assert!(!parse_debug(Some("1".to_string())));
        assert!(!parse_debug(Some("false".to_string())));
    }
}
