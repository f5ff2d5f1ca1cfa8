use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Site configuration loaded explicitly from environment variables.
///
/// The contact backend is configured separately through `ContactClientConfig::from_env`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Directory holding `/covers/*`, `/cv.pdf` and friends. `None` leaves assets to a CDN.
    pub assets_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORTFOLIO_BIND_ADDR`: socket address to listen on (default `127.0.0.1:8080`)
    /// - `PORTFOLIO_ASSETS_DIR`: directory of static assets; must exist when set
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = std::env::var("PORTFOLIO_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = parse_bind_addr(&bind_addr)?;

        let assets_dir = std::env::var("PORTFOLIO_ASSETS_DIR")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        if let Some(dir) = &assets_dir {
            if !dir.is_dir() {
                return Err(AppError::Config(format!(
                    "PORTFOLIO_ASSETS_DIR is not a directory: {}",
                    dir.display()
                )));
            }
        }

        Ok(Self {
            bind_addr,
            assets_dir,
        })
    }
}

fn parse_bind_addr(value: &str) -> Result<SocketAddr, AppError> {
    value.parse().map_err(|_| {
        AppError::Config(format!(
            "PORTFOLIO_BIND_ADDR must be a socket address, got {value:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_addr() {
        assert_eq!(parse_bind_addr(DEFAULT_BIND_ADDR).unwrap().port(), 8080);
        assert!(parse_bind_addr("0.0.0.0:3000").is_ok());
        assert!(matches!(parse_bind_addr("localhost"), Err(AppError::Config(_))));
    }
}
