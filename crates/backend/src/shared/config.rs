use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Собранный фронтенд (выход `trunk build`)
    pub dist_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
dist_dir = "dist"
"#;

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("bad server address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (build.rs copies it there)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolves the bundle directory.
///
/// Absolute paths are used as is. A relative path is looked up next to the
/// executable first, then relative to the working directory.
pub fn resolve_dist_dir(config: &Config) -> PathBuf {
    let dist = Path::new(&config.site.dist_dir);
    if dist.is_absolute() {
        return dist.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(dist);
            if candidate.is_dir() {
                return candidate;
            }
        }
    }

    dist.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.dist_dir, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
    }

    #[test]
    fn test_custom_config() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [site]
            dist_dir = "/srv/tech-handyman"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.socket_addr().unwrap().port(), 8080);
        assert_eq!(resolve_dist_dir(&config), PathBuf::from("/srv/tech-handyman"));
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nhost = \"0.0.0.0\"\nport = 1\n").is_err());
    }

    #[test]
    fn test_bad_host() {
        let config = Config {
            server: ServerConfig {
                host: "not a host".into(),
                port: 80,
            },
            site: SiteConfig {
                dist_dir: "dist".into(),
            },
        };
        assert!(config.server.socket_addr().is_err());
    }
}
