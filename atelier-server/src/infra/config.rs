use std::{collections::BTreeSet, net::SocketAddr};

use clap::Args as ClapArgs;
use thiserror::Error;

/// Pepper used when none is configured. Fine for local development only.
pub const DEFAULT_PASSWORD_PEPPER: &str = "atelier-dev-pepper-change-me";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://atelier.db?mode=rwc";

/// Server settings shared by every subcommand. Each flag falls back to an
/// `ATELIER_*` environment variable, which may come from a `.env` file.
#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, global = true, env = "ATELIER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, global = true, env = "ATELIER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// SQLite connection URL
    #[arg(long, global = true, env = "ATELIER_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Secret used to sign session cookies. When unset a random key is
    /// generated at startup and every restart logs all users out.
    #[arg(long, global = true, env = "ATELIER_SESSION_SECRET", hide_env_values = true)]
    pub session_secret: Option<String>,

    /// Server-side pepper mixed into password hashes
    #[arg(
        long,
        global = true,
        env = "ATELIER_PASSWORD_PEPPER",
        default_value = DEFAULT_PASSWORD_PEPPER,
        hide_env_values = true
    )]
    pub password_pepper: String,

    /// Comma-separated usernames allowed to call the ownership admin endpoints
    #[arg(long, global = true, env = "ATELIER_ADMIN_USERS", value_delimiter = ',')]
    pub admin_users: Vec<String>,

    /// Mark session cookies `Secure` (serve over HTTPS)
    #[arg(long, global = true, env = "ATELIER_SECURE_COOKIES", default_value_t = false)]
    pub secure_cookies: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address {host}:{port}: {source}")]
    InvalidBindAddress {
        host: String,
        port: u16,
        source: std::net::AddrParseError,
    },
    #[error("password pepper must not be empty")]
    EmptyPepper,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port).parse().map_err(|source| {
            ConfigError::InvalidBindAddress {
                host: self.host.clone(),
                port: self.port,
                source,
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub password_pepper: String,
    pub session_secret: Option<String>,
    pub admin_users: BTreeSet<String>,
    pub secure_cookies: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("password_pepper", &"<redacted>")
            .field("session_secret", &self.session_secret.as_ref().map(|_| "<redacted>"))
            .field("admin_users", &self.admin_users)
            .field("secure_cookies", &self.secure_cookies)
            .finish()
    }
}

impl AuthConfig {
    pub fn is_default_pepper(&self) -> bool {
        self.password_pepper == DEFAULT_PASSWORD_PEPPER
    }

    pub fn is_admin(&self, username: &str) -> bool {
        self.admin_users.contains(username)
    }
}

impl Config {
    pub fn from_args(args: &ServeArgs) -> Result<Self, ConfigError> {
        if args.password_pepper.is_empty() {
            return Err(ConfigError::EmptyPepper);
        }

        let admin_users = args
            .admin_users
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        let session_secret = args
            .session_secret
            .clone()
            .filter(|secret| !secret.trim().is_empty());

        Ok(Self {
            server: ServerConfig {
                host: args.host.clone(),
                port: args.port,
            },
            database: DatabaseConfig {
                url: args.database_url.clone(),
            },
            auth: AuthConfig {
                password_pepper: args.password_pepper.clone(),
                session_secret,
                admin_users,
                secure_cookies: args.secure_cookies,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        serve: ServeArgs,
    }

    fn parse(args: &[&str]) -> Config {
        let cli = TestCli::try_parse_from(std::iter::once("atelier").chain(args.iter().copied()))
            .expect("arguments parse");
        Config::from_args(&cli.serve).expect("config builds")
    }

    #[test]
    fn admin_users_are_split_and_trimmed() {
        let config = parse(&["--admin-users", "alice, bob,,"]);
        assert!(config.auth.is_admin("alice"));
        assert!(config.auth.is_admin("bob"));
        assert!(!config.auth.is_admin("carol"));
        assert!(!config.auth.is_admin(""));
    }

    #[test]
    fn blank_session_secret_counts_as_unset() {
        let config = parse(&["--session-secret", "   "]);
        assert!(config.auth.session_secret.is_none());
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = parse(&["--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(
            config.server.bind_addr().unwrap(),
            "127.0.0.1:8080".parse().unwrap()
        );
    }

    #[test]
    fn rejects_unparseable_host() {
        let config = parse(&["--host", "not a host"]);
        assert!(matches!(
            config.server.bind_addr(),
            Err(ConfigError::InvalidBindAddress { .. })
        ));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = parse(&["--session-secret", "s3cret", "--password-pepper", "p3pper"]);
        let rendered = format!("{:?}", config.auth);
        assert!(!rendered.contains("s3cret"));
        assert!(!rendered.contains("p3pper"));
    }
}
