use std::env;

use crate::error::StoreAccessError;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_USER: &str = "DATABASE_USER";
pub const DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, StoreAccessError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreAccessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database: DatabaseConfig::from_lookup(&lookup)?,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}

/// Access configuration for the discount store
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Connection string without credentials, e.g. `postgres://localhost:5432/atdit`
    pub url: String,
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl DatabaseConfig {
    /// Read url, user and password; every missing key is logged and reported
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreAccessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL).filter(|v| !v.is_empty());
        let user = lookup(DATABASE_USER).filter(|v| !v.is_empty());
        let password = lookup(DATABASE_PASSWORD);

        let mut missing = Vec::new();
        for (key, present) in [
            (DATABASE_URL, url.is_some()),
            (DATABASE_USER, user.is_some()),
            (DATABASE_PASSWORD, password.is_some()),
        ] {
            if !present {
                tracing::error!("database access property not maintained: {}", key);
                missing.push(key);
            }
        }

        match (url, user, password) {
            (Some(url), Some(user), Some(password)) => Ok(Self {
                url,
                user,
                password,
            }),
            _ => Err(StoreAccessError::Configuration(format!(
                "missing {}",
                missing.join(", ")
            ))),
        }
    }

    /// Connection URL with the credentials spliced in after the scheme
    ///
    /// Credentials already present in `url` are replaced.
    pub fn connection_url(&self) -> Result<String, StoreAccessError> {
        let (scheme, rest) = self.url.split_once("://").ok_or_else(|| {
            StoreAccessError::Configuration(format!(
                "{} has no scheme: {}",
                DATABASE_URL, self.url
            ))
        })?;

        let authority_end = rest.find('/').unwrap_or(rest.len());
        let (authority, path) = rest.split_at(authority_end);
        let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);

        Ok(format!(
            "{}://{}:{}@{}{}",
            scheme,
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            host,
            path
        ))
    }
}
