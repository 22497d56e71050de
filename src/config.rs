use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
    pub jwt: JwtConfig,
}

/// The secret is the base64 encoding of the raw HS256 key bytes; it is
/// decoded exactly once at startup.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "storemark".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                jwt: JwtConfig {
                    // development-only key, overridden per environment
                    secret: "c3RvcmVtYXJrLWRldmVsb3BtZW50LXNpZ25pbmcta2V5LTAwMA==".to_string(),
                },
                surrealdb: SurrealDbConfig {
                    host: "localhost".to_string(),
                    port: 8000,
                    username: "root".to_string(),
                    password: "root".to_string(),
                    namespace: "storemark".to_string(),
                    database: "storemark".to_string(),
                    migration: true,
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}
