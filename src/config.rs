use std::path::PathBuf;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: PathBuf,
    pub create_if_missing: bool,
}

/// Defaults, then an optional `configuration.{toml,yaml,json}` in the working
/// directory, then `TRIVIA__SECTION__KEY` environment variables. `DB_PATH`
/// overrides the database path.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    dotenv::dotenv().ok();
    let mut builder = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 8080)?
        .set_default("database.path", "trivia.db")?
        .set_default("database.create_if_missing", true)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("TRIVIA")
                .prefix_separator("__")
                .separator("__"),
        );
    if let Ok(path) = dotenv::var("DB_PATH") {
        builder = builder.set_override("database.path", path)?;
    }
    builder.build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bind_address() {
        let app = ApplicationSettings {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        };
        assert_eq!(app.address(), "127.0.0.1:3000");
    }

    #[test]
    fn port_accepts_strings() {
        let app: ApplicationSettings =
            serde_json::from_str(r#"{"host": "localhost", "port": "8081"}"#).unwrap();
        assert_eq!(app.port, 8081);
    }
}
