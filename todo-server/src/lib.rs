pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone, PartialEq)]
    pub struct Config {
        #[serde(default = "default_database_url")]
        pub database_url: String,
        #[serde(default = "default_port")]
        pub port: u16,
        /// Comma-separated list of origins allowed to call the API, or `*`.
        #[serde(default = "default_cors_origins")]
        pub cors_origins: String,
    }

    impl Config {
        /// Loads configuration from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            Self::load(config::Environment::default())
        }

        fn load(environment: config::Environment) -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(environment)
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }

        /// Returns the origins allowed by CORS, or `None` when any origin is allowed.
        pub fn allowed_origins(&self) -> Option<Vec<String>> {
            let origins: Vec<String> = self
                .cors_origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();

            if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
                None
            } else {
                Some(origins)
            }
        }
    }

    fn default_database_url() -> String {
        "sqlite://todos.db?mode=rwc".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_cors_origins() -> String {
        "*".to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn environment(vars: &[(&str, &str)]) -> config::Environment {
            let source: config::Map<String, String> = vars
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
            config::Environment::default().source(Some(source))
        }

        #[test]
        fn can_load_defaults_from_empty_environment() {
            let config = Config::load(environment(&[])).unwrap();

            assert_eq!(config.database_url, "sqlite://todos.db?mode=rwc");
            assert_eq!(config.port, 8080);
            assert_eq!(config.cors_origins, "*");
        }

        #[test]
        fn can_load_values_from_environment() {
            let config = Config::load(environment(&[
                ("DATABASE_URL", "sqlite::memory:"),
                ("PORT", "3000"),
                ("CORS_ORIGINS", "http://localhost:5173"),
            ]))
            .unwrap();

            assert_eq!(config.database_url, "sqlite::memory:");
            assert_eq!(config.port, 3000);
            assert_eq!(config.cors_origins, "http://localhost:5173");
        }

        #[test]
        fn rejects_non_numeric_port() {
            let result = Config::load(environment(&[("PORT", "eighty")]));
            assert!(result.is_err());
        }

        #[test]
        fn wildcard_or_empty_origins_allow_any_origin() {
            for origins in ["*", "", " , ", "http://a.test,*"] {
                let config = Config {
                    database_url: default_database_url(),
                    port: default_port(),
                    cors_origins: origins.to_string(),
                };
                assert_eq!(config.allowed_origins(), None, "'{origins}'");
            }
        }

        #[test]
        fn splits_and_trims_origin_list() {
            let config = Config {
                database_url: default_database_url(),
                port: default_port(),
                cors_origins: "http://a.test, http://b.test ,".to_string(),
            };

            assert_eq!(
                config.allowed_origins(),
                Some(vec![
                    "http://a.test".to_string(),
                    "http://b.test".to_string()
                ])
            );
        }
    }
}
pub mod entities;
pub mod todo;
pub mod web;
