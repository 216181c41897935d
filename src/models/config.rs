use serde::Deserialize;

/// Configuration options for the catalog server, resolved once at startup.
///
/// The core never reads the environment directly; the binary deserializes this
/// struct from the config file and environment overrides and injects it.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
