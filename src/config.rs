use std::time::Duration;

/// Connection settings for one check invocation. Built from the CLI in
/// `main` and passed down by value; no layer re-reads the arguments.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl PluginConfig {
    /// Absolute URL for an API path (path given without a leading slash).
    pub fn endpoint(&self, path: &str) -> String {
        format!("http://{}:{}/{}", self.host, self.port, path)
    }
}
