use std::env;

/// Address the HTTP listener binds to, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Reads `SERVICE_IP` (default "127.0.0.1") and `SERVICE_PORT`
    /// (default "8080").
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string());

        Self { ip, port }
    }

    /// Bind address in "ip:port" form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
