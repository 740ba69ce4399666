use anyhow::Context;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT must be a port number, got {raw:?}"))?,
            Err(_) => 3000,
        };
        let sentry_dsn = std::env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.is_empty());

        Ok(Self { host, port, sentry_dsn })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
