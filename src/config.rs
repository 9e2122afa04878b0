use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mock-http-server")]
#[command(
    about = "Run a simple HTTP mock server. List of available paths: ['/health', '/json', '/xml']",
    long_about = None
)]
pub struct Config {
    /// Specify the IP address which server should listen
    #[arg(short, long, env = "SERVICE_HOST", default_value = "0.0.0.0")]
    pub listen: String,

    /// Specify the port which server should listen
    #[arg(short, long, env = "SERVICE_PORT", default_value_t = 80)]
    pub port: u16,

    /// Print the OpenAPI document and exit
    #[arg(long)]
    pub openapi: bool,
}

impl Config {
    /// `host:port` the server binds to; the host may be a name or an IP
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen, self.port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen);
        tracing::info!("  Port: {}", self.port);
    }
}
