//! HTTP server configuration.

use serde::Deserialize;

/// Where the web app listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind. Defaults to loopback.
    pub host: String,
    /// TCP port. Defaults to 8501.
    pub port: u16,
    /// Worker threads; 0 means one per CPU.
    pub workers: usize,
}

impl ServerConfig {
    /// `host:port` string suitable for binding.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Worker count with 0 resolved to the number of CPUs.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get()
        } else {
            self.workers
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8501,
            workers: 0,
        }
    }
}
