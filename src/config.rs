use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "property_listings", about = "Read-only property listings API")]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON file holding the listing array.
    #[arg(long, env = "PROPERTIES_DATA", default_value = "data/properties.json")]
    pub data: PathBuf,

    /// `production` hides internal error detail; any other value is development.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub environment: Environment,

    /// Upper bound on astra worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 8)]
    pub workers: usize,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "production" {
            Environment::Production
        } else {
            Environment::Development
        })
    }
}

impl Environment {
    /// Whether internal error detail may be shown to clients.
    pub fn exposes_errors(self) -> bool {
        self != Environment::Production
    }
}
