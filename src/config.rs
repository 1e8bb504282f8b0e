use anyhow::Context;
use clap::{Parser, ValueEnum};

/// Storage backend behind the api
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Memory,
    Postgres,
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Memory => write!(f, "memory"),
            StoreKind::Postgres => write!(f, "postgres"),
        }
    }
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = "Serve a todo list over http")]
pub struct Settings {
    #[clap(long, env = "TODO_STORE", value_enum, default_value = "memory")]
    pub store: StoreKind,

    #[clap(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Num of worker threads
    #[clap(long, env = "WORKERS", default_value_t = 1)]
    pub workers: usize,

    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl Settings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_url(&self) -> anyhow::Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL must be set for the postgres store")
    }
}
