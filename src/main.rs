#[macro_use]
extern crate diesel;

use clap::Parser;

use api::api::start_server;
use config::{Settings, StoreKind};
use store::{MemoryTodoStore, PgTodoStore};

mod api;
mod config;
mod errors;
mod models;
mod schema;
mod store;

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or("todo_server=info,actix_web=info,actix_server=info"),
    )
    .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    init_logging();

    let settings = Settings::parse();

    match settings.store {
        StoreKind::Memory => start_server(MemoryTodoStore::new(), &settings).await?,
        StoreKind::Postgres => {
            let store = PgTodoStore::connect(settings.database_url()?)?;

            start_server(store, &settings).await?
        }
    }

    log::info!("Server stopped, {} store released", settings.store);

    Ok(())
}
