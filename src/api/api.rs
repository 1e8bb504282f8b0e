use actix_cors::Cors;
use actix_web::{self, middleware::Logger, web, App, HttpServer};

use crate::{config::Settings, store::TodoStore};

use super::todos_handler;

/// Registers the todo routes for a store of type `S`
pub fn configure<S: TodoStore>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todos")
            .route("", web::get().to(todos_handler::get_todos::<S>))
            .route("", web::post().to(todos_handler::create_todo::<S>))
            .route("/{id}", web::get().to(todos_handler::get_todo::<S>))
            .route("/{id}", web::delete().to(todos_handler::delete_todo::<S>))
            .route(
                "/{id}/complete",
                web::patch().to(todos_handler::toggle_todo_completeness::<S>),
            )
            .route(
                "/{id}/delete",
                web::patch().to(todos_handler::mark_todo_as_deleted::<S>),
            )
            .route(
                "/{id}/restore",
                web::patch().to(todos_handler::restore_todo::<S>),
            ),
    );
}

/// Serves the todo api until the server is stopped
///
/// The store is shared by every worker and dropped once the server exits.
pub async fn start_server<S: TodoStore>(store: S, settings: &Settings) -> std::io::Result<()> {
    let store = web::Data::new(store);

    log::info!(
        "Starting {} store server on {}",
        settings.store,
        settings.bind_address()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .configure(configure::<S>)
    })
    .workers(settings.workers)
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await
}
