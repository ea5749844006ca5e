//! main file for the server

mod controller;
pub mod model;
mod routes;
mod state;
mod store;

use actix_web::{middleware::Logger, web, App, HttpServer};
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;

/// Run the server
pub async fn run(ServerConfig{ addr }: ServerConfig) -> std::io::Result<()> {
    // shared by every worker, so all of them see the same orders
    let state = web::Data::new(AppState::new());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes::config)
    })
        .bind(addr)?
        .run()
        .await
}
