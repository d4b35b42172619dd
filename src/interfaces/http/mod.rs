pub mod render;

use crate::application::ContractorQueryUseCase;
use crate::domain::contractor::SemanticField;
use crate::infrastructure::config::ServerConfig;
use actix_cors::Cors;
use actix_web::middleware::{Condition, Logger};
use actix_web::{dev::Server, get, web, App, HttpResponse, HttpServer, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use self::render::{render_table_fragment, INDEX_PAGE};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub struct HttpState {
    pub query: ContractorQueryUseCase,
    pub loaded_at: DateTime<Utc>,
}

impl HttpState {
    pub fn new(query: ContractorQueryUseCase) -> Self {
        Self {
            query,
            loaded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub rows: usize,
    pub columns: BTreeMap<SemanticField, Option<String>>,
    pub loaded_at: DateTime<Utc>,
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(INDEX_PAGE)
}

#[get("/all_contractors")]
async fn all_contractors(data: web::Data<HttpState>) -> impl Responder {
    let view = data.query.all_contractors();
    debug!(endpoint = "all_contractors", rows = view.len(), "Rendering table");

    HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(render_table_fragment(&view))
}

#[get("/filtered_contractors")]
async fn filtered_contractors(data: web::Data<HttpState>) -> impl Responder {
    let view = data.query.filtered_contractors();
    debug!(endpoint = "filtered_contractors", rows = view.len(), "Rendering table");

    HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(render_table_fragment(&view))
}

#[get("/health")]
async fn health(data: web::Data<HttpState>) -> impl Responder {
    let table = data.query.table();
    let columns = SemanticField::ALL
        .into_iter()
        .map(|field| (field, table.header_for(field).map(str::to_string)))
        .collect();

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        rows: table.len(),
        columns,
        loaded_at: data.loaded_at,
    })
}

/// Registers every route; shared by the server and the handler tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(all_contractors)
        .service(filtered_contractors)
        .service(health);
}

pub fn start_server(state: HttpState, config: &ServerConfig) -> std::io::Result<Server> {
    let state = web::Data::new(state);
    let cors_permissive = config.cors_permissive;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Condition::new(cors_permissive, Cors::permissive()))
            .app_data(state.clone())
            .configure(configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server
        .bind((config.host.as_str(), config.port))?
        .run();

    info!("Serving contractor data on http://{}", config.bind_addr());

    Ok(server)
}
