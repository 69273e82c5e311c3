use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::api_json::handlers::{
    curriculum_groups_handler, help_handler, report_get_handler, report_handler,
};
use crate::models::CurriculumStructure;
use crate::records::RecordsTable;

/// Estado compartido del servidor: la tabla de registros y el currículo se
/// cargan una sola vez y todas las peticiones los leen.
pub struct AppState {
    pub table: RecordsTable,
    pub curriculum: CurriculumStructure,
}

impl AppState {
    pub fn new(table: RecordsTable, curriculum: CurriculumStructure) -> Self {
        AppState { table, curriculum }
    }
}

/// Registro de rutas; `run_server` y los tests lo comparten.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/report", web::post().to(report_handler))
        .route("/report", web::get().to(report_get_handler))
        .route("/curriculum/groups", web::get().to(curriculum_groups_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(bind_addr: &str, state: AppState) -> std::io::Result<()> {
    info!(
        bind = bind_addr,
        records = state.table.len(),
        groups = state.curriculum.groups.len(),
        "iniciando servidor"
    );
    let data = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
