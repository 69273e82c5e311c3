use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::api_json::group_views;
use crate::server::AppState;

/// GET /curriculum/groups
/// Grupos de paquetes relacionados ya resueltos, con sus cursos comunes.
pub async fn curriculum_groups_handler(state: web::Data<AppState>) -> impl Responder {
    let groups = group_views(&state.curriculum);
    HttpResponse::Ok().json(json!({
        "simple_courses": state.curriculum.simple_courses,
        "groups": groups,
    }))
}
