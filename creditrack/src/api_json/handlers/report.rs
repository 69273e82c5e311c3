use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::{error, warn};

use crate::algorithm::report_for_student;
use crate::api_json::{request_from_query, ReportRequest};
use crate::server::AppState;

/// POST /report
/// Body: `{"student_code": "...", "period": "YYYYS"}`
pub async fn report_handler(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    let body_value = body.into_inner();
    let req: ReportRequest = match serde_json::from_value(body_value) {
        Ok(r) => r,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("failed to parse input: {}", e)}));
        }
    };
    respond_report(&state, &req)
}

/// GET /report?student_code=...&period=...
pub async fn report_get_handler(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let qm = query.into_inner();
    let req = match request_from_query(&qm) {
        Ok(r) => r,
        Err(msg) => return HttpResponse::BadRequest().json(json!({"error": msg})),
    };
    respond_report(&state, &req)
}

fn respond_report(state: &AppState, req: &ReportRequest) -> HttpResponse {
    if req.student_code.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({"error": "student_code is required"}));
    }

    // el periodo de corte se valida antes de tocar los registros
    let cutoff = match req.cutoff() {
        Ok(p) => p,
        Err(e) => {
            warn!(period = %req.period, "periodo de corte inválido");
            return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
        }
    };

    match report_for_student(&state.table, &state.curriculum, req.student_code.trim(), cutoff) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            error!(student = %req.student_code, "no se pudo generar el reporte: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({"error": format!("failed to build report: {}", e)}))
        }
    }
}
