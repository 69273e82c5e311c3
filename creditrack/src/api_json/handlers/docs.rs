use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::ReportRequest;

/// GET /help
pub async fn help_handler() -> impl Responder {
    // el periodo es exclusivo: con 202220 sólo cuentan registros hasta 20221x
    let example = ReportRequest {
        student_code: "710220101".to_string(),
        period: "202220".to_string(),
    };

    HttpResponse::Ok().json(json!({
        "endpoints": {
            "POST /report": "body JSON con student_code y period; devuelve el reporte completo",
            "GET /report": "igual que POST usando ?student_code=..&period=..",
            "GET /curriculum/groups": "grupos de paquetes relacionados y cursos comunes",
            "GET /help": "esta ayuda",
        },
        "example_request": example,
        "period_format": "YYYYS: 4 dígitos de año seguidos del semestre; el resto se ignora",
    }))
}
