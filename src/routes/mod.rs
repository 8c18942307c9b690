// Route exports
pub mod cricket;
pub mod pages;

use crate::models::ErrorResponse;
use crate::services::CricbuzzError;
use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

pub use cricket::AppState;

/// Routing table for the whole service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure)
        .service(web::scope("/api").configure(cricket::configure));
}

impl ResponseError for CricbuzzError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
