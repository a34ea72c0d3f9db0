pub mod users;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody, get, web,
};
use std::time::Duration;

use crate::store::StoreError;

/// Latency added before responding to users requests.
#[derive(Debug, Clone, Copy)]
pub struct ResponseDelay(pub Duration);

impl ResponseDelay {
    async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Routes are mounted at the root so the paths match the public users API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(users::list_users)
        .service(users::get_user);
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UserNotFound(_) => APIError::NotFound(e.into()),
            _ => APIError::UnexpectedError(e.into()),
        }
    }
}
