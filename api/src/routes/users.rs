use actix_web::{HttpResponse, get, web};
use payloads::UserId;

use crate::store::UserDirectory;

use super::{APIError, ResponseDelay};

#[tracing::instrument(skip(directory, delay))]
#[get("/users")]
pub async fn list_users(
    directory: web::Data<UserDirectory>,
    delay: web::Data<ResponseDelay>,
) -> Result<HttpResponse, APIError> {
    delay.wait().await;
    Ok(HttpResponse::Ok().json(directory.list_users()))
}

#[tracing::instrument(skip(directory, delay))]
#[get("/users/{user_id}")]
pub async fn get_user(
    user_id: web::Path<u64>,
    directory: web::Data<UserDirectory>,
    delay: web::Data<ResponseDelay>,
) -> Result<HttpResponse, APIError> {
    delay.wait().await;
    let user = directory.get_user(&UserId(user_id.into_inner()))?;
    Ok(HttpResponse::Ok().json(user))
}
