use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::auth::AuthMember;
use crate::domain::error::AppError;
use crate::domain::services::bookmark::BookmarkService;

use actix_web::{
    HttpResponse, post,
    web::{Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(bookmark_store);
}

// TODO: pass the caller's own user id once the member aggregate exposes one
const PLACEHOLDER_USER_ID: i64 = 1;

#[utoipa::path(
    params(
        ("store-id" = i64, Path, description = "Identifier of the store to bookmark")
    ),
    responses(
        (status = 200, description = "Bookmark recorded"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    security(("access_key" = [])),
    tag = "Bookmark",
)]
#[post("/bookmark/{store_id}")]
pub async fn bookmark_store(
    store_id: Path<i64>,
    auth: AuthMember,
    bookmark_service: State<Arc<dyn BookmarkService>>,
) -> ApiResult {
    bookmark_service
        .bookmark_store(
            store_id.into_inner(),
            PLACEHOLDER_USER_ID,
            auth.authentication.member,
        )
        .await?;

    Ok(HttpResponse::Ok().finish())
}
