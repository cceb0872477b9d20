//! HTTP routes.
//!
//! `/entity`, `/user` and `/book` each expose find, create, update and
//! delete. Every failure body is `{"error": "..."}`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use shelfkeep_domain::{Book, Entity, Record};
use shelfkeep_shared::{CreateUserDto, StatusResponse, UpdateUserDto, UserDto};

use crate::app::App;
use crate::application::RecordService;

use super::error::ApiError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .merge(record_routes::<Entity>("/entity"))
        .merge(record_routes::<Book>("/book"))
        .route("/user", post(create_user))
        .route(
            "/user/{id}",
            get(find_user).put(update_user).delete(delete_user),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Records served in their domain shape
// =============================================================================

/// A record kind whose JSON body is the domain value itself.
pub trait RecordResource: Record + Serialize + DeserializeOwned {
    fn service(app: &App) -> &RecordService<Self>;

    /// PUT bodies take their identifier from the path.
    fn assign_id(&mut self, id: String);
}

impl RecordResource for Entity {
    fn service(app: &App) -> &RecordService<Self> {
        &app.entities
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl RecordResource for Book {
    fn service(app: &App) -> &RecordService<Self> {
        &app.books
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

fn record_routes<R: RecordResource>(prefix: &str) -> Router<Arc<App>> {
    Router::new().route(prefix, post(create_record::<R>)).route(
        &format!("{prefix}/{{id}}"),
        get(find_record::<R>)
            .put(update_record::<R>)
            .delete(delete_record::<R>),
    )
}

async fn find_record<R: RecordResource>(
    State(app): State<Arc<App>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<R>, ApiError> {
    let Path(id) = path?;
    let record = R::service(&app).execute_find(&id).await?;
    Ok(Json(record))
}

async fn create_record<R: RecordResource>(
    State(app): State<Arc<App>>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(record) = body?;
    R::service(&app).execute_create(record).await?;
    Ok(Json(StatusResponse::created()))
}

async fn update_record<R: RecordResource>(
    State(app): State<Arc<App>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Path(id) = path?;
    let Json(mut record) = body?;
    record.assign_id(id);
    R::service(&app).execute_update(record).await?;
    Ok(Json(StatusResponse::updated()))
}

async fn delete_record<R: RecordResource>(
    State(app): State<Arc<App>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Path(id) = path?;
    R::service(&app).execute_delete(&id).await?;
    Ok(Json(StatusResponse::deleted()))
}

// =============================================================================
// Users (transfer objects)
// =============================================================================

async fn find_user(
    State(app): State<Arc<App>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let Path(id) = path?;
    let user = app.users.execute_find(&id).await?;
    Ok(Json(user))
}

async fn create_user(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(dto) = body?;
    app.users.execute_create(dto).await?;
    Ok(Json(StatusResponse::created()))
}

async fn update_user(
    State(app): State<Arc<App>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Path(id) = path?;
    let Json(dto) = body?;
    app.users.execute_update(&id, dto).await?;
    Ok(Json(StatusResponse::updated()))
}

async fn delete_user(
    State(app): State<Arc<App>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Path(id) = path?;
    app.users.execute_delete(&id).await?;
    Ok(Json(StatusResponse::deleted()))
}
