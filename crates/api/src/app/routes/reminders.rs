use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::Local;

use unipos_store::NewReminder;

use crate::app::AppState;
use crate::app::dto::UpdateReminderRequest;
use crate::app::errors::ApiError;
use crate::app::routes::not_found;
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_reminders).post(create_reminder).fallback(not_found))
        .route("/today", get(due_today).fallback(not_found))
        .route("/:id", put(update_reminder).fallback(not_found))
}

pub async fn list_reminders(
    Extension(state): Extension<Arc<AppState>>,
    Extension(_current): Extension<CurrentUser>,
) -> Result<axum::response::Response, ApiError> {
    Ok((StatusCode::OK, Json(state.store.scan_reminders())).into_response())
}

pub async fn create_reminder(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<NewReminder>,
) -> Result<axum::response::Response, ApiError> {
    let reminder = state.store.create_reminder(body);
    Ok((StatusCode::CREATED, Json(reminder)).into_response())
}

/// `GET /reminders/today`: due on the server's local calendar day and not
/// yet completed.
pub async fn due_today(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<axum::response::Response, ApiError> {
    let today = Local::now().date_naive();
    let due: Vec<_> = state
        .store
        .scan_reminders()
        .into_iter()
        .filter(|r| r.is_due_on(today))
        .collect();
    Ok((StatusCode::OK, Json(due)).into_response())
}

pub async fn update_reminder(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateReminderRequest>,
) -> Result<axum::response::Response, ApiError> {
    let mut reminder = state
        .store
        .scan_reminders()
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ApiError::not_found("Reminder not found"))?;

    if let Some(title) = body.title {
        reminder.title = title;
    }
    if let Some(due_date) = body.due_date {
        reminder.due_date = due_date;
    }
    if let Some(completed) = body.completed {
        reminder.completed = completed;
    }

    state.store.put_reminder(reminder.clone())?;
    Ok((StatusCode::OK, Json(reminder)).into_response())
}
