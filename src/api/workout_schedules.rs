use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post},
    Router,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use super::validation::require_name;
use crate::auth::AuthUser;
use crate::errors::{AppError, AppResult};
use crate::models::{AddRestToBlockRequest, AddTemplateToBlockRequest, CreateWorkoutScheduleRequest, WorkoutSchedule};
use crate::services::WorkoutScheduleService;

type SchedulePath = WithRejection<Path<Uuid>, AppError>;

pub fn workout_schedule_routes(service: WorkoutScheduleService) -> Router {
    Router::new()
        .route("/", post(create_schedule))
        .route("/:schedule_id", get(get_schedule).delete(delete_schedule))
        .route("/:schedule_id/block/template", post(add_template_to_block))
        .route("/:schedule_id/block/rest", post(add_rest_to_block))
        .route("/:schedule_id/block/:block_item_id", delete(remove_block_item))
        .route("/:schedule_id/activate", patch(activate_schedule))
        .route("/:schedule_id/deactivate", patch(deactivate_schedule))
        .with_state(service)
}

/// Create an inactive schedule with an empty block
pub async fn create_schedule(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutScheduleRequest>, AppError>,
) -> AppResult<(StatusCode, Json<WorkoutSchedule>)> {
    let name = require_name(&request.name)?;
    let schedule = service.create(name, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

pub async fn get_schedule(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Path(schedule_id), _): SchedulePath,
) -> AppResult<Json<WorkoutSchedule>> {
    Ok(Json(service.get(schedule_id, user.user_id).await?))
}

pub async fn delete_schedule(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Path(schedule_id), _): SchedulePath,
) -> AppResult<StatusCode> {
    service.delete(schedule_id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_template_to_block(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Path(schedule_id), _): SchedulePath,
    WithRejection(Json(request), _): WithRejection<Json<AddTemplateToBlockRequest>, AppError>,
) -> AppResult<(StatusCode, Json<WorkoutSchedule>)> {
    let schedule = service
        .add_template_to_block(request.template_id, user.user_id, schedule_id)
        .await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

pub async fn add_rest_to_block(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Path(schedule_id), _): SchedulePath,
    WithRejection(Json(request), _): WithRejection<Json<AddRestToBlockRequest>, AppError>,
) -> AppResult<(StatusCode, Json<WorkoutSchedule>)> {
    request.validate()?;

    let schedule = service
        .add_rest_to_block(request.period_seconds, user.user_id, schedule_id)
        .await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Remove one block item; the remaining items are renumbered
pub async fn remove_block_item(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Path((schedule_id, block_item_id)), _): WithRejection<Path<(Uuid, Uuid)>, AppError>,
) -> AppResult<StatusCode> {
    service
        .remove_block_item(user.user_id, schedule_id, block_item_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn activate_schedule(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Path(schedule_id), _): SchedulePath,
) -> AppResult<Json<WorkoutSchedule>> {
    Ok(Json(service.set_active(schedule_id, user.user_id).await?))
}

pub async fn deactivate_schedule(
    State(service): State<WorkoutScheduleService>,
    user: AuthUser,
    WithRejection(Path(schedule_id), _): SchedulePath,
) -> AppResult<Json<WorkoutSchedule>> {
    Ok(Json(service.set_inactive(schedule_id, user.user_id).await?))
}
