use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch, post, put},
    Router,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use super::validation::require_name;
use crate::auth::AuthUser;
use crate::errors::{AppError, AppResult};
use crate::models::{
    CreateWorkoutTemplateRequest, RestPeriodRequest, SetCountRequest, TemplateExerciseRequest, WorkoutTemplate,
};
use crate::services::WorkoutTemplateService;

pub fn workout_template_routes(service: WorkoutTemplateService) -> Router {
    Router::new()
        .route("/", post(create_template).get(list_templates))
        .route("/:template_id", get(get_template).delete(delete_template))
        .route("/:template_id/exercises", post(add_template_exercise))
        .route(
            "/:template_id/exercises/:order",
            put(replace_template_exercise).delete(remove_template_exercise),
        )
        .route("/:template_id/exercises/:order/sets", patch(set_template_set_count))
        .route(
            "/:template_id/exercises/:order/rest-period",
            patch(set_template_rest_period),
        )
        .with_state(service)
}

pub async fn create_template(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<CreateWorkoutTemplateRequest>, AppError>,
) -> AppResult<(StatusCode, Json<WorkoutTemplate>)> {
    let name = require_name(&request.name)?;
    let template = service.create(name, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// All templates owned by the caller
pub async fn list_templates(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
) -> AppResult<Json<Vec<WorkoutTemplate>>> {
    Ok(Json(service.get_all(user.user_id).await?))
}

pub async fn get_template(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Path(template_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<WorkoutTemplate>> {
    Ok(Json(service.get(template_id, user.user_id).await?))
}

pub async fn delete_template(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Path(template_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<StatusCode> {
    service.delete(template_id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_template_exercise(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Path(template_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<TemplateExerciseRequest>, AppError>,
) -> AppResult<(StatusCode, Json<WorkoutTemplate>)> {
    let template = service
        .add_exercise(
            request.exercise_id,
            template_id,
            user.user_id,
            request.set_count,
            request.rest_period_seconds,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// Swap the exercise at `order` in place, keeping its position
pub async fn replace_template_exercise(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Path((template_id, order)), _): WithRejection<Path<(Uuid, u32)>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<TemplateExerciseRequest>, AppError>,
) -> AppResult<Json<WorkoutTemplate>> {
    service
        .replace_exercise(
            template_id,
            user.user_id,
            order,
            request.exercise_id,
            request.set_count,
            request.rest_period_seconds,
        )
        .await?;
    Ok(Json(service.get(template_id, user.user_id).await?))
}

pub async fn remove_template_exercise(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Path((template_id, order)), _): WithRejection<Path<(Uuid, u32)>, AppError>,
) -> AppResult<StatusCode> {
    service.remove_exercise(template_id, user.user_id, order).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_template_set_count(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Path((template_id, order)), _): WithRejection<Path<(Uuid, u32)>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<SetCountRequest>, AppError>,
) -> AppResult<Json<WorkoutTemplate>> {
    service
        .set_set_count(request.set_count, template_id, user.user_id, order)
        .await?;
    Ok(Json(service.get(template_id, user.user_id).await?))
}

pub async fn set_template_rest_period(
    State(service): State<WorkoutTemplateService>,
    user: AuthUser,
    WithRejection(Path((template_id, order)), _): WithRejection<Path<(Uuid, u32)>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<RestPeriodRequest>, AppError>,
) -> AppResult<Json<WorkoutTemplate>> {
    service
        .set_rest_period(request.rest_period_seconds, template_id, user.user_id, order)
        .await?;
    Ok(Json(service.get(template_id, user.user_id).await?))
}
