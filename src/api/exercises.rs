use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use super::validation::require_name;
use crate::auth::AuthUser;
use crate::errors::{AppError, AppResult};
use crate::models::{CreateExerciseRequest, Exercise, UpdateExerciseRequest};
use crate::services::ExerciseService;

pub fn exercise_routes(service: ExerciseService) -> Router {
    Router::new()
        .route("/", post(create_exercise))
        .route(
            "/:exercise_id",
            axum::routing::get(get_exercise)
                .patch(update_exercise)
                .delete(delete_exercise),
        )
        .with_state(service)
}

/// Create an exercise in the caller's catalog
pub async fn create_exercise(
    State(service): State<ExerciseService>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<CreateExerciseRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Exercise>)> {
    let name = require_name(&request.name)?;
    let exercise = service.create(name, user.user_id, request.description).await?;
    Ok((StatusCode::CREATED, Json(exercise)))
}

pub async fn get_exercise(
    State(service): State<ExerciseService>,
    user: AuthUser,
    WithRejection(Path(exercise_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<Exercise>> {
    Ok(Json(service.get(exercise_id, user.user_id).await?))
}

/// Replace name and description
pub async fn update_exercise(
    State(service): State<ExerciseService>,
    user: AuthUser,
    WithRejection(Path(exercise_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<UpdateExerciseRequest>, AppError>,
) -> AppResult<Json<Exercise>> {
    let name = require_name(&request.name)?;
    let exercise = service
        .update(exercise_id, name, user.user_id, request.description)
        .await?;
    Ok(Json(exercise))
}

pub async fn delete_exercise(
    State(service): State<ExerciseService>,
    user: AuthUser,
    WithRejection(Path(exercise_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<StatusCode> {
    service.delete(exercise_id, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
