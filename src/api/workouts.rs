use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post},
    Router,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::{AppError, AppResult};
use crate::models::{AddWorkoutExerciseRequest, StartWorkoutFromTemplateRequest, WeightAndRepsRequest, Workout};
use crate::services::WorkoutService;

type ExercisePath = WithRejection<Path<(Uuid, u32)>, AppError>;
type SetPath = WithRejection<Path<(Uuid, u32, u32)>, AppError>;

pub fn workout_routes(service: WorkoutService) -> Router {
    Router::new()
        .route("/from-template", post(start_from_template))
        .route("/empty", post(start_empty))
        .route("/:workout_id", get(get_workout))
        .route("/:workout_id/finish", patch(finish_workout))
        .route("/:workout_id/exercises", post(add_workout_exercise))
        .route("/:workout_id/exercises/:exercise_order", delete(remove_workout_exercise))
        .route(
            "/:workout_id/exercises/:exercise_order/complete",
            patch(complete_exercise),
        )
        .route(
            "/:workout_id/exercises/:exercise_order/un-complete",
            patch(uncomplete_exercise),
        )
        .route("/:workout_id/exercises/:exercise_order/sets", post(add_set))
        .route(
            "/:workout_id/exercises/:exercise_order/sets/:set_order",
            delete(remove_set),
        )
        .route(
            "/:workout_id/exercises/:exercise_order/sets/:set_order/weight-and-reps",
            patch(record_weight_and_reps),
        )
        .route(
            "/:workout_id/exercises/:exercise_order/sets/:set_order/complete",
            patch(complete_set),
        )
        .route(
            "/:workout_id/exercises/:exercise_order/sets/:set_order/un-complete",
            patch(uncomplete_set),
        )
        .with_state(service)
}

/// Start a workout as a copy of one of the caller's templates
pub async fn start_from_template(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Json(request), _): WithRejection<Json<StartWorkoutFromTemplateRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Workout>)> {
    let workout = service
        .start_from_template(Utc::now(), user.user_id, request.template_id)
        .await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn start_empty(
    State(service): State<WorkoutService>,
    user: AuthUser,
) -> AppResult<(StatusCode, Json<Workout>)> {
    let workout = service.start_empty(Utc::now(), user.user_id).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn get_workout(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path(workout_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<Workout>> {
    Ok(Json(service.get(workout_id, user.user_id).await?))
}

pub async fn finish_workout(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path(workout_id), _): WithRejection<Path<Uuid>, AppError>,
) -> AppResult<Json<Workout>> {
    service.finish(user.user_id, workout_id, Utc::now()).await?;
    Ok(Json(service.get(workout_id, user.user_id).await?))
}

pub async fn add_workout_exercise(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path(workout_id), _): WithRejection<Path<Uuid>, AppError>,
    WithRejection(Json(request), _): WithRejection<Json<AddWorkoutExerciseRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Workout>)> {
    service
        .add_exercise(user.user_id, workout_id, request.exercise_id)
        .await?;
    let workout = service.get(workout_id, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn remove_workout_exercise(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order)), _): ExercisePath,
) -> AppResult<StatusCode> {
    service
        .remove_exercise(user.user_id, workout_id, exercise_order)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn complete_exercise(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order)), _): ExercisePath,
) -> AppResult<Json<Workout>> {
    service
        .mark_exercise_completed(user.user_id, workout_id, exercise_order)
        .await?;
    Ok(Json(service.get(workout_id, user.user_id).await?))
}

pub async fn uncomplete_exercise(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order)), _): ExercisePath,
) -> AppResult<Json<Workout>> {
    service
        .mark_exercise_uncompleted(user.user_id, workout_id, exercise_order)
        .await?;
    Ok(Json(service.get(workout_id, user.user_id).await?))
}

/// Append a blank set to the exercise at `exercise_order`
pub async fn add_set(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order)), _): ExercisePath,
) -> AppResult<(StatusCode, Json<Workout>)> {
    service.add_set(user.user_id, workout_id, exercise_order).await?;
    let workout = service.get(workout_id, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

pub async fn remove_set(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order, set_order)), _): SetPath,
) -> AppResult<StatusCode> {
    service
        .remove_set(user.user_id, workout_id, exercise_order, set_order)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn record_weight_and_reps(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order, set_order)), _): SetPath,
    WithRejection(Json(request), _): WithRejection<Json<WeightAndRepsRequest>, AppError>,
) -> AppResult<Json<Workout>> {
    request.validate()?;

    service
        .record_weight_and_reps(
            user.user_id,
            workout_id,
            exercise_order,
            set_order,
            request.weight,
            request.reps,
        )
        .await?;
    Ok(Json(service.get(workout_id, user.user_id).await?))
}

pub async fn complete_set(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order, set_order)), _): SetPath,
) -> AppResult<Json<Workout>> {
    service
        .mark_set_completed(user.user_id, workout_id, exercise_order, set_order)
        .await?;
    Ok(Json(service.get(workout_id, user.user_id).await?))
}

pub async fn uncomplete_set(
    State(service): State<WorkoutService>,
    user: AuthUser,
    WithRejection(Path((workout_id, exercise_order, set_order)), _): SetPath,
) -> AppResult<Json<Workout>> {
    service
        .mark_set_uncompleted(user.user_id, workout_id, exercise_order, set_order)
        .await?;
    Ok(Json(service.get(workout_id, user.user_id).await?))
}
