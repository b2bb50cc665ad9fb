use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::exercises::exercise_routes;
use super::health::health_check;
use super::workout_schedules::workout_schedule_routes;
use super::workout_templates::workout_template_routes;
use super::workouts::workout_routes;
use crate::auth::{cors_layer, jwt_auth_middleware, security_headers_layer, JwtService};
use crate::services::Services;

pub fn create_routes(services: Services, jwt_service: JwtService) -> Router {
    let api = Router::new()
        .nest("/exercises", exercise_routes(services.exercises))
        .nest("/workout-templates", workout_template_routes(services.workout_templates))
        .nest("/workouts", workout_routes(services.workouts))
        .nest("/workout-schedules", workout_schedule_routes(services.workout_schedules))
        .layer(middleware::from_fn_with_state(jwt_service, jwt_auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security_headers_layer())
                .layer(cors_layer()),
        )
}
