// HTTP surface: one router per aggregate, nested under /api

pub mod exercises;
pub mod health;
pub mod routes;
pub mod validation;
pub mod workout_schedules;
pub mod workout_templates;
pub mod workouts;
