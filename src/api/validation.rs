// Request shape checks run before any service call

use crate::errors::{AppError, AppResult};
use crate::models::{AddRestToBlockRequest, WeightAndRepsRequest};

/// Trims `name` and rejects it when nothing is left.
pub fn require_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("name must not be empty"));
    }
    Ok(trimmed.to_string())
}

impl WeightAndRepsRequest {
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(AppError::validation("weight must be a non-negative number"));
        }
        Ok(())
    }
}

impl AddRestToBlockRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.period_seconds < 1 {
            return Err(AppError::validation("rest period must be at least one second"));
        }
        Ok(())
    }
}
