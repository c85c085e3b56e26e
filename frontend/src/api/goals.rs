use crate::api;
use crate::error::ApiError;
use crate::models::{Goal, GoalPayload};

pub async fn list() -> Result<Vec<Goal>, ApiError> {
    let result = api::get::<Vec<Goal>>("/goals").await;
    match &result {
        Ok(list) => log::info!("Fetched {} goals", list.len()),
        Err(e) => log::error!("Failed to fetch goals: {}", e),
    }
    result
}

pub async fn create(payload: &GoalPayload) -> Result<(), ApiError> {
    log::debug!("Creating goal {}", payload.name);
    api::post_unit("/goals", payload).await
}

pub async fn update(id: &str, payload: &GoalPayload) -> Result<(), ApiError> {
    log::debug!("Updating goal {}", id);
    api::put_unit(&format!("/goals/{}", id), payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    log::debug!("Deleting goal {}", id);
    api::delete(&format!("/goals/{}", id)).await
}
