use crate::api;
use crate::error::ApiError;
use crate::models::{Transaction, TransactionPayload};

pub async fn list() -> Result<Vec<Transaction>, ApiError> {
    let result = api::get::<Vec<Transaction>>("/transactions").await;
    match &result {
        Ok(list) => log::info!("Fetched {} transactions", list.len()),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}

pub async fn create(payload: &TransactionPayload) -> Result<(), ApiError> {
    log::debug!("Creating {} transaction in {}", payload.kind.as_str(), payload.category);
    api::post_unit("/transactions", payload).await
}

pub async fn update(id: &str, payload: &TransactionPayload) -> Result<(), ApiError> {
    log::debug!("Updating transaction {}", id);
    api::put_unit(&format!("/transactions/{}", id), payload).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    log::debug!("Deleting transaction {}", id);
    api::delete(&format!("/transactions/{}", id)).await
}
