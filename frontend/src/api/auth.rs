use crate::api;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    log::debug!("Logging in as {}", request.email);
    let result = api::post::<AuthResponse, _>("/auth/login", request).await;
    if let Err(e) = &result {
        log::warn!("Login failed for {}: {}", request.email, e);
    }
    result
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    log::debug!("Registering {}", request.email);
    let result = api::post::<AuthResponse, _>("/auth/register", request).await;
    if let Err(e) = &result {
        log::warn!("Registration failed for {}: {}", request.email, e);
    }
    result
}
