//! REST client for the FinSight backend.
//!
//! Every request carries the stored bearer token when there is one. Bodies
//! are bare JSON; error bodies may carry a `message` field which ends up in
//! [`ApiError::Http`].

pub mod auth;
pub mod goals;
pub mod transactions;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::session;
use crate::settings;

fn url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn check(method: &str, endpoint: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        log::trace!("{} {} - {}", method, endpoint, response.status());
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    if err.is_unauthorized() {
        log::warn!("{} {} - unauthorized, token missing or expired", method, endpoint);
    } else {
        log::error!("{} {} - {}", method, endpoint, err);
    }
    Err(err)
}

fn built(request: Result<Request, gloo_net::Error>) -> Result<Request, ApiError> {
    request.map_err(|e| ApiError::Request(e.to_string()))
}

fn encoded(request: Result<Request, gloo_net::Error>) -> Result<Request, ApiError> {
    request.map_err(|e| ApiError::Encode(e.to_string()))
}

async fn send(method: &str, endpoint: &str, request: Result<Request, ApiError>) -> Result<Response, ApiError> {
    let request = request.map_err(|e| {
        log::error!("{} {} - {}", method, endpoint, e);
        e
    })?;

    let response = request.send().await.map_err(|e| {
        log::error!("{} {} - request failed: {}", method, endpoint, e);
        ApiError::Network(e.to_string())
    })?;

    check(method, endpoint, response).await
}

/// `GET` an endpoint and parse the JSON body.
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    log::debug!("GET {}", endpoint);
    let request = built(authorized(Request::get(&url(endpoint))).build());
    let response = send("GET", endpoint, request).await?;

    response.json::<T>().await.map_err(|e| {
        log::error!("GET {} - failed to parse response: {}", endpoint, e);
        ApiError::Decode(e.to_string())
    })
}

/// `POST` a JSON body and parse the JSON reply.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    log::debug!("POST {}", endpoint);
    let request = encoded(authorized(Request::post(&url(endpoint))).json(body));
    let response = send("POST", endpoint, request).await?;

    response.json::<T>().await.map_err(|e| {
        log::error!("POST {} - failed to parse response: {}", endpoint, e);
        ApiError::Decode(e.to_string())
    })
}

/// `POST` a JSON body, ignoring whatever the backend answers with.
pub async fn post_unit<B>(endpoint: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    log::debug!("POST {}", endpoint);
    let request = encoded(authorized(Request::post(&url(endpoint))).json(body));
    send("POST", endpoint, request).await.map(|_| ())
}

/// `PUT` a JSON body, ignoring whatever the backend answers with.
pub async fn put_unit<B>(endpoint: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    log::debug!("PUT {}", endpoint);
    let request = encoded(authorized(Request::put(&url(endpoint))).json(body));
    send("PUT", endpoint, request).await.map(|_| ())
}

pub async fn delete(endpoint: &str) -> Result<(), ApiError> {
    log::debug!("DELETE {}", endpoint);
    let request = built(authorized(Request::delete(&url(endpoint))).build());
    send("DELETE", endpoint, request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc.def"), "Bearer abc.def");
    }

    #[test]
    fn build_and_body_failures_map_to_their_own_variants() {
        let failure = || gloo_net::Error::GlooError("invalid header".into());
        assert!(matches!(
            built(Err(failure())),
            Err(ApiError::Request(msg)) if msg.contains("invalid header")
        ));
        assert!(matches!(encoded(Err(failure())), Err(ApiError::Encode(_))));
    }
}
