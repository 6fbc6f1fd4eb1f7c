use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::Method,
    middleware::Next,
    web, Error, ResponseError,
};

use crate::api::error;

/// The public key every store and function caller must present.
/// The anonymous role may insert, list and update messages; nothing deletes them.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    pub anon_key: String,
}

impl AccessPolicy {
    pub fn new(anon_key: impl Into<String>) -> Self {
        Self { anon_key: anon_key.into() }
    }
}

fn presented_key(req: &ServiceRequest) -> Option<&str> {
    let headers = req.headers();
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .or_else(|| headers.get("apikey").and_then(|h| h.to_str().ok()))
}

fn check_api_key(req: &ServiceRequest) -> Result<(), error::Error> {
    let policy = req.app_data::<web::Data<AccessPolicy>>().ok_or_else(|| {
        log::error!("AccessPolicy missing from app data");
        error::Error::internal_server_error()
    })?;

    match presented_key(req) {
        Some(key) if key == policy.anon_key => Ok(()),
        Some(_) => Err(error::Error::unauthorized("Invalid API key")),
        None => Err(error::Error::unauthorized("Missing API key")),
    }
}

/// Rejects requests without the public key. Preflight requests always pass. The rejection is
/// returned as a response so outer header middleware still applies to it.
pub async fn require_api_key<B>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error>
where
    B: MessageBody + 'static,
{
    if req.method() == Method::OPTIONS {
        return next.call(req).await.map(ServiceResponse::map_into_left_body);
    }

    match check_api_key(&req) {
        Ok(()) => next.call(req).await.map(ServiceResponse::map_into_left_body),
        Err(e) => {
            let response = e.error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
