use std::collections::HashSet;

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use storage::models::JudgeRole;
use uuid::Uuid;

use crate::error::WebError;

/// Identity of the caller, forwarded by the authenticating gateway.
/// Extraction fails with Unauthorized when the role is not judge-eligible
/// (admin, moderator, judge) or the headers are missing or malformed.
#[derive(Debug, Clone, Copy)]
pub struct JudgeContext {
    pub judge_id: Uuid,
    pub role: JudgeRole,
}

pub const JUDGE_ID_HEADER: &str = "x-judge-id";
pub const JUDGE_ROLE_HEADER: &str = "x-judge-role";

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for JudgeContext
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let judge_id = parts
            .headers
            .get(JUDGE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or(WebError::Unauthorized)?;

        let role = parts
            .headers
            .get(JUDGE_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(JudgeRole::parse)
            .ok_or_else(|| {
                tracing::warn!("Request with missing or non-judge-eligible role header");
                WebError::Unauthorized
            })?;

        Ok(Self { judge_id, role })
    }
}

/// Bearer token check for the whole API surface. An empty key set disables
/// the check so the service can run gateway-less in development.
pub async fn require_api_key(
    State(api_keys): State<ApiKeys>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    if api_keys.is_empty() {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(token) if api_keys.is_valid(token) => Ok(next.run(req).await),
        _ => {
            tracing::warn!("Invalid API key attempt");
            Err(WebError::Unauthorized)
        }
    }
}

#[derive(Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
