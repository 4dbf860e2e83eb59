//! Custom Axum extractor for investment submission bodies
//!
//! `SubmissionBody` accepts `application/json` and
//! `application/x-www-form-urlencoded` bodies and yields an untyped
//! `InvestmentRequest`. Bodies with any other content type are treated as an
//! empty submission so that validation reports the missing fields.
//!
//! Unreadable bodies and JSON syntax errors are not client validation
//! failures: they are rejected with the generic internal error.

use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::Value;
use shared::InvestmentRequest;

use crate::error::ApiError;

/// Body format picked from the `Content-Type` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Form,
    Unsupported,
}

impl BodyFormat {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return BodyFormat::Unsupported;
        };
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json")) {
            BodyFormat::Json
        } else if mime == "application/x-www-form-urlencoded" {
            BodyFormat::Form
        } else {
            BodyFormat::Unsupported
        }
    }
}

/// Raw investment submission extracted from the request body
#[derive(Debug)]
pub struct SubmissionBody(pub InvestmentRequest);

#[async_trait]
impl<S> FromRequest<S> for SubmissionBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = BodyFormat::from_content_type(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let request = match format {
            BodyFormat::Json => {
                let bytes = Bytes::from_request(req, state).await.map_err(|err| {
                    ApiError::internal(format!("failed to read request body: {}", err))
                })?;
                parse_json_body(&bytes)?
            }
            BodyFormat::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|err| {
                        ApiError::internal(format!("invalid form body: {}", err))
                    })?;
                from_form_fields(fields)
            }
            BodyFormat::Unsupported => InvestmentRequest::default(),
        };

        Ok(SubmissionBody(request))
    }
}

/// Decode a JSON body. Empty bodies and top-level arrays carry no fields.
pub fn parse_json_body(bytes: &[u8]) -> Result<InvestmentRequest, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(InvestmentRequest::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| ApiError::internal(format!("JSON syntax error: {}", err)))?;

    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|err| ApiError::internal(format!("invalid JSON data: {}", err))),
        Value::Array(_) => Ok(InvestmentRequest::default()),
        other => Err(ApiError::internal(format!(
            "unexpected top-level JSON value: {}",
            other
        ))),
    }
}

fn from_form_fields(mut fields: HashMap<String, String>) -> InvestmentRequest {
    let mut take = |key: &str| fields.remove(key).map(Value::String);
    InvestmentRequest {
        country: take("country"),
        name: take("name"),
        phone: take("phone"),
        network: take("network"),
        amount: take("amount"),
        country_code: take("countryCode"),
    }
}
