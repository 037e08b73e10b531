use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use models::validation::FieldError;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::errors::ApiError;

/// JSON request body decoded regardless of `Content-Type`; lead forms
/// posting with `fetch()` defaults arrive as `text/plain` or without the
/// header at all. Decode failures become 422s shaped like field errors.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected(rejection.status(), rejection.body_text()))?;
        let value = serde_json::from_slice::<T>(&bytes).map_err(decode_error)?;
        Ok(Self(value))
    }
}

fn decode_error(e: serde_json::Error) -> ApiError {
    let kind = match e.classify() {
        Category::Data => "type_error",
        Category::Syntax | Category::Eof | Category::Io => "json_invalid",
    };
    ApiError::Validation(vec![FieldError::body(e.to_string(), kind)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(raw: &str) -> String {
        let err = serde_json::from_str::<std::collections::BTreeMap<String, String>>(raw).unwrap_err();
        match decode_error(err) {
            ApiError::Validation(fields) => fields[0].kind.clone(),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn truncated_and_empty_bodies_are_invalid_json() {
        assert_eq!(kind_of("{\"a\": "), "json_invalid");
        assert_eq!(kind_of(""), "json_invalid");
    }

    #[test]
    fn wrong_types_are_type_errors() {
        assert_eq!(kind_of("{\"a\": 7}"), "type_error");
    }
}
