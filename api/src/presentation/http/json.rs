use axum::{
    Json,
    async_trait,
    extract::{FromRequest, Request},
};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::presentation::http::error::ApiError;

/// A request body that must be a JSON object. Anything else (no body, wrong
/// content type, malformed JSON, `null`, arrays, scalars) is a 400.
#[derive(Debug)]
pub struct JsonObject(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "json_body_rejected");
                ApiError::BadRequest
            })?;
        match value {
            Value::Object(map) => Ok(JsonObject(map)),
            _ => Err(ApiError::BadRequest),
        }
    }
}

impl JsonObject {
    /// Reads the object into a typed request. Fields of the wrong type are a 422.
    pub fn parse<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.0)).map_err(|e| {
            tracing::debug!(error = %e, "json_body_unprocessable");
            ApiError::Unprocessable
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Integer field that also accepts numeric strings (HTML selects post "3").
/// Absent and `null` both deserialize to `None`.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<IntOrString>::deserialize(deserializer)?;
    let wide = match raw {
        None => return Ok(None),
        Some(IntOrString::Int(n)) => n,
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got '{s}'")))?,
    };
    i32::try_from(wide)
        .map(Some)
        .map_err(|_| de::Error::custom("integer out of range"))
}
