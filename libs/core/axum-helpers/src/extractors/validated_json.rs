//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Every rejection renders as `400 Bad Request` with the standard
/// [`ErrorResponse`](crate::ErrorResponse) body: malformed JSON, a body whose
/// shape does not match `T`, a missing content type, and `Validate` failures
/// (with per-field `details`).
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct GeneratePrompt {
///     #[validate(length(min = 1))]
///     prompt: String,
/// }
///
/// async fn generate(ValidatedJson(payload): ValidatedJson<GeneratePrompt>) -> String {
///     payload.prompt
/// }
///
/// let app = Router::new().route("/generate", post(generate));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
