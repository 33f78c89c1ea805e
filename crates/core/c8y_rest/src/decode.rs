use crate::error::C8yRestError;
use c8y_http::HttpError;
use c8y_http::HttpResponse;
use c8y_model::C8yError;
use serde::de::DeserializeOwned;

/// Maps a raw response to a typed outcome.
///
/// * 2xx with an empty body → `Ok(None)`: the documented behavior of
///   write endpoints called without an `Accept` header, distinct from a
///   decode failure.
/// * 2xx with a body → `Ok(Some(T))`, or a `Decode` error keeping the
///   raw body and the mismatch description.
/// * non-2xx with a platform error payload → `Api`.
/// * non-2xx with anything else → `Transport`, status and body verbatim.
///
/// The response content type is deliberately not inspected: error
/// payloads arrive as either the dedicated error media type or plain
/// JSON, with the same shape.
pub(crate) fn decode_response<T: DeserializeOwned>(
    response: &HttpResponse,
) -> Result<Option<T>, C8yRestError> {
    let status = response.status;
    if status.is_success() {
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice(&response.body) {
            Ok(decoded) => Ok(Some(decoded)),
            Err(reason) => Err(C8yRestError::Decode {
                status,
                reason: reason.to_string(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }),
        }
    } else {
        match serde_json::from_slice::<C8yError>(&response.body) {
            Ok(error) => Err(C8yRestError::Api { status, error }),
            Err(_) => Err(C8yRestError::Transport(HttpError::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            })),
        }
    }
}
