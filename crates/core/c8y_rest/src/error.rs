use c8y_http::HttpError;
use c8y_http::StatusCode;
use c8y_model::C8yError;
use thiserror::Error;

/// Everything a facade call can fail with.
///
/// `MissingParameter`, `Encode` and `InvalidHeader` are raised while the
/// request is being built, before any network activity. `Api` carries
/// the structured platform error of a non-2xx response; a non-2xx
/// response without one surfaces as `Transport` with the raw status and
/// body kept verbatim.
#[derive(Error, Debug)]
pub enum C8yRestError {
    #[error("No value provided for the path parameter {{{name}}} of {path}")]
    MissingParameter {
        name: &'static str,
        path: &'static str,
    },

    #[error("Failed to encode the request body")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid value for the {name} header")]
    InvalidHeader { name: String },

    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("HTTP {status}: response body does not match the expected shape: {reason}")]
    Decode {
        status: StatusCode,
        reason: String,
        body: String,
    },

    #[error("HTTP {status}: {error}")]
    Api { status: StatusCode, error: C8yError },
}
