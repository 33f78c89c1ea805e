pub use reqwest::header;
pub use reqwest::header::HeaderMap;
pub use reqwest::Method;
pub use reqwest::StatusCode;
use reqwest::Url;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error(transparent)]
    ParseError(#[from] url::ParseError),

    /// A non-2xx response whose body is not a platform error payload.
    ///
    /// The status and body are kept verbatim for diagnostics.
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

/// A fully-resolved HTTP request, ready to be handed to a transport.
///
/// Credentials are deliberately absent: authentication is the concern of
/// the [`HttpConnection`](crate::HttpConnection) executing the request.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: &str) -> Result<Self, HttpError> {
        let url = Url::parse(url)?;
        Ok(HttpRequest {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        })
    }
}

/// A raw HTTP response: status, headers and body, nothing decoded.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

pub type HttpResult = Result<HttpResponse, HttpError>;

impl From<HttpRequest> for reqwest::Request {
    fn from(request: HttpRequest) -> Self {
        let mut inner = reqwest::Request::new(request.method, request.url);
        *inner.headers_mut() = request.headers;
        *inner.body_mut() = request.body.map(Into::into);
        inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_converts_to_reqwest_keeping_headers_and_body() {
        let mut request = HttpRequest::new(Method::POST, "https://c8y.example.com/features").unwrap();
        request
            .headers
            .insert("accept", "application/json".parse().unwrap());
        request.body = Some(b"{}".to_vec());

        let converted: reqwest::Request = request.into();
        assert_eq!(converted.method(), Method::POST);
        assert_eq!(converted.url().as_str(), "https://c8y.example.com/features");
        assert_eq!(converted.headers()["accept"], "application/json");
        assert!(converted.body().is_some());
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = HttpRequest::new(Method::GET, "not a url").unwrap_err();
        assert!(matches!(err, HttpError::ParseError(_)));
    }
}
