use c8y_http::Method;

/// The header controlling the server-side processing mode of a request,
/// passed through unmodified when a caller provides it.
pub const PROCESSING_MODE_HEADER: &str = "X-Cumulocity-Processing-Mode";

/// The documented media types of the platform.
pub(crate) mod media_type {
    pub const JSON: &str = "application/json";
    pub const OPERATION: &str = "application/vnd.com.nsn.cumulocity.operation+json";
    pub const NEW_DEVICE_REQUEST: &str = "application/vnd.com.nsn.cumulocity.newdevicerequest+json";
    pub const APPLICATION_REFERENCE: &str =
        "application/vnd.com.nsn.cumulocity.applicationreference+json";
}

/// The declarative description of one documented endpoint: everything
/// the request builder needs that does not depend on the call arguments.
///
/// `read_only` lists the body fields the server assigns for this
/// operation; the builder strips them from the encoded payload whatever
/// their in-memory value.
#[derive(Debug)]
pub(crate) struct EndpointSpec {
    pub method: Method,
    /// Path template; `{name}` placeholders are filled from path
    /// parameters, percent-encoded.
    pub path: &'static str,
    pub accept: Option<&'static str>,
    pub content_type: Option<&'static str>,
    pub read_only: &'static [&'static str],
}

impl EndpointSpec {
    pub(crate) const fn get(path: &'static str, accept: &'static str) -> Self {
        EndpointSpec {
            method: Method::GET,
            path,
            accept: Some(accept),
            content_type: None,
            read_only: &[],
        }
    }

    pub(crate) const fn delete(path: &'static str) -> Self {
        EndpointSpec {
            method: Method::DELETE,
            path,
            accept: Some(media_type::JSON),
            content_type: None,
            read_only: &[],
        }
    }
}
