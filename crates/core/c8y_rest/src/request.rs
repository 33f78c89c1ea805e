use crate::endpoint::EndpointSpec;
use crate::error::C8yRestError;
use c8y_http::header::HeaderName;
use c8y_http::header::HeaderValue;
use c8y_http::header::ACCEPT;
use c8y_http::header::CONTENT_TYPE;
use c8y_http::HeaderMap;
use c8y_http::HttpRequest;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use serde::Serialize;
use url::Url;

/// RFC 3986: everything but unreserved characters is percent-encoded
/// before being substituted into a path template.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Assembles one fully-resolved request out of an [`EndpointSpec`] and
/// the call arguments. Pure: the outcome only depends on the inputs, and
/// every local error is raised before the transport is involved.
pub(crate) struct RequestBuilder<'a> {
    base: &'a Url,
    spec: &'static EndpointSpec,
    path_params: Vec<(&'static str, &'a str)>,
    query: Vec<(&'static str, String)>,
    headers: Vec<(String, String)>,
    body: Option<Result<serde_json::Value, serde_json::Error>>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(base: &'a Url, spec: &'static EndpointSpec) -> Self {
        RequestBuilder {
            base,
            spec,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn path_param(mut self, name: &'static str, value: &'a str) -> Self {
        self.path_params.push((name, value));
        self
    }

    /// Appends one query parameter. Absent optional parameters must
    /// simply not be appended: "not sent" is different from "sent empty".
    pub fn query_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    pub fn query_params(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// A caller-supplied header; wins over the endpoint defaults on
    /// collision.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Encodes the body eagerly; a serialization failure surfaces from
    /// [`build`](Self::build) before anything is sent.
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_value(body));
        self
    }

    pub fn build(self) -> Result<HttpRequest, C8yRestError> {
        let path = resolve_path(self.spec, &self.path_params)?;

        let mut url = self.base.clone();
        let full_path = format!("{}{}", self.base.path().trim_end_matches('/'), path);
        url.set_path(&full_path);
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        let mut headers = HeaderMap::new();
        if let Some(accept) = self.spec.accept {
            headers.insert(ACCEPT, HeaderValue::from_static(accept));
        }
        if let Some(content_type) = self.spec.content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        for (name, value) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| C8yRestError::InvalidHeader { name: name.clone() })?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|_| C8yRestError::InvalidHeader { name: name.clone() })?;
            headers.insert(header_name, header_value);
        }

        let body = match self.body {
            None => None,
            Some(encoded) => {
                let mut value = encoded.map_err(C8yRestError::Encode)?;
                // Server-assigned fields are never sent, whatever the
                // caller left in the in-memory object.
                if let serde_json::Value::Object(fields) = &mut value {
                    for read_only in self.spec.read_only {
                        fields.remove(*read_only);
                    }
                }
                Some(serde_json::to_vec(&value).map_err(C8yRestError::Encode)?)
            }
        };

        Ok(HttpRequest {
            method: self.spec.method.clone(),
            url,
            headers,
            body,
        })
    }
}

/// Substitutes every `{name}` placeholder of the template, failing with
/// `MissingParameter` when a value is not provided or empty.
fn resolve_path(
    spec: &'static EndpointSpec,
    params: &[(&'static str, &str)],
) -> Result<String, C8yRestError> {
    let mut resolved = String::with_capacity(spec.path.len());
    let mut rest: &'static str = spec.path;

    while let Some(start) = rest.find('{') {
        resolved.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .expect("endpoint path templates are well-formed");
        let name = &after[..end];
        let value = params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| *value)
            .unwrap_or_default();
        if value.is_empty() {
            return Err(C8yRestError::MissingParameter {
                name,
                path: spec.path,
            });
        }
        resolved.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[end + 1..];
    }
    resolved.push_str(rest);
    Ok(resolved)
}
