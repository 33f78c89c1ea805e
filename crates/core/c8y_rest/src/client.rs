use crate::api::feature_toggles::FeatureTogglesApi;
use crate::api::new_device_requests::NewDeviceRequestsApi;
use crate::api::operations::OperationsApi;
use crate::api::tenant_applications::TenantApplicationsApi;
use crate::decode::decode_response;
use crate::error::C8yRestError;
use c8y_http::HttpConnection;
use c8y_http::HttpRequest;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Configuration of the REST client: where the platform lives.
///
/// Credentials are not part of the configuration; they belong to the
/// [`HttpConnection`] executing the requests.
#[derive(Debug, Clone, Default)]
pub struct C8yRestConfig {
    /// The tenant host, e.g. `t1234.cumulocity.com`, with an optional
    /// scheme and path prefix.
    pub host: String,
}

impl C8yRestConfig {
    pub fn new(host: impl Into<String>) -> Self {
        C8yRestConfig { host: host.into() }
    }

    /// The base URL of the tenant; a bare host gets `https://`.
    fn base_url(&self) -> String {
        if self.host.starts_with("http") {
            self.host.clone()
        } else {
            format!("https://{}", self.host)
        }
    }
}

/// The facade over the documented REST endpoints.
///
/// Holds only immutable state, so one client can serve any number of
/// concurrent callers. Each facade method performs exactly one
/// request/response round trip: no retries, no caching; timeouts and
/// cancellation are the transport's concern and surface as transport
/// errors.
#[derive(Clone)]
pub struct C8yRestClient {
    base: Url,
    http: Arc<dyn HttpConnection>,
}

impl C8yRestClient {
    pub fn new(
        config: C8yRestConfig,
        connection: impl HttpConnection + 'static,
    ) -> Result<Self, C8yRestError> {
        Self::with_connection(config, Arc::new(connection))
    }

    pub fn with_connection(
        config: C8yRestConfig,
        http: Arc<dyn HttpConnection>,
    ) -> Result<Self, C8yRestError> {
        let base = Url::parse(&config.base_url()).map_err(c8y_http::HttpError::from)?;
        Ok(C8yRestClient { base, http })
    }

    /// API methods to create, retrieve, update and delete operations.
    pub fn operations(&self) -> OperationsApi<'_> {
        OperationsApi::new(self)
    }

    /// API methods to create, retrieve, update and delete new device
    /// requests.
    pub fn new_device_requests(&self) -> NewDeviceRequestsApi<'_> {
        NewDeviceRequestsApi::new(self)
    }

    /// API methods to read and override feature toggles.
    pub fn feature_toggles(&self) -> FeatureTogglesApi<'_> {
        FeatureTogglesApi::new(self)
    }

    /// API methods to manage the applications a tenant subscribes to.
    pub fn tenant_applications(&self) -> TenantApplicationsApi<'_> {
        TenantApplicationsApi::new(self)
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    /// One round trip: send the request, decode the typed outcome.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Option<T>, C8yRestError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.http.send(request).await?;
        debug!(status = %response.status, "received response");
        decode_response(&response)
    }

    /// As [`execute`](Self::execute), discarding whatever the server
    /// returned on success.
    pub(crate) async fn execute_unit(&self, request: HttpRequest) -> Result<(), C8yRestError> {
        self.execute::<serde_json::Value>(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_bare_host_is_normalized_to_https() {
        assert_eq!(
            C8yRestConfig::new("t1234.cumulocity.com").base_url(),
            "https://t1234.cumulocity.com"
        );
        assert_eq!(
            C8yRestConfig::new("http://127.0.0.1:8001/c8y").base_url(),
            "http://127.0.0.1:8001/c8y"
        );
    }
}
