use crate::HttpRequest;
use crate::HttpResponse;
use crate::HttpResult;
use async_trait::async_trait;
use mockall::automock;

/// A transport executing one request/response round trip per call.
///
/// Implementations own timeouts, TLS and authentication. Connections are
/// shared between concurrent callers, hence `&self` and `Send + Sync`.
#[automock]
#[async_trait]
pub trait HttpConnection: Send + Sync {
    async fn send(&self, request: HttpRequest) -> HttpResult;
}

/// The default transport, backed by a caller-provided `reqwest::Client`.
///
/// Credentials, root certificates and timeouts are configured on the
/// client before it is handed over, so they never transit this crate.
#[derive(Clone, Default)]
pub struct ReqwestConnection {
    client: reqwest::Client,
}

impl ReqwestConnection {
    pub fn new(client: reqwest::Client) -> Self {
        ReqwestConnection { client }
    }
}

#[async_trait]
impl HttpConnection for ReqwestConnection {
    async fn send(&self, request: HttpRequest) -> HttpResult {
        let response = self.client.execute(request.into()).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    #[tokio::test]
    async fn round_trip_against_a_local_server() -> anyhow::Result<()> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/inventory/managedObjects/42")
            .with_status(200)
            .with_body(r#"{"id":"42"}"#)
            .create_async()
            .await;

        let url = format!("{}/inventory/managedObjects/42", server.url());
        let request = HttpRequest::new(Method::GET, &url)?;

        let connection = ReqwestConnection::default();
        let response = connection.send(request).await?;

        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"{"id":"42"}"#);
        Ok(())
    }
}
