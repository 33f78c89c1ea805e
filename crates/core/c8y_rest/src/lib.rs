//! Typed REST client core for the Cumulocity IoT platform.
//!
//! The client is a thin orchestration layer: a declarative endpoint
//! table ([`endpoint`]), a request builder resolving path templates and
//! stripping server-assigned fields ([`request`]), a typed response
//! decoder ([`decode`]) and a pagination iterator ([`paging`]). One
//! facade method per documented endpoint; the HTTP round trip itself is
//! delegated to a [`c8y_http::HttpConnection`].
//!
//! ```rust,no_run
//! use c8y_http::ReqwestConnection;
//! use c8y_rest::{C8yRestClient, C8yRestConfig, OperationQuery};
//!
//! # async fn example() -> Result<(), c8y_rest::C8yRestError> {
//! let config = C8yRestConfig::new("demo.cumulocity.com");
//! let client = C8yRestClient::new(config, ReqwestConnection::default())?;
//!
//! let mut operations = client
//!     .operations()
//!     .iter_operations(&OperationQuery::default())
//!     .await?;
//! while let Some(operation) = operations.try_next().await? {
//!     println!("{:?}", operation.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod decode;
mod endpoint;
mod error;
mod paging;
mod request;


pub use api::feature_toggles::FeatureTogglesApi;
pub use api::new_device_requests::NewDeviceRequestsApi;
pub use api::operations::OperationFilter;
pub use api::operations::OperationQuery;
pub use api::operations::OperationsApi;
pub use api::tenant_applications::TenantApplicationsApi;
pub use api::PageQuery;
pub use client::C8yRestClient;
pub use client::C8yRestConfig;
pub use endpoint::PROCESSING_MODE_HEADER;
pub use error::C8yRestError;
pub use paging::PagedItems;
