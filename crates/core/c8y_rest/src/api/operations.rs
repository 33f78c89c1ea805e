use crate::api::PageQuery;
use crate::client::C8yRestClient;
use crate::endpoint::media_type;
use crate::endpoint::EndpointSpec;
use crate::endpoint::PROCESSING_MODE_HEADER;
use crate::error::C8yRestError;
use crate::paging::PageFetcher;
use crate::paging::PagedItems;
use crate::request::RequestBuilder;
use c8y_http::HttpRequest;
use c8y_http::Method;
use c8y_model::device_control::Operation;
use c8y_model::device_control::OperationCollection;
use c8y_model::device_control::OperationStatus;
use url::Url;

static GET_OPERATIONS: EndpointSpec = EndpointSpec::get(
    "/devicecontrol/operations",
    "application/vnd.com.nsn.cumulocity.error+json, application/vnd.com.nsn.cumulocity.operationcollection+json",
);

static CREATE_OPERATION: EndpointSpec = EndpointSpec {
    method: Method::POST,
    path: "/devicecontrol/operations",
    accept: Some(
        "application/vnd.com.nsn.cumulocity.error+json, application/vnd.com.nsn.cumulocity.operation+json",
    ),
    content_type: Some(media_type::OPERATION),
    read_only: &[
        "creationTime",
        "self",
        "bulkOperationId",
        "failureReason",
        "id",
        "status",
    ],
};

static DELETE_OPERATIONS: EndpointSpec = EndpointSpec::delete("/devicecontrol/operations");

static GET_OPERATION: EndpointSpec = EndpointSpec::get(
    "/devicecontrol/operations/{id}",
    "application/vnd.com.nsn.cumulocity.error+json, application/vnd.com.nsn.cumulocity.operation+json",
);

static UPDATE_OPERATION: EndpointSpec = EndpointSpec {
    method: Method::PUT,
    path: "/devicecontrol/operations/{id}",
    accept: Some(
        "application/vnd.com.nsn.cumulocity.error+json, application/vnd.com.nsn.cumulocity.operation+json",
    ),
    content_type: Some(media_type::OPERATION),
    read_only: &[
        "creationTime",
        "self",
        "bulkOperationId",
        "failureReason",
        "id",
        "deviceId",
    ],
};

/// Filters of the operation collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationQuery {
    /// Return operations of the devices managed by this agent; the
    /// returned operations then carry `deviceExternalIDs`.
    pub agent_id: Option<String>,

    pub bulk_operation_id: Option<String>,

    /// Start date or date and time of the operation.
    pub date_from: Option<String>,

    pub date_to: Option<String>,

    pub device_id: Option<String>,

    /// A fragment that must be part of the operation.
    pub fragment_type: Option<String>,

    /// On range queries, sort the newest operations first instead of
    /// the oldest.
    pub revert: Option<bool>,

    pub status: Option<OperationStatus>,

    pub page: PageQuery,
}

impl OperationQuery {
    fn append_to(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(agent_id) = &self.agent_id {
            query.push(("agentId", agent_id.clone()));
        }
        if let Some(bulk_operation_id) = &self.bulk_operation_id {
            query.push(("bulkOperationId", bulk_operation_id.clone()));
        }
        if let Some(date_from) = &self.date_from {
            query.push(("dateFrom", date_from.clone()));
        }
        if let Some(date_to) = &self.date_to {
            query.push(("dateTo", date_to.clone()));
        }
        if let Some(device_id) = &self.device_id {
            query.push(("deviceId", device_id.clone()));
        }
        if let Some(fragment_type) = &self.fragment_type {
            query.push(("fragmentType", fragment_type.clone()));
        }
        if let Some(revert) = self.revert {
            query.push(("revert", revert.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.as_str().to_string()));
        }
    }
}

/// Filters of an operation collection deletion. Deliberately separate
/// from [`OperationQuery`]: deletion supports fewer filters and an
/// unsupported one must not be silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationFilter {
    pub agent_id: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub device_id: Option<String>,
    pub status: Option<OperationStatus>,
}

/// API methods to create, retrieve, update and delete operations.
///
/// The `Accept` header is set on all requests; without it the platform
/// answers POST/PUT with an empty body, which these methods surface as
/// `Ok(None)`.
pub struct OperationsApi<'a> {
    client: &'a C8yRestClient,
}

impl<'a> OperationsApi<'a> {
    pub(crate) fn new(client: &'a C8yRestClient) -> Self {
        OperationsApi { client }
    }

    /// Retrieve one page of operations, in the order of their ascending
    /// IDs unless the query reverts it.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_READ.
    pub async fn get_operations(
        &self,
        query: &OperationQuery,
    ) -> Result<Option<OperationCollection>, C8yRestError> {
        let request = page_request(self.client.base(), query, None)?;
        self.client.execute(request).await
    }

    /// Walk all operations matching the query, fetching follow-up pages
    /// on demand, starting at `query.page.current_page` (default 1).
    pub async fn iter_operations(
        &self,
        query: &OperationQuery,
    ) -> Result<PagedItems<'a, OperationCollection>, C8yRestError> {
        let client = self.client;
        let first_page_number = query.page.current_page.unwrap_or(1);
        let request = page_request(client.base(), query, Some(first_page_number))?;
        let first = client.execute(request).await?;

        let query = query.clone();
        let fetch: PageFetcher<'a, OperationCollection> = Box::new(move |page_number| {
            let request = page_request(client.base(), &query, Some(page_number));
            Box::pin(async move { client.execute(request?).await })
        });
        Ok(PagedItems::new(first, first_page_number, fetch))
    }

    /// Create an operation; custom fragments travel in
    /// [`Operation::extras`].
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_ADMIN or owner of the device
    /// or ADMIN permission on the device.
    pub async fn create_operation(
        &self,
        operation: &Operation,
        processing_mode: Option<&str>,
    ) -> Result<Option<Operation>, C8yRestError> {
        let mut builder =
            RequestBuilder::new(self.client.base(), &CREATE_OPERATION).json_body(operation);
        if let Some(mode) = processing_mode {
            builder = builder.header(PROCESSING_MODE_HEADER, mode);
        }
        self.client.execute(builder.build()?).await
    }

    /// Delete all operations matching the filter.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_ADMIN.
    pub async fn delete_operations(
        &self,
        filter: &OperationFilter,
        processing_mode: Option<&str>,
    ) -> Result<(), C8yRestError> {
        let mut builder = RequestBuilder::new(self.client.base(), &DELETE_OPERATIONS);
        if let Some(agent_id) = &filter.agent_id {
            builder = builder.query_param("agentId", agent_id.clone());
        }
        if let Some(date_from) = &filter.date_from {
            builder = builder.query_param("dateFrom", date_from.clone());
        }
        if let Some(date_to) = &filter.date_to {
            builder = builder.query_param("dateTo", date_to.clone());
        }
        if let Some(device_id) = &filter.device_id {
            builder = builder.query_param("deviceId", device_id.clone());
        }
        if let Some(status) = &filter.status {
            builder = builder.query_param("status", status.as_str());
        }
        if let Some(mode) = processing_mode {
            builder = builder.header(PROCESSING_MODE_HEADER, mode);
        }
        self.client.execute_unit(builder.build()?).await
    }

    /// Retrieve a specific operation by ID.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_READ or owner of the resource
    /// or ADMIN permission on the device.
    pub async fn get_operation(&self, id: &str) -> Result<Option<Operation>, C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &GET_OPERATION)
            .path_param("id", id)
            .build()?;
        self.client.execute(request).await
    }

    /// Update a specific operation; only its status can change, the
    /// other updatable content being custom fragments.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_ADMIN or owner of the
    /// resource or ADMIN permission on the device.
    pub async fn update_operation(
        &self,
        id: &str,
        operation: &Operation,
        processing_mode: Option<&str>,
    ) -> Result<Option<Operation>, C8yRestError> {
        let mut builder = RequestBuilder::new(self.client.base(), &UPDATE_OPERATION)
            .path_param("id", id)
            .json_body(operation);
        if let Some(mode) = processing_mode {
            builder = builder.header(PROCESSING_MODE_HEADER, mode);
        }
        self.client.execute(builder.build()?).await
    }
}

fn page_request(
    base: &Url,
    query: &OperationQuery,
    page_override: Option<u32>,
) -> Result<HttpRequest, C8yRestError> {
    let mut params = Vec::new();
    query.append_to(&mut params);
    query.page.append_to(&mut params, page_override);
    RequestBuilder::new(base, &GET_OPERATIONS)
        .query_params(params)
        .build()
}
