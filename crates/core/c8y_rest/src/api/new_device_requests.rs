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
use c8y_model::device_control::NewDeviceRequest;
use c8y_model::device_control::NewDeviceRequestCollection;
use url::Url;

static GET_NEW_DEVICE_REQUESTS: EndpointSpec = EndpointSpec::get(
    "/devicecontrol/newDeviceRequests",
    "application/vnd.com.nsn.cumulocity.error+json, application/vnd.com.nsn.cumulocity.newdevicerequestcollection+json",
);

static CREATE_NEW_DEVICE_REQUEST: EndpointSpec = EndpointSpec {
    method: Method::POST,
    path: "/devicecontrol/newDeviceRequests",
    accept: Some(
        "application/vnd.com.nsn.cumulocity.newdevicerequest+json, application/vnd.com.nsn.cumulocity.error+json",
    ),
    content_type: Some(media_type::NEW_DEVICE_REQUEST),
    read_only: &[
        "owner",
        "securityToken",
        "creationTime",
        "tenantId",
        "self",
        "status",
    ],
};

static GET_NEW_DEVICE_REQUEST: EndpointSpec = EndpointSpec::get(
    "/devicecontrol/newDeviceRequests/{requestId}",
    "application/vnd.com.nsn.cumulocity.newdevicerequest+json, application/vnd.com.nsn.cumulocity.error+json",
);

static UPDATE_NEW_DEVICE_REQUEST: EndpointSpec = EndpointSpec {
    method: Method::PUT,
    path: "/devicecontrol/newDeviceRequests/{requestId}",
    accept: Some(
        "application/vnd.com.nsn.cumulocity.newdevicerequest+json, application/vnd.com.nsn.cumulocity.error+json",
    ),
    content_type: Some(media_type::NEW_DEVICE_REQUEST),
    read_only: &[
        "owner",
        "creationTime",
        "groupId",
        "tenantId",
        "self",
        "id",
        "type",
    ],
};

static DELETE_NEW_DEVICE_REQUEST: EndpointSpec =
    EndpointSpec::delete("/devicecontrol/newDeviceRequests/{requestId}");

/// API methods to create, retrieve, update and delete new device
/// requests.
pub struct NewDeviceRequestsApi<'a> {
    client: &'a C8yRestClient,
}

impl<'a> NewDeviceRequestsApi<'a> {
    pub(crate) fn new(client: &'a C8yRestClient) -> Self {
        NewDeviceRequestsApi { client }
    }

    /// Retrieve one page of new device requests.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_READ.
    pub async fn get_new_device_requests(
        &self,
        page: &PageQuery,
    ) -> Result<Option<NewDeviceRequestCollection>, C8yRestError> {
        let request = page_request(self.client.base(), page, None)?;
        self.client.execute(request).await
    }

    /// Walk all new device requests, fetching follow-up pages on demand.
    pub async fn iter_new_device_requests(
        &self,
        page: &PageQuery,
    ) -> Result<PagedItems<'a, NewDeviceRequestCollection>, C8yRestError> {
        let client = self.client;
        let first_page_number = page.current_page.unwrap_or(1);
        let request = page_request(client.base(), page, Some(first_page_number))?;
        let first = client.execute(request).await?;

        let page = page.clone();
        let fetch: PageFetcher<'a, NewDeviceRequestCollection> = Box::new(move |page_number| {
            let request = page_request(client.base(), &page, Some(page_number));
            Box::pin(async move { client.execute(request?).await })
        });
        Ok(PagedItems::new(first, first_page_number, fetch))
    }

    /// Register a device for acceptance; the request ID is the device
    /// identifier, e.g. its serial number.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_ADMIN.
    pub async fn create_new_device_request(
        &self,
        body: &NewDeviceRequest,
        processing_mode: Option<&str>,
    ) -> Result<Option<NewDeviceRequest>, C8yRestError> {
        let mut builder =
            RequestBuilder::new(self.client.base(), &CREATE_NEW_DEVICE_REQUEST).json_body(body);
        if let Some(mode) = processing_mode {
            builder = builder.header(PROCESSING_MODE_HEADER, mode);
        }
        self.client.execute(builder.build()?).await
    }

    /// Retrieve a specific new device request by ID.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_READ.
    pub async fn get_new_device_request(
        &self,
        request_id: &str,
    ) -> Result<Option<NewDeviceRequest>, C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &GET_NEW_DEVICE_REQUEST)
            .path_param("requestId", request_id)
            .build()?;
        self.client.execute(request).await
    }

    /// Update a specific new device request; only its status can change.
    ///
    /// Required roles: ROLE_DEVICE_CONTROL_ADMIN.
    pub async fn update_new_device_request(
        &self,
        request_id: &str,
        body: &NewDeviceRequest,
    ) -> Result<Option<NewDeviceRequest>, C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &UPDATE_NEW_DEVICE_REQUEST)
            .path_param("requestId", request_id)
            .json_body(body)
            .build()?;
        self.client.execute(request).await
    }

    /// Delete a specific new device request.
    ///
    /// Required roles: ROLE_USER_MANAGEMENT_ADMIN.
    pub async fn delete_new_device_request(&self, request_id: &str) -> Result<(), C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &DELETE_NEW_DEVICE_REQUEST)
            .path_param("requestId", request_id)
            .build()?;
        self.client.execute_unit(request).await
    }
}

fn page_request(
    base: &Url,
    page: &PageQuery,
    page_override: Option<u32>,
) -> Result<HttpRequest, C8yRestError> {
    let mut params = Vec::new();
    page.append_to(&mut params, page_override);
    RequestBuilder::new(base, &GET_NEW_DEVICE_REQUESTS)
        .query_params(params)
        .build()
}
