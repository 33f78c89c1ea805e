use crate::api::PageQuery;
use crate::client::C8yRestClient;
use crate::endpoint::media_type;
use crate::endpoint::EndpointSpec;
use crate::error::C8yRestError;
use crate::paging::PageFetcher;
use crate::paging::PagedItems;
use crate::request::RequestBuilder;
use c8y_http::HttpRequest;
use c8y_http::Method;
use c8y_model::tenant::ApplicationReference;
use c8y_model::tenant::ApplicationReferenceCollection;
use c8y_model::tenant::SubscribedApplicationReference;
use url::Url;

static GET_SUBSCRIBED_APPLICATIONS: EndpointSpec = EndpointSpec::get(
    "/tenant/tenants/{tenantId}/applications",
    "application/vnd.com.nsn.cumulocity.error+json, application/vnd.com.nsn.cumulocity.applicationreferencecollection+json",
);

static SUBSCRIBE_APPLICATION: EndpointSpec = EndpointSpec {
    method: Method::POST,
    path: "/tenant/tenants/{tenantId}/applications",
    accept: Some(
        "application/vnd.com.nsn.cumulocity.error+json, application/vnd.com.nsn.cumulocity.applicationreference+json",
    ),
    content_type: Some(media_type::APPLICATION_REFERENCE),
    read_only: &[],
};

static UNSUBSCRIBE_APPLICATION: EndpointSpec =
    EndpointSpec::delete("/tenant/tenants/{tenantId}/applications/{applicationId}");

/// API methods to manage the applications a tenant is subscribed to.
pub struct TenantApplicationsApi<'a> {
    client: &'a C8yRestClient,
}

impl<'a> TenantApplicationsApi<'a> {
    pub(crate) fn new(client: &'a C8yRestClient) -> Self {
        TenantApplicationsApi { client }
    }

    /// One page of the applications the given tenant is subscribed to.
    ///
    /// Required roles: ROLE_TENANT_MANAGEMENT_READ or ROLE_TENANT_ADMIN,
    /// from the parent or the management tenant.
    pub async fn get_subscribed_applications(
        &self,
        tenant_id: &str,
        page: &PageQuery,
    ) -> Result<Option<ApplicationReferenceCollection>, C8yRestError> {
        let request = page_request(self.client.base(), tenant_id, page, None)?;
        self.client.execute(request).await
    }

    /// Walk all subscribed applications of the given tenant, fetching
    /// follow-up pages on demand.
    pub async fn iter_subscribed_applications(
        &self,
        tenant_id: &str,
        page: &PageQuery,
    ) -> Result<PagedItems<'a, ApplicationReferenceCollection>, C8yRestError> {
        let client = self.client;
        let first_page_number = page.current_page.unwrap_or(1);
        let request = page_request(client.base(), tenant_id, page, Some(first_page_number))?;
        let first = client.execute(request).await?;

        let tenant_id = tenant_id.to_owned();
        let page = page.clone();
        let fetch: PageFetcher<'a, ApplicationReferenceCollection> = Box::new(move |page_number| {
            let request = page_request(client.base(), &tenant_id, &page, Some(page_number));
            Box::pin(async move { client.execute(request?).await })
        });
        Ok(PagedItems::new(first, first_page_number, fetch))
    }

    /// Subscribe the given tenant to the application designated by the
    /// body's self reference.
    pub async fn subscribe_application(
        &self,
        tenant_id: &str,
        body: &SubscribedApplicationReference,
    ) -> Result<Option<ApplicationReference>, C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &SUBSCRIBE_APPLICATION)
            .path_param("tenantId", tenant_id)
            .json_body(body)
            .build()?;
        self.client.execute(request).await
    }

    /// Unsubscribe the given tenant from an application.
    pub async fn unsubscribe_application(
        &self,
        tenant_id: &str,
        application_id: &str,
    ) -> Result<(), C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &UNSUBSCRIBE_APPLICATION)
            .path_param("tenantId", tenant_id)
            .path_param("applicationId", application_id)
            .build()?;
        self.client.execute_unit(request).await
    }
}

fn page_request(
    base: &Url,
    tenant_id: &str,
    page: &PageQuery,
    page_override: Option<u32>,
) -> Result<HttpRequest, C8yRestError> {
    let mut params = Vec::new();
    page.append_to(&mut params, page_override);
    RequestBuilder::new(base, &GET_SUBSCRIBED_APPLICATIONS)
        .path_param("tenantId", tenant_id)
        .query_params(params)
        .build()
}
