use crate::client::C8yRestClient;
use crate::endpoint::media_type;
use crate::endpoint::EndpointSpec;
use crate::error::C8yRestError;
use crate::request::RequestBuilder;
use c8y_http::Method;
use c8y_model::feature::FeatureToggle;
use c8y_model::feature::FeatureToggleValue;
use c8y_model::feature::TenantFeatureToggleValue;

static LIST_FEATURES: EndpointSpec = EndpointSpec::get(
    "/features",
    "application/vnd.com.nsn.cumulocity.error+json, application/json",
);

static GET_FEATURE: EndpointSpec = EndpointSpec::get(
    "/features/{featureKey}",
    "application/vnd.com.nsn.cumulocity.error+json, application/json",
);

static LIST_TENANT_FEATURE_VALUES: EndpointSpec = EndpointSpec::get(
    "/features/{featureKey}/by-tenant",
    "application/vnd.com.nsn.cumulocity.error+json, application/json",
);

static SET_CURRENT_TENANT_FEATURE: EndpointSpec = EndpointSpec {
    method: Method::PUT,
    path: "/features/{featureKey}/by-tenant",
    accept: Some(media_type::JSON),
    content_type: Some(media_type::JSON),
    read_only: &[],
};

static UNSET_CURRENT_TENANT_FEATURE: EndpointSpec =
    EndpointSpec::delete("/features/{featureKey}/by-tenant");

static SET_GIVEN_TENANT_FEATURE: EndpointSpec = EndpointSpec {
    method: Method::PUT,
    path: "/features/{featureKey}/by-tenant/{tenantId}",
    accept: Some(media_type::JSON),
    content_type: Some(media_type::JSON),
    read_only: &[],
};

static UNSET_GIVEN_TENANT_FEATURE: EndpointSpec =
    EndpointSpec::delete("/features/{featureKey}/by-tenant/{tenantId}");

/// API methods to read feature toggles and manage their per-tenant
/// overrides.
pub struct FeatureTogglesApi<'a> {
    client: &'a C8yRestClient,
}

impl<'a> FeatureTogglesApi<'a> {
    pub(crate) fn new(client: &'a C8yRestClient) -> Self {
        FeatureTogglesApi { client }
    }

    /// All defined feature toggles, with values calculated for the
    /// tenant of the authenticated user.
    ///
    /// Required roles: none, any authenticated user.
    pub async fn list_current_tenant_features(
        &self,
    ) -> Result<Option<Vec<FeatureToggle>>, C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &LIST_FEATURES).build()?;
        self.client.execute(request).await
    }

    /// One feature toggle by its key, with the value calculated for the
    /// tenant of the authenticated user.
    ///
    /// Required roles: none, any authenticated user.
    pub async fn get_current_tenant_feature(
        &self,
        feature_key: &str,
    ) -> Result<Option<FeatureToggle>, C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &GET_FEATURE)
            .path_param("featureKey", feature_key)
            .build()?;
        self.client.execute(request).await
    }

    /// The value overrides of one feature toggle across all tenants.
    ///
    /// Required roles: ROLE_TENANT_MANAGEMENT_ADMIN, on the management
    /// tenant.
    pub async fn list_tenant_feature_toggle_values(
        &self,
        feature_key: &str,
    ) -> Result<Option<Vec<TenantFeatureToggleValue>>, C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &LIST_TENANT_FEATURE_VALUES)
            .path_param("featureKey", feature_key)
            .build()?;
        self.client.execute(request).await
    }

    /// Set the feature toggle override for the tenant of the
    /// authenticated user.
    ///
    /// Required roles: ROLE_TENANT_MANAGEMENT_ADMIN, on the management
    /// tenant or for a PUBLIC_PREVIEW/GENERALLY_AVAILABLE toggle.
    pub async fn set_current_tenant_feature_toggle_value(
        &self,
        feature_key: &str,
        value: &FeatureToggleValue,
    ) -> Result<(), C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &SET_CURRENT_TENANT_FEATURE)
            .path_param("featureKey", feature_key)
            .json_body(value)
            .build()?;
        self.client.execute_unit(request).await
    }

    /// Remove the feature toggle override for the tenant of the
    /// authenticated user.
    pub async fn unset_current_tenant_feature_toggle_value(
        &self,
        feature_key: &str,
    ) -> Result<(), C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &UNSET_CURRENT_TENANT_FEATURE)
            .path_param("featureKey", feature_key)
            .build()?;
        self.client.execute_unit(request).await
    }

    /// Set the feature toggle override for a given tenant.
    ///
    /// Required roles: ROLE_TENANT_MANAGEMENT_ADMIN, on the management
    /// tenant.
    pub async fn set_given_tenant_feature_toggle_value(
        &self,
        feature_key: &str,
        tenant_id: &str,
        value: &FeatureToggleValue,
    ) -> Result<(), C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &SET_GIVEN_TENANT_FEATURE)
            .path_param("featureKey", feature_key)
            .path_param("tenantId", tenant_id)
            .json_body(value)
            .build()?;
        self.client.execute_unit(request).await
    }

    /// Remove the feature toggle override for a given tenant.
    pub async fn unset_given_tenant_feature_toggle_value(
        &self,
        feature_key: &str,
        tenant_id: &str,
    ) -> Result<(), C8yRestError> {
        let request = RequestBuilder::new(self.client.base(), &UNSET_GIVEN_TENANT_FEATURE)
            .path_param("featureKey", feature_key)
            .path_param("tenantId", tenant_id)
            .build()?;
        self.client.execute_unit(request).await
    }
}
