use crate::maybe::Maybe;
use crate::paging::CollectionPage;
use crate::paging::PageStatistics;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// An application hosted on or integrated with the platform.
///
/// Only the attributes this client acts on are modeled explicitly; the
/// remainder of the application manifest stays in `extras`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub id: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub name: Maybe<String>,

    /// Applications, microservices and their REST APIs are identified by
    /// this key.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Maybe::is_absent")]
    pub application_type: Maybe<ApplicationType>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub availability: Maybe<ApplicationAvailability>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub context_path: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub version: Maybe<String>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,

    #[serde(flatten)]
    pub extras: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationType {
    ApamaCepRule,
    External,
    Hosted,
    Microservice,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationAvailability {
    Market,
    Private,
    #[serde(untagged)]
    Unknown(String),
}

/// A reference to an application a tenant is subscribed to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReference {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub application: Maybe<Application>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReferenceCollection {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub prev: Maybe<String>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub statistics: Maybe<PageStatistics>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub references: Maybe<Vec<ApplicationReference>>,
}

impl CollectionPage for ApplicationReferenceCollection {
    type Item = ApplicationReference;

    fn into_items(self) -> Vec<ApplicationReference> {
        self.references.into_value().unwrap_or_default()
    }

    fn next_link(&self) -> Option<&str> {
        self.next.value().map(String::as_str)
    }

    fn statistics(&self) -> Option<&PageStatistics> {
        self.statistics.value()
    }
}

/// The body of a subscribe request: the application is designated by its
/// self reference only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedApplicationReference {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub application: Maybe<ApplicationSelfRef>,
}

impl SubscribedApplicationReference {
    pub fn new(application_url: impl Into<String>) -> Self {
        SubscribedApplicationReference {
            application: Maybe::Value(ApplicationSelfRef {
                self_url: Maybe::Value(application_url.into()),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationSelfRef {
    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,
}

/// A tuple storing tenant configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantOption {
    /// Name of the option category.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub category: Maybe<String>,

    /// A unique identifier for this option.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub value: Maybe<String>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,
}

/// A read-only tuple of platform-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemOption {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub category: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub value: Maybe<String>,
}

/// Two-factor authentication strategy of a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantTfaStrategy {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub strategy: Maybe<TfaStrategy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TfaStrategy {
    Sms,
    Totp,
    #[serde(untagged)]
    Unknown(String),
}

/// OAI-Secure session configuration of a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthSessionConfiguration {
    /// Maximum session duration (in milliseconds) during which a user
    /// does not have to login again.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub absolute_timeout_millis: Maybe<u64>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub maximum_number_of_parallel_sessions: Maybe<u32>,

    /// Amount of time before a token expires (in milliseconds) during
    /// which the token may be renewed.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub renewal_timeout_millis: Maybe<u64>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub user_agent_validation_required: Maybe<bool>,
}

/// Statistics file metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsFile {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub id: Maybe<String>,

    /// Domain name the statistics file comes from.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub instance_name: Maybe<String>,

    /// File generation date; a date or a date and time.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub generation_date: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub date_from: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub date_to: Maybe<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Maybe::is_absent")]
    pub statistics_type: Maybe<StatisticsType>,
}

/// REAL files are generated by the system on the first day of the month;
/// TEST files are generated on demand for a given time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatisticsType {
    Real,
    Test,
    #[serde(untagged)]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn subscribe_body_only_carries_the_application_url() {
        let body = SubscribedApplicationReference::new(
            "https://t1234.example.com/application/applications/42",
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"application": {"self": "https://t1234.example.com/application/applications/42"}})
        );
    }

    #[test]
    fn application_keeps_undocumented_attributes() {
        let application: Application = serde_json::from_value(json!({
            "id": "42",
            "name": "cockpit",
            "type": "HOSTED",
            "availability": "MARKET",
            "manifest": {"noAppSwitcher": true}
        }))
        .unwrap();

        assert_eq!(
            application.application_type,
            Maybe::Value(ApplicationType::Hosted)
        );
        assert_eq!(application.extras["manifest"], json!({"noAppSwitcher": true}));
    }

    #[test]
    fn reference_collection_pages() {
        let collection: ApplicationReferenceCollection = serde_json::from_value(json!({
            "references": [
                {"application": {"id": "1", "name": "cockpit"}},
                {"application": {"id": "2", "name": "devicemanagement"}}
            ],
            "statistics": {"currentPage": 1, "pageSize": 100}
        }))
        .unwrap();

        assert_eq!(collection.next_link(), None);
        assert_eq!(collection.into_items().len(), 2);
    }
}
