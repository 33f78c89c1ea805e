use crate::maybe::Maybe;
use serde::Deserialize;
use serde::Serialize;

/// A feature toggle with its value calculated for a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggle {
    /// A unique key of the feature toggle.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub key: Maybe<String>,

    /// Current phase of the feature toggle rollout.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub phase: Maybe<FeaturePhase>,

    /// Whether the feature is active for the tenant.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub active: Maybe<bool>,

    /// Where the value comes from: the definition default or a per-tenant
    /// override.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub strategy: Maybe<FeatureStrategy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeaturePhase {
    InDevelopment,
    PrivatePreview,
    PublicPreview,
    GenerallyAvailable,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureStrategy {
    Default,
    Tenant,
    #[serde(untagged)]
    Unknown(String),
}

/// The body of a feature toggle override.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggleValue {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub active: Maybe<bool>,
}

impl FeatureToggleValue {
    pub fn new(active: bool) -> Self {
        FeatureToggleValue {
            active: Maybe::Value(active),
        }
    }
}

/// A feature toggle override of one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantFeatureToggleValue {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub tenant_id: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub active: Maybe<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!("IN_DEVELOPMENT"), FeaturePhase::InDevelopment)]
    #[test_case(json!("PRIVATE_PREVIEW"), FeaturePhase::PrivatePreview)]
    #[test_case(json!("PUBLIC_PREVIEW"), FeaturePhase::PublicPreview)]
    #[test_case(json!("GENERALLY_AVAILABLE"), FeaturePhase::GenerallyAvailable)]
    #[test_case(json!("SUNSET"), FeaturePhase::Unknown("SUNSET".into()))]
    fn phases_decode(wire: serde_json::Value, expected: FeaturePhase) {
        let phase: FeaturePhase = serde_json::from_value(wire).unwrap();
        assert_eq!(phase, expected);
    }

    #[test]
    fn toggle_decodes_with_strategy() {
        let toggle: FeatureToggle = serde_json::from_value(json!({
            "key": "new-ui",
            "phase": "PUBLIC_PREVIEW",
            "active": true,
            "strategy": "TENANT"
        }))
        .unwrap();

        assert_eq!(toggle.strategy, Maybe::Value(FeatureStrategy::Tenant));
        assert_eq!(toggle.active, Maybe::Value(true));
    }
}
