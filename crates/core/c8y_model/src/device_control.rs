use crate::maybe::Maybe;
use crate::paging::CollectionPage;
use crate::paging::PageStatistics;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use time::OffsetDateTime;

/// A device operation, the unit of work of the device control API.
///
/// Anything that is not one of the documented attributes is a custom
/// fragment and lands in `extras`, so operation payloads like
/// `c8y_Restart` survive a decode/encode round trip.
///
/// ```rust
/// use c8y_model::device_control::{Operation, OperationStatus};
///
/// let data = r#"
/// {
///     "creationTime": "2023-02-08T06:51:19.35Z",
///     "deviceId": "22519994",
///     "id": "522559",
///     "status": "PENDING",
///     "description": "restart",
///     "c8y_Restart": {}
/// }"#;
///
/// let operation: Operation = serde_json::from_str(data).unwrap();
/// assert_eq!(operation.status.value(), Some(&OperationStatus::Pending));
/// assert!(operation.extras.contains_key("c8y_Restart"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Unique identifier of this operation, assigned by the platform.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub id: Maybe<String>,

    /// A URL linking to this resource.
    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,

    /// Identifier of the device the operation is performed on.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub device_id: Maybe<String>,

    /// Name of the device, filled only on collection queries.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub device_name: Maybe<String>,

    /// External identifiers of the device, filled only when queried with
    /// an `agentId` parameter.
    #[serde(
        rename = "deviceExternalIDs",
        default,
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub device_external_ids: Maybe<ExternalIds>,

    /// The bulk operation this operation belongs to.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub bulk_operation_id: Maybe<String>,

    #[serde(
        with = "crate::maybe::rfc3339",
        default,
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub creation_time: Maybe<OffsetDateTime>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<OperationStatus>,

    /// Reason of the failure, present only for failed operations.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub failure_reason: Maybe<String>,

    /// Custom fragments, e.g. `c8y_Restart` or `c8y_SoftwareUpdate`.
    #[serde(flatten)]
    pub extras: HashMap<String, Value>,
}

impl Operation {
    /// An operation targeting the given device, ready to be completed
    /// with custom fragments.
    pub fn new(device_id: impl Into<String>) -> Self {
        Operation {
            device_id: Maybe::Value(device_id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Pending,
    Executing,
    Successful,
    Failed,
    /// A status constant this client does not know yet, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

impl OperationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OperationStatus::Pending => "PENDING",
            OperationStatus::Executing => "EXECUTING",
            OperationStatus::Successful => "SUCCESSFUL",
            OperationStatus::Failed => "FAILED",
            OperationStatus::Unknown(status) => status,
        }
    }
}

/// The external identifiers attached to a device.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalIds {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_ids: Maybe<Vec<ExternalId>>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalId {
    /// The identifier used in the external system.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_id: Maybe<String>,

    /// The type of the external identifier, e.g. `c8y_Serial`.
    #[serde(rename = "type", default, skip_serializing_if = "Maybe::is_absent")]
    pub id_type: Maybe<String>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,
}

/// One page of operations. Operations are returned in the order of their
/// ascending IDs unless the query reverts it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationCollection {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub prev: Maybe<String>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub statistics: Maybe<PageStatistics>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub operations: Maybe<Vec<Operation>>,
}

impl CollectionPage for OperationCollection {
    type Item = Operation;

    fn into_items(self) -> Vec<Operation> {
        self.operations.into_value().unwrap_or_default()
    }

    fn next_link(&self) -> Option<&str> {
        self.next.value().map(String::as_str)
    }

    fn statistics(&self) -> Option<&PageStatistics> {
        self.statistics.value()
    }
}

/// A request of a device to connect, pending acceptance by an admin.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeviceRequest {
    /// The device identifier, e.g. the serial number printed on it.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub id: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<NewDeviceRequestStatus>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,

    /// The owner assigned by the platform once the request is accepted.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub owner: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub security_token: Maybe<String>,

    /// The group the device will be added to on acceptance.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub group_id: Maybe<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Maybe::is_absent")]
    pub device_type: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub tenant_id: Maybe<String>,

    #[serde(
        with = "crate::maybe::rfc3339",
        default,
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub creation_time: Maybe<OffsetDateTime>,
}

impl NewDeviceRequest {
    pub fn new(id: impl Into<String>) -> Self {
        NewDeviceRequest {
            id: Maybe::Value(id.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewDeviceRequestStatus {
    WaitingForConnection,
    PendingAcceptance,
    Accepted,
    #[serde(untagged)]
    Unknown(String),
}

impl NewDeviceRequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NewDeviceRequestStatus::WaitingForConnection => "WAITING_FOR_CONNECTION",
            NewDeviceRequestStatus::PendingAcceptance => "PENDING_ACCEPTANCE",
            NewDeviceRequestStatus::Accepted => "ACCEPTED",
            NewDeviceRequestStatus::Unknown(status) => status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeviceRequestCollection {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub next: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub prev: Maybe<String>,

    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub statistics: Maybe<PageStatistics>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub new_device_requests: Maybe<Vec<NewDeviceRequest>>,
}

impl CollectionPage for NewDeviceRequestCollection {
    type Item = NewDeviceRequest;

    fn into_items(self) -> Vec<NewDeviceRequest> {
        self.new_device_requests.into_value().unwrap_or_default()
    }

    fn next_link(&self) -> Option<&str> {
        self.next.value().map(String::as_str)
    }

    fn statistics(&self) -> Option<&PageStatistics> {
        self.statistics.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn operation_round_trip_is_lossless() {
        let wire = json!({
            "id": "522559",
            "deviceId": "22519994",
            "creationTime": "2023-02-08T06:51:19.35Z",
            "status": "FAILED",
            "failureReason": "device unreachable",
            "c8y_Restart": {},
            "description": "restart the gateway"
        });

        let operation: Operation = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(
            operation.creation_time,
            Maybe::Value(datetime!(2023-02-08 06:51:19.35 UTC))
        );
        assert_eq!(operation.extras["description"], json!("restart the gateway"));

        assert_eq!(serde_json::to_value(&operation).unwrap(), wire);
    }

    #[test]
    fn absent_fields_are_not_written_back() {
        let operation = Operation::new("1234");
        assert_eq!(
            serde_json::to_value(&operation).unwrap(),
            json!({"deviceId": "1234"})
        );
    }

    #[test]
    fn unrecognized_status_is_captured_not_rejected() {
        let operation: Operation =
            serde_json::from_value(json!({"status": "RESCHEDULED"})).unwrap();
        assert_eq!(
            operation.status,
            Maybe::Value(OperationStatus::Unknown("RESCHEDULED".into()))
        );
        assert_eq!(
            serde_json::to_value(&operation).unwrap(),
            json!({"status": "RESCHEDULED"})
        );
    }

    #[test]
    fn new_device_request_statuses_decode() {
        let request: NewDeviceRequest = serde_json::from_value(json!({
            "id": "SN-456",
            "status": "WAITING_FOR_CONNECTION"
        }))
        .unwrap();
        assert_eq!(
            request.status,
            Maybe::Value(NewDeviceRequestStatus::WaitingForConnection)
        );
    }

    #[test]
    fn collection_exposes_items_and_next_link() {
        let collection: OperationCollection = serde_json::from_value(json!({
            "next": "/devicecontrol/operations?currentPage=2",
            "statistics": {"currentPage": 1, "pageSize": 5},
            "operations": [{"id": "1"}, {"id": "2"}]
        }))
        .unwrap();

        assert_eq!(
            collection.next_link(),
            Some("/devicecontrol/operations?currentPage=2")
        );
        assert_eq!(
            collection.statistics().unwrap().current_page,
            Maybe::Value(1)
        );

        let ids: Vec<_> = collection
            .into_items()
            .into_iter()
            .map(|operation| operation.id.into_value().unwrap())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn absent_item_array_is_an_empty_page() {
        let collection: NewDeviceRequestCollection = serde_json::from_value(json!({})).unwrap();
        assert!(collection.into_items().is_empty());
    }
}
