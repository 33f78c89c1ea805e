use crate::maybe::Maybe;
use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

/// The availability information computed by the platform, stored in the
/// `c8y_Availability` fragment of a device.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct C8yAvailability {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<AvailabilityDataStatus>,

    /// The time when the device sent its last message.
    #[serde(
        with = "crate::maybe::rfc3339",
        default,
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub last_message: Maybe<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityDataStatus {
    Available,
    Unavailable,
    Maintenance,
    #[serde(untagged)]
    Unknown(String),
}

/// The connection information computed by the platform, stored in the
/// `c8y_Connection` fragment of a device.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct C8yConnection {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub status: Maybe<AvailabilityConnectionStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityConnectionStatus {
    Connected,
    Disconnected,
    Maintenance,
    #[serde(untagged)]
    Unknown(String),
}

/// Availability of a monitored device as reported by the inventory API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedObjectAvailability {
    /// Identifier of the target device.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub device_id: Maybe<String>,

    /// The identifier used in the external system the platform
    /// interfaces with.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub external_id: Maybe<String>,

    #[serde(
        with = "crate::maybe::rfc3339",
        default,
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub last_message: Maybe<OffsetDateTime>,

    /// Required interval of the monitored device, in minutes.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub interval: Maybe<u32>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub data_status: Maybe<AvailabilityDataStatus>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub connection_status: Maybe<AvailabilityConnectionStatus>,
}

/// A measurement is a value with a unit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct C8yMeasurementValue {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub value: Maybe<f64>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub unit: Maybe<String>,
}

/// Moisture measurement fragment; absolute, relative or specific.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct C8yMoistureMeasurement {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub moisture: Maybe<C8yMeasurementValue>,
}

/// A single phase electricity meter is modeled as an empty marker
/// fragment on the managed object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct C8ySinglePhaseElectricitySensor {}
