//! Wire format of the realtime notification (Bayeux) protocol.
//!
//! Only the message shapes: the handshake/connect/subscribe state
//! machine lives server-side and is not implemented here.

use crate::maybe::Maybe;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// One message of the realtime notification long-polling conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeNotification {
    /// The meta channel this message addresses.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub channel: Maybe<NotificationChannel>,

    /// Configuration parameters for the current connect message.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub advice: Maybe<Advice>,

    /// Unique client ID generated by the server during handshake.
    /// Required for all operations after the handshake.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub client_id: Maybe<String>,

    /// Selected connection type.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub connection_type: Maybe<String>,

    /// Notifications delivered on the channel; schema-less.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub data: Maybe<Value>,

    /// Operation failure reason, present only when unsuccessful.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub error: Maybe<String>,

    /// Authentication object passed to handshake (only over WebSockets).
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub ext: Maybe<Ext>,

    /// ID of the message passed in a request, echoed in the response.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub id: Maybe<String>,

    /// Minimum Bayeux protocol version required by the peer.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub minimum_version: Maybe<String>,

    /// Name of the channel to subscribe to.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub subscription: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub successful: Maybe<bool>,

    /// Connection types supported by both client and server.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub supported_connection_types: Maybe<Vec<String>>,

    /// Bayeux protocol version used by the peer.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub version: Maybe<String>,
}

impl RealtimeNotification {
    pub fn new(channel: NotificationChannel) -> Self {
        RealtimeNotification {
            channel: Maybe::Value(channel),
            ..Default::default()
        }
    }
}

/// The channel name as a URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationChannel {
    #[serde(rename = "/meta/handshake")]
    Handshake,
    #[serde(rename = "/meta/subscribe")]
    Subscribe,
    #[serde(rename = "/meta/unsubscribe")]
    Unsubscribe,
    #[serde(rename = "/meta/connect")]
    Connect,
    #[serde(rename = "/meta/disconnect")]
    Disconnect,
    #[serde(untagged)]
    Unknown(String),
}

/// Configuration parameters for the current connect message, overriding
/// the server defaults for this conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    /// Period (milliseconds) after which the server closes the session
    /// if no next connect message arrives.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub interval: Maybe<u64>,

    /// Interval (milliseconds) between the connect message and the
    /// server response.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub timeout: Maybe<u64>,
}

/// Authentication object passed to handshake.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ext {
    #[serde(
        rename = "com.cumulocity.authn",
        default,
        skip_serializing_if = "Maybe::is_absent"
    )]
    pub authn: Maybe<Authn>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub system_of_units: Maybe<SystemOfUnits>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authn {
    /// Base64 encoded credentials.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub token: Maybe<String>,

    /// Optional two factor authentication token.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub tfa: Maybe<String>,

    /// Required for OAuth authentication.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub xsrf_token: Maybe<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemOfUnits {
    Imperial,
    Metric,
    #[serde(untagged)]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn handshake_round_trip() {
        let wire = json!({
            "channel": "/meta/handshake",
            "ext": {"com.cumulocity.authn": {"token": "dGVzdA=="}},
            "id": "1",
            "supportedConnectionTypes": ["long-polling"],
            "version": "1.0"
        });

        let message: RealtimeNotification = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(
            message.channel,
            Maybe::Value(NotificationChannel::Handshake)
        );
        assert_eq!(serde_json::to_value(&message).unwrap(), wire);
    }

    #[test]
    fn connect_response_keeps_advice() {
        let message: RealtimeNotification = serde_json::from_value(json!({
            "channel": "/meta/connect",
            "successful": true,
            "advice": {"interval": 0, "timeout": 5000}
        }))
        .unwrap();

        let advice = message.advice.value().unwrap();
        assert_eq!(advice.timeout, Maybe::Value(5000));
    }

    #[test]
    fn unknown_channel_is_captured() {
        let message: RealtimeNotification =
            serde_json::from_value(json!({"channel": "/meta/ping"})).unwrap();
        assert_eq!(
            message.channel,
            Maybe::Value(NotificationChannel::Unknown("/meta/ping".into()))
        );
    }
}
