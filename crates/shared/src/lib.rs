use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Requester,
    Responder,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Requester => "requester",
            Role::Responder => "responder",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "requester" => Some(Role::Requester),
            "responder" => Some(Role::Responder),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalType {
    Medical,
    Fire,
    Police,
    Other,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Medical => "medical",
            SignalType::Fire => "fire",
            SignalType::Police => "police",
            SignalType::Other => "other",
        }
    }

    pub fn parse(value: &str) -> Option<SignalType> {
        match value {
            "medical" => Some(SignalType::Medical),
            "fire" => Some(SignalType::Fire),
            "police" => Some(SignalType::Police),
            "other" => Some(SignalType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl SignalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Pending => "pending",
            SignalStatus::InProgress => "in-progress",
            SignalStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<SignalStatus> {
        match value {
            "pending" => Some(SignalStatus::Pending),
            "in-progress" => Some(SignalStatus::InProgress),
            "completed" => Some(SignalStatus::Completed),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SignalStatus::Pending => 0,
            SignalStatus::InProgress => 1,
            SignalStatus::Completed => 2,
        }
    }

    /// Status only moves forward: pending, then in-progress, then completed.
    pub fn can_transition_to(&self, next: SignalStatus) -> bool {
        next.rank() > self.rank()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: Uuid,
    pub requester_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_username: Option<String>,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: Coordinates,
    pub status: SignalStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponderLocation {
    pub responder_id: Uuid,
    pub location: Coordinates,
}

/// Frames a client may send over an established connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    ResponderLocation(Coordinates),
}

/// Frames the server pushes to a connection's group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    ReceiveSignal(Signal),
    UpdateResponderLocation(ResponderLocation),
    SignalUpdated(Signal),
}
