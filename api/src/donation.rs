//! Records exchanged with the donations backend.

use std::fmt;

use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identifies a donation record on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationId(pub u64);

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a chat room created by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatRoomId(pub u64);

impl fmt::Display for ChatRoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An organ offered for donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id: DonationId,
    pub organ_name: String,
    pub blood_type: String,
    pub city: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Label used for the availability badge.
    pub fn availability_label(&self) -> &'static str {
        if self.is_available {
            "Available"
        } else {
            "Not Available"
        }
    }

    pub fn posted_on(&self) -> String {
        local_date(&self.created_at)
    }
}

/// Demographic and medical detail about the donor behind a donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorInfo {
    pub age: u32,
    pub gender: String,
    pub blood_type: String,
    pub city: String,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub medical_history: Option<String>,
}

impl DonorInfo {
    pub const NO_MEDICAL_HISTORY: &'static str = "No specific medical history provided";

    /// The medical history text, or a placeholder when it is missing or empty.
    pub fn medical_history_text(&self) -> &str {
        match self.medical_history.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => Self::NO_MEDICAL_HISTORY,
        }
    }

    pub fn last_updated_on(&self) -> String {
        local_date(&self.last_updated)
    }
}

/// A messaging channel between requester and donor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoom {
    pub id: ChatRoomId,
}

/// Body returned by a successful donation request.
///
/// Only the chat room is of interest; any other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestReceipt {
    #[serde(default)]
    pub chat_room: Option<ChatRoom>,
}

fn local_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string()
}
