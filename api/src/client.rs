//! Typed access to the donation endpoints.

use std::fmt;
use std::rc::Rc;

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::donation::Donation;
use crate::donation::DonationId;
use crate::donation::DonorInfo;
use crate::donation::RequestReceipt;
use crate::transport::HttpTransport;
use crate::transport::ReqwestTransport;
use crate::transport::TransportError;

/// User-facing failures of the donation endpoints.
///
/// `Display` yields the message shown in the UI banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonationsError {
    #[error("Failed to fetch donor information")]
    FetchFailed,

    /// Carries the server's `error` text verbatim, or the generic message.
    #[error("{0}")]
    RequestFailed(String),

    #[error("Failed to load donations: {0}")]
    ListFailed(String),
}

impl DonationsError {
    pub const GENERIC_REQUEST_FAILURE: &'static str = "Failed to send request";

    fn request_failed(err: &TransportError) -> Self {
        let message = err
            .server_message()
            .unwrap_or(Self::GENERIC_REQUEST_FAILURE);
        Self::RequestFailed(message.to_string())
    }
}

pub fn donations_path() -> String {
    "/api/donations/".to_string()
}

pub fn donor_info_path(id: DonationId) -> String {
    format!("/api/donations/{id}/donor-info/")
}

pub fn request_path(id: DonationId) -> String {
    format!("/api/donations/{id}/request/")
}

/// Cheap to clone; every clone shares one transport.
#[derive(Clone)]
pub struct DonationsClient {
    transport: Rc<dyn HttpTransport>,
}

impl DonationsClient {
    pub fn new(transport: Rc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// A client that talks to the configured backend over HTTP.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(Rc::new(ReqwestTransport::new(config)))
    }

    pub async fn list_donations(&self) -> Result<Vec<Donation>, DonationsError> {
        let value = self
            .transport
            .get(&donations_path())
            .await
            .map_err(|e| DonationsError::ListFailed(e.to_string()))?;
        decode(value).map_err(|e| DonationsError::ListFailed(e.to_string()))
    }

    /// Reads the donor details behind a donation. Any failure collapses to
    /// [`DonationsError::FetchFailed`].
    pub async fn fetch_donor_info(&self, id: DonationId) -> Result<DonorInfo, DonationsError> {
        let result = match self.transport.get(&donor_info_path(id)).await {
            Ok(value) => decode::<DonorInfo>(value),
            Err(e) => Err(e),
        };
        match result {
            Ok(info) => {
                info!("fetched donor info for donation {}", id);
                Ok(info)
            }
            Err(e) => {
                warn!("donor info for donation {} failed: {}", id, e);
                Err(DonationsError::FetchFailed)
            }
        }
    }

    /// Asks the backend to reserve the donation for the current user.
    ///
    /// Any 2xx reply means the request exists on the backend, so a body that
    /// cannot be read still counts as success, just without a chat room.
    pub async fn submit_request(&self, id: DonationId) -> Result<RequestReceipt, DonationsError> {
        let receipt = match self.transport.post(&request_path(id), None).await {
            Ok(value) => receipt_from(id, &value),
            Err(TransportError::Decode(e)) => {
                warn!("unreadable request reply for donation {}: {}", id, e);
                RequestReceipt::default()
            }
            Err(e) => {
                warn!("request for donation {} failed: {}", id, e);
                return Err(DonationsError::request_failed(&e));
            }
        };
        info!(
            "requested donation {} (chat room: {:?})",
            id,
            receipt.chat_room.map(|c| c.id)
        );
        Ok(receipt)
    }
}

// Only `chat_room` is read; the rest of the body is ignored.
fn receipt_from(id: DonationId, value: &Value) -> RequestReceipt {
    let Some(chat_room) = value.get("chat_room") else {
        return RequestReceipt::default();
    };
    match serde_json::from_value(chat_room.clone()) {
        Ok(chat_room) => RequestReceipt { chat_room },
        Err(e) => {
            warn!("ignoring chat room in reply for donation {}: {}", id, e);
            RequestReceipt::default()
        }
    }
}

impl PartialEq for DonationsClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl fmt::Debug for DonationsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DonationsClient").finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeTransport;
    use crate::fake::Method;
    use crate::donation::ChatRoomId;
    use serde_json::json;

    fn donor_json() -> Value {
        json!({
            "age": 34,
            "gender": "male",
            "blood_type": "B+",
            "city": "Limassol",
            "last_updated": "2024-02-20T12:00:00Z",
            "medical_history": null
        })
    }

    #[tokio::test]
    async fn donor_info_is_read_from_the_donation_path() {
        let fake = Rc::new(FakeTransport::new());
        fake.respond(Method::Get, "/api/donations/9/donor-info/", Ok(donor_json()));
        let client = DonationsClient::new(fake.clone());

        let info = client.fetch_donor_info(DonationId(9)).await.unwrap();
        assert_eq!(info.age, 34);
        assert_eq!(
            fake.calls(),
            vec![(Method::Get, "/api/donations/9/donor-info/".to_string())]
        );
    }

    #[tokio::test]
    async fn any_donor_info_failure_is_generic() {
        let fake = Rc::new(FakeTransport::new());
        fake.respond(
            Method::Get,
            "/api/donations/9/donor-info/",
            Err(TransportError::Status {
                status: 400,
                body: Some(json!({"error": "This organ is no longer available"})),
            }),
        );
        fake.respond(Method::Get, "/api/donations/9/donor-info/", Ok(json!({"age": "old"})));
        let client = DonationsClient::new(fake);

        let first = client.fetch_donor_info(DonationId(9)).await.unwrap_err();
        assert_eq!(first, DonationsError::FetchFailed);
        assert_eq!(first.to_string(), "Failed to fetch donor information");
        let second = client.fetch_donor_info(DonationId(9)).await.unwrap_err();
        assert_eq!(second, DonationsError::FetchFailed);
    }

    #[tokio::test]
    async fn request_error_text_is_surfaced_verbatim() {
        let fake = Rc::new(FakeTransport::new());
        fake.respond(
            Method::Post,
            "/api/donations/4/request/",
            Err(TransportError::Status {
                status: 400,
                body: Some(json!({"error": "Blood type mismatch"})),
            }),
        );
        fake.respond(
            Method::Post,
            "/api/donations/4/request/",
            Err(TransportError::Status {
                status: 500,
                body: None,
            }),
        );
        let client = DonationsClient::new(fake);

        let err = client.submit_request(DonationId(4)).await.unwrap_err();
        assert_eq!(err.to_string(), "Blood type mismatch");
        let err = client.submit_request(DonationId(4)).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to send request");
    }

    #[tokio::test]
    async fn request_receipt_may_carry_a_chat_room() {
        let fake = Rc::new(FakeTransport::new());
        fake.respond(
            Method::Post,
            "/api/donations/4/request/",
            Ok(json!({"chat_room": {"id": 42}})),
        );
        fake.respond(Method::Post, "/api/donations/4/request/", Ok(Value::Null));
        let client = DonationsClient::new(fake);

        let receipt = client.submit_request(DonationId(4)).await.unwrap();
        assert_eq!(receipt.chat_room.map(|c| c.id), Some(ChatRoomId(42)));
        let receipt = client.submit_request(DonationId(4)).await.unwrap();
        assert_eq!(receipt.chat_room, None);
    }

    #[tokio::test]
    async fn any_success_reply_is_a_request_without_chat_when_unreadable() {
        let fake = Rc::new(FakeTransport::new());
        let path = "/api/donations/4/request/";
        fake.respond(Method::Post, path, Ok(json!("created")));
        fake.respond(Method::Post, path, Ok(json!([1, 2])));
        fake.respond(Method::Post, path, Ok(json!({"chat_room": "x"})));
        fake.respond(Method::Post, path, Ok(json!({"chat_room": 42})));
        fake.respond(
            Method::Post,
            path,
            Err(TransportError::Decode("expected value at line 1".to_string())),
        );
        let client = DonationsClient::new(fake.clone());

        for _ in 0..5 {
            let receipt = client.submit_request(DonationId(4)).await.unwrap();
            assert_eq!(receipt, RequestReceipt::default());
        }
        assert_eq!(fake.count(Method::Post, path), 5);
    }

    #[tokio::test]
    async fn list_donations_decodes_array() {
        let fake = Rc::new(FakeTransport::new());
        fake.respond(
            Method::Get,
            "/api/donations/",
            Ok(json!([{
                "id": 1,
                "organ_name": "Heart",
                "blood_type": "AB-",
                "city": "Famagusta",
                "is_available": true,
                "created_at": "2024-04-01T09:00:00Z"
            }])),
        );
        let client = DonationsClient::new(fake.clone());
        let donations = client.list_donations().await.unwrap();
        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].organ_name, "Heart");

        // nothing scripted for the second call
        let err = client.list_donations().await.unwrap_err();
        assert!(matches!(err, DonationsError::ListFailed(_)));
    }

    #[test]
    fn clients_compare_by_shared_transport() {
        let fake = Rc::new(FakeTransport::new());
        let a = DonationsClient::new(fake.clone());
        let b = a.clone();
        let c = DonationsClient::new(Rc::new(FakeTransport::new()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
