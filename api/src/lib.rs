//! Data model and backend access for the donation coordination UI.

pub mod client;
pub mod config;
pub mod donation;
#[cfg(any(test, feature = "test-util"))]
pub mod fake;
pub mod filters;
pub mod transport;

pub use client::DonationsClient;
pub use client::DonationsError;
pub use config::ApiConfig;
pub use donation::ChatRoom;
pub use donation::ChatRoomId;
pub use donation::Donation;
pub use donation::DonationId;
pub use donation::DonorInfo;
pub use donation::RequestReceipt;
pub use filters::ActiveFilters;
pub use filters::FilterCategory;
pub use transport::HttpTransport;
pub use transport::TransportError;
