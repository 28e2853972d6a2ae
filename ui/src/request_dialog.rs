//! Headless state machine behind the donation request dialog.
//!
//! The model never performs I/O. Transitions hand back a [`DialogCommand`];
//! [`run`] executes it against the backend client or navigator and yields a
//! [`DialogEvent`] that is fed back through [`RequestDialogModel::apply`].
//!
//! Every command carries the [`Ticket`] of the dialog session that issued it.
//! Opening or closing the dialog starts a new session, so replies that
//! arrive after the user moved on are recognised as stale and dropped.

use api::ChatRoomId;
use api::Donation;
use api::DonationId;
use api::DonationsClient;
use api::DonationsError;
use api::DonorInfo;
use api::RequestReceipt;
use dioxus_logger::tracing::debug;

use crate::navigation::AppNavigator;
use crate::navigation::Navigator;
use crate::navigation::Route;

pub const CHAT_READY_MESSAGE: &str = "Request sent successfully! You can now message the donor.";
pub const PENDING_REVIEW_MESSAGE: &str =
    "Request sent successfully! The donor will review your request.";

/// Identifies one showing of the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, strum::EnumIs)]
pub enum DonorInfoState {
    Loading,
    Loaded(DonorInfo),
    Failed,
}

#[derive(Clone, Debug, PartialEq, strum::EnumIs)]
pub enum RequestState {
    Idle,
    Submitting,
    SucceededWithChat(ChatRoomId),
    SucceededNoChat,
    Failed(String),
}

/// The single message shown at the top of the dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    None,
    Error(String),
    Success(&'static str),
}

/// What the primary footer button does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimaryAction {
    Request { busy: bool, enabled: bool },
    StartChat(ChatRoomId),
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Request { busy: true, .. } => "Sending Request...",
            PrimaryAction::Request { busy: false, .. } => "Request Organ",
            PrimaryAction::StartChat(_) => "Start Chat with Donor",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DialogCommand {
    FetchDonorInfo { ticket: Ticket, donation_id: DonationId },
    SubmitRequest { ticket: Ticket, donation_id: DonationId },
    OpenChat(ChatRoomId),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DialogEvent {
    DonorInfoFetched {
        ticket: Ticket,
        result: Result<DonorInfo, DonationsError>,
    },
    RequestSubmitted {
        ticket: Ticket,
        result: Result<RequestReceipt, DonationsError>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequestDialogModel {
    donation: Donation,
    session: u64,
    open: bool,
    donor_info: DonorInfoState,
    request: RequestState,
    banner_dismissed: bool,
}

impl RequestDialogModel {
    /// A closed dialog for `donation`.
    pub fn new(donation: Donation) -> Self {
        Self {
            donation,
            session: 0,
            open: false,
            donor_info: DonorInfoState::Loading,
            request: RequestState::Idle,
            banner_dismissed: false,
        }
    }

    fn ticket(&self) -> Ticket {
        Ticket(self.session)
    }

    fn reset(&mut self) {
        self.session += 1;
        self.donor_info = DonorInfoState::Loading;
        self.request = RequestState::Idle;
        self.banner_dismissed = false;
    }

    /// Shows the dialog for `donation`, discarding anything learned during
    /// a previous showing. Returns the donor info fetch to perform.
    pub fn open(&mut self, donation: Donation) -> DialogCommand {
        self.donation = donation;
        self.reset();
        self.open = true;
        DialogCommand::FetchDonorInfo {
            ticket: self.ticket(),
            donation_id: self.donation.id,
        }
    }

    pub fn close(&mut self) {
        self.reset();
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn donation(&self) -> &Donation {
        &self.donation
    }

    pub fn donor_info_state(&self) -> &DonorInfoState {
        &self.donor_info
    }

    pub fn donor_info(&self) -> Option<&DonorInfo> {
        match &self.donor_info {
            DonorInfoState::Loaded(info) => Some(info),
            _ => None,
        }
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn chat_room(&self) -> Option<ChatRoomId> {
        match self.request {
            RequestState::SucceededWithChat(id) => Some(id),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.open
            && self.donation.is_available
            && !self.request.is_submitting()
            && self.chat_room().is_none()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        match self.chat_room() {
            Some(id) => PrimaryAction::StartChat(id),
            None => PrimaryAction::Request {
                busy: self.request.is_submitting(),
                enabled: self.can_submit(),
            },
        }
    }

    /// The terms notice is shown until a chat room exists.
    pub fn shows_terms(&self) -> bool {
        self.chat_room().is_none()
    }

    pub fn banner(&self) -> Banner {
        if self.banner_dismissed {
            return Banner::None;
        }
        match &self.request {
            RequestState::Failed(message) => Banner::Error(message.clone()),
            RequestState::SucceededWithChat(_) => Banner::Success(CHAT_READY_MESSAGE),
            RequestState::SucceededNoChat => Banner::Success(PENDING_REVIEW_MESSAGE),
            RequestState::Submitting => Banner::None,
            // a fetch error stays visible until the next submit attempt
            RequestState::Idle if self.donor_info.is_failed() => {
                Banner::Error(DonationsError::FetchFailed.to_string())
            }
            RequestState::Idle => Banner::None,
        }
    }

    /// Hides the current banner without touching donor info or chat state.
    pub fn dismiss_banner(&mut self) {
        self.banner_dismissed = true;
    }

    /// Starts a submission, or returns `None` when submitting is not allowed.
    pub fn submit(&mut self) -> Option<DialogCommand> {
        if !self.can_submit() {
            return None;
        }
        self.request = RequestState::Submitting;
        self.banner_dismissed = false;
        Some(DialogCommand::SubmitRequest {
            ticket: self.ticket(),
            donation_id: self.donation.id,
        })
    }

    /// `None` until a chat room exists.
    pub fn open_chat(&self) -> Option<DialogCommand> {
        self.chat_room().map(DialogCommand::OpenChat)
    }

    /// Applies a completed command. Returns `false` for stale events, which
    /// leave the model untouched.
    pub fn apply(&mut self, event: DialogEvent) -> bool {
        match event {
            DialogEvent::DonorInfoFetched { ticket, result } => {
                if !self.is_current(ticket) {
                    return false;
                }
                self.donor_info = match result {
                    Ok(info) => DonorInfoState::Loaded(info),
                    Err(_) => DonorInfoState::Failed,
                };
                true
            }
            DialogEvent::RequestSubmitted { ticket, result } => {
                if !self.is_current(ticket) || !self.request.is_submitting() {
                    return false;
                }
                self.request = match result {
                    Ok(RequestReceipt {
                        chat_room: Some(room),
                    }) => RequestState::SucceededWithChat(room.id),
                    Ok(RequestReceipt { chat_room: None }) => RequestState::SucceededNoChat,
                    Err(e) => RequestState::Failed(e.to_string()),
                };
                self.banner_dismissed = false;
                true
            }
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.open && ticket == self.ticket()
    }
}

/// Performs a command's side effect. Navigation completes synchronously and
/// produces no event.
pub async fn run(
    command: DialogCommand,
    client: &DonationsClient,
    navigator: &AppNavigator,
) -> Option<DialogEvent> {
    debug!("dialog command: {:?}", command);
    match command {
        DialogCommand::FetchDonorInfo {
            ticket,
            donation_id,
        } => Some(DialogEvent::DonorInfoFetched {
            ticket,
            result: client.fetch_donor_info(donation_id).await,
        }),
        DialogCommand::SubmitRequest {
            ticket,
            donation_id,
        } => Some(DialogEvent::RequestSubmitted {
            ticket,
            result: client.submit_request(donation_id).await,
        }),
        DialogCommand::OpenChat(id) => {
            navigator.navigate(Route::Chat(id));
            None
        }
    }
}
