//=============================================================================
// File: src/components/donation_request_dialog.rs
//=============================================================================
use api::Donation;
use api::DonationsClient;
use api::DonorInfo;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::components::pico::Alert;
use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Modal;
use crate::components::pico::Tone;
use crate::navigation::AppNavigator;
use crate::request_dialog::run;
use crate::request_dialog::Banner;
use crate::request_dialog::DialogCommand;
use crate::request_dialog::PrimaryAction;
use crate::request_dialog::RequestDialogModel;

const TERMS: [&str; 4] = [
    "Maintain confidentiality of donor information",
    "Use the messaging system for communication",
    "Follow medical protocols and guidelines",
    "Coordinate with healthcare professionals",
];

/// Lets a requester review a donation and its donor, then ask for it.
///
/// Every time `show` becomes true (or the donation changes while shown) the
/// donor details are fetched afresh. Replies that arrive after the dialog was
/// hidden are dropped.
#[component]
pub fn DonationRequestDialog(
    donation: Donation,
    show: bool,
    on_hide: EventHandler<()>,
    client: DonationsClient,
    navigator: AppNavigator,
) -> Element {
    let mut model = use_signal(|| RequestDialogModel::new(donation.clone()));

    let dispatch = use_callback(move |command: DialogCommand| {
        let client = client.clone();
        let navigator = navigator.clone();
        spawn(async move {
            if let Some(event) = run(command, &client, &navigator).await {
                if !model.write().apply(event) {
                    debug!("dropped reply for a dialog session that has ended");
                }
            }
        });
    });

    use_effect(use_reactive!(|(show, donation)| {
        if show {
            let command = model.write().open(donation);
            dispatch.call(command);
        } else if model.peek().is_open() {
            model.write().close();
        }
    }));

    let current = model();
    let action = current.primary_action();

    rsx! {
        Modal {
            open: show,
            title: "Request Organ Donation",
            on_close: move |_| on_hide.call(()),
            footer: rsx! {
                DialogActions {
                    action,
                    on_close: move |_| on_hide.call(()),
                    on_primary: move |_| {
                        let command = match action {
                            PrimaryAction::Request { .. } => model.write().submit(),
                            PrimaryAction::StartChat(_) => model.peek().open_chat(),
                        };
                        if let Some(command) = command {
                            dispatch.call(command);
                        }
                    },
                }
            },

            match current.banner() {
                Banner::None => rsx! {},
                Banner::Error(message) => rsx! {
                    Alert {
                        tone: Tone::Danger,
                        on_dismiss: move |_| model.write().dismiss_banner(),
                        "{message}"
                    }
                },
                Banner::Success(message) => rsx! {
                    Alert {
                        tone: Tone::Success,
                        on_dismiss: move |_| model.write().dismiss_banner(),
                        "{message}"
                    }
                },
            }

            OrganDetails { donation: current.donation().clone() }

            if let Some(info) = current.donor_info() {
                DonorDetails { info: info.clone() }
            }

            if current.shows_terms() {
                Alert {
                    tone: Tone::Info,
                    p { "By requesting this organ, you agree to:" }
                    ul {
                        for term in TERMS {
                            li { key: "{term}", "{term}" }
                        }
                    }
                }
            }
        }
    }
}

/// Close, plus either the request button or the chat shortcut.
#[component]
fn DialogActions(
    action: PrimaryAction,
    on_close: EventHandler<()>,
    on_primary: EventHandler<()>,
) -> Element {
    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            on_click: move |_| on_close.call(()),
            "Close"
        }
        match action {
            PrimaryAction::Request { enabled, .. } => rsx! {
                Button {
                    button_type: ButtonType::Primary,
                    disabled: !enabled,
                    on_click: move |_| on_primary.call(()),
                    "{action.label()}"
                }
            },
            PrimaryAction::StartChat(_) => rsx! {
                Button {
                    button_type: ButtonType::Contrast,
                    on_click: move |_| on_primary.call(()),
                    "{action.label()}"
                }
            },
        }
    }
}

#[component]
fn OrganDetails(donation: Donation) -> Element {
    let tone = if donation.is_available {
        Tone::Success
    } else {
        Tone::Danger
    };
    rsx! {
        Card {
            h5 { "Organ Details" }
            Grid {
                div {
                    p { strong { "Organ: " } "{donation.organ_name}" }
                    p { strong { "Blood Type: " } "{donation.blood_type}" }
                    p { strong { "Location: " } "{donation.city}" }
                }
                div {
                    p {
                        strong { "Availability:" }
                        Badge { tone, "{donation.availability_label()}" }
                    }
                    p { strong { "Posted: " } "{donation.posted_on()}" }
                }
            }
        }
    }
}

#[component]
fn DonorDetails(info: DonorInfo) -> Element {
    rsx! {
        Card {
            h5 { "Donor Information" }
            Grid {
                div {
                    p { strong { "Age: " } "{info.age}" }
                    p { strong { "Gender: " } "{info.gender}" }
                    p { strong { "Blood Type: " } "{info.blood_type}" }
                }
                div {
                    p { strong { "Location: " } "{info.city}" }
                    p { strong { "Last Updated: " } "{info.last_updated_on()}" }
                }
            }
            h6 { style: "margin-top: 1rem;", "Medical History" }
            p {
                style: "color: var(--pico-muted-color);",
                "{info.medical_history_text()}"
            }
        }
    }
}
