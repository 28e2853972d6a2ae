//=============================================================================
// File: src/screens/donations.rs
//=============================================================================
use api::ActiveFilters;
use api::Donation;
use api::DonationsClient;
use api::FilterCategory;
use dioxus::prelude::*;

use crate::components::donation_filter_panel::DonationFilterPanel;
use crate::components::donation_request_dialog::DonationRequestDialog;
use crate::components::pico::Badge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Tone;
use crate::navigation::AppNavigator;

#[component]
fn DonationRow(donation: Donation, on_view: EventHandler<Donation>) -> Element {
    let tone = if donation.is_available {
        Tone::Success
    } else {
        Tone::Danger
    };
    let selected = donation.clone();
    rsx! {
        tr {
            td { "{donation.organ_name}" }
            td { "{donation.blood_type}" }
            td { "{donation.city}" }
            td { Badge { tone, "{donation.availability_label()}" } }
            td { "{donation.posted_on()}" }
            td {
                Button {
                    button_type: ButtonType::Primary,
                    outline: true,
                    on_click: move |_| on_view.call(selected.clone()),
                    "View"
                }
            }
        }
    }
}

/// Lists donations, narrows them with the filter panel, and opens the
/// request dialog for the chosen one.
#[component]
pub fn DonationsScreen() -> Element {
    let client = use_context::<DonationsClient>();
    let navigator = use_context::<AppNavigator>();

    let mut filters = use_signal(ActiveFilters::default);
    let mut show_filters = use_signal(|| true);
    let mut selected = use_signal(|| None::<Donation>);
    let mut dialog_open = use_signal(|| false);

    let list_client = client.clone();
    let mut donations = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_donations().await }
    });

    rsx! {
        Card {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { "Organ Donations" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| show_filters.toggle(),
                    if show_filters() { "Hide Filters" } else { "Show Filters" }
                }
            }

            if show_filters() {
                DonationFilterPanel {
                    active_filters: filters(),
                    on_filter_change: move |(category, values): (FilterCategory, Vec<String>)| {
                        filters.write().set(category, values)
                    },
                    on_clear_filters: move |_| filters.write().clear(),
                }
            }

            match &*donations.read() {
                None => rsx! {
                    p { "Loading donations..." }
                    progress {}
                },
                Some(Err(e)) => rsx! {
                    p { "{e}" }
                    Button {
                        on_click: move |_| donations.restart(),
                        "Retry"
                    }
                },
                Some(Ok(list)) => {
                    let active = filters.read();
                    let visible = active.apply(list);
                    if visible.is_empty() {
                        rsx! {
                            p {
                                style: "text-align: center; color: var(--pico-muted-color);",
                                "No donations found. Try adjusting your filters."
                            }
                        }
                    } else {
                        rsx! {
                            div {
                                style: "overflow-y: auto;",
                                table {
                                    thead {
                                        tr {
                                            th { "Organ" }
                                            th { "Blood Type" }
                                            th { "Location" }
                                            th { "Status" }
                                            th { "Posted" }
                                            th {}
                                        }
                                    }
                                    tbody {
                                        for donation in visible {
                                            DonationRow {
                                                key: "{donation.id}",
                                                donation: donation.clone(),
                                                on_view: move |d: Donation| {
                                                    selected.set(Some(d));
                                                    dialog_open.set(true);
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(donation) = selected() {
            DonationRequestDialog {
                donation,
                show: dialog_open(),
                on_hide: move |_| dialog_open.set(false),
                client: client.clone(),
                navigator: navigator.clone(),
            }
        }
    }
}
