// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod navigation;
pub mod request_dialog;
mod screens;

use api::ApiConfig;
use api::DonationsClient;
use components::pico::Container;
use navigation::AppNavigator;
use navigation::Route;
use screens::chat::ChatScreen;
use screens::donations::DonationsScreen;

pub use components::donation_filter_panel::DonationFilterPanel;
pub use components::donation_request_dialog::DonationRequestDialog;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// The top navigation bar.
#[component]
fn Tabs(mut active_route: Signal<Route>) -> Element {
    let is_active = |route: Route| {
        matches!(
            (&*active_route.read(), route),
            (Route::Donations, Route::Donations) | (Route::Chat(_), Route::Chat(_))
        )
    };
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                li {
                    a {
                        href: "#",
                        class: if is_active(Route::Donations) { "active-tab" } else { "" },
                        "aria-current": if is_active(Route::Donations) { "page" } else { "false" },
                        onclick: move |event| {
                            event.prevent_default();
                            active_route.set(Route::Donations);
                        },
                        "{Route::Donations.name()}"
                    }
                }
                if let Route::Chat(room) = active_route() {
                    li {
                        a {
                            class: "active-tab",
                            "aria-current": "page",
                            "{Route::Chat(room).name()} #{room}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        padding: 10px;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .app-main-container .content {
        flex: 1;
        display: flex;
        flex-direction: column;
        padding: 0 1rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Built once; the config comes from the environment.
    let client = use_hook(|| {
        ApiConfig::from_env()
            .map(|config| {
                dioxus_logger::tracing::info!("donations API at {}", config.base_url());
                DonationsClient::from_config(&config)
            })
            .map_err(|e| format!("{e:#}"))
    });

    match client {
        Ok(client) => rsx! {
            LoadedApp {
                client,
            }
        },
        Err(e) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
    }
}

/// This component holds the main app logic and only runs once the backend
/// client is configured.
#[component]
fn LoadedApp(client: DonationsClient) -> Element {
    use_context_provider(|| client.clone());

    let active_route = use_signal(Route::default);
    use_context_provider(|| AppNavigator::new(active_route));

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Organ Donation" }
                            }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_route,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_route() {
                        Route::Donations => rsx! {
                            DonationsScreen {}
                        },
                        Route::Chat(room) => rsx! {
                            ChatScreen {
                                key: "{room}",
                                room,
                            }
                        },
                    }
                }
            }
        }
    }
}
