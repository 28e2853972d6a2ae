use api::ChatRoomId;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::navigation::AppNavigator;
use crate::navigation::Navigator;
use crate::navigation::Route;

/// Landing screen for a chat room opened from a donation request.
#[component]
pub fn ChatScreen(room: ChatRoomId) -> Element {
    let navigator = use_context::<AppNavigator>();

    rsx! {
        Card {
            h3 { "Chat with Donor" }
            p { "Conversation room #{room}" }
            small {
                style: "color: var(--pico-muted-color);",
                "Address: {Route::Chat(room).path()}"
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| navigator.navigate(Route::Donations),
                    "Back to Donations"
                }
            }
        }
    }
}
