//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
/// Wraps its children in a `<div class="grid">`.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Danger,
}

impl Tone {
    fn color(&self) -> &'static str {
        match self {
            Tone::Info => "var(--pico-primary)",
            Tone::Success => "var(--pico-ins-color)",
            Tone::Danger => "var(--pico-del-color)",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct AlertProps {
    children: Element,
    #[props(default)]
    tone: Tone,
    /// When set, a close control is rendered that calls this handler.
    #[props(optional)]
    on_dismiss: Option<EventHandler<()>>,
}

/// An inline message banner.
pub fn Alert(props: AlertProps) -> Element {
    let color = props.tone.color();
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; padding: 0.75rem 1rem; margin-bottom: 1rem; border-left: 4px solid {color}; border-radius: var(--pico-border-radius); background: var(--pico-card-sectioning-background-color);",
            div { {props.children} }
            if let Some(handler) = props.on_dismiss {
                a {
                    href: "#",
                    "aria-label": "Dismiss",
                    style: "text-decoration: none; color: {color};",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        handler.call(());
                    },
                    "×"
                }
            }
        }
    }
}

/// A small colored label.
#[component]
pub fn Badge(tone: Tone, children: Element) -> Element {
    let color = tone.color();
    rsx! {
        mark {
            style: "margin-left: 0.5rem; padding: 0.1rem 0.5rem; border-radius: 1rem; color: white; background: {color};",
            {children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) => "outline",
        (ButtonType::Secondary, false) => "secondary",
        (ButtonType::Secondary, true) => "secondary outline",
        (ButtonType::Contrast, false) => "contrast",
        (ButtonType::Contrast, true) => "contrast outline",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
    #[props(optional)]
    footer: Option<Element>,
}

/// A titled modal that closes on the header's close link, a backdrop click,
/// or the Escape key. Visibility is controlled by the parent.
pub fn Modal(props: ModalProps) -> Element {
    let on_close = props.on_close;
    rsx! {
        if props.open {
            dialog {
                open: true,
                autofocus: true,
                onclick: move |_| on_close.call(()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                // The <article> stops clicks from reaching the backdrop.
                article {
                    style: "max-width: 60rem; width: 100%;",
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_close.call(());
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                    if let Some(actions) = props.footer {
                        footer {
                            div {
                                style: "display: flex; justify-content: flex-end; gap: 1rem;",
                                {actions}
                            }
                        }
                    }
                }
            }
        }
    }
}
