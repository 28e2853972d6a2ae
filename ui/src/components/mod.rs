pub mod donation_filter_panel;
pub mod donation_request_dialog;
pub mod pico;
