fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting donation coordination (desktop)");
    dioxus::launch(ui::App);
}
