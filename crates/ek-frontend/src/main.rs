//! Enclosure Kit main entry point

use ek_frontend::{AppConfig, EnclosureKitApp};

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ek_frontend=debug,ek_core=info,ek_renderer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Enclosure Kit");

    let config = AppConfig::load_or_default();
    let [width, height] = config.window_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Enclosure Kit"),
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "ek",
        native_options,
        Box::new(|cc| Ok(Box::new(EnclosureKitApp::new(cc, config)))),
    )
}
