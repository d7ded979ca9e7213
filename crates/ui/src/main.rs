#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use eframe::egui;

    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title(folio_core::content::OWNER.name),
        ..Default::default()
    };

    eframe::run_native(
        "folio.page",
        options,
        Box::new(|cc| Ok(Box::new(folio_ui::PageApp::new(cc)))),
    )
}

// On wasm the library's `start` attaches to the canvas instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
