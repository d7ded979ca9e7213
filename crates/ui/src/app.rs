use eframe::egui;
use folio_core::content;
use folio_core::reveal::RevealSet;
use folio_core::telemetry;
use folio_core::theme::{ThemeMode, ThemeToken, THEME_KEY};

use crate::nav::Nav;
use crate::page::{self, JumpTarget};
use crate::{store, theme};

/// Main application state.
///
/// Owns the session-lifetime state (theme, section registry) and
/// composes the presenter and revealer. Data flows one way: the
/// content pass measures geometry, the presenter's telemetry turns it
/// into a scroll state, and the header renders that snapshot.
pub struct PageApp {
    /// Display mode, the only durable piece of state.
    mode: ThemeMode,
    nav: Nav,
    reveals: RevealSet,
    /// Raw scroll offset, tracked separately for the back-to-top
    /// affordance.
    scroll_top: f32,
    /// One-shot smooth-scroll request applied during the next content
    /// pass.
    pending_jump: Option<JumpTarget>,
}

impl PageApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let stored = store::load_raw(cc.storage);
        let mode = ThemeMode::from_raw(
            stored.as_deref(),
            store::ambient_prefers_dark(&cc.egui_ctx),
        );
        log::info!("starting with {} theme", mode.as_str());

        theme::apply_typography(&cc.egui_ctx);
        cc.egui_ctx.set_visuals(theme::visuals(mode));

        Self {
            mode,
            nav: Nav::new(content::descriptors()),
            reveals: RevealSet::new(),
            scroll_top: 0.0,
            pending_jump: None,
        }
    }

    fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        store::persist_now(mode);
    }
}

impl eframe::App for PageApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.mode.as_str().to_owned());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(theme::visuals(self.mode));

        let nav_response = self.nav.show(ctx, self.mode);
        if nav_response.toggle_theme {
            self.set_mode(self.mode.toggled());
        }
        if let Some(id) = nav_response.jump {
            self.pending_jump = Some(JumpTarget::Section(id));
        }

        let jump = self.pending_jump.take();
        let mut sample = None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new().fill(theme::resolve(ThemeToken::Background, self.mode)),
            )
            .show(ctx, |ui| {
                sample = Some(page::show(ui, self.mode, &mut self.reveals, jump));
            });

        if let Some(viewport) = sample {
            self.nav.observe(&viewport);
            self.scroll_top = viewport.scroll_top;
        }

        // Floating back-to-top button past the scroll threshold.
        if telemetry::show_scroll_to_top(f64::from(self.scroll_top)) {
            egui::Area::new(egui::Id::new("back_to_top"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
                .show(ctx, |ui| {
                    let button = egui::Button::new(
                        egui::RichText::new("⬆").size(theme::FONT_EMPHASIS),
                    )
                    .fill(theme::resolve(ThemeToken::Surface, self.mode))
                    .stroke(egui::Stroke::new(
                        1.0,
                        theme::resolve(ThemeToken::Border, self.mode),
                    ))
                    .corner_radius(egui::CornerRadius::same(14));
                    if ui.add(button).clicked() {
                        self.pending_jump = Some(JumpTarget::Top);
                    }
                });
        }
    }
}
