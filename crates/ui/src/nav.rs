use folio_core::content;
use folio_core::telemetry::{ScrollState, ScrollTelemetry};
use folio_core::theme::{ThemeMode, ThemeToken};
use folio_core::viewport::ViewportQuery;
use folio_core::{SectionDescriptor, SectionId};

use crate::theme;

/// Viewport width below which the link row collapses behind the ☰
/// button.
const NARROW_BREAKPOINT: f32 = 720.0;

/// Height of the scroll progress indicator under the header.
const PROGRESS_HEIGHT: f32 = 3.0;

/// Interactions the shell should apply after this frame.
#[derive(Default)]
pub struct NavResponse {
    /// A navigation link was activated.
    pub jump: Option<SectionId>,
    pub toggle_theme: bool,
}

/// Sticky header: brand, section links with active highlighting, a
/// theme toggle labeled by the state it switches to, a collapsible
/// narrow-viewport menu, and the thin scroll progress bar.
///
/// Owns its telemetry engine, since the header is the sole consumer of
/// the scroll state. The shell feeds it one geometry sample per frame
/// via [`Nav::observe`].
pub struct Nav {
    telemetry: ScrollTelemetry,
    state: ScrollState,
    menu_open: bool,
}

impl Nav {
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        // Before the first geometry sample: progress 0, first section
        // active, exactly what sampling at scroll offset 0 yields.
        let state = ScrollState {
            active: sections.first().map(|s| s.id),
            ..ScrollState::default()
        };
        Self {
            telemetry: ScrollTelemetry::new(sections),
            state,
            menu_open: false,
        }
    }

    /// Feed one frame's geometry; recomputes the scroll state.
    pub fn observe(&mut self, viewport: &dyn ViewportQuery) {
        self.state = self.telemetry.sample(viewport);
    }

    pub fn show(&mut self, ctx: &egui::Context, mode: ThemeMode) -> NavResponse {
        let mut response = NavResponse::default();
        let narrow = ctx.screen_rect().width() < NARROW_BREAKPOINT;
        let sections = self.telemetry.sections();
        let state = self.state;

        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::new()
                    .fill(theme::resolve(ThemeToken::NavBackground, mode))
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = ui.add(
                        egui::Label::new(
                            egui::RichText::new(content::OWNER.name)
                                .strong()
                                .size(theme::FONT_EMPHASIS)
                                .color(theme::resolve(ThemeToken::NavTextActive, mode)),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if brand
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked()
                    {
                        response.jump = sections.first().map(|s| s.id);
                    }

                    if !narrow {
                        ui.add_space(12.0);
                        for section in sections {
                            if link(ui, section, state.active, mode).clicked() {
                                response.jump = Some(section.id);
                            }
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Labeled with the mode the toggle switches to.
                        let toggle_label = match mode {
                            ThemeMode::Dark => "☀ Light",
                            ThemeMode::Light => "🌙 Dark",
                        };
                        if ui.button(toggle_label).clicked() {
                            response.toggle_theme = true;
                        }
                        if narrow && ui.button("☰").clicked() {
                            self.menu_open = !self.menu_open;
                        }
                    });
                });

                if narrow && self.menu_open {
                    ui.separator();
                    for section in sections {
                        if link(ui, section, state.active, mode).clicked() {
                            response.jump = Some(section.id);
                        }
                    }
                }

                ui.add_space(6.0);
                progress_bar(ui, mode, state.progress_percent);
            });

        // Any link activation closes the collapsible menu.
        if response.jump.is_some() {
            self.menu_open = false;
        }
        response
    }
}

fn link(
    ui: &mut egui::Ui,
    section: &SectionDescriptor,
    active: Option<SectionId>,
    mode: ThemeMode,
) -> egui::Response {
    let is_active = active == Some(section.id);
    let color = if is_active {
        theme::resolve(ThemeToken::NavTextActive, mode)
    } else {
        theme::resolve(ThemeToken::NavText, mode)
    };
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new(section.label)
                .size(theme::FONT_BODY)
                .color(color),
        )
        .sense(egui::Sense::click()),
    );
    if is_active {
        let rect = response.rect;
        ui.painter().hline(
            rect.x_range(),
            rect.bottom() + 3.0,
            egui::Stroke::new(2.0, theme::resolve(ThemeToken::NavUnderline, mode)),
        );
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Thin bar whose filled width tracks scroll progress.
fn progress_bar(ui: &mut egui::Ui, mode: ThemeMode, percent: f64) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), PROGRESS_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        egui::CornerRadius::ZERO,
        theme::resolve(ThemeToken::ProgressTrack, mode),
    );
    let filled = rect.width() * (percent as f32 / 100.0);
    if filled > 0.0 {
        painter.rect_filled(
            egui::Rect::from_min_size(rect.min, egui::vec2(filled, rect.height())),
            egui::CornerRadius::ZERO,
            theme::resolve(ThemeToken::ProgressFill, mode),
        );
    }
}
