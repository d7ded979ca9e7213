use folio_core::content::{Block, SectionContent, FOOTER, SECTIONS};
use folio_core::reveal::{visible_fraction, RevealSet};
use folio_core::section::SectionId;
use folio_core::theme::{ThemeMode, ThemeToken};
use folio_core::viewport::ViewportQuery;

use crate::theme;

/// Distance blocks rise over while fading in.
const REVEAL_RISE: f32 = 14.0;
const REVEAL_SECONDS: f32 = 0.6;
const SECTION_GAP: f32 = 48.0;
const CONTENT_MAX_WIDTH: f32 = 820.0;

/// One-shot smooth-scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    Top,
    Section(SectionId),
}

/// Geometry captured while laying the page out: one frame's
/// [`ViewportQuery`] sample for the telemetry engine.
pub struct FrameViewport {
    pub scroll_top: f32,
    pub viewport_height: f32,
    pub content_height: f32,
    tops: Vec<(SectionId, f32)>,
}

impl ViewportQuery for FrameViewport {
    fn scroll_top(&self) -> f64 {
        f64::from(self.scroll_top)
    }

    fn viewport_height(&self) -> f64 {
        f64::from(self.viewport_height)
    }

    fn document_height(&self) -> f64 {
        f64::from(self.content_height)
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.tops
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, top)| f64::from(*top))
    }
}

/// Render the scrollable page and capture its geometry.
///
/// A `jump` request smooth-scrolls the matching section under the
/// header this frame.
pub fn show(
    ui: &mut egui::Ui,
    mode: ThemeMode,
    reveals: &mut RevealSet,
    jump: Option<JumpTarget>,
) -> FrameViewport {
    let viewport_top = ui.cursor().top();
    let viewport_height = ui.available_height();
    let mut tops = Vec::with_capacity(SECTIONS.len());

    let output = egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if jump == Some(JumpTarget::Top) {
                let origin = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(1.0, 1.0));
                ui.scroll_to_rect(origin, Some(egui::Align::Min));
            }

            // Center a fixed-width column; text stays left-aligned
            // inside it.
            let margin = ((ui.available_width() - CONTENT_MAX_WIDTH) / 2.0).max(16.0);
            ui.horizontal(|ui| {
                ui.add_space(margin);
                ui.vertical(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.add_space(12.0);
                    for (i, section) in SECTIONS.iter().enumerate() {
                        let rect = show_section(
                            ui,
                            section,
                            i == 0,
                            mode,
                            reveals,
                            viewport_top,
                            viewport_height,
                            jump,
                        );
                        tops.push((section.descriptor.id, rect.top() - viewport_top));
                        ui.add_space(SECTION_GAP);
                    }

                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(FOOTER)
                            .size(theme::FONT_CAPTION)
                            .color(theme::resolve(ThemeToken::TextMuted, mode)),
                    );
                    ui.add_space(16.0);
                });
            });
        });

    FrameViewport {
        scroll_top: output.state.offset.y,
        viewport_height,
        content_height: output.content_size.y,
        tops,
    }
}

#[allow(clippy::too_many_arguments)]
fn show_section(
    ui: &mut egui::Ui,
    section: &SectionContent,
    is_cover: bool,
    mode: ThemeMode,
    reveals: &mut RevealSet,
    viewport_top: f32,
    viewport_height: f32,
    jump: Option<JumpTarget>,
) -> egui::Rect {
    let id = section.descriptor.id;

    // The latch flips in a past frame's observation; the fade animates
    // toward it.
    let revealed = reveals.is_revealed(id);
    let t = ui.ctx().animate_bool_with_time(
        egui::Id::new(("reveal", id.as_str())),
        revealed,
        REVEAL_SECONDS,
    );
    ui.add_space((1.0 - t) * REVEAL_RISE);

    let inner = ui.scope(|ui| {
        ui.set_opacity(t);

        // Kickers sit above the heading.
        for block in section.blocks {
            if let Block::Kicker(text) = block {
                ui.label(
                    egui::RichText::new(text.to_uppercase())
                        .size(theme::FONT_CAPTION)
                        .color(theme::resolve(ThemeToken::TextMuted, mode)),
                );
            }
        }

        let heading_size = if is_cover {
            theme::FONT_DISPLAY
        } else {
            theme::FONT_TITLE
        };
        ui.label(
            egui::RichText::new(section.heading)
                .strong()
                .size(heading_size)
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
        ui.add_space(6.0);

        for block in section.blocks {
            if !matches!(block, Block::Kicker(_)) {
                show_block(ui, block, mode);
            }
        }
    });
    let rect = inner.response.rect;

    if jump == Some(JumpTarget::Section(id)) {
        ui.scroll_to_rect(rect, Some(egui::Align::Min));
    }

    // Feed the latch; takes effect from the next frame on.
    let fraction = visible_fraction(
        f64::from(rect.top() - viewport_top),
        f64::from(rect.height()),
        f64::from(viewport_height),
    );
    reveals.observe(id, fraction);

    rect
}

fn show_block(ui: &mut egui::Ui, block: &Block, mode: ThemeMode) {
    match block {
        // Rendered with the heading in `show_section`.
        Block::Kicker(_) => {}

        Block::Lead(text) => {
            ui.label(
                egui::RichText::new(*text)
                    .strong()
                    .size(theme::FONT_EMPHASIS)
                    .color(theme::resolve(ThemeToken::TextSecondary, mode)),
            );
        }

        Block::Paragraph(text) => {
            ui.label(
                egui::RichText::new(*text)
                    .size(theme::FONT_BODY)
                    .color(theme::resolve(ThemeToken::TextSecondary, mode)),
            );
            ui.add_space(4.0);
        }

        Block::Bullets(items) => {
            for item in *items {
                bullet(ui, item, mode);
            }
            ui.add_space(4.0);
        }

        Block::Card { title, items } => {
            card_frame(mode).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(*title)
                        .strong()
                        .size(theme::FONT_EMPHASIS)
                        .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
                ui.add_space(4.0);
                for item in *items {
                    bullet(ui, item, mode);
                }
            });
            ui.add_space(8.0);
        }

        Block::Chips { title, items } => {
            ui.label(
                egui::RichText::new(*title)
                    .strong()
                    .size(theme::FONT_EMPHASIS)
                    .color(theme::resolve(ThemeToken::TextPrimary, mode)),
            );
            ui.add_space(2.0);
            ui.horizontal_wrapped(|ui| {
                for item in *items {
                    egui::Frame::new()
                        .stroke(egui::Stroke::new(
                            1.0,
                            theme::resolve(ThemeToken::ChipBorder, mode),
                        ))
                        .corner_radius(egui::CornerRadius::same(10))
                        .inner_margin(egui::Margin::symmetric(8, 3))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(*item)
                                    .size(theme::FONT_CAPTION)
                                    .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                            );
                        });
                }
            });
            ui.add_space(8.0);
        }

        Block::Facts(rows) => {
            card_frame(mode).show(ui, |ui| {
                for (label, value) in *rows {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{label}:"))
                                .strong()
                                .size(theme::FONT_BODY)
                                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                        );
                        if value.contains('@') {
                            ui.hyperlink_to(*value, format!("mailto:{value}"));
                        } else {
                            ui.label(
                                egui::RichText::new(*value)
                                    .size(theme::FONT_BODY)
                                    .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                            );
                        }
                    });
                }
            });
        }
    }
}

fn bullet(ui: &mut egui::Ui, text: &str, mode: ThemeMode) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            egui::RichText::new("•")
                .size(theme::FONT_BODY)
                .color(theme::resolve(ThemeToken::TextMuted, mode)),
        );
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .color(theme::resolve(ThemeToken::TextSecondary, mode)),
        );
    });
}

fn card_frame(mode: ThemeMode) -> egui::Frame {
    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::Card, mode))
        .stroke(egui::Stroke::new(
            1.0,
            theme::resolve(ThemeToken::Border, mode),
        ))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}
