use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::content::{self, Block as ContentBlock, FOOTER, SECTIONS};
use folio_core::reveal::{RevealSet, visible_fraction};
use folio_core::section::SectionId;
use folio_core::telemetry::{ScrollTelemetry, show_scroll_to_top};
use folio_core::theme::{PreferenceStore, ThemeMode, ThemeToken};
use folio_core::viewport::ViewportQuery;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Viewport units per terminal row, the scale the engine's pixel-tuned
/// thresholds are read against.
const ROW_UNITS: f64 = 20.0;

/// Header line plus progress line.
const HEADER_ROWS: u16 = 2;

/// Width below which the tab row collapses behind the menu.
const NARROW_COLS: u16 = 60;

fn theme_to_color(token: ThemeToken, mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Dark => match token {
            ThemeToken::Background => Color::Black,
            ThemeToken::Surface => Color::Rgb(24, 24, 37),
            ThemeToken::Card => Color::Rgb(30, 30, 46),
            ThemeToken::Border => Color::DarkGray,
            ThemeToken::TextPrimary => Color::White,
            ThemeToken::TextSecondary => Color::Gray,
            ThemeToken::TextMuted => Color::DarkGray,
            ThemeToken::Accent => Color::LightBlue,
            ThemeToken::NavBackground => Color::Rgb(24, 24, 37),
            ThemeToken::NavText => Color::Gray,
            ThemeToken::NavTextActive => Color::White,
            ThemeToken::NavUnderline => Color::LightBlue,
            ThemeToken::ProgressTrack => Color::DarkGray,
            ThemeToken::ProgressFill => Color::LightBlue,
            ThemeToken::ChipBorder => Color::Gray,
        },
        ThemeMode::Light => match token {
            ThemeToken::Background => Color::White,
            ThemeToken::Surface => Color::Rgb(245, 245, 248),
            ThemeToken::Card => Color::Rgb(250, 250, 252),
            ThemeToken::Border => Color::Gray,
            ThemeToken::TextPrimary => Color::Black,
            ThemeToken::TextSecondary => Color::DarkGray,
            ThemeToken::TextMuted => Color::Gray,
            ThemeToken::Accent => Color::Blue,
            ThemeToken::NavBackground => Color::Rgb(235, 235, 240),
            ThemeToken::NavText => Color::DarkGray,
            ThemeToken::NavTextActive => Color::Black,
            ThemeToken::NavUnderline => Color::Blue,
            ThemeToken::ProgressTrack => Color::Gray,
            ThemeToken::ProgressFill => Color::Blue,
            ThemeToken::ChipBorder => Color::DarkGray,
        },
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Kicker,
    Heading,
    SubHeading,
    Body,
    Muted,
    Blank,
}

/// One pre-wrapped content row, tagged with the section it belongs to
/// so reveal latching can dim or brighten it.
struct PageLine {
    section: Option<usize>,
    kind: LineKind,
    text: String,
}

impl PageLine {
    fn blank(section: Option<usize>) -> Self {
        Self {
            section,
            kind: LineKind::Blank,
            text: String::new(),
        }
    }
}

/// Terminal geometry reported to the engine in viewport units.
struct RowViewport {
    scroll_rows: f64,
    content_rows: usize,
    view_rows: u16,
    section_rows: Vec<(SectionId, usize)>,
}

impl ViewportQuery for RowViewport {
    fn scroll_top(&self) -> f64 {
        self.scroll_rows * ROW_UNITS
    }

    fn viewport_height(&self) -> f64 {
        f64::from(self.view_rows) * ROW_UNITS
    }

    fn document_height(&self) -> f64 {
        self.content_rows as f64 * ROW_UNITS
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.section_rows
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, row)| (*row as f64 - self.scroll_rows) * ROW_UNITS)
    }
}

/// Greedy word wrap; keeps words intact.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(16);
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn push_wrapped(lines: &mut Vec<PageLine>, section: usize, kind: LineKind, text: &str, width: usize) {
    for piece in wrap_words(text, width) {
        lines.push(PageLine {
            section: Some(section),
            kind,
            text: piece,
        });
    }
}

fn push_bullets(lines: &mut Vec<PageLine>, section: usize, items: &[&str], width: usize) {
    for item in items {
        for (j, piece) in wrap_words(item, width.saturating_sub(2)).into_iter().enumerate() {
            let prefix = if j == 0 { "• " } else { "  " };
            lines.push(PageLine {
                section: Some(section),
                kind: LineKind::Body,
                text: format!("{prefix}{piece}"),
            });
        }
    }
}

fn push_block(lines: &mut Vec<PageLine>, section: usize, block: &ContentBlock, width: usize) {
    match block {
        // Kickers render above the heading in `build_page`.
        ContentBlock::Kicker(_) => {}
        ContentBlock::Lead(text) => {
            push_wrapped(lines, section, LineKind::SubHeading, text, width);
        }
        ContentBlock::Paragraph(text) => {
            push_wrapped(lines, section, LineKind::Body, text, width);
            lines.push(PageLine::blank(Some(section)));
        }
        ContentBlock::Bullets(items) => {
            push_bullets(lines, section, items, width);
            lines.push(PageLine::blank(Some(section)));
        }
        ContentBlock::Card { title, items } => {
            lines.push(PageLine {
                section: Some(section),
                kind: LineKind::SubHeading,
                text: (*title).to_owned(),
            });
            push_bullets(lines, section, items, width);
            lines.push(PageLine::blank(Some(section)));
        }
        ContentBlock::Chips { title, items } => {
            lines.push(PageLine {
                section: Some(section),
                kind: LineKind::SubHeading,
                text: (*title).to_owned(),
            });
            push_wrapped(lines, section, LineKind::Muted, &items.join(" · "), width);
            lines.push(PageLine::blank(Some(section)));
        }
        ContentBlock::Facts(rows) => {
            for (label, value) in *rows {
                lines.push(PageLine {
                    section: Some(section),
                    kind: LineKind::Body,
                    text: format!("{label}: {value}"),
                });
            }
            lines.push(PageLine::blank(Some(section)));
        }
    }
}

/// Lay the whole page out as rows for the current width. Returns the
/// rows plus each section's starting row.
fn build_page(text_width: usize) -> (Vec<PageLine>, Vec<(SectionId, usize)>) {
    let mut lines = Vec::new();
    let mut starts = Vec::with_capacity(SECTIONS.len());

    lines.push(PageLine::blank(None));
    for (i, section) in SECTIONS.iter().enumerate() {
        starts.push((section.descriptor.id, lines.len()));
        for block in section.blocks {
            if let ContentBlock::Kicker(text) = block {
                lines.push(PageLine {
                    section: Some(i),
                    kind: LineKind::Kicker,
                    text: text.to_uppercase(),
                });
            }
        }
        lines.push(PageLine {
            section: Some(i),
            kind: LineKind::Heading,
            text: section.heading.to_owned(),
        });
        lines.push(PageLine::blank(Some(i)));
        for block in section.blocks {
            push_block(&mut lines, i, block, text_width);
        }
        lines.push(PageLine::blank(None));
    }

    lines.push(PageLine {
        section: None,
        kind: LineKind::Muted,
        text: FOOTER.to_owned(),
    });
    lines.push(PageLine::blank(None));

    (lines, starts)
}

fn line_style(kind: LineKind, revealed: bool, mode: ThemeMode) -> Style {
    if !revealed {
        // Not yet revealed: held in the dimmed initial state until the
        // latch flips.
        return Style::default()
            .fg(theme_to_color(ThemeToken::TextMuted, mode))
            .add_modifier(Modifier::DIM);
    }
    match kind {
        LineKind::Heading => Style::default()
            .fg(theme_to_color(ThemeToken::TextPrimary, mode))
            .add_modifier(Modifier::BOLD),
        LineKind::SubHeading => Style::default()
            .fg(theme_to_color(ThemeToken::TextPrimary, mode))
            .add_modifier(Modifier::BOLD),
        LineKind::Body => Style::default().fg(theme_to_color(ThemeToken::TextSecondary, mode)),
        LineKind::Kicker | LineKind::Muted | LineKind::Blank => {
            Style::default().fg(theme_to_color(ThemeToken::TextMuted, mode))
        }
    }
}

pub fn run(initial: ThemeMode, store: &mut dyn PreferenceStore) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, initial, store);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    initial: ThemeMode,
    store: &mut dyn PreferenceStore,
) -> Result<()> {
    let telemetry = ScrollTelemetry::new(content::descriptors());
    let mut reveals = RevealSet::new();
    let mut mode = initial;
    let mut scroll: f64 = 0.0;
    let mut menu_open = false;
    let mut page: Vec<PageLine> = Vec::new();
    let mut starts: Vec<(SectionId, usize)> = Vec::new();
    let mut last_width: u16 = 0;

    loop {
        let size = terminal.size()?;
        if size.width != last_width {
            let text_width = usize::from(size.width.saturating_sub(4)).min(100);
            (page, starts) = build_page(text_width);
            last_width = size.width;
        }
        let view_rows = size.height.saturating_sub(HEADER_ROWS);
        let max_scroll = (page.len() as f64 - f64::from(view_rows)).max(0.0);
        scroll = scroll.clamp(0.0, max_scroll);

        let viewport = RowViewport {
            scroll_rows: scroll,
            content_rows: page.len(),
            view_rows,
            section_rows: starts.clone(),
        };
        let state = telemetry.sample(&viewport);

        // Latch reveals from this frame's geometry.
        for (i, (id, start)) in starts.iter().enumerate() {
            let end = starts.get(i + 1).map_or(page.len(), |(_, next)| *next);
            let top = (*start as f64 - scroll) * ROW_UNITS;
            let height = (end - start) as f64 * ROW_UNITS;
            reveals.observe(*id, visible_fraction(top, height, viewport.viewport_height()));
        }

        terminal.draw(|frame| {
            draw(frame, &page, &starts, scroll, mode, &reveals, &state, menu_open);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up | KeyCode::Char('k') => scroll -= 1.0,
                    KeyCode::Down | KeyCode::Char('j') => scroll += 1.0,
                    KeyCode::PageUp => scroll -= f64::from(view_rows),
                    KeyCode::PageDown => scroll += f64::from(view_rows),
                    KeyCode::Char('g') | KeyCode::Home => scroll = 0.0,
                    KeyCode::Char('G') | KeyCode::End => scroll = max_scroll,
                    KeyCode::Char('t') => {
                        mode = mode.toggled();
                        // A failed write leaves the choice in-memory only.
                        let _ = store.save(mode.as_str());
                    }
                    KeyCode::Char('m') => menu_open = !menu_open,
                    KeyCode::Tab => {
                        let current = state
                            .active
                            .and_then(|id| starts.iter().position(|(s, _)| *s == id))
                            .unwrap_or(0);
                        let next = (current + 1) % starts.len().max(1);
                        if let Some((_, row)) = starts.get(next) {
                            scroll = (*row as f64 - 1.0).max(0.0);
                        }
                        menu_open = false;
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c as usize - '1' as usize;
                        if let Some((_, row)) = starts.get(index) {
                            scroll = (*row as f64 - 1.0).max(0.0);
                            menu_open = false;
                        }
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => scroll += 3.0,
                    MouseEventKind::ScrollUp => scroll -= 3.0,
                    _ => {}
                },
                _ => {}
            }
            scroll = scroll.clamp(0.0, max_scroll);
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw(
    frame: &mut Frame<'_>,
    page: &[PageLine],
    starts: &[(SectionId, usize)],
    scroll: f64,
    mode: ThemeMode,
    reveals: &RevealSet,
    state: &folio_core::telemetry::ScrollState,
    menu_open: bool,
) {
    let area = frame.area();
    let narrow = area.width < NARROW_COLS;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme_to_color(ThemeToken::Background, mode))),
        area,
    );

    // Header: brand plus section tabs (or the collapsed-menu hint).
    let mut spans = vec![
        Span::styled(
            format!(" {} ", content::OWNER.name),
            Style::default()
                .fg(theme_to_color(ThemeToken::NavTextActive, mode))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    if narrow {
        spans.push(Span::styled(
            "☰ m:menu",
            Style::default().fg(theme_to_color(ThemeToken::NavText, mode)),
        ));
    } else {
        for (i, section) in SECTIONS.iter().enumerate() {
            let is_active = state.active == Some(section.descriptor.id);
            let style = if is_active {
                Style::default()
                    .fg(theme_to_color(ThemeToken::NavUnderline, mode))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme_to_color(ThemeToken::NavText, mode))
            };
            spans.push(Span::styled(format!("{} {} ", i + 1, section.descriptor.label), style));
        }
    }
    // The toggle hint names the mode it switches to.
    spans.push(Span::styled(
        format!(" t:{} | q:quit", mode.toggled().as_str()),
        Style::default().fg(theme_to_color(ThemeToken::TextMuted, mode)),
    ));
    let header_area = Rect::new(0, 0, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme_to_color(ThemeToken::NavBackground, mode))),
        header_area,
    );

    // Progress bar: filled cells track progress through the page.
    let filled = (f64::from(area.width) * state.progress_percent / 100.0).round() as u16;
    let filled = filled.min(area.width);
    let bar = Line::from(vec![
        Span::styled(
            "━".repeat(usize::from(filled)),
            Style::default().fg(theme_to_color(ThemeToken::ProgressFill, mode)),
        ),
        Span::styled(
            "─".repeat(usize::from(area.width - filled)),
            Style::default().fg(theme_to_color(ThemeToken::ProgressTrack, mode)),
        ),
    ]);
    frame.render_widget(Paragraph::new(bar), Rect::new(0, 1, area.width, 1));

    // Visible content slice.
    let content_area = Rect::new(0, HEADER_ROWS, area.width, area.height.saturating_sub(HEADER_ROWS));
    let first = scroll as usize;
    let visible = page
        .iter()
        .skip(first)
        .take(usize::from(content_area.height))
        .map(|line| {
            let revealed = line
                .section
                .and_then(|i| starts.get(i))
                .is_none_or(|(id, _)| reveals.is_revealed(*id));
            Line::from(Span::styled(
                format!("  {}", line.text),
                line_style(line.kind, revealed, mode),
            ))
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(visible), content_area);

    // Back-to-top hint once far enough down the page.
    if show_scroll_to_top(scroll * ROW_UNITS) && area.width > 14 {
        let badge = " ↑ g: top ";
        let badge_area = Rect::new(
            area.width - badge.chars().count() as u16 - 1,
            area.height.saturating_sub(1),
            badge.chars().count() as u16,
            1,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                badge,
                Style::default()
                    .fg(theme_to_color(ThemeToken::Accent, mode))
                    .bg(theme_to_color(ThemeToken::Surface, mode)),
            )),
            badge_area,
        );
    }

    // Collapsible menu for narrow terminals.
    if narrow && menu_open {
        let height = (starts.len() as u16 + 2).min(area.height.saturating_sub(HEADER_ROWS));
        let width = 26.min(area.width.saturating_sub(2));
        let menu_area = Rect::new(1, HEADER_ROWS, width, height);
        frame.render_widget(Clear, menu_area);
        let items = SECTIONS
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let is_active = state.active == Some(section.descriptor.id);
                let style = if is_active {
                    Style::default()
                        .fg(theme_to_color(ThemeToken::NavTextActive, mode))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme_to_color(ThemeToken::NavText, mode))
                };
                Line::from(Span::styled(
                    format!("{} {}", i + 1, section.descriptor.label),
                    style,
                ))
            })
            .collect::<Vec<_>>();
        frame.render_widget(
            Paragraph::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme_to_color(ThemeToken::Surface, mode)))
                    .border_style(Style::default().fg(theme_to_color(ThemeToken::Border, mode))),
            ),
            menu_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_words_intact() {
        let wrapped = wrap_words("helping people recover their health", 16);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(line.chars().count() <= 16);
            assert!(!line.starts_with(' '));
        }
        assert_eq!(wrapped.join(" "), "helping people recover their health");
    }

    #[test]
    fn page_rows_cover_every_section() {
        let (lines, starts) = build_page(80);
        assert_eq!(starts.len(), SECTIONS.len());
        // Starts are strictly increasing and inside the page.
        for pair in starts.windows(2) {
            assert!(pair[0].1 < pair[1].1);
        }
        assert!(starts.last().map(|(_, row)| *row < lines.len()).unwrap_or(false));
    }

    #[test]
    fn row_viewport_reports_units() {
        let starts = vec![(SectionId("cover"), 1), (SectionId("contact"), 50)];
        let vp = RowViewport {
            scroll_rows: 10.0,
            content_rows: 120,
            view_rows: 30,
            section_rows: starts,
        };
        assert_eq!(vp.scroll_top(), 200.0);
        assert_eq!(vp.viewport_height(), 600.0);
        assert_eq!(vp.document_height(), 2400.0);
        assert_eq!(vp.section_top(SectionId("cover")), Some(-180.0));
        assert_eq!(vp.section_top(SectionId("missing")), None);
    }
}
