//! TUI rendering for Folio using ratatui.

mod clipboard;
mod demos;
mod effects;
mod input;
mod page;
mod theme;

pub use clipboard::{Osc52Clipboard, SystemClipboard, osc52_sequence};
pub use effects::apply_overlay_effect;
pub use input::{InputPump, apply_event, apply_key, handle_events, mini_app_action};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use folio_engine::{App, Overlay, PortfolioView, ProjectId, Section, Theme};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(app.theme(), options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    if let Some(mini_app) = app.mini_app() {
        demos::draw_mini_app(frame, mini_app, options, &palette, &glyphs);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Navigation bar
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_page(frame, app, chunks[1], &palette, &glyphs);
    draw_navbar(frame, app, chunks[0], &palette, &glyphs);
    draw_key_hints(frame, chunks[2], &palette, PORTFOLIO_HINTS);

    let Some(view) = app.portfolio_view() else {
        return;
    };
    match &view.overlay {
        Overlay::None => {}
        Overlay::SectionMenu { highlighted } => {
            draw_section_menu(frame, view, *highlighted, chunks[1], &palette, &glyphs);
        }
        Overlay::CodeViewer { project, scroll } => {
            draw_code_viewer(frame, app, view, *project, *scroll, &palette);
        }
    }
}

const PORTFOLIO_HINTS: &[(&str, &str)] = &[
    ("j/k", "scroll"),
    ("1-4", "jump"),
    ("m", "menu"),
    ("Tab", "project"),
    ("Enter", "demo"),
    ("v", "code"),
    ("e", "email"),
    ("t", "theme"),
    ("q", "quit"),
];

fn draw_page(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let content = page::build(app, palette, glyphs, area.width);
    app.set_page_layout(content.anchors, content.height(), area.height);

    let offset = app.scroll_offset();
    let page = Paragraph::new(content.lines)
        .style(Style::default().bg(palette.bg))
        .scroll((offset, 0));
    frame.render_widget(page, area);
}

fn draw_navbar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let scrolled = app.is_scrolled();
    let current = app
        .portfolio_view()
        .map_or(Section::About, |view| view.scroll.current_section());

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            app.portfolio().profile.name.clone(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for section in Section::ALL {
        let style = if section == current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(
            section.hotkey().to_string(),
            styles::key_highlight(palette),
        ));
        spans.push(Span::styled(format!(" {}", section.label()), style));
        spans.push(Span::raw("  "));
    }
    let theme_glyph = match app.theme() {
        Theme::Dark => glyphs.theme_dark,
        Theme::Light => glyphs.theme_light,
    };
    spans.push(Span::styled(
        format!("{} {theme_glyph}", glyphs.separator),
        styles::muted(palette),
    ));

    let block = if scrolled {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.bg_panel))
    } else {
        Block::default().style(Style::default().bg(palette.bg))
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette, hints: &[(&str, &str)]) {
    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}  "), styles::key_hint(palette)));
    }
    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_panel));
    frame.render_widget(bar, area);
}

fn draw_section_menu(
    frame: &mut Frame,
    view: &PortfolioView,
    highlighted: Section,
    page: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let width = 24_u16.min(page.width);
    let height = (Section::ALL.len() as u16 + 2).min(page.height);
    let base = Rect {
        x: page.x + page.width.saturating_sub(width + 1),
        y: page.y,
        width,
        height,
    };
    let area = view
        .overlay_effect
        .as_ref()
        .map_or(base, |effect| apply_overlay_effect(effect, base));

    let lines: Vec<Line> = Section::ALL
        .into_iter()
        .map(|section| {
            let selected = section == highlighted;
            let marker = if selected { glyphs.selected } else { " " };
            let style = if selected {
                styles::selected_row(palette).fg(palette.accent)
            } else {
                Style::default().fg(palette.text_primary)
            };
            Line::from(vec![
                Span::styled(format!("{marker} {} ", section.hotkey()), style),
                Span::styled(section.label(), style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_popup));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_code_viewer(
    frame: &mut Frame,
    app: &App,
    view: &PortfolioView,
    project: ProjectId,
    scroll: u16,
    palette: &Palette,
) {
    let title = app
        .portfolio()
        .project(project)
        .map_or(project.as_str(), |p| p.title);
    let source = App::code_snippet(project);

    let base = centered_rect(80, 70, frame.area());
    let area = view
        .overlay_effect
        .as_ref()
        .map_or(base, |effect| apply_overlay_effect(effect, base));

    let number_width = source.lines().count().to_string().len();
    let lines: Vec<Line> = source
        .lines()
        .enumerate()
        .map(|(index, line)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>number_width$} ", index + 1),
                    styles::muted(palette),
                ),
                Span::styled(line, Style::default().fg(palette.text_primary)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" {title} : source "))
        .title_bottom(Line::from(" Esc close  j/k scroll ").alignment(Alignment::Right))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_popup));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
