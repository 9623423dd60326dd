//! Full-screen rendering of the embedded mini-apps.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

use folio_core::{
    Calculator, CalculatorKey, Dashboard, DelayTimer, Likert, MiniApp, PatientStatus, Quiz,
    QuizPhase, Store, StoreView,
    calculator::{ERROR_DISPLAY, KEYPAD},
};
use folio_types::ui::UiOptions;

use crate::{
    centered_rect, draw_key_hints,
    theme::{Glyphs, Palette, palette as theme_palette, spinner_frame, styles},
};

pub(crate) fn draw_mini_app(
    frame: &mut Frame,
    app: &MiniApp,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Exit bar
            Constraint::Min(1),    // Demo
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_exit_bar(frame, app, chunks[0], palette, glyphs);

    let hints = match app {
        MiniApp::Calculator(calc) => {
            draw_calculator(frame, calc, chunks[1], options, glyphs);
            CALCULATOR_HINTS
        }
        MiniApp::Quiz(quiz) => {
            draw_quiz(frame, quiz, chunks[1], options, palette);
            quiz_hints(quiz.phase())
        }
        MiniApp::Dashboard(dashboard) => {
            draw_dashboard(frame, dashboard, chunks[1], palette, glyphs);
            DASHBOARD_HINTS
        }
        MiniApp::Store(store) => {
            draw_store(frame, store, chunks[1], options, palette, glyphs);
            store_hints(store.view())
        }
    };
    draw_key_hints(frame, chunks[2], palette, hints);
}

fn draw_exit_bar(frame: &mut Frame, app: &MiniApp, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{} Exit Demo", glyphs.back),
            styles::key_highlight(palette),
        ),
        Span::styled(" (Esc)", styles::key_hint(palette)),
        Span::styled(format!("  {}  ", glyphs.separator), styles::muted(palette)),
        Span::styled(app.kind().title(), styles::heading(palette)),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn panel(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(Line::from(format!(" {title} ")).style(styles::heading(palette)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg))
}

/// Milliseconds a delay timer has been running, for spinner animation.
fn timer_elapsed_ms(timer: &DelayTimer) -> u128 {
    timer
        .duration()
        .saturating_sub(timer.remaining())
        .as_millis()
}

/// A `width` x `height` box centered in `area`, shrunk to fit.
fn fixed_center(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// Calculator
// ============================================================================

const CALCULATOR_HINTS: &[(&str, &str)] = &[
    ("0-9 . + - * / ( )", "input"),
    ("Enter/=", "evaluate"),
    ("Bksp", "delete"),
    ("c", "clear"),
    ("Esc", "exit"),
];

fn draw_calculator(
    frame: &mut Frame,
    calc: &Calculator,
    area: Rect,
    options: UiOptions,
    glyphs: &Glyphs,
) {
    // The calculator follows the theme it was opened with.
    let palette = theme_palette(calc.theme(), options);
    let outer = fixed_center(34, 22, area);
    let block = panel("AI Calc", &palette).style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Display
            Constraint::Length(10), // Keypad
            Constraint::Min(1),     // History
        ])
        .split(inner);

    let display_style = if calc.display() == ERROR_DISPLAY {
        styles::error(&palette)
    } else {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    };
    let display = Paragraph::new(calc.display().to_string())
        .style(display_style)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .style(Style::default().bg(palette.bg)),
        );
    frame.render_widget(display, rows[0]);

    let keypad: Vec<Line> = KEYPAD
        .chunks(4)
        .flat_map(|row| {
            let keys = row
                .iter()
                .flat_map(|key| {
                    [
                        Span::styled(format!("[{:^4}]", key.label()), key_style(*key, &palette)),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>();
            [Line::from(keys), Line::default()]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(keypad).alignment(Alignment::Center),
        rows[1],
    );

    let mut history = vec![Line::from(Span::styled("History", styles::muted(&palette)))];
    if calc.history().next().is_none() {
        history.push(Line::from(Span::styled(
            "No calculations yet",
            styles::muted(&palette),
        )));
    }
    for entry in calc.history() {
        history.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), styles::muted(&palette)),
            Span::styled(entry.to_string(), styles::body(&palette)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(history).block(Block::default().borders(Borders::TOP).border_style(
            Style::default().fg(palette.border),
        )),
        rows[2],
    );
}

fn key_style(key: CalculatorKey, palette: &Palette) -> Style {
    match key {
        CalculatorKey::Evaluate => Style::default()
            .fg(palette.bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD),
        CalculatorKey::Clear | CalculatorKey::Backspace | CalculatorKey::Close => {
            Style::default().fg(palette.error)
        }
        CalculatorKey::Symbol(c) if c.is_ascii_digit() || c == '.' => {
            Style::default().fg(palette.text_primary)
        }
        CalculatorKey::Symbol(_) => Style::default().fg(palette.warning),
    }
}

// ============================================================================
// Quiz
// ============================================================================

fn quiz_hints(phase: &QuizPhase) -> &'static [(&'static str, &'static str)] {
    match phase {
        QuizPhase::Intro => &[("Enter", "start"), ("Esc", "exit")],
        QuizPhase::Answering => &[("1-5", "answer"), ("Esc", "exit")],
        QuizPhase::Analyzing(_) => &[("Esc", "exit")],
        QuizPhase::Result => &[("r", "retake"), ("s/Enter", "save & exit"), ("Esc", "exit")],
    }
}

fn draw_quiz(frame: &mut Frame, quiz: &Quiz, area: Rect, options: UiOptions, palette: &Palette) {
    let outer = centered_rect(70, 80, area);
    let block = panel("Psymetrics Personality Test", palette);
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let body = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let lines = match quiz.phase() {
        QuizPhase::Intro => vec![
            Line::default(),
            Line::from(Span::styled(
                "Discover your working style.",
                styles::heading(palette),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!(
                    "Answer {} short statements on a five-point scale.",
                    quiz.question_count()
                ),
                styles::body(palette),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Press ", styles::key_hint(palette)),
                Span::styled("Enter", styles::key_highlight(palette)),
                Span::styled(" to start", styles::key_hint(palette)),
            ]),
        ],
        QuizPhase::Answering => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(1)])
                .split(body);
            let ratio = quiz.index() as f64 / quiz.question_count().max(1) as f64;
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(palette.accent).bg(palette.bg_highlight))
                .label(format!(
                    "Question {} of {}",
                    quiz.index() + 1,
                    quiz.question_count()
                ))
                .ratio(ratio.clamp(0.0, 1.0));
            frame.render_widget(gauge, Rect { height: 1, ..chunks[0] });

            let mut lines = vec![
                Line::from(Span::styled(
                    quiz.current_question().unwrap_or_default(),
                    styles::heading(palette),
                )),
                Line::default(),
            ];
            for answer in Likert::ALL {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  [{}] ", answer.weight()),
                        styles::key_highlight(palette),
                    ),
                    Span::styled(answer.label(), styles::body(palette)),
                ]));
            }
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }),
                chunks[1],
            );
            return;
        }
        QuizPhase::Analyzing(timer) => vec![
            Line::default(),
            Line::from(vec![
                Span::styled(
                    spinner_frame(timer_elapsed_ms(timer), options),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(" Analyzing your responses...", styles::body(palette)),
            ]),
        ],
        QuizPhase::Result => {
            let outcome = quiz.outcome();
            let mut lines = vec![
                Line::default(),
                Line::from(Span::styled("Your result", styles::muted(palette))),
            ];
            if let Some(personality) = outcome {
                lines.push(Line::from(Span::styled(
                    personality.label(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    personality.blurb(),
                    styles::body(palette),
                )));
            }
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!(
                    "Score: {} / {}",
                    quiz.score(),
                    quiz.question_count() * usize::from(Likert::StronglyAgree.weight())
                ),
                styles::muted(palette),
            )));
            lines
        }
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

// ============================================================================
// Dashboard
// ============================================================================

const DASHBOARD_HINTS: &[(&str, &str)] = &[("j/k", "select"), ("l/Esc", "logout")];

fn draw_dashboard(
    frame: &mut Frame,
    dashboard: &Dashboard,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let outer = centered_rect(70, 80, area);
    let block = panel("Apicella Health: Patient Records", palette);
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} patients", dashboard.records().len()),
                styles::body(palette),
            ),
            Span::styled(format!("  {}  ", glyphs.separator), styles::muted(palette)),
            Span::styled(
                format!("{} critical", dashboard.critical_count()),
                styles::error(palette),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!("   {:<5} {:<24} {}", "ID", "NAME", "STATUS"),
            styles::muted(palette),
        )),
    ];

    if dashboard.records().is_empty() {
        lines.push(Line::from(Span::styled(
            "   No records",
            styles::muted(palette),
        )));
    }

    for (index, patient) in dashboard.records().iter().enumerate() {
        let selected = dashboard.selected() == Some(index);
        let (status_glyph, status_color) = match patient.status {
            PatientStatus::Stable => (glyphs.status_stable, palette.success),
            PatientStatus::Critical => (glyphs.status_critical, palette.error),
        };
        let row_style = if selected {
            styles::selected_row(palette)
        } else {
            Style::default()
        };
        let marker = if selected { glyphs.selected } else { " " };
        lines.push(
            Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(palette.accent)),
                Span::styled(
                    format!("{:<5} {:<24} ", patient.id, patient.name),
                    styles::body(palette),
                ),
                Span::styled(
                    format!("{status_glyph} {}", patient.status.label()),
                    Style::default().fg(status_color),
                ),
            ])
            .style(row_style),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Store
// ============================================================================

fn store_hints(view: &StoreView) -> &'static [(&'static str, &'static str)] {
    match view {
        StoreView::Browsing => &[
            ("j/k", "select"),
            ("Enter/a", "add"),
            ("f", "filter"),
            ("c", "cart"),
            ("Esc/x", "exit"),
        ],
        StoreView::Cart => &[
            ("j/k", "select"),
            ("d", "remove"),
            ("Enter", "checkout"),
            ("b/Esc", "back"),
            ("x", "exit"),
        ],
        StoreView::Checkout(_) => &[("Esc", "cancel"), ("x", "exit")],
        StoreView::Confirmed => &[("Enter", "continue shopping"), ("Esc/x", "exit")],
    }
}

fn draw_store(
    frame: &mut Frame,
    store: &Store,
    area: Rect,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let outer = centered_rect(70, 80, area);
    let cart_label = format!(" {} ({}) ", glyphs.cart, store.cart_len());
    let block = panel("DevStore", palette).title(
        Line::from(Span::styled(cart_label, styles::key_highlight(palette)))
            .alignment(Alignment::Right),
    );
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let lines = match store.view() {
        StoreView::Browsing => store_catalog_lines(store, palette, glyphs),
        StoreView::Cart => store_cart_lines(store, palette, glyphs),
        StoreView::Checkout(timer) => vec![
            Line::default(),
            Line::from(vec![
                Span::styled(
                    spinner_frame(timer_elapsed_ms(timer), options),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    format!(" Processing payment of {}...", store.total()),
                    styles::body(palette),
                ),
            ]),
        ],
        StoreView::Confirmed => vec![
            Line::default(),
            Line::from(Span::styled(
                format!("{} Order confirmed!", glyphs.check),
                styles::success(palette),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("{} item(s), {} total.", store.cart_len(), store.total()),
                styles::body(palette),
            )),
        ],
    };
    let body = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), body);
}

fn store_catalog_lines(store: &Store, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Category: ", styles::muted(palette)),
            Span::styled(store.filter().label(), styles::key_highlight(palette)),
        ]),
        Line::default(),
    ];
    let mut any = false;
    for (index, product) in store.visible_products().enumerate() {
        any = true;
        let selected = index == store.selected();
        let marker = if selected { glyphs.selected } else { " " };
        let row_style = if selected {
            styles::selected_row(palette)
        } else {
            Style::default()
        };
        lines.push(
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
                Span::styled(format!("{:<20}", product.name), styles::body(palette)),
                Span::styled(format!("{:>8}  ", product.price.to_string()), styles::heading(palette)),
                Span::styled(product.category, styles::muted(palette)),
            ])
            .style(row_style),
        );
    }
    if !any {
        lines.push(Line::from(Span::styled(
            "No products in this category",
            styles::muted(palette),
        )));
    }
    lines
}

fn store_cart_lines(store: &Store, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("Your cart", styles::heading(palette))),
        Line::default(),
    ];
    if store.cart_len() == 0 {
        lines.push(Line::from(Span::styled(
            "Your cart is empty",
            styles::muted(palette),
        )));
    }
    for (index, product) in store.cart().enumerate() {
        let selected = index == store.selected();
        let marker = if selected { glyphs.selected } else { " " };
        let row_style = if selected {
            styles::selected_row(palette)
        } else {
            Style::default()
        };
        lines.push(
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
                Span::styled(format!("{:<20}", product.name), styles::body(palette)),
                Span::styled(format!("{:>8}", product.price.to_string()), styles::body(palette)),
            ])
            .style(row_style),
        );
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<20}", "Total"), styles::muted(palette)),
        Span::styled(format!("{:>8}", store.total().to_string()), styles::heading(palette)),
    ]));
    lines
}
