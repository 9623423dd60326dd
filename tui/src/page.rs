//! Line layout of the scrolling portfolio page.
//!
//! Text is wrapped here rather than by the paragraph widget so section
//! anchors and the content height are known exactly.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use folio_engine::App;
use folio_types::{Project, Section};

use crate::theme::{Glyphs, Palette, styles};

const INDENT: &str = "  ";
const CARD_INDENT: &str = "    ";

pub(crate) struct PageContent {
    pub lines: Vec<Line<'static>>,
    /// First line of each section, in `Section::ALL` order.
    pub anchors: [u16; 4],
}

impl PageContent {
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

pub(crate) fn build(app: &App, palette: &Palette, glyphs: &Glyphs, width: u16) -> PageContent {
    let width = usize::from(width).max(20);
    let mut page = PageBuilder {
        lines: Vec::new(),
        anchors: [0; 4],
        palette,
        glyphs,
        width,
    };

    for section in Section::ALL {
        page.anchor(section);
        match section {
            Section::About => page.about(app),
            Section::Skills => page.skills(app),
            Section::Projects => page.projects(app),
            Section::Contact => page.contact(app),
        }
    }

    PageContent {
        lines: page.lines,
        anchors: page.anchors,
    }
}

struct PageBuilder<'a> {
    lines: Vec<Line<'static>>,
    anchors: [u16; 4],
    palette: &'a Palette,
    glyphs: &'a Glyphs,
    width: usize,
}

impl PageBuilder<'_> {
    fn anchor(&mut self, section: Section) {
        self.anchors[section.index()] = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn paragraph(&mut self, indent: &'static str, text: &str, style: Style) {
        let available = self.width.saturating_sub(indent.width()).max(10);
        for row in wrap(text, available) {
            self.push(Line::from(vec![Span::raw(indent), Span::styled(row, style)]));
        }
    }

    fn heading(&mut self, section: Section) {
        let title = section.label().to_string();
        let rule_len = self.width.saturating_sub(title.width() + 4).min(48);
        self.blank();
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(title, styles::heading(self.palette)),
            Span::raw(" "),
            Span::styled(self.glyphs.rule.repeat(rule_len), styles::muted(self.palette)),
        ]));
        self.blank();
    }

    fn about(&mut self, app: &App) {
        let profile = &app.portfolio().profile;
        self.blank();
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("Hi, I'm", styles::muted(self.palette)),
        ]));
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                profile.name.to_uppercase(),
                Style::default()
                    .fg(self.palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                profile.title.clone(),
                Style::default().fg(self.palette.accent),
            ),
        ]));
        self.blank();
        self.paragraph(INDENT, &profile.summary, styles::body(self.palette));
        self.blank();
        for (label, value) in [("GitHub", &profile.github), ("LinkedIn", &profile.linkedin)] {
            self.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(format!("{label:<9}"), styles::muted(self.palette)),
                Span::styled(value.clone(), Style::default().fg(self.palette.blue)),
            ]));
        }
    }

    fn skills(&mut self, app: &App) {
        self.heading(Section::Skills);
        for group in &app.portfolio().skills {
            self.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(
                    group.category,
                    Style::default()
                        .fg(self.palette.text_secondary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            let items = group
                .items
                .iter()
                .map(|item| format!("{} {item}", self.glyphs.bullet))
                .collect::<Vec<_>>()
                .join("  ");
            self.paragraph(CARD_INDENT, &items, styles::body(self.palette));
            self.blank();
        }
    }

    fn projects(&mut self, app: &App) {
        self.heading(Section::Projects);
        for (index, project) in app.portfolio().projects.iter().enumerate() {
            self.project_card(project, index == app.selected_project_index());
            self.blank();
        }
    }

    fn project_card(&mut self, project: &Project, selected: bool) {
        let color = self.palette.accent_color(project.accent);
        let marker = if selected { self.glyphs.selected } else { " " };
        let mut title = vec![
            Span::raw(" "),
            Span::styled(marker, Style::default().fg(color)),
            Span::raw(" "),
        ];
        if project.pinned {
            title.push(Span::styled(
                format!("{} ", self.glyphs.pinned),
                Style::default().fg(self.palette.warning),
            ));
        }
        let mut title_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if selected {
            title_style = title_style.add_modifier(Modifier::UNDERLINED);
        }
        title.push(Span::styled(project.title, title_style));
        if project.is_external() {
            title.push(Span::styled(
                format!(" {}", self.glyphs.external),
                styles::muted(self.palette),
            ));
        }
        self.push(Line::from(title));

        self.paragraph(CARD_INDENT, project.description, styles::body(self.palette));

        let tags = project
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.paragraph(CARD_INDENT, &tags, Style::default().fg(color));

        if selected {
            let demo = if project.is_external() {
                "Open Link"
            } else {
                "Live Demo"
            };
            self.push(Line::from(vec![
                Span::raw(CARD_INDENT),
                Span::styled("[Enter]", styles::key_highlight(self.palette)),
                Span::styled(format!(" {demo}  "), styles::key_hint(self.palette)),
                Span::styled("[v]", styles::key_highlight(self.palette)),
                Span::styled(" View Code", styles::key_hint(self.palette)),
            ]));
        }
    }

    fn contact(&mut self, app: &App) {
        let profile = &app.portfolio().profile;
        self.heading(Section::Contact);
        self.paragraph(
            INDENT,
            "Open to new opportunities and collaborations. Reach out any time.",
            styles::body(self.palette),
        );
        self.blank();
        let mut email = vec![
            Span::raw(INDENT),
            Span::styled(format!("{:<9}", "Email"), styles::muted(self.palette)),
            Span::styled(
                profile.email.clone(),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        if app.copied() {
            email.push(Span::styled(
                format!("{} Copied!", self.glyphs.check),
                styles::success(self.palette),
            ));
        } else {
            email.push(Span::styled("[e]", styles::key_highlight(self.palette)));
            email.push(Span::styled(" Copy", styles::key_hint(self.palette)));
        }
        self.push(Line::from(email));
        self.blank();
        self.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("© {}", profile.name),
                styles::muted(self.palette),
            ),
        ]));
        self.blank();
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn wrap_empty_text_is_one_blank_row() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
