//! Color themes and glyphs for the Folio TUI.
//!
//! The dark theme uses the Kanagawa Wave palette, the light theme its Lotus
//! counterpart. `high_contrast` overrides either with basic ANSI colors.

use ratatui::style::{Color, Modifier, Style};

use folio_types::{
    Accent,
    ui::{Theme, UiOptions},
};

/// Kanagawa Wave (dark) color constants.
mod wave {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_POPUP: Color = Color::Rgb(54, 54, 70); // sumiInk5
    pub const BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const PINK: Color = Color::Rgb(210, 126, 153); // sakuraPink
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Kanagawa Lotus (light) color constants.
mod lotus {
    use super::Color;

    pub const BG: Color = Color::Rgb(242, 236, 188); // lotusWhite3
    pub const BG_PANEL: Color = Color::Rgb(231, 219, 160); // lotusWhite4
    pub const BG_HIGHLIGHT: Color = Color::Rgb(220, 213, 172); // lotusWhite5
    pub const BG_POPUP: Color = Color::Rgb(213, 206, 163); // lotusWhite2
    pub const BORDER: Color = Color::Rgb(138, 137, 128); // lotusGray3

    pub const TEXT_PRIMARY: Color = Color::Rgb(84, 84, 100); // lotusInk1
    pub const TEXT_SECONDARY: Color = Color::Rgb(67, 67, 108); // lotusInk2
    pub const TEXT_MUTED: Color = Color::Rgb(138, 137, 128); // lotusGray3

    pub const PRIMARY: Color = Color::Rgb(98, 76, 131); // lotusViolet4
    pub const BLUE: Color = Color::Rgb(77, 105, 155); // lotusBlue4
    pub const CYAN: Color = Color::Rgb(89, 123, 117); // lotusAqua
    pub const GREEN: Color = Color::Rgb(111, 137, 78); // lotusGreen
    pub const YELLOW: Color = Color::Rgb(119, 113, 63); // lotusYellow
    pub const PINK: Color = Color::Rgb(180, 93, 126); // lotusPink
    pub const RED: Color = Color::Rgb(200, 64, 83); // lotusRed
}

/// Resolved palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub blue: Color,
    pub teal: Color,
    pub yellow: Color,
    pub pink: Color,
}

impl Palette {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: wave::BG,
            bg_panel: wave::BG_PANEL,
            bg_highlight: wave::BG_HIGHLIGHT,
            bg_popup: wave::BG_POPUP,
            border: wave::BORDER,
            text_primary: wave::TEXT_PRIMARY,
            text_secondary: wave::TEXT_SECONDARY,
            text_muted: wave::TEXT_MUTED,
            primary: wave::PRIMARY,
            accent: wave::CYAN,
            success: wave::GREEN,
            warning: wave::YELLOW,
            error: wave::RED,
            blue: wave::BLUE,
            teal: wave::CYAN,
            yellow: wave::YELLOW,
            pink: wave::PINK,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: lotus::BG,
            bg_panel: lotus::BG_PANEL,
            bg_highlight: lotus::BG_HIGHLIGHT,
            bg_popup: lotus::BG_POPUP,
            border: lotus::BORDER,
            text_primary: lotus::TEXT_PRIMARY,
            text_secondary: lotus::TEXT_SECONDARY,
            text_muted: lotus::TEXT_MUTED,
            primary: lotus::PRIMARY,
            accent: lotus::CYAN,
            success: lotus::GREEN,
            warning: lotus::YELLOW,
            error: lotus::RED,
            blue: lotus::BLUE,
            teal: lotus::CYAN,
            yellow: lotus::YELLOW,
            pink: lotus::PINK,
        }
    }

    #[must_use]
    pub fn high_contrast(theme: Theme) -> Self {
        let (bg, fg, dim) = match theme {
            Theme::Dark => (Color::Black, Color::White, Color::Gray),
            Theme::Light => (Color::White, Color::Black, Color::DarkGray),
        };
        Self {
            bg,
            bg_panel: bg,
            bg_highlight: dim,
            bg_popup: bg,
            border: fg,
            text_primary: fg,
            text_secondary: fg,
            text_muted: dim,
            primary: fg,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            blue: Color::Blue,
            teal: Color::Cyan,
            yellow: Color::Yellow,
            pink: Color::Magenta,
        }
    }

    /// Card color for a project accent tag.
    #[must_use]
    pub fn accent_color(&self, accent: Accent) -> Color {
        match accent {
            Accent::Yellow => self.yellow,
            Accent::Blue => self.blue,
            Accent::Teal => self.teal,
            Accent::Purple => self.primary,
            Accent::Pink => self.pink,
        }
    }
}

#[must_use]
pub fn palette(theme: Theme, options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast(theme)
    } else {
        match theme {
            Theme::Dark => Palette::dark(),
            Theme::Light => Palette::light(),
        }
    }
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub selected: &'static str,
    pub pinned: &'static str,
    pub external: &'static str,
    pub back: &'static str,
    pub check: &'static str,
    pub cart: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
    pub status_stable: &'static str,
    pub status_critical: &'static str,
    pub separator: &'static str,
    pub rule: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            selected: ">",
            pinned: "[pinned]",
            external: "->",
            back: "<-",
            check: "OK",
            cart: "Cart",
            theme_dark: "(dark)",
            theme_light: "(light)",
            status_stable: "o",
            status_critical: "!",
            separator: "|",
            rule: "-",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            bullet: "•",
            selected: "▸",
            pinned: "★ Pinned",
            external: "↗",
            back: "←",
            check: "✓",
            cart: "🛒",
            theme_dark: "☾",
            theme_light: "☀",
            status_stable: "●",
            status_critical: "▲",
            separator: "│",
            rule: "─",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

const SPINNER_FRAME_MS: u128 = 80;

/// Spinner glyph for an animation that has been running for `elapsed_ms`.
///
/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(elapsed_ms: u128, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        let index = (elapsed_ms / SPINNER_FRAME_MS) % frames.len() as u128;
        frames[index as usize]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn selected_row(palette: &Palette) -> Style {
        Style::default()
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn success(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn error(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use folio_types::ui::{Theme, UiOptions};

    use super::{palette, spinner_frame};

    #[test]
    fn spinner_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        assert_ne!(spinner_frame(0, options), spinner_frame(80, options));
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert_eq!(spinner_frame(0, options), spinner_frame(80, options));
        assert_eq!(spinner_frame(0, options), spinner_frame(8000, options));
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion_ascii() {
        let options = UiOptions {
            ascii_only: true,
            high_contrast: false,
            reduced_motion: true,
        };
        assert_eq!(spinner_frame(240, options), "|");
    }

    #[test]
    fn themes_differ_in_background() {
        let options = UiOptions::default();
        assert_ne!(
            palette(Theme::Dark, options).bg,
            palette(Theme::Light, options).bg
        );
        let contrast = UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        };
        assert_ne!(
            palette(Theme::Dark, contrast).bg,
            palette(Theme::Light, contrast).bg
        );
    }
}
