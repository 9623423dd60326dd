//! Entrance animations for the section menu and the code viewer.
//!
//! An overlay animates once, when it opens. The animation belongs to the
//! portfolio view and is dropped as soon as it completes, when the overlay
//! closes, or when the page is left for a mini-app.

use std::time::Duration;

use folio_types::ui::EffectTimer;

use super::Overlay;

/// Time for the code viewer to grow from the center of the page.
pub const CODE_VIEWER_POP: Duration = Duration::from_millis(180);
/// Time for the section menu to unfold below the navigation bar.
pub const SECTION_MENU_SLIDE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEffectKind {
    /// Code viewer: scales up around its center.
    PopScale,
    /// Section menu: top edge pinned under the navbar while the height grows.
    SlideDown,
}

impl OverlayEffectKind {
    fn entering(overlay: &Overlay) -> Option<Self> {
        match overlay {
            Overlay::None => None,
            Overlay::SectionMenu { .. } => Some(Self::SlideDown),
            Overlay::CodeViewer { .. } => Some(Self::PopScale),
        }
    }

    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            Self::PopScale => CODE_VIEWER_POP,
            Self::SlideDown => SECTION_MENU_SLIDE,
        }
    }
}

/// The in-flight entrance of the overlay currently over the page.
#[derive(Debug, Clone)]
pub struct OverlayEffect {
    kind: OverlayEffectKind,
    timer: EffectTimer,
}

impl OverlayEffect {
    /// Entrance for a freshly opened overlay. `Overlay::None` has none.
    #[must_use]
    pub fn entrance(overlay: &Overlay) -> Option<Self> {
        OverlayEffectKind::entering(overlay).map(|kind| Self::new(kind, kind.duration()))
    }

    #[must_use]
    pub fn new(kind: OverlayEffectKind, duration: Duration) -> Self {
        Self {
            kind,
            timer: EffectTimer::new(duration),
        }
    }

    /// Move the entrance forward. Returns `false` once the overlay is fully in.
    pub fn step(&mut self, delta: Duration) -> bool {
        self.timer.advance(delta);
        !self.timer.is_finished()
    }

    /// Linear share of the entrance elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn kind(&self) -> OverlayEffectKind {
        self.kind
    }
}
