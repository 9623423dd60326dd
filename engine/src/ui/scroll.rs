//! Page scroll position, section anchors, and smooth-scroll animation.

use std::time::Duration;

use folio_types::{
    Section,
    ui::{EffectTimer, ease_out_cubic},
};

pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    timer: EffectTimer,
}

impl ScrollAnimation {
    fn position(&self) -> u16 {
        let t = ease_out_cubic(self.timer.progress());
        let from = f32::from(self.from);
        let to = f32::from(self.to);
        (from + (to - from) * t).round() as u16
    }
}

/// Vertical position on the page plus the layout facts needed to resolve
/// section anchors. The layout is refreshed by the renderer every frame.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    offset: u16,
    max_offset: u16,
    viewport: u16,
    anchors: [u16; 4],
    animation: Option<ScrollAnimation>,
}

impl PageScroll {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn max_offset(&self) -> u16 {
        self.max_offset
    }

    #[must_use]
    pub fn anchor(&self, section: Section) -> u16 {
        self.anchors[section.index()]
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The section whose anchor is at or above the current offset.
    #[must_use]
    pub fn current_section(&self) -> Section {
        Section::ALL
            .into_iter()
            .rev()
            .find(|&section| self.anchor(section) <= self.offset)
            .unwrap_or(Section::About)
    }

    pub(crate) fn set_layout(&mut self, anchors: [u16; 4], content_height: u16, viewport: u16) {
        self.anchors = anchors;
        self.viewport = viewport;
        self.max_offset = content_height.saturating_sub(viewport);
        if let Some(animation) = &mut self.animation {
            animation.to = animation.to.min(self.max_offset);
        }
        self.offset = self.offset.min(self.max_offset);
    }

    /// Move to `target`, animated unless `reduced_motion`.
    pub(crate) fn scroll_to(&mut self, target: u16, reduced_motion: bool) {
        let target = target.min(self.max_offset);
        if reduced_motion || target == self.offset {
            self.animation = None;
            self.offset = target;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            timer: EffectTimer::new(SMOOTH_SCROLL_DURATION),
        });
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        self.animation = None;
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset));
        self.offset = next as u16;
    }

    /// One viewport minus two lines of overlap, never less than one line.
    pub(crate) fn scroll_page(&mut self, down: bool) {
        let page = i32::from(self.viewport.saturating_sub(2).max(1));
        self.scroll_by(if down { page } else { -page });
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        let Some(animation) = &mut self.animation else {
            return;
        };
        animation.timer.advance(delta);
        self.offset = animation.position().min(self.max_offset);
        if animation.timer.is_finished() {
            self.animation = None;
        }
    }
}
