//! Entrance animations for portfolio overlays.

use ratatui::layout::Rect;

use folio_engine::{OverlayEffect, OverlayEffectKind};
use folio_types::ui::ease_out_cubic;

/// Apply an overlay effect to transform the base rectangle.
#[must_use]
pub fn apply_overlay_effect(effect: &OverlayEffect, base: Rect) -> Rect {
    let t = ease_out_cubic(effect.progress());
    match effect.kind() {
        OverlayEffectKind::PopScale => scale_rect(base, 0.6 + 0.4 * t),
        OverlayEffectKind::SlideDown => {
            // Reveal from the top edge: grow height while the box stays anchored.
            let height = (f32::from(base.height) * t).round() as u16;
            Rect {
                height: height.max(1).min(base.height),
                ..base
            }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn pop_scale_starts_smaller_and_ends_full_size() {
        let base = Rect::new(10, 5, 40, 20);
        let mut effect = OverlayEffect::new(OverlayEffectKind::PopScale, Duration::from_millis(100));
        let start = apply_overlay_effect(&effect, base);
        assert!(start.width < base.width);
        assert!(start.x > base.x);
        effect.step(Duration::from_millis(100));
        assert_eq!(apply_overlay_effect(&effect, base), base);
    }

    #[test]
    fn slide_down_keeps_top_edge() {
        let base = Rect::new(50, 1, 20, 8);
        let mut effect = OverlayEffect::new(OverlayEffectKind::SlideDown, Duration::from_millis(100));
        effect.step(Duration::from_millis(30));
        let partial = apply_overlay_effect(&effect, base);
        assert_eq!(partial.y, base.y);
        assert!(partial.height < base.height);
        effect.step(Duration::from_millis(100));
        assert_eq!(apply_overlay_effect(&effect, base), base);
    }
}
