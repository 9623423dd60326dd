//! UI-facing state owned by the engine.
//!
//! Pure UI option types live in `folio_types::ui`; this module re-exports
//! them next to the engine's view, scroll, and overlay state.

mod modal;
mod scroll;
mod view_state;

pub use modal::{CODE_VIEWER_POP, OverlayEffect, OverlayEffectKind, SECTION_MENU_SLIDE};
pub use scroll::{PageScroll, SMOOTH_SCROLL_DURATION};
pub use view_state::{Overlay, PortfolioView, Route, ViewState};

pub use folio_types::ui::{Theme, UiOptions};
