//! Configuration for Folio, read from `~/.folio/config.toml`.
//!
//! Every section and field is optional; a missing file means defaults.
//!
//! ```toml
//! [app]
//! theme = "light"
//! reduced_motion = true
//!
//! [calculator]
//! history_cap = 3
//!
//! [store]
//! add_to_cart = "open_cart"
//! checkout_delay_ms = 2500
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use folio_core::{AddToCartBehavior, MiniAppSettings};
use folio_types::{
    Profile,
    ui::{Theme, UiOptions},
};

/// Environment override for the initial theme.
pub const THEME_ENV_VAR: &str = "FOLIO_THEME";

/// Default scroll offset, in lines, past which the navigation bar is drawn
/// as "scrolled".
pub const DEFAULT_SCROLLED_THRESHOLD: u16 = 2;

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub calculator: Option<CalculatorConfig>,
    pub quiz: Option<QuizConfig>,
    pub store: Option<StoreConfig>,
    /// Overrides of the built-in profile text.
    pub profile: Option<ProfileConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    pub theme: Option<Theme>,
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Jump instead of animating scrolls.
    #[serde(default)]
    pub reduced_motion: bool,
    pub scrolled_threshold: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalculatorConfig {
    /// Number of `expr = result` lines kept. Known variants use 3 or 5.
    pub history_cap: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizConfig {
    pub analysis_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddToCartMode {
    OpenCart,
    #[default]
    Stay,
}

impl From<AddToCartMode> for AddToCartBehavior {
    fn from(mode: AddToCartMode) -> Self {
        match mode {
            AddToCartMode::OpenCart => AddToCartBehavior::OpenCart,
            AddToCartMode::Stay => AddToCartBehavior::StayOnCatalog,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    pub add_to_cart: Option<AddToCartMode>,
    pub checkout_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl FolioConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        })
    }

    /// Initial theme: `FOLIO_THEME`, then `[app] theme`, then dark.
    #[must_use]
    pub fn theme(&self) -> Theme {
        theme_from_env()
            .or_else(|| self.app.as_ref().and_then(|app| app.theme))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn scrolled_threshold(&self) -> u16 {
        self.app
            .as_ref()
            .and_then(|app| app.scrolled_threshold)
            .unwrap_or(DEFAULT_SCROLLED_THRESHOLD)
    }

    #[must_use]
    pub fn mini_app_settings(&self) -> MiniAppSettings {
        let mut settings = MiniAppSettings::default();
        if let Some(cap) = self.calculator.as_ref().and_then(|c| c.history_cap) {
            if cap == 0 {
                tracing::warn!("calculator.history_cap must be at least 1; using 1");
            }
            settings.calculator_history_cap = cap.max(1);
        }
        if let Some(ms) = self.quiz.as_ref().and_then(|q| q.analysis_delay_ms) {
            settings.quiz_analysis_delay = Duration::from_millis(ms);
        }
        if let Some(store) = &self.store {
            if let Some(mode) = store.add_to_cart {
                settings.store_add_behavior = mode.into();
            }
            if let Some(ms) = store.checkout_delay_ms {
                settings.store_checkout_delay = Duration::from_millis(ms);
            }
        }
        settings
    }

    /// The built-in profile with any configured overrides applied.
    #[must_use]
    pub fn profile(&self) -> Profile {
        let mut profile = Profile::default();
        let Some(overrides) = &self.profile else {
            return profile;
        };
        let fields = [
            (&mut profile.name, &overrides.name),
            (&mut profile.title, &overrides.title),
            (&mut profile.summary, &overrides.summary),
            (&mut profile.email, &overrides.email),
            (&mut profile.github, &overrides.github),
            (&mut profile.linkedin, &overrides.linkedin),
        ];
        for (field, value) in fields {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                *field = value.to_string();
            }
        }
        profile
    }
}

fn theme_from_env() -> Option<Theme> {
    let raw = env::var(THEME_ENV_VAR).ok()?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            tracing::warn!("Ignoring {THEME_ENV_VAR}: {err}");
            None
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
