//! Collaborators outside the terminal: clipboard and URL launcher.
//!
//! The engine only sees these traits; the TUI crate supplies the clipboard
//! implementations and tests supply recording fakes.

use std::{
    io,
    path::PathBuf,
    process::{Command, Stdio},
    thread,
};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Somewhere text can be copied to.
pub trait ClipboardService {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard that always fails. Used when no fallback is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl ClipboardService for NoClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard configured".to_string()))
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no URL opener found (tried {tried})")]
    NoOpener { tried: String },
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Opens a URL outside the application (a new browsing context).
pub trait LinkLauncher {
    fn open(&mut self, url: &str) -> Result<(), LaunchError>;
}

/// Launches URLs through the platform opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

/// Opener programs in preference order, with leading arguments.
#[cfg(target_os = "macos")]
const OPENERS: &[(&str, &[&str])] = &[("open", &[])];
#[cfg(windows)]
const OPENERS: &[(&str, &[&str])] = &[("cmd", &["/C", "start", ""])];
#[cfg(not(any(target_os = "macos", windows)))]
const OPENERS: &[(&str, &[&str])] = &[("xdg-open", &[]), ("gio", &["open"]), ("wslview", &[])];

impl SystemLauncher {
    fn resolve() -> Result<(PathBuf, &'static [&'static str]), LaunchError> {
        OPENERS
            .iter()
            .find_map(|(program, args)| which::which(program).ok().map(|path| (path, *args)))
            .ok_or_else(|| LaunchError::NoOpener {
                tried: OPENERS
                    .iter()
                    .map(|(program, _)| *program)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl LinkLauncher for SystemLauncher {
    fn open(&mut self, url: &str) -> Result<(), LaunchError> {
        let (program, args) = Self::resolve()?;
        debug!(program = %program.display(), url, "Launching external link");

        // Detached from the terminal: any opener output would corrupt the UI.
        let mut child = Command::new(&program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        // Reap the opener so it does not linger as a zombie.
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// The set of collaborators handed to [`crate::App`].
pub struct Services {
    pub clipboard: Box<dyn ClipboardService>,
    pub fallback_clipboard: Box<dyn ClipboardService>,
    pub launcher: Box<dyn LinkLauncher>,
}

impl Services {
    #[must_use]
    pub fn new(
        clipboard: Box<dyn ClipboardService>,
        fallback_clipboard: Box<dyn ClipboardService>,
        launcher: Box<dyn LinkLauncher>,
    ) -> Self {
        Self {
            clipboard,
            fallback_clipboard,
            launcher,
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(
            Box::new(NoClipboard),
            Box::new(NoClipboard),
            Box::new(SystemLauncher),
        )
    }
}
