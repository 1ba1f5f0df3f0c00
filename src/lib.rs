//! MiniStream: a minimal Twitch player core.
//!
//! MiniStream lets a user paste a link or a name and watch the matching live
//! channel, VOD or clip. It provides:
//! - Classification of free-form input into channel, VOD and clip references
//! - View state that keeps the player, the address bar and the theme in sync
//! - A player adapter choosing between a lightweight iframe and the full
//!   interactive embed, with a one-shot load of the embed script
//! - Page rendering and a headless shell for driving it all without a browser

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell (shell/, main.rs)                            │  ← Host glue
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Player Layer  │   │ Infrastructure│
//! │ (ui/)         │   │ (player/)     │   │ (infra../)    │
//! │ - Components  │   │ - Plans       │   │ - Query string│
//! │ - Markup      │   │ - Embed owner │   │ - Location    │
//! │               │   │ - Script load │   │ - History     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Content references and the input resolver        │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View state controller with event/action model
//! - [`domain`]: Content references, input resolver, errors
//! - [`infrastructure`]: Page address access and query reflection
//! - [`player`]: Render plans, embed lifecycle, script loading
//! - [`shell`]: Runtime glue and headless host implementations
//! - [`ui`]: Page markup rendering
//! - [`observability`]: Tracing setup with optional JSON span export
//!
//! # Example
//!
//! ```rust
//! use ministream::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! let events = vec![
//!     Event::PageLoaded { search: String::new() },
//!     Event::HostnameDetected("localhost".to_string()),
//!     Event::Submit("https://www.twitch.tv/videos/v12345".to_string()),
//! ];
//! for event in events {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     for action in actions {
//!         if let Action::ReplaceAddress(reference) = action {
//!             assert_eq!(reference.unwrap().query_pair(), ("video", "12345"));
//!         }
//!     }
//! }
//! # Ok::<(), ministream::MiniStreamError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Host Traits
//!
//! Browser facilities (location, history, script injection, the embed
//! container) are reached through narrow traits, so the whole core runs under
//! the headless shell and in tests.
//!
//! ## Shared Script Load
//!
//! The embed script load is a `Shared` future created on first use; every
//! later request awaits the same outcome, success or failure.
//!
//! ## Generation Counter
//!
//! Each player reconcile bumps a generation. A full embed that finishes
//! waiting for the script after a newer reconcile is dropped instead of
//! mounted.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod player;
pub mod shell;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, DisplayMode, Event, Theme};
pub use domain::{ContentKind, ContentReference, MiniStreamError, Rejection, Result};

use player::EMBED_SCRIPT_URL;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Address assumed for the page when none is configured.
pub const DEFAULT_LOCATION: &str = "http://localhost/";

/// Shell configuration.
///
/// Values come from `key=value` arguments, optionally layered over a TOML
/// file named by the `config` key.
///
/// # Example
///
/// ```toml
/// location = "https://watch.example.com/?channel=someone"
/// theme = "dark"
/// display_mode = "full"
/// script_available = true
/// trace_level = "ministream=debug"
/// log_file = "/tmp/ministream/spans.jsonl"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute page address the shell starts at. Default: `http://localhost/`
    pub location: String,

    /// Initial theme. Default: light
    pub theme: Theme,

    /// Initial display mode. Default: minimal
    pub display_mode: DisplayMode,

    /// Embed script location.
    pub script_url: String,

    /// Whether the headless script injector succeeds. Default: `true`
    pub script_available: bool,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// File receiving one JSON line per closed span. Disabled when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            theme: Theme::default(),
            display_mode: DisplayMode::default(),
            script_url: EMBED_SCRIPT_URL.to_string(),
            script_available: true,
            trace_level: None,
            log_file: None,
        }
    }
}

/// On-disk shape of the configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    location: Option<String>,
    theme: Option<Theme>,
    display_mode: Option<DisplayMode>,
    script_url: Option<String>,
    script_available: Option<bool>,
    trace_level: Option<String>,
    log_file: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from a `key=value` map.
    ///
    /// Unknown keys are ignored and unparsable values fall back to defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `location`, `script_url`: taken as-is
    /// - `theme`: `light` | `dark` (case-insensitive)
    /// - `display_mode`: `minimal` | `full` (case-insensitive)
    /// - `script_available`: `true` | `false`
    /// - `trace_level`, `log_file`: empty values are treated as unset
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ministream::{Config, Theme};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "Dark".to_string());
    /// map.insert("script_available".to_string(), "false".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme, Theme::Dark);
    /// assert!(!config.script_available);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().overridden_by(map)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MiniStreamError::Io`] if the file cannot be read and
    /// [`MiniStreamError::Config`] if it is not valid configuration TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&content)
            .map_err(|e| MiniStreamError::Config(format!("{}: {e}", path.display())))?;

        let defaults = Self::default();
        Ok(Self {
            location: file.location.unwrap_or(defaults.location),
            theme: file.theme.unwrap_or(defaults.theme),
            display_mode: file.display_mode.unwrap_or(defaults.display_mode),
            script_url: file.script_url.unwrap_or(defaults.script_url),
            script_available: file.script_available.unwrap_or(defaults.script_available),
            trace_level: file.trace_level,
            log_file: file.log_file,
        })
    }

    /// Builds configuration from `key=value` arguments.
    ///
    /// When the map names a `config` file, the file is loaded first and the
    /// remaining map entries override it.
    ///
    /// # Errors
    ///
    /// Propagates [`Config::from_file`] errors.
    pub fn load(map: &BTreeMap<String, String>) -> Result<Self> {
        let base = match map.get("config").filter(|path| !path.is_empty()) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.overridden_by(map))
    }

    fn overridden_by(mut self, map: &BTreeMap<String, String>) -> Self {
        if let Some(location) = map.get("location") {
            self.location.clone_from(location);
        }
        if let Some(script_url) = map.get("script_url") {
            self.script_url.clone_from(script_url);
        }
        if let Some(theme) = map.get("theme") {
            match theme.parse() {
                Ok(theme) => self.theme = theme,
                Err(e) => tracing::debug!(error = %e, "ignoring theme setting"),
            }
        }
        if let Some(mode) = map.get("display_mode") {
            match mode.parse() {
                Ok(mode) => self.display_mode = mode,
                Err(e) => tracing::debug!(error = %e, "ignoring display mode setting"),
            }
        }
        if let Some(available) = map.get("script_available") {
            match available.trim().parse::<bool>() {
                Ok(available) => self.script_available = available,
                Err(e) => tracing::debug!(error = %e, "ignoring script_available setting"),
            }
        }
        if let Some(level) = map.get("trace_level") {
            self.trace_level = Some(level.clone()).filter(|l| !l.is_empty());
        }
        if let Some(file) = map.get("log_file") {
            self.log_file = Some(PathBuf::from(file)).filter(|f| !f.as_os_str().is_empty());
        }
        self
    }
}

/// Creates the initial view state from configuration.
///
/// # Example
///
/// ```rust
/// use ministream::{initialize, Config, DisplayMode, Theme};
///
/// let config = Config {
///     theme: Theme::Dark,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme, Theme::Dark);
/// assert_eq!(state.display_mode, DisplayMode::Minimal);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        theme = %config.theme,
        display_mode = %config.display_mode,
        "initializing view state"
    );
    AppState::new(config.theme, config.display_mode)
}
