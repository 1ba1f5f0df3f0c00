//! Player adapter: strategy selection, embed lifecycle and script loading.
//!
//! # Architecture
//!
//! - `plan`: Decision table mapping state to a [`RenderPlan`] and the provider URL templates
//! - `embed`: [`PlayerAdapter`] owning the embed container and the live instance
//! - `script`: [`ScriptLoader`] memoizing the one-time embed script load

pub mod embed;
pub mod plan;
pub mod script;

pub use embed::{EmbedContainer, EmbedHandle, PendingEmbed, PlayerAdapter};
pub use plan::{EmbedLayout, EmbedOptions, IframePlayer, RenderPlan};
pub use script::{LoadState, ScriptInjector, ScriptLoad, ScriptLoader, EMBED_SCRIPT_URL};
