//! Domain layer for MiniStream.
//!
//! This module contains the content model and the input classification rules,
//! independent of any browser or host API.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`reference`]: Content reference model (channel, VOD, clip)
//! - [`resolver`]: Classification of free-form input into references
//!
//! # Examples
//!
//! ```
//! use ministream::domain::{resolve, ContentKind, Rejection};
//!
//! assert_eq!(resolve("some_user").unwrap().kind(), ContentKind::Channel);
//! assert_eq!(resolve("  "), Err(Rejection::Empty));
//! ```

pub mod error;
pub mod reference;
pub mod resolver;

pub use error::{MiniStreamError, Result, ScriptLoadError};
pub use reference::{ContentKind, ContentReference};
pub use resolver::{resolve, Rejection};
