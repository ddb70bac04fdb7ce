//! String primitives: tokenizing, substring search, locale-aware trimming,
//! width-constrained reflow and numeric-literal recognition.
//!
//! The free functions in [`text`] use the classic locale and default settings.
//! [`Toolkit`] binds the same operations to a validated [`TextConfig`].
//! [`input`] loads text from files, PDFs, EPUBs and the clipboard.

pub mod engine;
pub mod input;
pub mod text;

pub use engine::{TextConfig, TextError, Toolkit};
pub use input::{LoadError, LoadedDocument};
pub use text::*;
