//! sift-core: incremental filter-expression builder core library.
//!
//! Owns the token-sequence state machine behind a type-ahead filter
//! builder: given the tokens typed or picked so far, it decides what may
//! come next, how a new token is appended, how deletions collapse the
//! sequence, and how the sequence renders as a linear query string.
//! Everything visual (popovers, focus, caret) lives outside this crate
//! and drives it through [`Session`].
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`Catalog`] -- static registry of fields, operators, and the
//!   boolean literal pair
//! - [`Expression`] -- the token sequence and its mutation operations
//! - [`EditState`] -- what the expression is ready to accept next
//! - [`Session`] -- the event surface a presentation layer talks to
//! - [`suggestions()`] -- candidate list for the next token
//! - [`serialize()`] -- linear query-string rendering

pub mod catalog;
pub mod expr;
pub mod reset;
pub mod serialize;
pub mod session;
pub mod suggest;
pub mod token;

// ── Convenience re-exports: key types ────────────────────────────────

pub use catalog::{Catalog, CatalogEntry, CatalogError, Field, Operator, BOOLEAN_LITERALS};
pub use expr::{EditState, Expression, MalformedExpression};
pub use session::{Session, FOCUS_RESET_DELAY};
pub use token::{FieldType, Token, TokenKind, ValueComponent};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use serialize::serialize;
pub use suggest::suggestions;
