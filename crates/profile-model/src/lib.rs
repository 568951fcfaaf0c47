//! Data model for the profile editor.
//!
//! A profile is an ordered list of typed fields. This crate defines the value
//! types the state container reduces over:
//!
//! - [`AppState`]: root state holding the profile being edited
//! - [`Profile`]: ordered collection of fields (display order = vector order)
//! - [`Field`]: one entry, tagged with a [`FieldKind`]
//! - [`Restrictions`]: kind-specific configuration with a lower and upper [`Bound`]
//!
//! All types are immutable values. Fields are shared as `Arc<Field>` so an
//! update that touches one field leaves the others pointer-equal.
//!
//! # Example
//!
//! ```
//! use profile_model::{AppState, FieldKind};
//!
//! let state = AppState::default();
//! assert!(state.fields().is_empty());
//! assert_eq!(FieldKind::default(), FieldKind::Unclassified);
//! ```

pub mod error;
pub mod field;
pub mod profile;
pub mod restriction;
pub mod state;

pub use error::ModelError;
pub use field::{Field, FieldId, FieldKind};
pub use profile::Profile;
pub use restriction::{Bound, Restrictions};
pub use state::AppState;
