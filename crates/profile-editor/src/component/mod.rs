//! Reusable UI components.
//!
//! - [`ProfileEditor`]: grid form that lays out child editors and the add control
//! - [`form_field`]: labeled text input with error display
//! - [`view_notice`]: transient notification

mod form_field;
mod notice;
mod profile_editor;

pub use form_field::form_field;
pub use notice::{Notice, NoticeLevel, NoticeMessage, view_notice};
pub use profile_editor::{DEFAULT_COLUMNS, GridPlan, ProfileEditor, Slot};
