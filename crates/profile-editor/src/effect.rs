//! Side effects requested by store middleware.
//!
//! [`SideEffects`] watches completed transitions and emits [`Effect`]s that
//! the update loop turns into Iced tasks. It never touches state.

use profile_store::{Action, Effects, Middleware, Transition};

use crate::component::{Notice, NoticeLevel};

/// Effect carried back from a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show a transient notice.
    Notify(Notice),
}

/// Emits user-facing notices for structural profile changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SideEffects;

impl Middleware<Effect> for SideEffects {
    fn name(&self) -> &'static str {
        "side-effects"
    }

    fn after(&mut self, transition: &Transition<'_>, effects: &mut Effects<Effect>) {
        if !transition.changed() {
            return;
        }

        let notice = match transition.action {
            Action::AddField => transition.next.fields().last().map(|field| {
                Notice::new(
                    format!("Added {}", field.display_name()),
                    NoticeLevel::Success,
                )
            }),
            Action::RemoveField { id } => transition.previous.field(*id).map(|field| {
                Notice::new(format!("Removed {}", field.display_name()), NoticeLevel::Info)
            }),
            Action::MoveField { id, .. } => {
                let name = transition.next.field(*id).map(|f| f.display_name());
                let position = transition.next.position(*id);
                name.zip(position).map(|(name, position)| {
                    Notice::new(
                        format!("Moved {name} to position {}", position + 1),
                        NoticeLevel::Info,
                    )
                })
            }
            _ => None,
        };

        if let Some(notice) = notice {
            tracing::trace!(message = %notice.message, "emitting notice");
            effects.emit(Effect::Notify(notice));
        }
    }
}
