//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message type and is
//! called from `App::update`:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Profile(msg) => ProfileHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod profile;

use iced::Task;

use crate::message::Message;
use crate::state::EditorState;

pub use profile::{ProfileHandler, dispatch};

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut EditorState, msg: M) -> Task<Message>;
}
