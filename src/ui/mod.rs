//! Terminal interaction
//!
//! - [`input::UserInput`] for prompts, with [`input::DialoguerInput`] for real
//!   terminals and [`mock::ScriptedInput`] for scripted answers.

pub mod input;
pub mod mock;

pub use input::{DialoguerInput, InputError, UserInput};
pub use mock::{Answer, ScriptedInput};
