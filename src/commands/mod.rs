//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the loaded [`App`].

pub mod copy;
pub mod delete;
pub mod edit;
pub mod list;
pub mod prefs;
pub mod top;
pub mod transfer;

pub use copy::execute as copy;
pub use delete::execute as delete;
pub use list::execute as list;
pub use top::execute as top;

use crate::record::Record;
use crate::state::App;
use crate::PromptNoteError;

/// Look up a record by id or unique id prefix
fn resolve(app: &App, id: &str) -> Result<Record, PromptNoteError> {
    app.find(id)
        .cloned()
        .ok_or_else(|| PromptNoteError::NotFound(id.to_string()))
}
