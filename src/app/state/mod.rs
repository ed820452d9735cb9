//! Editor-State: Modell, Histories, Selektion und Session-Zustand.

mod editor_state;
mod selection;

pub use editor_state::EditorState;
pub use selection::{SelectionSet, SelectionType};
