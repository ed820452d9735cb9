//! Application-Layer: Controller, State, Events, Actions und Handler.

pub mod actions;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod reading_order;
pub mod requests;
/// Editor State
///
/// Dieses Modul verwaltet den Zustand des Editors (Modell, Histories, Selektion).
pub mod state;
pub mod view;

pub use actions::{Action, CompositeAction};
pub use command_log::{CommandLog, LoggedCommand};
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use history::{ActionHistory, PageHistories};
pub use reading_order::ReadingOrderManager;
pub use requests::{OutgoingRequest, PageTicket, SegmentationFailure, SegmentationReport};
pub use state::{EditorState, SelectionSet, SelectionType};
pub use view::{EditorView, NullView};
