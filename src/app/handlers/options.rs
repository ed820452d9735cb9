//! Handler für Laufzeit-Optionen.

use crate::app::EditorState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen in State und Modell.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) {
    state.multi_select = options.multi_select;
    state
        .model
        .set_excluded_reading_order_types(options.reading_order_excluded_types.clone());
    state.options = options;
    log::info!("Optionen übernommen");
}
