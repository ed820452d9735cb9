//! Editor-Controller für zentrale Event-Verarbeitung.

use super::{EditorCommand, EditorIntent, EditorState};

/// Orchestriert Intents der Gegenseiten und Handler auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(state.current_page, &command);
        use super::handlers;

        match command {
            // === Buch & Seiten ===
            EditorCommand::LoadBook { response } => handlers::page::load_book(state, response),
            EditorCommand::ApplySettings { settings } => {
                handlers::page::apply_settings(state, settings)
            }
            EditorCommand::DisplayPage { page } => handlers::page::display_page(state, page),
            EditorCommand::RequestSegmentation { pages, parameters } => {
                handlers::page::request_segmentation(state, pages, parameters)
            }
            EditorCommand::ApplySegmentation { tickets, response } => {
                handlers::page::apply_segmentation(state, tickets, response)
            }
            EditorCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)
            }
            EditorCommand::SetImageMode { mode } => handlers::page::set_image_mode(state, mode),
            EditorCommand::SetImageCombine { combine } => {
                handlers::page::set_image_combine(state, combine)
            }

            // === Selektion ===
            EditorCommand::SelectPolygon { id, multi_select } => {
                handlers::selection::select_polygon(state, &id, multi_select)
            }
            EditorCommand::SelectInRect { ids, multi_select } => {
                handlers::selection::select_in_rect(state, &ids, multi_select)
            }
            EditorCommand::ClearSelection => handlers::selection::clear(state),
            EditorCommand::SetMultiSelect { enabled } => {
                handlers::selection::set_multi_select(state, enabled)
            }
            EditorCommand::HighlightPolygon { id, highlighted } => {
                handlers::selection::highlight(state, &id, highlighted)
            }

            // === Erstellen ===
            EditorCommand::CreateRegionPolygon {
                points,
                region_type,
            } => handlers::editing::create_region_polygon(state, points, &region_type),
            EditorCommand::CreateRegionOfInterest { points } => {
                handlers::editing::create_region_of_interest(state, &points)
            }
            EditorCommand::CreateSegment { points } => {
                handlers::editing::create_segment(state, points)
            }
            EditorCommand::CreateCut { points } => handlers::editing::create_cut(state, points),

            // === Bearbeiten ===
            EditorCommand::TransformPolygon { id, points } => {
                handlers::editing::transform_polygon(state, &id, points)
            }
            EditorCommand::ChangePolygonType { id, new_type } => {
                handlers::editing::change_polygon_type(state, &id, &new_type)
            }
            EditorCommand::ChangeSelectionType { new_type } => {
                handlers::editing::change_selection_type(state, &new_type)
            }
            EditorCommand::DeleteSelected => handlers::editing::delete_selected(state),
            EditorCommand::RequestMerge => handlers::editing::request_merge(state),
            EditorCommand::ApplyMerge {
                ticket,
                constituents,
                merged,
            } => handlers::editing::apply_merge(state, ticket, constituents, merged),

            // === Regionen ===
            EditorCommand::ChangeRegionSettings {
                region_type,
                min_size,
                max_occurrences,
            } => handlers::editing::change_region_settings(
                state,
                &region_type,
                min_size,
                max_occurrences,
            ),
            EditorCommand::RemoveRegion { region_type } => {
                handlers::editing::remove_region(state, &region_type)
            }
            EditorCommand::SetRegionVisibility {
                region_type,
                visible,
            } => handlers::editing::set_region_visibility(state, &region_type, visible),
            EditorCommand::SetAllRegionsVisibility { visible } => {
                handlers::editing::set_all_regions_visibility(state, visible)
            }

            // === Lesereihenfolge ===
            EditorCommand::StageReadingOrder => handlers::reading_order::stage(state),
            EditorCommand::MoveReadingOrder {
                moving_id,
                anchor_id,
            } => handlers::reading_order::move_staged(state, &moving_id, &anchor_id),
            EditorCommand::CommitReadingOrder => handlers::reading_order::commit(state),
            EditorCommand::DiscardStagedReadingOrder => handlers::reading_order::discard(state),
            EditorCommand::RemoveFromReadingOrder { id } => {
                handlers::reading_order::remove(state, &id)
            }

            // === History ===
            EditorCommand::Undo => handlers::history::undo(state),
            EditorCommand::Redo => handlers::history::redo(state),

            // === Export ===
            EditorCommand::PrepareExport => handlers::export::prepare_export(state),
            EditorCommand::ApplyExportPrepared { ticket, revision } => {
                handlers::export::apply_export_prepared(state, ticket, revision)
            }
            EditorCommand::PrepareSettingsExport { parameters } => {
                handlers::export::prepare_settings_export(state, parameters)
            }
            EditorCommand::ApplySettingsExportPrepared { revision } => {
                handlers::export::apply_settings_export_prepared(state, revision)
            }
        }

        Ok(())
    }
}
