//! Mapping von Editor-Intents auf mutierende Editor-Commands.

use super::{EditorCommand, EditorIntent, EditorState};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::BookLoaded { response, page } => vec![
            EditorCommand::LoadBook { response },
            EditorCommand::DisplayPage { page },
        ],
        EditorIntent::SettingsUploaded { settings } => vec![
            EditorCommand::ApplySettings { settings },
            EditorCommand::SetAllRegionsVisibility { visible: false },
            EditorCommand::DisplayPage {
                page: state.current_page,
            },
        ],
        EditorIntent::PageDisplayRequested { page } => vec![
            EditorCommand::DiscardStagedReadingOrder,
            EditorCommand::ClearSelection,
            EditorCommand::DisplayPage { page },
        ],
        EditorIntent::SegmentationRequested { pages, parameters } => vec![
            EditorCommand::ClearSelection,
            EditorCommand::RequestSegmentation { pages, parameters },
        ],
        EditorIntent::SegmentationCompleted { tickets, response } => {
            vec![EditorCommand::ApplySegmentation { tickets, response }]
        }
        EditorIntent::OptionsChanged { options } => vec![EditorCommand::ApplyOptions { options }],
        EditorIntent::ImageModeChanged { mode } => vec![EditorCommand::SetImageMode { mode }],
        EditorIntent::ImageCombineToggled { combine } => {
            vec![EditorCommand::SetImageCombine { combine }]
        }

        EditorIntent::PolygonClicked { id } => vec![EditorCommand::SelectPolygon {
            id,
            multi_select: state.multi_select,
        }],
        EditorIntent::RectangleSelected { ids } => vec![EditorCommand::SelectInRect {
            ids,
            multi_select: state.multi_select,
        }],
        EditorIntent::SelectionCleared => vec![EditorCommand::ClearSelection],
        EditorIntent::MultiSelectToggled { enabled } => {
            vec![EditorCommand::SetMultiSelect { enabled }]
        }
        EditorIntent::PolygonHovered { id, hovered } => vec![EditorCommand::HighlightPolygon {
            id,
            highlighted: hovered,
        }],

        EditorIntent::RegionPolygonDrawn {
            points,
            region_type,
        } => {
            let region_type = region_type.unwrap_or_else(|| state.default_polygon_type());
            vec![EditorCommand::CreateRegionPolygon {
                points,
                region_type,
            }]
        }
        EditorIntent::RegionOfInterestDrawn { points } => {
            vec![EditorCommand::CreateRegionOfInterest { points }]
        }
        EditorIntent::SegmentDrawn { points } => vec![EditorCommand::CreateSegment { points }],
        EditorIntent::CutDrawn { points } => vec![EditorCommand::CreateCut { points }],

        EditorIntent::PolygonTransformed { id, points } => {
            vec![EditorCommand::TransformPolygon { id, points }]
        }
        EditorIntent::PolygonTypeChangeRequested { id, new_type } => {
            vec![EditorCommand::ChangePolygonType { id, new_type }]
        }
        EditorIntent::SelectionTypeChangeRequested { new_type } => {
            vec![EditorCommand::ChangeSelectionType { new_type }]
        }
        EditorIntent::DeleteSelectedRequested => vec![
            EditorCommand::DeleteSelected,
            EditorCommand::ClearSelection,
        ],
        EditorIntent::MergeSelectedRequested => vec![EditorCommand::RequestMerge],
        EditorIntent::MergeCompleted {
            ticket,
            constituents,
            merged,
        } => vec![EditorCommand::ApplyMerge {
            ticket,
            constituents,
            merged,
        }],

        EditorIntent::RegionSettingsChanged {
            region_type,
            min_size,
            max_occurrences,
        } => vec![EditorCommand::ChangeRegionSettings {
            region_type,
            min_size,
            max_occurrences,
        }],
        EditorIntent::RegionDeleteRequested { region_type } => {
            vec![EditorCommand::RemoveRegion { region_type }]
        }
        EditorIntent::RegionVisibilityToggled {
            region_type,
            visible,
        } => vec![EditorCommand::SetRegionVisibility {
            region_type,
            visible,
        }],
        EditorIntent::AllRegionsVisibilityToggled { visible } => {
            vec![EditorCommand::SetAllRegionsVisibility { visible }]
        }

        EditorIntent::ReadingOrderDragStarted => vec![EditorCommand::StageReadingOrder],
        EditorIntent::ReadingOrderMoveRequested {
            moving_id,
            anchor_id,
        } => vec![EditorCommand::MoveReadingOrder {
            moving_id,
            anchor_id,
        }],
        EditorIntent::ReadingOrderDragFinished => vec![EditorCommand::CommitReadingOrder],
        EditorIntent::ReadingOrderDragCancelled => {
            vec![EditorCommand::DiscardStagedReadingOrder]
        }
        EditorIntent::ReadingOrderRemoveRequested { id } => {
            vec![EditorCommand::RemoveFromReadingOrder { id }]
        }

        EditorIntent::UndoRequested => vec![
            EditorCommand::DiscardStagedReadingOrder,
            EditorCommand::Undo,
        ],
        EditorIntent::RedoRequested => vec![
            EditorCommand::DiscardStagedReadingOrder,
            EditorCommand::Redo,
        ],

        EditorIntent::ExportRequested => vec![EditorCommand::PrepareExport],
        EditorIntent::ExportPrepared { ticket, revision } => {
            vec![EditorCommand::ApplyExportPrepared { ticket, revision }]
        }
        EditorIntent::SettingsExportRequested { parameters } => {
            vec![EditorCommand::PrepareSettingsExport { parameters }]
        }
        EditorIntent::SettingsExportPrepared { revision } => {
            vec![EditorCommand::ApplySettingsExportPrepared { revision }]
        }
    }
}
