//! Segmentierungs-Editor Library.
//! Seitenmodell, Undo/Redo und Controller als Library exportiert für Hosts und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditorCommand, EditorController, EditorIntent, EditorState, EditorView, OutgoingRequest,
    PageTicket, SegmentationReport,
};
pub use core::{
    Book, BookSettings, Cut, ExportArtifact, ExportSettings, LoadBookResponse, PageId, PageState,
    Point, Polygon, PolygonKind, Region, SegmentationModel, SegmentationResponse,
    SegmentationStatus,
};
pub use shared::EditorOptions;
