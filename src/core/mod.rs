//! Core-Domänentypen: Polygone, Regionen, Seitenzustand, Export-Einstellungen
//! und das Segmentierungsmodell.

pub mod book;
pub mod export;
/// Segmentierungsmodell
///
/// Besitzt alle Seitenzustände einer Session:
/// - PageState: fixierte Segmente, Ergebnis-Segmente, Cuts, Regionen
/// - ExportSettings: Overlay (Ignore, Merge, Typ-Überschreibungen, Lesereihenfolge)
pub mod model;
pub mod page;
pub mod polygon;
pub mod polygon_kind;
pub mod reading_order;
pub mod region;

pub use book::{
    Book, BookPage, BookSettings, LoadBookResponse, PageSegmentation, PageSettings,
    SegmentationResponse, SegmentationStatus,
};
pub use export::{ExportArtifact, ExportSettings};
pub use model::{SegmentationModel, IMAGE_SEGMENT_TYPE};
pub use page::{PageId, PageState};
pub use polygon::{bounding_box, Cut, Point, Polygon};
pub use polygon_kind::PolygonKind;
pub use reading_order::{GeometricReadingOrder, ReadingOrderSort};
pub use region::{PriorityPosition, Region, IGNORE_REGION_TYPE};
