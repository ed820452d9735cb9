//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und der einbettende Host teilen.

pub mod options;

pub use options::EditorOptions;
pub use options::{CREATED_ID_PREFIX, DEFAULT_REGION_TYPE, PAGE_XML_VERSION};
