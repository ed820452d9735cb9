//! Gemeinsame Fixtures für die Integrationstests.

#![allow(dead_code)]

use segmentation_editor::core::{BookPage, PageSegmentation};
use segmentation_editor::{
    Book, BookSettings, EditorController, EditorIntent, EditorState, EditorView, LoadBookResponse,
    PageId, Point, Polygon, Region, SegmentationResponse, SegmentationStatus,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Aufgezeichnete Benachrichtigung an die Darstellung.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Selected(String, bool),
    Highlighted(String, bool),
    RegionVisibility(String, bool),
    PageDisplayed(PageId),
    ReadingOrder(Vec<String>),
    Downloadable(PageId, bool),
    SettingsDownloadable(bool),
}

/// Darstellung, die alle Benachrichtigungen mitschreibt.
pub struct RecordingView {
    pub events: Rc<RefCell<Vec<ViewEvent>>>,
}

impl EditorView for RecordingView {
    fn select_polygon(&mut self, id: &str, selected: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Selected(id.to_string(), selected));
    }

    fn highlight_polygon(&mut self, id: &str, highlighted: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Highlighted(id.to_string(), highlighted));
    }

    fn set_region_visibility(&mut self, region_type: &str, visible: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::RegionVisibility(region_type.to_string(), visible));
    }

    fn display_page(&mut self, page: PageId) {
        self.events.borrow_mut().push(ViewEvent::PageDisplayed(page));
    }

    fn display_reading_order(&mut self, order: &[String]) {
        self.events
            .borrow_mut()
            .push(ViewEvent::ReadingOrder(order.to_vec()));
    }

    fn set_downloadable(&mut self, page: PageId, downloadable: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::Downloadable(page, downloadable));
    }

    fn set_settings_downloadable(&mut self, downloadable: bool) {
        self.events
            .borrow_mut()
            .push(ViewEvent::SettingsDownloadable(downloadable));
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rechteck mit 0.2 Breite und 0.1 Höhe ab (x, y).
pub fn rect(id: &str, polygon_type: &str, x: f64, y: f64) -> Polygon {
    Polygon::new(
        id,
        vec![
            Point::new(x, y),
            Point::new(x + 0.2, y),
            Point::new(x + 0.2, y + 0.1),
            Point::new(x, y + 0.1),
        ],
        polygon_type,
    )
}

pub fn segmentation(page: PageId, status: SegmentationStatus, segments: Vec<Polygon>) -> PageSegmentation {
    PageSegmentation {
        page,
        status,
        segments: segments.into_iter().map(|s| (s.id.clone(), s)).collect(),
    }
}

pub fn response(pages: Vec<PageSegmentation>) -> SegmentationResponse {
    SegmentationResponse {
        pages: pages.into_iter().map(|p| (p.page, p)).collect(),
    }
}

/// Buch mit vier Seiten; Seite 0 (A, B, C) und Seite 2 (D) sind segmentiert.
pub fn book_response() -> LoadBookResponse {
    let mut settings = BookSettings::default();
    settings
        .regions
        .insert("paragraph".into(), Region::new("paragraph"));
    settings.regions.insert("image".into(), Region::new("image"));

    LoadBookResponse {
        book: Book {
            id: 7,
            name: "Chronik".into(),
            pages: (0..4)
                .map(|id| BookPage {
                    id,
                    image: format!("{:04}.png", id),
                })
                .collect(),
        },
        segmentation: response(vec![
            segmentation(
                0,
                SegmentationStatus::Success,
                vec![
                    rect("A", "paragraph", 0.1, 0.1),
                    rect("B", "image", 0.1, 0.4),
                    rect("C", "paragraph", 0.1, 0.7),
                ],
            ),
            segmentation(
                2,
                SegmentationStatus::Success,
                vec![rect("D", "paragraph", 0.2, 0.2)],
            ),
        ]),
        segment_types: [("paragraph".to_string(), 0), ("image".to_string(), 1)]
            .into_iter()
            .collect(),
        settings,
    }
}

/// Controller und State mit geladenem Buch auf Seite 0.
pub fn loaded_editor() -> (EditorController, EditorState, Rc<RefCell<Vec<ViewEvent>>>) {
    init_logger();
    let events = Rc::new(RefCell::new(Vec::new()));
    let view = RecordingView {
        events: Rc::clone(&events),
    };
    let mut controller = EditorController::new();
    let mut state = EditorState::new().with_view(Box::new(view));

    controller
        .handle_intent(
            &mut state,
            EditorIntent::BookLoaded {
                response: book_response(),
                page: 0,
            },
        )
        .expect("BookLoaded sollte ohne Fehler durchlaufen");

    (controller, state, events)
}

pub fn reading_order(state: &EditorState, page: PageId) -> Vec<String> {
    state
        .model
        .export_settings(page)
        .map(|e| e.reading_order.clone())
        .unwrap_or_default()
}

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
