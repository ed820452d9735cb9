use super::*;
use crate::core::{Cut, ExportSettings, PageId, PageState, Point, Polygon, Region};
use indexmap::IndexMap;

const PAGE: PageId = 0;

fn rect(id: &str, y: f64, polygon_type: &str) -> Polygon {
    Polygon::new(
        id,
        vec![
            Point::new(0.1, y),
            Point::new(0.9, y),
            Point::new(0.9, y + 0.05),
            Point::new(0.1, y + 0.05),
        ],
        polygon_type,
    )
}

fn model_with_results() -> SegmentationModel {
    let mut model = SegmentationModel::new();
    let results: IndexMap<String, Polygon> = [
        rect("A", 0.1, "paragraph"),
        rect("B", 0.3, "image"),
        rect("C", 0.5, "paragraph"),
    ]
    .into_iter()
    .map(|p| (p.id.clone(), p))
    .collect();
    model.apply_external_segmentation(PAGE, results);
    model.insert_region(PAGE, Region::new("image"), None);
    model.ensure_export_settings(PAGE);
    model
}

fn snapshot(model: &SegmentationModel) -> (Option<PageState>, Option<ExportSettings>) {
    (
        model.page(PAGE).cloned(),
        model.export_settings(PAGE).cloned(),
    )
}

fn order(model: &SegmentationModel) -> Vec<String> {
    model
        .export_settings(PAGE)
        .map(|e| e.reading_order.clone())
        .unwrap_or_default()
}

#[test]
fn add_fixed_segment_appends_to_reading_order_and_undoes() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut action = AddFixedSegment::new(PAGE, rect("f1", 0.7, "heading"));
    action.execute(&mut model);
    assert!(model.page(PAGE).unwrap().fixed_segments.contains_key("f1"));
    assert_eq!(order(&model), vec!["A", "C", "f1"]);

    action.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn add_fixed_image_segment_stays_out_of_reading_order() {
    let mut model = model_with_results();
    let mut action = AddFixedSegment::new(PAGE, rect("f2", 0.7, "image"));
    action.execute(&mut model);
    assert_eq!(order(&model), vec!["A", "C"]);
}

#[test]
fn fixing_a_result_segment_ignores_the_result() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut action = AddFixedSegment::new(PAGE, rect("A", 0.1, "heading"));
    action.execute(&mut model);
    let ignored = &model.export_settings(PAGE).unwrap().segments_to_ignore;
    assert!(ignored.contains("A"));
    // Bereits in der Lesereihenfolge: kein Duplikat
    assert_eq!(order(&model), vec!["A", "C"]);

    action.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn adding_existing_fixed_segment_is_refused_and_undo_keeps_previous() {
    let mut model = model_with_results();
    model.insert_fixed_segment(PAGE, rect("f1", 0.7, "heading"), None);
    let before = snapshot(&model);

    let mut action = AddFixedSegment::new(PAGE, rect("f1", 0.2, "paragraph"));
    action.execute(&mut model);
    assert_eq!(snapshot(&model), before);
    action.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn removing_result_segment_ignores_it_and_restores_order_position() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut action = RemoveSegment::new(PAGE, "A");
    action.execute(&mut model);
    assert!(model.page(PAGE).unwrap().result_segments.contains_key("A"));
    assert!(model
        .export_settings(PAGE)
        .unwrap()
        .segments_to_ignore
        .contains("A"));
    assert_eq!(order(&model), vec!["C"]);

    action.undo(&mut model);
    assert_eq!(order(&model), vec!["A", "C"]);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn removing_fixed_segment_deletes_it_structurally() {
    let mut model = model_with_results();
    let mut add = AddFixedSegment::new(PAGE, rect("f1", 0.7, "heading"));
    add.execute(&mut model);
    let before = snapshot(&model);

    let mut remove = RemoveSegment::new(PAGE, "f1");
    remove.execute(&mut model);
    assert!(!model.page(PAGE).unwrap().fixed_segments.contains_key("f1"));
    assert!(!model
        .export_settings(PAGE)
        .unwrap()
        .segments_to_ignore
        .contains("f1"));

    remove.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn stale_reference_is_a_noop() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut remove = RemoveSegment::new(PAGE, "gone");
    remove.execute(&mut model);
    remove.undo(&mut model);
    let mut change = ChangeSegmentType::new(PAGE, "gone", "heading");
    change.execute(&mut model);
    change.undo(&mut model);
    let mut transform = TransformCut::new(PAGE, "gone", vec![Point::default(); 2]);
    transform.execute(&mut model);
    transform.undo(&mut model);

    assert_eq!(snapshot(&model), before);
}

#[test]
fn change_type_of_result_segment_uses_override() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut action = ChangeSegmentType::new(PAGE, "C", "heading");
    action.execute(&mut model);
    assert_eq!(
        model.export_settings(PAGE).unwrap().changed_types["C"],
        "heading"
    );
    assert_eq!(
        model.page(PAGE).unwrap().result_segments["C"].polygon_type,
        "paragraph"
    );

    action.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn nested_type_overrides_restore_previous_override() {
    let mut model = model_with_results();
    let mut first = ChangeSegmentType::new(PAGE, "C", "heading");
    let mut second = ChangeSegmentType::new(PAGE, "C", "caption");
    first.execute(&mut model);
    second.execute(&mut model);
    second.undo(&mut model);
    assert_eq!(
        model.export_settings(PAGE).unwrap().changed_types["C"],
        "heading"
    );
}

#[test]
fn transform_segment_restores_points() {
    let mut model = model_with_results();
    model.insert_fixed_segment(PAGE, rect("f1", 0.7, "heading"), None);
    let before = snapshot(&model);

    let mut action = TransformSegment::new(PAGE, "f1", vec![Point::new(0.0, 0.0)]);
    action.execute(&mut model);
    assert_eq!(model.page(PAGE).unwrap().fixed_segments["f1"].points.len(), 1);
    action.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn composite_undo_restores_state_regardless_of_size() {
    for k in 1..=4 {
        let mut model = model_with_results();
        let before = snapshot(&model);

        let mut children: Vec<Box<dyn Action>> = Vec::new();
        for i in 0..k {
            children.push(Box::new(AddFixedSegment::new(
                PAGE,
                rect(&format!("f{i}"), 0.6 + i as f64 * 0.05, "paragraph"),
            )));
        }
        children.push(Box::new(RemoveSegment::new(PAGE, "f0")));
        children.push(Box::new(ChangeSegmentType::new(PAGE, "A", "heading")));
        let mut composite = CompositeAction::new("Test", children);
        assert_eq!(composite.len(), k + 2);

        composite.execute(&mut model);
        assert_ne!(snapshot(&model), before);
        composite.undo(&mut model);
        assert_eq!(snapshot(&model), before, "k = {k}");
    }
}

#[test]
fn merge_composite_ignores_constituents_and_adds_merged_segment() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut composite = CompositeAction::merge_segments(
        PAGE,
        vec!["A".into(), "C".into()],
        rect("m1", 0.1, "paragraph"),
    );
    assert_eq!(composite.len(), 4);
    composite.execute(&mut model);
    let export = model.export_settings(PAGE).unwrap();
    assert!(export.segments_to_ignore.contains("A"));
    assert!(export.segments_to_ignore.contains("C"));
    assert_eq!(export.segments_to_merge["m1"], vec!["A", "C"]);
    assert_eq!(export.reading_order, vec!["m1"]);

    composite.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn region_polygon_type_change_moves_between_regions() {
    let mut model = model_with_results();
    let mut add = AddRegionPolygon::new(PAGE, "image", rect("r1", 0.2, "whatever"));
    add.execute(&mut model);
    assert_eq!(
        model.page(PAGE).unwrap().find_region_polygon("r1").unwrap().polygon_type,
        "image"
    );
    let before = snapshot(&model);

    let mut change = ChangeRegionPolygonType::new(PAGE, "r1", "caption");
    change.execute(&mut model);
    let page = model.page(PAGE).unwrap();
    assert_eq!(page.region_type_of("r1"), Some("caption"));
    assert_eq!(page.find_region_polygon("r1").unwrap().polygon_type, "caption");

    change.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn add_region_polygon_creates_and_removes_region() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut add = AddRegionPolygon::new(PAGE, "footer", rect("r9", 0.9, "footer"));
    add.execute(&mut model);
    assert!(model.page(PAGE).unwrap().regions.contains_key("footer"));
    add.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn remove_complete_region_restores_position() {
    let mut model = model_with_results();
    model.insert_region(PAGE, Region::new("caption"), None);
    let mut add = AddRegionPolygon::new(PAGE, "image", rect("r1", 0.2, "image"));
    add.execute(&mut model);
    let before = snapshot(&model);

    let mut remove = RemoveCompleteRegion::new(PAGE, "image");
    remove.execute(&mut model);
    assert!(!model.page(PAGE).unwrap().regions.contains_key("image"));
    remove.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn region_settings_change_and_undo() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut change = ChangeRegionSettings::new(PAGE, "image", 0.25, 3);
    change.execute(&mut model);
    let region = &model.page(PAGE).unwrap().regions["image"];
    approx::assert_relative_eq!(region.min_size, 0.25);
    assert_eq!(region.max_occurrences, 3);

    change.undo(&mut model);
    assert_eq!(snapshot(&model), before);

    let mut create = ChangeRegionSettings::new(PAGE, "marginalia", 0.1, 1);
    create.execute(&mut model);
    assert!(model.page(PAGE).unwrap().regions.contains_key("marginalia"));
    create.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn cut_lifecycle_is_reversible() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let line = vec![Point::new(0.0, 0.5), Point::new(1.0, 0.5)];
    let mut add = AddCut::new(PAGE, Cut::new("c1", line));
    let mut transform = TransformCut::new(PAGE, "c1", vec![Point::new(0.5, 0.0), Point::new(0.5, 1.0)]);
    let mut remove = RemoveCut::new(PAGE, "c1");

    add.execute(&mut model);
    transform.execute(&mut model);
    approx::assert_relative_eq!(model.page(PAGE).unwrap().cuts["c1"].points[0].x, 0.5);
    remove.execute(&mut model);
    assert!(model.page(PAGE).unwrap().cuts.is_empty());

    remove.undo(&mut model);
    transform.undo(&mut model);
    approx::assert_relative_eq!(model.page(PAGE).unwrap().cuts["c1"].points[0].x, 0.0);
    add.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}

#[test]
fn reading_order_actions_are_reversible() {
    let mut model = model_with_results();
    let before = snapshot(&model);

    let mut change = ChangeReadingOrder::new(PAGE, vec!["C".into(), "A".into()]);
    change.execute(&mut model);
    assert_eq!(order(&model), vec!["C", "A"]);

    let mut remove = RemoveFromReadingOrder::new(PAGE, "C");
    remove.execute(&mut model);
    assert_eq!(order(&model), vec!["A"]);

    remove.undo(&mut model);
    assert_eq!(order(&model), vec!["C", "A"]);
    change.undo(&mut model);
    assert_eq!(snapshot(&model), before);
}
