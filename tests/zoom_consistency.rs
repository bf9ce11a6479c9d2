//! End-to-end drawing and zoom scenarios across pages.

use pro_paint::{
    Brush, Color, PageManager, Point, PointerEvent, Segment, WheelEvent, ZOOM_MAX, ZOOM_MIN,
    ZoomSteps, handle_pointer, handle_wheel,
};
use pro_paint::geometry::Size;
use proptest::prelude::*;

const VIEWPORT: Size = Size::new(1000.0, 800.0);

fn stroke(pages: &mut PageManager, brush: &Brush, points: &[(f64, f64)]) {
    let page = pages.active_mut();
    for (i, &(x, y)) in points.iter().enumerate() {
        let event = if i == 0 {
            PointerEvent::Press(Point::new(x, y))
        } else {
            PointerEvent::Drag(Point::new(x, y))
        };
        handle_pointer(page, brush, event, "");
    }
    handle_pointer(page, brush, PointerEvent::Release, "");
}

fn segments(pages: &PageManager) -> Vec<Segment> {
    pages.active().segments().collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn single_segment_doubles_under_zoom() {
    let mut pages = PageManager::default();
    let brush = Brush::default();
    stroke(&mut pages, &brush, &[(10.0, 10.0), (20.0, 10.0)]);

    let before = segments(&pages);
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].start, Point::new(10.0, 10.0));
    assert_eq!(before[0].end, Point::new(20.0, 10.0));
    assert_eq!(before[0].width, 5.0);

    assert!(pages.active_mut().apply_zoom(2.0));
    let after = segments(&pages);
    assert_eq!(after[0].start, Point::new(20.0, 20.0));
    assert_eq!(after[0].end, Point::new(40.0, 20.0));
    assert_eq!(after[0].width, 10.0);
    assert_eq!(pages.active().zoom_label(), "200%");
}

#[test]
fn zoom_below_floor_is_ignored() {
    let mut pages = PageManager::default();
    stroke(&mut pages, &Brush::default(), &[(10.0, 10.0), (20.0, 10.0)]);
    let before = segments(&pages);

    assert!(!pages.active_mut().apply_zoom(0.1));
    assert_eq!(pages.active().zoom_scale(), 1.0);
    assert_eq!(segments(&pages), before);
}

#[test]
fn switching_pages_resets_zoom_display_but_not_geometry() {
    let mut pages = PageManager::default();
    let brush = Brush::default();
    stroke(&mut pages, &brush, &[(10.0, 10.0), (20.0, 10.0)]);
    assert!(pages.active_mut().apply_zoom(1.5));
    assert_eq!(pages.active().zoom_label(), "150%");

    pages.add_page();
    assert!(pages.switch_to(1));
    assert!(pages.switch_to(0));

    let page = pages.active();
    assert_eq!(page.zoom_scale(), 1.0);
    assert_eq!(page.zoom_label(), "100%");
    let segment = page.segments().next().unwrap();
    assert!(close(segment.start.x, 15.0) && close(segment.start.y, 15.0));
    assert!(close(segment.end.x, 30.0) && close(segment.end.y, 15.0));
    assert!(close(segment.width, 7.5));
    assert_eq!(page.strokes().next().unwrap().base_width(), 5.0);
    assert_eq!(pages.page_label(), "Page 1 / 2");
}

#[test]
fn wheel_zoom_and_scroll_drive_drawing_position() {
    let mut pages = PageManager::default();
    let brush = Brush::new(Color::rgb(10, 20, 30), Color::WHITE, 4.0);
    let steps = ZoomSteps::default();
    let zoom = WheelEvent {
        delta_x: 0.0,
        delta_y: 1.0,
        zoom_modifier: true,
    };
    let scroll = WheelEvent {
        delta_x: -30.0,
        delta_y: -20.0,
        zoom_modifier: false,
    };

    assert!(handle_wheel(pages.active_mut(), zoom, &steps, VIEWPORT));
    assert!(handle_wheel(pages.active_mut(), scroll, &steps, VIEWPORT));
    stroke(&mut pages, &brush, &[(0.0, 0.0), (10.0, 0.0)]);

    let drawn = segments(&pages);
    assert_eq!(drawn[0].start, Point::new(30.0, 20.0));
    assert!(close(drawn[0].width, 4.4));
    assert_eq!(drawn[0].color, Color::rgb(10, 20, 30));
}

fn zoom_factor() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.1), Just(0.9), 0.6f64..1.6]
}

fn stroke_points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0f64..900.0, 0.0f64..700.0), 2..6)
}

proptest! {
    #[test]
    fn accepted_zooms_preserve_similarity(
        first in stroke_points(),
        second in stroke_points(),
        sizes in (1.0f64..50.0, 1.0f64..50.0),
        factors in prop::collection::vec(zoom_factor(), 1..20),
    ) {
        let mut pages = PageManager::default();
        let mut brush = Brush::default();
        brush.set_size(sizes.0);
        stroke(&mut pages, &brush, &first);
        brush.set_size(sizes.1);
        stroke(&mut pages, &brush, &second);

        let points = |pages: &PageManager| -> Vec<Point> {
            pages.active().strokes().flat_map(|s| s.points().to_vec()).collect()
        };
        let original = points(&pages);
        let reference = original[0].distance(original[original.len() - 1]);

        for factor in factors {
            let page = pages.active_mut();
            let scale = page.zoom_scale();
            let accepted = page.apply_zoom(factor);
            let target = scale * factor;
            prop_assert_eq!(accepted, (ZOOM_MIN - 1e-9..=ZOOM_MAX + 1e-9).contains(&target));
            if !accepted {
                prop_assert_eq!(page.zoom_scale(), scale);
            }
        }

        let page = pages.active();
        let widths: Vec<f64> = page.strokes().map(|s| s.width()).collect();
        prop_assert!(close(widths[0] / widths[1], sizes.0 / sizes.1));
        for s in page.strokes() {
            prop_assert!(close(s.width(), s.base_width() * page.zoom_scale()));
        }

        let scaled = points(&pages);
        let scaled_reference = scaled[0].distance(scaled[scaled.len() - 1]);
        if reference > 1.0 {
            for (a, b) in original.iter().zip(&scaled) {
                let d0 = a.distance(original[0]) / reference;
                let d1 = b.distance(scaled[0]) / scaled_reference;
                prop_assert!((d0 - d1).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn rejected_zoom_changes_nothing(points in stroke_points(), factor in 5.01f64..100.0) {
        let mut pages = PageManager::default();
        stroke(&mut pages, &Brush::default(), &points);
        let before = segments(&pages);

        prop_assert!(!pages.active_mut().apply_zoom(factor));
        prop_assert!(!pages.active_mut().apply_zoom(1.0 / factor));
        prop_assert_eq!(segments(&pages), before);
        prop_assert_eq!(pages.active().zoom_label(), "100%");
    }
}
