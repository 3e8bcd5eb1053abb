use super::*;

#[test]
fn default_canvas_is_card_sized() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (500, 707));
    assert_eq!(c.surface_size().unwrap(), (500, 707));
}

#[test]
fn canvas_surface_size_rejects_zero_and_oversize() {
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .surface_size()
        .is_err()
    );
    assert!(
        Canvas {
            width: 10,
            height: 70_000
        }
        .surface_size()
        .is_err()
    );
}

#[test]
fn index_range_contains_boundaries() {
    let r = IndexRange::new(2, 5).unwrap();
    assert!(!r.contains(1));
    assert!(r.contains(2));
    assert!(r.contains(4));
    assert!(!r.contains(5));
    assert_eq!(r.len(), 3);
    assert_eq!(r.last(), Some(4));
}

#[test]
fn index_range_rejects_reversed_bounds() {
    assert!(IndexRange::new(5, 2).is_err());
    let empty = IndexRange::new(3, 3).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.last(), None);
    assert_eq!(empty.into_iter().count(), 0);
}

#[test]
fn default_index_range_covers_thirty_three_cards() {
    let r = IndexRange::default();
    let all: Vec<u32> = r.into_iter().collect();
    assert_eq!(all.len(), 33);
    assert_eq!(all.first(), Some(&0));
    assert_eq!(all.last(), Some(&32));
}

#[test]
fn text_origin_translates() {
    let o = TextOrigin::default();
    assert_eq!(o.to_affine(), Affine::translate(Vec2::new(10.0, 70.0)));
    assert!(o.is_finite());
    assert!(!TextOrigin { x: f32::NAN, y: 0.0 }.is_finite());
}
