use super::*;

#[test]
fn clear_drops_the_previous_frame() {
    let mut s = RecordingSurface::new();
    s.clear();
    s.fill_circle(Point::new(1.0, 2.0), 3.0, Rgba8::WHITE);
    s.clear();
    s.stroke_line(Point::ZERO, Point::new(4.0, 4.0), Rgba8::WHITE);

    assert_eq!(s.clears(), 2);
    assert_eq!(
        s.commands(),
        &[
            DrawCommand::Clear,
            DrawCommand::Line {
                start: Point::ZERO,
                end: Point::new(4.0, 4.0),
                color: Rgba8::WHITE,
            },
        ]
    );
}

#[test]
fn arcs_record_their_sweep() {
    let mut s = RecordingSurface::new();
    s.stroke_arc(Point::new(5.0, 5.0), 2.0, 0.0, 1.0, 3.0, Rgba8::WHITE);
    let Some(DrawCommand::Arc {
        start_angle,
        end_angle,
        width,
        ..
    }) = s.commands().first()
    else {
        panic!("expected an arc");
    };
    assert_eq!((*start_angle, *end_angle, *width), (0.0, 1.0, 3.0));
}
