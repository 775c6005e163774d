use super::*;
use crate::render::surface::{DrawCommand, RecordingSurface};

#[test]
fn wheel_draws_gradient_ticks_and_a_closed_ring() {
    let geometry = PlotGeometry::for_canvas_size(200);
    let mut s = RecordingSurface::new();
    s.clear();
    draw_color_wheel(&mut s, &geometry, 0.04);

    let lines = s
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines as u32, WHEEL_TICKS * GRADIENT_STOPS);

    let arcs: Vec<(f64, f64, f64)> = s
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Arc {
                radius,
                start_angle,
                end_angle,
                ..
            } => Some((*radius, *start_angle, *end_angle)),
            _ => None,
        })
        .collect();
    assert_eq!(arcs.len() as u32, WHEEL_TICKS);
    assert!(arcs.iter().all(|(r, _, _)| *r == 98.0));
    assert_eq!(arcs[0].1, 0.0);
    assert!((arcs[arcs.len() - 1].2 - TAU).abs() < 1e-9);
}

#[test]
fn tick_alpha_follows_setting() {
    let geometry = PlotGeometry::for_canvas_size(100);
    let mut s = RecordingSurface::new();
    draw_color_wheel(&mut s, &geometry, 0.5);
    let Some(DrawCommand::Line { start, color, .. }) = s.commands().first() else {
        panic!("expected a tick line first");
    };
    assert_eq!(*start, geometry.center);
    assert_eq!(color.a, 128);
}
