use super::*;
use crate::{
    foundation::core::Point,
    model::{
        color::Rgb8,
        palette::PaletteColor,
        settings::Settings,
    },
    render::surface::{DrawCommand, RecordingSurface},
};

fn red_and_blue() -> Vec<Screenshot> {
    vec![Screenshot {
        src: "film/one.jpg".to_string(),
        colors: vec![
            PaletteColor {
                color: Rgb8::new(255, 0, 0),
                amount: 0.6,
            },
            PaletteColor {
                color: Rgb8::new(0, 0, 255),
                amount: 0.4,
            },
        ],
    }]
}

fn plot(settings: Settings) -> PlotController {
    PlotController::new("film", &red_and_blue(), SharedSettings::new(settings)).unwrap()
}

#[test]
fn nothing_renders_until_draw_is_called() {
    let mut p = plot(Settings::default());
    let mut surface = RecordingSurface::new();
    assert!(p.is_idle());
    assert_eq!(p.tick(&mut surface), None);
    assert_eq!(surface.clears(), 0);
}

#[test]
fn draw_twice_runs_exactly_one_frame() {
    let mut p = plot(Settings::default());
    let mut surface = RecordingSurface::new();
    p.draw();
    p.draw();
    assert_eq!(p.host().live(), 1);
    assert_eq!(p.host().stats().cancelled, 1);

    let report = p.tick(&mut surface).unwrap();
    assert_eq!(report.frame, FrameIndex(0));
    assert_eq!(surface.clears(), 1);
    assert_eq!(p.frames_rendered(), 1);
}

#[test]
fn first_frame_snaps_and_stops() {
    let mut p = plot(Settings::default());
    let mut surface = RecordingSurface::new();
    p.draw();
    let report = p.tick(&mut surface).unwrap();
    assert!(!report.animating);
    assert!(p.is_idle());
    assert_eq!(p.tick(&mut surface), None);
}

#[test]
fn connections_are_painted_under_swatches() {
    let mut p = plot(Settings::default());
    let mut surface = RecordingSurface::new();
    p.draw();
    p.tick(&mut surface).unwrap();

    let cmds = surface.commands();
    assert_eq!(cmds[0], DrawCommand::Clear);
    let first_swatch = cmds
        .iter()
        .position(|c| {
            matches!(c, DrawCommand::Circle { color, .. } if *color != CONNECTION_CIRCLE_COLOR)
        })
        .unwrap();
    let last_connection = cmds
        .iter()
        .rposition(|c| match c {
            DrawCommand::Line { color, .. } => *color == CONNECTION_LINE_COLOR,
            DrawCommand::Circle { color, .. } => *color == CONNECTION_CIRCLE_COLOR,
            _ => false,
        })
        .unwrap();
    assert!(last_connection < first_swatch);
    let lines = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, 2);
}

#[test]
fn settles_on_hue_circle_with_connection_at_midpoint() {
    let settings = Settings {
        color_threshold: 0.0,
        show_color_connections: true,
        ..Settings::default()
    };
    let mut p = plot(settings);
    let mut surface = RecordingSurface::new();
    p.draw();
    let stats = p.run_until_settled(&mut surface, 1_000);
    assert!(stats.converged);

    let g = *p.geometry();
    let expected_red = g.polar(0.0, g.max_magnitude / 2.0);
    let expected_blue = g.polar(240.0, g.max_magnitude / 2.0);
    let red = p.swatches().iter().find(|s| s.rgb == Rgb8::new(255, 0, 0)).unwrap();
    let blue = p.swatches().iter().find(|s| s.rgb == Rgb8::new(0, 0, 255)).unwrap();
    let red_pos = red.position.unwrap();
    let blue_pos = blue.position.unwrap();
    assert!(red_pos.distance(expected_red) < 1e-9);
    assert!(blue_pos.distance(expected_blue) < 1e-9);
    assert!((red_pos.distance(g.center) - g.max_magnitude / 2.0).abs() < 1e-9);
    assert!((blue_pos.distance(g.center) - g.max_magnitude / 2.0).abs() < 1e-9);

    let c = &p.connections()[0];
    assert!(c.position.unwrap().distance(red_pos.midpoint(blue_pos)) < 1e-9);
}

#[test]
fn settings_change_animates_over_several_frames() {
    let shared = SharedSettings::new(Settings::default());
    let mut p = PlotController::new("film", &red_and_blue(), shared.clone()).unwrap();
    let mut surface = RecordingSurface::new();
    p.draw();
    assert_eq!(p.run_until_settled(&mut surface, 100).frames, 1);

    shared.update(|s| {
        s.plot_saturation = true;
        s.color_threshold = 50.0;
    });
    assert!(p.is_idle());
    p.draw();
    let stats = p.run_until_settled(&mut surface, 1_000);
    assert!(stats.converged);
    assert!(stats.frames > 10, "took {} frames", stats.frames);

    let blue = p.swatches().iter().find(|s| s.amount == 0.4).unwrap();
    assert_eq!(blue.radius, Some(0.0));
    let red = p.swatches().iter().find(|s| s.amount == 0.6).unwrap();
    assert_eq!(red.radius, Some(15.0));
    let c = &p.connections()[0];
    assert_eq!(c.position, red.position);
}

#[test]
fn stale_handles_are_ignored() {
    let mut p = plot(Settings::default());
    let mut surface = RecordingSurface::new();
    p.draw();
    assert_eq!(p.on_frame(FrameHandle(999), &mut surface), None);
    assert!(!p.is_idle());
}

#[test]
fn color_wheel_is_drawn_behind_everything() {
    let mut p = plot(Settings {
        show_color_wheel: true,
        ..Settings::default()
    });
    let mut surface = RecordingSurface::new();
    p.draw();
    p.tick(&mut surface).unwrap();
    let cmds = surface.commands();
    let arcs = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::Arc { .. }))
        .count();
    assert_eq!(arcs, crate::render::wheel::WHEEL_TICKS as usize);
    let last_arc = cmds
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Arc { .. }))
        .unwrap();
    let first_circle = cmds
        .iter()
        .position(|c| matches!(c, DrawCommand::Circle { .. }))
        .unwrap();
    assert!(last_arc < first_circle);
}

#[test]
fn invalid_settings_are_rejected_at_construction() {
    let bad = Settings {
        color_threshold: 150.0,
        ..Settings::default()
    };
    assert!(PlotController::new("film", &red_and_blue(), SharedSettings::new(bad)).is_err());
}

#[test]
fn geometry_is_fixed_at_construction() {
    let shared = SharedSettings::new(Settings {
        canvas_size: 100,
        ..Settings::default()
    });
    let p = PlotController::new("film", &red_and_blue(), shared.clone()).unwrap();
    shared.update(|s| s.canvas_size = 800);
    assert_eq!(p.geometry().center, Point::new(50.0, 50.0));
}
