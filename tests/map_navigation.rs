//! End-to-end navigation scenarios over a bounded map.

use gimbal::{CameraController, Constraint, Frame, Mode, Properties};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn constrained_props() -> Properties {
    Properties {
        mode: Mode::Map,
        viewport_width: 800,
        viewport_height: 600,
        near_plane: 1.0,
        far_plane: 10_000.0,
        map_extent: [2000.0, 1000.0],
        map_constraint: Constraint::Full,
        map_min_distance: 100.0,
        ..Properties::default()
    }
}

fn map_frame(controller: &CameraController) -> (f32, Vec2) {
    match controller.current_frame() {
        Frame::Map { extent, center } => (extent, center),
        Frame::Orbit { .. } => unreachable!("map controller"),
    }
}

/// `|center| + visible_half_extent <= map_half_extent` on both axes.
fn assert_contained(controller: &CameraController) {
    let (extent, center) = map_frame(controller);
    let props = controller.properties();
    let vp_half_height = extent / 2.0;
    let vp_half_width = vp_half_height * props.aspect();
    let map_half_width = props.map_extent[0] / 2.0;
    let map_half_height = props.map_extent[1] / 2.0;
    assert!(
        center.x.abs() + vp_half_width <= map_half_width + 1e-2,
        "x overflow: center {center:?}, extent {extent}"
    );
    assert!(
        center.y.abs() + vp_half_height <= map_half_height + 1e-2,
        "y overflow: center {center:?}, extent {extent}"
    );
}

#[test]
fn symmetric_zoom_at_center_never_pans() {
    let mut controller = CameraController::new(&constrained_props());
    let (home_extent, home_center) = map_frame(&controller);
    assert!((home_extent - 1000.0).abs() < 1e-2);
    assert!(home_center.length() < 1e-3);

    // Rays sample pixel centers, so the exact viewport midpoint is
    // half a pixel shy of (width/2, height/2).
    for _ in 0..50 {
        controller.zoom(399.5, 299.5, 1.0);
    }

    let (extent, center) = map_frame(&controller);
    let props = controller.properties();
    let min_extent =
        2.0 * props.map_min_distance * (props.fov_radians() / 2.0).tan();
    assert!(extent >= min_extent - 1e-3);
    assert!(extent < home_extent);
    assert!(center.length() < 1e-2, "center drifted: {center:?}");
}

#[test]
fn random_navigation_stays_inside_the_map() {
    let mut controller = CameraController::new(&constrained_props());
    let mut rng = StdRng::seed_from_u64(7);
    assert_contained(&controller);

    for _ in 0..200 {
        let x = rng.random_range(0.0..800.0);
        let y = rng.random_range(0.0..600.0);
        match rng.random_range(0..3) {
            0 => {
                controller.zoom(x, y, rng.random_range(-3.0..3.0));
            }
            1 => {
                controller.grab_begin(x, y);
                let tx = rng.random_range(0.0..800.0);
                let ty = rng.random_range(0.0..600.0);
                controller.grab_update(tx, ty);
                controller.grab_end();
            }
            _ => {
                controller.grab_begin(x, y);
                // A multi-event drag toward one corner.
                for step in 1..=5 {
                    let t = step as f32 / 5.0;
                    controller.grab_update(x * (1.0 - t), y * (1.0 - t));
                }
                controller.grab_end();
            }
        }
        assert_contained(&controller);
    }
}

#[test]
fn grab_and_release_at_same_pixel_is_stationary_everywhere() {
    let mut controller = CameraController::new(&constrained_props());
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let x = rng.random_range(0.0..800.0);
        let y = rng.random_range(0.0..600.0);
        let eye0 = controller.eye();
        let target0 = controller.target();
        controller.grab_begin(x, y);
        controller.grab_update(x, y);
        controller.grab_end();
        assert!(
            (controller.eye() - eye0).length() < 1e-2,
            "eye moved for grab at ({x}, {y})"
        );
        assert!((controller.target() - target0).length() < 1e-2);
    }
}

#[test]
fn transition_between_bookmarks_lands_exactly() {
    let mut controller = CameraController::new(&constrained_props());
    let home = controller.current_frame();

    controller.zoom(600.0, 200.0, 3.0);
    controller.zoom(600.0, 200.0, 3.0);
    let zoomed = controller.current_frame();

    let transition = gimbal::Transition::new(home, zoomed);
    let duration = transition.duration_seconds();
    assert!(duration > 0.0);

    // Drive at a fixed tick; every intermediate frame is applicable.
    let mut elapsed = 0.0;
    while !transition.is_finished(elapsed) {
        controller.goto_frame(transition.frame_at(elapsed));
        elapsed += duration / 60.0;
    }
    controller.goto_frame(transition.frame_at(elapsed));
    let (extent_end, center_end) = map_frame(&controller);
    let (extent_goal, center_goal) = match zoomed {
        Frame::Map { extent, center } => (extent, center),
        Frame::Orbit { .. } => unreachable!(),
    };
    assert!((extent_end - extent_goal).abs() < 1e-2);
    assert!((center_end - center_goal).length() < 1e-2);
}
