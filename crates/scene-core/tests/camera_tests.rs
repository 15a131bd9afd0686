use glam::{Vec3, Vec4};
use scene_core::*;

#[test]
fn projection_waits_for_explicit_update() {
    let mut cam = PerspectiveCamera::new(75.0, 4.0 / 3.0, 0.1, 1000.0);
    let before = cam.projection_matrix();
    cam.aspect = 2.0;
    assert_eq!(cam.projection_matrix(), before);
    cam.update_projection_matrix();
    assert_ne!(cam.projection_matrix(), before);
}

#[test]
fn projection_uses_vertical_fov_in_degrees() {
    let cam = PerspectiveCamera::new(90.0, 1.0, 0.1, 1000.0);
    // cot(45deg) == 1 on both axes for a square aspect.
    let m = cam.projection_matrix();
    assert!((m.x_axis.x - 1.0).abs() < 1e-5);
    assert!((m.y_axis.y - 1.0).abs() < 1e-5);
}

#[test]
fn origin_projects_to_screen_center() {
    let mut cam = PerspectiveCamera::new(75.0, 800.0 / 600.0, 0.1, 1000.0);
    cam.eye = Vec3::new(0.0, 0.0, 5.0);
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn eye_on_target_still_has_a_view() {
    let cam = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0);
    assert!(cam.view_matrix().is_finite());
}
