mod common;

use common::*;
use glam::Vec3;
use scene_core::*;

const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

fn transform(c: &SceneController<RecordingRenderer>, id: NodeId) -> Transform {
    c.scene.get(id).expect("node").transform
}

#[test]
fn init_builds_the_four_nodes() {
    let c = controller(800, 600);
    assert_eq!(c.scene.len(), 4);
    for name in [MESH_NAME, LINE_NAME, LIGHT_NAME, AMBIENT_NAME] {
        assert!(c.scene.object_by_name(name).is_some(), "missing {name}");
    }
    let nodes = c.nodes();
    assert_eq!(c.scene.object_by_name(MESH_NAME), Some(nodes.mesh));
    assert_eq!(c.scene.object_by_name(LINE_NAME), Some(nodes.line));
    assert_eq!(c.scene.object_by_name(LIGHT_NAME), Some(nodes.light));
    assert_eq!(c.scene.object_by_name(AMBIENT_NAME), Some(c.ambient()));
}

#[test]
fn init_uses_fixed_camera_and_light_parameters() {
    let c = controller(800, 600);
    assert_eq!(c.camera.fov_degrees, 75.0);
    assert_eq!(c.camera.near, 0.1);
    assert_eq!(c.camera.far, 1000.0);
    assert!(approx(c.camera.aspect, 800.0 / 600.0));
    assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 5.0));

    let light = c.scene.get(c.nodes().light).unwrap();
    assert_eq!(light.transform.position, Vec3::new(5.0, 5.0, 5.0));
    match &light.kind {
        NodeKind::PointLight(p) => {
            assert_eq!(p.intensity, 20.0);
            assert_eq!(p.distance, 100.0);
            assert_eq!(p.color.to_hex(), 0x4CAF50);
        }
        other => panic!("expected point light, got {other:?}"),
    }
    match &c.scene.get(c.nodes().mesh).unwrap().kind {
        NodeKind::Mesh(m) => {
            assert_eq!(m.material.opacity, 0.2);
            assert!(m.material.is_transparent());
        }
        other => panic!("expected mesh, got {other:?}"),
    }
    match &c.scene.get(c.ambient()).unwrap().kind {
        NodeKind::AmbientLight(a) => {
            assert_eq!(a.intensity, 5.0);
            assert_eq!(a.color.to_hex(), 0x404040);
        }
        other => panic!("expected ambient light, got {other:?}"),
    }
    assert_eq!(c.scene.background.to_hex(), 0x121212);
}

#[test]
fn init_sizes_the_renderer() {
    let c = controller(800, 600);
    assert_eq!(c.renderer.log.borrow().sizes, vec![(800, 600)]);
    assert_eq!(c.size(), (800, 600));
}

#[test]
fn init_rejects_empty_container() {
    let err = SceneController::new(SceneConfig::default(), 0, 600, RecordingRenderer::default())
        .err()
        .expect("error");
    assert_eq!(err, SceneError::EmptyViewport { width: 0, height: 600 });
}

#[test]
fn init_rejects_invalid_config() {
    let config = SceneConfig {
        near: 10.0,
        far: 1.0,
        ..SceneConfig::default()
    };
    let res = SceneController::new(config, 800, 600, RecordingRenderer::default());
    assert!(matches!(res, Err(SceneError::InvalidConfig(_))));
}

#[test]
fn resize_is_idempotent() {
    let mut once = controller(800, 600);
    once.resize(1024, 512);
    let mut twice = controller(800, 600);
    twice.resize(1024, 512);
    twice.resize(1024, 512);

    assert_eq!(once.camera.aspect, twice.camera.aspect);
    assert_eq!(once.camera.projection_matrix(), twice.camera.projection_matrix());
    assert_eq!(once.size(), twice.size());
    assert_eq!(twice.camera.aspect, 2.0);
    assert_eq!(twice.renderer.log.borrow().sizes.last(), Some(&(1024, 512)));
}

#[test]
fn resize_updates_projection() {
    let mut c = controller(800, 600);
    let before = c.camera.projection_matrix();
    c.resize(600, 800);
    assert!(approx(c.camera.aspect, 0.75));
    assert_ne!(c.camera.projection_matrix(), before);
}

#[test]
fn resize_ignores_zero_dimension() {
    let mut c = controller(800, 600);
    c.resize(0, 300);
    assert!(approx(c.camera.aspect, 800.0 / 600.0));
    assert_eq!(c.renderer.log.borrow().sizes.len(), 1);
    assert_eq!(c.size(), (800, 600));
}

#[test]
fn rotation_accumulates_per_frame() {
    let mut c = controller(800, 600);
    let n = 250;
    for _ in 0..n {
        c.frame().unwrap();
    }
    let mesh = transform(&c, c.nodes().mesh);
    let line = transform(&c, c.nodes().line);
    assert!((mesh.rotation.x - n as f32 * 0.003).abs() < 1e-4);
    assert!((mesh.rotation.y - n as f32 * 0.005).abs() < 1e-4);
    assert_eq!(mesh.rotation.z, 0.0);
    assert_eq!(mesh, line);
    assert_eq!(c.renderer.log.borrow().draws, n);
}

#[test]
fn rotation_is_not_wrapped() {
    let mut c = controller(800, 600);
    for _ in 0..3000 {
        c.animate();
    }
    // 3000 * 0.005 = 15 rad, well past 2*pi
    let mesh = transform(&c, c.nodes().mesh);
    assert!(mesh.rotation.y > std::f32::consts::TAU * 2.0);
}

#[test]
fn parallax_stays_bounded() {
    let mut c = controller(800, 600);
    for (cx, cy) in [(0.0, 0.0), (800.0, 600.0), (800.0, 0.0), (0.0, 600.0), (123.0, 456.0)] {
        c.pointer_moved(cx, cy, VIEWPORT);
        c.frame().unwrap();
        let mesh = transform(&c, c.nodes().mesh).position;
        let line = transform(&c, c.nodes().line).position;
        let light = transform(&c, c.nodes().light).position;
        assert!(mesh.x.abs() <= 0.5 && mesh.y.abs() <= 0.5);
        assert_eq!(mesh, line);
        assert!(light.x.abs() <= 8.0 && light.y.abs() <= 8.0);
        assert_eq!(light.z, 5.0);
    }
}

#[test]
fn positions_are_absolute_not_incremental() {
    let mut c = controller(800, 600);
    c.pointer_moved(800.0, 0.0, VIEWPORT);
    for _ in 0..10 {
        c.frame().unwrap();
    }
    assert_eq!(transform(&c, c.nodes().mesh).position, Vec3::new(0.5, 0.5, 0.0));
    c.pointer_moved(400.0, 300.0, VIEWPORT);
    c.frame().unwrap();
    assert_eq!(transform(&c, c.nodes().mesh).position, Vec3::ZERO);
    assert_eq!(transform(&c, c.nodes().light).position, Vec3::new(0.0, 0.0, 5.0));
}

#[test]
fn missing_node_still_draws_once() {
    let mut c = controller(800, 600);
    let light = c.nodes().light;
    c.scene.remove(light);
    c.pointer_moved(800.0, 0.0, VIEWPORT);

    assert!(c.frame().is_ok());
    assert_eq!(c.renderer.log.borrow().draws, 1);
    let mesh = transform(&c, c.nodes().mesh);
    assert_eq!(mesh, Transform::default());
}

#[test]
fn render_failure_is_reported_after_update() {
    let renderer = RecordingRenderer {
        fail_with: Some(SceneError::Render("lost".into())),
        ..Default::default()
    };
    let mut c = SceneController::new(SceneConfig::default(), 800, 600, renderer).unwrap();
    assert_eq!(c.frame(), Err(SceneError::Render("lost".into())));
    assert!(approx(transform(&c, c.nodes().mesh).rotation.x, 0.003));
}

#[test]
fn end_to_end_pointer_then_frame() {
    let mut c = controller(800, 600);
    c.frame().unwrap();
    let before = transform(&c, c.nodes().mesh).rotation;

    c.pointer_moved(800.0, 0.0, VIEWPORT);
    assert_eq!(c.pointer, PointerState { x: 1.0, y: 1.0 });
    c.frame().unwrap();

    let mesh = transform(&c, c.nodes().mesh);
    let line = transform(&c, c.nodes().line);
    let light = transform(&c, c.nodes().light);
    assert_eq!(mesh.position, Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(line.position, Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(light.position, Vec3::new(8.0, 8.0, 5.0));
    assert!(approx(mesh.rotation.x - before.x, 0.003));
    assert!(approx(mesh.rotation.y - before.y, 0.005));
    assert_eq!(c.renderer.log.borrow().mesh_positions.last(), Some(&Vec3::new(0.5, 0.5, 0.0)));
}
