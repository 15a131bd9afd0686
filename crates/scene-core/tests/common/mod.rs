// Shared helpers for scene-core integration tests.

#![allow(dead_code)]

use scene_core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
pub struct RenderLog {
    pub draws: usize,
    pub sizes: Vec<(u32, u32)>,
    pub mesh_positions: Vec<glam::Vec3>,
}

/// Renderer that records calls instead of drawing.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub log: Rc<RefCell<RenderLog>>,
    pub fail_with: Option<SceneError>,
}

impl Renderer for RecordingRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().sizes.push((width, height));
    }

    fn render(&mut self, scene: &Scene, _camera: &PerspectiveCamera) -> Result<(), SceneError> {
        let mut log = self.log.borrow_mut();
        log.draws += 1;
        if let Some(id) = scene.object_by_name(MESH_NAME) {
            if let Some(node) = scene.get(id) {
                log.mesh_positions.push(node.transform.position);
            }
        }
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

pub fn controller(width: u32, height: u32) -> SceneController<RecordingRenderer> {
    SceneController::new(SceneConfig::default(), width, height, RecordingRenderer::default())
        .expect("controller")
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
