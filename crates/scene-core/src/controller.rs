//! Owns the scene, camera and renderer and applies the per-frame animation.

use crate::camera::PerspectiveCamera;
use crate::config::SceneConfig;
use crate::constants::{AMBIENT_NAME, LIGHT_NAME, LINE_NAME, MESH_NAME};
use crate::error::SceneError;
use crate::geometry::{EdgesGeometry, Geometry};
use crate::pointer::{PointerState, Viewport};
use crate::renderer::Renderer;
use crate::scene::{
    AmbientLight, BasicMaterial, LineSegments, Mesh, Node, NodeId, NodeKind, PointLight, Scene,
};
use glam::Vec3;
use std::rc::Rc;

/// Handles to the nodes the frame step mutates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DynamicNodes {
    pub mesh: NodeId,
    pub line: NodeId,
    pub light: NodeId,
}

pub struct SceneController<R: Renderer> {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub renderer: R,
    pub pointer: PointerState,
    nodes: DynamicNodes,
    ambient: NodeId,
    config: SceneConfig,
    size: (u32, u32),
}

impl<R: Renderer> SceneController<R> {
    /// Build the scene for a container of `width` x `height` pixels and size
    /// the renderer to match.
    pub fn new(
        config: SceneConfig,
        width: u32,
        height: u32,
        mut renderer: R,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyViewport { width, height });
        }

        let mut camera = PerspectiveCamera::new(
            config.fov_degrees,
            width as f32 / height as f32,
            config.near,
            config.far,
        );
        camera.eye = Vec3::new(0.0, 0.0, config.camera_z);

        renderer.set_size(width, height);

        let mut scene = Scene::new(config.background);
        let geometry = Rc::new(Geometry::dodecahedron(config.radius));
        let edges = Rc::new(EdgesGeometry::from_geometry(
            &geometry,
            config.edge_threshold_degrees,
        ));

        let mesh = scene.add(Node::new(
            MESH_NAME,
            NodeKind::Mesh(Mesh {
                geometry,
                material: BasicMaterial {
                    color: config.mesh_color,
                    opacity: config.mesh_opacity,
                },
            }),
        ));
        let line = scene.add(Node::new(
            LINE_NAME,
            NodeKind::LineSegments(LineSegments {
                geometry: edges,
                material: BasicMaterial {
                    color: config.line_color,
                    opacity: 1.0,
                },
            }),
        ));
        let light = scene.add(
            Node::new(
                LIGHT_NAME,
                NodeKind::PointLight(PointLight {
                    color: config.light_color,
                    intensity: config.light_intensity,
                    distance: config.light_distance,
                }),
            )
            .with_position(config.light_position),
        );
        let ambient = scene.add(Node::new(
            AMBIENT_NAME,
            NodeKind::AmbientLight(AmbientLight {
                color: config.ambient_color,
                intensity: config.ambient_intensity,
            }),
        ));

        log::info!(
            "[scene] {} nodes, aspect {:.3}, size {}x{}",
            scene.len(),
            camera.aspect,
            width,
            height
        );

        Ok(Self {
            scene,
            camera,
            renderer,
            pointer: PointerState::default(),
            nodes: DynamicNodes { mesh, line, light },
            ambient,
            config,
            size: (width, height),
        })
    }

    pub fn nodes(&self) -> DynamicNodes {
        self.nodes
    }

    pub fn ambient(&self) -> NodeId {
        self.ambient
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Renderer output size as of the last resize.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Match the camera and renderer to the container's current size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("[resize] ignoring empty container {}x{}", width, height);
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
        self.camera.update_projection_matrix();
        self.renderer.set_size(width, height);
        self.size = (width, height);
        log::debug!("[resize] {}x{} aspect {:.3}", width, height, self.camera.aspect);
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, viewport: Viewport) {
        self.pointer.on_move(client_x, client_y, viewport);
    }

    /// Advance rotation and re-derive positions from the pointer. Returns
    /// `false` and leaves the scene untouched if any dynamic node is gone.
    pub fn animate(&mut self) -> bool {
        let DynamicNodes { mesh, line, light } = self.nodes;
        if !(self.scene.contains(mesh) && self.scene.contains(line) && self.scene.contains(light)) {
            return false;
        }

        let [step_x, step_y] = self.config.rotation_step;
        let parallax = self.config.parallax_scale;
        let swing = self.config.light_swing_scale;
        let PointerState { x, y } = self.pointer;

        let mesh_transform = match self.scene.get_mut(mesh) {
            Some(node) => {
                node.transform.rotation.x += step_x;
                node.transform.rotation.y += step_y;
                node.transform.position.x = x * parallax;
                node.transform.position.y = y * parallax;
                node.transform
            }
            None => return false,
        };
        if let Some(node) = self.scene.get_mut(line) {
            node.transform = mesh_transform;
        }
        if let Some(node) = self.scene.get_mut(light) {
            node.transform.position.x = x * swing;
            node.transform.position.y = y * swing;
        }
        true
    }

    /// One frame: animate, then draw exactly once.
    pub fn frame(&mut self) -> Result<(), SceneError> {
        self.animate();
        self.renderer.render(&self.scene, &self.camera)
    }
}
