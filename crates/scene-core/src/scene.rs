//! Minimal scene graph: a flat list of named nodes addressed by [`NodeId`].

use crate::color::Color;
use crate::geometry::{EdgesGeometry, Geometry};
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::rc::Rc;

/// Stable handle to a node. Stays valid until the node is removed; a removed
/// slot is never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position plus XYZ-order Euler rotation in radians. Angles accumulate
/// without wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(q, self.position)
    }
}

/// Unlit material; `opacity < 1` draws with alpha blending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicMaterial {
    pub color: Color,
    pub opacity: f32,
}

impl BasicMaterial {
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Triangle mesh drawn as a wireframe over its triangle edges.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: Rc<Geometry>,
    pub material: BasicMaterial,
}

#[derive(Clone, Debug)]
pub struct LineSegments {
    pub geometry: Rc<EdgesGeometry>,
    pub material: BasicMaterial,
}

/// Point light with a finite falloff radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub distance: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    Mesh(Mesh),
    LineSegments(LineSegments),
    PointLight(PointLight),
    AmbientLight(AmbientLight),
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            kind,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub background: Color,
    nodes: Vec<Option<Node>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            nodes: Vec::new(),
        }
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(Some(node));
        NodeId(self.nodes.len() - 1)
    }

    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        self.nodes.get_mut(id.0).and_then(Option::take)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// First live node carrying `name`.
    pub fn object_by_name(&self, name: &str) -> Option<NodeId> {
        self.iter().find(|(_, n)| n.name == name).map(|(id, _)| id)
    }

    /// Live nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|n| (NodeId(i), n)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
