use crate::camera::PerspectiveCamera;
use crate::error::SceneError;
use crate::scene::Scene;

/// Drawing backend driven by the scene controller.
pub trait Renderer {
    /// Resize the output surface, in CSS pixels.
    fn set_size(&mut self, width: u32, height: u32);

    /// Draw `scene` as seen from `camera`. One call is one frame.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), SceneError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn set_size(&mut self, width: u32, height: u32) {
        (**self).set_size(width, height)
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), SceneError> {
        (**self).render(scene, camera)
    }
}
