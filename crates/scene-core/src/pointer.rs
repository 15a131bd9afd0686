/// Size of the browser viewport (or any surface) in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Pointer position normalized so the viewport spans \[-1, 1\] on both axes,
/// with +Y pointing up.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Record a pointer move. Coordinates outside the viewport are kept as-is
    /// and map outside \[-1, 1\]. A degenerate viewport leaves the state alone.
    pub fn on_move(&mut self, client_x: f32, client_y: f32, viewport: Viewport) {
        if let Some([x, y]) = normalize_pointer(client_x, client_y, viewport) {
            self.x = x;
            self.y = y;
        }
    }
}

#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, viewport: Viewport) -> Option<[f32; 2]> {
    if viewport.is_empty() {
        return None;
    }
    let x = (client_x / viewport.width) * 2.0 - 1.0;
    let y = -(client_y / viewport.height) * 2.0 + 1.0;
    Some([x, y])
}
