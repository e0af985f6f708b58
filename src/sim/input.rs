//! Pointer and touch mapping
//!
//! Mouse and touch events carry client coordinates; both go through the same
//! mapping into board percent.

/// Horizontal extent of the play surface in client pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaySurface {
    pub left: f32,
    pub width: f32,
}

impl PlaySurface {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Board-relative x (percent, unclamped) for a client x coordinate.
    ///
    /// `None` when the surface has no usable width.
    pub fn to_board_x(&self, client_x: f32) -> Option<f32> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return None;
        }
        let x = (client_x - self.left) / self.width * 100.0;
        x.is_finite().then_some(x)
    }
}

/// Where a pointer event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// One pointer/touch sample in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub source: PointerSource,
    pub client_x: f32,
}

impl PointerSample {
    pub fn mouse(client_x: f32) -> Self {
        Self {
            source: PointerSource::Mouse,
            client_x,
        }
    }

    pub fn touch(client_x: f32) -> Self {
        Self {
            source: PointerSource::Touch,
            client_x,
        }
    }

    /// Map into board percent; clamping is the catcher's job
    pub fn board_x(&self, surface: &PlaySurface) -> Option<f32> {
        surface.to_board_x(self.client_x)
    }
}
