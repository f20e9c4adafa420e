use glam::{Mat4, Vec3};

/// Camera orbiting a pivot point, driven by pointer drags.
///
/// `pitch` and `yaw` are radians and unbounded; they are never wrapped or
/// clamped. The eye, pivot and up vector do not change after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vec3,
    pub pivot: Vec3,
    pub up: Vec3,
    /// Radians per pixel of drag.
    pub sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::new(-1.5, 0.4, 2.0))
    }
}

impl OrbitCamera {
    pub const DEFAULT_SENSITIVITY: f32 = 0.003;

    pub fn new(eye: Vec3, pivot: Vec3) -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            eye,
            pivot,
            up: Vec3::Y,
            sensitivity: Self::DEFAULT_SENSITIVITY,
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Horizontal drag turns yaw; dragging down lowers pitch.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
    }

    /// Camera-to-world transform.
    ///
    /// Inverse of `look_at(eye, pivot, up) * T(pivot) * Rx(pitch) * Ry(yaw) * T(-pivot)`:
    /// the scene is rotated about the pivot, then viewed from the eye.
    pub fn view_matrix(&self) -> Mat4 {
        let look = Mat4::look_at_rh(self.eye, self.pivot, self.up);
        let orbit = Mat4::from_translation(self.pivot)
            * Mat4::from_rotation_x(self.pitch)
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_translation(-self.pivot);

        (look * orbit).inverse()
    }

    /// [`view_matrix`](Self::view_matrix) as 16 floats, column-major.
    pub fn view_cols(&self) -> [f32; 16] {
        self.view_matrix().to_cols_array()
    }

    /// Eye position after the orbit, in scene coordinates.
    pub fn position(&self) -> Vec3 {
        self.view_matrix().w_axis.truncate()
    }
}
