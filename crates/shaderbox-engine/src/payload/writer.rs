/// Byte alignment of uniform buffer sizes.
pub const UNIFORM_ALIGNMENT: u64 = 16;

/// Rounds a payload size in bytes up to a valid uniform buffer capacity.
///
/// The result is a non-zero multiple of [`UNIFORM_ALIGNMENT`].
pub fn uniform_capacity_for(bytes: u64) -> u64 {
    bytes.max(1).div_ceil(UNIFORM_ALIGNMENT) * UNIFORM_ALIGNMENT
}

/// A fixed-shape sequence of `f32` values in native byte order.
///
/// Hooks usually `clear()` and push the full payload every frame; the
/// allocation is reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformPayload {
    floats: Vec<f32>,
}

impl UniformPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(floats: usize) -> Self {
        Self {
            floats: Vec::with_capacity(floats),
        }
    }

    /// Wraps raw floats without any alignment handling.
    pub fn from_floats(floats: impl Into<Vec<f32>>) -> Self {
        Self {
            floats: floats.into(),
        }
    }

    pub fn clear(&mut self) {
        self.floats.clear();
    }

    pub fn push_f32(&mut self, v: f32) -> &mut Self {
        self.floats.push(v);
        self
    }

    pub fn push_vec2(&mut self, v: [f32; 2]) -> &mut Self {
        self.align_to(2);
        self.floats.extend_from_slice(&v);
        self
    }

    /// Pushes a `vec3f`; the following scalar may occupy its padding slot.
    pub fn push_vec3(&mut self, v: [f32; 3]) -> &mut Self {
        self.align_to(4);
        self.floats.extend_from_slice(&v);
        self
    }

    pub fn push_vec4(&mut self, v: [f32; 4]) -> &mut Self {
        self.align_to(4);
        self.floats.extend_from_slice(&v);
        self
    }

    /// Pushes a column-major 4x4 matrix.
    pub fn push_mat4(&mut self, cols: &[f32; 16]) -> &mut Self {
        self.align_to(4);
        self.floats.extend_from_slice(cols);
        self
    }

    pub fn as_floats(&self) -> &[f32] {
        &self.floats
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.floats)
    }

    pub fn byte_len(&self) -> u64 {
        std::mem::size_of_val(self.floats.as_slice()) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }

    fn align_to(&mut self, floats: usize) {
        let rem = self.floats.len() % floats;
        if rem != 0 {
            self.floats.resize(self.floats.len() + floats - rem, 0.0);
        }
    }
}

impl From<Vec<f32>> for UniformPayload {
    fn from(floats: Vec<f32>) -> Self {
        Self { floats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rounds_up_to_sixteen() {
        assert_eq!(uniform_capacity_for(0), 16);
        assert_eq!(uniform_capacity_for(16), 16);
        assert_eq!(uniform_capacity_for(17), 32);
        assert_eq!(uniform_capacity_for(124), 128);
    }

    #[test]
    fn scalars_pack_tightly() {
        let mut p = UniformPayload::new();
        p.push_vec2([800.0, 600.0]).push_f32(1.5).push_f32(4.0);
        assert_eq!(p.as_floats(), &[800.0, 600.0, 1.5, 4.0]);
        assert_eq!(p.byte_len(), 16);
    }

    #[test]
    fn mat4_after_time_gets_padded_to_sixteen_bytes() {
        let mut p = UniformPayload::new();
        p.push_vec2([1.0, 2.0]).push_f32(3.0);
        p.push_mat4(&[9.0; 16]);
        assert_eq!(p.as_floats().len(), 20);
        assert_eq!(p.as_floats()[3], 0.0);
        assert_eq!(p.as_floats()[4], 9.0);
    }

    #[test]
    fn scalar_fills_vec3_padding() {
        let mut p = UniformPayload::new();
        p.push_f32(1.0).push_vec3([2.0, 3.0, 4.0]).push_f32(5.0);
        assert_eq!(p.as_floats(), &[1.0, 0.0, 0.0, 0.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn vec2_aligns_to_eight_bytes() {
        let mut p = UniformPayload::new();
        p.push_f32(1.0).push_vec2([2.0, 3.0]);
        assert_eq!(p.as_floats(), &[1.0, 0.0, 2.0, 3.0]);
    }

    #[test]
    fn bytes_are_native_endian_floats() {
        let p = UniformPayload::from_floats(vec![1.0f32, -2.0]);
        let mut expected = Vec::new();
        expected.extend_from_slice(&1.0f32.to_ne_bytes());
        expected.extend_from_slice(&(-2.0f32).to_ne_bytes());
        assert_eq!(p.as_bytes(), expected.as_slice());
    }

    #[test]
    fn clear_keeps_shape_reusable() {
        let mut p = UniformPayload::with_capacity(4);
        p.push_vec4([1.0; 4]);
        p.clear();
        assert!(p.is_empty());
        p.push_f32(2.0);
        assert_eq!(p.byte_len(), 4);
    }
}
