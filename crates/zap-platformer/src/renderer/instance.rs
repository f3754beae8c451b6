use bytemuck::{Pod, Zeroable};

/// Per-instance sprite data handed to the host renderer.
/// Layout is fixed: 8 x 4-byte fields = 32 bytes stride.
///
/// Positions are relative to the viewport's top-left corner, so the host
/// never needs to know where the camera is.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// X position in view space.
    pub x: f32,
    /// Y position in view space.
    pub y: f32,
    /// Rendered width in world units.
    pub w: f32,
    /// Rendered height in world units.
    pub h: f32,
    /// Host texture handle.
    pub texture: u32,
    /// Frame index into the texture's horizontal strip.
    pub frame: u32,
    /// `FLAG_*` bits.
    pub flags: u32,
    /// `EntityKind` as an integer (Player = 0, Level, Enemy, Bullet).
    pub kind: u32,
}

impl SpriteInstance {
    pub const WORDS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::WORDS * 4;

    /// Mirror the sprite horizontally (entity faces left).
    pub const FLAG_FLIP_X: u32 = 1 << 0;
    /// Draw with the hit-flash tint.
    pub const FLAG_FLASH: u32 = 1 << 1;

    pub fn is_flipped(&self) -> bool {
        self.flags & Self::FLAG_FLIP_X != 0
    }

    pub fn is_flashing(&self) -> bool {
        self.flags & Self::FLAG_FLASH != 0
    }
}

/// Draw list for one frame, in back-to-front order.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub instances: Vec<SpriteInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SpriteInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
