// Scene tuning shared by the web and native frontends.

// Layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // viewport width below this is mobile

// Scene
pub const BACKGROUND_RGB: u32 = 0xb1b36b;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const TONE_MAPPING_EXPOSURE: f32 = 1.0;

// Model
pub const MODEL_PATH: &str = "models/bread.glb";
pub const MODEL_FIT_SIZE: f32 = 2.0; // largest dimension after fitting

// Placeholder shown when the model fails to load
pub const PLACEHOLDER_SIZE: f32 = 2.0;
pub const PLACEHOLDER_RGB: u32 = 0xd4a574; // bread crust
pub const PLACEHOLDER_ROUGHNESS: f32 = 0.5;
pub const PLACEHOLDER_METALNESS: f32 = 0.1;

/// Split a `0xRRGGBB` colour into sRGB channels in \[0, 1\].
#[inline]
pub fn hex_to_srgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` to linear RGB, the space colours are shaded in.
#[inline]
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_srgb(hex).map(srgb_to_linear)
}
