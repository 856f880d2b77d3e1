use crate::constants::MOBILE_BREAKPOINT_PX;

/// Coarse viewport bucket used to pick layout-sensitive offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Viewports narrower than [`MOBILE_BREAKPOINT_PX`] CSS pixels are mobile.
    #[inline]
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Horizontal offsets the model travels between, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Resting x offset at the top of the page (to the right of centre).
    pub start_x: f64,
    /// Furthest x offset reached at the end of the second section.
    pub left_x: f64,
}

impl LayoutConfig {
    pub const DESKTOP: LayoutConfig = LayoutConfig {
        start_x: 1.5,
        left_x: -2.0,
    };
    pub const MOBILE: LayoutConfig = LayoutConfig {
        start_x: 0.5,
        left_x: -1.0,
    };

    #[inline]
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Mobile => Self::MOBILE,
            DeviceClass::Desktop => Self::DESKTOP,
        }
    }

    #[inline]
    pub fn for_viewport_width(width_px: f64) -> Self {
        Self::for_device(DeviceClass::from_viewport_width(width_px))
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DESKTOP
    }
}
