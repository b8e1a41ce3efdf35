use crate::raster::RasterBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotMode {
    /// Transparent dots: RGB and alpha zeroed.
    Light,
    /// Opaque black dots: RGB zeroed, alpha kept.
    Dark,
}

impl DotMode {
    pub const ALL: &[DotMode] = &[DotMode::Light, DotMode::Dark];

    pub fn name(self) -> &'static str {
        match self {
            DotMode::Light => "light",
            DotMode::Dark => "dark",
        }
    }

    /// Exact, case-sensitive match on `"light"` or `"dark"`.
    pub fn parse(mode: &str) -> Option<DotMode> {
        DotMode::ALL.iter().copied().find(|m| m.name() == mode)
    }
}

/// Whether (x, y) lies on the dot grid: even column and even row.
pub fn is_dot_candidate(x: usize, y: usize) -> bool {
    x % 2 == 0 && y % 2 == 0
}

/// Overlay a grid of dots on every pixel with even x and even y.
pub fn apply_dots(buffer: &mut RasterBuffer, mode: DotMode) {
    let width = buffer.width();
    let height = buffer.height();
    let pixels = buffer.pixels_mut();

    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            let pixel = &mut pixels[y * width + x];
            pixel.red = 0;
            pixel.green = 0;
            pixel.blue = 0;
            if mode == DotMode::Light {
                pixel.alpha = 0;
            }
        }
    }
}

/// String-selected variant of [`apply_dots`]. Unknown modes leave the
/// buffer unchanged.
pub fn apply_dots_named(buffer: &mut RasterBuffer, mode: &str) {
    if let Some(mode) = DotMode::parse(mode) {
        apply_dots(buffer, mode);
    }
}
