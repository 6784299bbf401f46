use glam::DVec2;

/// CSS color in either RGBA or HSLA notation.
///
/// Channels follow CSS conventions: `r/g/b` in 0..=255, hue in degrees,
/// saturation and lightness in percent, alpha in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba(u8, u8, u8, f64),
    Hsla(f64, f64, f64, f64),
}

impl Color {
    pub const WHITE: Color = Color::Rgba(255, 255, 255, 1.0);

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba(_, _, _, a) | Color::Hsla(_, _, _, a) => a,
        }
    }

    /// Render as a CSS color string suitable for `fillStyle`/`shadowColor`.
    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgba(r, g, b, a) => format!("rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsla(h, s, l, a) => format!("hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

/// Soft shadow drawn behind a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f64,
    pub color: Color,
}

/// One stop of a radial gradient; `offset` is in 0..=1 from center to rim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

/// A clearable 2D drawing layer.
///
/// The browser implementation wraps a `<canvas>` 2D context; tests use a
/// recording surface. Drawing never fails from the caller's point of view.
pub trait Surface {
    /// Current pixel size as `(width, height)`.
    fn size(&self) -> (f64, f64);
    fn resize(&mut self, width: f64, height: f64);
    fn clear(&mut self);
    /// Fill a circle; with `glow` the fill is drawn with a shadow blur.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color, glow: Option<Glow>);
    /// Paint a radial gradient centered at `center` over the whole surface.
    fn fill_radial(&mut self, center: DVec2, radius: f64, stops: &[ColorStop]);
}

/// Width/height snapshot handed to particles during an update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn of<S: Surface + ?Sized>(surface: &S) -> Self {
        let (width, height) = surface.size();
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}
