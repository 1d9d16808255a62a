use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign};

use serde::{Deserialize, Serialize};

/// Linear RGB color. Channels are unbounded while rendering and only
/// brought into `[0, 1]` by normalization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct RGBColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGBColor {
    pub const fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Applies `f` to each channel pair of `self` and `other`.
    pub fn zip_with(self, other: RGBColor, f: impl Fn(f64, f64) -> f64) -> RGBColor {
        RGBColor::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b))
    }
}

impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl MulAssign for RGBColor {
    fn mul_assign(&mut self, other: RGBColor) {
        *self = *self * other;
    }
}

impl Mul<f64> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f64) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f64 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl MulAssign<f64> for RGBColor {
    fn mul_assign(&mut self, other: f64) {
        *self = *self * other;
    }
}

impl Div<f64> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f64) -> RGBColor {
        RGBColor::new(self.r / other, self.g / other, self.b / other)
    }
}

impl DivAssign<f64> for RGBColor {
    fn div_assign(&mut self, other: f64) {
        *self = *self / other;
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl From<f64> for RGBColor {
    fn from(s: f64) -> RGBColor {
        RGBColor::new(s, s, s)
    }
}

impl From<[f64; 3]> for RGBColor {
    fn from(c: [f64; 3]) -> RGBColor {
        RGBColor::new(c[0], c[1], c[2])
    }
}

impl From<RGBColor> for [f64; 3] {
    fn from(c: RGBColor) -> [f64; 3] {
        c.as_array()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scaling_and_modulation() {
        let c = RGBColor::new(1.0, 0.5, 0.25);
        assert_eq!(c * 2.0, RGBColor::new(2.0, 1.0, 0.5));
        assert_eq!(2.0 * c, c * 2.0);
        assert_eq!(c * RGBColor::WHITE, c);
        assert_eq!(c * RGBColor::BLACK, RGBColor::BLACK);
        assert_eq!(c / 0.5, RGBColor::new(2.0, 1.0, 0.5));
    }

    #[test]
    fn test_zip_with() {
        let a = RGBColor::new(1.0, 5.0, 3.0);
        let b = RGBColor::new(2.0, 4.0, 3.0);
        assert_eq!(a.zip_with(b, f64::min), RGBColor::new(1.0, 4.0, 3.0));
        assert_eq!(a.zip_with(b, f64::max), RGBColor::new(2.0, 5.0, 3.0));
    }
}
