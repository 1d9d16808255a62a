use super::{Point3, RGBColor, Vec3};

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3,
    /// Unit length.
    pub direction: Vec3,
    /// Incoming light, multiplied into whatever color the ray picks up.
    pub light: RGBColor,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction,
            light: RGBColor::WHITE,
        }
    }

    /// Ray starting at `from` and heading towards `to`.
    ///
    /// If the two points coincide the direction is the zero vector.
    pub fn between(from: Point3, to: Point3) -> Self {
        Ray::new(from, (to - from).normalized())
    }

    pub fn with_light(mut self, light: RGBColor) -> Self {
        self.light = light;
        self
    }

    pub fn point_at_parameter(&self, time: f64) -> Point3 {
        self.origin + self.direction * time
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Point3::default(), Vec3::default())
    }
}
