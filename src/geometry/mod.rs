use crate::math::{Point3, RGBColor, Ray};

mod sphere;

pub use sphere::Sphere;

/// Where a ray struck a primitive, and the color seen there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionData {
    pub point: Point3,
    pub color: RGBColor,
}

impl IntersectionData {
    pub fn new(point: Point3, color: RGBColor) -> Self {
        IntersectionData { point, color }
    }
}

/// Anything a ray can be tested against.
///
/// `intersect` must be free of side effects, since pixels are traced concurrently
/// against a shared scene. `None` means the ray missed.
pub trait Primitive: Send + Sync {
    fn intersect(&self, r: &Ray) -> Option<IntersectionData>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
}

impl Primitive for PrimitiveEnum {
    fn intersect(&self, r: &Ray) -> Option<IntersectionData> {
        match self {
            PrimitiveEnum::Sphere(sphere) => sphere.intersect(r),
        }
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(sphere: Sphere) -> Self {
        PrimitiveEnum::Sphere(sphere)
    }
}
