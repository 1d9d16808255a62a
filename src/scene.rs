use ordered_float::OrderedFloat;
use tracing::debug;

use crate::geometry::{IntersectionData, Primitive, PrimitiveEnum, Sphere};
use crate::math::{Point3, RGBColor, Ray};

/// How the color of the closest hit is attenuated with distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Falloff {
    None,
    /// Light from a fixed source, scaled by `reference_distance² / hit_distance²`.
    InverseSquare { reference_distance: f64 },
}

impl Falloff {
    pub fn attenuate(&self, color: RGBColor, hit_distance_squared: f64) -> RGBColor {
        match *self {
            Falloff::None => color,
            // a hit sitting exactly on the ray origin would blow up to infinity
            Falloff::InverseSquare { .. } if hit_distance_squared <= 0.0 => color,
            Falloff::InverseSquare { reference_distance } => {
                color * (reference_distance * reference_distance / hit_distance_squared)
            }
        }
    }
}

/// Ordered set of primitives. Owns its primitives for its whole lifetime.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub primitives: Vec<PrimitiveEnum>,
}

impl Scene {
    pub fn new(primitives: Vec<PrimitiveEnum>) -> Self {
        Scene { primitives }
    }

    pub fn push(&mut self, primitive: impl Into<PrimitiveEnum>) {
        self.primitives.push(primitive.into());
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The hit nearest to the ray origin, measured by euclidean distance to the hit point.
    ///
    /// On equal distances the primitive that comes first in the scene wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<IntersectionData> {
        self.primitives
            .iter()
            .filter_map(|prim| prim.intersect(ray))
            .min_by_key(|isect| OrderedFloat(isect.point.distance_squared(ray.origin)))
    }

    /// Traces a ray from `from` through `to` and returns the color it sees.
    pub fn shoot_ray(&self, from: Point3, to: Point3, falloff: Falloff) -> RGBColor {
        let ray = Ray::between(from, to);
        match self.closest_hit(&ray) {
            Some(isect) => falloff.attenuate(isect.color, isect.point.distance_squared(from)),
            None => RGBColor::BLACK,
        }
    }
}

impl FromIterator<PrimitiveEnum> for Scene {
    fn from_iter<I: IntoIterator<Item = PrimitiveEnum>>(iter: I) -> Self {
        Scene::new(iter.into_iter().collect())
    }
}

/// Three overlapping colored spheres above a floor-like grid of small white spheres.
pub fn example_scene() -> Scene {
    let mut scene = Scene::default();
    scene.push(Sphere::new(
        200.0,
        Point3::new(0.0, -300.0, 1200.0),
        RGBColor::new(1.0, 0.0, 0.0),
    ));
    scene.push(Sphere::new(
        200.0,
        Point3::new(-80.0, -150.0, 1200.0),
        RGBColor::new(0.0, 1.0, 0.0),
    ));
    scene.push(Sphere::new(
        200.0,
        Point3::new(70.0, -100.0, 1200.0),
        RGBColor::new(0.0, 0.0, 1.0),
    ));

    for z in 2..=7 {
        for x in -2..=2 {
            scene.push(Sphere::new(
                40.0,
                Point3::new(200.0 * x as f64, 300.0, 400.0 * z as f64),
                RGBColor::WHITE,
            ));
        }
    }
    debug!("constructed example scene with {} primitives", scene.len());
    scene
}
