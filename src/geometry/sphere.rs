use crate::geometry::{IntersectionData, Primitive};
use crate::math::{Point3, RGBColor, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub origin: Point3,
    pub color: RGBColor,
}

impl Sphere {
    pub fn new(radius: f64, origin: Point3, color: RGBColor) -> Sphere {
        Sphere {
            radius,
            origin,
            color,
        }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: &Ray) -> Option<IntersectionData> {
        let oc: Vec3 = r.origin - self.origin;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        // the nearer root is taken even when it lies behind the ray origin.
        let time = (-b + discriminant_sqrt).min(-b - discriminant_sqrt);

        let point = r.point_at_parameter(time);
        let normal = (point - self.origin).normalized();
        let cos_theta = (normal * r.direction).abs();

        Some(IntersectionData::new(
            point,
            cos_theta * self.color * r.light,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn red_sphere() -> Sphere {
        Sphere::new(2.0, Point3::new(0.0, 0.0, 10.0), RGBColor::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn test_ray_at_center_hits_surface() {
        let sphere = Sphere::new(
            200.0,
            Point3::new(-80.0, -150.0, 1200.0),
            RGBColor::new(0.0, 1.0, 0.0),
        );
        let from = Point3::new(0.0, 0.0, -200.0);
        let ray = Ray::between(from, sphere.origin);

        let isect = sphere.intersect(&ray).expect("ray aimed at center must hit");
        let distance = isect.point.distance(sphere.origin);
        assert!((distance - sphere.radius).abs() < 1e-9, "{}", distance);
        // head-on, so the shading factor is 1.
        assert!((isect.color.g - 1.0).abs() < 1e-9, "{:?}", isect.color);
        assert!(isect.point.distance(from) < from.distance(sphere.origin));
    }

    #[test]
    fn test_ray_missing_sphere() {
        let ray = Ray::new(Point3::ORIGIN, Vec3::Y);
        assert!(red_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_grazing_ray_hits_once() {
        // tangent to the sphere at (2, 0, 10)
        let ray = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::Z);
        let isect = red_sphere().intersect(&ray).expect("tangent ray is a hit");
        assert!(isect.point.distance(Point3::new(2.0, 0.0, 10.0)) < 1e-9);
        assert!(isect.color.r.abs() < 1e-9, "{:?}", isect.color);
    }

    #[test]
    fn test_sphere_behind_origin_still_hits() {
        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z);
        let isect = red_sphere().intersect(&ray).expect("behind-origin hit is reported");
        assert!((isect.point.z - 12.0).abs() < 1e-9, "{:?}", isect.point);
    }

    #[test]
    fn test_origin_inside_sphere_takes_back_root() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vec3::Z);
        let isect = red_sphere().intersect(&ray).expect("inside ray hits");
        assert!((isect.point.z - 8.0).abs() < 1e-9, "{:?}", isect.point);
    }

    #[test]
    fn test_shading_uses_incoming_light() {
        let ray = Ray::between(Point3::ORIGIN, Point3::new(0.0, 0.0, 10.0))
            .with_light(RGBColor::new(0.5, 1.0, 1.0));
        let isect = red_sphere().intersect(&ray).unwrap();
        assert!((isect.color.r - 0.5).abs() < 1e-9, "{:?}", isect.color);
        assert_eq!(isect.color.g, 0.0);
    }

    #[test]
    fn test_oblique_hit_is_dimmer() {
        let sphere = red_sphere();
        let ray = Ray::between(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 10.0));
        let isect = sphere.intersect(&ray).unwrap();
        let normal = (isect.point - sphere.origin).normalized();
        let expected = (normal * ray.direction).abs();
        assert!((isect.color.r - expected).abs() < 1e-12);
        assert!(isect.color.r < 1.0);
    }
}
