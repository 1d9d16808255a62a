use serde::{Deserialize, Serialize};

use crate::{
    geometry::{PrimitiveEnum, Sphere},
    math::{Point3, RGBColor},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: Point3,
        radius: f64,
        color: RGBColor,
    },
}

impl From<PrimitiveData> for PrimitiveEnum {
    fn from(data: PrimitiveData) -> Self {
        match data {
            PrimitiveData::Sphere {
                origin,
                radius,
                color,
            } => PrimitiveEnum::Sphere(Sphere::new(radius, origin, color)),
        }
    }
}

impl From<&PrimitiveEnum> for PrimitiveData {
    fn from(primitive: &PrimitiveEnum) -> Self {
        match primitive {
            PrimitiveEnum::Sphere(sphere) => PrimitiveData::Sphere {
                origin: sphere.origin,
                radius: sphere.radius,
                color: sphere.color,
            },
        }
    }
}
