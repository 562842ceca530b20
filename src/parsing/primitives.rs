use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::Sphere;

use super::Vec3Data;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: Vec3Data,
        radius: f64,
        color: Vec3Data,
    },
}

impl PrimitiveData {
    pub fn transform(self, index: usize) -> Result<Sphere> {
        match self {
            Self::Sphere {
                origin,
                radius,
                color,
            } => {
                if !(radius > 0.0) {
                    bail!("primitive {} has non-positive radius {}", index, radius);
                }
                Ok(Sphere::new(origin.into(), radius, color.into()))
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightData {
    pub origin: Vec3Data,
    pub radius: f64,
    #[serde(default)]
    pub color: Vec3Data,
}

impl From<LightData> for Sphere {
    fn from(data: LightData) -> Self {
        Sphere::new(data.origin.into(), data.radius, data.color.into())
    }
}
