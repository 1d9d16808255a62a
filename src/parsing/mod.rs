mod primitives;

use std::{fs::File, io::BufReader, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::info;

pub use primitives::PrimitiveData;

use crate::errors::Result;
use crate::geometry::PrimitiveEnum;
use crate::scene::Scene;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneData {
    pub primitives: Vec<PrimitiveData>,
}

impl From<SceneData> for Scene {
    fn from(data: SceneData) -> Self {
        data.primitives.into_iter().map(PrimitiveEnum::from).collect()
    }
}

impl From<&Scene> for SceneData {
    fn from(scene: &Scene) -> Self {
        SceneData {
            primitives: scene.primitives.iter().map(PrimitiveData::from).collect(),
        }
    }
}

pub fn load_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let data: T = serde_json::from_reader(BufReader::new(file))?;
    Ok(data)
}

pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    info!("loading scene from {}", path.display());
    let scene: Scene = load_json::<SceneData, _>(path)?.into();
    info!("loaded {} primitives", scene.len());
    Ok(scene)
}

pub fn parse_scene(data: &str) -> Result<Scene> {
    let data: SceneData = serde_json::from_str(data)?;
    Ok(data.into())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::RenderError;
    use crate::geometry::Sphere;
    use crate::math::{Point3, RGBColor};
    use crate::scene::example_scene;

    #[test]
    fn test_parsing_simple_scene() {
        let scene = parse_scene(
            r#"{
                "primitives": [
                    {"type": "Sphere", "origin": [0.0, -300.0, 1200.0], "radius": 200.0, "color": [1.0, 0.0, 0.0]},
                    {"type": "Sphere", "origin": [1, 2, 3], "radius": 4, "color": [0.5, 0.5, 0.5]}
                ]
            }"#,
        )
        .expect("failed to parse scene");
        assert_eq!(scene.len(), 2);
        assert_eq!(
            scene.primitives[1],
            PrimitiveEnum::Sphere(Sphere::new(
                4.0,
                Point3::new(1.0, 2.0, 3.0),
                RGBColor::new(0.5, 0.5, 0.5)
            ))
        );
    }

    #[test]
    fn test_unknown_primitive_is_rejected() {
        let result = parse_scene(r#"{"primitives": [{"type": "Cube", "size": 1.0}]}"#);
        assert!(matches!(result, Err(RenderError::SceneParse(_))));
    }

    #[test]
    fn test_example_scene_survives_serialization() {
        let scene = example_scene();
        let json = serde_json::to_string(&SceneData::from(&scene)).unwrap();
        let reparsed = parse_scene(&json).unwrap();
        assert_eq!(reparsed.primitives, scene.primitives);
    }

    #[test]
    fn test_loading_missing_file() {
        let result = load_scene("data/scenes/does_not_exist.json");
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[test]
    fn test_loading_bundled_scene() {
        let scene = load_scene("data/scenes/three_spheres.json").expect("failed to parse scene");
        assert_eq!(scene.primitives, example_scene().primitives);
    }
}
