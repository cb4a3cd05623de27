//! Structural checks for generated scene descriptions.

use super::model::{SceneConfig, Shape};
use crate::genai::GenerationError;
use serde_json::Value;

/// Boxes narrower than this are scaled up.
const MIN_BOX_WIDTH: f64 = 50.0;
/// Lower bound for every dimension of a scaled box.
const SCALED_BOX_FLOOR: f64 = 75.0;

/// Decode and check a generated scene description.
///
/// `global` and `scenes` must both be present, every scene needs a `shapes`
/// list and every shape a known `type`. Undersized boxes are scaled.
pub fn decode_scene_config(value: Value) -> Result<SceneConfig, GenerationError> {
    let Some(object) = value.as_object() else {
        return Err(GenerationError::InvalidStructure(
            "scene description is not a JSON object".to_string(),
        ));
    };
    if !object.contains_key("global") || !object.contains_key("scenes") {
        return Err(GenerationError::InvalidStructure(
            "missing global or scenes".to_string(),
        ));
    }

    let mut config: SceneConfig = serde_json::from_value(value)
        .map_err(|e| GenerationError::InvalidStructure(e.to_string()))?;

    let scaled = scale_undersized_boxes(&mut config);
    if scaled > 0 {
        log::warn!("scaled up {} undersized box(es)", scaled);
    }

    Ok(config)
}

/// Enlarge every box narrower than 50 units, at any depth.
///
/// Width becomes `max(75, width * 1.5)`; height and depth become
/// `max(75, value)`, using the new width for a missing value. Returns the
/// number of boxes changed.
pub fn scale_undersized_boxes(config: &mut SceneConfig) -> usize {
    config
        .scenes
        .values_mut()
        .map(|scene| scale_shapes(&mut scene.shapes))
        .sum()
}

fn scale_shapes(shapes: &mut [Shape]) -> usize {
    let mut scaled = 0;
    for shape in shapes {
        if let Shape::Box(node) = shape
            && let Some(width) = node.options.width
            && width < MIN_BOX_WIDTH
        {
            let options = &mut node.options;
            let width = SCALED_BOX_FLOOR.max(width * 1.5);
            options.width = Some(width);
            options.height = Some(SCALED_BOX_FLOOR.max(options.height.unwrap_or(width)));
            options.depth = Some(SCALED_BOX_FLOOR.max(options.depth.unwrap_or(width)));
            scaled += 1;
        }
        scaled += scale_shapes(shape.children_mut());
    }
    scaled
}
