//! Visualization parameters and kind selection.

use super::prompts;
use crate::genai::{GenerationError, Generated, TextGenerator, generate_or, parse_json};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;

static CUBE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+)\s*(?:metal|wooden|)?\s*cubes?\s*(?:with|of)?\s*(?:sides?|edge|length)\s*(?:of|=|:)?\s*(\d+)",
    )
    .expect("invalid cube pattern")
});

static CYLINDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cylinder\s*(?:with|of)?\s*(?:radius|r)\s*(?:of|=|:)?\s*(\d+)")
        .expect("invalid cylinder pattern")
});

pub const DEFAULT_CUBE_COUNT: u32 = 5;
pub const DEFAULT_CUBE_SIZE: f64 = 5.0;
pub const DEFAULT_CUBE_COLOR: &str = "#f47983";

/// Upper bound on cubes laid out by the fallback scene.
const MAX_CUBE_COUNT: u32 = 100;

/// A visualization type name and its free-form parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationParams {
    pub visualization_type: String,
    pub parameters: Map<String, Value>,
}

impl VisualizationParams {
    /// Parameters stored in a record, when the type is set and the
    /// parameter text is a JSON object.
    pub fn from_record(visualization_type: &str, params_json: &str) -> Option<Self> {
        if visualization_type.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(params_json) {
            Ok(Value::Object(parameters)) => Some(Self {
                visualization_type: visualization_type.trim().to_string(),
                parameters,
            }),
            Ok(_) | Err(_) => {
                log::warn!("visualization_params is not a JSON object; extracting parameters");
                None
            }
        }
    }
}

/// Extract parameters with regular expressions.
///
/// Recognizes "N cubes with sides of S" and "cylinder with radius R"; any
/// other mention of a cube selects the cube layout with default numbers.
pub fn extract_parameters_manually(text: &str) -> VisualizationParams {
    let mut visualization_type = "default".to_string();
    let mut parameters = Map::new();
    parameters.insert("count".to_string(), Value::Null);
    parameters.insert("size".to_string(), Value::Null);
    parameters.insert("colors".to_string(), serde_json::json!([DEFAULT_CUBE_COLOR]));

    if let Some(caps) = CUBE_PATTERN.captures(text)
        && let (Ok(count), Ok(size)) = (caps[1].parse::<u64>(), caps[2].parse::<u64>())
    {
        visualization_type = "cubes_to_larger_cube".to_string();
        parameters.insert("count".to_string(), count.into());
        parameters.insert("size".to_string(), size.into());
    }

    if let Some(caps) = CYLINDER_PATTERN.captures(text)
        && let Ok(radius) = caps[1].parse::<u64>()
    {
        visualization_type = "cylinder_volume".to_string();
        parameters.insert("size".to_string(), radius.into());
    }

    if visualization_type == "default" && text.to_lowercase().contains("cube") {
        visualization_type = "cubes_to_larger_cube".to_string();
        parameters.insert("count".to_string(), DEFAULT_CUBE_COUNT.into());
        parameters.insert("size".to_string(), 5.into());
    }

    log::debug!("manually extracted {} parameters", visualization_type);
    VisualizationParams {
        visualization_type,
        parameters,
    }
}

/// Ask the service for parameters, falling back to regex extraction.
pub fn extract_parameters(
    generator: Option<&dyn TextGenerator>,
    text: &str,
) -> Generated<VisualizationParams> {
    generate_or(
        generator,
        "visualization parameters",
        |g| {
            let reply = g.complete(&prompts::parameters_request(text))?;
            let value: Value = parse_json(&reply)?;
            if value.get("visualization_type").is_none() || value.get("parameters").is_none() {
                return Err(GenerationError::InvalidStructure(
                    "missing visualization_type or parameters".to_string(),
                ));
            }
            serde_json::from_value(value).map_err(|e| GenerationError::InvalidStructure(e.to_string()))
        },
        |_| extract_parameters_manually(text),
    )
}

/// Supported visualization kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizationKind {
    CubesToLargerCube,
    CylinderVolume,
    BoxHeight,
    BoxVolume,
    RectangularPrism,
    ConeVolume,
    SphereVolume,
    ContainerVolume,
    StackedCubes,
    General3dScene,
}

impl VisualizationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualizationKind::CubesToLargerCube => "cubes_to_larger_cube",
            VisualizationKind::CylinderVolume => "cylinder_volume",
            VisualizationKind::BoxHeight => "box_height",
            VisualizationKind::BoxVolume => "box_volume",
            VisualizationKind::RectangularPrism => "rectangular_prism",
            VisualizationKind::ConeVolume => "cone_volume",
            VisualizationKind::SphereVolume => "sphere_volume",
            VisualizationKind::ContainerVolume => "container_volume",
            VisualizationKind::StackedCubes => "stacked_cubes",
            VisualizationKind::General3dScene => "general_3d_scene",
        }
    }

    /// Map a type name; unknown names and "default" map to the general scene.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "cubes_to_larger_cube" | "cube_transformation" => VisualizationKind::CubesToLargerCube,
            "cylinder_volume" => VisualizationKind::CylinderVolume,
            "box_height" => VisualizationKind::BoxHeight,
            "box_volume" => VisualizationKind::BoxVolume,
            "rectangular_prism" => VisualizationKind::RectangularPrism,
            "cone_volume" => VisualizationKind::ConeVolume,
            "sphere_volume" => VisualizationKind::SphereVolume,
            "container_volume" => VisualizationKind::ContainerVolume,
            "stacked_cubes" => VisualizationKind::StackedCubes,
            _ => VisualizationKind::General3dScene,
        }
    }
}

impl fmt::Display for VisualizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the visualization kind.
///
/// An explicit type wins. For "default", keywords in the problem text choose
/// the kind before falling back to the general scene.
pub fn select_visualization_kind(visualization_type: &str, problem_text: &str) -> VisualizationKind {
    if visualization_type == "default"
        && let Some(kind) = kind_from_keywords(&problem_text.to_lowercase())
    {
        return kind;
    }
    VisualizationKind::from_type_name(visualization_type)
}

fn kind_from_keywords(text: &str) -> Option<VisualizationKind> {
    let any = |words: &[&str]| words.iter().any(|w| text.contains(w));

    let kind = if any(&["box", "rectangular prism", "cuboid"]) {
        if any(&["height", "find the height"]) {
            VisualizationKind::BoxHeight
        } else if any(&["volume", "capacity"]) {
            VisualizationKind::BoxVolume
        } else {
            VisualizationKind::RectangularPrism
        }
    } else if any(&["cylinder", "tube", "pipe"]) {
        VisualizationKind::CylinderVolume
    } else if any(&["cone", "pyramid"]) {
        VisualizationKind::ConeVolume
    } else if any(&["sphere", "ball"]) {
        VisualizationKind::SphereVolume
    } else if any(&["pool", "tank", "container", "aquarium"]) {
        VisualizationKind::ContainerVolume
    } else if any(&["cubes", "blocks", "stack"]) {
        if text.contains("larger cube") {
            VisualizationKind::CubesToLargerCube
        } else {
            VisualizationKind::StackedCubes
        }
    } else {
        return None;
    };

    Some(kind)
}

/// Numbers for the deterministic cube layout.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeParams {
    pub count: u32,
    pub size: f64,
    pub color: String,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_CUBE_COUNT,
            size: DEFAULT_CUBE_SIZE,
            color: DEFAULT_CUBE_COLOR.to_string(),
        }
    }
}

impl CubeParams {
    /// Read `small_cube_count`/`small_cube_size`/`small_cube_color`, then
    /// `count`/`size`/`colors[0]`, then the defaults.
    pub fn from_parameters(parameters: &Map<String, Value>) -> Self {
        let number = |keys: [&str; 2]| {
            keys.iter()
                .find_map(|k| parameters.get(*k).and_then(Value::as_f64))
                .filter(|n| n.is_finite() && *n > 0.0)
        };

        let count = number(["small_cube_count", "count"])
            .map(|n| (n.round() as u32).clamp(1, MAX_CUBE_COUNT))
            .unwrap_or(DEFAULT_CUBE_COUNT);
        let size = number(["small_cube_size", "size"]).unwrap_or(DEFAULT_CUBE_SIZE);
        let color = parameters
            .get("small_cube_color")
            .and_then(Value::as_str)
            .or_else(|| {
                parameters
                    .get("colors")
                    .and_then(|c| c.get(0))
                    .and_then(Value::as_str)
            })
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CUBE_COLOR)
            .to_string();

        Self { count, size, color }
    }
}
