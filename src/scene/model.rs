//! Scene description types.
//!
//! A [`SceneConfig`] serializes to the JSON object embedded in the applet
//! page: `{"global": {...}, "scenes": {"comprehend_1": {"shapes": [...]}}}`.
//! Shapes are tagged by their `type` field; option keys without a typed
//! field are carried through untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type Extra = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub global: GlobalSettings,
    pub scenes: BTreeMap<String, Scene>,
}

impl SceneConfig {
    /// Shapes across all scenes, nested children included.
    pub fn shape_count(&self) -> usize {
        fn count(shapes: &[Shape]) -> usize {
            shapes.iter().map(|s| 1 + count(s.children())).sum()
        }
        self.scenes.values().map(|scene| count(&scene.shapes)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalSettings {
    pub drag_rotate: bool,
    pub zoom: f64,
    pub background_color: String,
    pub isometric: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            drag_rotate: true,
            zoom: 1.0,
            background_color: "#ffffff".to_string(),
            isometric: true,
            extra: Extra::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A shape of a particular kind, with its options and children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node<O> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub options: O,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Shape>,
}

/// The closed set of shape kinds the renderer understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Anchor(Node<AnchorOptions>),
    Box(Node<BoxOptions>),
    Cone(Node<ConeOptions>),
    Cylinder(Node<CylinderOptions>),
    Ellipse(Node<EllipseOptions>),
    Group(Node<GroupOptions>),
    Hemisphere(Node<HemisphereOptions>),
    Polygon(Node<PolygonOptions>),
    Rect(Node<RectOptions>),
    RoundedRect(Node<RoundedRectOptions>),
    Shape(Node<PathOptions>),
    Text(Node<TextOptions>),
}

#[cfg(test)]
impl Shape {
    pub fn id(&self) -> Option<&str> {
        match self {
            Shape::Anchor(n) => n.id.as_deref(),
            Shape::Box(n) => n.id.as_deref(),
            Shape::Cone(n) => n.id.as_deref(),
            Shape::Cylinder(n) => n.id.as_deref(),
            Shape::Ellipse(n) => n.id.as_deref(),
            Shape::Group(n) => n.id.as_deref(),
            Shape::Hemisphere(n) => n.id.as_deref(),
            Shape::Polygon(n) => n.id.as_deref(),
            Shape::Rect(n) => n.id.as_deref(),
            Shape::RoundedRect(n) => n.id.as_deref(),
            Shape::Shape(n) => n.id.as_deref(),
            Shape::Text(n) => n.id.as_deref(),
        }
    }
}

impl Shape {
    pub fn children(&self) -> &[Shape] {
        match self {
            Shape::Anchor(n) => &n.children,
            Shape::Box(n) => &n.children,
            Shape::Cone(n) => &n.children,
            Shape::Cylinder(n) => &n.children,
            Shape::Ellipse(n) => &n.children,
            Shape::Group(n) => &n.children,
            Shape::Hemisphere(n) => &n.children,
            Shape::Polygon(n) => &n.children,
            Shape::Rect(n) => &n.children,
            Shape::RoundedRect(n) => &n.children,
            Shape::Shape(n) => &n.children,
            Shape::Text(n) => &n.children,
        }
    }

    pub fn children_mut(&mut self) -> &mut Vec<Shape> {
        match self {
            Shape::Anchor(n) => &mut n.children,
            Shape::Box(n) => &mut n.children,
            Shape::Cone(n) => &mut n.children,
            Shape::Cylinder(n) => &mut n.children,
            Shape::Ellipse(n) => &mut n.children,
            Shape::Group(n) => &mut n.children,
            Shape::Hemisphere(n) => &mut n.children,
            Shape::Polygon(n) => &mut n.children,
            Shape::Rect(n) => &mut n.children,
            Shape::RoundedRect(n) => &mut n.children,
            Shape::Shape(n) => &mut n.children,
            Shape::Text(n) => &mut n.children,
        }
    }
}

/// Options shared by every kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<Vector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Vector>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorOptions {
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupOptions {
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarters: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HemisphereOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sides: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundedRectOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Options of a free-form `Shape` (a path of points, or a single dot).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(flatten)]
    pub style: Style,
    #[serde(flatten)]
    pub extra: Extra,
}
