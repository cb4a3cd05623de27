//! Deterministic "cubes to larger cube" layout.
//!
//! Small cubes are shown, counted, measured and merged into one larger cube
//! of the same total volume. All coordinates are in scene units: the problem
//! dimensions scaled by ten.

use super::model::{
    BoxOptions, GlobalSettings, GroupOptions, Node, PathOptions, Scene, SceneConfig, Shape, Style,
    TextOptions, Vector,
};
use super::params::CubeParams;
use serde_json::json;
use std::collections::BTreeMap;

const SCALE: f64 = 10.0;
const SPACING: f64 = 1.2;

const CONNECT_COLOR: &str = "#5b9bd5";
const COMPUTE_COLOR: &str = "#6aa84f";
const CHECK_COLOR: &str = "#ffd700";
const EDGE_COLOR: &str = "#000000";

/// Build the full fallback scene description.
pub fn cubes_layout(params: &CubeParams) -> SceneConfig {
    let layout = CubeLayout::new(params);

    let scenes: BTreeMap<String, Scene> = [
        ("comprehend_1", layout.comprehend_1()),
        ("comprehend_2", layout.comprehend_2()),
        ("comprehend_3", layout.comprehend_3()),
        ("connect_1", layout.connect_1()),
        ("compute_1", layout.compute_1()),
        ("compute_2", layout.compute_2()),
        ("compute_3", layout.compute_3()),
        ("compute_4", layout.compute_4()),
        ("check_1", layout.check_1()),
        ("check_3", layout.check_3()),
        ("check_5", layout.check_5()),
    ]
    .into_iter()
    .map(|(name, shapes)| (name.to_string(), Scene { shapes }))
    .collect();

    SceneConfig {
        global: GlobalSettings::default(),
        scenes,
    }
}

/// Edge of the cube holding `count` cubes of edge `size`, to two decimals.
pub fn larger_cube_edge(size: f64, count: u32) -> f64 {
    let edge = (size.powi(3) * f64::from(count)).cbrt();
    (edge * 100.0).round() / 100.0
}

/// Resting positions of the small cubes, in problem units.
///
/// One cube sits at the origin; up to four form a 2x2 grid; more form a
/// two-layer pyramid (3x3 then 2x2) with any overflow stacked in rows of
/// three above it.
pub fn cube_positions(count: u32, size: f64) -> Vec<Vector> {
    let count = count as usize;
    let step = size * SPACING;
    let mut positions = Vec::with_capacity(count);

    if count == 1 {
        positions.push(Vector::default());
    } else if count <= 4 {
        let grid = 2;
        for i in 0..grid {
            for j in 0..grid {
                if positions.len() < count {
                    positions.push(Vector::new(
                        centered(i, grid) * step,
                        0.0,
                        centered(j, grid) * step,
                    ));
                }
            }
        }
    } else {
        let layer_size = 3;
        for layer in 0..2 {
            let side = layer_size - layer;
            for i in 0..side {
                for j in 0..side {
                    if positions.len() < count {
                        positions.push(Vector::new(
                            centered(i, side) * step,
                            -(layer as f64) * step,
                            centered(j, side) * step,
                        ));
                    }
                }
            }
        }
    }

    while positions.len() < count {
        let n = positions.len();
        positions.push(Vector::new(
            ((n % 3) as f64 - 1.0) * step,
            -(((n / 3) + 1) as f64) * step,
            0.0,
        ));
    }

    positions
}

/// Positions for the merge scenes, already in scene units.
///
/// Cubes are stacked in columns on a square grid of up to 3x3.
pub fn merge_positions(count: u32, size: f64) -> Vec<Vector> {
    let count = count as usize;
    let grid = ((count as f64).sqrt().round() as usize).clamp(1, 3);
    let per_column = count / (grid * grid);
    let step = size * SPACING * SCALE;
    let mut positions = Vec::new();

    for i in 0..grid {
        for j in 0..grid {
            for k in 0..=per_column {
                let index = i * grid * grid + j * grid + k;
                if index < count {
                    positions.push(Vector::new(
                        centered(i, grid) * step,
                        (k as f64 - per_column as f64 / 2.0) * step,
                        centered(j, grid) * step,
                    ));
                }
            }
        }
    }

    positions
}

/// Offset of cell `i` in a row of `n` cells centered on zero.
fn centered(i: usize, n: usize) -> f64 {
    i as f64 - (n as f64 - 1.0) / 2.0
}

/// Number for display: integers without a fractional part.
fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

struct CubeStyle<'a> {
    color: &'a str,
    edge_stroke: f64,
    fill_opacity: Option<f64>,
    edge_opacity: Option<f64>,
}

impl<'a> CubeStyle<'a> {
    fn solid(color: &'a str, edge_stroke: f64) -> Self {
        Self {
            color,
            edge_stroke,
            fill_opacity: None,
            edge_opacity: None,
        }
    }

    fn faded(color: &'a str, edge_stroke: f64, fill: f64, edge: f64) -> Self {
        Self {
            color,
            edge_stroke,
            fill_opacity: Some(fill),
            edge_opacity: Some(edge),
        }
    }
}

/// Group holding a filled box and a wireframe box of the same size.
fn cube(ids: [String; 3], translate: Vector, edge: f64, style: &CubeStyle) -> Shape {
    let [group_id, solid_id, wire_id] = ids;
    let dims = |color: &str, stroke: f64, fill: bool, opacity: Option<f64>| BoxOptions {
        width: Some(edge),
        height: Some(edge),
        depth: Some(edge),
        style: Style {
            color: Some(color.to_string()),
            stroke: Some(stroke),
            fill: Some(fill),
            opacity,
            ..Style::default()
        },
        ..BoxOptions::default()
    };

    Shape::Group(Node {
        id: Some(group_id),
        options: GroupOptions {
            style: Style {
                translate: Some(translate),
                ..Style::default()
            },
            ..GroupOptions::default()
        },
        children: vec![
            Shape::Box(Node {
                id: Some(solid_id),
                options: dims(style.color, 0.0, true, style.fill_opacity),
                children: Vec::new(),
            }),
            Shape::Box(Node {
                id: Some(wire_id),
                options: dims(EDGE_COLOR, style.edge_stroke, false, style.edge_opacity),
                children: Vec::new(),
            }),
        ],
    })
}

/// Ids for the `i`th cube of a numbered set: `{prefix}small_cube_group_{i}`.
fn numbered_ids(prefix: &str, i: usize) -> [String; 3] {
    [
        format!("{}small_cube_group_{}", prefix, i),
        format!("{}small_cube_{}", prefix, i),
        format!("{}small_cube_wireframe_{}", prefix, i),
    ]
}

/// Ids for a single named cube: `{name}_group`, `{name}`, `{name}_wireframe`.
fn named_ids(name: &str) -> [String; 3] {
    [
        format!("{}_group", name),
        name.to_string(),
        format!("{}_wireframe", name),
    ]
}

/// Invisible anchor shape carrying text labels.
fn label(id: &str, translate: Vector, texts: Vec<Shape>) -> Shape {
    Shape::Shape(Node {
        id: Some(id.to_string()),
        options: PathOptions {
            style: Style {
                color: Some("transparent".to_string()),
                stroke: Some(0.0),
                translate: Some(translate),
                ..Style::default()
            },
            ..PathOptions::default()
        },
        children: texts,
    })
}

fn text(id: &str, content: String, font_size: f64, y: f64, align: &str) -> Shape {
    Shape::Text(Node {
        id: Some(id.to_string()),
        options: TextOptions {
            text: Some(content),
            font_size: Some(font_size),
            text_align: Some(align.to_string()),
            style: Style {
                color: Some(EDGE_COLOR.to_string()),
                translate: Some(Vector::new(0.0, y, 0.0)),
                ..Style::default()
            },
            ..TextOptions::default()
        },
        children: Vec::new(),
    })
}

fn line(id: &str, points: &[(f64, f64)]) -> Shape {
    Shape::Shape(Node {
        id: Some(id.to_string()),
        options: PathOptions {
            path: Some(
                points
                    .iter()
                    .map(|(x, y)| json!({"x": x, "y": y, "z": 0}))
                    .collect(),
            ),
            style: Style {
                color: Some(EDGE_COLOR.to_string()),
                stroke: Some(3.0),
                ..Style::default()
            },
            ..PathOptions::default()
        },
        children: Vec::new(),
    })
}

struct CubeLayout<'a> {
    count: u32,
    color: &'a str,
    /// Small cube edge in problem units.
    size: f64,
    /// Small cube edge in scene units.
    small: f64,
    /// Larger cube edge in problem units.
    large: f64,
    positions: Vec<Vector>,
    merge_positions: Vec<Vector>,
}

impl<'a> CubeLayout<'a> {
    fn new(params: &'a CubeParams) -> Self {
        Self {
            count: params.count,
            color: &params.color,
            size: params.size,
            small: params.size * SCALE,
            large: larger_cube_edge(params.size, params.count),
            positions: cube_positions(params.count, params.size),
            merge_positions: merge_positions(params.count, params.size),
        }
    }

    fn small_volume(&self) -> String {
        number(self.size.powi(3))
    }

    fn total_volume(&self) -> String {
        number(f64::from(self.count) * self.size.powi(3))
    }

    fn first_position(&self) -> Vector {
        self.positions.first().copied().unwrap_or_default()
    }

    fn small_cubes(&self, prefix: &str, offset_x: f64, style: &CubeStyle) -> Vec<Shape> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                cube(
                    numbered_ids(prefix, i + 1),
                    Vector::new(offset_x + p.x * SCALE, p.y * SCALE, p.z * SCALE),
                    self.small,
                    style,
                )
            })
            .collect()
    }

    fn merging_cubes(&self, prefix: &str, style: &CubeStyle) -> Vec<Shape> {
        self.merge_positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                cube(
                    numbered_ids(prefix, i + 1),
                    Vector::new(-80.0 + p.x, p.y, p.z),
                    self.small,
                    style,
                )
            })
            .collect()
    }

    fn large_cube(&self, name: &str, translate: Vector, style: &CubeStyle) -> Shape {
        cube(named_ids(name), translate, self.large * SCALE, style)
    }

    fn comprehend_1(&self) -> Vec<Shape> {
        let mut shapes = self.small_cubes("", 0.0, &CubeStyle::solid(self.color, 1.5));
        let first = self.first_position();
        shapes.push(label(
            "size_label",
            Vector::new(
                -first.x * SCALE,
                -first.y * SCALE - self.small,
                first.z * SCALE,
            ),
            vec![text(
                "size_text",
                format!("{} cm", number(self.size)),
                16.0,
                -10.0,
                "center",
            )],
        ));
        shapes
    }

    fn comprehend_2(&self) -> Vec<Shape> {
        let mut shapes = self.small_cubes("", 0.0, &CubeStyle::solid(self.color, 2.5));
        let first = self.first_position();
        shapes.push(label(
            "given_label",
            Vector::new(0.0, -first.y * SCALE - self.size * 15.0, 0.0),
            vec![
                text(
                    "given_text",
                    format!("{} cubes", self.count),
                    16.0,
                    -10.0,
                    "center",
                ),
                text(
                    "given_size",
                    format!("{} cm sides", number(self.size)),
                    16.0,
                    10.0,
                    "center",
                ),
            ],
        ));
        shapes
    }

    fn comprehend_3(&self) -> Vec<Shape> {
        let mut shapes = self.small_cubes("", 0.0, &CubeStyle::faded(self.color, 1.5, 0.4, 0.6));
        shapes.push(self.large_cube(
            "large_cube",
            Vector::new(120.0, 0.0, 0.0),
            &CubeStyle::faded(self.color, 2.5, 0.6, 0.8),
        ));
        shapes.push(label(
            "volume_question",
            Vector::new(120.0, -self.large * 7.0, self.large * 6.0),
            vec![text(
                "volume_text",
                "Volume = ?".to_string(),
                16.0,
                0.0,
                "center",
            )],
        ));
        shapes
    }

    fn connect_1(&self) -> Vec<Shape> {
        vec![
            cube(
                named_ids("formula_cube"),
                Vector::new(-50.0, 0.0, 0.0),
                self.small,
                &CubeStyle::solid(CONNECT_COLOR, 1.5),
            ),
            label(
                "formula_label",
                Vector::new(50.0, 0.0, 0.0),
                vec![
                    text(
                        "formula_text",
                        "Volume = s³".to_string(),
                        18.0,
                        -15.0,
                        "center",
                    ),
                    text(
                        "formula_example",
                        format!(
                            "V = {}³ = {} cm³",
                            number(self.size),
                            self.small_volume()
                        ),
                        16.0,
                        15.0,
                        "center",
                    ),
                ],
            ),
        ]
    }

    fn compute_1(&self) -> Vec<Shape> {
        vec![
            cube(
                named_ids("compute_small_cube"),
                Vector::new(-70.0, 0.0, 0.0),
                self.small,
                &CubeStyle::solid(COMPUTE_COLOR, 1.5),
            ),
            label(
                "compute_formula",
                Vector::new(50.0, 0.0, 0.0),
                vec![
                    text(
                        "compute_formula_text",
                        "Volume = s³".to_string(),
                        16.0,
                        -30.0,
                        "center",
                    ),
                    text(
                        "compute_step1",
                        format!("Volume = {}³", number(self.size)),
                        16.0,
                        0.0,
                        "center",
                    ),
                    text(
                        "compute_step2",
                        format!("Volume = {} cm³", self.small_volume()),
                        16.0,
                        30.0,
                        "center",
                    ),
                ],
            ),
        ]
    }

    fn compute_2(&self) -> Vec<Shape> {
        let mut shapes = self.merging_cubes("compute2_", &CubeStyle::solid(COMPUTE_COLOR, 1.5));
        shapes.push(label(
            "compute2_formula",
            Vector::new(80.0, 0.0, 0.0),
            vec![
                text(
                    "compute2_step1",
                    format!(
                        "Total Volume = {} × {} cm³",
                        self.count,
                        self.small_volume()
                    ),
                    16.0,
                    -15.0,
                    "center",
                ),
                text(
                    "compute2_step2",
                    format!("Total Volume = {} cm³", self.total_volume()),
                    16.0,
                    15.0,
                    "center",
                ),
            ],
        ));
        shapes
    }

    fn compute_3(&self) -> Vec<Shape> {
        let mut shapes = self.merging_cubes(
            "compute3_",
            &CubeStyle::faded(COMPUTE_COLOR, 1.5, 0.3, 0.5),
        );
        shapes.push(self.large_cube(
            "compute3_large_cube",
            Vector::new(80.0, 0.0, 0.0),
            &CubeStyle::faded(COMPUTE_COLOR, 2.5, 0.7, 0.9),
        ));
        shapes.push(line("transform_arrow", &[(-30.0, 0.0), (30.0, 0.0)]));
        shapes.push(line(
            "arrow_head",
            &[(25.0, -5.0), (30.0, 0.0), (25.0, 5.0)],
        ));
        shapes
    }

    fn compute_4(&self) -> Vec<Shape> {
        vec![
            self.large_cube(
                "compute4_large_cube",
                Vector::default(),
                &CubeStyle::solid(COMPUTE_COLOR, 2.5),
            ),
            label(
                "volume_label",
                Vector::new(0.0, -self.large * 7.0, self.large * 6.0),
                vec![text(
                    "volume_text",
                    format!("Volume = {} cm³", self.total_volume()),
                    16.0,
                    0.0,
                    "center",
                )],
            ),
            label(
                "dimension_label",
                Vector::new(self.large * 7.0, 0.0, 0.0),
                vec![text(
                    "dimension_text",
                    format!("{} cm", number(self.large)),
                    16.0,
                    0.0,
                    "left",
                )],
            ),
        ]
    }

    fn progress(&self, id: &str, percent: u32) -> Shape {
        label(
            id,
            Vector::new(0.0, -100.0, 0.0),
            vec![text(
                "progress_text",
                format!("Verification: {}%", percent),
                16.0,
                0.0,
                "center",
            )],
        )
    }

    fn check_1(&self) -> Vec<Shape> {
        let mut shapes = self.small_cubes("check1_", 0.0, &CubeStyle::solid(CHECK_COLOR, 1.5));
        shapes.push(self.progress("check1_progress", 0));
        shapes
    }

    fn check_3(&self) -> Vec<Shape> {
        let half = self.positions.len() / 2;
        let mut shapes = self.small_cubes("check3_", -80.0, &CubeStyle::solid(CHECK_COLOR, 1.5));
        shapes.truncate(half);
        shapes.push(self.large_cube(
            "check3_large_cube",
            Vector::new(80.0, 0.0, 0.0),
            &CubeStyle::faded(CHECK_COLOR, 2.0, 0.4, 0.7),
        ));
        shapes.push(self.progress("check3_progress", 50));
        shapes
    }

    fn check_5(&self) -> Vec<Shape> {
        vec![
            self.large_cube(
                "check5_large_cube",
                Vector::default(),
                &CubeStyle::solid(CHECK_COLOR, 2.5),
            ),
            label(
                "verification_info",
                Vector::new(0.0, -100.0, 0.0),
                vec![
                    text(
                        "verify_title",
                        "Verification: 100% Complete".to_string(),
                        16.0,
                        -15.0,
                        "center",
                    ),
                    text(
                        "verify_formula",
                        format!("Volume of large cube = {} cm³", self.total_volume()),
                        16.0,
                        15.0,
                        "center",
                    ),
                ],
            ),
        ]
    }
}
