//! Instructions for span, parameter and scene generation.

use super::generate::ProblemContext;
use super::params::{CubeParams, VisualizationKind, VisualizationParams};
use crate::genai::CompletionRequest;

const SPANS_INSTRUCTIONS: &str = r#"You are a mathematical problem analyzer specialized in identifying the 'given' information and 'to find' goals in word problems.
Your task is to extract these elements from the question text. The given information includes all numeric values, measurements, and stated facts.
The 'to find' information includes the specific question being asked or what needs to be calculated.

Output ONLY valid JSON with the following schema:
{
  "given": [
    "string containing a specific given fact or value",
    "another given item"
  ],
  "tofind": [
    "specific item or quantity that needs to be found",
    "another item to find (if applicable)"
  ]
}

Important:
- Extract COMPLETE phrases, not just numbers or fragments
- Include units with measurements
- Separate distinct given facts into separate list items
- If multiple quantities need to be found, list them separately"#;

const PARAMETERS_INSTRUCTIONS: &str = r#"You are a mathematical problem analyzer specialized in extracting numerical parameters and visualization types from problem text.
Your task is to extract all numeric values, counts, sizes, and to identify what type of visualization would be most appropriate.
Output ONLY valid JSON with the following schema:
{
  "visualization_type": "string (e.g., cubes_to_larger_cube, cylinder_volume, etc.)",
  "parameters": {
    "count": integer or null,
    "size": number or null,
    "colors": [string] or null,
    "other_relevant_params": any
  }
}"#;

const SCENE_INSTRUCTIONS: &str = r##"You are a 3D graphics expert specializing in converting mathematical problems into Zdog scene configurations.
Your task is to create UNIQUE Zdog scenes that visualize mathematical concepts for educational purposes.
Each visualization should be customized specifically for the individual problem, NOT a generic template.

Output ONLY valid JSON for Zdog scenes with this schema:
{
  "global": {
    "dragRotate": true,
    "zoom": 1.0,
    "backgroundColor": "#ffffff",
    "isometric": true
  },
  "scenes": {
    "comprehend_1": { "shapes": [] },
    "comprehend_2": { "shapes": [] },
    "comprehend_3": { "shapes": [] },
    "connect_1": { "shapes": [] },
    "compute_1": { "shapes": [] },
    ... (other scenes)
  }
}

Every shape is an object with "type", "id", "options" and optional "children".
Valid shape types are: Anchor, Box, Cone, Cylinder, Ellipse, Group, Hemisphere, Polygon, Rect, RoundedRect, Shape, Text.
Any other type makes the whole configuration unusable.

REQUIRED STRUCTURE FOR EACH CUBE:
- ALWAYS use a parent Group to contain each cube
- ALWAYS include both a solid filled cube AND a wireframe overlay for clear edges
- Example structure for a proper cube:

{
  "type": "Group",
  "id": "small_cube_group_1",
  "options": {
    "translate": {"x": 0, "y": 0, "z": 0}
  },
  "children": [
    {
      "type": "Box",
      "id": "small_cube_1",
      "options": {"width": 75, "height": 75, "depth": 75, "stroke": 0, "fill": true, "color": "#f47983"}
    },
    {
      "type": "Box",
      "id": "small_cube_wireframe_1",
      "options": {"width": 75, "height": 75, "depth": 75, "stroke": 2.5, "fill": false, "color": "#000000"}
    }
  ]
}

IMPORTANT VISUAL REQUIREMENTS:
- Create a UNIQUE visualization that specifically matches the problem context
- Use Groups and nested structures for complex elements
- DO NOT include reference grid or axes
- Add transition elements like arrows between scenes
- Use short Text labels for dimensions and results
- Make boxes at least 50 units wide so they are clearly visible"##;

const ENHANCE_INSTRUCTIONS: &str = "You are a 3D graphics expert specializing in enhancing Zdog scene configurations.
Your task is to take an existing Zdog configuration and enhance it with additional details,
while preserving its fundamental structure and mathematical correctness.

Output ONLY a valid JSON object for the enhanced Zdog scenes.";

pub(crate) fn spans_request(question: &str) -> CompletionRequest {
    CompletionRequest {
        instructions: SPANS_INSTRUCTIONS.to_string(),
        content: format!(
            "Analyze this mathematical problem and extract the given information and what needs to be found:\n\
             {question}\n\n\
             Return ONLY a JSON object with 'given' and 'tofind' arrays."
        ),
        temperature: 0.1,
        max_tokens: 500,
    }
}

pub(crate) fn parameters_request(problem_text: &str) -> CompletionRequest {
    CompletionRequest {
        instructions: PARAMETERS_INSTRUCTIONS.to_string(),
        content: format!(
            "Analyze this mathematical problem and extract parameters for visualization:\n\
             {problem_text}\n\n\
             Return ONLY a JSON object with visualization_type and parameters."
        ),
        temperature: 0.1,
        max_tokens: 500,
    }
}

pub(crate) fn scene_request(
    context: &ProblemContext,
    params: &VisualizationParams,
    kind: VisualizationKind,
) -> CompletionRequest {
    let bullets = |items: &[String]| {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let steps = context
        .compute_steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    let mut connect = String::new();
    if !context.connect_questions.is_empty() {
        connect.push_str("Connect Questions:\n");
        for (i, q) in context.connect_questions.iter().enumerate() {
            let correct = q.first_correct().map_or("", |o| o.text.as_str());
            connect.push_str(&format!(
                "{}. {}\n   Correct: {}\n",
                i + 1,
                q.question,
                correct
            ));
        }
    }

    let parameters = serde_json::to_string_pretty(&params.parameters).unwrap_or_default();

    CompletionRequest {
        instructions: SCENE_INSTRUCTIONS.to_string(),
        content: format!(
            "Create a completely UNIQUE and CUSTOM Zdog 3D scene configuration to visualize this specific mathematical problem:\n\n\
             COMPLETE PROBLEM CONTEXT:\n\
             Question: {question}\n\n\
             Given Items:\n{given}\n\n\
             To Find Items:\n{tofind}\n\n\
             Solution Steps:\n{steps}\n\n\
             {connect}\n\
             Final Answer: {answer}\n\n\
             VISUALIZATION TYPE: {kind}\n\n\
             PARAMETERS:\n{parameters}\n\n\
             {guidance}\n\n\
             IMPLEMENTATION GUIDANCE:\n\
             - Implement all scenes: comprehend (1-3), connect_1, compute (1-4), and check (1, 3, 5)\n\
             - Each scene should build upon the previous one to tell a coherent visual story\n\
             - For 3D primitives like boxes, cylinders, etc., always include the wireframe overlay\n\
             - Position elements with appropriate spacing for clarity\n\
             - Use colors that have good contrast and help distinguish different elements\n\n\
             Return ONLY a valid JSON object with global settings and scenes.",
            question = context.question,
            given = bullets(&context.given),
            tofind = bullets(&context.tofind),
            answer = context.final_answer,
            guidance = kind_guidance(kind, params),
        ),
        temperature: 0.3,
        max_tokens: 4000,
    }
}

pub(crate) fn enhance_request(
    context: &ProblemContext,
    params: &VisualizationParams,
    template_json: &str,
) -> CompletionRequest {
    let cubes = CubeParams::from_parameters(&params.parameters);

    CompletionRequest {
        instructions: ENHANCE_INSTRUCTIONS.to_string(),
        content: format!(
            "Enhance this Zdog scene configuration for a mathematical problem visualization:\n\n\
             PROBLEM:\n{question}\n\n\
             GIVEN:\n{given}\n\n\
             SOLUTION STEPS:\n{steps}\n\n\
             VISUALIZATION TYPE: {kind}\n\
             CUBES COUNT: {count}\n\
             CUBE SIZE: {size}\n\n\
             EXISTING CONFIGURATION:\n{template_json}\n\n\
             ENHANCEMENT GUIDELINES:\n\
             1. Preserve the existing structure and mathematical correctness\n\
             2. Add more detailed text labels to explain each step\n\
             3. Improve the positioning of elements for better visibility\n\
             4. Add transition arrows or indicators between transformation steps\n\
             5. Ensure all cubes have both solid fill AND wireframe overlay\n\
             6. Keep original cube counts and dimensions\n\
             7. Do not add, remove or change the number of scenes\n\n\
             Return ONLY the enhanced valid JSON configuration with no explanation.",
            question = context.question,
            given = context.given.join(", "),
            steps = context.compute_steps.join("\n"),
            kind = params.visualization_type,
            count = cubes.count,
            size = cubes.size,
        ),
        temperature: 0.2,
        max_tokens: 4000,
    }
}

fn kind_guidance(kind: VisualizationKind, params: &VisualizationParams) -> String {
    match kind {
        VisualizationKind::CubesToLargerCube => {
            let cubes = CubeParams::from_parameters(&params.parameters);
            let total = f64::from(cubes.count) * cubes.size.powi(3);
            format!(
                "Create scenes showing {count} small cubes with {size} cm sides being transformed into one larger cube.\n\
                 - Position small cubes in a pattern that's easily counted\n\
                 - Scale all cubes appropriately: small cubes should have dimensions of at least {min} units\n\
                 - Create a larger cube with appropriate dimensions scaled similarly\n\
                 - Include a transition in the compute_3 scene\n\
                 - Show proper dimensions with text labels\n\
                 - Compute the volume of the larger cube as {count} x {size}^3 = {total} cubic cm",
                count = cubes.count,
                size = cubes.size,
                min = cubes.size * 15.0,
            )
        }
        VisualizationKind::BoxHeight => "Create scenes showing a rectangular box/prism with focus on finding its height.\n\
             - Show the box with clear dimensions for length and width\n\
             - Use visual indicators to show that height is the unknown dimension\n\
             - Use Box elements with wireframe overlays for clear edges\n\
             - Include the formula: Height = Volume divided by (Length x Width)\n\
             - Use clear color coding to distinguish different dimensions\n\
             - Include a transition showing the height being revealed"
            .to_string(),
        VisualizationKind::CylinderVolume => "Create scenes showing a cylinder with focus on its volume calculation.\n\
             - Show the cylinder with clear radius and height measurements\n\
             - Use Cylinder elements with wireframe overlays\n\
             - Include the volume formula: V = πr²h\n\
             - Use clear color coding for different dimensions\n\
             - Show a cross-section view in one of the scenes if helpful"
            .to_string(),
        VisualizationKind::RectangularPrism | VisualizationKind::BoxVolume => {
            "Create scenes showing a rectangular prism/box with focus on volume calculation.\n\
             - Show the box with clear dimensions for length, width, and height\n\
             - Use Box elements with wireframe overlays for clear edges\n\
             - Include the formula: V = length x width x height\n\
             - Include layer-by-layer building or decomposition in one of the scenes\n\
             - Use clear color coding to distinguish different dimensions"
                .to_string()
        }
        other => format!(
            "Create scenes specific to the \"{other}\" visualization type.\n\
             - Customize the visualization to match the problem context\n\
             - Create progressive scenes that demonstrate the concept clearly\n\
             - Use 3D elements with both fill and wireframe overlays\n\
             - Include clear labeling and dimensional indicators\n\
             - Use color coding to distinguish different elements or dimensions"
        ),
    }
}
