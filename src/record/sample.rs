//! Ready-made "metal cubes" record.

use super::flat::FlatRecord;

/// A complete record for the five-metal-cubes problem.
///
/// It carries explicit visualization parameters, so building it never
/// needs the text-generation service for layout parameters.
pub fn sample_record() -> FlatRecord {
    [
        ("field", "value"),
        ("title", "Metal Cubes Challenge"),
        (
            "question_text",
            "<span class=\"highlight-given\">Five metal cubes with sides of 5 cm</span> were melted and casted into a bigger cube. Find the <span class=\"highlight-tofind\">volume</span> of the new cube.",
        ),
        ("given_1", "5 metal cubes with sides of 5 cm"),
        ("tofind_1", "Volume of new cube"),
        ("compute_step_1", "Formula: Volume = s³"),
        ("compute_step_2", "Solution: Volume of small cube = 5³"),
        ("compute_step_3", "= 5 × 5 × 5"),
        ("compute_step_4", "= 125 cm³"),
        ("compute_step_5", "Volume of large cube = 125 × 5"),
        ("compute_step_6", "= 625 cm³"),
        (
            "connect_question_1",
            "What is the formula for the volume of a cube?",
        ),
        ("connect_option_correct_1_1", "V = s³"),
        ("connect_option_wrong_1_1", "V = s²"),
        ("connect_option_wrong_1_2", "V = 6s²"),
        ("connect_option_wrong_1_3", "V = 4πs³/3"),
        ("visualization_type", "cubes_to_larger_cube"),
        (
            "visualization_params",
            "{\"small_cube_count\": 5, \"small_cube_size\": 5, \"small_cube_color\": \"#f47983\"}",
        ),
    ]
    .into_iter()
    .collect()
}
