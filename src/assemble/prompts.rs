//! Instructions sent to the text generator.

use crate::genai::CompletionRequest;

const DEFAULT_HINTS: &str =
    "Identify what's given, set up the appropriate equation, and solve step-by-step.";

pub(crate) fn title_request(grade: &str, concept: &str, question: &str) -> CompletionRequest {
    CompletionRequest {
        instructions: "You create concise, engaging titles for educational content.".to_string(),
        content: format!(
            "Create a brief, engaging title for a {grade} math applet about:\n\n\
             CONCEPT: {concept}\n\n\
             QUESTION: {question}\n\n\
             The title should be concise (3-5 words), catchy, and relevant to the mathematical concept.\n\
             Return ONLY the title, nothing else."
        ),
        temperature: 0.8,
        max_tokens: 50,
    }
}

pub(crate) fn compute_request(grade: &str, question: &str, hints: &[String]) -> CompletionRequest {
    let hints = if hints.is_empty() {
        DEFAULT_HINTS.to_string()
    } else {
        hints.join(", ")
    };

    CompletionRequest {
        instructions: format!(
            "You are a {grade} math teacher creating clear step-by-step solutions."
        ),
        content: format!(
            "Generate detailed step-by-step solution steps for this {grade} math problem:\n\n\
             PROBLEM:\n{question}\n\n\
             SOLUTION HINTS:\n{hints}\n\n\
             Format your response as a numbered list of computation steps, starting from identifying what's given,\n\
             and proceeding through each calculation to the final answer. Include at least 6-8 detailed steps.\n\
             Each step should be clear enough for a {grade} student to understand.\n\n\
             Make sure to break down the solution into many small steps rather than combining multiple calculations into one step.\n\
             Return ONLY the numbered steps, no explanations or other text.\n\n\
             Example format:\n\
             Step 1: Identify what is given...\n\
             Step 2: Calculate...\n\
             etc."
        ),
        temperature: 0.7,
        max_tokens: 1000,
    }
}

pub(crate) fn check_request(grade: &str, question: &str, compute_steps: &[String]) -> CompletionRequest {
    CompletionRequest {
        instructions: format!(
            "You are a {grade} math teacher creating verification steps for students."
        ),
        content: format!(
            "Generate 5 check/verification steps for this {grade} math problem and solution:\n\n\
             PROBLEM:\n{question}\n\n\
             SOLUTION:\n{solution}\n\n\
             I need 5 check steps that a student could use to verify their work or explore variations of this problem.\n\
             Each check step should be a complete sentence. These will be used for a slider in an interactive applet.\n\n\
             Example format:\n\
             1. Check if...\n\
             2. Try calculating...\n\
             3. Compare...\n\
             etc.\n\n\
             Return ONLY the 5 numbered check steps, no other text.",
            solution = compute_steps.join(" ")
        ),
        temperature: 0.7,
        max_tokens: 750,
    }
}

pub(crate) fn connect_request(
    grade: &str,
    question: &str,
    compute_steps: &[String],
) -> CompletionRequest {
    CompletionRequest {
        instructions: format!(
            "You are a {grade} math teacher creating conceptual multiple-choice questions."
        ),
        content: format!(
            "Create 2 multiple-choice connect questions for this {grade} math problem:\n\n\
             PROBLEM:\n{question}\n\n\
             SOLUTION:\n{solution}\n\n\
             Each connect question should test the student's conceptual understanding, not just calculation ability.\n\
             For each question, provide 1 correct answer and 3 wrong answers that are plausible but incorrect.\n\n\
             Format your response as valid JSON with this structure:\n\
             [\n\
             \x20 {{\n\
             \x20   \"question\": \"Question text here?\",\n\
             \x20   \"options\": [\n\
             \x20     {{\"text\": \"Correct answer here\", \"correct\": true}},\n\
             \x20     {{\"text\": \"Wrong answer 1\", \"correct\": false}},\n\
             \x20     {{\"text\": \"Wrong answer 2\", \"correct\": false}},\n\
             \x20     {{\"text\": \"Wrong answer 3\", \"correct\": false}}\n\
             \x20   ]\n\
             \x20 }}\n\
             ]\n\n\
             The questions should be specific to the mathematical concepts in this problem.",
            solution = compute_steps.join(" ")
        ),
        temperature: 0.7,
        max_tokens: 1000,
    }
}
