//! Placeholder substitution for the applet page.
//!
//! # Syntax
//!
//! - `{{name}}` is replaced by the value of `name`, where `name` consists of
//!   ASCII letters, digits and underscores.
//! - Any other `{{` is copied through untouched, so the braces of inline
//!   scripts and styles need no escaping.
//!
//! Substitution is a single pass: values are never re-scanned, so a value
//! containing `{{title}}` is inserted literally.

use std::collections::HashMap;

/// A rendered template and the placeholders it could not fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Names of placeholders without a value, in order of first appearance.
    pub leftover: Vec<String>,
}

/// Render a template by substituting `{{name}}` placeholders.
///
/// Placeholders without a value stay in the output verbatim and are listed
/// in [`Rendered::leftover`].
///
/// # Examples
///
/// ```ignore
/// let vars = vars([("title", "Cubes")]);
/// let page = render_template("<h1>{{title}}</h1>{{footer}}", &vars);
/// assert_eq!(page.text, "<h1>Cubes</h1>{{footer}}");
/// assert_eq!(page.leftover, vec!["footer"]);
/// ```
pub fn render_template(template: &str, variables: &HashMap<String, String>) -> Rendered {
    let mut text = String::with_capacity(template.len());
    let mut leftover: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        text.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) if is_placeholder_name(&after[..end]) => {
                let name = &after[..end];
                match variables.get(name) {
                    Some(value) => text.push_str(value),
                    None => {
                        text.push_str(&rest[start..start + end + 4]);
                        if !leftover.iter().any(|n| n == name) {
                            leftover.push(name.to_string());
                        }
                    }
                }
                rest = &after[end + 2..];
            }
            _ => {
                // Not a placeholder; keep the braces and continue after them.
                text.push_str("{{");
                rest = after;
            }
        }
    }
    text.push_str(rest);

    Rendered { text, leftover }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let vars = vars([("title", "Cubes"), ("question_text", "How many?")]);
        let result = render_template("<h1>{{title}}</h1><p>{{question_text}}</p>", &vars);
        assert_eq!(result.text, "<h1>Cubes</h1><p>How many?</p>");
        assert!(result.leftover.is_empty());
    }

    #[test]
    fn test_no_placeholders() {
        let result = render_template("Just plain text", &HashMap::new());
        assert_eq!(result.text, "Just plain text");
    }

    #[test]
    fn test_empty_template() {
        let result = render_template("", &HashMap::new());
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_script_braces_pass_through() {
        let vars = vars([("x", "1")]);
        let template = "function f() {{ return {a: {b: 2}}; }} var x = {{x}};";
        let result = render_template(template, &vars);
        assert_eq!(
            result.text,
            "function f() {{ return {a: {b: 2}}; }} var x = 1;"
        );
        assert!(result.leftover.is_empty());
    }

    #[test]
    fn test_unknown_placeholder_is_kept_and_reported_once() {
        let vars = vars([("title", "T")]);
        let result = render_template("{{title}} {{footer}} {{footer}} {{other}}", &vars);
        assert_eq!(result.text, "T {{footer}} {{footer}} {{other}}");
        assert_eq!(result.leftover, vec!["footer", "other"]);
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let vars = vars([("a", "{{b}}"), ("b", "B")]);
        let result = render_template("{{a}}", &vars);
        assert_eq!(result.text, "{{b}}");
        assert!(result.leftover.is_empty());
    }

    #[test]
    fn test_single_braces_are_not_placeholders() {
        let vars = vars([("name", "Alice")]);
        let result = render_template("Hello {name} and {{name}}", &vars);
        assert_eq!(result.text, "Hello {name} and Alice");
    }

    #[test]
    fn test_unterminated_placeholder_is_copied() {
        let vars = vars([("name", "Alice")]);
        let result = render_template("Hello {{name", &vars);
        assert_eq!(result.text, "Hello {{name");
    }

    #[test]
    fn test_multiple_occurrences_and_adjacent() {
        let vars = vars([("a", "A"), ("b", "B")]);
        let result = render_template("{{a}}{{b}}-{{a}}", &vars);
        assert_eq!(result.text, "AB-A");
    }

    #[test]
    fn test_multiline_and_unicode_values() {
        let vars = vars([("body", "line1\nline2"), ("unit", "cm³")]);
        let result = render_template("Content:\n{{body}} {{unit}}", &vars);
        assert_eq!(result.text, "Content:\nline1\nline2 cm³");
    }

    #[test]
    fn test_vars_helper() {
        let vars = vars([("a", "1"), ("b", "2")]);
        assert_eq!(vars.get("a"), Some(&"1".to_string()));
        assert_eq!(vars.get("b"), Some(&"2".to_string()));
    }
}
