/// Placeholder token substituted into task description templates.
pub const USER_INPUT_PLACEHOLDER: &str = "{{user_input}}";

/// Replace every occurrence of the placeholder with `input`.
///
/// No escaping: if `input` itself contains the placeholder token it is
/// inserted verbatim and left alone (known limitation, kept intentionally).
pub fn render(template: &str, input: &str) -> String {
    if template.is_empty() {
        return String::new();
    }
    template.replace(USER_INPUT_PLACEHOLDER, input)
}
