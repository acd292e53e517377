use regex::Regex;

use crate::instance::InternalRow;

/// Expands `{placeholder}` URL templates against a row's resolved values.
///
/// A template without placeholders is a literal URL and passes through
/// unchanged. When placeholders are present, each is substituted with the
/// row's value for that internal column name (missing names substitute to
/// the empty string). If the value bound to the last placeholder is empty,
/// the whole expansion evaluates to the empty string: callers treat an
/// empty result as "does not apply to this row" and skip emission rather
/// than emit a broken URL.
///
/// Note the gate inspects only the last placeholder, not every one. A
/// template whose earlier placeholder is empty but whose last is not still
/// yields the partially-filled string. Downstream schemas depend on this.
pub struct TemplateResolver {
    pattern: Regex,
}

impl TemplateResolver {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"),
        }
    }

    pub fn resolve(&self, template: &str, row: &InternalRow) -> String {
        let mut resolved = String::new();
        let mut last_value = "";
        let mut cursor = 0;
        let mut saw_placeholder = false;

        for captures in self.pattern.captures_iter(template) {
            saw_placeholder = true;
            let placeholder = captures.get(0).expect("capture 0 always present");
            let key = &captures[1];
            let value = row.get(key).unwrap_or_default();

            resolved.push_str(&template[cursor..placeholder.start()]);
            resolved.push_str(value);
            last_value = value;
            cursor = placeholder.end();
        }

        if !saw_placeholder {
            return template.to_string();
        }

        if last_value.is_empty() {
            return String::new();
        }

        resolved.push_str(&template[cursor..]);
        resolved
    }
}

impl Default for TemplateResolver {
    fn default() -> Self {
        Self::new()
    }
}
