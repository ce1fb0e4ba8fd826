use std::collections::BTreeMap;

pub type TemplateData = BTreeMap<String, String>;

/// A fixed text template with `{$name}` placeholders.
///
/// Substituted values are inserted verbatim and never rescanned, so a value
/// that itself contains `{$...}` is emitted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template(&'static str);

impl Template {
    pub const fn new(source: &'static str) -> Self {
        Self(source)
    }

    /// Renders the template with a single `{$key}` substitution.
    pub fn render_one(&self, key: &str, value: &str) -> String {
        let mut data = TemplateData::new();
        data.insert(key.to_string(), value.to_string());
        replace_template(self.0, &data)
    }

    pub fn render<I, K, V>(&self, data: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let data = data
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<TemplateData>();
        replace_template(self.0, &data)
    }
}

pub fn replace_template(template: &str, data: &TemplateData) -> String {
    let mut result = String::with_capacity(template.len());
    let mut remainder = template;

    while let Some(start) = remainder.find("{$") {
        let (head, tail) = remainder.split_at(start);
        result.push_str(head);
        if let Some(end) = tail.find('}') {
            let key = &tail[2..end];
            match data.get(key) {
                Some(value) => result.push_str(value),
                None => {
                    log::warn!("template placeholder `{key}` has no value");
                    result.push_str(&format!("<{key}?>"));
                }
            }
            remainder = &tail[end + 1..];
        } else {
            // Unterminated placeholder: keep the rest literally.
            result.push_str(tail);
            remainder = "";
            break;
        }
    }

    result.push_str(remainder);
    result
}
