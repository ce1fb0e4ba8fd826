use std::fmt;

use crate::util::escape_attribute;

/// Third-party analytics providers, listed in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vendor {
    Umami,
    Google,
    MicrosoftClarity,
    Baidu,
}

impl Vendor {
    pub const ALL: [Vendor; 4] = [
        Vendor::Umami,
        Vendor::Google,
        Vendor::MicrosoftClarity,
        Vendor::Baidu,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Umami => "umami",
            Vendor::Google => "google",
            Vendor::MicrosoftClarity => "microsoftClarity",
            Vendor::Baidu => "baidu",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Vendor::Umami => "Umami",
            Vendor::Google => "Google Analytics",
            Vendor::MicrosoftClarity => "Microsoft Clarity",
            Vendor::Baidu => "Baidu Tongji",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptLoading {
    Defer,
    Async,
}

impl ScriptLoading {
    pub fn as_attribute(self) -> &'static str {
        match self {
            ScriptLoading::Defer => "defer",
            ScriptLoading::Async => "async",
        }
    }
}

/// A single `<script>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Script {
    External {
        src: String,
        loading: ScriptLoading,
        /// Extra attributes in emission order, e.g. `data-website-id`.
        attributes: Vec<(String, String)>,
    },
    Inline {
        body: String,
    },
}

impl Script {
    pub fn external(src: impl Into<String>, loading: ScriptLoading) -> Self {
        Script::External {
            src: src.into(),
            loading,
            attributes: Vec::new(),
        }
    }

    pub fn inline(body: impl Into<String>) -> Self {
        Script::Inline { body: body.into() }
    }

    /// Adds an attribute to an external script. Inline scripts carry no attributes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Script::External { attributes, .. } = &mut self {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            Script::External { src, .. } => Some(src),
            Script::Inline { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Script::External { .. } => None,
            Script::Inline { body } => Some(body),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Script::External { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            Script::Inline { .. } => None,
        }
    }

    /// Serializes the element. Attribute values are escaped, inline bodies are not.
    pub fn to_html(&self) -> String {
        match self {
            Script::External {
                src,
                loading,
                attributes,
            } => {
                let mut html = format!(
                    "<script {} src=\"{}\"",
                    loading.as_attribute(),
                    escape_attribute(src)
                );
                for (name, value) in attributes {
                    html.push_str(&format!(" {name}=\"{}\"", escape_attribute(value)));
                }
                html.push_str("></script>");
                html
            }
            Script::Inline { body } => format!("<script>{body}</script>"),
        }
    }
}

/// The markup one vendor contributes to the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub vendor: Vendor,
    pub scripts: Vec<Script>,
}

impl Fragment {
    pub fn new(vendor: Vendor, scripts: Vec<Script>) -> Self {
        Self { vendor, scripts }
    }

    pub fn to_html(&self) -> String {
        self.scripts
            .iter()
            .map(Script::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_script_html() {
        let script = Script::external("https://cloud.umami.is/script.js", ScriptLoading::Defer)
            .with_attribute("data-website-id", "abc");
        assert_eq!(
            script.to_html(),
            r#"<script defer src="https://cloud.umami.is/script.js" data-website-id="abc"></script>"#
        );
        assert_eq!(script.attribute("data-website-id"), Some("abc"));
        assert_eq!(script.body(), None);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let script = Script::external("https://x.example/a?b=1&c=2", ScriptLoading::Async)
            .with_attribute("data-id", "\"><script>");
        assert_eq!(
            script.to_html(),
            "<script async src=\"https://x.example/a?b=1&amp;c=2\" data-id=\"&quot;&gt;&lt;script&gt;\"></script>"
        );
    }

    #[test]
    fn inline_body_is_verbatim() {
        let script = Script::inline("if (a < b && c) {}").with_attribute("ignored", "x");
        assert_eq!(script.to_html(), "<script>if (a < b && c) {}</script>");
        assert_eq!(script.attribute("ignored"), None);
        assert_eq!(script.src(), None);
    }

    #[test]
    fn fragment_joins_scripts_by_line() {
        let fragment = Fragment::new(
            Vendor::Google,
            vec![
                Script::external("loader.js", ScriptLoading::Async),
                Script::inline("init();"),
            ],
        );
        assert_eq!(
            fragment.to_string(),
            "<script async src=\"loader.js\"></script>\n<script>init();</script>"
        );
    }

    #[test]
    fn vendor_labels() {
        assert_eq!(Vendor::MicrosoftClarity.as_str(), "microsoftClarity");
        assert_eq!(Vendor::Baidu.to_string(), "Baidu Tongji");
        assert!(Vendor::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
