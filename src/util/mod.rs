pub mod html;
pub mod template;

pub use html::escape_attribute;
pub use template::{replace_template, Template, TemplateData};
