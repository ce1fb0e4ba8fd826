use wasm_bindgen::JsCast;

use crate::analytics::error::{internal_error, AnalyticsResult};
use crate::analytics::fragment::{Fragment, Script, ScriptLoading};

/// Appends every script of `fragments` to `document.head`, returning how many were added.
pub fn inject_into_head(fragments: &[Fragment]) -> AnalyticsResult<usize> {
    let window = web_sys::window().ok_or_else(|| internal_error("Window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| internal_error("Document not available"))?;
    let head = document
        .head()
        .ok_or_else(|| internal_error("Document has no <head>"))?;

    let mut appended = 0;
    for fragment in fragments {
        for script in &fragment.scripts {
            let element = create_script(&document, script)?;
            head.append_child(&element).map_err(|err| {
                internal_error(format!(
                    "Failed to append {} script to <head>: {err:?}",
                    fragment.vendor
                ))
            })?;
            appended += 1;
        }
        log::debug!("injected {} snippet", fragment.vendor);
    }
    Ok(appended)
}

fn create_script(
    document: &web_sys::Document,
    script: &Script,
) -> AnalyticsResult<web_sys::HtmlScriptElement> {
    let element = document
        .create_element("script")
        .map_err(|err| internal_error(format!("Failed to create script: {err:?}")))?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .map_err(|_| internal_error("Script element has wrong type"))?;

    match script {
        Script::External {
            src,
            loading,
            attributes,
        } => {
            match loading {
                ScriptLoading::Defer => element.set_defer(true),
                ScriptLoading::Async => element.set_async(true),
            }
            element.set_src(src);
            for (name, value) in attributes {
                element.set_attribute(name, value).map_err(|err| {
                    internal_error(format!("Failed to set attribute `{name}`: {err:?}"))
                })?;
            }
        }
        Script::Inline { body } => {
            element
                .set_text(body)
                .map_err(|err| internal_error(format!("Failed to set script text: {err:?}")))?;
        }
    }
    Ok(element)
}
