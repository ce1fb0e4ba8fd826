#![cfg(all(target_arch = "wasm32", feature = "wasm-web"))]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_analytics::analytics::{
    inject_into_head, render, AnalyticsConfig, GoogleConfig, UmamiConfig,
};
use web_analytics::platform::BuildMode;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn injects_scripts_into_head() {
    let config = AnalyticsConfig::enabled()
        .with_umami(UmamiConfig::new("wasm-site"))
        .with_google(GoogleConfig::new("G-WASM"));
    let fragments = render(&config, BuildMode::Production);

    let appended = inject_into_head(&fragments).expect("inject");
    assert_eq!(appended, 3);

    let document = web_sys::window().unwrap().document().unwrap();
    let umami = document
        .query_selector("script[data-website-id=\"wasm-site\"]")
        .unwrap()
        .expect("umami script")
        .dyn_into::<web_sys::HtmlScriptElement>()
        .unwrap();
    assert!(umami.defer());
    assert_eq!(umami.src(), "https://cloud.umami.is/script.js");

    let head_html = document.head().unwrap().inner_html();
    assert!(head_html.contains("gtag('config', 'G-WASM');"));
}

#[wasm_bindgen_test]
fn empty_render_injects_nothing() {
    let fragments = render(&AnalyticsConfig::enabled(), BuildMode::Production);
    assert_eq!(inject_into_head(&fragments).unwrap(), 0);
}
