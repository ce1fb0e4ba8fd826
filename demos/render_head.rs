//! Prints the analytics `<head>` snippets for a site config.
//!
//! Usage: `cargo run --example render_head -- path/to/config.json`
//! Without an argument the config is taken from `WEB_ANALYTICS_CONFIG`.

use web_analytics::analytics::{AnalyticsConfig, AnalyticsInjector};
use web_analytics::platform::build_mode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let injector = match std::env::args().nth(1) {
        Some(path) => {
            AnalyticsInjector::new(AnalyticsConfig::from_path(path)?).with_build_mode(build_mode())
        }
        None => AnalyticsInjector::from_env(),
    };

    let html = injector.to_html();
    if html.is_empty() {
        eprintln!(
            "No analytics rendered (build mode: {}, enabled: {}).",
            injector.build_mode(),
            injector.config().enable
        );
    } else {
        println!("{html}");
    }

    Ok(())
}
