//! Per-vendor snippet generators.
//!
//! Each generator returns `None` when the vendor's identifier is missing or empty. Identifiers
//! are substituted verbatim; validating them is left to the vendor's own script.

use crate::analytics::config::{AnalyticsConfig, BaiduConfig, ClarityConfig, GoogleConfig, UmamiConfig};
use crate::analytics::constants::{
    BAIDU_BOOTSTRAP, CLARITY_BOOTSTRAP, GTAG_BOOTSTRAP, GTAG_SCRIPT_URL, UMAMI_WEBSITE_ID_ATTRIBUTE,
};
use crate::analytics::fragment::{Fragment, Script, ScriptLoading, Vendor};

type Generator = fn(&AnalyticsConfig) -> Option<Fragment>;

/// Vendor generators in render order.
pub(crate) const GENERATORS: [(Vendor, Generator); 4] = [
    (Vendor::Umami, umami_from),
    (Vendor::Google, google_from),
    (Vendor::MicrosoftClarity, clarity_from),
    (Vendor::Baidu, baidu_from),
];

fn umami_from(config: &AnalyticsConfig) -> Option<Fragment> {
    config.umami.as_ref().and_then(umami_fragment)
}

fn google_from(config: &AnalyticsConfig) -> Option<Fragment> {
    config.google.as_ref().and_then(google_fragment)
}

fn clarity_from(config: &AnalyticsConfig) -> Option<Fragment> {
    config.microsoft_clarity.as_ref().and_then(clarity_fragment)
}

fn baidu_from(config: &AnalyticsConfig) -> Option<Fragment> {
    config.baidu.as_ref().and_then(baidu_fragment)
}

pub fn umami_fragment(config: &UmamiConfig) -> Option<Fragment> {
    let website_id = config.website_id()?;
    let script = Script::external(config.script_src(), ScriptLoading::Defer)
        .with_attribute(UMAMI_WEBSITE_ID_ATTRIBUTE, website_id);
    Some(Fragment::new(Vendor::Umami, vec![script]))
}

pub fn google_fragment(config: &GoogleConfig) -> Option<Fragment> {
    let measurement_id = config.measurement_id()?;
    let loader = Script::external(
        GTAG_SCRIPT_URL.render_one("measurementId", measurement_id),
        ScriptLoading::Async,
    );
    let bootstrap = Script::inline(GTAG_BOOTSTRAP.render_one("measurementId", measurement_id));
    Some(Fragment::new(Vendor::Google, vec![loader, bootstrap]))
}

pub fn clarity_fragment(config: &ClarityConfig) -> Option<Fragment> {
    let project_id = config.project_id()?;
    let script = Script::inline(CLARITY_BOOTSTRAP.render_one("projectId", project_id));
    Some(Fragment::new(Vendor::MicrosoftClarity, vec![script]))
}

pub fn baidu_fragment(config: &BaiduConfig) -> Option<Fragment> {
    let project_id = config.project_id()?;
    let script = Script::inline(BAIDU_BOOTSTRAP.render_one("projectId", project_id));
    Some(Fragment::new(Vendor::Baidu, vec![script]))
}
