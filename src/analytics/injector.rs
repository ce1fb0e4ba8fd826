use crate::analytics::config::AnalyticsConfig;
use crate::analytics::fragment::Fragment;
use crate::analytics::vendors::GENERATORS;
use crate::platform::environment::{self, BuildMode};

/// Renders the analytics snippets for the document head.
///
/// Returns nothing in development builds or when `config.enable` is false. Otherwise each
/// vendor is checked independently and the resulting fragments come back in the fixed order
/// Umami, Google, Microsoft Clarity, Baidu.
pub fn render(config: &AnalyticsConfig, mode: BuildMode) -> Vec<Fragment> {
    if mode.is_development() {
        log::debug!("skipping analytics in {mode} build");
        return Vec::new();
    }
    if !config.enable {
        log::debug!("analytics disabled by config");
        return Vec::new();
    }

    let fragments: Vec<Fragment> = GENERATORS
        .iter()
        .filter_map(|(vendor, generate)| {
            let fragment = generate(config);
            if fragment.is_some() {
                log::debug!("rendering {vendor} snippet from `analytics.{}`", vendor.as_str());
            }
            fragment
        })
        .collect();

    if fragments.is_empty() {
        log::warn!("analytics is enabled but no vendor identifier is configured");
    }
    fragments
}

/// Same as [`render`], serialized as HTML with one `<script>` element per line.
pub fn render_html(config: &AnalyticsConfig, mode: BuildMode) -> String {
    fragments_to_html(&render(config, mode))
}

pub fn fragments_to_html(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(Fragment::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A config paired with the build mode it renders for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyticsInjector {
    config: AnalyticsConfig,
    mode: BuildMode,
}

impl AnalyticsInjector {
    /// Creates an injector for a production build.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            mode: BuildMode::Production,
        }
    }

    /// Loads the config from `WEB_ANALYTICS_CONFIG` and detects the build mode.
    ///
    /// A missing config yields a disabled injector rather than an error.
    pub fn from_env() -> Self {
        let config = environment::analytics_config_from_env().unwrap_or_default();
        Self {
            config,
            mode: environment::build_mode(),
        }
    }

    pub fn with_build_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn build_mode(&self) -> BuildMode {
        self.mode
    }

    pub fn fragments(&self) -> Vec<Fragment> {
        render(&self.config, self.mode)
    }

    pub fn to_html(&self) -> String {
        render_html(&self.config, self.mode)
    }
}
