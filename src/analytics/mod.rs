mod config;
mod constants;
pub mod error;
mod fragment;
mod injector;
mod vendors;
#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
mod web;

pub use config::{AnalyticsConfig, BaiduConfig, ClarityConfig, GoogleConfig, UmamiConfig};
pub use constants::DEFAULT_UMAMI_SERVER_URL;
pub use error::{AnalyticsError, AnalyticsErrorCode, AnalyticsResult};
pub use fragment::{Fragment, Script, ScriptLoading, Vendor};
pub use injector::{fragments_to_html, render, render_html, AnalyticsInjector};
pub use vendors::{baidu_fragment, clarity_fragment, google_fragment, umami_fragment};
#[cfg(all(feature = "wasm-web", target_arch = "wasm32"))]
pub use web::inject_into_head;
