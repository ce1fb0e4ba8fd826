pub mod environment;

pub use environment::{analytics_config_from_env, build_mode, is_development_build, BuildMode};
