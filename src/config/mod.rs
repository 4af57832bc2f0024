mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod loader_config;
pub use self::loader_config::LoaderConfig;
pub mod pipeline_config;
pub use self::pipeline_config::PipelineConfig;
