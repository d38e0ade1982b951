pub mod bundler;
pub mod error;
pub mod options;
pub mod postcss;
pub mod scoped_name;

pub use bundler::{BundlerConfig, Loader, LoaderRule, OutputConfig, PluginConfig};
pub use error::PipelineError;
pub use options::{Mode, PipelineOptions};
pub use postcss::PostcssConfig;
pub use scoped_name::generate_scoped_name;
