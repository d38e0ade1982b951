pub mod emit;
pub mod ir;

// Re-export main functions
pub use emit::{emit_css, render_stylesheet};
pub use ir::{create_custom_media_rule, create_root_rule, create_stylesheet};

// Re-export SWC CSS types
pub use swc_css_ast::Stylesheet;
