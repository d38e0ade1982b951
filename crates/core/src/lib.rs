pub mod bundle;
pub mod derive;
pub mod error;
pub mod loader;
pub mod media;
pub mod merge;
pub mod naming;
pub mod palette;
pub mod tokens;
pub mod types;

// Re-export commonly used types
pub use bundle::{bundle, bundle_strict};
pub use error::TokenError;
pub use loader::load_from_json;
pub use palette::{ColorAlias, Palette};
pub use tokens::TokenSet;
pub use types::{
    BuildResult, Diagnostic, DiagnosticLevel, SemanticTable, SharedVariables, TokenValue,
    VariableMap,
};
