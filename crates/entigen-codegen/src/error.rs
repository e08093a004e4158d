//! Error types for entity generation

use entigen_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Template error in '{template}': {message}")]
    Template { template: String, message: String },

    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl CodegenError {
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        CodegenError::Template {
            template: template.into(),
            message: message.into(),
        }
    }
}
