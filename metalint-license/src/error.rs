use thiserror::Error;

/// Errors raised while preparing license texts.
#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("license unknown: {name}")]
    UnknownLicense { name: String },

    #[error("template {template}: unknown placeholder '{placeholder}'")]
    UnknownPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("template {template}: unterminated placeholder")]
    UnterminatedPlaceholder { template: String },

    /// The rendered notice is not a single `/*! ... */` block.
    #[error("invalid license notice: {message}")]
    InvalidNotice { message: String },

    #[error("io error: {message}")]
    Io { message: String },
}
