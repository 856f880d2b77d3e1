//! Error types for model loading.

use thiserror::Error;

/// Error type for model asset operations.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The asset could not be fetched from its URL.
    #[error("Failed to fetch '{url}': {message}")]
    Fetch {
        /// URL or path that was requested.
        url: String,
        /// Error message.
        message: String,
    },

    /// IO error while reading a local file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a valid glTF/GLB document.
    #[error("glTF parse error: {0}")]
    Parse(#[from] gltf::Error),

    /// The document parsed but contains no triangle geometry.
    #[error("glTF document contains no triangle meshes")]
    NoGeometry,
}

/// Result type alias for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
