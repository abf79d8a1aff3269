//! Error types for seiscut.

/// Result type alias for seiscut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for seiscut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to open the origin catalog file.
    #[error("failed to read catalog file '{path}'")]
    CatalogRead {
        /// Path to the catalog file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A catalog line could not be parsed into an origin.
    ///
    /// Fatal for the run: deduplication state depends on seeing every
    /// line in catalog order.
    #[error("malformed catalog line {line}: {message}")]
    CatalogFormat {
        /// 1-based line number in the catalog file.
        line: usize,
        /// Description of the parse failure.
        message: String,
    },

    /// Failed to read a day-volume that exists on disk.
    ///
    /// Distinct from a missing volume, which is an expected archive gap
    /// and never surfaces as an error.
    #[error("failed to read day-volume '{path}'")]
    VolumeRead {
        /// Path to the day-volume file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A day-volume has an unusable header (multi-channel or zero rate).
    #[error("unsupported day-volume layout in '{path}': {message}")]
    VolumeLayout {
        /// Path to the day-volume file.
        path: std::path::PathBuf,
        /// Description of the layout problem.
        message: String,
    },

    /// Failed to create or remove an event directory.
    #[error("failed to prepare event directory '{path}'")]
    EventDir {
        /// Path to the event directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a waveform segment file.
    #[error("failed to write segment file '{path}'")]
    SegmentWrite {
        /// Path to the segment file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to write the event metadata record.
    #[error("failed to write event metadata '{path}'")]
    MetadataWrite {
        /// Path to the metadata file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
