//! Archive pipeline configuration types

/// Configuration for packing raw images into archives and restoring them
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Format tag stored in every archive produced by the pipeline
    pub extension: String,
    /// Whether to validate image dimensions before packing and after loading
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validation is enabled
    pub max_dimension: Option<usize>,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            extension: "pgm".to_string(),
            validate_dimensions: true,
            max_dimension: Some(65535),
        }
    }
}

impl ArchiveConfig {
    pub fn builder() -> ArchiveConfigBuilder {
        ArchiveConfigBuilder::default()
    }
}

/// Builder for ArchiveConfig
#[derive(Default)]
pub struct ArchiveConfigBuilder {
    extension: Option<String>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ArchiveConfigBuilder {
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ArchiveConfig {
        let default = ArchiveConfig::default();
        ArchiveConfig {
            extension: self.extension.unwrap_or(default.extension),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
