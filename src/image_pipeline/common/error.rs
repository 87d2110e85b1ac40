use thiserror::Error;

#[derive(Error, Debug)]
pub enum RailFinderError {
    #[error("Failed to load input image: {0}")]
    InputError(String),

    #[error("Expected 2 rail line candidates, found {found}")]
    InsufficientDetections { found: usize },

    #[error("Degenerate line geometry: {0}")]
    GeometryDegenerate(String),

    #[error("Centerline leaves the image at row {row}: x={x} outside [0, {width})")]
    OutOfBoundsRender { row: usize, x: i64, width: usize },

    #[error("Failed to write output image: {0}")]
    OutputError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RailFinderError>;

impl RailFinderError {
    /// Pipeline stage that raised the error, for diagnostics.
    pub fn stage(&self) -> &'static str {
        match self {
            RailFinderError::InputError(_) => "loader",
            RailFinderError::InsufficientDetections { .. } => "line detector",
            RailFinderError::GeometryDegenerate(_) => "line fitter",
            RailFinderError::OutOfBoundsRender { .. } => "renderer",
            RailFinderError::OutputError(_) => "writer",
            RailFinderError::InvalidConfig(_) => "configuration",
        }
    }
}
