use crate::layout::Size;

/// Errors raised by the geometry layer.
///
/// Most "no answer" outcomes are expressed as `Option` (see `CubicBezier::parse`,
/// `Point::try_project_on`); only construction-time violations and unusable
/// matrices are errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("minimum size {minimum} is greater than preferred {preferred}")]
    MinimumExceedsPreferred { minimum: Size, preferred: Size },
    #[error("matrix is not invertible")]
    SingularMatrix,
    #[error("invalid matrix text: {0}")]
    InvalidMatrix(String),
}
