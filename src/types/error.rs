use thiserror::Error;

/// Costmap construction failure.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Opaque failure reported by a map or footprint provider.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// Transform lookup failure, classified by the pose provider.
///
/// The checker collapses all three into [`ScoreError::PoseUnavailable`]: the
/// caller's remedy is the same for each (retry on the next control cycle).
#[derive(Debug, Clone, Error)]
pub enum PoseLookupError {
    #[error("transform lookup failed: {0}")]
    Lookup(String),
    #[error("transform connectivity error: {0}")]
    Connectivity(String),
    #[error("transform extrapolation error: {0}")]
    Extrapolation(String),
}

/// Failure kinds for scoring a candidate pose.
///
/// A successful score is a plain `u8` cost; invalidity is always signaled
/// through one of these kinds, never through a sentinel score value.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// A world coordinate (the pose or a footprint vertex) cannot be mapped
    /// into the grid. The candidate pose is invalid as given.
    #[error("off grid: {0}")]
    OffGrid(String),
    /// The footprint boundary touches a lethal cell. Definitive rejection.
    #[error("footprint hits obstacle at cell ({0}, {1})")]
    Collision(u32, u32),
    /// The footprint boundary touches a no-information cell.
    #[error("footprint crosses unknown space at cell ({0}, {1})")]
    UnknownRegion(u32, u32),
    /// The map provider could not supply a grid snapshot. Transient.
    #[error("costmap unavailable: {0}")]
    MapUnavailable(#[source] ProviderError),
    /// The footprint provider could not supply a polygon. Transient.
    #[error("footprint unavailable: {0}")]
    FootprintUnavailable(#[source] ProviderError),
    /// The robot's current pose could not be resolved. Transient.
    #[error("robot pose unavailable: {0}")]
    PoseUnavailable(#[source] PoseLookupError),
}
