pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::{GridError, PoseLookupError, ProviderError, ScoreError};
pub use geometry::{Footprint, Pose2};
pub use info::MapInfo;
