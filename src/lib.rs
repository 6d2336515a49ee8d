pub mod checker;
pub mod footprint;
pub mod grid;
pub mod iterators;
pub mod providers;
pub mod types;

pub use checker::{CheckerConfig, CollisionChecker, UnknownPolicy};
pub use grid::Costmap;
pub use types::{Footprint, MapInfo, Pose2, ScoreError};
