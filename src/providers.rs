//! Collaborator interfaces for the data the checker pulls per scoring call.
//!
//! The checker never caches beyond one call and never mutates what it is
//! handed; providers must return snapshot references that stay stable for the
//! duration of a single call even if a newer snapshot is being prepared
//! concurrently.

use std::sync::Arc;

use crate::grid::Costmap;
use crate::types::{Footprint, Pose2, PoseLookupError, ProviderError};

/// Supplies the latest cost grid snapshot.
pub trait MapProvider {
    fn current_map(&self) -> Result<Arc<Costmap>, ProviderError>;
}

/// Supplies the latest footprint polygon, oriented at the robot's actual pose.
pub trait FootprintProvider {
    fn current_footprint(&self) -> Result<Footprint, ProviderError>;
}

/// Resolves the robot base pose in the given global frame.
///
/// Implementations classify lookup failures into the [`PoseLookupError`]
/// sub-causes; the checker treats them all the same.
pub trait PoseProvider {
    fn robot_pose(
        &self,
        global_frame: &str,
        robot_base_frame: &str,
    ) -> Result<Pose2, PoseLookupError>;
}

/// Fixed in-memory map provider, for tests, benches, and embedding without a
/// live middleware stack.
pub struct StaticMap(Arc<Costmap>);

impl StaticMap {
    pub fn new(map: Costmap) -> Self {
        Self(Arc::new(map))
    }
}

impl MapProvider for StaticMap {
    fn current_map(&self) -> Result<Arc<Costmap>, ProviderError> {
        Ok(Arc::clone(&self.0))
    }
}

/// Fixed in-memory footprint provider.
pub struct StaticFootprint(pub Footprint);

impl FootprintProvider for StaticFootprint {
    fn current_footprint(&self) -> Result<Footprint, ProviderError> {
        Ok(self.0.clone())
    }
}

/// Fixed in-memory pose provider.
pub struct StaticPose(pub Pose2);

impl PoseProvider for StaticPose {
    fn robot_pose(
        &self,
        _global_frame: &str,
        _robot_base_frame: &str,
    ) -> Result<Pose2, PoseLookupError> {
        Ok(self.0)
    }
}
