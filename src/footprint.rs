//! Rigid-body transforms for footprint polygons.
//!
//! Incoming footprint snapshots are published already oriented at the robot's
//! actual pose. Scoring hypothesizes the footprint at a candidate pose, so the
//! snapshot is first unoriented into a pose-invariant template and then
//! re-projected. Both directions are pure functions so the round trip can be
//! verified in isolation.

use glam::Vec2;

use crate::types::{Footprint, Pose2};

/// Place a footprint template at a pose: rotate every vertex by `yaw` about
/// the origin, then translate by the pose position. Length and vertex order
/// are preserved.
pub fn orient_footprint(footprint: &Footprint, pose: Pose2) -> Footprint {
    let rot = Vec2::from_angle(pose.yaw);
    Footprint {
        points: footprint
            .points
            .iter()
            .map(|p| rot.rotate(*p) + pose.position)
            .collect(),
    }
}

/// Inverse of [`orient_footprint`]: undo the translation, then the rotation.
///
/// Recovers the template footprint in the frame where `pose` is the identity.
pub fn unorient_footprint(footprint: &Footprint, pose: Pose2) -> Footprint {
    let rot = Vec2::from_angle(-pose.yaw);
    Footprint {
        points: footprint
            .points
            .iter()
            .map(|p| rot.rotate(*p - pose.position))
            .collect(),
    }
}
