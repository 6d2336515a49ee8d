//! Footprint collision scoring for candidate trajectory poses.

use glam::UVec2;
use tracing::debug;

use crate::footprint::{orient_footprint, unorient_footprint};
use crate::grid::Costmap;
use crate::iterators::LineIterator;
use crate::providers::{FootprintProvider, MapProvider, PoseProvider};
use crate::types::{Pose2, ProviderError, ScoreError, LETHAL, UNKNOWN};

/// How to treat no-information cells on the footprint boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Reject the candidate pose as soon as the boundary touches unknown
    /// space.
    Reject,
    /// Skip unknown cells during aggregation. Their encoding is a sentinel,
    /// not a traversal cost, so they contribute nothing to the score.
    Tolerate,
}

/// Checker configuration, read at construction rather than per call.
///
/// The frame identifiers only parameterize the pose-provider lookup; the
/// checker does not interpret frame semantics itself.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub global_frame: String,
    pub robot_base_frame: String,
    pub unknown_policy: UnknownPolicy,
}

impl CheckerConfig {
    pub fn new(
        global_frame: impl Into<String>,
        robot_base_frame: impl Into<String>,
        unknown_policy: UnknownPolicy,
    ) -> Self {
        Self {
            global_frame: global_frame.into(),
            robot_base_frame: robot_base_frame.into(),
            unknown_policy,
        }
    }
}

/// Scores a robot footprint placed at a candidate pose against the current
/// costmap.
///
/// Holds no state across calls: each scoring call pulls fresh map, footprint,
/// and robot-pose snapshots from the injected providers, so one checker can
/// serve multiple evaluation threads scoring different candidates
/// concurrently.
pub struct CollisionChecker<M, F, P> {
    config: CheckerConfig,
    maps: M,
    footprints: F,
    poses: P,
}

impl<M, F, P> CollisionChecker<M, F, P>
where
    M: MapProvider,
    F: FootprintProvider,
    P: PoseProvider,
{
    pub fn new(config: CheckerConfig, maps: M, footprints: F, poses: P) -> Self {
        Self {
            config,
            maps,
            footprints,
            poses,
        }
    }

    /// Score the footprint placed at `pose`.
    ///
    /// Returns the maximum ordinary cell cost found along the footprint
    /// boundary: a single severe cell anywhere on the perimeter dominates the
    /// score. Interior cells are deliberately not sampled; rasterizing only
    /// the boundary trades exhaustive coverage for speed, which is sound for
    /// convex footprints against obstacles registered at their true extent.
    pub fn score_footprint_at_pose(&self, pose: Pose2) -> Result<u8, ScoreError> {
        let map = self.maps.current_map().map_err(ScoreError::MapUnavailable)?;

        // Cheap validity gate before any polygon work.
        map.world_to_map(&pose.position).ok_or_else(|| {
            ScoreError::OffGrid(format!(
                "pose ({:.2}, {:.2})",
                pose.position.x, pose.position.y
            ))
        })?;

        let oriented = self
            .footprints
            .current_footprint()
            .map_err(ScoreError::FootprintUnavailable)?;
        if oriented.points.len() < 2 {
            return Err(ScoreError::FootprintUnavailable(ProviderError(format!(
                "degenerate footprint with {} points",
                oriented.points.len()
            ))));
        }

        let robot_pose = self
            .poses
            .robot_pose(&self.config.global_frame, &self.config.robot_base_frame)
            .map_err(ScoreError::PoseUnavailable)?;

        // The snapshot arrives oriented at the robot's actual pose; strip
        // that off to recover the template, then re-project at the candidate.
        let template = unorient_footprint(&oriented, robot_pose);
        let hypothetical = orient_footprint(&template, pose);

        let mut footprint_cost = 0u8;
        let n = hypothetical.points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            let start = map.world_to_map(&hypothetical.points[i]).ok_or_else(|| {
                ScoreError::OffGrid(format!("footprint vertex {i} on edge {i}->{j}"))
            })?;
            let end = map.world_to_map(&hypothetical.points[j]).ok_or_else(|| {
                ScoreError::OffGrid(format!("footprint vertex {j} on edge {i}->{j}"))
            })?;

            let edge_cost = self.edge_cost(&map, start, end)?;
            footprint_cost = footprint_cost.max(edge_cost);
        }

        Ok(footprint_cost)
    }

    /// Maximum ordinary cost along one rasterized edge. Lethal and (under the
    /// reject policy) unknown cells abort immediately.
    fn edge_cost(&self, map: &Costmap, start: UVec2, end: UVec2) -> Result<u8, ScoreError> {
        let mut edge_cost = 0u8;
        for cell in LineIterator::new(start, end) {
            // Both endpoints are in bounds, so every rasterized cell is too;
            // an out-of-range read is treated as unobserved.
            let cost = map.cost(&cell).unwrap_or(UNKNOWN);
            match cost {
                LETHAL => return Err(ScoreError::Collision(cell.x, cell.y)),
                UNKNOWN => match self.config.unknown_policy {
                    UnknownPolicy::Reject => {
                        return Err(ScoreError::UnknownRegion(cell.x, cell.y))
                    }
                    UnknownPolicy::Tolerate => {}
                },
                cost => edge_cost = edge_cost.max(cost),
            }
        }
        Ok(edge_cost)
    }

    /// Yes/no gate over [`Self::score_footprint_at_pose`]. Every failure kind
    /// maps to "not free"; the kind is logged rather than discarded.
    pub fn is_footprint_free(&self, pose: Pose2) -> bool {
        match self.score_footprint_at_pose(pose) {
            Ok(_) => true,
            Err(error) => {
                debug!(
                    %error,
                    x = pose.position.x,
                    y = pose.position.y,
                    yaw = pose.yaw,
                    "candidate pose rejected"
                );
                false
            }
        }
    }
}
