//! Galaxy-wide layout parameters.

use serde::{Deserialize, Serialize};

/// Spacing parameters the host applies to its own star placement pass
///
/// These are galaxy-level values: the host walks from star to star with a
/// step length in `[min_step_length, max_step_length]` and rejects positions
/// closer than `min_distance` to an existing star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxySpacingParams {
    pub min_step_length: f32,
    pub max_step_length: f32,
    pub min_distance: f32,
}

impl GalaxySpacingParams {
    pub fn new(min_step_length: f32, max_step_length: f32, min_distance: f32) -> Self {
        Self {
            min_step_length,
            max_step_length,
            min_distance,
        }
    }
}
