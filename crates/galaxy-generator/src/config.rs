//! Capability declaration read by the host once at registration time.

use serde::{Deserialize, Serialize};

use crate::populator::{MAX_STAR_COUNT, MIN_STAR_COUNT};

/// Static identification of a generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorInfo {
    pub name: String,
    pub author: String,
    pub description: String,
    pub version: String,
    /// Reverse-DNS identifier, unique across installed generators
    pub guid: String,
}

impl GeneratorInfo {
    /// Identification of the demo generator
    pub fn demo() -> Self {
        Self {
            name: "Demo".to_string(),
            author: "innominata".to_string(),
            description: "Sample Generator that doesn't do a lot".to_string(),
            version: "0.0".to_string(),
            guid: "space.customizing.generators.demo".to_string(),
        }
    }
}

/// Which host controls the generator uses and the star-count range it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub disable_seed_input: bool,
    pub disable_star_count_slider: bool,
    pub min_star_count: i32,
    /// 1024 is the host's hard limit; anything above crashes the game
    pub max_star_count: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            disable_seed_input: false,
            disable_star_count_slider: false,
            min_star_count: MIN_STAR_COUNT,
            max_star_count: MAX_STAR_COUNT,
        }
    }
}
