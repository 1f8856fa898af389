//! Spectral class and evolutionary stage tags carried by each star.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Harvard spectral class of a generated star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// Evolutionary stage the host uses to pick a star model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarType {
    MainSequence,
    GiantStar,
    WhiteDwarf,
    NeutronStar,
    BlackHole,
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            StarType::MainSequence => "Main Sequence",
            StarType::GiantStar => "Giant",
            StarType::WhiteDwarf => "White Dwarf",
            StarType::NeutronStar => "Neutron Star",
            StarType::BlackHole => "Black Hole",
        };
        write!(f, "{}", str)
    }
}
