//! Planetary bodies and their display names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder returned for body ids without a [`PlanetaryBody`] variant.
pub const UNKNOWN_BODY: &str = "UNKNOWN";

/// Bodies with a fixed display name.
///
/// Discriminants are the engine's body numbers (`SE_SUN` .. `SE_CHIRON`), so
/// [`PlanetaryBody::id`] can be passed straight to [`crate::CalcOpts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum PlanetaryBody {
    Sun = 0,
    Moon = 1,
    Mercury = 2,
    Venus = 3,
    Mars = 4,
    Jupiter = 5,
    Saturn = 6,
    Uranus = 7,
    Neptune = 8,
    Pluto = 9,
    MeanNode = 10,
    TrueNode = 11,
    Chiron = 15,
}

impl PlanetaryBody {
    pub const ALL: [PlanetaryBody; 13] = [
        PlanetaryBody::Sun,
        PlanetaryBody::Moon,
        PlanetaryBody::Mercury,
        PlanetaryBody::Venus,
        PlanetaryBody::Mars,
        PlanetaryBody::Jupiter,
        PlanetaryBody::Saturn,
        PlanetaryBody::Uranus,
        PlanetaryBody::Neptune,
        PlanetaryBody::Pluto,
        PlanetaryBody::MeanNode,
        PlanetaryBody::TrueNode,
        PlanetaryBody::Chiron,
    ];

    /// Engine body number.
    #[inline]
    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<Self> {
        PlanetaryBody::ALL.into_iter().find(|body| body.id() == id)
    }

    /// Fixed English name.
    pub fn name(self) -> &'static str {
        match self {
            PlanetaryBody::Sun => "Sun",
            PlanetaryBody::Moon => "Moon",
            PlanetaryBody::Mercury => "Mercury",
            PlanetaryBody::Venus => "Venus",
            PlanetaryBody::Mars => "Mars",
            PlanetaryBody::Jupiter => "Jupiter",
            PlanetaryBody::Saturn => "Saturn",
            PlanetaryBody::Uranus => "Uranus",
            PlanetaryBody::Neptune => "Neptune",
            PlanetaryBody::Pluto => "Pluto",
            PlanetaryBody::MeanNode => "MeanNode",
            PlanetaryBody::TrueNode => "TrueNode",
            PlanetaryBody::Chiron => "Chiron",
        }
    }
}

impl fmt::Display for PlanetaryBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for PlanetaryBody {
    type Error = i32;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        PlanetaryBody::from_id(id).ok_or(id)
    }
}

/// Display name of a body.
pub fn planetstr(body: PlanetaryBody) -> &'static str {
    body.name()
}

/// Display name for a raw engine body id, [`UNKNOWN_BODY`] when unlabelled.
pub fn planet_name(id: i32) -> &'static str {
    PlanetaryBody::from_id(id)
        .map(PlanetaryBody::name)
        .unwrap_or(UNKNOWN_BODY)
}
