//! Identifiers passed to the oracle.

use serde::{Deserialize, Serialize};

use kundali_base::Graha;

/// Bodies the oracle can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Ascending lunar node; mean or true per [`NodeMode`].
    LunarNode,
}

/// Mean or osculating (true) lunar node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    Mean,
    #[default]
    True,
}

impl Body {
    /// The body the oracle must be asked for to place `graha`.
    ///
    /// Ketu has no oracle body; it is derived from Rahu.
    pub const fn for_graha(graha: Graha) -> Option<Body> {
        match graha {
            Graha::Surya => Some(Self::Sun),
            Graha::Chandra => Some(Self::Moon),
            Graha::Mangal => Some(Self::Mars),
            Graha::Buddh => Some(Self::Mercury),
            Graha::Guru => Some(Self::Jupiter),
            Graha::Shukra => Some(Self::Venus),
            Graha::Shani => Some(Self::Saturn),
            Graha::Rahu => Some(Self::LunarNode),
            Graha::Ketu => None,
        }
    }

    /// Name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::LunarNode => "LunarNode",
        }
    }
}

/// House division methods understood by oracles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Equal,
    WholeSign,
}

impl HouseSystem {
    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "placidus",
            Self::Koch => "koch",
            Self::Equal => "equal",
            Self::WholeSign => "whole_sign",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::ALL_GRAHAS;

    #[test]
    fn every_graha_but_ketu_has_a_body() {
        for g in ALL_GRAHAS {
            assert_eq!(Body::for_graha(g).is_none(), g == Graha::Ketu, "{g:?}");
        }
    }

    #[test]
    fn rahu_is_lunar_node() {
        assert_eq!(Body::for_graha(Graha::Rahu), Some(Body::LunarNode));
        assert_eq!(NodeMode::default(), NodeMode::True);
    }
}
