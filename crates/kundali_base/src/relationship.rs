//! Graha dignity tables: exaltation, moolatrikona, own signs, friendships.
//!
//! Only the seven classical grahas carry dignities; the nodes always come
//! out [`Dignity::Neutral`].

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Dignity of a graha in a sign, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
    Debilitated,
}

impl Dignity {
    /// Saptavargaja points awarded for this dignity, in shashtiamsas.
    pub const fn saptavargaja_points(self) -> f64 {
        match self {
            Self::Exalted => 30.0,
            Self::Moolatrikona => 25.0,
            Self::OwnSign => 20.0,
            Self::GreatFriend => 15.0,
            Self::Friend => 10.0,
            Self::Neutral => 5.0,
            Self::Enemy => 4.0,
            Self::GreatEnemy => 3.0,
            Self::Debilitated => 2.0,
        }
    }
}

/// Exaltation point as (rashi index, degree within rashi).
pub const fn exaltation_point(graha: Graha) -> Option<(u8, f64)> {
    match graha {
        Graha::Surya => Some((0, 10.0)),
        Graha::Chandra => Some((1, 3.0)),
        Graha::Mangal => Some((9, 28.0)),
        Graha::Buddh => Some((5, 15.0)),
        Graha::Guru => Some((3, 5.0)),
        Graha::Shukra => Some((11, 27.0)),
        Graha::Shani => Some((6, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Exaltation point as an absolute sidereal longitude.
pub fn exaltation_longitude(graha: Graha) -> Option<f64> {
    exaltation_point(graha).map(|(sign, deg)| sign as f64 * 30.0 + deg)
}

/// Moolatrikona sign index, `None` for the nodes.
pub const fn moolatrikona_sign(graha: Graha) -> Option<u8> {
    match graha {
        Graha::Surya => Some(4),
        Graha::Chandra => Some(1),
        Graha::Mangal => Some(0),
        Graha::Buddh => Some(5),
        Graha::Guru => Some(8),
        Graha::Shukra => Some(6),
        Graha::Shani => Some(10),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Whether `graha` rules the sign at `rashi_index`.
pub fn owns_sign(graha: Graha, rashi_index: u8) -> bool {
    !graha.is_node() && rashi_lord(Rashi::from_index(rashi_index)) == graha
}

fn friends(graha: Graha) -> &'static [Graha] {
    match graha {
        Graha::Surya => &[Graha::Chandra, Graha::Mangal, Graha::Guru],
        Graha::Chandra => &[Graha::Surya, Graha::Buddh],
        Graha::Mangal => &[Graha::Surya, Graha::Chandra, Graha::Guru],
        Graha::Buddh => &[Graha::Surya, Graha::Shukra],
        Graha::Guru => &[Graha::Surya, Graha::Chandra, Graha::Mangal],
        Graha::Shukra => &[Graha::Buddh, Graha::Shani],
        Graha::Shani => &[Graha::Buddh, Graha::Shukra],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

fn enemies(graha: Graha) -> &'static [Graha] {
    match graha {
        Graha::Surya => &[Graha::Shukra, Graha::Shani],
        Graha::Chandra => &[Graha::Mangal, Graha::Guru, Graha::Shani, Graha::Shukra],
        Graha::Mangal => &[Graha::Buddh],
        Graha::Buddh => &[Graha::Chandra],
        Graha::Guru => &[Graha::Buddh, Graha::Shukra],
        Graha::Shukra => &[Graha::Surya, Graha::Chandra],
        Graha::Shani => &[Graha::Surya, Graha::Chandra, Graha::Mangal],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

const fn great_friend(graha: Graha) -> Option<Graha> {
    match graha {
        Graha::Surya => Some(Graha::Guru),
        Graha::Chandra => Some(Graha::Buddh),
        Graha::Mangal => Some(Graha::Guru),
        Graha::Buddh => Some(Graha::Shukra),
        Graha::Guru => Some(Graha::Surya),
        Graha::Shukra => Some(Graha::Shani),
        Graha::Shani => Some(Graha::Shukra),
        Graha::Rahu | Graha::Ketu => None,
    }
}

const fn great_enemy(graha: Graha) -> Option<Graha> {
    match graha {
        Graha::Surya => Some(Graha::Shani),
        Graha::Shani => Some(Graha::Mangal),
        _ => None,
    }
}

/// Dignity of `graha` occupying the sign `rashi_index` (0..11).
///
/// Checked in order: exaltation sign, debilitation sign, moolatrikona sign,
/// own sign, then the relationship with the sign's lord.
pub fn dignity_in_sign(graha: Graha, rashi_index: u8) -> Dignity {
    let Some((exalt_sign, _)) = exaltation_point(graha) else {
        return Dignity::Neutral;
    };
    let sign = rashi_index % 12;
    if sign == exalt_sign {
        return Dignity::Exalted;
    }
    if sign == (exalt_sign + 6) % 12 {
        return Dignity::Debilitated;
    }
    if moolatrikona_sign(graha) == Some(sign) {
        return Dignity::Moolatrikona;
    }
    if owns_sign(graha, sign) {
        return Dignity::OwnSign;
    }
    let lord = rashi_lord(Rashi::from_index(sign));
    if great_friend(graha) == Some(lord) {
        Dignity::GreatFriend
    } else if friends(graha).contains(&lord) {
        Dignity::Friend
    } else if great_enemy(graha) == Some(lord) {
        Dignity::GreatEnemy
    } else if enemies(graha).contains(&lord) {
        Dignity::Enemy
    } else {
        Dignity::Neutral
    }
}
