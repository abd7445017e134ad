use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Ranked playlists, keyed by the host's playlist id.
///
/// Any id without a variant here is an unranked playlist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[repr(i32)]
pub enum Playlist {
    #[strum(serialize = "1v1")]
    Duel = 10,
    #[default]
    #[strum(serialize = "2v2")]
    Doubles = 11,
    #[strum(serialize = "3v3")]
    Standard = 13,
    Hoops = 27,
    Rumble = 28,
    Dropshot = 29,
    Snowday = 30,
    Tournament = 34,
}

impl Playlist {
    pub fn from_id(id: i32) -> Option<Self> {
        Self::from_repr(id)
    }

    pub fn id(&self) -> i32 {
        *self as i32
    }

    pub fn is_ranked(id: i32) -> bool {
        Self::from_id(id).is_some()
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}
