use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy tag a body applies when it leaves the world bound or overlaps another body.
///
/// One body carries two of these: a boundary action and a collision action.
/// `KillNonPlayers`, `Hide` and `PassThrough` only mean something on the
/// collision side; as boundary actions they clamp like `Stop`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Die,
    Wrap,
    Stop,
    Bounce,
    #[serde(alias = "pass")]
    PassThrough,
    KillNonPlayers,
    Hide,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Die,
        Action::Wrap,
        Action::Stop,
        Action::Bounce,
        Action::PassThrough,
        Action::KillNonPlayers,
        Action::Hide,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Action::Die => "die",
            Action::Wrap => "wrap",
            Action::Stop => "stop",
            Action::Bounce => "bounce",
            Action::PassThrough => "pass_through",
            Action::KillNonPlayers => "kill_non_players",
            Action::Hide => "hide",
        }
    }

    /// Collision actions that remove the holder itself on contact.
    #[inline]
    pub const fn is_lethal_to_self(self) -> bool {
        matches!(self, Action::Die | Action::Hide)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Unknown action tag: {0:?}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "pass" {
            return Ok(Action::PassThrough);
        }
        Action::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}
