use serde::{Deserialize, Serialize};
use shared_types::errors::TypeError;
use std::fmt;
use std::str::FromStr;

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Contribution of one vote in this direction to `voteCount`.
    pub fn weight(self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            VoteDirection::Up => VoteDirection::Down,
            VoteDirection::Down => VoteDirection::Up,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => f.write_str("up"),
            VoteDirection::Down => f.write_str("down"),
        }
    }
}

impl FromStr for VoteDirection {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            other => Err(TypeError::UnknownVariant {
                kind: "vote direction",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("up".parse::<VoteDirection>(), Ok(VoteDirection::Up));
        assert_eq!("DOWN".parse::<VoteDirection>(), Ok(VoteDirection::Down));
        assert!("sideways".parse::<VoteDirection>().is_err());
    }

    #[test]
    fn test_weight_and_opposite() {
        assert_eq!(VoteDirection::Up.weight(), 1);
        assert_eq!(VoteDirection::Down.weight(), -1);
        assert_eq!(VoteDirection::Up.opposite(), VoteDirection::Down);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&VoteDirection::Down).unwrap(), "\"down\"");
    }
}
