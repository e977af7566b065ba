//! How the character grips a ledge.

use serde::{Deserialize, Serialize};

/// Grip pose supplied by the ledge point the character is attached to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HangType {
    /// Feet planted against the wall, both hands on the ledge.
    #[default]
    Braced,
    /// Legs dangling free below the grip point.
    Free,
}

impl HangType {
    /// Pick the braced or free variant of something.
    #[inline]
    pub fn select<T>(self, braced: T, free: T) -> T {
        match self {
            HangType::Braced => braced,
            HangType::Free => free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_are_snake_case() {
        let s = serde_json::to_string(&HangType::Free).unwrap();
        assert_eq!(s, "\"free\"");
        let h: HangType = serde_json::from_str("\"braced\"").unwrap();
        assert_eq!(h, HangType::Braced);
    }

    #[test]
    fn select_picks_variant() {
        assert_eq!(HangType::Braced.select(1, 2), 1);
        assert_eq!(HangType::Free.select(1, 2), 2);
        assert_eq!(HangType::default(), HangType::Braced);
    }
}
