//! Background palette and the two-color text contrast policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown background color: {0}")]
pub struct ColorError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundColor {
    Red,
    Blue,
    Green,
    #[default]
    Black,
    White,
}

impl BackgroundColor {
    pub const ALL: [BackgroundColor; 5] = [
        BackgroundColor::Red,
        BackgroundColor::Blue,
        BackgroundColor::Green,
        BackgroundColor::Black,
        BackgroundColor::White,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            BackgroundColor::Red => "#ff0000",
            BackgroundColor::Blue => "#0000ff",
            BackgroundColor::Green => "#00ff00",
            BackgroundColor::Black => "#000000",
            BackgroundColor::White => "#ffffff",
        }
    }

    fn name(self) -> &'static str {
        match self {
            BackgroundColor::Red => "red",
            BackgroundColor::Blue => "blue",
            BackgroundColor::Green => "green",
            BackgroundColor::Black => "black",
            BackgroundColor::White => "white",
        }
    }

    /// Dark text only on pure white; light text everywhere else.
    pub fn text_color(self) -> &'static str {
        if self == BackgroundColor::White {
            "#000000"
        } else {
            "#ffffff"
        }
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for BackgroundColor {
    type Err = ColorError;

    /// Accepts a palette name or its hex triplet (`#` optional, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        let hex = needle.strip_prefix('#').unwrap_or(&needle);
        BackgroundColor::ALL
            .into_iter()
            .find(|c| c.name() == needle || &c.hex()[1..] == hex)
            .ok_or_else(|| ColorError(s.to_string()))
    }
}

/// Uniform pick from `candidates`, excluding `current` whenever there is an alternative.
pub fn pick_different<T: Copy + PartialEq>(
    current: T,
    candidates: &[T],
    rng: &mut fastrand::Rng,
) -> Option<T> {
    let others: Vec<T> = candidates.iter().copied().filter(|c| *c != current).collect();
    if candidates.len() > 1 && !others.is_empty() {
        Some(others[rng.usize(..others.len())])
    } else {
        candidates.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_hex() {
        assert_eq!("white".parse::<BackgroundColor>(), Ok(BackgroundColor::White));
        assert_eq!("#FF0000".parse::<BackgroundColor>(), Ok(BackgroundColor::Red));
        assert_eq!("00ff00".parse::<BackgroundColor>(), Ok(BackgroundColor::Green));
        assert!("#123456".parse::<BackgroundColor>().is_err());
    }

    #[test]
    fn test_text_color_policy() {
        assert_eq!(BackgroundColor::White.text_color(), "#000000");
        for c in [
            BackgroundColor::Red,
            BackgroundColor::Blue,
            BackgroundColor::Green,
            BackgroundColor::Black,
        ] {
            assert_eq!(c.text_color(), "#ffffff", "{c}");
        }
    }

    #[test]
    fn test_pick_different_never_repeats() {
        let mut rng = fastrand::Rng::with_seed(11);
        for current in BackgroundColor::ALL {
            for _ in 0..40 {
                let next = pick_different(current, &BackgroundColor::ALL, &mut rng).unwrap();
                assert_ne!(next, current);
            }
        }
    }

    #[test]
    fn test_pick_different_covers_all_others() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_different(BackgroundColor::Black, &BackgroundColor::ALL, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 4);
        assert!(!seen.contains(&BackgroundColor::Black));
    }

    #[test]
    fn test_pick_different_single_candidate() {
        let mut rng = fastrand::Rng::with_seed(0);
        assert_eq!(pick_different(1, &[1], &mut rng), Some(1));
        assert_eq!(pick_different(1, &[], &mut rng), None);
    }
}
