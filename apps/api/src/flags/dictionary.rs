//! Random word source backed by a curated candidate list.

use crate::flags::letter::{Letter, Word};

/// Curated candidates, 2–10 letters, uppercase.
const CANDIDATES: &[&str] = &[
    "GO", "UP", "HI", "OK", "SEA", "SUN", "CAT", "DOG", "FOX", "OWL", "SKY", "MAP", "FLAG", "WIND",
    "SAIL", "PORT", "STAR", "MOON", "WAVE", "KITE", "SHIP", "ANCHOR", "ROPE", "NORTH", "SOUTH",
    "COAST", "TIDE", "STORM", "SIGNAL", "HARBOR", "VESSEL", "BEACON", "CAPTAIN", "COMPASS",
    "HORIZON", "LIGHTHOUSE", "SEMAPHORE", "VOYAGE", "ISLAND", "CURRENT", "PILOT", "RUDDER",
    "MARINER", "NAVIGATOR", "ADMIRAL", "FREEDOM", "JOURNEY", "EXPLORER", "OCEAN", "BRAVO",
];

/// Picks a word no longer than `max_length`, uniformly from the qualifying candidates.
///
/// When no candidate is short enough, a uniformly chosen candidate is truncated to
/// `max_length`. Returns `None` only for `max_length == 0`.
pub fn get_random_word(max_length: usize, rng: &mut fastrand::Rng) -> Option<Word> {
    if max_length == 0 {
        return None;
    }

    let qualifying: Vec<&str> = CANDIDATES
        .iter()
        .copied()
        .filter(|w| w.len() <= max_length)
        .collect();

    let picked = if qualifying.is_empty() {
        CANDIDATES[rng.usize(..CANDIDATES.len())]
    } else {
        qualifying[rng.usize(..qualifying.len())]
    };

    let letters: Vec<Letter> = picked
        .chars()
        .filter_map(Letter::from_char)
        .take(max_length)
        .collect();
    Word::from_letters(letters).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_are_clean() {
        for w in CANDIDATES {
            assert!((2..=10).contains(&w.len()), "{w} out of range");
            assert!(w.chars().all(|c| c.is_ascii_uppercase()), "{w} not uppercase");
        }
    }

    #[test]
    fn test_never_longer_than_requested() {
        let mut rng = fastrand::Rng::with_seed(7);
        for max in 1..=10 {
            for _ in 0..50 {
                let word = get_random_word(max, &mut rng).unwrap();
                assert!(word.len() <= max, "{word} longer than {max}");
            }
        }
    }

    #[test]
    fn test_zero_length_yields_nothing() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert!(get_random_word(0, &mut rng).is_none());
    }

    #[test]
    fn test_only_two_letter_candidates_for_max_two() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..30 {
            let word = get_random_word(2, &mut rng).unwrap().to_string();
            assert!(["GO", "UP", "HI", "OK"].contains(&word.as_str()), "got {word}");
        }
    }

    #[test]
    fn test_same_seed_same_word() {
        let a = get_random_word(6, &mut fastrand::Rng::with_seed(42));
        let b = get_random_word(6, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }
}
