//! ASCII gallows drawn by number of wrong guesses

/// Gallows stages, from empty to complete figure
pub const STAGES: [&str; 7] = [
    r"
   ------
   |    |
   |
   |
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |    |
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|\
   |
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|\
   |   /
   |
--------",
    r"
   ------
   |    |
   |    O
   |   /|\
   |   / \
   |
--------",
];

/// Diagram for a wrong-attempt count, clamped at the last stage
#[must_use]
pub fn hangman_stage(wrong_attempts: u32) -> &'static str {
    let index = usize::try_from(wrong_attempts).map_or(STAGES.len() - 1, |n| {
        n.min(STAGES.len() - 1)
    });
    STAGES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_stage_is_empty_gallows() {
        assert!(!hangman_stage(0).contains('O'));
    }

    #[test]
    fn stages_grow() {
        assert!(hangman_stage(1).contains('O'));
        assert!(!hangman_stage(1).contains('/'));
        assert!(hangman_stage(3).contains("/|"));
        assert!(hangman_stage(6).contains("/ \\"));
    }

    #[test]
    fn stage_clamped_at_maximum() {
        assert_eq!(hangman_stage(6), STAGES[6]);
        assert_eq!(hangman_stage(7), STAGES[6]);
        assert_eq!(hangman_stage(10), STAGES[6]);
        assert_eq!(hangman_stage(u32::MAX), STAGES[6]);
    }

    #[test]
    fn stages_are_distinct() {
        for (i, a) in STAGES.iter().enumerate() {
            for b in &STAGES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
