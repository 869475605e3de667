//! Bobble dice
//!
//! Sixteen six-sided dice. Each string lists the letters printed on one die's
//! faces; repeated letters make that face more likely.

/// Number of faces on every die
pub const FACES: usize = 6;

/// The dice set, indexed `0..16`
pub const DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", //
    "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", //
    "DISTTY", "EEGHNW", "EEINSU", "EHRTVW", //
    "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ", //
];

/// Dice used to seed the pool for the smallest board
pub const SMALL_BOARD_DICE: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_die_has_six_uppercase_faces() {
        for die in DICE {
            assert_eq!(die.len(), FACES, "die {die} has wrong face count");
            assert!(
                die.bytes().all(|b| b.is_ascii_uppercase()),
                "die {die} has a non-letter face"
            );
        }
    }

    #[test]
    fn small_board_dice_fit_the_table() {
        assert!(SMALL_BOARD_DICE < DICE.len());
    }
}
