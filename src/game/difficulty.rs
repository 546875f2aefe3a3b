/// One row of the difficulty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyInfo {
    pub name: &'static str,
    /// Ticks between grid moves.
    pub move_rate: u32,
}

const DIFFICULTIES: [DifficultyInfo; 5] = [
    DifficultyInfo { name: "Slow", move_rate: 14 },
    DifficultyInfo { name: "Mid", move_rate: 10 },
    DifficultyInfo { name: "Fast", move_rate: 7 },
    DifficultyInfo { name: "Light", move_rate: 5 },
    DifficultyInfo { name: "Dunno", move_rate: 4 },
];

pub const DIFFICULTY_COUNT: usize = DIFFICULTIES.len();

/// Difficulty used when nothing else is selected.
pub const DEFAULT_DIFFICULTY: usize = 3;

/// Look up a difficulty, saturating at both ends of the table.
pub fn difficulty(index: i64) -> DifficultyInfo {
    DIFFICULTIES[clamp_difficulty(index)]
}

pub fn clamp_difficulty(index: i64) -> usize {
    index.clamp(0, DIFFICULTY_COUNT as i64 - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(difficulty(0).name, "Slow");
        assert_eq!(difficulty(0).move_rate, 14);
        assert_eq!(difficulty(3).name, "Light");
        assert_eq!(difficulty(3).move_rate, 5);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(difficulty(-1), difficulty(0));
        assert_eq!(difficulty(1000), difficulty(4));
        assert_eq!(difficulty(4).name, "Dunno");
    }
}
