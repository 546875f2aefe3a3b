/// Heading of the snake. `None` is a sentinel and never moves anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    #[default]
    None,
}

const DIRS: [Direction; 5] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::None,
];

impl Direction {
    /// Table lookup by index, clamped into `0..=4`.
    pub fn from_index(index: i32) -> Self {
        DIRS[index.clamp(0, DIRS.len() as i32 - 1) as usize]
    }

    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::None => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::None => "none",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::None => Direction::None,
        }
    }

    /// True when turning from `current` to `self` is a real change of heading:
    /// neither the same heading nor a reversal.
    pub fn is_ortho_to(self, current: Direction) -> bool {
        self != current && self != current.opposite()
    }

    /// Unit step (dx, dy); screen coordinates, so up is -y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::None => (0, 0),
        }
    }

    /// Destination of one step from `(x, y)`. May leave the field.
    pub fn offset(self, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVING: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[test]
    fn test_opposite_is_involution() {
        for d in MOVING {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn test_same_and_reverse_are_not_ortho() {
        for d in MOVING {
            assert!(!d.is_ortho_to(d));
            assert!(!d.opposite().is_ortho_to(d));
        }
    }

    #[test]
    fn test_perpendicular_turns_are_ortho() {
        assert!(Direction::Up.is_ortho_to(Direction::Right));
        assert!(Direction::Down.is_ortho_to(Direction::Right));
        assert!(Direction::Left.is_ortho_to(Direction::Up));
        assert!(Direction::Right.is_ortho_to(Direction::Down));
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::Up.offset(3, 3), (3, 2));
        assert_eq!(Direction::Right.offset(3, 3), (4, 3));
        assert_eq!(Direction::Down.offset(3, 3), (3, 4));
        assert_eq!(Direction::Left.offset(3, 3), (2, 3));
        assert_eq!(Direction::None.offset(3, 3), (3, 3));
        assert_eq!(Direction::Left.offset(0, 0), (-1, 0));
    }

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(Direction::from_index(-7), Direction::Up);
        assert_eq!(Direction::from_index(2), Direction::Down);
        assert_eq!(Direction::from_index(99), Direction::None);
        for d in DIRS {
            assert_eq!(Direction::from_index(d.index() as i32), d);
        }
        assert_eq!(Direction::from_index(99).name(), "none");
    }
}
