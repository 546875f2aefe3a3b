use ahash::AHashMap;

/// Logical keys sampled once per frame by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
}

impl Key {
    pub const ALL: [Key; 6] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Confirm,
        Key::Cancel,
    ];
}

/// Edge-triggered key tracker.
///
/// Each key carries a counter that climbs from 1 while held and falls from 0
/// while released, so "just pressed" is `== 1` and "just released" is `== 0`.
/// Keys never ticked read as counter 0.
#[derive(Debug, Default, Clone)]
pub struct InputEvents {
    timers: AHashMap<Key, i32>,
}

impl InputEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one key by one frame. Call exactly once per key per frame.
    pub fn tick(&mut self, key: Key, held: bool) {
        let t = self.timers.entry(key).or_insert(0);
        *t = match (held, *t > 0) {
            (true, false) => 1,
            (true, true) => t.saturating_add(1),
            (false, true) => 0,
            (false, false) => t.saturating_sub(1),
        };
    }

    fn counter(&self, key: Key) -> i32 {
        self.timers.get(&key).copied().unwrap_or(0)
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.counter(key) == 1
    }

    pub fn is_released(&self, key: Key) -> bool {
        self.counter(key) == 0
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.counter(key) > 0
    }

    pub fn is_up(&self, key: Key) -> bool {
        self.counter(key) <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_hold_release_sequence() {
        let mut inputs = InputEvents::new();

        inputs.tick(Key::Up, true);
        assert_eq!(inputs.counter(Key::Up), 1);
        assert!(inputs.is_pressed(Key::Up));
        assert!(inputs.is_down(Key::Up));

        inputs.tick(Key::Up, true);
        assert_eq!(inputs.counter(Key::Up), 2);
        assert!(inputs.is_down(Key::Up));
        assert!(!inputs.is_pressed(Key::Up));

        inputs.tick(Key::Up, false);
        assert_eq!(inputs.counter(Key::Up), 0);
        assert!(inputs.is_released(Key::Up));
        assert!(inputs.is_up(Key::Up));

        inputs.tick(Key::Up, false);
        assert_eq!(inputs.counter(Key::Up), -1);
        assert!(inputs.is_up(Key::Up));
        assert!(!inputs.is_released(Key::Up));
    }

    #[test]
    fn test_unknown_key_reads_released() {
        let inputs = InputEvents::new();
        assert!(inputs.is_released(Key::Confirm));
        assert!(inputs.is_up(Key::Confirm));
        assert!(!inputs.is_down(Key::Confirm));
        assert!(!inputs.is_pressed(Key::Confirm));
    }

    #[test]
    fn test_repress_after_long_release() {
        let mut inputs = InputEvents::new();
        for _ in 0..5 {
            inputs.tick(Key::Left, false);
        }
        inputs.tick(Key::Left, true);
        assert!(inputs.is_pressed(Key::Left));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut inputs = InputEvents::new();
        inputs.tick(Key::Left, true);
        inputs.tick(Key::Right, false);
        assert!(inputs.is_pressed(Key::Left));
        assert!(!inputs.is_pressed(Key::Right));
    }
}
