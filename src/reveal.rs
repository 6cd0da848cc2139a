/// One-shot latch for entrance animations. Set by the first "in viewport"
/// observation and never cleared, so a section animates in at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityLatch {
    revealed: bool,
}

impl VisibilityLatch {
    /// Feed a visibility observation. Returns true only for the observation
    /// that flips the latch.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_hidden() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.is_revealed());
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_is_one_shot() {
        let mut latch = VisibilityLatch::default();
        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        // leaving and re-entering the viewport never re-triggers
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }
}
