//! One-shot reveal state and stagger timing.
//!
//! Each tracked element owns one `RevealState`. The state is monotonic for
//! the life of the page: once an element has intersected the viewport it
//! stays `Visible`, scrolling away never hides it again.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn new() -> Self {
        RevealState::Hidden
    }

    /// Feed one intersection observation. Returns true only on the single
    /// `Hidden → Visible` transition.
    pub fn on_intersect(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}

/// Delay for the `index`-th element of a staggered group.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut state = RevealState::new();
        assert!(!state.is_visible());

        assert!(state.on_intersect(true));
        assert!(state.is_visible());

        // Scroll away and back: no second transition, no reversion.
        assert!(!state.on_intersect(false));
        assert!(state.is_visible());
        assert!(!state.on_intersect(true));
        assert!(state.is_visible());
    }

    #[test]
    fn ignores_non_intersecting_observations_while_hidden() {
        let mut state = RevealState::new();
        assert!(!state.on_intersect(false));
        assert!(!state.is_visible());
    }

    #[test]
    fn stagger_grows_linearly_with_index() {
        let step = 100;
        for i in 0..8 {
            assert_eq!(stagger_delay_ms(i, step), i as u32 * step);
        }
        // Element i never starts before its predecessors.
        for i in 1..8 {
            assert!(stagger_delay_ms(i, step) >= stagger_delay_ms(i - 1, step));
        }
    }

    #[test]
    fn zero_step_collapses_the_stagger() {
        assert_eq!(stagger_delay_ms(5, 0), 0);
    }
}
