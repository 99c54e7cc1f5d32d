use crate::inventory::domain::{Component, ComponentId};
use std::time::Duration;

/// Delay before a new component leaves the "new component" section
const DEFAULT_SETTLE_DELAY_MS: u64 = 2000;

/// Duration of the move into its sorted position
const DEFAULT_MOVE_DURATION_MS: u64 = 800;

/// How long the settled row stays highlighted
const DEFAULT_HIGHLIGHT_DURATION_MS: u64 = 3000;

/// Phases of the post-create highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightPhase {
    /// Shown in a transient section above the normal groups
    Inserted,
    /// Moving into its alphabetical slot within its category
    Settling,
    /// In place, still highlighted
    Settled,
    /// Highlight removed; the sequence is over
    Cleared,
}

/// Delays between highlight phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTimings {
    pub settle_delay: Duration,
    pub move_duration: Duration,
    pub highlight_duration: Duration,
}

impl HighlightTimings {
    /// All transitions happen immediately
    pub fn instant() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            move_duration: Duration::ZERO,
            highlight_duration: Duration::ZERO,
        }
    }
}

impl Default for HighlightTimings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            move_duration: Duration::from_millis(DEFAULT_MOVE_DURATION_MS),
            highlight_duration: Duration::from_millis(DEFAULT_HIGHLIGHT_DURATION_MS),
        }
    }
}

/// HighlightSequence - finite state machine for a freshly created component
///
/// `Inserted -> Settling -> Settled -> Cleared`, each transition after a
/// fixed delay. The machine holds no timers itself; the caller asks for
/// [`HighlightSequence::delay_before_next`], waits, then calls
/// [`HighlightSequence::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSequence {
    component_id: ComponentId,
    phase: HighlightPhase,
}

impl HighlightSequence {
    pub fn new(component_id: ComponentId) -> Self {
        Self {
            component_id,
            phase: HighlightPhase::Inserted,
        }
    }

    /// Finds a newly created component by name and category.
    ///
    /// Best effort: when several components share both, the first in list
    /// order wins. `None` means "reload without highlight".
    pub fn locate(components: &[Component], name: &str, category: &str) -> Option<Self> {
        components
            .iter()
            .find(|c| c.name == name && c.category == category)
            .map(|c| Self::new(c.id()))
    }

    pub fn component_id(&self) -> ComponentId {
        self.component_id
    }

    pub fn phase(&self) -> HighlightPhase {
        self.phase
    }

    /// Moves to the next phase; `Cleared` is terminal
    #[must_use]
    pub fn advance(self) -> Self {
        let phase = match self.phase {
            HighlightPhase::Inserted => HighlightPhase::Settling,
            HighlightPhase::Settling => HighlightPhase::Settled,
            HighlightPhase::Settled | HighlightPhase::Cleared => HighlightPhase::Cleared,
        };
        Self { phase, ..self }
    }

    /// Time to wait in the current phase, `None` once cleared
    pub fn delay_before_next(&self, timings: &HighlightTimings) -> Option<Duration> {
        match self.phase {
            HighlightPhase::Inserted => Some(timings.settle_delay),
            HighlightPhase::Settling => Some(timings.move_duration),
            HighlightPhase::Settled => Some(timings.highlight_duration),
            HighlightPhase::Cleared => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == HighlightPhase::Cleared
    }

    /// Whether the component is drawn in the transient section
    pub fn in_new_section(&self) -> bool {
        self.phase == HighlightPhase::Inserted
    }

    /// Whether the component's group is drawn in alphabetical order
    pub fn sorts_group(&self) -> bool {
        matches!(
            self.phase,
            HighlightPhase::Settling | HighlightPhase::Settled
        )
    }

    pub fn is_highlighted(&self) -> bool {
        !self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_phase_sequence() {
        let seq = HighlightSequence::new(ComponentId::new(5));
        assert_eq!(seq.phase(), HighlightPhase::Inserted);
        assert!(seq.in_new_section());
        assert!(!seq.sorts_group());

        let seq = seq.advance();
        assert_eq!(seq.phase(), HighlightPhase::Settling);
        assert!(seq.sorts_group());
        assert!(seq.is_highlighted());

        let seq = seq.advance();
        assert_eq!(seq.phase(), HighlightPhase::Settled);
        assert!(seq.sorts_group());

        let seq = seq.advance();
        assert_eq!(seq.phase(), HighlightPhase::Cleared);
        assert!(seq.is_finished());
        assert!(!seq.is_highlighted());

        assert_eq!(seq.advance().phase(), HighlightPhase::Cleared);
        assert_eq!(seq.component_id(), ComponentId::new(5));
    }

    #[test]
    fn test_default_delays() {
        let timings = HighlightTimings::default();
        let seq = HighlightSequence::new(ComponentId::new(1));
        assert_eq!(
            seq.delay_before_next(&timings),
            Some(Duration::from_millis(2000))
        );
        assert_eq!(
            seq.advance().delay_before_next(&timings),
            Some(Duration::from_millis(800))
        );
        assert_eq!(
            seq.advance().advance().delay_before_next(&timings),
            Some(Duration::from_millis(3000))
        );
        assert_eq!(
            seq.advance().advance().advance().delay_before_next(&timings),
            None
        );
    }

    #[test]
    fn test_locate_by_name_and_category() {
        let components = vec![
            Component::new(1, "10k resistor", "Resistors", 5),
            Component::new(2, "10k resistor", "Kits", 1),
        ];
        let seq = HighlightSequence::locate(&components, "10k resistor", "Kits").unwrap();
        assert_eq!(seq.component_id(), ComponentId::new(2));
    }

    #[test]
    fn test_locate_ambiguous_picks_first() {
        let components = vec![
            Component::new(8, "LED", "Optics", 5),
            Component::new(3, "LED", "Optics", 1),
        ];
        let seq = HighlightSequence::locate(&components, "LED", "Optics").unwrap();
        assert_eq!(seq.component_id(), ComponentId::new(8));
    }

    #[test]
    fn test_locate_without_match() {
        let components = vec![Component::new(1, "LED", "Optics", 5)];
        assert!(HighlightSequence::locate(&components, "LED", "Diodes").is_none());
    }
}
