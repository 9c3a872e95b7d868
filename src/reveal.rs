//! One-shot entrance reveal driven by viewport intersection.

pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    state: RevealState,
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl VisibilityTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: RevealState::Hidden,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feeds one observer entry. Returns `true` only on the call that flips
    /// the trigger to revealed; `Revealed` is terminal.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }

        if is_intersecting && ratio >= self.threshold {
            self.state = RevealState::Revealed;
            tracing::debug!(ratio, "section revealed");
            return true;
        }

        false
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Once revealed there is nothing left to watch.
    pub fn is_settled(&self) -> bool {
        self.is_revealed()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    Rise,
    RiseFar,
    RiseFull,
    FromLeft,
    FromRight,
    Scale,
    Fade,
    Grow,
}

impl Entrance {
    fn modifier(self) -> &'static str {
        match self {
            Self::Rise => "reveal-rise",
            Self::RiseFar => "reveal-rise-far",
            Self::RiseFull => "reveal-rise-full",
            Self::FromLeft => "reveal-from-left",
            Self::FromRight => "reveal-from-right",
            Self::Scale => "reveal-scale",
            Self::Fade => "reveal-fade",
            Self::Grow => "reveal-grow",
        }
    }

    pub fn class(self, revealed: bool) -> String {
        if revealed {
            format!("reveal {} is-revealed", self.modifier())
        } else {
            format!("reveal {}", self.modifier())
        }
    }
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

pub fn delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_for_any_event_sequence() {
        let sequences: [&[(bool, f64)]; 4] = [
            &[(false, 0.0), (true, 0.05), (true, 0.2), (false, 0.0), (true, 0.9)],
            &[(true, 1.0), (true, 1.0), (false, 0.0)],
            &[(false, 0.0), (false, 0.0)],
            &[(true, 0.1), (false, 0.0), (true, 0.3), (true, 0.0)],
        ];

        for events in sequences {
            let mut trigger = VisibilityTrigger::default();
            let mut fired = 0;
            let mut was_revealed = false;

            for &(intersecting, ratio) in events {
                if trigger.observe(intersecting, ratio) {
                    fired += 1;
                }
                if was_revealed {
                    assert!(trigger.is_revealed(), "reveal must never revert");
                }
                was_revealed = trigger.is_revealed();
            }

            assert!(fired <= 1, "fired {fired} times for {events:?}");
            assert_eq!(fired == 1, trigger.is_revealed());
        }
    }

    #[test]
    fn ratio_below_threshold_keeps_section_hidden() {
        let mut trigger = VisibilityTrigger::default();
        assert!(!trigger.observe(true, 0.09));
        assert!(!trigger.is_revealed());
        assert!(trigger.observe(true, VISIBILITY_THRESHOLD));
        assert!(trigger.is_settled());
    }

    #[test]
    fn entrance_class_gains_revealed_modifier() {
        assert_eq!(Entrance::Rise.class(false), "reveal reveal-rise");
        assert_eq!(
            Entrance::FromLeft.class(true),
            "reveal reveal-from-left is-revealed"
        );
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay_ms(0, 100), 0);
        assert_eq!(stagger_delay_ms(4, 100), 400);
        assert_eq!(delay_style(250), "transition-delay: 250ms;");
    }
}
