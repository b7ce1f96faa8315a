use crate::config;

/// Whether a region has played its entry animation. `Visible` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }

    /// Feeds one event through the state machine.
    pub fn advance(self, policy: &RevealPolicy, event: &IntersectionEvent) -> RevealState {
        match self {
            RevealState::Visible => RevealState::Visible,
            RevealState::Hidden if policy.entered(event) => RevealState::Visible,
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RevealState::Hidden => "opacity-0",
            RevealState::Visible => "animate-entry",
        }
    }
}

/// One report from the viewport watcher about a region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEvent {
    pub is_intersecting: bool,
    /// Visible fraction of the region, 0.0 to 1.0.
    pub ratio: f64,
}

#[cfg(test)]
impl IntersectionEvent {
    pub fn outside() -> Self {
        IntersectionEvent { is_intersecting: false, ratio: 0.0 }
    }

    pub fn inside(ratio: f64) -> Self {
        IntersectionEvent { is_intersecting: true, ratio }
    }
}

/// Returned from an event handler to tell the watcher whether to keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

/// How eagerly a region counts as having entered the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPolicy {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealPolicy {
    pub fn entered(&self, event: &IntersectionEvent) -> bool {
        event.is_intersecting && event.ratio >= self.threshold
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        RevealPolicy {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_policy_uses_configured_values() {
        let policy = RevealPolicy::default();
        assert_eq!(policy.threshold, 0.1);
        assert_eq!(policy.root_margin, "50px");
    }

    #[test]
    fn enters_at_threshold() {
        let policy = RevealPolicy::default();
        assert!(!policy.entered(&IntersectionEvent::outside()));
        assert!(!policy.entered(&IntersectionEvent::inside(0.05)));
        assert!(!policy.entered(&IntersectionEvent::inside(0.0995)));
        assert!(policy.entered(&IntersectionEvent::inside(0.1)));
        assert!(policy.entered(&IntersectionEvent::inside(1.0)));
        // A ratio without the intersecting flag is not an entry.
        assert!(!policy.entered(&IntersectionEvent { is_intersecting: false, ratio: 0.5 }));
    }

    #[test]
    fn visible_is_terminal() {
        let policy = RevealPolicy::default();
        let state = RevealState::Hidden.advance(&policy, &IntersectionEvent::inside(0.3));
        assert_eq!(state, RevealState::Visible);
        let state = state.advance(&policy, &IntersectionEvent::outside());
        assert_eq!(state, RevealState::Visible);
    }

    #[test]
    fn classes() {
        assert_eq!(RevealState::Hidden.css_class(), "opacity-0");
        assert_eq!(RevealState::Visible.css_class(), "animate-entry");
    }

    fn event() -> impl Strategy<Value = IntersectionEvent> {
        (any::<bool>(), 0.0f64..=1.0).prop_map(|(is_intersecting, ratio)| IntersectionEvent {
            is_intersecting,
            ratio,
        })
    }

    proptest! {
        #[test]
        fn visibility_never_decreases(events in prop::collection::vec(event(), 0..50)) {
            let policy = RevealPolicy::default();
            let mut state = RevealState::Hidden;
            for e in &events {
                let next = state.advance(&policy, e);
                prop_assert!(!(state.is_visible() && !next.is_visible()));
                state = next;
            }
            let expected = events.iter().any(|e| policy.entered(e));
            prop_assert_eq!(state.is_visible(), expected);
        }
    }
}
