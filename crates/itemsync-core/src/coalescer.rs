//! Burst coalescing of change notifications
//!
//! Hosts deliver change notifications either one at a time or inside a
//! buffered burst bracketed by begin/end calls. Inside a burst any number
//! of qualifying changes collapse into a single pass owed at burst end;
//! outside one, a qualifying change runs immediately.

/// Verdict for one notification or burst end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run a synchronization pass now.
    Run,
    /// A pass is owed; it runs when the burst ends.
    Defer,
    /// Nothing to do.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BurstState {
    Idle,
    BurstOpen { pending: bool },
}

/// Two-state machine tracking whether a pass is owed for the open burst.
///
/// All mutators take `&mut self`; a host that notifies from several
/// threads must serialize access itself.
#[derive(Debug, Clone)]
pub struct ChangeCoalescer {
    state: BurstState,
}

impl Default for ChangeCoalescer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeCoalescer {
    /// Start idle, outside any burst.
    pub fn new() -> Self {
        Self {
            state: BurstState::Idle,
        }
    }

    /// Open a burst window.
    ///
    /// A nested begin restarts the window; any pass owed so far is
    /// dropped with it.
    pub fn begin_burst(&mut self) {
        self.state = BurstState::BurstOpen { pending: false };
    }

    /// Record one change notification.
    ///
    /// Irrelevant changes always skip. A relevant change runs immediately
    /// while idle and defers while a burst is open.
    pub fn notify_change(&mut self, relevant: bool) -> Decision {
        if !relevant {
            return Decision::Skip;
        }
        match self.state {
            BurstState::Idle => Decision::Run,
            BurstState::BurstOpen { .. } => {
                self.state = BurstState::BurstOpen { pending: true };
                Decision::Defer
            }
        }
    }

    /// Close the burst window.
    ///
    /// Runs the owed pass if any change inside the burst was relevant. A
    /// stray end without a matching begin is tolerated and skips.
    pub fn end_burst(&mut self) -> Decision {
        match self.state {
            BurstState::Idle => Decision::Skip,
            BurstState::BurstOpen { pending } => {
                self.state = BurstState::Idle;
                if pending { Decision::Run } else { Decision::Skip }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn relevant_change_while_idle_runs_immediately() {
        let mut coalescer = ChangeCoalescer::new();
        assert_eq!(coalescer.notify_change(true), Decision::Run);
        // Still idle afterwards; the next one runs too.
        assert_eq!(coalescer.notify_change(true), Decision::Run);
    }

    #[test]
    fn irrelevant_changes_skip_in_any_state() {
        let mut coalescer = ChangeCoalescer::new();
        assert_eq!(coalescer.notify_change(false), Decision::Skip);
        coalescer.begin_burst();
        assert_eq!(coalescer.notify_change(false), Decision::Skip);
        assert_eq!(coalescer.end_burst(), Decision::Skip);
    }

    #[test]
    fn burst_collapses_many_changes_into_one_run() {
        let mut coalescer = ChangeCoalescer::new();
        coalescer.begin_burst();
        for _ in 0..5 {
            assert_eq!(coalescer.notify_change(true), Decision::Defer);
        }
        assert_eq!(coalescer.end_burst(), Decision::Run);
        // The debt is settled; a second end is a stray.
        assert_eq!(coalescer.end_burst(), Decision::Skip);
    }

    #[test]
    fn empty_burst_owes_nothing() {
        let mut coalescer = ChangeCoalescer::new();
        coalescer.begin_burst();
        assert_eq!(coalescer.end_burst(), Decision::Skip);
    }

    #[test]
    fn nested_begin_restarts_the_window() {
        let mut coalescer = ChangeCoalescer::new();
        coalescer.begin_burst();
        assert_eq!(coalescer.notify_change(true), Decision::Defer);
        coalescer.begin_burst();
        assert_eq!(coalescer.end_burst(), Decision::Skip);
    }

    #[test]
    fn stray_end_while_idle_is_tolerated() {
        let mut coalescer = ChangeCoalescer::new();
        assert_eq!(coalescer.end_burst(), Decision::Skip);
        assert_eq!(coalescer.notify_change(true), Decision::Run);
    }

    proptest! {
        /// A burst ends in exactly one Run when any change inside it was
        /// relevant, and none otherwise; notifications inside the burst
        /// never run by themselves.
        #[test]
        fn burst_owes_one_run_iff_any_relevant_change(
            notifies in proptest::collection::vec(any::<bool>(), 0..50)
        ) {
            let mut coalescer = ChangeCoalescer::new();
            coalescer.begin_burst();
            for relevant in &notifies {
                prop_assert_ne!(coalescer.notify_change(*relevant), Decision::Run);
            }
            let ran = coalescer.end_burst() == Decision::Run;
            prop_assert_eq!(ran, notifies.iter().any(|r| *r));
            prop_assert_eq!(coalescer.end_burst(), Decision::Skip);
        }
    }
}
