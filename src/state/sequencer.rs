//! Step sequencing shared by every wizard
//!
//! A wizard declares its steps once, in visiting order, through
//! [`WizardStep::ALL`]. Step numbers are whatever the flow uses for
//! display and need not be contiguous; transitions always follow the
//! declared order, never `number + 1`.

use std::fmt::Debug;

use tracing::debug;

pub trait WizardStep: Copy + Eq + Debug + 'static {
    /// Every step of the wizard, in visiting order.
    const ALL: &'static [Self];

    /// The 1-based step number used by the flow.
    fn number(self) -> u8;

    /// Returns the display name for the step
    fn display_name(self) -> &'static str;

    /// Returns the next step in the flow
    fn next(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|step| *step == self)?;
        Self::ALL.get(index + 1).copied()
    }

    /// Returns the previous step in the flow
    fn previous(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|step| *step == self)?;
        index.checked_sub(1).and_then(|prev| Self::ALL.get(prev).copied())
    }

    fn first() -> Self {
        Self::ALL[0]
    }

    fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Holds the current step of one wizard instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSequencer<S: WizardStep> {
    current: S,
}

impl<S: WizardStep> Default for StepSequencer<S> {
    fn default() -> Self {
        Self { current: S::first() }
    }
}

impl<S: WizardStep> StepSequencer<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> S {
        self.current
    }

    /// Advances to the declared next step when `complete` holds.
    ///
    /// Returns whether the step changed. Incomplete steps and the
    /// terminal step are no-ops.
    pub fn go_next(&mut self, complete: bool) -> bool {
        if !complete {
            debug!(step = ?self.current, "step incomplete, staying");
            return false;
        }
        match self.current.next() {
            Some(next) => {
                debug!(from = ?self.current, to = ?next, "advancing step");
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Steps back to the nearest prior declared step, never below the first.
    pub fn go_prev(&mut self) -> bool {
        match self.current.previous() {
            Some(prev) => {
                debug!(from = ?self.current, to = ?prev, "stepping back");
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// 1-based position in the visiting order, for progress indication.
    pub fn position(&self) -> usize {
        S::ALL
            .iter()
            .position(|step| *step == self.current)
            .map(|index| index + 1)
            .unwrap_or(1)
    }

    pub fn total_steps(&self) -> usize {
        S::ALL.len()
    }

    /// Progress through the flow as a percentage, first step is 0.
    pub fn progress_percentage(&self) -> f32 {
        let total = self.total_steps();
        if total > 1 {
            (self.position() - 1) as f32 / (total - 1) as f32 * 100.0
        } else {
            0.0
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.current.previous().is_some()
    }

    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }
}
