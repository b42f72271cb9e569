use std::collections::VecDeque;

use faregrid_core::Position;
use faregrid_paths::StepCommand;

/// Whatever carries out a purchased route.
pub trait MovementActor {
    /// Replace any pending steps with `steps`.
    fn set_pending_steps(&mut self, steps: Vec<StepCommand>);
}

/// Movement actor that queues steps and hands them out one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepQueue {
    pending: VecDeque<StepCommand>,
}

impl StepQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next step, if any.
    pub fn next_step(&mut self) -> Option<StepCommand> {
        self.pending.pop_front()
    }

    /// Steps not yet taken, in order.
    pub fn pending(&self) -> impl Iterator<Item = StepCommand> + '_ {
        self.pending.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every remaining step starting from `from`, returning where the
    /// walk ends.
    pub fn drain_from(&mut self, from: Position) -> Position {
        let mut at = from;
        while let Some(step) = self.next_step() {
            at = at + step.delta();
        }
        at
    }
}

impl MovementActor for StepQueue {
    fn set_pending_steps(&mut self, steps: Vec<StepCommand>) {
        log::debug!("step queue: {} steps pending", steps.len());
        self.pending = steps.into();
    }
}
