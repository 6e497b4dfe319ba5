use thiserror::Error;

use crate::error::VmError;
use crate::vm::{RunResult, Vm};

/// Errors from driving a ring of machines.
#[derive(Debug, Error)]
pub enum RingError {
    #[error(transparent)]
    Vm(#[from] VmError),

    /// A full round passed in which every live machine stayed blocked and
    /// nothing was forwarded. The ring would spin forever, so it reports
    /// the starvation instead.
    #[error("ring stalled: every machine blocked with no values in flight")]
    Stalled,
}

/// A feedback loop of machines: each one's fresh output feeds the next
/// one's input queue, and the last feeds back into the first.
///
/// The ring drives its machines round-robin with blocking runs. Each
/// machine executes until it halts or needs input that has not arrived
/// yet, its output is forwarded, and the next machine takes over. No
/// threads, no locking: every machine exclusively owns its own state, and
/// back-pressure is implicit because output is only pulled between turns.
/// Termination is global: the ring is done when every machine has halted.
pub struct Ring {
    vms: Vec<Vm>,
}

impl Ring {
    /// Build a ring over `vms` in forwarding order. Per-machine setup
    /// values (a phase setting, a mode flag) should already be queued on
    /// each machine via `add_input`; they are consumed ahead of anything
    /// the ring forwards.
    pub fn new(vms: Vec<Vm>) -> Self {
        Self { vms }
    }

    /// Read-only access to the machines, for post-run inspection.
    pub fn vms(&self) -> &[Vm] {
        &self.vms
    }

    /// Feed `seed` to the first machine and drive the ring until every
    /// machine halts. Returns the complete output stream of the last
    /// machine; its final element is the loop's final signal.
    pub fn run(&mut self, seed: i64) -> Result<Vec<i64>, RingError> {
        if self.vms.is_empty() {
            return Ok(Vec::new());
        }
        let count = self.vms.len();
        self.vms[0].add_input(seed);

        let mut last_stream = Vec::new();
        loop {
            let mut progressed = false;
            for i in 0..count {
                if self.vms[i].is_halted() {
                    continue;
                }
                let (outputs, result) = self.vms[i].run(true)?;
                if result == RunResult::Halted || !outputs.is_empty() {
                    progressed = true;
                }
                if i == count - 1 {
                    last_stream.extend_from_slice(&outputs);
                }
                // Forwarding into a halted machine is harmless; the values
                // are simply never consumed.
                let next = (i + 1) % count;
                for value in outputs {
                    self.vms[next].add_input(value);
                }
            }
            if self.vms.iter().all(Vm::is_halted) {
                return Ok(last_stream);
            }
            if !progressed {
                return Err(RingError::Stalled);
            }
        }
    }
}
