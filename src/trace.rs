use crate::decode::Instruction;

/// Observation hooks for one machine's execution.
///
/// A tracer is installed per machine instance at construction; there is no
/// global logger. Every hook has an empty default body so implementations
/// override only what they care about. Hooks fire synchronously from the
/// execution loop, in program order.
pub trait Tracer {
    /// An instruction was fetched and decoded at `addr`.
    fn on_instruction(&mut self, addr: usize, instr: &Instruction) {
        let _ = (addr, instr);
    }

    /// A value was consumed from the input queue.
    fn on_input(&mut self, value: i64) {
        let _ = value;
    }

    /// A value was appended to the output sequence.
    fn on_output(&mut self, value: i64) {
        let _ = value;
    }

    /// The relative base changed; `base` is the new value.
    fn on_base_adjusted(&mut self, base: i64) {
        let _ = base;
    }

    /// An input read found the queue empty and the machine is suspending.
    /// The pointer still rests on the pending read.
    fn on_blocked(&mut self, addr: usize) {
        let _ = addr;
    }

    /// The halt instruction executed; the machine is terminal.
    fn on_halt(&mut self) {}
}

/// A tracer that forwards every hook to a `tracing` event, so a host
/// application can subscribe with any `tracing` subscriber it likes.
pub struct LogTracer;

impl Tracer for LogTracer {
    fn on_instruction(&mut self, addr: usize, instr: &Instruction) {
        tracing::trace!(addr, op = ?instr.op, modes = ?instr.modes, "exec");
    }

    fn on_input(&mut self, value: i64) {
        tracing::debug!(value, "input consumed");
    }

    fn on_output(&mut self, value: i64) {
        tracing::debug!(value, "output produced");
    }

    fn on_base_adjusted(&mut self, base: i64) {
        tracing::trace!(base, "relative base adjusted");
    }

    fn on_blocked(&mut self, addr: usize) {
        tracing::debug!(addr, "blocked on input");
    }

    fn on_halt(&mut self) {
        tracing::debug!("halted");
    }
}
