use thiserror::Error;

/// Fatal execution errors.
///
/// Every variant is unrecoverable at the machine level: there is no retry
/// and no rollback. The operation that detects the condition reports it
/// synchronously, and the machine it came from should be discarded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VmError {
    /// The low two decimal digits of an instruction value name no
    /// operation. Also raised for negative instruction values, which
    /// cannot encode a valid opcode.
    #[error("unknown opcode {opcode} at address {addr}")]
    UnknownOpcode { opcode: i64, addr: usize },

    /// A mode digit other than 0, 1 or 2.
    #[error("unknown parameter mode {digit} in instruction at address {addr}")]
    UnknownParamMode { digit: i64, addr: usize },

    /// A write operand carried immediate mode. A write target is an
    /// address, so immediate mode cannot describe one.
    #[error("write operand in immediate mode at address {addr}")]
    WriteInImmediateMode { addr: usize },

    /// An effective address outside `0..max`. Memory grows on demand up to
    /// the configured bound and never past it.
    #[error("address {addr} outside memory bounds (max {max})")]
    AddressOutOfRange { addr: i64, max: usize },

    /// An input read found the queue empty while the caller had not asked
    /// for blocking mode.
    #[error("input queue empty in non-blocking run")]
    InputUnderflow,

    /// `run` or `step` on a machine that already executed its halt
    /// instruction.
    #[error("cannot run a halted machine")]
    AlreadyHalted,
}
