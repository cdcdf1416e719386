//! Status codes returned by status-style exports.
//!
//! [`GuestStatus`] is a `repr(i32)` enum. `1` and `0` carry a decision;
//! every failure is negative. Conversions from the collaborator and arena
//! error types are provided so each export can map its failure in one
//! place.

use ferrule_arena::ArenaError;
use ferrule_core::{DecodeError, Decision, EvalError, RasterError};

use crate::boundary::BoundaryError;

/// Status code returned across the host/guest edge.
///
/// Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestStatus {
    /// The policy allowed the input.
    Allow = 1,
    /// The policy denied the input, or produced a non-boolean result.
    Deny = 0,
    /// An input buffer could not be decoded.
    DecodeFailed = -1,
    /// The evaluator environment could not be initialised.
    EvaluatorInitFailed = -2,
    /// The expression failed to compile.
    CompileFailed = -3,
    /// The compiled expression could not be built into a program.
    ProgramBuildFailed = -4,
    /// The external computation failed while running.
    RuntimeFailed = -5,
    /// A `(ptr, len)` pair lies outside the allocated heap.
    InvalidArgument = -6,
    /// The heap has no room for the requested output.
    AllocationFailed = -7,
    /// Internal error (e.g. poisoned runtime after a prior panic).
    InternalError = -8,
    /// A Rust panic was caught at the boundary.
    Panicked = -128,
}

impl GuestStatus {
    /// Raw value handed to the host.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<Decision> for GuestStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Allow => GuestStatus::Allow,
            Decision::Deny => GuestStatus::Deny,
        }
    }
}

impl From<&DecodeError> for GuestStatus {
    fn from(_: &DecodeError) -> Self {
        GuestStatus::DecodeFailed
    }
}

impl From<&EvalError> for GuestStatus {
    fn from(e: &EvalError) -> Self {
        match e {
            EvalError::EnvironmentInit { .. } => GuestStatus::EvaluatorInitFailed,
            EvalError::Compile { .. } => GuestStatus::CompileFailed,
            EvalError::ProgramBuild { .. } => GuestStatus::ProgramBuildFailed,
            EvalError::Runtime { .. } => GuestStatus::RuntimeFailed,
        }
    }
}

impl From<&RasterError> for GuestStatus {
    fn from(e: &RasterError) -> Self {
        match e {
            RasterError::EmptyPayload => GuestStatus::DecodeFailed,
            RasterError::Encode { .. }
            | RasterError::ExceedsResolution { .. }
            | RasterError::Write { .. } => GuestStatus::RuntimeFailed,
        }
    }
}

impl From<&ArenaError> for GuestStatus {
    fn from(e: &ArenaError) -> Self {
        match e {
            ArenaError::OutOfBounds { .. } => GuestStatus::InvalidArgument,
            ArenaError::CapacityExceeded { .. } => GuestStatus::AllocationFailed,
            ArenaError::InvalidConfig { .. } => GuestStatus::InternalError,
        }
    }
}

impl From<&BoundaryError> for GuestStatus {
    fn from(e: &BoundaryError) -> Self {
        match e {
            BoundaryError::Arena(e) => e.into(),
            BoundaryError::Decode(e) => e.into(),
            BoundaryError::Eval(e) => e.into(),
            BoundaryError::Raster(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_values_are_stable() {
        let expected = [
            (GuestStatus::Allow, 1),
            (GuestStatus::Deny, 0),
            (GuestStatus::DecodeFailed, -1),
            (GuestStatus::EvaluatorInitFailed, -2),
            (GuestStatus::CompileFailed, -3),
            (GuestStatus::ProgramBuildFailed, -4),
            (GuestStatus::RuntimeFailed, -5),
            (GuestStatus::InvalidArgument, -6),
            (GuestStatus::AllocationFailed, -7),
            (GuestStatus::InternalError, -8),
            (GuestStatus::Panicked, -128),
        ];
        for (status, code) in expected {
            assert_eq!(status.code(), code, "{status:?}");
        }
    }

    #[test]
    fn decision_to_status() {
        assert_eq!(GuestStatus::from(Decision::Allow), GuestStatus::Allow);
        assert_eq!(GuestStatus::from(Decision::Deny), GuestStatus::Deny);
    }

    #[test]
    fn eval_error_to_status() {
        let reason = String::from("x");
        assert_eq!(
            GuestStatus::from(&EvalError::EnvironmentInit {
                reason: reason.clone()
            }),
            GuestStatus::EvaluatorInitFailed
        );
        assert_eq!(
            GuestStatus::from(&EvalError::Compile {
                reason: reason.clone()
            }),
            GuestStatus::CompileFailed
        );
        assert_eq!(
            GuestStatus::from(&EvalError::ProgramBuild {
                reason: reason.clone()
            }),
            GuestStatus::ProgramBuildFailed
        );
        assert_eq!(
            GuestStatus::from(&EvalError::Runtime { reason }),
            GuestStatus::RuntimeFailed
        );
    }

    #[test]
    fn decode_error_to_status() {
        assert_eq!(
            GuestStatus::from(&DecodeError::UnexpectedShape { expected: "object" }),
            GuestStatus::DecodeFailed
        );
        assert_eq!(
            GuestStatus::from(&DecodeError::InvalidText { valid_up_to: 2 }),
            GuestStatus::DecodeFailed
        );
    }

    #[test]
    fn arena_error_to_status() {
        assert_eq!(
            GuestStatus::from(&ArenaError::OutOfBounds {
                offset: 8,
                len: 4,
                limit: 8
            }),
            GuestStatus::InvalidArgument
        );
        assert_eq!(
            GuestStatus::from(&ArenaError::CapacityExceeded {
                requested: 16,
                remaining: 0
            }),
            GuestStatus::AllocationFailed
        );
    }

    #[test]
    fn boundary_error_delegates() {
        let err = BoundaryError::from(EvalError::Compile {
            reason: "unexpected token".into(),
        });
        assert_eq!(GuestStatus::from(&err), GuestStatus::CompileFailed);
        let err = BoundaryError::from(RasterError::EmptyPayload);
        assert_eq!(GuestStatus::from(&err), GuestStatus::DecodeFailed);
    }
}
