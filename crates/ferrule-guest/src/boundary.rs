//! Shared steps of the boundary protocol.
//!
//! Every export runs the same sequence:
//!
//! 1. resolve input regions and the output length slot (bounds only),
//! 2. decode inputs through zero-copy views,
//! 3. delegate to a collaborator,
//! 4. store the output in an exactly sized region and write its length.
//!
//! Any step may fail; failures before step 4 leave the heap untouched.

use std::error::Error;
use std::fmt;

use ferrule_arena::{ArenaError, GuestHeap, Region};
use ferrule_core::{DecodeError, Document, EvalError, RasterError, StructuredDecoder};

use crate::diagnostics;
use crate::status::GuestStatus;

/// Any failure inside a boundary call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// A region was out of bounds, or the heap is exhausted.
    Arena(ArenaError),
    /// An input buffer failed to decode.
    Decode(DecodeError),
    /// The policy evaluator failed.
    Eval(EvalError),
    /// The raster encoder failed.
    Raster(RasterError),
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "heap: {e}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
            Self::Eval(e) => write!(f, "evaluate: {e}"),
            Self::Raster(e) => write!(f, "encode: {e}"),
        }
    }
}

impl Error for BoundaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Raster(e) => Some(e),
        }
    }
}

impl From<ArenaError> for BoundaryError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<DecodeError> for BoundaryError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<EvalError> for BoundaryError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<RasterError> for BoundaryError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

/// Borrow the UTF-8 text at `(ptr, len)`.
pub fn read_text(heap: &GuestHeap, ptr: u32, len: u32) -> Result<&str, BoundaryError> {
    Ok(heap.view(ptr, len)?.as_text()?)
}

/// Decode the structured document at `(ptr, len)`.
pub fn read_document<D>(
    heap: &GuestHeap,
    decoder: &D,
    ptr: u32,
    len: u32,
) -> Result<Document, BoundaryError>
where
    D: StructuredDecoder + ?Sized,
{
    Ok(heap.view(ptr, len)?.decode(decoder)?)
}

/// Host-supplied 4-byte slot receiving an output length.
///
/// Only obtainable through [`OutputSlot::resolve`], so a slot in hand has
/// already passed its bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputSlot(Region);

impl OutputSlot {
    /// Bounds-check the slot at `ptr`.
    pub fn resolve(heap: &GuestHeap, ptr: u32) -> Result<Self, BoundaryError> {
        Ok(Self(heap.length_slot(ptr)?))
    }

    /// Copy `bytes` into a fresh region and write its length to the slot.
    ///
    /// If the heap cannot hold `bytes`, nothing is allocated and the slot is
    /// left as it was.
    pub fn emit(self, heap: &mut GuestHeap, bytes: &[u8]) -> Result<Region, BoundaryError> {
        let region = heap.store(bytes)?;
        heap.write_length(self.0, region.len())?;
        Ok(region)
    }
}

/// Log a failed call, record it for `last_error_message`, and map it to a
/// status.
pub(crate) fn settle<T>(
    operation: &'static str,
    result: Result<T, BoundaryError>,
) -> Result<T, GuestStatus> {
    result.map_err(|e| {
        let status = GuestStatus::from(&e);
        if status == GuestStatus::AllocationFailed {
            tracing::warn!(operation, error = %e, "guest heap exhausted");
        } else {
            tracing::debug!(operation, status = status.code(), error = %e, "boundary call failed");
        }
        diagnostics::record_error(operation, &e);
        status
    })
}
