//! Fixed-capacity bump arena for the Ferrule guest boundary.
//!
//! Every buffer that crosses the host/guest edge lives in one [`Arena`]:
//! host inputs written after an `allocate` call, and guest outputs copied
//! in after a boundary function succeeds. The arena never reclaims; the
//! host discards the whole guest instance between sessions.
//!
//! # Layout
//!
//! ```text
//! Arena (Box<[u8]>, capacity C)
//! ├── [0, reserved)        null guard, never handed out
//! ├── [reserved, cursor)   allocated regions, in allocation order
//! └── [cursor, C)          free space
//! ```
//!
//! Offset 0 therefore always means "no allocation". Host-supplied
//! `(offset, len)` pairs are checked against `[reserved, cursor)` before a
//! [`BufferView`] is constructed over them. [`GuestHeap`] layers the
//! host's 32-bit address space on top.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bump;
pub mod config;
pub mod error;
pub mod heap;
pub mod region;
pub mod view;

// Public re-exports for the primary API surface.
pub use bump::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use heap::{GuestHeap, LENGTH_SLOT_BYTES};
pub use region::Region;
pub use view::BufferView;
