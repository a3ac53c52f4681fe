//! Gap buffers: sequence containers tuned for the editing workload,
//! where most modifications cluster around a moving cursor.
//!
//! [`GapVec`] is the typed engine; [`GapBuffer`] wraps it behind the
//! three element kinds (octets, wide characters, fixed-width integers)
//! with validated, `Result`-returning operations.

mod buffer;
mod error;
mod iter;
mod raw;
mod vec;

pub use buffer::{Element, GapBuffer, Kind, View};
pub use error::{Error, Result};
pub use iter::{Iter, IterMut};
pub use vec::GapVec;
