//! Heuristic scanners over raw backup bytes.
//!
//! None of these decode Firebird's record stream. They look for landmarks
//! (table names, printable runs, the gbak banner) and derive estimates from
//! where those landmarks sit.

mod estimate;
mod markers;
mod samples;
mod version;
pub use estimate::*;
pub use markers::*;
pub use samples::*;
pub use version::*;
