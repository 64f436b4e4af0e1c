//! nom parsers for the fixed-size 7zip signature header.
//!
//! Only the first 32 bytes of an archive are ever looked at here. Everything
//! after the start header is usually LZMA-compressed and is left alone.

mod crc;
mod err;
mod parsers;
mod types;
pub use err::*;
pub use parsers::*;
pub use types::*;
