//! Image module: borrowed source views, owned working buffers, and I/O.
//!
//! Components
//! - `view`: read-only `GrayView`/`RgbView` over caller-owned pixel data and
//!   the `SourceImage` enum the pipeline samples from.
//! - `buffer`: owned `GrayBuffer` (rectified raster) and `BinaryMask`.
//! - `io`: helpers for loading photos, saving grayscale PNGs, and writing JSON.
//!
//! Design goals
//! - Views borrow external data with an explicit stride; buffers own and
//!   mutate. Hot loops go through rows to stay cache-friendly.
//! - Luma conversion happens at the sampling site so RGB photos never need a
//!   full grayscale copy before rectification.

pub mod buffer;
pub mod io;
pub mod view;

pub use self::buffer::{BinaryMask, GrayBuffer};
pub use self::io::RgbBuffer;
pub use self::view::{GrayView, RgbView, SourceImage};
