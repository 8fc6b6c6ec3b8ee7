//! Utility modules for output formatting and data structures.
//!
//! Provides:
//! - [`RingBuffer`] - Bounded log with O(1) push
//! - [`markdown`] - Markdown decoration for `cat`
//! - [`format`] - Size and date formatting for `ls -l`

pub mod format;
pub mod markdown;
mod ring_buffer;

pub use ring_buffer::RingBuffer;
