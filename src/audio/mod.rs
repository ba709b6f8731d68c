//! Audio format and buffer list types

pub mod buffer_list;
pub mod format;

#[cfg(test)]
mod tests;

pub use buffer_list::AudioBufferList;
pub use format::{AudioFormat, SampleFormat};
