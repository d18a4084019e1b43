//! Read the ID3v2.3 tag at the start of an MP3 file.
//!
//! Only the most common frames are decoded: title, artist, album artist, album, year,
//! track number, comments, and attached pictures. Nothing is ever written.
//!
//! # Examples
//!
//! ## Reading the frames of a file
//!
//! ```rust,no_run
//! # fn main() -> mp3meta::error::Result<()> {
//! use mp3meta::id3::Frame;
//!
//! for frame in mp3meta::read_tags("test.mp3")? {
//! 	match frame {
//! 		Frame::Text(text) => println!("{}: {}", text.name(), text.value),
//! 		Frame::Comment(comment) => println!("Comment: {}", comment.content),
//! 		Frame::Picture(picture) => println!("Picture: {}", picture.mime_type),
//! 	}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Tolerating bad frames
//!
//! By default, a single frame that fails to decode fails the entire read.
//! [`ParsingMode::Relaxed`](config::ParsingMode::Relaxed) drops the frame instead.
//!
//! ```rust,no_run
//! # fn main() -> mp3meta::error::Result<()> {
//! use mp3meta::config::{ParseOptions, ParsingMode};
//!
//! let options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
//! let tag = mp3meta::read_tag_from_path("test.mp3", options)?;
//!
//! println!("Artist: {:?}", tag.artist());
//! println!("{} frames dropped", tag.skipped_frames().len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod id3;
pub(crate) mod macros;
pub mod picture;
pub mod reader;
mod util;

pub use crate::reader::{read_tag_from_path, read_tags};

pub use util::text::TextEncoding;
