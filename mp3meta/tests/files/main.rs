#![allow(missing_docs)]

mod errors;
mod read;
mod relaxed;
mod unknown_frames;
pub(crate) mod util;
