use std::fmt::{Display, Formatter};

/// The label used for any frame ID without a known name
pub const UNKNOWN_FRAME_NAME: &str = "Unknown";

/// An ID3v2.3 frame ID recognized by this crate
///
/// Frames with any other ID are never decoded, see
/// [`UnknownFrameHandling`](crate::config::UnknownFrameHandling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameId {
	/// `TIT2`
	Title,
	/// `TPE1`
	LeadArtist,
	/// `TPE2`
	Band,
	/// `TALB`
	Album,
	/// `TYER`
	Year,
	/// `TRCK`
	TrackNumber,
	/// `COMM`
	Comment,
	/// `APIC`
	AttachedPicture,
}

impl FrameId {
	/// Get the `FrameId` for a raw 4 byte ID
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3meta::id3::FrameId;
	///
	/// assert_eq!(FrameId::from_bytes(b"TALB"), Some(FrameId::Album));
	/// assert_eq!(FrameId::from_bytes(b"TCON"), None);
	/// ```
	pub fn from_bytes(id: &[u8]) -> Option<Self> {
		match id {
			b"TIT2" => Some(Self::Title),
			b"TPE1" => Some(Self::LeadArtist),
			b"TPE2" => Some(Self::Band),
			b"TALB" => Some(Self::Album),
			b"TYER" => Some(Self::Year),
			b"TRCK" => Some(Self::TrackNumber),
			b"COMM" => Some(Self::Comment),
			b"APIC" => Some(Self::AttachedPicture),
			_ => None,
		}
	}

	/// The 4 character ID
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Title => "TIT2",
			Self::LeadArtist => "TPE1",
			Self::Band => "TPE2",
			Self::Album => "TALB",
			Self::Year => "TYER",
			Self::TrackNumber => "TRCK",
			Self::Comment => "COMM",
			Self::AttachedPicture => "APIC",
		}
	}

	/// The human-readable frame name, as written in the ID3v2.3 standard
	pub fn name(self) -> &'static str {
		match self {
			Self::Title => "Title/songname/content description",
			Self::LeadArtist => "Lead performer(s)/Soloist(s)",
			Self::Band => "Band/orchestra/accompaniment",
			Self::Album => "Album/Movie/Show title",
			Self::Year => "Year",
			Self::TrackNumber => "Track number/Position in set",
			Self::Comment => "Comments",
			Self::AttachedPicture => "Attached picture",
		}
	}
}

impl Display for FrameId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Get the human-readable name of any frame ID
///
/// IDs that aren't a [`FrameId`] map to `"Unknown"`.
///
/// # Examples
///
/// ```rust
/// use mp3meta::id3::frame_name;
///
/// assert_eq!(frame_name(b"TYER"), "Year");
/// assert_eq!(frame_name(b"TCON"), "Unknown");
/// ```
pub fn frame_name(id: &[u8]) -> &'static str {
	FrameId::from_bytes(id).map_or(UNKNOWN_FRAME_NAME, FrameId::name)
}
