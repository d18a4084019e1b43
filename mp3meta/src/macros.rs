macro_rules! try_vec {
	($elem:expr; $size:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size)? }};
}

// Shorthand for return Err(Mp3MetaError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(Mp3MetaError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(Mp3MetaError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::Mp3MetaError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($($reason:expr),+)) => {
		return Err(crate::error::Mp3MetaError::new(
			crate::error::ErrorKind::$variant($($reason),+),
		))
	};
}

// Shorthand for Id3v2Error::new(Id3v2ErrorKind::Foo).into()
//
// Usage:
//
// - id3v2_err!(Variant)
//
// or bail:
//
// - id3v2_err!(@BAIL Variant)
macro_rules! id3v2_err {
	($variant:ident) => {
		Into::<crate::error::Mp3MetaError>::into(crate::error::Id3v2Error::new(
			crate::error::Id3v2ErrorKind::$variant,
		))
	};
	(@BAIL $variant:ident) => {
		return Err(id3v2_err!($variant))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: `STRICT`, `BESTATTEMPT`, and `RELAXED` are optional, any mode that is
// 		 missing falls through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {err, id3v2_err, parse_mode_choice, try_vec};
