pub(crate) mod alloc;
pub(crate) mod cursor;
pub(crate) mod text;
