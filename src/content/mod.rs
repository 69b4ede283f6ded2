pub(crate) mod date;
pub(crate) mod escape;
pub(crate) mod experience;
pub(crate) mod render;
