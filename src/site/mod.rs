pub(crate) mod canvas_host;
pub(crate) mod config;
pub(crate) mod hydrate;
pub(crate) mod inject;
pub(crate) mod markup;
pub(crate) mod pipeline;
pub(crate) mod source;
pub(crate) mod transform;
