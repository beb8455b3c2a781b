//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod resolve;

pub(crate) use render::RenderArgs;
pub(crate) use resolve::ResolveArgs;
