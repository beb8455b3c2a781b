//! CriticMarkup to HTML renderer.
//!
//! This crate rewrites CriticMarkup change annotations embedded in text into
//! HTML fragments, leaving everything else untouched:
//!
//! | Markup                  | HTML                                              |
//! |-------------------------|---------------------------------------------------|
//! | `{++added++}`           | `<ins class="crit">added</ins>`                   |
//! | `{--removed--}`         | `<del class="crit">removed</del>`                 |
//! | `{~~old~>new~~}`        | paired `<del data-subout="subN">` / `<ins id="subN">` |
//! | `{==marked==}`          | `<mark class="crit">marked</mark>`                |
//! | `{>>comment<<}`         | `<span class="critic criticcomment">comment</span>` |
//!
//! A comment placed right after a change renders as a `&dagger;` with the
//! comment in a `data-comment` attribute instead.
//!
//! # Architecture
//!
//! Rendering is a fixed pipeline of passes, each rebuilding the whole
//! buffer. Passes run in this order: attached comments, deletions,
//! additions, standalone comments, highlights, additions again,
//! substitutions. Captured content is never rescanned by the pass that
//! captured it and is inserted without HTML escaping; callers rendering
//! untrusted text must escape it first.
//!
//! The same patterns drive [`resolve`], which accepts or rejects all changes
//! and yields plain text.
//!
//! # Example
//!
//! ```
//! use critic_renderer::render;
//!
//! let html = render("Ship it {--today--}{++tomorrow++}{>>after review<<}.");
//! assert_eq!(
//!     html,
//!     "Ship it <del class=\"crit\">today</del><ins class=\"crit\">tomorrow</ins>\
//!      <span class=\"critic criticcomment inline\" data-comment=\"after review\">&dagger;</span>."
//! );
//! ```

mod mode;
mod pass;
mod patterns;
mod renderer;
mod replace;
mod resolve;

pub use mode::{Mode, ParseModeError};
pub use renderer::{MarkupStats, RenderResult, render, render_with_stats};
pub use resolve::{Resolution, resolve};
