//! The library code for the `devblog` static site generator. The
//! architecture can be generally broken down into two distinct steps:
//!
//! 1. Composing the article registry from the compiled-in article set
//!    ([`crate::articles`] feeding [`crate::registry`])
//! 2. Converting the registry into output files on disk ([`crate::write`])
//!
//! Unlike most site generators there is no parsing step: the articles are
//! part of the binary. Each module under [`crate::articles`] carries one
//! article's metadata and markdown body, and the registry pairs that
//! metadata with a [`crate::content::Content`] variant that knows how to
//! render the body. The second step writes the listing page (featured
//! article, card grid, article count), one page per article, the
//! not-found page, the static assets, and the Atom feed.
//!
//! Alongside the build pipeline sit the pieces the CLI exposes directly:
//! registry lookups ([`crate::registry`]), the search filter
//! ([`crate::search`]), and the persisted color theme ([`crate::theme`]),
//! which is stamped onto the root element of every rendered page.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod article;
pub mod articles;
pub mod build;
pub mod config;
pub mod content;
pub mod feed;
pub mod registry;
pub mod search;
pub mod theme;
pub mod write;
