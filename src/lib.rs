//! The library code for the `sitemeta` metadata synthesizer. This is the one
//! non-trivial piece of my portfolio site: it turns a content record (blog
//! post or work project front matter) plus the site-wide profile into the
//! two derived artifacts every page embeds:
//!
//! 1. Head metadata ([`crate::seo`]): normalized title/description, keyword
//!    list, canonical URL, Open Graph and Twitter card payloads.
//! 2. Structured data ([`crate::jsonld`]): the schema.org JSON-LD object
//!    (`BlogPosting`/`Article`), plus the home page's `@graph`
//!    ([`crate::home`]).
//!
//! Content loading and rendering live elsewhere; this crate only sees
//! already-parsed records ([`crate::content`]) and the immutable
//! [`crate::config::SiteProfile`]. Synthesis is a pure function of the two:
//! no I/O, no state, and the only failure mode is a slug that doesn't
//! resolve ([`crate::page`]).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod content;
pub mod home;
pub mod jsonld;
pub mod page;
pub mod seo;
