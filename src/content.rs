//! Defines [`ContentRecord`], the front-matter-shaped input to metadata
//! synthesis, along with the [`Collection`] it belongs to and the
//! [`find_by_slug`] lookup that page code uses to resolve a requested slug.
//!
//! Records are produced by an external content loader (the thing that walks
//! the content directory and parses front matter); this module only describes
//! their shape and checks the fields that synthesis depends on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The date format used in record front matter, e.g. `2024-01-01`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Names a content collection. Blog posts and work projects live in separate
/// collections; slugs are unique per collection, not globally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Blog,
    Work,
}

impl Collection {
    /// The URL path segment under which this collection's pages are served,
    /// e.g. `blog` in `https://example.com/blog/{slug}`.
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Work => "work",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.path_prefix())
    }
}

/// A member of a project's team, as listed in work-project front matter.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TeamMember {
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub avatar: String,

    /// External profile link, used as the member's `sameAs` in structured
    /// data when present.
    #[serde(default, rename = "linkedIn")]
    pub linked_in: Option<String>,
}

/// A single blog post or work project: its front-matter metadata plus the
/// opaque body. The body (`content`) is only ever handed to the renderer;
/// synthesis never looks inside it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    /// URL-safe identifier, unique within the record's collection.
    pub slug: String,

    pub title: String,

    pub summary: String,

    /// Publication date as a `YYYY-MM-DD` string. Kept as text because it is
    /// passed through verbatim to Open Graph and JSON-LD output; [`validate`]
    /// checks that it actually parses.
    ///
    /// [`validate`]: ContentRecord::validate
    pub published_at: String,

    /// Cover image path (site-relative, e.g. `/images/cover.jpg`).
    #[serde(default)]
    pub image: Option<String>,

    /// Gallery image paths, in display order. May be empty.
    #[serde(default)]
    pub images: Vec<String>,

    /// Present only for work projects that credit a team.
    #[serde(default)]
    pub team: Option<Vec<TeamMember>>,

    /// Opaque body payload for the external renderer.
    #[serde(default)]
    pub content: String,
}

impl ContentRecord {
    /// Checks the fields that metadata synthesis assumes are well-formed:
    /// `slug`, `title`, and `summary` must be non-empty and `published_at`
    /// must be a real `YYYY-MM-DD` date. Page code calls this before
    /// synthesizing anything, so the synthesis functions themselves never
    /// have to deal with malformed records.
    pub fn validate(&self) -> Result<()> {
        if self.slug.is_empty() {
            return Err(self.malformed("slug"));
        }
        if self.title.is_empty() {
            return Err(self.malformed("title"));
        }
        if self.summary.is_empty() {
            return Err(self.malformed("summary"));
        }
        if NaiveDate::parse_from_str(&self.published_at, DATE_FORMAT).is_err() {
            return Err(self.malformed("publishedAt"));
        }
        Ok(())
    }

    fn malformed(&self, field: &'static str) -> Error {
        Error::Malformed {
            slug: self.slug.clone(),
            field,
        }
    }
}

/// Resolves a slug against a collection's records: a linear scan returning
/// the first exact match, or `None` when nothing matches.
pub fn find_by_slug<'a>(records: &'a [ContentRecord], slug: &str) -> Option<&'a ContentRecord> {
    records.iter().find(|record| record.slug == slug)
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem resolving a content record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Returned when no record in the collection matches the requested slug.
    /// Page code turns this into the router's standard not-found response.
    NotFound {
        collection: Collection,
        slug: String,
    },

    /// Returned when a record is missing a field that synthesis requires.
    Malformed { slug: String, field: &'static str },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound { collection, slug } => {
                write!(f, "No `{}` record matches slug `{}`", collection, slug)
            }
            Error::Malformed { slug, field } => {
                write!(f, "Record `{}` has a missing or invalid `{}` field", slug, field)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_find_by_slug_first_match() {
        let records = vec![
            record("alpha", "First"),
            record("beta", "Second"),
            record("alpha", "Shadowed"),
        ];
        let found = find_by_slug(&records, "alpha").unwrap();
        assert_eq!("First", found.title);
    }

    #[test]
    fn test_find_by_slug_missing() {
        let records = vec![record("alpha", "First")];
        assert!(find_by_slug(&records, "gamma").is_none());
    }

    #[test]
    fn test_find_by_slug_no_partial_match() {
        let records = vec![record("alpha", "First")];
        assert!(find_by_slug(&records, "alph").is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(Ok(()), record("alpha", "First").validate());
    }

    #[test]
    fn test_validate_empty_title() {
        fixture_malformed(record("alpha", ""), "title");
    }

    #[test]
    fn test_validate_empty_slug() {
        fixture_malformed(record("", "First"), "slug");
    }

    #[test]
    fn test_validate_empty_summary() {
        let mut r = record("alpha", "First");
        r.summary = String::new();
        fixture_malformed(r, "summary");
    }

    #[test]
    fn test_validate_bad_date() {
        let mut r = record("alpha", "First");
        r.published_at = "January 1st".to_owned();
        fixture_malformed(r, "publishedAt");
    }

    #[test]
    fn test_deserialize_front_matter_shape() {
        let yaml = "
slug: hello-world
title: Hello, world
summary: A first post.
publishedAt: 2024-01-01
team:
  - name: Ada
    linkedIn: https://www.linkedin.com/in/ada/
";
        let r: ContentRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!("hello-world", r.slug);
        assert_eq!("2024-01-01", r.published_at);
        assert_eq!(None, r.image);
        assert!(r.images.is_empty());
        let team = r.team.unwrap();
        assert_eq!("Ada", team[0].name);
        assert_eq!(
            Some("https://www.linkedin.com/in/ada/".to_owned()),
            team[0].linked_in
        );
    }

    fn fixture_malformed(record: ContentRecord, wanted_field: &'static str) {
        match record.validate() {
            Err(Error::Malformed { field, .. }) => assert_eq!(wanted_field, field),
            other => panic!("Wanted a Malformed error; got {:?}", other),
        }
    }

    fn record(slug: &str, title: &str) -> ContentRecord {
        ContentRecord {
            slug: slug.to_owned(),
            title: title.to_owned(),
            summary: "A summary.".to_owned(),
            published_at: "2024-01-01".to_owned(),
            image: None,
            images: Vec::new(),
            team: None,
            content: String::new(),
        }
    }
}
