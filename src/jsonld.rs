//! JSON-LD structured data for content pages.
//!
//! [`synthesize`] builds the schema.org object embedded in each page body as
//! a `<script type="application/ld+json">` blob: a `BlogPosting` for blog
//! posts, an `Article` for work projects. Everything is a typed struct so
//! conditional fields (`sameAs`, `contributor`) are handled explicitly
//! instead of spread into an untyped map.

use crate::config::SiteProfile;
use crate::content::{Collection, ContentRecord, TeamMember};
use crate::seo;
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A page's structured-data object. Field names follow schema.org, so
/// serialization uses camelCase with the `@`-prefixed JSON-LD keys renamed
/// explicitly.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub date_published: String,
    pub date_modified: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub author: Author,
    pub publisher: Publisher,
    pub main_entity_of_page: WebPageRef,
    pub keywords: String,
    /// Work projects only, and only when the record's team is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor: Option<Vec<Contributor>>,
}

impl StructuredData {
    /// Serializes to the JSON blob embedded verbatim in the page.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Adds the `contributor` list from a record's team. A no-op when the
    /// team is absent or empty.
    pub fn with_contributors(mut self, team: Option<&[TeamMember]>) -> StructuredData {
        match team {
            Some(members) if !members.is_empty() => {
                self.contributor = Some(
                    members
                        .iter()
                        .map(|member| Contributor {
                            kind: "Person",
                            name: member.name.clone(),
                            same_as: member.linked_in.clone(),
                        })
                        .collect(),
                );
            }
            _ => {}
        }
        self
    }
}

/// The page author: always the site owner.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Author {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    /// Twitter profile link, present only when a handle is configured.
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    pub same_as: Option<String>,
}

/// The publishing organization. For a personal site this is just the person
/// again, with the site favicon as logo.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

/// Reference to the page itself for `mainEntityOfPage`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// One team member credited on a work project.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contributor {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    pub same_as: Option<String>,
}

/// Synthesizes the structured-data object for one record. Uses the raw
/// title and summary (normalization is a head-metadata concern; search
/// engines want the real text here).
pub fn synthesize(
    record: &ContentRecord,
    profile: &SiteProfile,
    kind: Collection,
    path_prefix: &str,
) -> StructuredData {
    let person = &profile.person;
    let canonical = profile.url(&format!("/{}/{}", path_prefix, record.slug));

    let data = StructuredData {
        context: SCHEMA_CONTEXT,
        kind: match kind {
            Collection::Blog => "BlogPosting",
            Collection::Work => "Article",
        },
        headline: record.title.clone(),
        date_published: record.published_at.clone(),
        date_modified: record.published_at.clone(),
        description: record.summary.clone(),
        image: resolve_image(record, profile, kind),
        url: canonical.clone(),
        author: Author {
            kind: "Person",
            name: person.name(),
            url: profile.url(""),
            same_as: person.twitter_url(),
        },
        publisher: Publisher {
            kind: "Organization",
            name: person.name(),
            logo: ImageObject {
                kind: "ImageObject",
                url: profile.url("/favicon.ico"),
            },
        },
        main_entity_of_page: WebPageRef {
            kind: "WebPage",
            id: canonical,
        },
        keywords: keywords(record, profile, kind),
        contributor: None,
    };

    match kind {
        Collection::Work => data.with_contributors(record.team.as_deref()),
        Collection::Blog => data,
    }
}

/// Picks the structured-data image. Work projects fall back to their first
/// gallery image before the generated one; blog posts go straight from the
/// cover image to the generated fallback.
fn resolve_image(record: &ContentRecord, profile: &SiteProfile, kind: Collection) -> String {
    match (&record.image, kind, record.images.first()) {
        (Some(cover), _, _) => profile.url(cover),
        (None, Collection::Work, Some(first)) => profile.url(first),
        (None, _, _) => profile.url(&format!("/og?title={}", record.title)),
    }
}

fn keywords(record: &ContentRecord, profile: &SiteProfile, kind: Collection) -> String {
    let person = &profile.person;
    let tags: &[&str] = match kind {
        Collection::Blog => &["blog", "portfolio"],
        Collection::Work => &["project", "portfolio", "case study", "work"],
    };
    seo::join_keywords(
        vec![record.title.clone(), record.summary.clone()]
            .into_iter()
            .chain(tags.iter().map(|tag| tag.to_string()))
            .chain(vec![person.name(), person.role.clone()]),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Person;

    #[test]
    fn test_blog_type() {
        let data = synthesize(&record(), &profile(), Collection::Blog, "blog");
        assert_eq!("BlogPosting", data.kind);
        assert_eq!("https://example.com/blog/craft", data.url);
        assert_eq!("https://example.com/blog/craft", data.main_entity_of_page.id);
    }

    #[test]
    fn test_work_type() {
        let data = synthesize(&record(), &profile(), Collection::Work, "work");
        assert_eq!("Article", data.kind);
    }

    #[test]
    fn test_image_prefers_cover() {
        let mut record = record();
        record.image = Some("/images/cover.jpg".to_owned());
        record.images = vec!["/images/first.jpg".to_owned()];
        let data = synthesize(&record, &profile(), Collection::Work, "work");
        assert_eq!("https://example.com/images/cover.jpg", data.image);
    }

    #[test]
    fn test_work_image_falls_back_to_gallery() {
        let mut record = record();
        record.image = None;
        record.images = vec!["/images/first.jpg".to_owned(), "/images/second.jpg".to_owned()];
        let data = synthesize(&record, &profile(), Collection::Work, "work");
        assert_eq!("https://example.com/images/first.jpg", data.image);
    }

    #[test]
    fn test_blog_image_ignores_gallery() {
        let mut record = record();
        record.image = None;
        record.images = vec!["/images/first.jpg".to_owned()];
        let data = synthesize(&record, &profile(), Collection::Blog, "blog");
        assert_eq!("https://example.com/og?title=The craft", data.image);
    }

    #[test]
    fn test_generated_fallback_image() {
        let mut record = record();
        record.image = None;
        let data = synthesize(&record, &profile(), Collection::Work, "work");
        assert_eq!("https://example.com/og?title=The craft", data.image);
    }

    #[test]
    fn test_author_same_as_tracks_twitter() {
        let mut profile = profile();
        let data = synthesize(&record(), &profile, Collection::Blog, "blog");
        assert_eq!(Some("https://twitter.com/ada".to_owned()), data.author.same_as);

        profile.person.twitter = None;
        let data = synthesize(&record(), &profile, Collection::Blog, "blog");
        assert_eq!(None, data.author.same_as);
        let json = serde_json::to_value(&data).unwrap();
        assert!(json["author"].get("sameAs").is_none());
    }

    #[test]
    fn test_contributors_only_for_work_with_team() {
        let mut record = record();
        record.team = Some(vec![
            TeamMember {
                name: "Grace".to_owned(),
                role: "Design".to_owned(),
                avatar: String::new(),
                linked_in: Some("https://www.linkedin.com/in/grace/".to_owned()),
            },
            TeamMember {
                name: "Edsger".to_owned(),
                role: String::new(),
                avatar: String::new(),
                linked_in: None,
            },
        ]);

        let data = synthesize(&record, &profile(), Collection::Work, "work");
        let contributors = data.contributor.clone().unwrap();
        assert_eq!(2, contributors.len());
        assert_eq!(
            Some("https://www.linkedin.com/in/grace/".to_owned()),
            contributors[0].same_as
        );
        assert_eq!(None, contributors[1].same_as);

        // The blog page never credits a team, even when one is present.
        let data = synthesize(&record, &profile(), Collection::Blog, "blog");
        assert_eq!(None, data.contributor);

        record.team = Some(Vec::new());
        let data = synthesize(&record, &profile(), Collection::Work, "work");
        assert_eq!(None, data.contributor);
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("contributor").is_none());
    }

    #[test]
    fn test_keywords_by_collection() {
        let blog = synthesize(&record(), &profile(), Collection::Blog, "blog").keywords;
        assert_eq!(
            "The craft, On building things well., blog, portfolio, Ada Lovelace, Software Engineer",
            blog
        );
        let work = synthesize(&record(), &profile(), Collection::Work, "work").keywords;
        assert!(work.contains("case study, work"));
    }

    #[test]
    fn test_json_shape() {
        let data = synthesize(&record(), &profile(), Collection::Blog, "blog");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!("https://schema.org", json["@context"]);
        assert_eq!("BlogPosting", json["@type"]);
        assert_eq!("The craft", json["headline"]);
        assert_eq!("2024-03-18", json["datePublished"]);
        assert_eq!("2024-03-18", json["dateModified"]);
        assert_eq!("Person", json["author"]["@type"]);
        assert_eq!("Organization", json["publisher"]["@type"]);
        assert_eq!(
            "https://example.com/favicon.ico",
            json["publisher"]["logo"]["url"]
        );
        assert_eq!("WebPage", json["mainEntityOfPage"]["@type"]);
    }

    #[test]
    fn test_synthesis_is_pure() {
        let record = record();
        let profile = profile();
        assert_eq!(
            synthesize(&record, &profile, Collection::Work, "work").to_json().unwrap(),
            synthesize(&record, &profile, Collection::Work, "work").to_json().unwrap(),
        );
    }

    fn record() -> ContentRecord {
        ContentRecord {
            slug: "craft".to_owned(),
            title: "The craft".to_owned(),
            summary: "On building things well.".to_owned(),
            published_at: "2024-03-18".to_owned(),
            image: Some("/images/craft.jpg".to_owned()),
            images: Vec::new(),
            team: None,
            content: String::new(),
        }
    }

    fn profile() -> SiteProfile {
        SiteProfile {
            base_url: "example.com".to_owned(),
            person: Person {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                role: "Software Engineer".to_owned(),
                avatar: "/images/avatar.jpg".to_owned(),
                location: "Europe/London".to_owned(),
                twitter: Some("@ada".to_owned()),
                github: None,
                linkedin: None,
                email: None,
                headline: None,
            },
        }
    }
}
