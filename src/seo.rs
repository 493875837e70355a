//! SEO metadata synthesis for content pages.
//!
//! [`synthesize`] turns a [`ContentRecord`] plus the [`SiteProfile`] into the
//! [`SeoMetadata`] that fills a page's head: normalized title and
//! description, a keyword list, the canonical URL, and the Open Graph and
//! Twitter card payloads. The whole module is pure string and struct
//! assembly; identical inputs always produce identical output.

use crate::config::SiteProfile;
use crate::content::{Collection, ContentRecord, TeamMember};
use serde::Serialize;

/// Titles longer than this are truncated (search engines cut them off
/// around here anyway).
pub const TITLE_MAX: usize = 60;

/// Descriptions longer than this are truncated.
pub const DESCRIPTION_MAX: usize = 320;

/// Descriptions shorter than this get a fixed per-collection suffix
/// appended, once, with no re-check of the resulting length.
pub const DESCRIPTION_MIN: usize = 120;

const ELLIPSIS: &str = "...";

/// Open Graph image used when a record has no cover image of its own.
const FALLBACK_OG_IMAGE: &str = "/@og_img.jpg";

/// Everything a page's head needs: plain meta fields plus the social
/// payloads. Computed fresh per call; holds no state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword list. Ordered, not de-duplicated.
    pub keywords: String,
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// The Open Graph payload for an article page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub published_time: String,
    pub url: String,
    pub site_name: String,
    pub locale: &'static str,
    pub images: Vec<OgImage>,
    pub authors: Vec<String>,
    /// Team member names, present only when the record credits a team.
    #[serde(rename = "og:authors", skip_serializing_if = "Option::is_none")]
    pub team_authors: Option<Vec<String>>,
}

impl OpenGraph {
    /// Adds the `og:authors` field from a record's team. A no-op when the
    /// record has no team.
    pub fn with_team(mut self, team: Option<&[TeamMember]>) -> OpenGraph {
        if let Some(members) = team {
            self.team_authors = Some(members.iter().map(|m| m.name.clone()).collect());
        }
        self
    }
}

/// A single Open Graph image entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl OgImage {
    /// The standard 1200×630 social preview size.
    pub fn social_preview(url: String, alt: String) -> OgImage {
        OgImage {
            url,
            width: 1200,
            height: 630,
            alt,
        }
    }
}

/// The Twitter card payload. `site` and `creator` both carry the person's
/// handle and are omitted entirely when no handle is configured.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

/// Synthesizes the full head metadata for one record. `path_prefix` is the
/// URL segment the page is served under (`blog` or `work`); `kind` picks the
/// fallback wording and tag set.
pub fn synthesize(
    record: &ContentRecord,
    profile: &SiteProfile,
    kind: Collection,
    path_prefix: &str,
) -> SeoMetadata {
    let person = &profile.person;
    let title = normalize_title(&record.title);
    let description = normalize_description(&record.summary, kind, &person.first_name);
    let canonical = profile.url(&format!("/{}/{}", path_prefix, record.slug));
    let og_image = match &record.image {
        Some(path) => profile.url(path),
        None => profile.url(FALLBACK_OG_IMAGE),
    };

    let keywords = join_keywords(
        vec![
            title.clone(),
            description.clone(),
            person.name(),
            person.role.clone(),
        ]
        .into_iter()
        .chain(domain_tags(kind, &person.first_name)),
    );

    let alt = match kind {
        Collection::Blog => format!("{} | {}", record.title, person.name()),
        Collection::Work => format!("{} | Project by {}", record.title, person.name()),
    };
    let open_graph = OpenGraph {
        title: title.clone(),
        description: description.clone(),
        kind: "article",
        published_time: record.published_at.clone(),
        url: canonical.clone(),
        site_name: format!("{}'s Portfolio", person.first_name),
        locale: "en_US",
        images: vec![OgImage::social_preview(og_image.clone(), alt)],
        authors: vec![person.name()],
        team_authors: None,
    }
    .with_team(record.team.as_deref());

    let twitter = TwitterCard {
        card: "summary_large_image",
        site: person.twitter.clone(),
        title: title.clone(),
        description: description.clone(),
        images: vec![og_image],
        creator: person.twitter.clone(),
    };

    SeoMetadata {
        title,
        description,
        keywords,
        canonical,
        open_graph,
        twitter,
    }
}

/// Truncates titles longer than [`TITLE_MAX`] characters to exactly
/// [`TITLE_MAX`], ellipsis included. The cut is a strict character-count
/// cut with no word-boundary awareness.
pub fn normalize_title(title: &str) -> String {
    truncate(title, TITLE_MAX)
}

/// Normalizes a description into the 120–320 character window search
/// engines favor: too long is truncated, too short gets a fixed
/// per-collection suffix appended once. Descriptions already in the window
/// pass through unchanged.
pub fn normalize_description(summary: &str, kind: Collection, first_name: &str) -> String {
    let length = summary.chars().count();
    if length > DESCRIPTION_MAX {
        truncate(summary, DESCRIPTION_MAX)
    } else if length < DESCRIPTION_MIN {
        match kind {
            Collection::Blog => format!(
                "{} Read more about {}'s insights on this topic.",
                summary, first_name
            ),
            Collection::Work => format!("{} View this project by {}.", summary, first_name),
        }
    } else {
        summary.to_owned()
    }
}

/// Drops empty entries and joins the rest with `", "`, so an unset field
/// never produces an empty keyword segment.
pub fn join_keywords<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn domain_tags(kind: Collection, first_name: &str) -> Vec<String> {
    match kind {
        Collection::Blog => vec![
            "portfolio".to_owned(),
            "blog".to_owned(),
            "web development".to_owned(),
            format!("{}'s blog", first_name),
            "technology".to_owned(),
            "design".to_owned(),
        ],
        Collection::Work => vec![
            "portfolio".to_owned(),
            "project".to_owned(),
            "case study".to_owned(),
            format!("{}'s work", first_name),
            "design".to_owned(),
            "development".to_owned(),
        ],
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max - ELLIPSIS.chars().count()).collect();
        format!("{}{}", cut, ELLIPSIS)
    } else {
        text.to_owned()
    }
}
