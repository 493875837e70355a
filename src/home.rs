//! Metadata for the home page. Unlike content pages there is no record to
//! synthesize from; everything derives from the [`SiteProfile`] alone. The
//! structured data here is a JSON-LD `@graph` whose WebSite, Person, and
//! ProfilePage nodes cross-reference each other through `@id` anchors.

use crate::config::SiteProfile;
use crate::jsonld::SCHEMA_CONTEXT;
use crate::seo::{OgImage, TwitterCard};
use serde::Serialize;

/// Head metadata for the home page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: HomeOpenGraph,
    pub twitter: TwitterCard,
}

/// Open Graph payload for the home page: a `website`, not an `article`, so
/// it carries none of the article-only fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeOpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub url: String,
    pub images: Vec<OgImage>,
}

/// The home page's JSON-LD document: `@context` plus a `@graph` of nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeGraph {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@graph")]
    pub graph: Vec<GraphNode>,
}

impl HomeGraph {
    /// Serializes to the JSON blob embedded verbatim in the page.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One node of the home-page graph. Serialized untagged; each variant
/// carries its own `@type` literal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GraphNode {
    WebSite(WebSiteNode),
    Person(PersonNode),
    ProfilePage(ProfilePageNode),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    pub description: String,
    pub potential_action: SearchAction,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub url: String,
    /// Social profile links, in twitter/github/linkedin order, absent
    /// entries dropped.
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePageNode {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    pub description: String,
    pub about: IdRef,
    pub main_entity: IdRef,
    pub is_part_of: IdRef,
}

/// A bare `{"@id": ...}` reference to another node in the graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IdRef {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Synthesizes the home page's head metadata from the profile alone.
pub fn synthesize(profile: &SiteProfile) -> HomeMetadata {
    let person = &profile.person;
    let title = format!("{}'s Portfolio | {}", person.first_name, person.role);
    let description = format!(
        "Explore {}'s professional portfolio showcasing innovative projects, \
         case studies, and insights about {}. Discover creative solutions, \
         technical expertise, and professional achievements.",
        person.first_name,
        person.role.to_lowercase()
    );
    let og_image = profile.url("/@og_img.jpg");

    HomeMetadata {
        open_graph: HomeOpenGraph {
            title: title.clone(),
            description: description.clone(),
            kind: "website",
            url: profile.url(""),
            images: vec![OgImage::social_preview(og_image.clone(), title.clone())],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            site: person.twitter.clone(),
            title: title.clone(),
            description: description.clone(),
            images: vec![og_image],
            creator: person.twitter.clone(),
        },
        title,
        description,
    }
}

/// Synthesizes the home page's `@graph`. `site_description` is the
/// marketing copy the site shows under its masthead (it doubles as the
/// WebSite node's description).
pub fn structured_data(profile: &SiteProfile, site_description: &str) -> HomeGraph {
    let person = &profile.person;
    let root = profile.url("");
    let website_id = profile.url("/#website");
    let person_id = profile.url("/#person");

    let same_as = vec![
        person.twitter_url(),
        person.github_url(),
        person.linkedin.clone(),
    ]
    .into_iter()
    .flatten()
    .collect();

    HomeGraph {
        context: SCHEMA_CONTEXT,
        graph: vec![
            GraphNode::WebSite(WebSiteNode {
                kind: "WebSite",
                id: website_id.clone(),
                url: root.clone(),
                name: format!("{}'s Portfolio", person.first_name),
                description: site_description.to_owned(),
                potential_action: SearchAction {
                    kind: "SearchAction",
                    target: profile.url("/search?q={search_term_string}"),
                    query_input: "required name=search_term_string",
                },
            }),
            GraphNode::Person(PersonNode {
                kind: "Person",
                id: person_id.clone(),
                name: person.name(),
                job_title: person.role.clone(),
                description: person.headline.clone(),
                email: person.email.clone(),
                url: root.clone(),
                same_as,
            }),
            GraphNode::ProfilePage(ProfilePageNode {
                kind: "ProfilePage",
                id: profile.url("/#profilepage"),
                url: root,
                name: format!("{}'s Portfolio - {}", person.first_name, person.role),
                description: site_description.to_owned(),
                about: IdRef {
                    id: person_id.clone(),
                },
                main_entity: IdRef { id: person_id },
                is_part_of: IdRef { id: website_id },
            }),
        ],
    }
}
