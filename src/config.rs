//! Site-wide configuration: the canonical host and the [`Person`] the site is
//! about. A [`SiteProfile`] is constructed once (typically from `site.yaml`)
//! and passed by reference into every synthesis call — there is no ambient
//! global to reach for.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use url::Url;

/// The site owner, as described in the site's content configuration.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    pub role: String,

    #[serde(default)]
    pub avatar: String,

    /// IANA time zone identifier, e.g. `Europe/Vienna`.
    #[serde(default)]
    pub location: String,

    /// Twitter handle, with or without the leading `@`. Social fields are
    /// omitted from all output when this is absent.
    #[serde(default)]
    pub twitter: Option<String>,

    /// GitHub username.
    #[serde(default)]
    pub github: Option<String>,

    /// Full LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// One-line self description, used on the home page's Person node.
    #[serde(default)]
    pub headline: Option<String>,
}

impl Person {
    /// The person's full name. Joins the non-empty name parts so a person
    /// without a last name doesn't pick up a trailing space.
    pub fn name(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        for part in &[&self.first_name, &self.last_name] {
            if !part.is_empty() {
                parts.push(part.as_str());
            }
        }
        parts.join(" ")
    }

    /// The person's Twitter profile URL, when a handle is configured.
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter
            .as_ref()
            .map(|handle| format!("https://twitter.com/{}", handle.trim_start_matches('@')))
    }

    /// The person's GitHub profile URL, when a username is configured.
    pub fn github_url(&self) -> Option<String> {
        self.github
            .as_ref()
            .map(|user| format!("https://github.com/{}", user))
    }
}

/// Process-wide site constants. Immutable for the lifetime of the process.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    /// Canonical host, without scheme or trailing slash: `example.com`, not
    /// `https://example.com/`.
    pub base_url: String,

    pub person: Person,
}

impl SiteProfile {
    /// Loads and validates a profile from a YAML file.
    pub fn from_file(path: &Path) -> Result<SiteProfile> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                return Err(anyhow!(
                    "Opening site profile `{}`: {}",
                    path.display(),
                    e
                ))
            }
        };
        let profile: SiteProfile = serde_yaml::from_reader(file)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that `base_url` is a bare host, suitable for prefixing with
    /// `https://` everywhere URLs are assembled.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow!("`baseUrl` must not be empty"));
        }
        if self.base_url.contains("://") {
            return Err(anyhow!(
                "`baseUrl` must not include a scheme: `{}`",
                self.base_url
            ));
        }
        if self.base_url.ends_with('/') {
            return Err(anyhow!(
                "`baseUrl` must not end with a slash: `{}`",
                self.base_url
            ));
        }
        match Url::parse(&format!("https://{}", self.base_url)) {
            Ok(_) => Ok(()),
            Err(e) => Err(anyhow!(
                "`baseUrl` `{}` is not a valid host: {}",
                self.base_url,
                e
            )),
        }
    }

    /// Makes a site-relative path absolute: `profile.url("/blog/hello")` is
    /// `https://example.com/blog/hello`. An empty path yields the site root.
    pub fn url(&self, path: &str) -> String {
        format!("https://{}{}", self.base_url, path)
    }
}
