//! The thin layer page code calls into: resolve a slug against a
//! collection, check the record, and synthesize both metadata outputs. The
//! not-found path is decided here, before any synthesis happens.

use crate::config::SiteProfile;
use crate::content::{self, Collection, ContentRecord, Error};
use crate::jsonld::{self, StructuredData};
use crate::seo::{self, SeoMetadata};
use tracing::debug;

/// Both outputs for one content page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub seo: SeoMetadata,
    pub structured_data: StructuredData,
}

/// Resolves `slug` within `records` and synthesizes the page's metadata.
/// Returns [`Error::NotFound`] when no record matches and
/// [`Error::Malformed`] when the matching record is missing a required
/// field; in either case no synthesis takes place.
pub fn resolve(
    records: &[ContentRecord],
    slug: &str,
    kind: Collection,
    profile: &SiteProfile,
) -> Result<PageMetadata, Error> {
    let record = content::find_by_slug(records, slug).ok_or_else(|| Error::NotFound {
        collection: kind,
        slug: slug.to_owned(),
    })?;
    record.validate()?;
    debug!(collection = %kind, slug, "resolved content record");

    let prefix = kind.path_prefix();
    Ok(PageMetadata {
        seo: seo::synthesize(record, profile, kind, prefix),
        structured_data: jsonld::synthesize(record, profile, kind, prefix),
    })
}

/// Enumerates every slug in a collection, in record order. Page code uses
/// this to generate the static page list.
pub fn all_slugs(records: &[ContentRecord]) -> Vec<&str> {
    records.iter().map(|record| record.slug.as_str()).collect()
}
