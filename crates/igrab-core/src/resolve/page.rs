//! Meta tag extraction from post page HTML.

use scraper::{Html, Selector};

use crate::error::ResolveError;
use crate::media::{self, MediaDescriptor};

/// Extracts the media descriptor from a post page.
///
/// The `meta[name=medium]` tag decides the content category; its value is
/// dispatched through [`media::MEDIUM_TABLE`] to the og: tag carrying the
/// direct URL. A missing primary or secondary tag is an error; a medium
/// outside the table is [`MediaDescriptor::NotFound`].
pub(super) fn extract_media(html: &str) -> Result<MediaDescriptor, ResolveError> {
    let document = Html::parse_document(html);

    let medium =
        meta_content(&document, "meta[name=medium]").ok_or(ResolveError::MissingMediumTag)?;

    let Some(rule) = media::rule_for(&medium) else {
        tracing::debug!("unsupported medium {:?}", medium);
        return Ok(MediaDescriptor::NotFound);
    };

    let selector = format!("meta[property=\"{}\"]", rule.property);
    let url = meta_content(&document, &selector).ok_or(ResolveError::MissingMediaUrl {
        property: rule.property,
    })?;

    Ok(rule.kind.descriptor(url))
}

/// Content attribute of the first element matching `selector`, if any.
fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).expect("meta selector");
    document
        .select(&selector)
        .next()?
        .value()
        .attr("content")
        .map(str::to_string)
}
