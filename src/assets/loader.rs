//! External SVG asset loading.
//!
//! Catalog images are arbitrary uploaded SVG documents, so nothing about them
//! is trusted: the loader never hands raw markup downstream. It parses the
//! path geometry out of the document (a sanitized path list) and derives a
//! tight, render-safe bounding box from it. The derived box exists because
//! authored `viewBox` values cannot be trusted to tightly bound the visible
//! geometry; a loose authored box produces a visually shrunken part when the
//! asset is nested at a fixed slot size.

use kurbo::{BezPath, PathEl};

use crate::foundation::{
    core::BoundingBox,
    error::{Door2dError, Door2dResult},
};

/// Coordinates at or beyond this magnitude are discarded as noise. Guards the
/// derived box against malformed or binary-looking path data.
const MAX_COORD: f64 = 10_000.0;

/// Padding applied around the derived geometry box, in asset units.
const BBOX_PADDING: f64 = 10.0;

/// View box used when a document has neither usable path data nor a
/// `viewBox` attribute.
const DEFAULT_VIEW_BOX: BoundingBox = BoundingBox {
    min_x: 0.0,
    min_y: 0.0,
    max_x: 100.0,
    max_y: 100.0,
};

/// Raw fetch result handed to the loader by an [`AssetFetcher`].
#[derive(Clone, Debug)]
pub struct FetchedDocument {
    /// HTTP status code; only 2xx counts as success.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl FetchedDocument {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the loader and the transport.
///
/// Production uses [`HttpFetcher`]; tests substitute stubs to exercise
/// failure and staleness behavior without a network.
pub trait AssetFetcher {
    /// Fetch the document at `url`. Transport failures are `Err`; HTTP-level
    /// failures come back as a [`FetchedDocument`] with a non-2xx status.
    fn fetch_svg(
        &self,
        url: &str,
    ) -> impl Future<Output = Door2dResult<FetchedDocument>> + Send;
}

/// reqwest-backed [`AssetFetcher`].
///
/// Deliberately built without a request timeout: the engine imposes none, a
/// hung fetch merely delays that slot's resolution and the UI layer may time
/// out upstream.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Build the production fetcher.
    pub fn new() -> Door2dResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Door2dError::asset(format!("build asset http client: {e}")))?;
        Ok(Self { http })
    }
}

impl AssetFetcher for HttpFetcher {
    async fn fetch_svg(&self, url: &str) -> Door2dResult<FetchedDocument> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Door2dError::asset(format!("fetch asset '{url}': {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Door2dError::asset(format!("read asset '{url}' body: {e}")))?;
        Ok(FetchedDocument { status, body })
    }
}

/// Sanitized external asset: parsed path geometry plus its derived view box.
#[derive(Clone, Debug, PartialEq)]
pub struct ExternalAsset {
    /// Path geometry parsed out of the document's `d` attributes.
    pub paths: Vec<BezPath>,
    /// Derived (or fallback) view box bounding the geometry.
    pub view_box: BoundingBox,
}

/// Result of a load attempt. Never an error: anything that goes wrong
/// degrades to [`LoadOutcome::Fallback`], which triggers the procedural
/// renderer for that slot.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// Usable external asset.
    Asset(ExternalAsset),
    /// Render this slot procedurally instead.
    Fallback,
}

/// Fetch `url` and turn the document into a sanitized [`ExternalAsset`].
#[tracing::instrument(skip(fetcher))]
pub async fn load_asset<F: AssetFetcher>(fetcher: &F, url: &str) -> LoadOutcome {
    let doc = match fetcher.fetch_svg(url).await {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(url, error = %e, "asset fetch failed, using fallback");
            return LoadOutcome::Fallback;
        }
    };
    if !doc.is_success() {
        tracing::debug!(url, status = doc.status, "asset fetch non-2xx, using fallback");
        return LoadOutcome::Fallback;
    }

    LoadOutcome::Asset(parse_document(&doc.body))
}

/// Parse SVG markup into sanitized geometry plus a view box.
pub fn parse_document(markup: &str) -> ExternalAsset {
    let paths = extract_paths(markup);
    let view_box = extract_bounding_box(&paths)
        .or_else(|| attr_value(markup, "viewBox").and_then(BoundingBox::parse_view_box))
        .unwrap_or(DEFAULT_VIEW_BOX);
    ExternalAsset { paths, view_box }
}

/// Parse every `d="…"` attribute in the markup; unparseable ones are skipped.
fn extract_paths(markup: &str) -> Vec<BezPath> {
    attr_values(markup, "d")
        .into_iter()
        .filter_map(|d| BezPath::from_svg(d).ok())
        .filter(|p| !p.elements().is_empty())
        .collect()
}

/// Tight padded box over all plausible path coordinates.
///
/// Returns `None` when no coordinate survives the noise guard, in which case
/// the caller falls back to the document's own `viewBox`.
pub fn extract_bounding_box(paths: &[BezPath]) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    let mut consider = |p: kurbo::Point| {
        if !p.x.is_finite() || !p.y.is_finite() || p.x.abs() >= MAX_COORD || p.y.abs() >= MAX_COORD
        {
            return;
        }
        bbox = Some(match bbox {
            Some(b) => b.union_point(p),
            None => BoundingBox::at_point(p),
        });
    };

    for path in paths {
        for el in path.elements() {
            match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => consider(*p),
                PathEl::QuadTo(p1, p2) => {
                    consider(*p1);
                    consider(*p2);
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    consider(*p1);
                    consider(*p2);
                    consider(*p3);
                }
                PathEl::ClosePath => {}
            }
        }
    }
    bbox.map(|b| b.pad(BBOX_PADDING))
}

/// First occurrence of attribute `name` in the markup, if any.
fn attr_value<'a>(markup: &'a str, name: &str) -> Option<&'a str> {
    attr_values(markup, name).into_iter().next()
}

/// All values of attribute `name`, in document order.
///
/// A deliberately small scanner, not an XML parser: an attribute is the name
/// preceded by a non-name character, then `=`, then a single- or
/// double-quoted value. Good enough for the `d` and `viewBox` attributes of
/// real-world SVG exports; anything it misses degrades to a fallback box.
fn attr_values<'a>(markup: &'a str, name: &str) -> Vec<&'a str> {
    let mut values = Vec::new();
    let bytes = markup.as_bytes();
    let mut at = 0;

    while let Some(rel) = markup[at..].find(name) {
        let start = at + rel;
        let after = start + name.len();
        at = after;

        if start > 0 {
            let prev = bytes[start - 1];
            if prev.is_ascii_alphanumeric() || prev == b'-' || prev == b'_' || prev == b':' {
                continue;
            }
        }

        let rest = markup[after..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') else {
            continue;
        };
        let value = &rest[1..];
        let Some(end) = value.find(quote) else {
            continue;
        };
        values.push(&value[..end]);
    }

    values
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
