//! Poster prompt composition.
//!
//! Renders the structured instruction text handed to the remote
//! image-generation service for a given style selection. The output is a
//! pure function of the request and the static [`Catalog`]: the same input
//! always yields byte-identical text.
//!
//! Selected feelings are accepted on the request but do not change the
//! prompt body. An empty feeling list and a list of unknown feeling ids
//! compose to the same text.

use serde::Deserialize;

use crate::catalog::{catalog, Catalog, StyleDescriptor};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Fallbacks for optional style fields
// ---------------------------------------------------------------------------

/// Palette instruction used when a style does not define one.
pub const DEFAULT_PALETTE: &str =
    "derive a restrained palette directly from the style's signature traits";

/// Edge instruction used when a style does not define one.
pub const DEFAULT_EDGE_RULE: &str =
    "render edges the way the style traditionally does, with deliberate and consistent contours";

/// Finish instruction used when a style does not define one.
pub const DEFAULT_PRINT_FINISH: &str = "even matte print finish with no digital sheen";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Input to the composer: one style and zero or more feelings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptRequest {
    pub style_id: String,
    #[serde(default)]
    pub feeling_ids: Vec<String>,
}

impl PromptRequest {
    pub fn new(style_id: impl Into<String>) -> Self {
        Self {
            style_id: style_id.into(),
            feeling_ids: Vec::new(),
        }
    }

    pub fn with_feelings<I, S>(mut self, feeling_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feeling_ids = feeling_ids.into_iter().map(Into::into).collect();
        self
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose against the process-wide catalog.
pub fn compose<S: AsRef<str>>(style_id: &str, feeling_ids: &[S]) -> Result<String, CoreError> {
    let request = PromptRequest::new(style_id)
        .with_feelings(feeling_ids.iter().map(|id| id.as_ref().to_string()));
    compose_prompt(catalog(), &request)
}

/// Compose the poster prompt for `request` using `catalog`.
///
/// Fails with [`CoreError::StyleNotFound`] when the style id does not
/// resolve. Unknown feeling ids are ignored.
pub fn compose_prompt(catalog: &Catalog, request: &PromptRequest) -> Result<String, CoreError> {
    let style = catalog
        .style(&request.style_id)
        .ok_or_else(|| CoreError::StyleNotFound(request.style_id.clone()))?;
    Ok(render(style))
}

/// Render the fixed section layout for a resolved style.
fn render(style: &StyleDescriptor) -> String {
    let name = &style.name;
    let palette = style.palette.as_deref().unwrap_or(DEFAULT_PALETTE);
    let edge_rule = style.edge_rule.as_deref().unwrap_or(DEFAULT_EDGE_RULE);
    let print_finish = style.print_finish.as_deref().unwrap_or(DEFAULT_PRINT_FINISH);
    let max_hues = style.iconic.max_hues();
    let min_detail_px = style.iconic.min_detail_px();

    format!(
        "\
STYLE TRANSFER — ICONIC POSTER
Transform the provided photo into a {name} poster. Keep the subject instantly recognizable while fully adopting the {name} visual language.

SURFACE LANGUAGE
Render every surface with these {name} characteristics: {traits}.

COLOR DISCIPLINE
- Palette: {palette}.
- Use at most {max_hues} dominant hues; neutrals and paper white do not count toward this limit.
- Keep color areas flat and intentional; avoid muddy blends between hues.

EDGE & TEXTURE LANGUAGE
- Edges: {edge_rule}.
- Finish: {print_finish}.
- Apply texture consistently across the whole image, never as a pasted overlay.

ICONIC COMPOSITION LOCKS
- Preserve the subject's silhouette, pose, and spatial layout from the source photo.
- Simplify secondary detail; no meaningful feature smaller than {min_detail_px}px at output resolution.
- One clear focal point; the background supports the subject and never competes with it.

PAPER-WHITE & BACKGROUND
- Treat paper white as a deliberate color, not empty space.
- Simplify or replace cluttered backgrounds with shapes native to {name}.
- Keep a clean margin so the poster reads well when framed.

STRICT NEGATIVE
- No text, lettering, logos, signatures, or watermarks.
- No photographic residue: no lens blur, sensor noise, or realistic skin texture.
- No extra limbs, duplicated subjects, or distorted anatomy.
- No borders, frames, mockups, or rooms around the artwork.

QUALITY SAFEGUARDS
- Faces and hands must remain anatomically correct and recognizable.
- Maintain consistent lighting direction across the subject and background.
- Every element must belong to the {name} style; no mixed rendering styles.

OUTPUT SPECS
- Portrait orientation, 2:3 aspect ratio.
- Print-ready detail suitable for 300 DPI reproduction.
- A single finished poster image.",
        traits = style.traits,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
