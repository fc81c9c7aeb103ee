//! Static style and feeling reference tables.
//!
//! The tables ship as versioned JSON data files compiled into the binary.
//! They are parsed and validated once, on first access through
//! [`catalog`], and are read-only for the rest of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Bundled style table.
const STYLES_JSON: &str = include_str!("../data/styles.json");

/// Bundled feeling table.
const FEELINGS_JSON: &str = include_str!("../data/feelings.json");

/// Styles usable without purchased credits. Every id must exist in the
/// style table.
pub const FREE_STYLE_IDS: &[&str] = &["alpinecoastal", "impressionist", "popart", "minimalist"];

/// Dominant hue cap used when a style does not set `iconic.maxHues`.
pub const DEFAULT_MAX_HUES: u32 = 4;

/// Minimum feature size used when a style does not set `iconic.minDetailPx`.
pub const DEFAULT_MIN_DETAIL_PX: u32 = 12;

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Per-style tuning for the iconic poster rendering. Both fields are
/// optional in the data; use the accessor methods to get resolved values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconicTuning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hues: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_detail_px: Option<u32>,
}

impl IconicTuning {
    /// Dominant hue cap, falling back to [`DEFAULT_MAX_HUES`].
    pub fn max_hues(&self) -> u32 {
        self.max_hues.unwrap_or(DEFAULT_MAX_HUES)
    }

    /// Minimum feature size in pixels, falling back to [`DEFAULT_MIN_DETAIL_PX`].
    pub fn min_detail_px(&self) -> u32 {
        self.min_detail_px.unwrap_or(DEFAULT_MIN_DETAIL_PX)
    }
}

/// A visual art style that can be applied to an uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// Stable lookup key, also used as a URL query parameter.
    pub id: String,
    pub name: String,
    /// Visual characteristics, injected verbatim into prompts.
    pub traits: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_finish: Option<String>,
    #[serde(default)]
    pub iconic: IconicTuning,
}

/// A mood that can be combined with a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeelingDescriptor {
    pub id: String,
    pub name: String,
    pub traits: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Validated, indexed style and feeling tables.
#[derive(Debug)]
pub struct Catalog {
    styles: Vec<StyleDescriptor>,
    feelings: Vec<FeelingDescriptor>,
    style_index: HashMap<String, usize>,
    feeling_index: HashMap<String, usize>,
    free_style_ids: Vec<String>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(STYLES_JSON, FEELINGS_JSON, FREE_STYLE_IDS)
        .expect("bundled style/feeling catalog is valid")
});

/// The process-wide catalog, built from the bundled data on first use.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    /// Parse both tables from JSON and validate them.
    pub fn from_json(
        styles_json: &str,
        feelings_json: &str,
        free_style_ids: &[&str],
    ) -> Result<Self, CoreError> {
        let styles: Vec<StyleDescriptor> = serde_json::from_str(styles_json)
            .map_err(|e| CoreError::Validation(format!("Malformed style table: {e}")))?;
        let feelings: Vec<FeelingDescriptor> = serde_json::from_str(feelings_json)
            .map_err(|e| CoreError::Validation(format!("Malformed feeling table: {e}")))?;
        Self::new(styles, feelings, free_style_ids)
    }

    /// Build a catalog from already-parsed descriptors.
    ///
    /// Fails if an id is empty, if either table contains a duplicate id,
    /// or if a free style id does not resolve.
    pub fn new(
        styles: Vec<StyleDescriptor>,
        feelings: Vec<FeelingDescriptor>,
        free_style_ids: &[&str],
    ) -> Result<Self, CoreError> {
        let style_index = build_index("style", styles.iter().map(|s| s.id.as_str()))?;
        let feeling_index = build_index("feeling", feelings.iter().map(|f| f.id.as_str()))?;

        for id in free_style_ids {
            if !style_index.contains_key(*id) {
                return Err(CoreError::Validation(format!(
                    "Free style id '{id}' is not in the style table"
                )));
            }
        }

        Ok(Self {
            styles,
            feelings,
            style_index,
            feeling_index,
            free_style_ids: free_style_ids.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Look up a style by id.
    pub fn style(&self, id: &str) -> Option<&StyleDescriptor> {
        self.style_index.get(id).map(|&i| &self.styles[i])
    }

    /// Look up a feeling by id.
    pub fn feeling(&self, id: &str) -> Option<&FeelingDescriptor> {
        self.feeling_index.get(id).map(|&i| &self.feelings[i])
    }

    /// Whether `id` belongs to the free-access subset.
    pub fn is_free_style(&self, id: &str) -> bool {
        self.free_style_ids.iter().any(|free| free == id)
    }

    /// All styles, in table order.
    pub fn styles(&self) -> &[StyleDescriptor] {
        &self.styles
    }

    /// All feelings, in table order.
    pub fn feelings(&self) -> &[FeelingDescriptor] {
        &self.feelings
    }

    /// Split `ids` into the feelings that resolve and the ids that do not.
    ///
    /// Order is preserved in both halves. Duplicates are kept as given.
    pub fn resolve_feelings<'a, S: AsRef<str>>(
        &'a self,
        ids: &[S],
    ) -> (Vec<&'a FeelingDescriptor>, Vec<String>) {
        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();
        for id in ids {
            match self.feeling(id.as_ref()) {
                Some(feeling) => resolved.push(feeling),
                None => unresolved.push(id.as_ref().to_string()),
            }
        }
        (resolved, unresolved)
    }
}

/// Map each id to its position, rejecting empty and duplicate ids.
fn build_index<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, CoreError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Empty id at position {position} in {table} table"
            )));
        }
        if index.insert(id.to_string(), position).is_some() {
            return Err(CoreError::Validation(format!(
                "Duplicate {table} id '{id}'"
            )));
        }
    }
    Ok(index)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn style(id: &str) -> StyleDescriptor {
        StyleDescriptor {
            id: id.to_string(),
            name: format!("Style {id}"),
            traits: "flat shapes".to_string(),
            palette: None,
            edge_rule: None,
            print_finish: None,
            iconic: IconicTuning::default(),
        }
    }

    fn feeling(id: &str) -> FeelingDescriptor {
        FeelingDescriptor {
            id: id.to_string(),
            name: format!("Feeling {id}"),
            traits: "soft light".to_string(),
        }
    }

    // -- bundled data --

    #[test]
    fn bundled_catalog_loads() {
        let catalog = catalog();
        assert!(!catalog.styles().is_empty());
        assert!(!catalog.feelings().is_empty());
    }

    #[test]
    fn every_free_style_resolves() {
        let catalog = catalog();
        for id in FREE_STYLE_IDS {
            assert!(catalog.style(id).is_some(), "free style '{id}' missing");
            assert!(catalog.is_free_style(id));
        }
        for id in ["alpinecoastal", "impressionist", "popart"] {
            assert!(catalog.style(id).is_some());
        }
    }

    #[test]
    fn bundled_ids_are_unique() {
        let catalog = catalog();
        let mut style_ids: Vec<_> = catalog.styles().iter().map(|s| &s.id).collect();
        style_ids.sort();
        style_ids.dedup();
        assert_eq!(style_ids.len(), catalog.styles().len());

        let mut feeling_ids: Vec<_> = catalog.feelings().iter().map(|f| &f.id).collect();
        feeling_ids.sort();
        feeling_ids.dedup();
        assert_eq!(feeling_ids.len(), catalog.feelings().len());
    }

    #[test]
    fn popart_has_expected_fields() {
        let popart = catalog().style("popart").unwrap();
        assert_eq!(popart.name, "Pop Art");
        assert_eq!(
            popart.traits,
            "vivid colors, thick black outlines, comic-style shading, and graphic simplicity"
        );
    }

    #[test]
    fn paid_style_is_not_free() {
        assert!(catalog().style("bauhaus").is_some());
        assert!(!catalog().is_free_style("bauhaus"));
        assert!(!catalog().is_free_style("not-a-real-style"));
    }

    // -- validation --

    #[test]
    fn duplicate_style_id_rejected() {
        let err = Catalog::new(vec![style("a"), style("a")], vec![], &[]).unwrap_err();
        assert!(err.to_string().contains("Duplicate style id 'a'"));
    }

    #[test]
    fn duplicate_feeling_id_rejected() {
        let err = Catalog::new(vec![], vec![feeling("calm"), feeling("calm")], &[]).unwrap_err();
        assert!(err.to_string().contains("Duplicate feeling id 'calm'"));
    }

    #[test]
    fn empty_id_rejected() {
        let err = Catalog::new(vec![style("  ")], vec![], &[]).unwrap_err();
        assert!(err.to_string().contains("Empty id"));
    }

    #[test]
    fn unknown_free_id_rejected() {
        let err = Catalog::new(vec![style("a")], vec![], &["b"]).unwrap_err();
        assert!(err.to_string().contains("Free style id 'b'"));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Catalog::from_json("{", "[]", &[]).unwrap_err();
        assert!(err.to_string().contains("Malformed style table"));
    }

    #[test]
    fn camel_case_fields_deserialize() {
        let json = r#"[{"id":"x","name":"X","traits":"t","edgeRule":"sharp","printFinish":"matte","iconic":{"maxHues":2}}]"#;
        let catalog = Catalog::from_json(json, "[]", &["x"]).unwrap();
        let x = catalog.style("x").unwrap();
        assert_eq!(x.edge_rule.as_deref(), Some("sharp"));
        assert_eq!(x.print_finish.as_deref(), Some("matte"));
        assert_eq!(x.iconic.max_hues(), 2);
        assert_eq!(x.iconic.min_detail_px(), DEFAULT_MIN_DETAIL_PX);
    }

    // -- iconic defaults --

    #[test]
    fn iconic_defaults_apply_when_absent() {
        let tuning = IconicTuning::default();
        assert_eq!(tuning.max_hues(), 4);
        assert_eq!(tuning.min_detail_px(), 12);
    }

    // -- resolve_feelings --

    #[test]
    fn resolve_feelings_splits_known_and_unknown() {
        let catalog = Catalog::new(vec![], vec![feeling("calm"), feeling("bold")], &[]).unwrap();
        let (resolved, unresolved) = catalog.resolve_feelings(&["bold", "nope", "calm"][..]);
        let ids: Vec<_> = resolved.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["bold", "calm"]);
        assert_eq!(unresolved, vec!["nope".to_string()]);
    }
}
