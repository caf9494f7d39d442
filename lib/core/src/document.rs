use serde::{Deserialize, Serialize};

/// The per-movie attributes consumed by the recommendation engine.
///
/// This is a projection of a full catalog row: only the fields that feed the
/// composed document. Every field except the title is optional; a missing
/// field contributes no tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Title in its native casing. Lookups normalize to lower case.
    pub title: String,
    pub revenue: Option<f64>,
    pub budget: Option<f64>,
    pub return_ratio: Option<f64>,
    /// Genre names, possibly a delimited list serialized as text.
    pub genres: Option<String>,
    pub original_language: Option<String>,
    /// Production country names, possibly a delimited list serialized as text.
    pub production_countries: Option<String>,
    pub vote_average: Option<f64>,
}

impl CatalogEntry {
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Compose the text document for one catalog entry.
///
/// Fields are concatenated whitespace-separated in a fixed order: revenue,
/// budget, return ratio, title, genres, original language, production
/// countries, average vote. Textual fields are lower-cased so case variants
/// do not fragment the vocabulary; numbers use their natural decimal form.
/// Missing fields serialize to nothing, so composing never fails.
#[must_use]
pub fn compose(entry: &CatalogEntry) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(8);

    push_number(&mut parts, entry.revenue);
    push_number(&mut parts, entry.budget);
    push_number(&mut parts, entry.return_ratio);
    push_text(&mut parts, Some(&entry.title));
    push_text(&mut parts, entry.genres.as_deref());
    push_text(&mut parts, entry.original_language.as_deref());
    push_text(&mut parts, entry.production_countries.as_deref());
    push_number(&mut parts, entry.vote_average);

    parts.join(" ")
}

fn push_number(parts: &mut Vec<String>, value: Option<f64>) {
    if let Some(v) = value {
        parts.push(v.to_string());
    }
}

fn push_text(parts: &mut Vec<String>, value: Option<&str>) {
    if let Some(v) = value {
        let v = v.trim();
        if !v.is_empty() {
            parts.push(v.to_lowercase());
        }
    }
}
