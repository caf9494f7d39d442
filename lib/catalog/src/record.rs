use cinerec_core::CatalogEntry;
use serde::{Deserialize, Serialize};

/// One row of the pre-joined movies dataset.
///
/// Every field is optional at ingestion; the source CSV carries empty cells
/// and the loaders never abort on them. Column names match the dataset's
/// upper-case headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    #[serde(rename = "TITLE")]
    pub title: Option<String>,
    /// ISO date string; parsed once by the store, unparseable dates are
    /// treated as missing.
    #[serde(rename = "RELEASE_DATE")]
    pub release_date: Option<String>,
    #[serde(rename = "POPULARITY")]
    pub popularity: Option<f64>,
    #[serde(rename = "VOTE_COUNT")]
    pub vote_count: Option<f64>,
    #[serde(rename = "VOTE_AVERAGE")]
    pub vote_average: Option<f64>,
    #[serde(rename = "BUDGET")]
    pub budget: Option<f64>,
    #[serde(rename = "REVENUE")]
    pub revenue: Option<f64>,
    #[serde(rename = "RETURN")]
    pub return_ratio: Option<f64>,
    #[serde(rename = "GENRES")]
    pub genres: Option<String>,
    #[serde(rename = "ORIGINAL_LANGUAGE")]
    pub original_language: Option<String>,
    #[serde(rename = "PRODUCTION_COUNTRIES")]
    pub production_countries: Option<String>,
}

impl MovieRecord {
    /// Project the row onto the attributes the recommendation engine
    /// consumes. Rows without a title have no projection: they cannot be
    /// resolved as a query and carry no lookup key.
    #[must_use]
    pub fn to_entry(&self) -> Option<CatalogEntry> {
        let title = self.title.as_deref()?.trim();
        if title.is_empty() {
            return None;
        }
        Some(CatalogEntry {
            title: title.to_string(),
            revenue: self.revenue,
            budget: self.budget,
            return_ratio: self.return_ratio,
            genres: self.genres.clone(),
            original_language: self.original_language.clone(),
            production_countries: self.production_countries.clone(),
            vote_average: self.vote_average,
        })
    }
}

/// One cast credit: a person appearing in a movie
#[derive(Debug, Clone, Deserialize)]
pub struct CastEntry {
    pub id: i64,
    pub name: String,
}

/// One crew credit: a person working on a movie in a given job
#[derive(Debug, Clone, Deserialize)]
pub struct CrewEntry {
    pub id: i64,
    pub name: String,
    pub job: Option<String>,
}
