use crate::loader;
use crate::record::{CastEntry, CrewEntry, MovieRecord};
use ahash::AHashSet;
use chrono::{Datelike, NaiveDate, Weekday};
use cinerec_core::{CatalogEntry, Error, Result};
use serde::Serialize;
use std::path::Path;

/// Score lookup result for a title
#[derive(Debug, Clone, Serialize)]
pub struct TitleScore {
    pub title: String,
    pub release_year: Option<i32>,
    pub popularity: Option<f64>,
}

/// Vote lookup result for a title.
///
/// A match below the 2000-vote gate is still a match; `meets_threshold`
/// distinguishes it from not-found.
#[derive(Debug, Clone, Serialize)]
pub struct TitleVotes {
    pub title: String,
    pub release_year: Option<i32>,
    pub vote_count: u64,
    pub vote_average: Option<f64>,
    pub meets_threshold: bool,
}

/// Aggregate statistics over an actor's films
#[derive(Debug, Clone, Serialize)]
pub struct ActorStats {
    pub name: String,
    pub film_count: usize,
    pub total_return: f64,
    pub mean_return: f64,
}

/// One film directed by a queried director
#[derive(Debug, Clone, Serialize)]
pub struct DirectorFilm {
    #[serde(rename = "TITLE")]
    pub title: Option<String>,
    #[serde(rename = "RELEASE_DATE")]
    pub release_date: Option<String>,
    #[serde(rename = "POPULARITY")]
    pub popularity: Option<f64>,
    #[serde(rename = "BUDGET")]
    pub budget: Option<f64>,
    #[serde(rename = "RETURN")]
    pub return_ratio: Option<f64>,
}

/// Films lookup result for a director
#[derive(Debug, Clone, Serialize)]
pub struct DirectorFilms {
    pub name: String,
    pub films: Vec<DirectorFilm>,
}

/// In-memory catalog: the three loaded tables plus release dates parsed once.
///
/// Built at startup and immutable afterwards; every operation is a read-only
/// filter over the tables, so the store is shared between requests without
/// locking.
pub struct CatalogStore {
    movies: Vec<MovieRecord>,
    cast: Vec<CastEntry>,
    crew: Vec<CrewEntry>,
    // parallel to `movies`; unparseable dates are treated as missing
    release_dates: Vec<Option<NaiveDate>>,
}

impl CatalogStore {
    pub fn new(movies: Vec<MovieRecord>, cast: Vec<CastEntry>, crew: Vec<CrewEntry>) -> Self {
        let release_dates = movies
            .iter()
            .map(|m| {
                m.release_date
                    .as_deref()
                    .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
            })
            .collect();

        Self {
            movies,
            cast,
            crew,
            release_dates,
        }
    }

    /// Load the three tables from CSV files
    pub fn load<P: AsRef<Path>>(movies_path: P, cast_path: P, crew_path: P) -> Result<Self> {
        let movies = loader::load_movies(movies_path)?;
        let cast = loader::load_cast(cast_path)?;
        let crew = loader::load_crew(crew_path)?;
        Ok(Self::new(movies, cast, crew))
    }

    #[inline]
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    #[inline]
    #[must_use]
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Project every titled row onto the recommendation engine's entry type,
    /// preserving storage order.
    #[must_use]
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.movies.iter().filter_map(MovieRecord::to_entry).collect()
    }

    /// Count movies released in the named month (Spanish month name)
    pub fn count_by_release_month(&self, mes: &str) -> Result<u64> {
        let month = month_number(mes)
            .ok_or_else(|| Error::InvalidParameter(format!("mes no válido: {mes}")))?;

        let count = self
            .release_dates
            .iter()
            .flatten()
            .filter(|d| d.month() == month)
            .count();
        Ok(count as u64)
    }

    /// Count movies released on the named weekday (Spanish day name)
    pub fn count_by_release_day(&self, dia: &str) -> Result<u64> {
        let weekday = weekday_from_name(dia)
            .ok_or_else(|| Error::InvalidParameter(format!("día no válido: {dia}")))?;

        let count = self
            .release_dates
            .iter()
            .flatten()
            .filter(|d| d.weekday() == weekday)
            .count();
        Ok(count as u64)
    }

    /// Release year and popularity for a title.
    /// Case-insensitive substring match, first matching row wins.
    pub fn score_by_title(&self, titulo: &str) -> Result<TitleScore> {
        let (idx, record) = self
            .find_by_title(titulo)
            .ok_or_else(|| Error::TitleNotFound(titulo.to_string()))?;

        Ok(TitleScore {
            title: record.title.clone().unwrap_or_default(),
            release_year: self.release_dates[idx].map(|d| d.year()),
            popularity: record.popularity,
        })
    }

    /// Vote count and average for a title.
    /// Same substring resolution as [`Self::score_by_title`].
    pub fn votes_by_title(&self, titulo: &str) -> Result<TitleVotes> {
        let (idx, record) = self
            .find_by_title(titulo)
            .ok_or_else(|| Error::TitleNotFound(titulo.to_string()))?;

        let vote_count = record.vote_count.unwrap_or(0.0).max(0.0) as u64;
        Ok(TitleVotes {
            title: record.title.clone().unwrap_or_default(),
            release_year: self.release_dates[idx].map(|d| d.year()),
            vote_count,
            vote_average: record.vote_average,
            meets_threshold: vote_count >= 2000,
        })
    }

    /// Film count and return aggregates for an actor.
    /// Case-insensitive substring match over cast names; films are every
    /// movie credited to any matching cast row.
    pub fn actor_stats(&self, nombre: &str) -> Result<ActorStats> {
        let needle = nombre.to_lowercase();
        let ids: AHashSet<i64> = self
            .cast
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .map(|c| c.id)
            .collect();

        if ids.is_empty() {
            return Err(Error::NotFound(format!("actor no encontrado: {nombre}")));
        }

        let films: Vec<&MovieRecord> = self
            .movies
            .iter()
            .filter(|m| m.id.map(|id| ids.contains(&id)).unwrap_or(false))
            .collect();

        let returns: Vec<f64> = films.iter().filter_map(|m| m.return_ratio).collect();
        let total_return: f64 = returns.iter().sum();
        let mean_return = if returns.is_empty() {
            0.0
        } else {
            total_return / returns.len() as f64
        };

        Ok(ActorStats {
            name: nombre.to_string(),
            film_count: films.len(),
            total_return,
            mean_return,
        })
    }

    /// Films directed by a director.
    /// Case-insensitive substring match over crew names, restricted to rows
    /// whose job is "director".
    pub fn director_films(&self, nombre: &str) -> Result<DirectorFilms> {
        let needle = nombre.to_lowercase();
        let ids: AHashSet<i64> = self
            .crew
            .iter()
            .filter(|c| {
                c.job
                    .as_deref()
                    .map(|j| j.eq_ignore_ascii_case("director"))
                    .unwrap_or(false)
                    && c.name.to_lowercase().contains(&needle)
            })
            .map(|c| c.id)
            .collect();

        if ids.is_empty() {
            return Err(Error::NotFound(format!("director no encontrado: {nombre}")));
        }

        let films: Vec<DirectorFilm> = self
            .movies
            .iter()
            .filter(|m| m.id.map(|id| ids.contains(&id)).unwrap_or(false))
            .map(|m| DirectorFilm {
                title: m.title.clone(),
                release_date: m.release_date.clone(),
                popularity: m.popularity,
                budget: m.budget,
                return_ratio: m.return_ratio,
            })
            .collect();

        Ok(DirectorFilms {
            name: nombre.to_string(),
            films,
        })
    }

    // First row whose title contains the query, case-insensitively.
    // Substring matching is intentional here and distinct from the
    // recommendation engine's exact-match resolution.
    fn find_by_title(&self, titulo: &str) -> Option<(usize, &MovieRecord)> {
        let needle = titulo.to_lowercase();
        self.movies.iter().enumerate().find(|(_, m)| {
            m.title
                .as_deref()
                .map(|t| t.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }
}

/// Spanish month name -> month number
fn month_number(mes: &str) -> Option<u32> {
    match mes.to_lowercase().as_str() {
        "enero" => Some(1),
        "febrero" => Some(2),
        "marzo" => Some(3),
        "abril" => Some(4),
        "mayo" => Some(5),
        "junio" => Some(6),
        "julio" => Some(7),
        "agosto" => Some(8),
        "septiembre" => Some(9),
        "octubre" => Some(10),
        "noviembre" => Some(11),
        "diciembre" => Some(12),
        _ => None,
    }
}

/// Spanish weekday name -> weekday. Accepts accented and plain spellings.
fn weekday_from_name(dia: &str) -> Option<Weekday> {
    match dia.to_lowercase().as_str() {
        "lunes" => Some(Weekday::Mon),
        "martes" => Some(Weekday::Tue),
        "miércoles" | "miercoles" => Some(Weekday::Wed),
        "jueves" => Some(Weekday::Thu),
        "viernes" => Some(Weekday::Fri),
        "sábado" | "sabado" => Some(Weekday::Sat),
        "domingo" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, date: &str) -> MovieRecord {
        MovieRecord {
            id: Some(id),
            title: Some(title.to_string()),
            release_date: if date.is_empty() {
                None
            } else {
                Some(date.to_string())
            },
            ..MovieRecord::default()
        }
    }

    fn sample_store() -> CatalogStore {
        let mut toy_story = movie(862, "Toy Story", "1995-10-30");
        toy_story.popularity = Some(21.9);
        toy_story.vote_count = Some(5415.0);
        toy_story.vote_average = Some(7.7);
        toy_story.return_ratio = Some(12.45);

        let mut jumanji = movie(8844, "Jumanji", "1995-12-15");
        jumanji.vote_count = Some(150.0);
        jumanji.return_ratio = Some(4.04);

        let broken_date = movie(1, "No Date", "not-a-date");

        let cast = vec![
            CastEntry {
                id: 862,
                name: "Tom Hanks".to_string(),
            },
            CastEntry {
                id: 8844,
                name: "Robin Williams".to_string(),
            },
        ];
        let crew = vec![
            CrewEntry {
                id: 862,
                name: "John Lasseter".to_string(),
                job: Some("Director".to_string()),
            },
            CrewEntry {
                id: 862,
                name: "Joss Whedon".to_string(),
                job: Some("Screenplay".to_string()),
            },
        ];

        CatalogStore::new(vec![toy_story, jumanji, broken_date], cast, crew)
    }

    #[test]
    fn test_count_by_release_month() {
        let store = sample_store();
        assert_eq!(store.count_by_release_month("octubre").unwrap(), 1);
        assert_eq!(store.count_by_release_month("Diciembre").unwrap(), 1);
        assert_eq!(store.count_by_release_month("enero").unwrap(), 0);
        assert!(matches!(
            store.count_by_release_month("octember"),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_count_by_release_day() {
        let store = sample_store();
        // 1995-10-30 was a Monday, 1995-12-15 a Friday
        assert_eq!(store.count_by_release_day("lunes").unwrap(), 1);
        assert_eq!(store.count_by_release_day("viernes").unwrap(), 1);
        assert_eq!(store.count_by_release_day("sábado").unwrap(), 0);
        assert_eq!(store.count_by_release_day("sabado").unwrap(), 0);
        assert!(matches!(
            store.count_by_release_day("monday"),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unparseable_dates_are_missing() {
        let store = sample_store();
        let total: u64 = (1..=12)
            .map(|m| {
                let names = [
                    "enero",
                    "febrero",
                    "marzo",
                    "abril",
                    "mayo",
                    "junio",
                    "julio",
                    "agosto",
                    "septiembre",
                    "octubre",
                    "noviembre",
                    "diciembre",
                ];
                store.count_by_release_month(names[m - 1]).unwrap()
            })
            .sum();
        // "No Date" never counts anywhere
        assert_eq!(total, 2);
    }

    #[test]
    fn test_score_by_title_substring_match() {
        let store = sample_store();
        let score = store.score_by_title("toy").unwrap();
        assert_eq!(score.title, "Toy Story");
        assert_eq!(score.release_year, Some(1995));
        assert_eq!(score.popularity, Some(21.9));

        assert!(matches!(
            store.score_by_title("Matrix"),
            Err(Error::TitleNotFound(_))
        ));
    }

    #[test]
    fn test_votes_by_title_threshold() {
        let store = sample_store();

        let votes = store.votes_by_title("Toy Story").unwrap();
        assert_eq!(votes.vote_count, 5415);
        assert!(votes.meets_threshold);

        let votes = store.votes_by_title("Jumanji").unwrap();
        assert_eq!(votes.vote_count, 150);
        assert!(!votes.meets_threshold);
    }

    #[test]
    fn test_actor_stats() {
        let store = sample_store();
        let stats = store.actor_stats("tom hanks").unwrap();
        assert_eq!(stats.film_count, 1);
        assert!((stats.total_return - 12.45).abs() < 1e-9);
        assert!((stats.mean_return - 12.45).abs() < 1e-9);

        assert!(matches!(
            store.actor_stats("Nobody"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_director_films_requires_director_job() {
        let store = sample_store();
        let films = store.director_films("lasseter").unwrap();
        assert_eq!(films.films.len(), 1);
        assert_eq!(films.films[0].title.as_deref(), Some("Toy Story"));

        // Screenplay credit does not make Whedon a director
        assert!(matches!(
            store.director_films("whedon"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_entries_skip_titleless_rows() {
        let mut rows = vec![movie(1, "Heat", "1995-12-15")];
        rows.push(MovieRecord::default());
        let store = CatalogStore::new(rows, Vec::new(), Vec::new());
        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Heat");
    }
}
