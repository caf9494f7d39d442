// CSV ingestion for the three dataset tables
use crate::record::{CastEntry, CrewEntry, MovieRecord};
use cinerec_core::{Error, Result};
use std::path::Path;
use tracing::info;

/// Load the pre-joined movies table
pub fn load_movies<P: AsRef<Path>>(path: P) -> Result<Vec<MovieRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::Csv(e.to_string()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: MovieRecord = row.map_err(|e| Error::Csv(e.to_string()))?;
        records.push(record);
    }

    info!("Loaded {} movies from {:?}", records.len(), path);
    Ok(records)
}

/// Load the expanded cast table
pub fn load_cast<P: AsRef<Path>>(path: P) -> Result<Vec<CastEntry>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::Csv(e.to_string()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: CastEntry = row.map_err(|e| Error::Csv(e.to_string()))?;
        records.push(record);
    }

    info!("Loaded {} cast credits from {:?}", records.len(), path);
    Ok(records)
}

/// Load the filtered crew table
pub fn load_crew<P: AsRef<Path>>(path: P) -> Result<Vec<CrewEntry>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::Csv(e.to_string()))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: CrewEntry = row.map_err(|e| Error::Csv(e.to_string()))?;
        records.push(record);
    }

    info!("Loaded {} crew credits from {:?}", records.len(), path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_movies_with_missing_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "movies.csv",
            "ID,TITLE,RELEASE_DATE,POPULARITY,VOTE_COUNT,VOTE_AVERAGE,BUDGET,REVENUE,RETURN,GENRES,ORIGINAL_LANGUAGE,PRODUCTION_COUNTRIES\n\
             862,Toy Story,1995-10-30,21.9,5415,7.7,30000000,373554033,12.45,Animation Comedy Family,en,United States of America\n\
             8844,Jumanji,,,,,,,,,,\n",
        );

        let movies = load_movies(&path).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title.as_deref(), Some("Toy Story"));
        assert_eq!(movies[0].vote_count, Some(5415.0));
        assert_eq!(movies[1].title.as_deref(), Some("Jumanji"));
        assert_eq!(movies[1].release_date, None);
        assert_eq!(movies[1].budget, None);
    }

    #[test]
    fn test_load_cast_and_crew() {
        let dir = tempfile::tempdir().unwrap();
        let cast_path = write_fixture(&dir, "cast.csv", "id,name\n862,Tom Hanks\n862,Tim Allen\n");
        let crew_path = write_fixture(
            &dir,
            "crew.csv",
            "id,name,job\n862,John Lasseter,Director\n862,Joss Whedon,Screenplay\n",
        );

        let cast = load_cast(&cast_path).unwrap();
        assert_eq!(cast.len(), 2);
        assert_eq!(cast[0].name, "Tom Hanks");

        let crew = load_crew(&crew_path).unwrap();
        assert_eq!(crew.len(), 2);
        assert_eq!(crew[0].job.as_deref(), Some("Director"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_movies("/nonexistent/movies.csv").unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }
}
