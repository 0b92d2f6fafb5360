//! On-disk artifact layout shared by every pipeline stage.
//!
//! Stages never talk to each other directly: each one reads the JSON written
//! by its predecessor and writes its own files under `data/` or `results/`.
//! Dated artifacts carry a `YYYYMMDD` stamp, so the lexicographically greatest
//! file name is also the most recent.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Locations of collected data and generated results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStore {
    data_dir: PathBuf,
    results_dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given directories.
    pub fn new(data_dir: impl Into<PathBuf>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            results_dir: results_dir.into(),
        }
    }

    /// Root of collected data.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Root of generated results.
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Collected news, indicator and trend files.
    pub fn news_dir(&self) -> PathBuf {
        self.data_dir.join("news")
    }

    /// Imported forum analyses.
    pub fn reddit_dir(&self) -> PathBuf {
        self.data_dir.join("reddit")
    }

    /// Bundle of key artifacts for distribution.
    pub fn final_report_dir(&self) -> PathBuf {
        self.results_dir.join("final_report")
    }

    /// Path of a file directly under the results directory.
    pub fn result(&self, name: &str) -> PathBuf {
        self.results_dir.join(name)
    }

    /// Write `value` as pretty-printed JSON, creating parent directories.
    pub fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(|e| Error::json(e, path))?;
        self.write_text(path, &json)
    }

    /// Read a JSON artifact.
    ///
    /// A missing file yields [`Error::MissingInput`] naming `what`.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path, what: &str) -> Result<T> {
        let content = self.read_text(path, what)?;
        serde_json::from_str(&content).map_err(|e| Error::json(e, path))
    }

    /// Write text, creating parent directories.
    pub fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        ensure_parent(path)?;
        fs::write(path, content).map_err(|e| Error::io(e, path))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote artifact");
        Ok(())
    }

    /// Read a text artifact.
    pub fn read_text(&self, path: &Path, what: &str) -> Result<String> {
        if !path.exists() {
            return Err(Error::missing_input(what, path));
        }
        fs::read_to_string(path).map_err(|e| Error::io(e, path))
    }

    /// Write rows as CSV with a header derived from the row type.
    pub fn write_csv<I, T>(&self, path: &Path, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        ensure_parent(path)?;
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|e| Error::io(e, path))?;
        tracing::debug!(path = %path.display(), "Wrote CSV artifact");
        Ok(())
    }

    /// Every `{prefix}_*.json` file in `dir`, sorted by file name.
    pub fn all(&self, dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/{}_*.json",
            glob::Pattern::escape(&dir.to_string_lossy()),
            prefix
        );
        let mut paths: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable artifact");
                    None
                }
            })
            .collect();
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    /// The most recent `{prefix}_*.json` file in `dir`, if any.
    pub fn latest(&self, dir: &Path, prefix: &str) -> Result<Option<PathBuf>> {
        Ok(self.all(dir, prefix)?.pop())
    }

    /// Copy `src` into `dest_dir`, keeping its file name.
    ///
    /// Returns `false` without copying when `src` does not exist.
    pub fn copy_into(&self, src: &Path, dest_dir: &Path) -> Result<bool> {
        let Some(name) = src.file_name() else {
            return Ok(false);
        };
        if !src.is_file() {
            return Ok(false);
        }
        fs::create_dir_all(dest_dir).map_err(|e| Error::io(e, dest_dir))?;
        let dest = dest_dir.join(name);
        fs::copy(src, &dest).map_err(|e| Error::io(e, &dest))?;
        Ok(true)
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| Error::io(e, parent))
        }
        _ => Ok(()),
    }
}

/// `YYYYMMDD` stamp used in dated artifact names.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// File-name form of a query or subreddit name. Anything other than an
/// ASCII letter, digit, `_` or `-` becomes an underscore, so the result
/// never names another directory.
pub fn slug(query: &str) -> String {
    query
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        score: f64,
    }

    fn store(dir: &TempDir) -> ArtifactStore {
        ArtifactStore::new(dir.path().join("data"), dir.path().join("results"))
    }

    #[test]
    fn test_layout() {
        let store = ArtifactStore::new("data", "results");
        assert_eq!(store.news_dir(), PathBuf::from("data/news"));
        assert_eq!(store.reddit_dir(), PathBuf::from("data/reddit"));
        assert_eq!(store.final_report_dir(), PathBuf::from("results/final_report"));
        assert_eq!(store.result("a.json"), PathBuf::from("results/a.json"));
    }

    #[test]
    fn test_json_round_trip_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let path = store.news_dir().join("x.json");
        let row = Row {
            name: "Affordable Childcare".to_string(),
            score: 8.9,
        };
        store.write_json(&path, &row).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"name\""));
        let back: Row = store.read_json(&path, "row").unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_read_missing_is_missing_input() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let err = store
            .read_json::<Row>(&store.result("nope.json"), "combined analysis")
            .unwrap_err();
        assert!(err.is_missing_input());
        assert!(err.to_string().contains("combined analysis"));
    }

    #[test]
    fn test_read_malformed_json() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let path = store.result("bad.json");
        store.write_text(&path, "{not json").unwrap();
        let err = store.read_json::<Row>(&path, "row").unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_latest_and_all() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let news = store.news_dir();
        assert!(store.latest(&news, "scraped_trends").unwrap().is_none());

        for name in [
            "scraped_trends_20240101.json",
            "scraped_trends_20240315.json",
            "scraped_trends_20231231.json",
            "economic_indicators_20250101.json",
        ] {
            store.write_text(&news.join(name), "{}").unwrap();
        }

        let latest = store.latest(&news, "scraped_trends").unwrap().unwrap();
        assert!(latest.ends_with("scraped_trends_20240315.json"));
        let all = store.all(&news, "scraped_trends").unwrap();
        assert_eq!(all.len(), 3);
        assert!(all[0].ends_with("scraped_trends_20231231.json"));
    }

    #[test]
    fn test_prefix_does_not_match_longer_names() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let news = store.news_dir();
        store
            .write_text(&news.join("all_news_analysis_20240101.json"), "{}")
            .unwrap();
        store
            .write_text(&news.join("analysis_market_gap_20240101.json"), "{}")
            .unwrap();
        let all = store.all(&news, "analysis").unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_write_csv_has_header() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let path = store.result("chart.csv");
        store
            .write_csv(
                &path,
                [Row {
                    name: "Telemedicine".to_string(),
                    score: 9.3,
                }],
            )
            .unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "name,score\nTelemedicine,9.3\n");
    }

    #[test]
    fn test_copy_into() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let src = store.result("report.md");
        store.write_text(&src, "# Report").unwrap();
        assert!(store.copy_into(&src, &store.final_report_dir()).unwrap());
        assert!(store.final_report_dir().join("report.md").exists());
        assert!(
            !store
                .copy_into(&store.result("missing.md"), &store.final_report_dir())
                .unwrap()
        );
    }

    #[test]
    fn test_date_stamp_and_slug() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(date_stamp(date), "20240305");
        assert_eq!(slug("underserved market"), "underserved_market");
        assert_eq!(slug("small-business lending"), "small-business_lending");
    }

    #[test]
    fn test_slug_keeps_names_in_one_directory() {
        assert_eq!(slug("x/../../../escaped"), "x__________escaped");
        assert_eq!(slug(".."), "__");
        assert_eq!(slug("a\\b:c"), "a_b_c");
        assert!(!slug("/etc/passwd").contains('/'));
    }
}
