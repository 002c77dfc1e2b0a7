//! Locating forecast and score artifacts.
//!
//! Artifacts live in one directory and follow a fixed naming convention:
//! `model_predictions_{key}.csv` (optionally gzip-compressed as
//! `model_predictions_{key}.csv.gz`) and `model_scores_{key}.json`.
//! A well without files simply has no forecast or score data.

use crate::well::WellKey;
use anyhow::Context;
use flate2::read::GzDecoder;
use std::{
    collections::BTreeMap,
    fs,
    io::Read,
    path::{Path, PathBuf},
};

/// File name of a well's prediction table.
pub fn forecast_file_name(key: WellKey) -> String {
    format!("model_predictions_{}.csv", key)
}

/// File name of a well's score mapping.
pub fn score_file_name(key: WellKey) -> String {
    format!("model_scores_{}.json", key)
}

/// Raw artifact contents for one well.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WellArtifacts {
    pub forecast_csv: Option<String>,
    pub scores_json: Option<String>,
}

impl WellArtifacts {
    /// Build from embedded strings; an empty (or blank) string means "no file".
    pub fn from_embedded(forecast_csv: &str, scores_json: &str) -> Self {
        let present = |s: &str| (!s.trim().is_empty()).then(|| s.to_string());
        WellArtifacts {
            forecast_csv: present(forecast_csv),
            scores_json: present(scores_json),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.forecast_csv.is_none() && self.scores_json.is_none()
    }
}

/// Artifact contents for every well that has at least one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSet {
    wells: BTreeMap<WellKey, WellArtifacts>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a well's artifacts. Wells with no files are not stored.
    pub fn insert(&mut self, key: WellKey, artifacts: WellArtifacts) {
        if artifacts.is_empty() {
            self.wells.remove(&key);
        } else {
            self.wells.insert(key, artifacts);
        }
    }

    pub fn get(&self, key: WellKey) -> Option<&WellArtifacts> {
        self.wells.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WellKey, &WellArtifacts)> {
        self.wells.iter().map(|(key, artifacts)| (*key, artifacts))
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    /// Read every known well's artifacts from `dir`.
    ///
    /// The directory itself must exist. Individual files may be missing;
    /// a file that cannot be read or decoded is logged and treated as missing.
    pub fn from_dir(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            anyhow::bail!("artifact directory {} is not accessible", dir.display());
        }

        let mut set = ArtifactSet::new();
        for key in WellKey::ALL {
            let forecast_path = dir.join(forecast_file_name(key));
            let forecast_csv = match read_text_or_skip(&forecast_path) {
                Some(text) => Some(text),
                None => read_text_or_skip(&gzip_path(&forecast_path)),
            };
            let scores_json = read_text_or_skip(&dir.join(score_file_name(key)));

            log::info!(
                "artifacts for {}: forecast={} scores={}",
                key,
                forecast_csv.is_some(),
                scores_json.is_some()
            );
            set.insert(
                key,
                WellArtifacts {
                    forecast_csv,
                    scores_json,
                },
            );
        }
        Ok(set)
    }
}

fn gzip_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}

/// [`read_text`], logging a broken file and treating it as absent.
fn read_text_or_skip(path: &Path) -> Option<String> {
    match read_text(path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("skipping artifact: {:#}", e);
            None
        }
    }
}

/// Read a text artifact, transparently inflating `.gz` files.
/// Returns `None` when the file does not exist.
fn read_text(path: &Path) -> anyhow::Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let text = if path.extension().is_some_and(|ext| ext == "gz") {
        let mut text = String::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_string(&mut text)
            .with_context(|| format!("inflating {}", path.display()))?;
        text
    } else {
        String::from_utf8(bytes).with_context(|| format!("{} is not UTF-8", path.display()))?
    };
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    #[test]
    fn file_names_follow_convention() {
        assert_eq!(
            forecast_file_name(WellKey::Withams),
            "model_predictions_withams.csv"
        );
        assert_eq!(
            score_file_name(WellKey::Capecharles),
            "model_scores_capecharles.json"
        );
    }

    #[test]
    fn from_embedded_treats_blank_as_missing() {
        let artifacts = WellArtifacts::from_embedded("date,Actual\n", "  \n");
        assert!(artifacts.forecast_csv.is_some());
        assert!(artifacts.scores_json.is_none());
        assert!(WellArtifacts::from_embedded("", "").is_empty());
    }

    #[test]
    fn from_dir_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("model_predictions_withams.csv"),
            "date,Actual,LSTM_Pred\n2024-01-01,5.0,5.1\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("model_scores_churchneck.json"),
            r#"{"LSTM": [0.9, 0.2]}"#,
        )
        .unwrap();

        let set = ArtifactSet::from_dir(dir.path()).unwrap();
        assert_eq!(set.len(), 2);
        let withams = set.get(WellKey::Withams).unwrap();
        assert!(withams.forecast_csv.as_deref().unwrap().starts_with("date,"));
        assert!(withams.scores_json.is_none());
        let churchneck = set.get(WellKey::Churchneck).unwrap();
        assert!(churchneck.forecast_csv.is_none());
        assert!(set.get(WellKey::Greenbush).is_none());
    }

    #[test]
    fn from_dir_reads_gzip_forecasts() {
        let dir = tempfile::tempdir().unwrap();
        let csv = "Date,gw_depth_ft,CNN_Pred\n2024-01-01,38.0,38.2\n";
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(csv.as_bytes()).unwrap();
        fs::write(
            dir.path().join("model_predictions_greenbush.csv.gz"),
            encoder.finish().unwrap(),
        )
        .unwrap();

        let set = ArtifactSet::from_dir(dir.path()).unwrap();
        let greenbush = set.get(WellKey::Greenbush).unwrap();
        assert_eq!(greenbush.forecast_csv.as_deref(), Some(csv));
    }

    #[test]
    fn from_dir_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("model_predictions_withams.csv"),
            "date,Actual,LSTM_Pred\n2024-01-01,5.0,5.1\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("model_predictions_greenbush.csv.gz"),
            b"not gzip at all",
        )
        .unwrap();
        fs::write(
            dir.path().join("model_scores_churchneck.json"),
            [0xff, 0xfe, 0x00, 0x7b],
        )
        .unwrap();

        let set = ArtifactSet::from_dir(dir.path()).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get(WellKey::Withams).unwrap().forecast_csv.is_some());
        assert!(set.get(WellKey::Greenbush).is_none());
        assert!(set.get(WellKey::Churchneck).is_none());
    }

    #[test]
    fn broken_forecast_keeps_scores() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("model_predictions_greenbush.csv.gz"),
            b"\x1f\x8b truncated",
        )
        .unwrap();
        fs::write(
            dir.path().join("model_scores_greenbush.json"),
            r#"{"CNN": [0.8, 0.3]}"#,
        )
        .unwrap();

        let set = ArtifactSet::from_dir(dir.path()).unwrap();
        let greenbush = set.get(WellKey::Greenbush).unwrap();
        assert!(greenbush.forecast_csv.is_none());
        assert!(greenbush.scores_json.is_some());
    }

    #[test]
    fn from_dir_fails_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(ArtifactSet::from_dir(&missing).is_err());
    }
}
