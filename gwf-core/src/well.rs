use anyhow::Context;
use csv::ReaderBuilder;
use gwf_utils::text::capitalize;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Embedded well registry (key, display name, USGS station, coordinates, description).
pub static WELLS_CSV: &str = include_str!("../../fixtures/wells.csv");

/// Identifier of one of the four monitored wells.
///
/// The lowercase string form doubles as the artifact file suffix
/// (`model_predictions_{key}.csv`) and as the substring searched for in
/// map marker tooltips.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WellKey {
    Withams,
    Greenbush,
    Churchneck,
    Capecharles,
}

impl WellKey {
    /// All wells, in sidebar order.
    pub const ALL: [WellKey; 4] = [
        WellKey::Withams,
        WellKey::Greenbush,
        WellKey::Churchneck,
        WellKey::Capecharles,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WellKey::Withams => "withams",
            WellKey::Greenbush => "greenbush",
            WellKey::Churchneck => "churchneck",
            WellKey::Capecharles => "capecharles",
        }
    }
}

impl fmt::Display for WellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WellKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        WellKey::ALL
            .into_iter()
            .find(|key| key.as_str() == lowered)
            .ok_or_else(|| anyhow::anyhow!("unknown well key '{}'", s))
    }
}

/// A USGS groundwater monitoring well on the Virginia Eastern Shore.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Well {
    pub key: WellKey,
    /// Human-readable name, e.g. "Green Bush"
    pub name: String,
    /// USGS site number
    pub station_id: String,
    /// Marker latitude in decimal degrees
    pub latitude: f64,
    /// Marker longitude in decimal degrees
    pub longitude: f64,
    /// Hydrogeological description shown on the well page
    pub about: String,
}

impl Well {
    /// Sidebar and page title label: "Green Bush (USGS 374425075400003)".
    pub fn display_name(&self) -> String {
        format!("{} (USGS {})", self.name, self.station_id)
    }

    /// Hover text for the well's map marker.
    ///
    /// Marker clicks are routed by searching this text for a well key, so
    /// the key must appear in it verbatim (case aside).
    pub fn marker_tooltip(&self) -> String {
        format!(
            "Navigate to {}: {}",
            capitalize(self.key.as_str()),
            self.station_id
        )
    }

    /// Wells from the embedded registry.
    pub fn get_well_vector() -> anyhow::Result<Vec<Well>> {
        Well::parse_well_csv(WELLS_CSV)
    }

    /// Parse a CSV string of well metadata.
    ///
    /// Expected CSV columns: key, name, station_id, latitude, longitude, about
    pub fn parse_well_csv(csv_object: &str) -> anyhow::Result<Vec<Well>> {
        let mut wells = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for (line, row) in rdr.records().enumerate() {
            let record = row?;
            let field = |idx: usize, name: &str| -> anyhow::Result<String> {
                record
                    .get(idx)
                    .map(|s| s.trim().to_string())
                    .with_context(|| format!("well row {} is missing {}", line + 1, name))
            };
            let key: WellKey = field(0, "key")?.parse()?;
            let latitude = field(3, "latitude")?
                .parse::<f64>()
                .with_context(|| format!("bad latitude for {}", key))?;
            let longitude = field(4, "longitude")?
                .parse::<f64>()
                .with_context(|| format!("bad longitude for {}", key))?;
            wells.push(Well {
                key,
                name: field(1, "name")?,
                station_id: field(2, "station_id")?,
                latitude,
                longitude,
                about: field(5, "about")?,
            });
        }
        Ok(wells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_vector() {
        let wells = Well::get_well_vector().unwrap();
        assert_eq!(wells.len(), 4);
        let keys: Vec<WellKey> = wells.iter().map(|w| w.key).collect();
        assert_eq!(keys, WellKey::ALL.to_vec());
    }

    #[test]
    fn test_green_bush_metadata() {
        let wells = Well::get_well_vector().unwrap();
        let green_bush = wells.iter().find(|w| w.key == WellKey::Greenbush).unwrap();
        assert_eq!(green_bush.name, "Green Bush");
        assert_eq!(green_bush.station_id, "374425075400003");
        assert!((green_bush.latitude - 37.7656).abs() < 1e-9);
        assert!(green_bush.about.contains("Yorktown-Eastover Lower Aquifer"));
        assert_eq!(
            green_bush.display_name(),
            "Green Bush (USGS 374425075400003)"
        );
        assert_eq!(
            green_bush.marker_tooltip(),
            "Navigate to Greenbush: 374425075400003"
        );
    }

    #[test]
    fn test_well_key_parse() {
        assert_eq!("withams".parse::<WellKey>().unwrap(), WellKey::Withams);
        assert_eq!(" CapeCharles ".parse::<WellKey>().unwrap(), WellKey::Capecharles);
        assert!("home".parse::<WellKey>().is_err());
    }

    #[test]
    fn test_parse_well_csv_rejects_unknown_key() {
        let csv = "KEY,NAME,STATION_ID,LATITUDE,LONGITUDE,ABOUT\nexmore,Exmore,1,37.5,-75.8,x\n";
        assert!(Well::parse_well_csv(csv).is_err());
    }
}
