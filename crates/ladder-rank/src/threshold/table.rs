use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::{Bound, ThresholdSource};
use crate::error::{Error, Result};
use crate::rank::{Playlist, RankPosition, TOP_TIER};

/// Rows a complete table must have (row 0 plus every division up to the top tier)
pub const REQUIRED_ROWS: usize = (TOP_TIER as usize - 1) * 4 + 2;

/// MMR range of one tier/division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdRow {
    #[serde(rename = "minMMR", deserialize_with = "mmr_value")]
    pub min_mmr: i32,
    #[serde(rename = "maxMMR", deserialize_with = "mmr_value")]
    pub max_mmr: i32,
}

impl ThresholdRow {
    pub fn get(&self, bound: Bound) -> i32 {
        match bound {
            Bound::Min => self.min_mmr,
            Bound::Max => self.max_mmr,
        }
    }
}

/// Rank files store MMR as JSON numbers that are sometimes written as floats.
fn mmr_value<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.trunc() as i32)
}

/// File shape: `{"data": {"data": [row, ...]}}`
#[derive(Debug, Serialize, Deserialize)]
struct ThresholdDocument {
    data: ThresholdRows,
}

#[derive(Debug, Serialize, Deserialize)]
struct ThresholdRows {
    data: Vec<ThresholdRow>,
}

/// Problem found by [`ThresholdTable::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    MissingRows { expected: usize, found: usize },
    Inverted { position: RankPosition, min: i32, max: i32 },
    Decreasing { position: RankPosition, bound: Bound, previous: i32, value: i32 },
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::MissingRows { expected, found } => {
                write!(f, "table has {} rows, expected at least {}", found, expected)
            }
            TableIssue::Inverted { position, min, max } => {
                write!(f, "{}: minMMR {} is above maxMMR {}", position, min, max)
            }
            TableIssue::Decreasing {
                position,
                bound,
                previous,
                value,
            } => write!(
                f,
                "{}: {} {} is below the previous division's {}",
                position, bound, value, previous
            ),
        }
    }
}

/// Parsed threshold table for one playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdTable {
    playlist: Playlist,
    rows: Vec<ThresholdRow>,
}

impl ThresholdTable {
    pub fn new(playlist: Playlist, rows: Vec<ThresholdRow>) -> Self {
        Self { playlist, rows }
    }

    pub fn from_json_str(playlist: Playlist, content: &str) -> Result<Self> {
        let document: ThresholdDocument = serde_json::from_str(content).map_err(|e| {
            Error::data_unavailable(playlist.id(), format!("unparseable threshold data: {}", e))
        })?;
        Ok(Self::new(playlist, document.data.data))
    }

    pub fn load_from_path<P: AsRef<Path>>(playlist: Playlist, path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading thresholds for playlist {} from {}", playlist.id(), path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            Error::data_unavailable(
                playlist.id(),
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;
        Self::from_json_str(playlist, &content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let document = ThresholdDocument {
            data: ThresholdRows {
                data: self.rows.clone(),
            },
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn playlist(&self) -> Playlist {
        self.playlist
    }

    pub fn rows(&self) -> &[ThresholdRow] {
        &self.rows
    }

    pub fn row(&self, position: RankPosition) -> Result<&ThresholdRow> {
        let index = position.table_row().ok_or_else(|| {
            Error::data_unavailable(
                self.playlist.id(),
                format!("tier {} has no thresholds", position.tier()),
            )
        })?;

        self.rows.get(index).ok_or_else(|| {
            Error::data_unavailable(
                self.playlist.id(),
                format!("row {} out of range ({} rows)", index, self.rows.len()),
            )
        })
    }

    pub fn bound(&self, position: RankPosition, bound: Bound) -> Result<i32> {
        self.row(position).map(|row| row.get(bound))
    }

    /// Check the table covers the ladder, each range is ordered, and
    /// ranges never decrease going up the ladder.
    pub fn validate(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();

        if self.rows.len() < REQUIRED_ROWS {
            issues.push(TableIssue::MissingRows {
                expected: REQUIRED_ROWS,
                found: self.rows.len(),
            });
        }

        let mut previous: Option<&ThresholdRow> = None;
        let ranked = RankPosition::all()
            .filter(|p| !p.is_unranked())
            .filter(|p| !p.is_top() || p.division() == 0);

        for position in ranked {
            let Ok(row) = self.row(position) else {
                break;
            };

            if row.min_mmr > row.max_mmr {
                issues.push(TableIssue::Inverted {
                    position,
                    min: row.min_mmr,
                    max: row.max_mmr,
                });
            }

            if let Some(prev) = previous {
                for bound in [Bound::Min, Bound::Max] {
                    if row.get(bound) < prev.get(bound) {
                        issues.push(TableIssue::Decreasing {
                            position,
                            bound,
                            previous: prev.get(bound),
                            value: row.get(bound),
                        });
                    }
                }
            }
            previous = Some(row);
        }

        issues
    }
}

impl ThresholdSource for ThresholdTable {
    fn lookup(&self, playlist: Playlist, position: RankPosition, bound: Bound) -> Result<i32> {
        if playlist != self.playlist {
            return Err(Error::data_unavailable(
                playlist.id(),
                format!("table holds playlist {}", self.playlist.id()),
            ));
        }
        self.bound(position, bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::sample_table;

    fn pos(tier: u8, division: u8) -> RankPosition {
        RankPosition::new(tier, division).unwrap()
    }

    #[test]
    fn test_parse_document() {
        let json = r#"{"data": {"data": [
            {"minMMR": 0, "maxMMR": 0},
            {"minMMR": -100, "maxMMR": 151.9},
            {"minMMR": 152, "maxMMR": 171}
        ]}}"#;
        let table = ThresholdTable::from_json_str(Playlist::Duel, json).unwrap();
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.bound(pos(1, 0), Bound::Min).unwrap(), -100);
        assert_eq!(table.bound(pos(1, 0), Bound::Max).unwrap(), 151);
        assert_eq!(table.bound(pos(1, 1), Bound::Min).unwrap(), 152);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{"data": {"data": [
            {"minMMR": 0, "maxMMR": 0},
            {"tier": 1, "division": 0, "minMMR": 10, "maxMMR": 20}
        ]}, "version": 3}"#;
        let table = ThresholdTable::from_json_str(Playlist::Hoops, json).unwrap();
        assert_eq!(table.bound(pos(1, 0), Bound::Max).unwrap(), 20);
    }

    #[test]
    fn test_unparseable_is_data_unavailable() {
        let err = ThresholdTable::from_json_str(Playlist::Duel, "{\"data\": []}").unwrap_err();
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_row_out_of_range() {
        let rows = sample_table(Playlist::Doubles).rows()[..10].to_vec();
        let table = ThresholdTable::new(Playlist::Doubles, rows);
        assert!(table.bound(pos(3, 0), Bound::Min).is_ok());
        let err = table.bound(pos(3, 1), Bound::Min).unwrap_err();
        assert!(err.is_data_unavailable());
    }

    #[test]
    fn test_unranked_has_no_row() {
        let table = sample_table(Playlist::Doubles);
        assert!(table.bound(pos(0, 0), Bound::Min).unwrap_err().is_data_unavailable());
    }

    #[test]
    fn test_lookup_other_playlist_fails() {
        let table = sample_table(Playlist::Doubles);
        assert!(table.lookup(Playlist::Doubles, pos(4, 1), Bound::Max).is_ok());
        assert!(table.lookup(Playlist::Duel, pos(4, 1), Bound::Max).is_err());
    }

    #[test]
    fn test_sample_table_is_monotonic() {
        let table = sample_table(Playlist::Standard);
        assert!(table.validate().is_empty());

        for position in RankPosition::all().filter(|p| !p.is_unranked()) {
            let min = table.bound(position, Bound::Min).unwrap();
            let max = table.bound(position, Bound::Max).unwrap();
            assert!(min <= max, "{}", position);
        }
    }

    #[test]
    fn test_validate_reports_problems() {
        let mut rows = sample_table(Playlist::Duel).rows().to_vec();
        rows[6] = ThresholdRow { min_mmr: 500, max_mmr: 400 };
        rows.truncate(40);
        let table = ThresholdTable::new(Playlist::Duel, rows);

        let issues = table.validate();
        assert!(issues.contains(&TableIssue::MissingRows {
            expected: REQUIRED_ROWS,
            found: 40
        }));
        assert!(issues.iter().any(|i| matches!(
            i,
            TableIssue::Inverted { position, .. } if *position == pos(2, 1)
        )));
        assert!(issues.iter().any(|i| matches!(
            i,
            TableIssue::Decreasing { position, bound: Bound::Max, .. } if *position == pos(2, 2)
        )));
    }

    #[test]
    fn test_json_round_trip_keeps_field_names() {
        let table = sample_table(Playlist::Rumble);
        let json = table.to_json_string().unwrap();
        assert!(json.contains("\"minMMR\""));
        let parsed = ThresholdTable::from_json_str(Playlist::Rumble, &json).unwrap();
        assert_eq!(parsed, table);
    }
}
