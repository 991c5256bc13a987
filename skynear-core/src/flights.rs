//! Known-flight reference table, loaded from a CSV file.
//!
//! The header row must carry a `callsign` column; `origin`, `destination`,
//! `airline`, and `model` are optional, in any order. A missing file is an
//! empty table. A present but malformed file is a `DataSource` error.

use std::path::Path;

use serde::Deserialize;

use crate::types::{Result, SkynearError, UNKNOWN};

/// One row of the flight table. Absent fields render as "Desconhecido".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    pub callsign: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub airline: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl FlightRecord {
    pub fn origin(&self) -> &str {
        self.origin.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn airline(&self) -> &str {
        self.airline.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(UNKNOWN)
    }
}

/// In-memory flight table, rows kept in source order.
#[derive(Debug, Clone, Default)]
pub struct FlightTable {
    records: Vec<FlightRecord>,
}

impl FlightTable {
    /// Load a table from a CSV file.
    ///
    /// A nonexistent path yields an empty table; any other failure (open
    /// error, missing `callsign` header, bad row) propagates.
    pub fn load(path: impl AsRef<Path>) -> Result<FlightTable> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(FlightTable::default());
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| SkynearError::DataSource(format!("{}: {e}", path.display())))?;

        let headers = reader
            .headers()
            .map_err(|e| SkynearError::DataSource(format!("{}: {e}", path.display())))?;
        if !headers.iter().any(|h| h.trim() == "callsign") {
            return Err(SkynearError::DataSource(format!(
                "{}: missing callsign column",
                path.display()
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: FlightRecord =
                row.map_err(|e| SkynearError::DataSource(format!("{}: {e}", path.display())))?;
            records.push(record);
        }

        Ok(FlightTable { records })
    }

    /// Build a table directly from rows.
    pub fn from_records(records: Vec<FlightRecord>) -> FlightTable {
        FlightTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    /// True if any row matches the trimmed callsign exactly.
    pub fn contains(&self, callsign: &str) -> bool {
        self.lookup(callsign).is_some()
    }

    /// First row whose callsign matches exactly after trimming.
    pub fn lookup(&self, callsign: &str) -> Option<&FlightRecord> {
        let wanted = callsign.trim();
        self.records.iter().find(|r| r.callsign.trim() == wanted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let table = FlightTable::load(dir.path().join("nope.csv")).unwrap();
        assert!(table.is_empty());
        assert!(!table.contains("TAP123"));
    }

    #[test]
    fn test_load_and_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "voos.csv",
            "callsign,origin,destination,airline,model\nTAP123,LIS,OPO,TAP,A320\n",
        );
        let table = FlightTable::load(&path).unwrap();
        assert_eq!(table.len(), 1);

        let rec = table.lookup("TAP123").unwrap();
        assert_eq!(rec.origin(), "LIS");
        assert_eq!(rec.destination(), "OPO");
        assert_eq!(rec.airline(), "TAP");
        assert_eq!(rec.model(), "A320");
    }

    #[test]
    fn test_lookup_trims_query() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "voos.csv", "callsign,origin\nTAP123,LIS\n");
        let table = FlightTable::load(&path).unwrap();
        assert!(table.contains(" TAP123 "));
        assert!(!table.contains("TAP12"));
    }

    #[test]
    fn test_absent_columns_default_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "voos.csv", "callsign,origin\nTAP123,LIS\n");
        let table = FlightTable::load(&path).unwrap();
        let rec = table.lookup("TAP123").unwrap();
        assert_eq!(rec.origin(), "LIS");
        assert_eq!(rec.destination(), "Desconhecido");
        assert_eq!(rec.airline(), "Desconhecido");
        assert_eq!(rec.model(), "Desconhecido");
    }

    #[test]
    fn test_column_order_irrelevant() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "voos.csv",
            "model,airline,callsign,destination,origin\nA320,TAP,TAP123,OPO,LIS\n",
        );
        let table = FlightTable::load(&path).unwrap();
        let rec = table.lookup("TAP123").unwrap();
        assert_eq!(rec.origin(), "LIS");
        assert_eq!(rec.model(), "A320");
    }

    #[test]
    fn test_duplicate_callsign_first_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "voos.csv",
            "callsign,origin\nTAP123,LIS\nTAP123,FAO\n",
        );
        let table = FlightTable::load(&path).unwrap();
        assert_eq!(table.lookup("TAP123").unwrap().origin(), "LIS");
    }

    #[test]
    fn test_missing_callsign_header_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "voos.csv", "origin,destination\nLIS,OPO\n");
        let err = FlightTable::load(&path).unwrap_err();
        assert!(err.to_string().contains("missing callsign column"));
    }

    #[test]
    fn test_lookup_absent_is_none() {
        let table = FlightTable::from_records(vec![FlightRecord {
            callsign: "TAP123".into(),
            origin: None,
            destination: None,
            airline: None,
            model: None,
        }]);
        assert!(table.lookup("RYR456").is_none());
    }
}
