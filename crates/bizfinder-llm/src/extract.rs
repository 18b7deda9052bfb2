//! Turns the model's numbered free-text listing into business records.
//!
//! The reply is split on the numbered-entry delimiter (`\d+\.\s+`); text
//! before the first delimiter is preamble and ignored. Inside each entry the
//! first non-empty line is the name and every later line carrying one of the
//! four field labels sets that field. Malformed lines are skipped; nothing in
//! here fails.

use std::sync::LazyLock;

use bizfinder_core::{BusinessRecord, Coordinates, FieldPrecedence, UNKNOWN_NAME};
use regex::Regex;

static ENTRY_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Type,
    Location,
    Rating,
    Coordinates,
}

/// Labels in the order they are tested against a line. A line holding more
/// than one label belongs to the first listed here.
const LABELS: [(&str, Field); 4] = [
    ("Type:", Field::Type),
    ("Location:", Field::Location),
    ("Rating:", Field::Rating),
    ("Coordinates:", Field::Coordinates),
];

/// Parses completion replies into [`BusinessRecord`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordExtractor {
    precedence: FieldPrecedence,
}

impl RecordExtractor {
    #[must_use]
    pub fn new(precedence: FieldPrecedence) -> Self {
        Self { precedence }
    }

    #[must_use]
    pub fn precedence(&self) -> FieldPrecedence {
        self.precedence
    }

    /// Extracts every retainable record from `reply`, in reply order.
    ///
    /// An empty reply, a reply without numbered entries, or entries with no
    /// name and no place all produce an empty vector.
    #[must_use]
    pub fn extract(&self, reply: &str) -> Vec<BusinessRecord> {
        let entries: Vec<&str> = ENTRY_DELIMITER.split(reply).skip(1).collect();

        if entries.is_empty() {
            if !reply.trim().is_empty() {
                tracing::warn!("no numbered business entries found in completion reply");
            }
            return Vec::new();
        }

        let total = entries.len();
        let records: Vec<BusinessRecord> = entries
            .into_iter()
            .map(|entry| self.parse_entry(entry))
            .filter(BusinessRecord::is_retainable)
            .collect();

        tracing::debug!(
            entries = total,
            kept = records.len(),
            dropped = total - records.len(),
            "extracted business records"
        );
        records
    }

    fn parse_entry(&self, entry: &str) -> BusinessRecord {
        let mut lines = entry.lines().map(str::trim);
        let name = lines
            .by_ref()
            .find(|line| !line.is_empty())
            .unwrap_or(UNKNOWN_NAME);

        let mut record = BusinessRecord::named(name);
        for line in lines {
            if let Some((field, value)) = classify(line) {
                self.apply(&mut record, field, value);
            }
        }
        record
    }

    fn apply(&self, record: &mut BusinessRecord, field: Field, value: &str) {
        let keep_existing = self.precedence == FieldPrecedence::FirstWins;

        let slot = match field {
            Field::Type => &mut record.business_type,
            Field::Location => &mut record.location,
            Field::Rating => &mut record.rating,
            Field::Coordinates => {
                // An unparseable pair never clears a good one.
                if let Some(coords) = Coordinates::parse_pair(value) {
                    if !(keep_existing && record.coordinates.is_some()) {
                        record.coordinates = Some(coords);
                    }
                }
                return;
            }
        };

        if keep_existing && !slot.is_empty() {
            return;
        }
        value.clone_into(slot);
    }
}

/// Matches `line` against the field labels and returns the text after its
/// first colon, trimmed.
fn classify(line: &str) -> Option<(Field, &str)> {
    let (_, field) = LABELS.iter().find(|(label, _)| line.contains(label))?;
    let (_, value) = line.split_once(':')?;
    Some((*field, value.trim()))
}

/// Extracts records with the default last-wins precedence.
#[must_use]
pub fn extract(reply: &str) -> Vec<BusinessRecord> {
    RecordExtractor::default().extract(reply)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
