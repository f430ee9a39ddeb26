use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Game;
use crate::stage::Stage;

/// Complete record of one deal: seats, hole cards, board, and outcome.
/// Serialized to JSONL format for deal history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    /// Unique identifier for this record (format: YYYYMMDD-NNNNNN)
    pub deal_id: String,
    /// The collaborator-supplied game identifier
    pub game_id: String,
    /// RNG seed used for the shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    /// Number of seats
    pub players: usize,
    /// Stage the deal had reached when recorded
    pub stage: Stage,
    /// Hole cards per seat, as display strings
    pub hands: Vec<Vec<String>>,
    /// Community cards revealed (up to 5)
    pub board: Vec<Card>,
    /// Seats tied for the strongest score, if the deal was evaluated
    #[serde(default)]
    pub winners: Option<Vec<usize>>,
    /// Timestamp when the deal was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_deal_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Deal history sink: appends [`DealRecord`]s to a file, one JSON object
/// per line, assigning sequential identifiers keyed to the date the
/// logger was opened.
pub struct DealLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl DealLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        Ok(Self {
            writer: Some(BufWriter::new(File::create(path)?)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that sequences identifiers without a backing file.
    pub fn with_date(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_deal_id(&self.date, self.seq)
    }

    /// Records a game as it stands: assigns the next deal identifier,
    /// builds the record from live state, and appends it. Returns the
    /// identifier the record was stored under.
    pub fn append(
        &mut self,
        game: &Game,
        winners: Option<Vec<usize>>,
    ) -> std::io::Result<String> {
        let deal_id = self.next_id();
        let record = game.to_record(deal_id.clone(), winners);
        self.write(&record)?;
        Ok(deal_id)
    }

    /// Writes one record as a JSON line, stamping `ts` when absent.
    pub fn write(&mut self, record: &DealRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
