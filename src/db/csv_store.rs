//! CSV storage backend.
//!
//! One headerless row per task:
//!
//! ```text
//! id,description,is_completed,created_at,due_date
//! 0b6f3c1e-...,buy milk,false,2025-03-01T09:12:44.120Z,2025-03-02T09:12:44.120Z
//! ```
//!
//! Rows that do not have exactly five columns, that are not valid UTF-8, or
//! whose values cannot be parsed are dropped on read with a warning. They
//! disappear from the file on the next write. I/O errors still fail the read.

use super::file_store::{FileRepository, TaskFormat};
use crate::libs::error::StorageError;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_warning;
use chrono::{DateTime, SecondsFormat, Utc};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Write};
use tracing::warn;
use uuid::Uuid;

pub const CSV_FILE_NAME: &str = "tasks.csv";

const COLUMNS: usize = 5;

pub type CsvRepository = FileRepository<CsvFormat>;

#[derive(Debug, Default)]
pub struct CsvFormat;

impl TaskFormat for CsvFormat {
    const NAME: &'static str = "csv";
    const EMPTY: &'static [u8] = b"";

    fn decode(&self, reader: BufReader<File>) -> Result<Vec<Task>, StorageError> {
        let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).from_reader(reader);

        let mut tasks = Vec::new();
        let mut skipped = 0;
        for (line, record) in rdr.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!(line = line + 1, error = %e, "skipping undecodable CSV row");
                    skipped += 1;
                    continue;
                }
            };

            match parse_record(&record) {
                Some(task) => tasks.push(task),
                None => {
                    warn!(line = line + 1, columns = record.len(), "skipping malformed CSV row");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            msg_warning!(Message::CsvRowsSkipped(skipped));
        }
        Ok(tasks)
    }

    fn encode(&self, writer: &mut dyn Write, tasks: &[Task]) -> Result<(), StorageError> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        for task in tasks {
            wtr.write_record([
                task.id_string(),
                task.description.clone(),
                task.is_completed.to_string(),
                format_timestamp(&task.created_at),
                format_timestamp(&task.due_date),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn parse_record(record: &StringRecord) -> Option<Task> {
    if record.len() != COLUMNS {
        return None;
    }

    Some(Task {
        id: Some(Uuid::parse_str(&record[0]).ok()?),
        description: record[1].to_string(),
        is_completed: record[2].trim().parse().ok()?,
        created_at: parse_timestamp(&record[3])?,
        due_date: parse_timestamp(&record[4])?,
    })
}

fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim()).ok().map(|t| t.with_timezone(&Utc))
}
