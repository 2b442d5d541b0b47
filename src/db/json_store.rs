//! JSON storage backend: the whole store is one pretty-printed array.

use super::file_store::{FileRepository, TaskFormat};
use crate::libs::error::StorageError;
use crate::libs::task::Task;
use std::fs::File;
use std::io::{BufReader, Read, Write};

pub const JSON_FILE_NAME: &str = "tasks.json";

pub type JsonRepository = FileRepository<JsonFormat>;

#[derive(Debug, Default)]
pub struct JsonFormat;

impl TaskFormat for JsonFormat {
    const NAME: &'static str = "json";
    const EMPTY: &'static [u8] = b"[]\n";

    fn decode(&self, mut reader: BufReader<File>) -> Result<Vec<Task>, StorageError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        // An empty or whitespace-only file reads as an empty store.
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn encode(&self, writer: &mut dyn Write, tasks: &[Task]) -> Result<(), StorageError> {
        serde_json::to_writer_pretty(&mut *writer, tasks)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
