use std::io::Write;
use crate::error::Result;
use crate::models::RatingSnapshot;

/// Writes snapshots as one JSON document each, newline terminated.
pub struct JsonWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn write_snapshot(&mut self, snapshot: &RatingSnapshot) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, snapshot)?;
        } else {
            serde_json::to_writer(&mut self.writer, snapshot)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
