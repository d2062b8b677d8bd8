use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pipeline::StageOutput;
use crate::slug::SlugError;

use super::OutputWriter;

/// Human-readable writer: one slug per line
pub struct PlainWriter<W: Write> {
    out: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for PlainWriter<W> {
    fn write_slug(&mut self, _input: &str, slug: &str) -> Result<()> {
        writeln!(self.out, "{}", slug).context("Failed to write slug")
    }

    fn write_trace(&mut self, input: &str, stages: &[StageOutput]) -> Result<()> {
        writeln!(self.out, "input\t{}", input).context("Failed to write trace")?;
        for output in stages {
            writeln!(self.out, "{}\t{}", output.stage, output.text)
                .context("Failed to write trace")?;
        }
        Ok(())
    }

    fn write_check(&mut self, candidate: &str, result: &Result<(), SlugError>) -> Result<()> {
        let written = match result {
            Ok(()) => writeln!(self.out, "{}\tok", candidate),
            Err(e) => writeln!(self.out, "{}\tinvalid: {}", candidate, e),
        };
        written.context("Failed to write check result")
    }
}

#[derive(Serialize)]
struct SlugRecord<'a> {
    input: &'a str,
    slug: &'a str,
}

#[derive(Serialize)]
struct TraceRecord<'a> {
    input: &'a str,
    stages: &'a [StageOutput],
}

#[derive(Serialize)]
struct CheckRecord<'a> {
    candidate: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Machine-readable writer: one JSON object per line
pub struct JsonWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, record).context("Failed to serialize record")?;
        writeln!(self.out).context("Failed to write record")
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_slug(&mut self, input: &str, slug: &str) -> Result<()> {
        self.write_record(&SlugRecord { input, slug })
    }

    fn write_trace(&mut self, input: &str, stages: &[StageOutput]) -> Result<()> {
        self.write_record(&TraceRecord { input, stages })
    }

    fn write_check(&mut self, candidate: &str, result: &Result<(), SlugError>) -> Result<()> {
        self.write_record(&CheckRecord {
            candidate,
            valid: result.is_ok(),
            error: result.as_ref().err().map(|e| e.to_string()),
        })
    }
}
