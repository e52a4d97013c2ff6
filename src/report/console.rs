use std::io::Write;

use colored::Colorize;
use thiserror::Error;

use super::transcript::{Section, Transcript};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait Renderer {
    fn render_section(&self, out: &mut dyn Write, section: &Section) -> Result<(), RenderError>;

    fn render(&self, out: &mut dyn Write, transcript: &Transcript) -> Result<(), RenderError> {
        for section in &transcript.sections {
            self.render_section(out, section)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Bold headings followed by the result as compact JSON on its own line.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render_section(&self, out: &mut dyn Write, section: &Section) -> Result<(), RenderError> {
        if let Some(group) = &section.group {
            writeln!(out, "{}", group.as_str().bold())?;
        }
        writeln!(out, "{}", section.label.as_str().bold())?;

        let body = serde_json::to_string(&section.result)?;
        writeln!(out, "{body}")?;

        tracing::trace!(label = %section.label, bytes = body.len(), "rendered section");
        Ok(())
    }
}
