use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusLevel, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    view_mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, view_mode: ViewMode) -> Self {
        Self { format, view_mode }
    }

    /// Write `result` to `out`; split from `render` so the layout is testable.
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
            return Ok(());
        }

        // Minimal output is for scripts: content only.
        if self.view_mode == ViewMode::Minimal {
            write!(out, "{}", result.content.create_view(self.view_mode))?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            let label = match badge.level {
                StatusLevel::Error => badge.label.red().bold().to_string(),
                _ => badge.label.bold().to_string(),
            };
            writeln!(out, "{} {}", badge.icon(), label)?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.view_mode))?;

        if !result.suggestions.is_empty() {
            writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", cmd.cyan())?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}
