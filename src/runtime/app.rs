use std::io::{BufRead, Write};

use anyhow::Result;

use crate::commands::Cmd;
use crate::export;
use crate::gallery::Gallery;
use crate::model::AppModel;
use crate::script::{parse_line, ScriptCommand};
use crate::update::update;
use crate::view;

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A scripted editing session
///
/// Exports and renders go to `out`; parse and resolution errors go to `diag`
/// so `out` stays machine readable.
pub struct App {
    model: AppModel,
    render: bool,
}

impl App {
    pub fn new(model: AppModel, render: bool) -> Self {
        Self { model, render }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    /// Run every line of `input` until EOF or `quit`
    pub fn run<R: BufRead, W: Write, D: Write>(
        &mut self,
        input: R,
        out: &mut W,
        diag: &mut D,
    ) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if self.run_line(index + 1, &line, out, diag)? == Flow::Quit {
                tracing::debug!(line = index + 1, "quit requested");
                break;
            }
        }
        Ok(())
    }

    /// Parse and apply a single script line
    pub fn run_line<W: Write, D: Write>(
        &mut self,
        line_no: usize,
        line: &str,
        out: &mut W,
        diag: &mut D,
    ) -> Result<Flow> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                tracing::warn!(line = line_no, "{}", e);
                writeln!(diag, "line {}: {}", line_no, e)?;
                return Ok(Flow::Continue);
            }
        };

        if command == ScriptCommand::Show {
            write!(out, "{}", view::render(&self.model))?;
            return Ok(Flow::Continue);
        }

        let msgs = match command.to_messages(&self.model) {
            Ok(msgs) => msgs,
            Err(e) => {
                tracing::warn!(line = line_no, "{}", e);
                writeln!(diag, "line {}: {}", line_no, e)?;
                return Ok(Flow::Continue);
            }
        };

        // One render per line, however many messages it expands to
        let mut flow = Flow::Continue;
        let mut redraw = false;
        for msg in msgs {
            let cmd = Cmd::from(update(&mut self.model, msg));
            redraw |= cmd.needs_redraw();
            if self.perform(cmd, out)? == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        if redraw && self.render {
            write!(out, "{}", view::render(&self.model))?;
        }
        Ok(flow)
    }

    /// Write the gallery of the active breakpoint, empty cells left blank
    pub fn write_gallery<W: Write>(&self, out: &mut W) -> Result<()> {
        let grid = self.model.grid();
        let gallery = Gallery::from_grid(grid);
        write!(out, "{}", view::render_gallery(&gallery, grid.column_count()))?;
        Ok(())
    }

    fn perform<W: Write>(&self, cmd: Cmd, out: &mut W) -> Result<Flow> {
        let mut flow = Flow::Continue;
        for leaf in cmd.into_leaves() {
            match leaf {
                Cmd::Export { records, .. } => {
                    writeln!(out, "{}", export::to_json(&records)?)?;
                }
                Cmd::Quit => flow = Flow::Quit,
                Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
            }
        }
        Ok(flow)
    }
}
