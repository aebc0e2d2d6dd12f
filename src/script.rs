//! Line-oriented command scripts for driving the editor headlessly
//!
//! One command per line; blank lines and `#` comments are skipped. Cell
//! positions are 1-based `row col`, as shown by the text render.
//!
//! ```text
//! set 1 2 image a.png
//! set 2 1 text hi
//! delete 1 2
//! export
//! ```
//!
//! Positions are resolved to tile ids against the current state right
//! before dispatch, so a command always refers to what is on screen.

use thiserror::Error;

use crate::messages::{AppMsg, GridMsg, ModalMsg, Msg};
use crate::model::{AppModel, Breakpoint, CellPosition, ContentKind, TileId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' is missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a valid position (expected a number starting at 1)")]
    InvalidPosition(String),

    #[error("unknown content kind '{0}' (expected image or text)")]
    UnknownKind(String),

    #[error("{0}")]
    UnknownBreakpoint(String),

    #[error("no tile at row {row}, column {col}")]
    NoTile { row: usize, col: usize },
}

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Breakpoint(Breakpoint),
    Edit(CellPosition),
    Kind(ContentKind),
    Input(String),
    Save,
    Set {
        cell: CellPosition,
        kind: ContentKind,
        content: String,
    },
    Delete(CellPosition),
    Swap(CellPosition),
    Pick(CellPosition),
    Confirm,
    Close,
    SwapWith(CellPosition, CellPosition),
    Row,
    Export,
    Show,
    Reset,
    Quit,
}

/// Parse one line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let cmd = match word.to_ascii_lowercase().as_str() {
        "bp" | "breakpoint" => {
            let name = args.next().ok_or(ScriptError::MissingArgument {
                command: "bp",
                what: "a breakpoint",
            })?;
            ScriptCommand::Breakpoint(name.parse().map_err(ScriptError::UnknownBreakpoint)?)
        }
        "edit" => ScriptCommand::Edit(parse_cell(&mut args, "edit")?),
        "kind" => ScriptCommand::Kind(parse_kind(&mut args, "kind")?),
        "input" => ScriptCommand::Input(rest.to_string()),
        "save" => ScriptCommand::Save,
        "set" => {
            let cell = parse_cell(&mut args, "set")?;
            let kind = parse_kind(&mut args, "set")?;
            let content = args.collect::<Vec<_>>().join(" ");
            if content.is_empty() {
                return Err(ScriptError::MissingArgument {
                    command: "set",
                    what: "content",
                });
            }
            ScriptCommand::Set {
                cell,
                kind,
                content,
            }
        }
        "delete" | "del" => ScriptCommand::Delete(parse_cell(&mut args, "delete")?),
        "swap" => ScriptCommand::Swap(parse_cell(&mut args, "swap")?),
        "pick" => ScriptCommand::Pick(parse_cell(&mut args, "pick")?),
        "confirm" => ScriptCommand::Confirm,
        "close" | "cancel" => ScriptCommand::Close,
        "swapwith" => {
            let a = parse_cell(&mut args, "swapwith")?;
            let b = parse_cell(&mut args, "swapwith")?;
            ScriptCommand::SwapWith(a, b)
        }
        "row" | "addrow" => ScriptCommand::Row,
        "export" => ScriptCommand::Export,
        "show" => ScriptCommand::Show,
        "reset" => ScriptCommand::Reset,
        "quit" | "exit" => ScriptCommand::Quit,
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };
    Ok(Some(cmd))
}

fn parse_cell<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<CellPosition, ScriptError> {
    let row = parse_index(args.next(), command, "a row")?;
    let col = parse_index(args.next(), command, "a column")?;
    Ok(CellPosition::new(row, col))
}

/// 1-based number to 0-based index
fn parse_index(
    arg: Option<&str>,
    command: &'static str,
    what: &'static str,
) -> Result<usize, ScriptError> {
    let arg = arg.ok_or(ScriptError::MissingArgument { command, what })?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ScriptError::InvalidPosition(arg.to_string())),
    }
}

fn parse_kind<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<ContentKind, ScriptError> {
    let arg = args.next().ok_or(ScriptError::MissingArgument {
        command,
        what: "a content kind",
    })?;
    ContentKind::parse(arg).ok_or_else(|| ScriptError::UnknownKind(arg.to_string()))
}

impl ScriptCommand {
    /// Translate into messages against the current model
    ///
    /// `Show` yields no messages; the driver renders instead.
    pub fn to_messages(&self, model: &AppModel) -> Result<Vec<Msg>, ScriptError> {
        let msgs = match self {
            ScriptCommand::Breakpoint(bp) => vec![Msg::Grid(GridMsg::SelectBreakpoint(*bp))],
            ScriptCommand::Edit(cell) => vec![Msg::Grid(GridMsg::StartEdit(tile_at(model, *cell)?))],
            ScriptCommand::Kind(kind) => vec![Msg::Modal(ModalMsg::SetKind(*kind))],
            ScriptCommand::Input(text) => vec![Msg::Modal(ModalMsg::SetInput(text.clone()))],
            ScriptCommand::Save => vec![Msg::Modal(ModalMsg::Save)],
            // Same path as the dialog, so a filled tile keeps its kind
            ScriptCommand::Set {
                cell,
                kind,
                content,
            } => vec![
                Msg::Grid(GridMsg::StartEdit(tile_at(model, *cell)?)),
                Msg::Modal(ModalMsg::SetKind(*kind)),
                Msg::Modal(ModalMsg::SetInput(content.clone())),
                Msg::Modal(ModalMsg::Save),
            ],
            ScriptCommand::Delete(cell) => vec![Msg::Grid(GridMsg::Delete(tile_at(model, *cell)?))],
            ScriptCommand::Swap(cell) => vec![Msg::Grid(GridMsg::StartSwap(tile_at(model, *cell)?))],
            ScriptCommand::Pick(cell) => {
                vec![Msg::Modal(ModalMsg::ToggleSwapTarget(tile_at(model, *cell)?))]
            }
            ScriptCommand::Confirm => vec![Msg::Modal(ModalMsg::ConfirmSwap)],
            ScriptCommand::Close => vec![Msg::Modal(ModalMsg::Close)],
            ScriptCommand::SwapWith(a, b) => vec![Msg::Grid(GridMsg::Swap {
                source: tile_at(model, *a)?,
                target: tile_at(model, *b)?,
            })],
            ScriptCommand::Row => vec![Msg::Grid(GridMsg::AppendRow)],
            ScriptCommand::Export => vec![Msg::Grid(GridMsg::Export)],
            ScriptCommand::Show => vec![],
            ScriptCommand::Reset => vec![Msg::App(AppMsg::Reset)],
            ScriptCommand::Quit => vec![Msg::App(AppMsg::Quit)],
        };
        Ok(msgs)
    }
}

fn tile_at(model: &AppModel, cell: CellPosition) -> Result<TileId, ScriptError> {
    model
        .grid()
        .get(cell)
        .map(|t| t.id.clone())
        .ok_or(ScriptError::NoTile {
            row: cell.row + 1,
            col: cell.col + 1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn test_blank_and_comment_lines_skip() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   # note"), Ok(None));
    }

    #[test]
    fn test_parse_set_keeps_spaces_between_words() {
        let cmd = parse_line("set 2 1 text hello   world").unwrap().unwrap();
        assert_eq!(
            cmd,
            ScriptCommand::Set {
                cell: CellPosition::new(1, 0),
                kind: ContentKind::Text,
                content: "hello world".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_input_keeps_raw_rest() {
        let cmd = parse_line("input  a  b ").unwrap().unwrap();
        assert_eq!(cmd, ScriptCommand::Input("a  b".to_string()));
    }

    #[test]
    fn test_zero_position_rejected() {
        assert_eq!(
            parse_line("delete 0 1"),
            Err(ScriptError::InvalidPosition("0".to_string()))
        );
    }

    #[test]
    fn test_missing_column() {
        assert_eq!(
            parse_line("edit 1"),
            Err(ScriptError::MissingArgument {
                command: "edit",
                what: "a column"
            })
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line("explode"),
            Err(ScriptError::UnknownCommand("explode".to_string()))
        );
    }

    #[test]
    fn test_breakpoint_parse_error() {
        assert!(matches!(
            parse_line("bp sm"),
            Err(ScriptError::UnknownBreakpoint(_))
        ));
    }

    #[test]
    fn test_positions_resolve_to_ids() {
        let model = AppModel::new(GridConfig::default()).unwrap();
        let expected = model.grid().rows()[1][2].id.clone();
        let msgs = parse_line("delete 2 3")
            .unwrap()
            .unwrap()
            .to_messages(&model)
            .unwrap();
        assert_eq!(msgs, vec![Msg::Grid(GridMsg::Delete(expected))]);
    }

    #[test]
    fn test_set_expands_to_dialog_messages() {
        let model = AppModel::new(GridConfig::default()).unwrap();
        let id = model.grid().rows()[0][0].id.clone();
        let msgs = parse_line("set 1 1 text hi")
            .unwrap()
            .unwrap()
            .to_messages(&model)
            .unwrap();
        assert_eq!(
            msgs,
            vec![
                Msg::Grid(GridMsg::StartEdit(id)),
                Msg::Modal(ModalMsg::SetKind(ContentKind::Text)),
                Msg::Modal(ModalMsg::SetInput("hi".to_string())),
                Msg::Modal(ModalMsg::Save),
            ]
        );
    }

    #[test]
    fn test_out_of_range_position() {
        let model = AppModel::new(GridConfig::default()).unwrap();
        let err = parse_line("delete 9 1")
            .unwrap()
            .unwrap()
            .to_messages(&model)
            .unwrap_err();
        assert_eq!(err, ScriptError::NoTile { row: 9, col: 1 });
    }
}
