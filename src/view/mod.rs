//! Plain-text rendering of the editor and the gallery
//!
//! ```text
//!  [MD]  LG   XL
//! Breakpoint: MD | Columns: 4 | Rows: 4 | Cells: 16 | Filled: 1
//!   1 | +            | img:a.png    | +            | +            |
//! ```

pub mod helpers;

use std::fmt::Write;

use crate::gallery::Gallery;
use crate::model::{AppModel, Breakpoint, ContentKind, Grid, ModalState, Tile, TileContent};

use helpers::{fit, single_line, truncate, PREVIEW_CHARS};

/// Width of one rendered cell in characters
pub const CELL_WIDTH: usize = 12;

/// Render the whole editor: tabs, stats, grid, open dialog and status line
pub fn render(model: &AppModel) -> String {
    let mut out = String::new();
    out.push_str(&render_tabs(model.active));
    out.push('\n');
    out.push_str(&render_stats(model));
    out.push('\n');
    out.push_str(&render_grid(model.grid()));
    if let Some(modal) = render_modal(model) {
        out.push_str(&modal);
    }
    if !model.ui.status_message.is_empty() {
        let _ = writeln!(out, "-- {}", model.ui.status_message);
    }
    out
}

/// Breakpoint tab strip, active one bracketed
pub fn render_tabs(active: Breakpoint) -> String {
    Breakpoint::ALL
        .iter()
        .map(|&bp| {
            let name = bp.as_str().to_uppercase();
            if bp == active {
                format!("[{}]", name)
            } else {
                format!(" {} ", name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_stats(model: &AppModel) -> String {
    let grid = model.grid();
    format!(
        "Breakpoint: {} | Columns: {} | Rows: {} | Cells: {} | Filled: {}",
        model.active.as_str().to_uppercase(),
        grid.column_count(),
        grid.row_count(),
        grid.cell_count(),
        grid.filled_count()
    )
}

/// Numbered rows, one cell per tile
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for (index, row) in grid.rows().iter().enumerate() {
        let _ = write!(out, "{:>3} |", index + 1);
        for tile in row {
            let _ = write!(out, " {} |", fit(&cell_label(tile), CELL_WIDTH));
        }
        out.push('\n');
    }
    out
}

/// Short label for a tile: `+` for empty, `img:<url>`, or quoted text
pub fn cell_label(tile: &Tile) -> String {
    match &tile.content {
        TileContent::Empty => "+".to_string(),
        TileContent::Image(url) => format!("img:{}", url),
        TileContent::Text(body) => format!("\"{}\"", single_line(body)),
    }
}

/// Render the active dialog, if any
pub fn render_modal(model: &AppModel) -> Option<String> {
    let mut out = String::new();
    match model.ui.active_modal.as_ref()? {
        ModalState::ContentEditor(state) => {
            let _ = writeln!(out, "== {} ==", state.title());
            if state.can_change_kind() {
                let _ = writeln!(
                    out,
                    "type: {}",
                    ["image", "text"]
                        .iter()
                        .map(|k| if *k == state.kind.as_str() {
                            format!("[{}]", k)
                        } else {
                            k.to_string()
                        })
                        .collect::<Vec<_>>()
                        .join(" ")
                );
            } else {
                let _ = writeln!(out, "type: {}", state.kind);
            }
            let label = match state.kind {
                ContentKind::Image => "url",
                ContentKind::Text => "text",
            };
            let _ = writeln!(out, "{}: {}", label, state.input);
            let _ = writeln!(
                out,
                "{}",
                if state.can_save() {
                    "[save]"
                } else {
                    "[save disabled]"
                }
            );
        }
        ModalState::SwapPicker(state) => {
            let _ = writeln!(out, "== Choose a tile to swap ==");
            let candidates = model.grid().swap_candidates(&state.source_id);
            if candidates.is_empty() {
                let _ = writeln!(out, "(no other tiles to swap)");
            }
            for tile in candidates {
                let marker = if state.selected.as_ref() == Some(&tile.id) {
                    '*'
                } else {
                    ' '
                };
                let preview = match &tile.content {
                    TileContent::Text(body) => {
                        format!("\"{}\"", truncate(&single_line(body), PREVIEW_CHARS))
                    }
                    _ => cell_label(tile),
                };
                let _ = writeln!(out, "  {} {}  {}", marker, tile.id, preview);
            }
        }
    }
    Some(out)
}

/// Gallery rows of `columns` cells; placeholders render blank
pub fn render_gallery(gallery: &Gallery, columns: usize) -> String {
    let mut out = String::new();
    for row in gallery.rows(columns) {
        let cells: Vec<String> = row
            .iter()
            .map(|item| {
                let label = if let Some(url) = &item.image_url {
                    format!("img:{}", url)
                } else if let Some(text) = &item.text {
                    single_line(text)
                } else {
                    String::new()
                };
                fit(&label, CELL_WIDTH)
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::model::{ContentModalState, EditIntent};

    fn model() -> AppModel {
        AppModel::new(GridConfig::default()).unwrap()
    }

    #[test]
    fn test_tabs_mark_active() {
        assert_eq!(render_tabs(Breakpoint::Lg), " MD  [LG]  XL ");
    }

    #[test]
    fn test_stats_line() {
        assert_eq!(
            render_stats(&model()),
            "Breakpoint: MD | Columns: 4 | Rows: 4 | Cells: 16 | Filled: 0"
        );
    }

    #[test]
    fn test_grid_has_numbered_rows() {
        let rendered = render_grid(model().grid());
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  1 |"));
        assert!(lines[3].starts_with("  4 |"));
        assert_eq!(lines[0].matches('+').count(), 4);
    }

    #[test]
    fn test_cell_labels() {
        assert_eq!(cell_label(&Tile::image("a", "x.png")), "img:x.png");
        assert_eq!(cell_label(&Tile::text("b", "two\nlines")), "\"two lines\"");
    }

    #[test]
    fn test_content_modal_render() {
        let mut m = model();
        let id = m.grid().rows()[0][0].id.clone();
        m.ui.open_modal(ModalState::ContentEditor(ContentModalState::from_intent(
            id,
            EditIntent::Create,
        )));
        let out = render_modal(&m).unwrap();
        assert!(out.contains("== Add content =="));
        assert!(out.contains("type: [image] text"));
        assert!(out.contains("[save disabled]"));
        m.ui.content_modal_mut().unwrap().set_kind(ContentKind::Text);
        assert!(render_modal(&m).unwrap().contains("text: "));
    }
}
