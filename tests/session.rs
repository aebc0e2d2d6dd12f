//! Scripted session tests
//!
//! Drive the runtime with whole scripts, as the `tilegrid` binary does.

mod common;

use common::{example_model, test_model};

use tilegrid::model::{AppModel, Breakpoint, CellPosition, Tile};
use tilegrid::runtime::App;

fn run_script(model: AppModel, script: &str) -> (AppModel, String, String) {
    let mut app = App::new(model, false);
    let mut out = Vec::new();
    let mut diag = Vec::new();
    app.run(script.as_bytes(), &mut out, &mut diag).unwrap();
    (
        app.into_model(),
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

#[test]
fn test_delete_then_export_scenario() {
    let (model, out, diag) = run_script(example_model(), "delete 1 2\nexport\n");

    assert!(diag.is_empty());
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json, serde_json::json!([{ "id": "3", "text": "hi" }]));
    assert!(model.grid().rows()[0][1].is_empty());
}

#[test]
fn test_dialog_commands_fill_and_swap() {
    let script = "\
# add an image through the dialog
edit 1 1
kind image
input cat.png
save

set 1 2 text hello world
swap 1 1
pick 1 2
confirm
export
";
    let (_, out, diag) = run_script(test_model(), script);

    assert!(diag.is_empty(), "unexpected diagnostics: {diag}");
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json[0]["text"], "hello world");
    assert_eq!(json[1]["imageUrl"], "cat.png");
}

#[test]
fn test_export_per_breakpoint() {
    let script = "\
set 1 1 text md only
bp xl
set 1 8 image wide.png
export
bp md
export
";
    let (model, out, _) = run_script(test_model(), script);

    let arrays: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&out)
        .into_iter::<serde_json::Value>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(arrays.len(), 2);
    assert_eq!(arrays[0][0]["imageUrl"], "wide.png");
    assert_eq!(arrays[1][0]["text"], "md only");
    assert_eq!(model.active, Breakpoint::Md);
}

#[test]
fn test_bad_lines_are_reported_with_line_numbers() {
    let script = "\
set 1 1 text ok
set 9 9 text nowhere
kind banana
export
";
    let (_, out, diag) = run_script(test_model(), script);

    let lines: Vec<_> = diag.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("line 2: no tile at row 9, column 9"));
    assert!(lines[1].starts_with("line 3: unknown content kind 'banana'"));
    assert!(out.contains("\"text\": \"ok\""));
}

#[test]
fn test_set_on_filled_tile_keeps_its_kind() {
    let via_set = "set 1 1 text hi\nset 1 1 image a.png\n";
    let via_dialog = "set 1 1 text hi\nedit 1 1\nkind image\ninput a.png\nsave\n";

    let (set_model, _, _) = run_script(test_model(), via_set);
    let (dialog_model, _, _) = run_script(test_model(), via_dialog);

    let cell = CellPosition::new(0, 0);
    let tile = set_model.grid().get(cell).unwrap();
    assert_eq!(tile, &Tile::text(tile.id.clone(), "a.png"));
    assert_eq!(set_model.grid(), dialog_model.grid());
}

#[test]
fn test_set_replaces_open_dialog() {
    let script = "edit 2 2\ninput draft\nset 1 1 text hi\n";
    let (model, _, diag) = run_script(test_model(), script);

    assert!(diag.is_empty());
    assert!(!model.ui.has_modal());
    assert_eq!(model.grid().filled_count(), 1);
    assert!(model.grid().get(CellPosition::new(1, 1)).unwrap().is_empty());
}

#[test]
fn test_set_renders_once() {
    let mut app = App::new(test_model(), true);
    let mut out = Vec::new();
    let mut diag = Vec::new();
    app.run("set 1 1 text hi\n".as_bytes(), &mut out, &mut diag)
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Breakpoint: MD").count(), 1);
    assert!(!out.contains("== Add content =="));
}

#[test]
fn test_row_then_reset() {
    let (model, _, _) = run_script(test_model(), "row\nrow\nreset\n");

    assert_eq!(model.grid().row_count(), 4);
}

#[test]
fn test_render_after_changes() {
    let mut app = App::new(test_model(), true);
    let mut out = Vec::new();
    let mut diag = Vec::new();
    app.run("set 2 3 image a.png\n".as_bytes(), &mut out, &mut diag)
        .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("[MD]"));
    assert!(out.contains("Filled: 1"));
    assert!(out.contains("img:a.png"));
}

#[test]
fn test_gallery_keeps_layout() {
    let (model, _, _) = run_script(example_model(), "");
    let app = App::new(model, false);
    let mut out = Vec::new();

    app.write_gallery(&mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("img:a.png"));
    assert!(lines[1].starts_with("hi"));
}
