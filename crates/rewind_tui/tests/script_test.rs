//! Tests for script mode.

use rewind_tictactoe::Intent;
use rewind_tui::{load_script, render_text, run_script};
use std::io::Write;

#[test]
fn test_text_report_for_win() {
    let intents: Vec<Intent> = ["move 0", "move 3", "move 1", "move 4", "move 2"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let report = run_script(&intents, true);
    let text = render_text(&report);

    assert!(text.starts_with("[X]|[X]|[X]\n---+---+---\n O | O |   \n"));
    assert!(text.contains("Winner: X\nOrder ^\n"));
    assert!(text.contains("> Move #5: X @ (3, 1)\n"));
    assert!(!text.contains("rejected"));
}

#[test]
fn test_script_file_branches_history() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"intent":"select_cell","index":0}},{{"intent":"select_cell","index":4}},{{"intent":"jump_to","step":0}},{{"intent":"select_cell","index":1}}]"#
    )
    .unwrap();

    let intents = load_script(file.path()).unwrap();
    let report = run_script(&intents, true);

    assert_eq!(report.view.moves().len(), 2);
    assert_eq!(report.view.moves()[1].label(), "Move #1: X @ (2, 1)");
    assert_eq!(report.status, "Next player: O");
}

#[test]
fn test_json_report_shape() {
    let report = run_script(&[Intent::ToggleOrder], true);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["order_label"], "Order v");
    assert_eq!(json["status"], "Next player: X");
    assert_eq!(json["highlights"].as_array().unwrap().len(), 9);
}

#[test]
fn test_bad_script_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "move 4").unwrap();
    assert!(load_script(file.path()).is_err());
}
