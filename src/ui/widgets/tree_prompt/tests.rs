use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use arctree::application::Command;
use arctree::domain::entities::{Listing, NodeIndex};
use arctree::domain::services::build_index;
use arctree::domain::value_objects::PathSeparator;

use super::prompt::PromptState;
use super::*;
use crate::ui::primitives::text::Painter;
use crate::ui::widgets::line_prompt::LinePrompt;

fn index(dirs: &[&str], files: &[&str]) -> NodeIndex {
    let listing = Listing::new(
        dirs.iter().map(|d| d.to_string()).collect(),
        files.iter().map(|f| f.to_string()).collect(),
    );
    build_index(&listing, PathSeparator::SLASH).unwrap()
}

fn sample() -> NodeIndex {
    index(&["a", "b"], &["a/x.txt", "a/y.txt", "b/z.txt"])
}

fn flat(count: usize) -> NodeIndex {
    let files: Vec<String> = (1..=count).map(|n| format!("f{}.txt", n)).collect();
    let refs: Vec<&str> = files.iter().map(String::as_str).collect();
    index(&[], &refs)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn press(prompt: &mut TreePrompt<'_>, keys: &[KeyEvent]) -> Option<PromptOutcome> {
    let mut last = None;
    for k in keys {
        last = prompt.handle_key(*k);
    }
    last
}

fn type_text(prompt: &mut TreePrompt<'_>, text: &str) {
    for c in text.chars() {
        prompt.handle_key(key(KeyCode::Char(c)));
    }
}

fn visible(prompt: &TreePrompt<'_>) -> Vec<String> {
    prompt
        .visible
        .iter()
        .map(|id| prompt.arena.node(*id).value.clone())
        .collect()
}

fn active(prompt: &TreePrompt<'_>) -> Option<String> {
    prompt
        .active_id()
        .map(|id| prompt.arena.node(id).value.clone())
}

/// Open `a` and `b` so every entry of [`sample`] is drawn
fn expand_all(prompt: &mut TreePrompt<'_>) {
    press(
        prompt,
        &[
            key(KeyCode::Right),
            key(KeyCode::Down),
            key(KeyCode::Down),
            key(KeyCode::Down),
            key(KeyCode::Right),
        ],
    );
}

fn search(prompt: &mut TreePrompt<'_>, query: &str) {
    prompt.handle_key(ctrl('f'));
    type_text(prompt, query);
    prompt.handle_key(key(KeyCode::Enter));
}

// === Navigation ===

#[test]
fn starts_with_surface_collapsed() {
    let index = sample();
    let prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    assert_eq!(visible(&prompt), vec!["a/", "b/"]);
    assert_eq!(prompt.state(), PromptState::Browsing);
}

#[test]
fn right_expands_and_left_collapses() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));

    press(&mut prompt, &[key(KeyCode::Right)]);
    assert_eq!(visible(&prompt), vec!["a/", "a/x.txt", "a/y.txt", "b/"]);

    press(&mut prompt, &[key(KeyCode::Left)]);
    assert_eq!(visible(&prompt), vec!["a/", "b/"]);
    assert_eq!(active(&prompt).as_deref(), Some("a/"));
}

#[test]
fn left_on_a_file_moves_to_its_directory() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));

    press(
        &mut prompt,
        &[key(KeyCode::Right), key(KeyCode::Down), key(KeyCode::Down)],
    );
    assert_eq!(active(&prompt).as_deref(), Some("a/y.txt"));

    press(&mut prompt, &[key(KeyCode::Left)]);
    assert_eq!(active(&prompt).as_deref(), Some("a/"));
    assert_eq!(visible(&prompt).len(), 4);
}

#[test]
fn up_wraps_only_when_looping() {
    let index = flat(3);
    let mut looping = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    press(&mut looping, &[key(KeyCode::Up)]);
    assert_eq!(active(&looping).as_deref(), Some("f3.txt"));

    let mut clamped = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).looping(false);
    press(&mut clamped, &[key(KeyCode::Up)]);
    assert_eq!(active(&clamped).as_deref(), Some("f1.txt"));
    press(&mut clamped, &[key(KeyCode::Down); 5]);
    assert_eq!(active(&clamped).as_deref(), Some("f3.txt"));
}

// === Search ===

#[test]
fn recursive_search_keeps_matches_and_their_ancestors() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    expand_all(&mut prompt);

    search(&mut prompt, "z");
    assert_eq!(visible(&prompt), vec!["b/", "b/z.txt"]);
    assert_eq!(active(&prompt).as_deref(), Some("b/"));
}

#[test]
fn recursive_search_does_not_expand_collapsed_ancestors() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));

    search(&mut prompt, "z");
    assert_eq!(visible(&prompt), vec!["b/"]);
}

#[test]
fn non_recursive_search_only_looks_through_open_directories() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index))
        .search_policy(SearchPolicy::NonRecursive);

    search(&mut prompt, "z");
    assert!(visible(&prompt).is_empty());

    let mut opened = TreePrompt::new("Pick", ArchiveTreeSource::new(&index))
        .search_policy(SearchPolicy::NonRecursive);
    expand_all(&mut opened);
    search(&mut opened, "z");
    assert_eq!(visible(&opened), vec!["b/", "b/z.txt"]);
}

#[test]
fn search_is_case_insensitive_and_literal() {
    let index = index(&[], &["Report.PDF", "r.p.txt", "rxp.txt"]);
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));

    search(&mut prompt, "report");
    assert_eq!(visible(&prompt), vec!["Report.PDF"]);

    search(&mut prompt, "r.p");
    assert_eq!(visible(&prompt), vec!["r.p.txt"]);
}

#[test]
fn empty_commit_restores_the_pre_search_view() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    press(&mut prompt, &[key(KeyCode::Right), key(KeyCode::Down)]);
    let before = visible(&prompt);
    let before_active = active(&prompt);

    prompt.handle_key(ctrl('f'));
    type_text(&mut prompt, "zz");
    press(&mut prompt, &[key(KeyCode::Backspace), key(KeyCode::Backspace)]);
    prompt.handle_key(key(KeyCode::Enter));

    assert_eq!(prompt.state(), PromptState::Browsing);
    assert_eq!(visible(&prompt), before);
    assert_eq!(active(&prompt), before_active);
    assert!(prompt.filter.is_none());
}

#[test]
fn escape_while_searching_keeps_the_committed_filter() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    expand_all(&mut prompt);
    search(&mut prompt, "z");
    press(&mut prompt, &[key(KeyCode::Down)]);

    prompt.handle_key(ctrl('f'));
    type_text(&mut prompt, "x");
    assert_eq!(prompt.state(), PromptState::Searching);
    prompt.handle_key(key(KeyCode::Esc));

    assert_eq!(prompt.state(), PromptState::Browsing);
    assert_eq!(visible(&prompt), vec!["b/", "b/z.txt"]);
    assert_eq!(active(&prompt).as_deref(), Some("b/z.txt"));
}

#[test]
fn escape_on_filtered_view_clears_the_filter_before_going_back() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    search(&mut prompt, "z");

    assert_eq!(prompt.handle_key(key(KeyCode::Esc)), None);
    assert_eq!(visible(&prompt), vec!["a/", "b/"]);
    assert_eq!(active(&prompt).as_deref(), Some("b/"));

    assert_eq!(
        prompt.handle_key(key(KeyCode::Esc)),
        Some(PromptOutcome::Cancelled(CancelReason::Back))
    );
    assert_eq!(prompt.state(), PromptState::Cancelled);
}

#[test]
fn space_is_part_of_the_query_while_searching() {
    let index = index(&[], &["my notes.txt", "notes.txt"]);
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).multiple();

    prompt.handle_key(ctrl('f'));
    type_text(&mut prompt, "y n");
    assert!(prompt.selection().is_empty());
    prompt.handle_key(key(KeyCode::Enter));

    assert_eq!(visible(&prompt), vec!["my notes.txt"]);
}

#[test]
fn quit_works_while_searching() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    prompt.handle_key(ctrl('f'));

    assert_eq!(
        prompt.handle_key(ctrl('q')),
        Some(PromptOutcome::Cancelled(CancelReason::Quit))
    );
}

// === Selection ===

#[test]
fn multi_select_answers_in_toggle_order() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).multiple();
    press(
        &mut prompt,
        &[
            key(KeyCode::Right),
            key(KeyCode::Down),
            key(KeyCode::Down),
            key(KeyCode::Char(' ')),
            key(KeyCode::Up),
            key(KeyCode::Char(' ')),
        ],
    );

    assert_eq!(
        prompt.handle_key(key(KeyCode::Enter)),
        Some(PromptOutcome::Answered(vec![
            "a/y.txt".to_string(),
            "a/x.txt".to_string()
        ]))
    );
}

#[test]
fn space_twice_deselects() {
    let index = flat(2);
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).multiple();
    press(&mut prompt, &[key(KeyCode::Char(' ')), key(KeyCode::Char(' '))]);
    assert!(prompt.selection().is_empty());

    assert_eq!(
        prompt.handle_key(key(KeyCode::Enter)),
        Some(PromptOutcome::Answered(Vec::new()))
    );
}

#[test]
fn toggling_outside_the_window_is_a_no_op() {
    let index = flat(5);
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index))
        .multiple()
        .page_size(2)
        .looping(false);

    assert!(!prompt.toggle_value("f5.txt"));
    assert!(prompt.selection().is_empty());

    assert!(prompt.toggle_value("f2.txt"));
    assert_eq!(prompt.selection(), &["f2.txt".to_string()]);
}

#[test]
fn filtered_out_entries_cannot_be_toggled() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).multiple();
    expand_all(&mut prompt);
    search(&mut prompt, "z");

    assert!(!prompt.toggle_value("a/x.txt"));
    assert!(prompt.toggle_value("b/z.txt"));
}

#[test]
fn single_select_validator_keeps_prompt_open() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).validator(|v| {
        if v.ends_with('/') {
            Err("Pick a file".to_string())
        } else {
            Ok(())
        }
    });

    assert_eq!(prompt.handle_key(key(KeyCode::Enter)), None);
    assert!(prompt.render().contains("Pick a file"));

    press(&mut prompt, &[key(KeyCode::Right), key(KeyCode::Down)]);
    assert!(!prompt.render().contains("Pick a file"));
    assert_eq!(
        prompt.handle_key(key(KeyCode::Enter)),
        Some(PromptOutcome::Answered(vec!["a/x.txt".to_string()]))
    );
    assert_eq!(prompt.state(), PromptState::Answered);
}

#[test]
fn shortcuts_return_the_command_and_selection() {
    let index = sample();
    let mut prompt = TreePrompt::new("Browse", ArchiveTreeSource::new(&index))
        .multiple()
        .keymap(KeyMap::browse());
    press(
        &mut prompt,
        &[key(KeyCode::Right), key(KeyCode::Down), key(KeyCode::Char(' '))],
    );

    assert_eq!(
        prompt.handle_key(key(KeyCode::Char('d'))),
        Some(PromptOutcome::Shortcut {
            command: Command::Delete,
            selection: vec!["a/x.txt".to_string()],
        })
    );
}

#[test]
fn shortcut_letters_are_ignored_without_a_browse_keymap() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    assert_eq!(prompt.handle_key(key(KeyCode::Char('d'))), None);
    assert_eq!(prompt.state(), PromptState::Browsing);
}

// === Pagination ===

#[test]
fn window_is_centered_on_the_active_line() {
    let index = flat(5);
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index))
        .page_size(3)
        .looping(false);
    press(&mut prompt, &[key(KeyCode::Down); 4]);

    let names: Vec<String> = prompt
        .window()
        .into_iter()
        .filter_map(|line| match line {
            prompt::Line::Node(id) => Some(prompt.arena.node(id).name.clone()),
            prompt::Line::Separator => None,
        })
        .collect();
    assert_eq!(names, vec!["f3.txt", "f4.txt", "f5.txt"]);
}

// === Filesystem pickers ===

fn names(prompt: &TreePrompt<'_>) -> Vec<String> {
    prompt
        .visible
        .iter()
        .map(|id| prompt.arena.node(*id).name.clone())
        .collect()
}

#[test]
fn right_on_parent_entry_reroots_the_picker() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("work")).unwrap();
    std::fs::write(dir.path().join("backup.7z"), "").unwrap();

    let source = FsTreeSource::new(dir.path().join("work")).climbable();
    let mut prompt = TreePrompt::new("Pick", source);
    assert_eq!(names(&prompt), vec![".."]);

    press(&mut prompt, &[key(KeyCode::Right)]);
    let shown = names(&prompt);
    assert!(shown.contains(&"work".to_string()), "got {:?}", shown);
    assert!(shown.contains(&"backup.7z".to_string()), "got {:?}", shown);
    assert_eq!(prompt.active, 0);
}

#[test]
fn enter_on_parent_entry_climbs_instead_of_answering() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("work")).unwrap();
    std::fs::write(dir.path().join("backup.7z"), "").unwrap();

    let source = FsTreeSource::new(dir.path().join("work")).climbable();
    let mut prompt = TreePrompt::new("Pick", source);
    assert_eq!(press(&mut prompt, &[key(KeyCode::Enter)]), None);
    assert_eq!(prompt.state(), PromptState::Browsing);
    assert!(names(&prompt).contains(&"backup.7z".to_string()));
}

#[test]
fn parent_entry_cannot_be_selected_and_selection_survives_climbing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("work")).unwrap();
    std::fs::write(dir.path().join("work").join("notes.txt"), "").unwrap();

    let source = FsTreeSource::new(dir.path().join("work")).climbable();
    let mut prompt = TreePrompt::new("Pick", source).multiple();
    press(&mut prompt, &[key(KeyCode::Char(' '))]);
    assert!(prompt.selection().is_empty());

    press(&mut prompt, &[key(KeyCode::Down), key(KeyCode::Char(' '))]);
    assert_eq!(prompt.selection().len(), 1);

    press(&mut prompt, &[key(KeyCode::Up), key(KeyCode::Right)]);
    assert_eq!(prompt.selection().len(), 1);
    assert!(prompt.selection()[0].ends_with("notes.txt"));
}

// === Rendering ===

#[test]
fn first_frame_shows_hint() {
    let index = sample();
    let prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    insta::assert_snapshot!(prompt.render(), @r"
    ? Pick (arrows to move and open, Ctrl+F to search)
    ▶ ❯ a
    ▶ b
    ");
}

#[test]
fn filtered_frame_shows_query_line() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    expand_all(&mut prompt);
    search(&mut prompt, "z");

    insta::assert_snapshot!(prompt.render(), @r"
    ? Pick
    ▼ ❯ b
        z.txt
    ⭞ z
    ");
}

#[test]
fn looping_window_draws_separator() {
    let index = flat(5);
    let prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).page_size(3);

    insta::assert_snapshot!(prompt.render(), @r"
    ? Pick (arrows to move and open, Ctrl+F to search)
    ----------------
    ❯ f1.txt
      f2.txt
    ");
}

#[test]
fn multi_select_frame_marks_selection() {
    let index = flat(2);
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index)).multiple();
    press(&mut prompt, &[key(KeyCode::Down), key(KeyCode::Char(' '))]);

    insta::assert_snapshot!(prompt.render(), @r"
    ? Pick
      ◯ f1.txt
    ❯ ◉ f2.txt
    ");
}

#[test]
fn ascii_glyphs_without_unicode() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    prompt.unicode = false;
    press(&mut prompt, &[key(KeyCode::Right)]);

    insta::assert_snapshot!(prompt.render(), @r"
    ? Pick
    - > a
        x.txt
        y.txt
    + b
    ");
}

#[test]
fn plain_frame_marks_the_active_directory() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    let before = prompt.render();
    press(&mut prompt, &[key(KeyCode::Down)]);

    assert_ne!(prompt.render(), before);
    insta::assert_snapshot!(prompt.render(), @r"
    ? Pick
    ▶ a
    ▶ ❯ b
    ");
}

#[test]
fn colored_frame_leaves_directory_icon_alone() {
    let index = sample();
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    prompt.painter = Painter::new(true);
    let frame = prompt.render();
    assert!(!frame.contains("❯"));
    assert!(frame.contains("\u{1b}["));
}

#[test]
fn closing_frame_shows_answer() {
    let index = flat(1);
    let mut prompt = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    prompt.handle_key(key(KeyCode::Enter));
    assert_eq!(prompt.close(), "? Pick f1.txt");

    let mut cancelled = TreePrompt::new("Pick", ArchiveTreeSource::new(&index));
    cancelled.handle_key(key(KeyCode::Esc));
    assert_eq!(cancelled.close(), "");
}
