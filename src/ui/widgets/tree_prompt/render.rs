//! Frame rendering for the tree prompt.

use super::node::NodeId;
use super::prompt::{Line, PromptState, TreePrompt};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Tone;
use crate::ui::theme::LOOP_SEPARATOR;

/// The full frame: header, window, query line and inline error
pub(super) fn frame(prompt: &TreePrompt<'_>) -> String {
    let mut lines = vec![header(prompt)];

    if prompt.visible.is_empty() {
        lines.push(prompt.painter.paint("  (nothing to show)", Tone::Dim));
    }
    for line in prompt.window() {
        lines.push(match line {
            Line::Node(id) => node_line(prompt, id),
            Line::Separator => prompt.painter.paint(LOOP_SEPARATOR, Tone::Dim),
        });
    }

    let query = match prompt.state {
        PromptState::Searching => Some(prompt.query.as_str()),
        _ => prompt.filter.as_ref().map(|f| f.as_str()),
    };
    if let Some(query) = query {
        lines.push(format!(
            "{} {}",
            Icon::Search.colored(prompt.painter, prompt.unicode),
            query
        ));
    }

    if let Some(error) = &prompt.error {
        lines.push(format!(
            "{} {}",
            Icon::Error.colored(prompt.painter, prompt.unicode),
            prompt.painter.paint(error, Tone::Error)
        ));
    }

    lines.join("\n")
}

/// What stays on screen once the prompt closes
pub(super) fn closing_frame(prompt: &TreePrompt<'_>) -> String {
    match &prompt.answer {
        Some(answer) => format!(
            "{} {}",
            title(prompt),
            prompt.painter.paint(answer, Tone::Info)
        ),
        None => String::new(),
    }
}

fn title(prompt: &TreePrompt<'_>) -> String {
    format!(
        "{} {}",
        prompt.painter.paint("?", Tone::Success),
        prompt.painter.bold(&prompt.message)
    )
}

fn header(prompt: &TreePrompt<'_>) -> String {
    let mut header = title(prompt);
    if prompt.hint {
        header.push(' ');
        header.push_str(&prompt.painter.paint(&hint(prompt), Tone::Dim));
    }
    header
}

fn hint(prompt: &TreePrompt<'_>) -> String {
    let mut parts = vec!["arrows to move and open"];
    if prompt.multiple {
        parts.push("Space to select");
    }
    parts.push("Ctrl+F to search");
    if prompt.keymap.has_shortcuts() {
        parts.push("h for shortcuts");
    }
    format!("({})", parts.join(", "))
}

fn node_line(prompt: &TreePrompt<'_>, id: NodeId) -> String {
    let node = prompt.arena.node(id);
    let active = prompt.active_id() == Some(id);

    let indent = "  ".repeat(node.depth);
    let prefix = if node.is_dir {
        let icon = if node.open {
            Icon::Expanded
        } else {
            Icon::Collapsed
        };
        icon.render(prompt.unicode)
    } else if active {
        Icon::Pointer.render(prompt.unicode)
    } else {
        " "
    };

    let mark = if prompt.multiple {
        let icon = if prompt.selection.contains(&node.value) {
            Icon::Selected
        } else {
            Icon::Unselected
        };
        format!("{} ", icon.colored(prompt.painter, prompt.unicode))
    } else {
        String::new()
    };

    let name = if active {
        let tone = if prompt.is_valid(&node.value).is_ok() {
            Tone::Info
        } else {
            Tone::Error
        };
        prompt.painter.paint(&node.name, tone)
    } else {
        node.name.clone()
    };
    // Without color the icon column of a directory cannot show the cursor
    let name = if active && node.is_dir && prompt.painter.is_plain() {
        format!("{} {}", Icon::Pointer.render(prompt.unicode), name)
    } else {
        name
    };

    format!("{}{} {}{}", indent, prefix, mark, name)
}
