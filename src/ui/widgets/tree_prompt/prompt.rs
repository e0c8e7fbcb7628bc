//! Tree prompt state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use arctree::application::Command;

use super::keymap::{Action, KeyMap};
use super::node::{Arena, NodeId};
use super::search::{linearize, Pattern, SearchPolicy};
use super::source::TreeSource;
use crate::ui::widgets::line_prompt::{self, LinePrompt};
use crate::ui::context::UiContext;
use crate::ui::primitives::text::Painter;

pub type Validator<'a> = Box<dyn Fn(&str) -> Result<(), String> + 'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    Browsing,
    /// Typing a query; the tree keeps its pre-search view
    Searching,
    Answered,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Escape: return to the previous step
    Back,
    /// Ctrl+Q: leave the program
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Answered(Vec<String>),
    Cancelled(CancelReason),
    Shortcut {
        command: Command,
        selection: Vec<String>,
    },
}

/// One drawn line of the pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Node(NodeId),
    Separator,
}

struct SearchCache {
    filter: Option<Pattern>,
    active: Option<NodeId>,
}

/// Interactive, lazily expanded tree with optional multi-select and search
pub struct TreePrompt<'a> {
    pub(super) message: String,
    source: Box<dyn TreeSource + 'a>,
    pub(super) arena: Arena,
    pub(super) visible: Vec<NodeId>,
    pub(super) active: usize,
    pub(super) selection: Vec<String>,
    pub(super) filter: Option<Pattern>,
    pub(super) query: String,
    cache: Option<SearchCache>,
    pub(super) state: PromptState,
    policy: SearchPolicy,
    pub(super) keymap: KeyMap,
    validator: Option<Validator<'a>>,
    pub(super) multiple: bool,
    page_size: usize,
    looping: bool,
    pub(super) painter: Painter,
    pub(super) unicode: bool,
    pub(super) hint: bool,
    pub(super) error: Option<String>,
    pub(super) answer: Option<String>,
}

impl<'a> TreePrompt<'a> {
    pub fn new(message: impl Into<String>, source: impl TreeSource + 'a) -> Self {
        let source: Box<dyn TreeSource + 'a> = Box::new(source);
        let arena = Arena::load(source.as_ref());
        let visible = arena.roots().to_vec();
        Self {
            message: message.into(),
            source,
            arena,
            visible,
            active: 0,
            selection: Vec::new(),
            filter: None,
            query: String::new(),
            cache: None,
            state: PromptState::Browsing,
            policy: SearchPolicy::Recursive,
            keymap: KeyMap::navigation(),
            validator: None,
            multiple: false,
            page_size: 15,
            looping: true,
            painter: Painter::plain(),
            unicode: true,
            hint: true,
            error: None,
            answer: None,
        }
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn search_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn validator(mut self, validator: impl Fn(&str) -> Result<(), String> + 'a) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn styled(mut self, ui: &UiContext) -> Self {
        self.painter = ui.painter();
        self.unicode = ui.unicode;
        self
    }

    /// Draw the prompt and block until it closes
    pub fn interact(mut self) -> std::io::Result<PromptOutcome> {
        let outcome = line_prompt::run(&mut self)?;
        log::debug!(
            "tree prompt '{}' closed {:?} with {} selected: {:?}",
            self.message,
            self.state(),
            self.selection().len(),
            outcome
        );
        Ok(outcome)
    }

    pub fn state(&self) -> PromptState {
        self.state
    }

    /// Selected identifiers in toggle order
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub(super) fn active_id(&self) -> Option<NodeId> {
        self.visible.get(self.active).copied()
    }

    pub(super) fn is_valid(&self, value: &str) -> Result<(), String> {
        match &self.validator {
            Some(validate) => validate(value),
            None => Ok(()),
        }
    }

    /// Lines shown in the pagination window, centered on the active line
    pub(crate) fn window(&self) -> Vec<Line> {
        let mut lines: Vec<Line> = self.visible.iter().map(|id| Line::Node(*id)).collect();
        if self.looping && self.visible.len() > self.page_size {
            lines.push(Line::Separator);
        }

        let total = lines.len();
        if total <= self.page_size {
            return lines;
        }
        let middle = self.page_size / 2;
        if self.looping {
            let start = (self.active + total - middle) % total;
            (0..self.page_size)
                .map(|offset| lines[(start + offset) % total])
                .collect()
        } else {
            let start = self
                .active
                .saturating_sub(middle)
                .min(total - self.page_size);
            lines[start..start + self.page_size].to_vec()
        }
    }

    /// Flip `value` in the selection; only entries drawn in the current
    /// window can be toggled
    pub fn toggle_value(&mut self, value: &str) -> bool {
        if !self.multiple {
            return false;
        }
        let drawn = self.window().into_iter().any(|line| match line {
            Line::Node(id) => self.arena.node(id).value == value,
            Line::Separator => false,
        });
        if !drawn {
            return false;
        }

        match self.selection.iter().position(|s| s == value) {
            Some(pos) => {
                self.selection.remove(pos);
            }
            None => self.selection.push(value.to_string()),
        }
        true
    }

    fn relinearize(&mut self, keep: Option<NodeId>) {
        self.visible = linearize(
            &mut self.arena,
            self.source.as_ref(),
            self.filter.as_ref(),
            self.policy,
        );
        self.active = keep
            .and_then(|id| self.visible.iter().position(|v| *v == id))
            .unwrap_or_else(|| self.active.min(self.visible.len().saturating_sub(1)));
    }

    fn move_active(&mut self, down: bool) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        self.active = match (down, self.looping) {
            (true, _) if self.active + 1 < len => self.active + 1,
            (true, true) => 0,
            (true, false) => len - 1,
            (false, _) if self.active > 0 => self.active - 1,
            (false, true) => len - 1,
            (false, false) => 0,
        };
    }

    /// Re-root the tree one directory up; the selection is kept
    fn climb(&mut self) {
        if !self.source.climb() {
            return;
        }
        self.arena = Arena::load(self.source.as_ref());
        self.relinearize(None);
        self.active = 0;
    }

    fn expand(&mut self) {
        let Some(id) = self.active_id() else { return };
        if self.arena.node(id).climbs {
            self.climb();
            return;
        }
        if !self.arena.node(id).is_dir {
            return;
        }
        self.arena.ensure_children(id, self.source.as_ref());
        self.arena.node_mut(id).open = true;
        self.relinearize(Some(id));
    }

    fn collapse(&mut self) {
        let Some(id) = self.active_id() else { return };
        let node = self.arena.node(id);
        let (is_dir, open, parent) = (node.is_dir, node.open, node.parent);
        if is_dir && open {
            self.arena.node_mut(id).open = false;
            self.relinearize(Some(id));
        } else if let Some(parent) = parent {
            if let Some(pos) = self.visible.iter().position(|v| *v == parent) {
                self.active = pos;
            }
        }
    }

    fn submit(&mut self) -> Option<PromptOutcome> {
        if self.multiple {
            for value in &self.selection {
                if let Err(msg) = self.is_valid(value) {
                    self.error = Some(msg);
                    return None;
                }
            }
            self.answer = Some(self.selection.join(", "));
            self.state = PromptState::Answered;
            return Some(PromptOutcome::Answered(self.selection.clone()));
        }

        let id = self.active_id()?;
        if self.arena.node(id).climbs {
            self.climb();
            return None;
        }
        let value = self.arena.node(id).value.clone();
        if let Err(msg) = self.is_valid(&value) {
            self.error = Some(msg);
            return None;
        }
        self.answer = Some(value.clone());
        self.state = PromptState::Answered;
        Some(PromptOutcome::Answered(vec![value]))
    }

    fn start_search(&mut self) {
        self.cache = Some(SearchCache {
            filter: self.filter.clone(),
            active: self.active_id(),
        });
        self.query.clear();
        self.state = PromptState::Searching;
    }

    fn commit_search(&mut self) {
        let cache = self.cache.take();
        let text = std::mem::take(&mut self.query);
        self.state = PromptState::Browsing;

        match Pattern::new(&text) {
            None => {
                self.filter = None;
                self.relinearize(cache.and_then(|c| c.active));
            }
            Some(pattern) => {
                let changed = self.filter.as_ref().map(Pattern::as_str) != Some(text.as_str());
                let keep = self.active_id();
                self.filter = Some(pattern);
                self.relinearize(keep);
                if changed {
                    self.active = 0;
                }
            }
        }
        log::debug!("search committed: '{}', {} lines", text, self.visible.len());
    }

    fn cancel_search(&mut self) {
        self.query.clear();
        self.state = PromptState::Browsing;
        if let Some(cache) = self.cache.take() {
            self.filter = cache.filter;
            if let Some(pos) = cache
                .active
                .and_then(|id| self.visible.iter().position(|v| *v == id))
            {
                self.active = pos;
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<PromptOutcome> {
        if self.keymap.lookup(&key) == Some(Action::Quit) {
            self.state = PromptState::Cancelled;
            return Some(PromptOutcome::Cancelled(CancelReason::Quit));
        }
        match key.code {
            KeyCode::Enter => self.commit_search(),
            KeyCode::Esc => self.cancel_search(),
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.push(c);
            }
            _ => {}
        }
        None
    }
}

impl LinePrompt for TreePrompt<'_> {
    type Output = PromptOutcome;

    fn render(&self) -> String {
        super::render::frame(self)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<PromptOutcome> {
        self.hint = false;
        if self.state == PromptState::Searching {
            return self.handle_search_key(key);
        }

        let action = self.keymap.lookup(&key)?;
        self.error = None;
        match action {
            Action::Up => self.move_active(false),
            Action::Down => self.move_active(true),
            Action::Expand => self.expand(),
            Action::Collapse => self.collapse(),
            Action::Toggle => {
                let target = self.active_id().filter(|id| !self.arena.node(*id).climbs);
                if let Some(id) = target {
                    let value = self.arena.node(id).value.clone();
                    self.toggle_value(&value);
                }
            }
            Action::Submit => return self.submit(),
            Action::Search => self.start_search(),
            Action::Back => {
                if self.filter.is_some() {
                    let keep = self.active_id();
                    self.filter = None;
                    self.relinearize(keep);
                } else {
                    self.state = PromptState::Cancelled;
                    return Some(PromptOutcome::Cancelled(CancelReason::Back));
                }
            }
            Action::Quit => {
                self.state = PromptState::Cancelled;
                return Some(PromptOutcome::Cancelled(CancelReason::Quit));
            }
            Action::Shortcut(command) => {
                self.state = PromptState::Answered;
                return Some(PromptOutcome::Shortcut {
                    command,
                    selection: self.selection.clone(),
                });
            }
        }
        None
    }

    fn close(&mut self) -> String {
        super::render::closing_frame(self)
    }
}
