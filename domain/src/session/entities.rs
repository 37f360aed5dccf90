//! Survey session entity

use crate::bank::SurveyTemplate;
use crate::context::BusinessContext;
use crate::selection::TemplateOutcome;
use serde::{Deserialize, Serialize};

/// Result of toggling one question on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Selecting would exceed the per-survey maximum; nothing changed
    LimitReached,
    /// The question is not in the generated pool
    NotFound,
}

/// The mutable state of one survey-building session (Entity).
///
/// Owned by the front end and handed to the selection engine by
/// reference. `generated` is what is currently offered; `selected` is what
/// will be exported, in the order it was picked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveySession {
    pub context: BusinessContext,
    template: Option<SurveyTemplate>,
    generated: Vec<String>,
    selected: Vec<String>,
}

impl SurveySession {
    pub fn new(context: BusinessContext) -> Self {
        Self {
            context,
            ..Default::default()
        }
    }

    pub fn template(&self) -> Option<SurveyTemplate> {
        self.template
    }

    pub fn set_template(&mut self, template: Option<SurveyTemplate>) {
        self.template = template;
    }

    pub fn generated(&self) -> &[String] {
        &self.generated
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, question: &str) -> bool {
        self.selected.iter().any(|q| q == question)
    }

    /// True when every generated question is selected (and there is at least one)
    pub fn all_selected(&self) -> bool {
        !self.generated.is_empty() && self.generated.iter().all(|q| self.is_selected(q))
    }

    /// Install a pool produced by [`generate`](crate::selection::generate).
    ///
    /// When nothing was selected yet, the first `auto_select` questions of
    /// the new pool are selected.
    pub fn apply_generated(&mut self, pool: Vec<String>, auto_select: usize) {
        self.generated = pool;
        if self.selected.is_empty() {
            self.selected = self.generated.iter().take(auto_select).cloned().collect();
        }
    }

    /// Install the result of applying a survey template
    pub fn apply_template(&mut self, outcome: TemplateOutcome) {
        match outcome {
            TemplateOutcome::Reset { questions } => {
                self.selected = questions.clone();
                self.generated = questions;
            }
            TemplateOutcome::Filled { pool, .. } => {
                self.generated = pool;
            }
        }
    }

    /// Drop the pool and every selection
    pub fn clear(&mut self) {
        self.generated.clear();
        self.selected.clear();
    }

    /// Drop every unselected question from the pool, keeping the selection
    pub fn retain_selected(&mut self) {
        self.generated = self.selected.clone();
    }

    /// Flip selection of a generated question by its text
    pub fn toggle(&mut self, question: &str, max_selected: usize) -> ToggleOutcome {
        if let Some(pos) = self.selected.iter().position(|q| q == question) {
            self.selected.remove(pos);
            return ToggleOutcome::Deselected;
        }
        if !self.generated.iter().any(|q| q == question) {
            return ToggleOutcome::NotFound;
        }
        if self.selected.len() >= max_selected {
            return ToggleOutcome::LimitReached;
        }
        self.selected.push(question.to_string());
        ToggleOutcome::Selected
    }

    /// Flip selection of the generated question at `index` (0-based)
    pub fn toggle_index(&mut self, index: usize, max_selected: usize) -> ToggleOutcome {
        match self.generated.get(index).cloned() {
            Some(question) => self.toggle(&question, max_selected),
            None => ToggleOutcome::NotFound,
        }
    }

    /// Select every generated question, in pool order
    pub fn select_all(&mut self) {
        self.selected = self.generated.clone();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }
}
