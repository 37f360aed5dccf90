//! Build Survey use case.
//!
//! Drives the selection engine against a [`SurveySession`]: generating from
//! research areas ("Generate" / "Add More"), applying a survey template and
//! filling its gaps. The use case owns the random source so runs can be
//! reproduced from a seed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use survey_domain::{
    GapSource, MissingField, SelectionPolicy, SurveySession, SurveyTemplate, TemplateOutcome,
    generate, generate_from_template,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building the survey.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildSurveyError {
    #[error("Missing {}", join_missing(.0))]
    NotReady(Vec<MissingField>),

    #[error("No survey template is active")]
    NoActiveTemplate,
}

fn join_missing(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// What a build step changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Questions offered for the first time by this step
    pub fresh: usize,
    /// Size of the generated pool afterwards
    pub pool_size: usize,
    /// Number of selected questions afterwards
    pub selected: usize,
    /// The pool was replaced wholesale (template reset or cleared)
    pub reset: bool,
}

impl BuildSummary {
    fn of(session: &SurveySession, fresh: usize, reset: bool) -> Self {
        Self {
            fresh,
            pool_size: session.generated().len(),
            selected: session.selected().len(),
            reset,
        }
    }
}

/// Use case for building a survey from the question bank.
pub struct BuildSurveyUseCase {
    policy: SelectionPolicy,
    rng: StdRng,
}

impl BuildSurveyUseCase {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a fixed seed for reproducible picks
    pub fn with_seed(policy: SelectionPolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// Generate questions from the session's research areas.
    ///
    /// Requires a business type and product/service. With no research areas
    /// selected the session is cleared. Activating category mode drops any
    /// active survey template.
    pub fn generate(&mut self, session: &mut SurveySession) -> Result<BuildSummary, BuildSurveyError> {
        let missing = session.context.missing_fields();
        if !missing.is_empty() {
            return Err(BuildSurveyError::NotReady(missing));
        }

        if session.context.categories().is_empty() {
            info!("No research areas selected, clearing survey");
            session.clear();
            session.set_template(None);
            return Ok(BuildSummary::of(session, 0, true));
        }

        let before = session.generated().len().max(session.selected().len());
        let pool = generate(
            session.context.categories(),
            &session.context,
            session.generated(),
            session.selected(),
            &self.policy,
            &mut self.rng,
        );
        let fresh = pool.len() - session.selected().len().min(pool.len());
        session.set_template(None);
        session.apply_generated(pool, self.policy.auto_select);

        info!(
            "Generated {} new questions ({} shown before, {} selected)",
            fresh,
            before,
            session.selected().len()
        );
        Ok(BuildSummary::of(session, fresh, false))
    }

    /// Same as [`generate`](Self::generate): keeps selections and offers
    /// questions that have not been shown yet.
    pub fn add_more(&mut self, session: &mut SurveySession) -> Result<BuildSummary, BuildSurveyError> {
        self.generate(session)
    }

    /// Switch to a survey template.
    ///
    /// Choosing a template that is not already active drops the unselected
    /// questions and adds the template's questions after the current
    /// selection, all selected. Re-applying the active template resets only
    /// when there are no unselected questions; otherwise it fills the gaps.
    pub fn apply_template(
        &mut self,
        session: &mut SurveySession,
        template: SurveyTemplate,
    ) -> BuildSummary {
        if session.template() != Some(template) {
            debug!("Switching to template {}", template);
            session.retain_selected();
            session.set_template(Some(template));
        }
        self.run_template(session, template, GapSource::Any)
    }

    /// Replace unselected questions of the active template with fresh ones
    /// drawn from `gap`.
    pub fn fill_gaps(
        &mut self,
        session: &mut SurveySession,
        gap: GapSource,
    ) -> Result<BuildSummary, BuildSurveyError> {
        let template = session
            .template()
            .ok_or(BuildSurveyError::NoActiveTemplate)?;
        Ok(self.run_template(session, template, gap))
    }

    fn run_template(
        &mut self,
        session: &mut SurveySession,
        template: SurveyTemplate,
        gap: GapSource,
    ) -> BuildSummary {
        let outcome = generate_from_template(
            template,
            &session.context,
            session.generated(),
            session.selected(),
            gap,
            &self.policy,
            &mut self.rng,
        );
        let (fresh, reset) = match &outcome {
            TemplateOutcome::Reset { questions } => {
                (questions.len().saturating_sub(session.selected().len()), true)
            }
            TemplateOutcome::Filled { replaced, .. } => (*replaced, false),
        };
        session.apply_template(outcome);
        info!(
            "Template {}: {} {} questions",
            template,
            if reset { "reset to" } else { "filled" },
            fresh
        );
        BuildSummary::of(session, fresh, reset)
    }
}
