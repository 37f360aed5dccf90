//! Question pool generation and gap-filling.
//!
//! Both entry points are pure: they read the current pool and selection and
//! return a new pool. Selected questions are never dropped, and no question
//! appears twice (compared after placeholder resolution).

use super::gap::GapSource;
use super::pick::pick_random;
use super::policy::SelectionPolicy;
use crate::bank::{CategoryKey, SurveyTemplate, question_pool};
use crate::context::{BusinessContext, resolve_placeholders};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::debug;

/// Result of applying a survey template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOutcome {
    /// No gaps: the selection followed by the template's questions, all selected
    Reset { questions: Vec<String> },
    /// Unselected slots were refilled
    Filled { pool: Vec<String>, replaced: usize },
}

impl TemplateOutcome {
    /// The new generated pool
    pub fn pool(&self) -> &[String] {
        match self {
            TemplateOutcome::Reset { questions } => questions,
            TemplateOutcome::Filled { pool, .. } => pool,
        }
    }
}

fn seen_set(generated: &[String], selected: &[String]) -> HashSet<String> {
    generated.iter().chain(selected).cloned().collect()
}

/// Build a new pool from the requested research areas.
///
/// Draws each category's quota at random, resolves placeholders, drops
/// anything already in `generated` or `selected`, and returns
/// `selected ++ fresh` with the fresh part truncated so the pool fits
/// `policy.capacity`. An empty category list yields an empty pool.
pub fn generate<R: Rng + ?Sized>(
    categories: &[CategoryKey],
    ctx: &BusinessContext,
    generated: &[String],
    selected: &[String],
    policy: &SelectionPolicy,
    rng: &mut R,
) -> Vec<String> {
    if categories.is_empty() {
        debug!("No research areas selected, clearing pool");
        return Vec::new();
    }

    let mut seen = seen_set(generated, selected);
    let mut fresh = Vec::new();

    for &category in categories {
        let quota = policy.quota(category);
        for template in pick_random(question_pool(category), quota, rng) {
            let question = resolve_placeholders(template, ctx);
            if seen.insert(question.clone()) {
                fresh.push(question);
            }
        }
    }

    fresh.shuffle(rng);

    let slots = policy.capacity.saturating_sub(selected.len());
    if fresh.len() > slots {
        debug!("Dropping {} fresh questions over capacity", fresh.len() - slots);
        fresh.truncate(slots);
    }

    debug!(
        "Generated {} fresh questions alongside {} selected",
        fresh.len(),
        selected.len()
    );

    let mut pool = selected.to_vec();
    pool.extend(fresh);
    pool
}

/// Apply a survey template, or refill its gaps.
///
/// Gaps are the questions in `generated` that are not selected. Without
/// gaps the current selection is returned followed by the template's own
/// questions, all of them to be selected.
/// With gaps, each unselected slot is replaced by a fresh question from
/// `gap`; selected questions keep their positions. Slots left over when the
/// source runs dry are removed.
pub fn generate_from_template<R: Rng + ?Sized>(
    template: SurveyTemplate,
    ctx: &BusinessContext,
    generated: &[String],
    selected: &[String],
    gap: GapSource,
    policy: &SelectionPolicy,
    rng: &mut R,
) -> TemplateOutcome {
    let selected_set: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let gaps = generated
        .iter()
        .filter(|q| !selected_set.contains(q.as_str()))
        .count();

    if gaps == 0 {
        let mut seen: HashSet<String> = selected.iter().cloned().collect();
        let mut questions = selected.to_vec();
        questions.extend(
            template
                .questions()
                .iter()
                .map(|t| resolve_placeholders(t, ctx))
                .filter(|q| seen.insert(q.clone())),
        );
        debug!(
            "Template {} reset to {} questions ({} kept from selection)",
            template,
            questions.len(),
            selected.len()
        );
        return TemplateOutcome::Reset { questions };
    }

    let mut seen = seen_set(generated, selected);
    let source = gap.templates();
    let mut replacements = Vec::with_capacity(gaps);
    for template in pick_random(&source, source.len(), rng) {
        if replacements.len() == gaps {
            break;
        }
        let question = resolve_placeholders(template, ctx);
        if seen.insert(question.clone()) {
            replacements.push(question);
        }
    }
    let replaced = replacements.len();

    // Selections made outside the current pool lead the list.
    let generated_set: HashSet<&str> = generated.iter().map(String::as_str).collect();
    let mut pool: Vec<String> = selected
        .iter()
        .filter(|q| !generated_set.contains(q.as_str()))
        .cloned()
        .collect();

    let mut fresh = replacements.into_iter();
    for question in generated {
        if selected_set.contains(question.as_str()) {
            pool.push(question.clone());
        } else if let Some(replacement) = fresh.next() {
            pool.push(replacement);
        }
    }

    while pool.len() > policy.capacity {
        match pool
            .iter()
            .rposition(|q| !selected_set.contains(q.as_str()))
        {
            Some(idx) => {
                pool.remove(idx);
            }
            None => break,
        }
    }

    debug!(
        "Filled {} of {} gaps from {} for template {}",
        replaced, gaps, gap, template
    );

    TemplateOutcome::Filled { pool, replaced }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BusinessType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ctx() -> BusinessContext {
        BusinessContext::new()
            .with_business_type(BusinessType::B2bSaas)
            .with_industry("marketing")
            .with_product_service("email automation platform")
    }

    fn resolved_pool(category: CategoryKey) -> Vec<String> {
        question_pool(category)
            .iter()
            .map(|t| resolve_placeholders(t, &ctx()))
            .collect()
    }

    fn assert_unique(pool: &[String]) {
        let unique: HashSet<_> = pool.iter().collect();
        assert_eq!(unique.len(), pool.len(), "duplicate in {pool:?}");
    }

    #[test]
    fn test_empty_categories_yield_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let selected = vec!["kept?".to_string()];
        let pool = generate(
            &[],
            &ctx(),
            &selected,
            &selected,
            &SelectionPolicy::default(),
            &mut rng,
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pain_points_quota_from_empty_state() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = generate(
            &[CategoryKey::PainPoints],
            &ctx(),
            &[],
            &[],
            &SelectionPolicy::default(),
            &mut rng,
        );
        assert_eq!(pool.len(), 5);
        assert_unique(&pool);
        let source = resolved_pool(CategoryKey::PainPoints);
        assert!(pool.iter().all(|q| source.contains(q)));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let policy = SelectionPolicy::default();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let pool = generate(&CategoryKey::ALL, &ctx(), &[], &[], &policy, &mut rng);
            assert_eq!(pool.len(), policy.capacity);
            assert_unique(&pool);
        }
    }

    #[test]
    fn test_selected_questions_survive_and_lead() {
        let mut rng = StdRng::seed_from_u64(11);
        let policy = SelectionPolicy::default();
        let first = generate(
            &[CategoryKey::Demographics, CategoryKey::Language],
            &ctx(),
            &[],
            &[],
            &policy,
            &mut rng,
        );
        let selected: Vec<String> = first.iter().take(3).cloned().collect();

        let second = generate(
            &[CategoryKey::Demographics, CategoryKey::Language],
            &ctx(),
            &first,
            &selected,
            &policy,
            &mut rng,
        );
        assert_eq!(&second[..3], &selected[..]);
        assert!(second.len() <= policy.capacity);
    }

    #[test]
    fn test_add_more_never_repeats_shown_questions() {
        let mut rng = StdRng::seed_from_u64(23);
        let policy = SelectionPolicy::default();
        let categories = [CategoryKey::PainPoints, CategoryKey::JobsToBeDone];
        let first = generate(&categories, &ctx(), &[], &[], &policy, &mut rng);
        let selected = vec![first[0].clone()];

        let second = generate(&categories, &ctx(), &first, &selected, &policy, &mut rng);
        assert_unique(&second);
        for question in &second[1..] {
            assert!(!first.contains(question), "{question} was already shown");
        }
    }

    #[test]
    fn test_shared_template_deduplicated_across_categories() {
        let policy = SelectionPolicy::default()
            .with_quota(CategoryKey::Purchasing, 8)
            .with_quota(CategoryKey::Competitors, 8)
            .with_capacity(100);
        let mut rng = StdRng::seed_from_u64(2);
        let pool = generate(
            &[CategoryKey::Purchasing, CategoryKey::Competitors],
            &ctx(),
            &[],
            &[],
            &policy,
            &mut rng,
        );
        // One template is shared by both pools
        assert_eq!(pool.len(), 15);
        assert_unique(&pool);
    }

    #[test]
    fn test_selected_never_evicted_when_over_capacity() {
        let policy = SelectionPolicy::default().with_capacity(2);
        let selected: Vec<String> = (0..3).map(|i| format!("custom {i}")).collect();
        let mut rng = StdRng::seed_from_u64(4);
        let pool = generate(
            &[CategoryKey::Triggers],
            &ctx(),
            &selected,
            &selected,
            &policy,
            &mut rng,
        );
        assert_eq!(pool, selected);
    }

    #[test]
    fn test_placeholders_resolved() {
        let policy = SelectionPolicy::default().with_quota(CategoryKey::PainPoints, 10);
        let mut rng = StdRng::seed_from_u64(8);
        let pool = generate(
            &[CategoryKey::PainPoints],
            &ctx(),
            &[],
            &[],
            &policy,
            &mut rng,
        );
        assert!(pool.iter().all(|q| !q.contains('[')));
        assert!(
            pool.iter()
                .any(|q| q.contains("marketing and lead generation"))
        );
    }

    #[test]
    fn test_template_without_gaps_resets() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = generate_from_template(
            SurveyTemplate::ExistingProduct,
            &ctx(),
            &[],
            &[],
            GapSource::Any,
            &SelectionPolicy::default(),
            &mut rng,
        );
        let TemplateOutcome::Reset { questions } = outcome else {
            panic!("expected reset");
        };
        assert_eq!(questions.len(), 5);
        assert_eq!(
            questions[1],
            "When you use our email automation platform, what job are you 'hiring' it to do?"
        );
    }

    #[test]
    fn test_template_reset_keeps_selection_first() {
        let mut rng = StdRng::seed_from_u64(1);
        let selected = resolved_pool(CategoryKey::Triggers)[..2].to_vec();
        let outcome = generate_from_template(
            SurveyTemplate::ChurnedCustomers,
            &ctx(),
            &selected,
            &selected,
            GapSource::Any,
            &SelectionPolicy::default(),
            &mut rng,
        );
        let TemplateOutcome::Reset { questions } = outcome else {
            panic!("expected reset");
        };
        assert_eq!(&questions[..2], &selected[..]);
        assert_eq!(questions.len(), 7);
        assert_unique(&questions);
    }

    #[test]
    fn test_template_fully_selected_resets_again() {
        let mut rng = StdRng::seed_from_u64(1);
        let policy = SelectionPolicy::default();
        let first = generate_from_template(
            SurveyTemplate::NewProduct,
            &ctx(),
            &[],
            &[],
            GapSource::Any,
            &policy,
            &mut rng,
        );
        let pool = first.pool().to_vec();
        let again = generate_from_template(
            SurveyTemplate::NewProduct,
            &ctx(),
            &pool,
            &pool,
            GapSource::Any,
            &policy,
            &mut rng,
        );
        assert_eq!(again, first);
    }

    #[test]
    fn test_fill_gaps_from_competitors_keeps_selected_positions() {
        let mut rng = StdRng::seed_from_u64(31);
        let policy = SelectionPolicy::default();
        let generated: Vec<String> = resolved_pool(CategoryKey::Demographics);
        assert_eq!(generated.len(), 8);
        let selected = vec![
            generated[1].clone(),
            generated[4].clone(),
            generated[6].clone(),
        ];

        let outcome = generate_from_template(
            SurveyTemplate::ExistingProduct,
            &ctx(),
            &generated,
            &selected,
            GapSource::Category(CategoryKey::Competitors),
            &policy,
            &mut rng,
        );
        let TemplateOutcome::Filled { pool, replaced } = outcome else {
            panic!("expected gap fill");
        };

        assert_eq!(replaced, 5);
        assert_eq!(pool.len(), 8);
        assert_eq!(pool[1], selected[0]);
        assert_eq!(pool[4], selected[1]);
        assert_eq!(pool[6], selected[2]);

        let competitors = resolved_pool(CategoryKey::Competitors);
        for idx in [0, 2, 3, 5, 7] {
            assert!(competitors.contains(&pool[idx]), "{}", pool[idx]);
            assert!(!generated.contains(&pool[idx]));
        }
        assert_unique(&pool);
    }

    #[test]
    fn test_fill_gaps_drops_slots_when_source_runs_dry() {
        let mut rng = StdRng::seed_from_u64(9);
        let policy = SelectionPolicy::default();
        // Every competitors question is already on screen
        let mut generated = resolved_pool(CategoryKey::Competitors);
        generated.push("Anything else?".to_string());
        let selected = vec![generated[0].clone()];

        let outcome = generate_from_template(
            SurveyTemplate::ExistingProduct,
            &ctx(),
            &generated,
            &selected,
            GapSource::Category(CategoryKey::Competitors),
            &policy,
            &mut rng,
        );
        assert_eq!(
            outcome,
            TemplateOutcome::Filled {
                pool: selected.clone(),
                replaced: 0,
            }
        );
    }

    #[test]
    fn test_fill_gaps_prepends_selected_outside_pool() {
        let mut rng = StdRng::seed_from_u64(12);
        let policy = SelectionPolicy::default();
        let generated = vec!["shown a".to_string(), "shown b".to_string()];
        let selected = vec!["carried over".to_string(), "shown b".to_string()];

        let outcome = generate_from_template(
            SurveyTemplate::ChurnedCustomers,
            &ctx(),
            &generated,
            &selected,
            GapSource::Any,
            &policy,
            &mut rng,
        );
        let pool = outcome.pool();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0], "carried over");
        assert_ne!(pool[1], "shown a");
        assert_eq!(pool[2], "shown b");
    }
}
