//! Fixed question pools, one per research area.
//!
//! Templates may contain the placeholder tokens understood by
//! [`resolve_placeholders`](crate::context::placeholder::resolve_placeholders).

use super::category::CategoryKey;

const DEMOGRAPHICS: &[&str] = &[
    "What is your role/title at your company?",
    "How big is your company (number of employees)?",
    "What industry are you in?",
    "How would you describe yourself professionally in one sentence?",
    "What are your biggest professional goals this year?",
    "What does a typical day look like for you?",
    "How long have you been in your current role?",
    "What are the biggest challenges in your industry right now?",
];

const PAIN_POINTS: &[&str] = &[
    "What was the biggest challenge you were facing before finding our solution?",
    "What keeps you up at night when it comes to [relevant area]?",
    "What's the most frustrating part of your current [relevant process]?",
    "If you could wave a magic wand and fix one thing about [relevant area], what would it be?",
    "What problems do you face that you haven't found a good solution for yet?",
    "What's the biggest obstacle preventing you from achieving your goals?",
    "What would you say is your number one business challenge right now?",
    "What aspect of [relevant area] takes up the most time in your day?",
    "What's the most expensive problem you're currently dealing with?",
    "What process in your work do you wish was completely automated?",
];

const JOBS_TO_BE_DONE: &[&str] = &[
    "What were you trying to accomplish when you first looked for a solution like ours?",
    "What specific task or outcome are you hoping to achieve?",
    "What does success look like for you in [relevant area]?",
    "When you use our [product/service], what job are you 'hiring' it to do?",
    "What would have to happen for you to feel like this was a great investment?",
    "What are you hoping to be able to do that you can't do now?",
    "What outcome would make this purchase worth every penny?",
    "If you could accomplish one thing this quarter, what would it be?",
    "What capability are you missing that would transform your results?",
    "What would achieving your goal mean for you personally?",
];

const MOTIVATIONS: &[&str] = &[
    "What motivated you to start looking for a solution in the first place?",
    "What was the trigger event that made you realize you needed help?",
    "Why was solving this problem important to you personally?",
    "What consequences were you trying to avoid?",
    "What opportunities were you hoping to unlock?",
    "What finally pushed you over the edge to take action?",
    "What would happen if you didn't solve this problem?",
    "What made this a priority for you right now?",
];

const PURCHASING: &[&str] = &[
    "How do you typically research and evaluate solutions like ours?",
    "Who else was involved in the decision to work with us?",
    "What alternatives did you consider before choosing us?",
    "What was the most important factor in your decision?",
    "How long did it take you to make the decision to purchase?",
    "Where do you typically go to research solutions like this?",
    "What review sites or resources do you trust most?",
    "How do you typically justify purchases like this to others?",
];

const HESITATIONS: &[&str] = &[
    "What almost stopped you from moving forward with us?",
    "What concerns did you have before making the purchase?",
    "What questions did you need answered before feeling comfortable?",
    "What would have made the decision easier for you?",
    "What do people in your position typically worry about with solutions like ours?",
    "What was your biggest fear about making this investment?",
    "What objections did others raise when you proposed this solution?",
    "What red flags do you typically watch out for?",
];

const LANGUAGE: &[&str] = &[
    "How would you describe our solution to a colleague in your own words?",
    "What words would you use to describe the problem we solve?",
    "If you were recommending us to someone, what would you say?",
    "How do you explain what we do to people who aren't familiar with it?",
    "What language resonates with you when talking about this type of solution?",
    "What's the elevator pitch you'd give for our solution?",
    "How would you describe the before and after of using our solution?",
    "What metaphor would you use to explain what we do?",
];

const TRIGGERS: &[&str] = &[
    "In what situations do you find yourself needing a solution like ours?",
    "What typically happens right before you start looking for help with [relevant area]?",
    "What events or circumstances make this a priority for you?",
    "When during the year/quarter/month do you most need this type of solution?",
    "What has to go wrong for you to start actively seeking a solution?",
    "What triggers usually make you research new tools or services?",
    "At what point do you realize you need outside help?",
    "What warning signs tell you it's time to find a better solution?",
];

const COMPETITORS: &[&str] = &[
    "What alternatives did you consider before choosing us?",
    "Who do you see as our main competitors?",
    "What made you choose us over other options in the market?",
    "What do you think we do better than our competitors?",
    "What do our competitors do better than us?",
    "How did you first hear about our competitors?",
    "What would make you switch to a competitor?",
    "How do you typically compare different solutions in our category?",
];

/// The fixed template pool for a research area.
pub fn question_pool(category: CategoryKey) -> &'static [&'static str] {
    match category {
        CategoryKey::Demographics => DEMOGRAPHICS,
        CategoryKey::PainPoints => PAIN_POINTS,
        CategoryKey::JobsToBeDone => JOBS_TO_BE_DONE,
        CategoryKey::Motivations => MOTIVATIONS,
        CategoryKey::Purchasing => PURCHASING,
        CategoryKey::Hesitations => HESITATIONS,
        CategoryKey::Language => LANGUAGE,
        CategoryKey::Triggers => TRIGGERS,
        CategoryKey::Competitors => COMPETITORS,
    }
}

/// Every template from every pool, in category order.
///
/// Templates shared by two pools appear twice; callers dedupe after
/// placeholder resolution.
pub fn all_questions() -> Vec<&'static str> {
    CategoryKey::ALL
        .into_iter()
        .flat_map(|c| question_pool(c).iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pool_sizes() {
        assert_eq!(question_pool(CategoryKey::PainPoints).len(), 10);
        assert_eq!(question_pool(CategoryKey::JobsToBeDone).len(), 10);
        for category in [
            CategoryKey::Demographics,
            CategoryKey::Motivations,
            CategoryKey::Purchasing,
            CategoryKey::Hesitations,
            CategoryKey::Language,
            CategoryKey::Triggers,
            CategoryKey::Competitors,
        ] {
            assert_eq!(question_pool(category).len(), 8, "{category}");
        }
    }

    #[test]
    fn test_pools_have_no_internal_duplicates() {
        for category in CategoryKey::ALL {
            let pool = question_pool(category);
            let unique: HashSet<_> = pool.iter().collect();
            assert_eq!(unique.len(), pool.len(), "{category}");
        }
    }

    #[test]
    fn test_quota_never_exceeds_pool() {
        for category in CategoryKey::ALL {
            assert!(category.default_quota() <= question_pool(category).len());
        }
    }

    #[test]
    fn test_all_questions_covers_every_pool() {
        let total: usize = CategoryKey::ALL
            .into_iter()
            .map(|c| question_pool(c).len())
            .sum();
        assert_eq!(all_questions().len(), total);
    }

    #[test]
    fn test_shared_template_across_pools() {
        let shared = "What alternatives did you consider before choosing us?";
        assert!(question_pool(CategoryKey::Purchasing).contains(&shared));
        assert!(question_pool(CategoryKey::Competitors).contains(&shared));
    }
}
