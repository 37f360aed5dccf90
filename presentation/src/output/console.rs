//! Console output formatter for survey sessions

use colored::Colorize;
use survey_application::BuildSummary;
use survey_domain::{BusinessContext, CategoryKey, SelectionPolicy, SurveySession, SurveyTemplate};

const TIPS: &str = "Survey Guidelines:
  * Target customers who purchased/worked with you in the last 3-6 months
  * Keep to 6-8 questions maximum for best response rates
  * Focus on open-ended questions to capture authentic language
  * Send with a clear, direct subject line asking for help

After collecting responses:
  * Look for patterns in pain points and language used
  * Identify common motivations and trigger events
  * Note demographic patterns among your best customers
  * Use their exact words in your marketing and website copy";

/// Formats survey state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The generated pool with selection checkboxes, numbered from 1
    pub fn format_pool(session: &SurveySession) -> String {
        let mut output = String::new();
        let generated = session.generated();

        output.push_str(&Self::section_header(&format!(
            "Available Questions ({} of {} selected)",
            session.selected().len(),
            generated.len()
        )));

        if generated.is_empty() {
            output.push_str(
                "No questions yet. Pick research areas with /area and run /generate, or choose a /template.\n",
            );
            return output;
        }

        for (i, question) in generated.iter().enumerate() {
            if session.is_selected(question) {
                output.push_str(&format!("{} {:>2}. {}\n", "[x]".green().bold(), i + 1, question));
            } else {
                output.push_str(&format!("{} {:>2}. {}\n", "[ ]".dimmed(), i + 1, question));
            }
        }

        output
    }

    /// The selected questions as they will appear in the survey
    pub fn format_preview(session: &SurveySession) -> String {
        let mut output = Self::section_header("Customer Discovery Survey Preview");

        if session.selected().is_empty() {
            output.push_str("Nothing selected yet.\n");
            return output;
        }

        for (i, question) in session.selected().iter().enumerate() {
            output.push_str(&format!(
                "{}\n  {}\n",
                format!("Question {}", i + 1).red().bold(),
                question
            ));
        }

        output
    }

    /// Pool followed by the preview
    pub fn format_view(session: &SurveySession, show_preview: bool) -> String {
        let mut output = Self::format_pool(session);
        if show_preview && !session.selected().is_empty() {
            output.push_str(&Self::format_preview(session));
        }
        output
    }

    /// Business details entered so far
    pub fn format_context(session: &SurveySession) -> String {
        let ctx = &session.context;
        let not_set = || "(not set)".dimmed().to_string();

        let mut output = Self::section_header("Business Details");
        output.push_str(&format!(
            "{} {}\n",
            "Business type:".cyan().bold(),
            ctx.business_type
                .map(|t| t.label().to_string())
                .unwrap_or_else(not_set)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Industry:".cyan().bold(),
            if ctx.industry.trim().is_empty() {
                not_set()
            } else {
                ctx.industry.clone()
            }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Product/service:".cyan().bold(),
            if ctx.product_service.trim().is_empty() {
                not_set()
            } else {
                ctx.product_service.clone()
            }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Research areas:".cyan().bold(),
            if ctx.categories().is_empty() {
                not_set()
            } else {
                ctx.categories()
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ));
        if let Some(template) = session.template() {
            output.push_str(&format!("{} {}\n", "Template:".cyan().bold(), template));
        }
        output
    }

    /// Research areas with their selection state and quotas
    pub fn format_categories(ctx: &BusinessContext, policy: &SelectionPolicy) -> String {
        let mut output =
            Self::section_header("What would you like to learn about your customers?");
        for category in CategoryKey::ALL {
            let mark = if ctx.has_category(category) {
                "[x]".green().bold()
            } else {
                "[ ]".dimmed()
            };
            output.push_str(&format!(
                "{} {:<16} {} ({} per generation)\n",
                mark,
                category.as_str(),
                category.label(),
                policy.quota(category)
            ));
        }
        output
    }

    /// Available survey templates
    pub fn format_templates(active: Option<SurveyTemplate>) -> String {
        let mut output = Self::section_header("Survey Templates");
        for template in SurveyTemplate::ALL {
            let marker = if active == Some(template) { "*" } else { " " };
            output.push_str(&format!(
                "{} {:<18} {} ({} questions)\n",
                marker,
                template.as_str(),
                template.label(),
                template.questions().len()
            ));
        }
        output
    }

    /// Best practices for running the survey
    pub fn format_tips() -> String {
        format!(
            "{}{}\n",
            Self::section_header("Customer Discovery Best Practices"),
            TIPS
        )
    }

    /// One-line description of what a build step did
    pub fn format_summary(summary: &BuildSummary) -> String {
        if summary.reset && summary.pool_size == 0 {
            return "Cleared all questions (no research areas selected).".to_string();
        }
        if summary.reset {
            return format!(
                "Loaded {} template questions ({} shown, {} selected).",
                summary.fresh, summary.pool_size, summary.selected
            );
        }
        format!(
            "Added {} new question{} ({} shown, {} selected).",
            summary.fresh,
            if summary.fresh == 1 { "" } else { "s" },
            summary.pool_size,
            summary.selected
        )
    }

    /// Session state as JSON
    pub fn format_json(session: &SurveySession) -> String {
        serde_json::to_string_pretty(session).unwrap_or_else(|_| "{}".to_string())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
