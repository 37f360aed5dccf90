//! Placeholder substitution for question templates.
//!
//! Templates carry bracketed tokens from a closed set. Each token resolves
//! from the [`BusinessContext`]; a default phrase is used when the
//! underlying field is empty or the industry is not one we know.

use super::business::BusinessContext;

/// The closed set of placeholder tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProductService,
    RelevantArea,
    RelevantProcess,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [
        Placeholder::ProductService,
        Placeholder::RelevantArea,
        Placeholder::RelevantProcess,
    ];

    /// Literal token as written in templates
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::ProductService => "[product/service]",
            Placeholder::RelevantArea => "[relevant area]",
            Placeholder::RelevantProcess => "[relevant process]",
        }
    }

    /// Value substituted for this token
    pub fn value<'a>(&self, ctx: &'a BusinessContext) -> &'a str {
        match self {
            Placeholder::ProductService => {
                let product = ctx.product_service.trim();
                if product.is_empty() {
                    DEFAULT_PRODUCT_SERVICE
                } else {
                    product
                }
            }
            Placeholder::RelevantArea => relevant_area(&ctx.industry),
            Placeholder::RelevantProcess => relevant_process(&ctx.industry),
        }
    }
}

pub const DEFAULT_PRODUCT_SERVICE: &str = "product/service";
pub const DEFAULT_RELEVANT_AREA: &str = "your work";
pub const DEFAULT_RELEVANT_PROCESS: &str = "current process";

fn normalize(industry: &str) -> String {
    industry.trim().to_lowercase()
}

/// Focus area phrase for an industry
pub fn relevant_area(industry: &str) -> &'static str {
    match normalize(industry).as_str() {
        "marketing" => "marketing and lead generation",
        "software" => "software development and operations",
        "ecommerce" => "online sales and customer experience",
        "consulting" => "client delivery and business growth",
        "healthcare" => "patient care and operations",
        "education" => "teaching and student outcomes",
        "fitness" => "health and fitness goals",
        "finance" => "financial management",
        _ => DEFAULT_RELEVANT_AREA,
    }
}

/// Day-to-day process phrase for an industry
pub fn relevant_process(industry: &str) -> &'static str {
    match normalize(industry).as_str() {
        "marketing" => "marketing process",
        "software" => "development workflow",
        "ecommerce" => "online store management",
        "consulting" => "client project delivery",
        "healthcare" => "patient care workflow",
        "education" => "teaching process",
        "fitness" => "fitness routine",
        "finance" => "financial planning process",
        _ => DEFAULT_RELEVANT_PROCESS,
    }
}

/// Substitute every known token in `template`.
///
/// All occurrences are replaced. Bracketed text outside the closed set is
/// left as is.
pub fn resolve_placeholders(template: &str, ctx: &BusinessContext) -> String {
    Placeholder::ALL
        .iter()
        .fold(template.to_string(), |text, placeholder| {
            if text.contains(placeholder.token()) {
                text.replace(placeholder.token(), placeholder.value(ctx))
            } else {
                text
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(industry: &str, product: &str) -> BusinessContext {
        BusinessContext::new()
            .with_industry(industry)
            .with_product_service(product)
    }

    #[test]
    fn test_known_industry() {
        let c = ctx("Healthcare", "scheduling app");
        assert_eq!(
            resolve_placeholders("What keeps you up at night when it comes to [relevant area]?", &c),
            "What keeps you up at night when it comes to patient care and operations?"
        );
        assert_eq!(
            resolve_placeholders("Your current [relevant process]?", &c),
            "Your current patient care workflow?"
        );
    }

    #[test]
    fn test_defaults_for_unknown_or_empty_fields() {
        let c = ctx("aerospace", "");
        assert_eq!(
            resolve_placeholders("[relevant area] / [relevant process] / [product/service]", &c),
            "your work / current process / product/service"
        );
        let blank = ctx("   ", "  ");
        assert_eq!(
            resolve_placeholders("our [product/service]", &blank),
            "our product/service"
        );
    }

    #[test]
    fn test_product_is_trimmed() {
        let c = ctx("", "  payroll software ");
        assert_eq!(
            resolve_placeholders("When you use our [product/service]?", &c),
            "When you use our payroll software?"
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let c = ctx("finance", "ledger");
        assert_eq!(
            resolve_placeholders("[relevant area] vs [relevant area]", &c),
            "financial management vs financial management"
        );
    }

    #[test]
    fn test_unknown_brackets_left_literal() {
        let c = ctx("finance", "ledger");
        assert_eq!(
            resolve_placeholders("What about [competitor name]?", &c),
            "What about [competitor name]?"
        );
    }
}
