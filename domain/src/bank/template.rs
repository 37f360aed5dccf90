//! Ready-to-use survey templates.
//!
//! A survey template is a fixed, curated set of question templates for a
//! common business scenario. Applying one replaces the generated pool with
//! its questions, all pre-selected; afterwards unselected slots can be
//! refilled from a research area ("fill gaps").

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurveyTemplate {
    /// Customers already using a shipped product
    ExistingProduct,
    /// Validating demand before or just after launch
    NewProduct,
    /// Customers who cancelled or stopped buying
    ChurnedCustomers,
    /// Clients of a newly launched service offering
    ServiceLaunch,
}

const EXISTING_PRODUCT: &[&str] = &[
    "What was the biggest challenge you were facing before finding our solution?",
    "When you use our [product/service], what job are you 'hiring' it to do?",
    "What almost stopped you from moving forward with us?",
    "How would you describe our solution to a colleague in your own words?",
    "What made you choose us over other options in the market?",
];

const NEW_PRODUCT: &[&str] = &[
    "What keeps you up at night when it comes to [relevant area]?",
    "How are you solving this problem today?",
    "What's the most frustrating part of your current [relevant process]?",
    "What would a [product/service] need to do for you to pay for it?",
    "What would make you hesitate to try a new [product/service]?",
];

const CHURNED_CUSTOMERS: &[&str] = &[
    "What originally made you decide to try our [product/service]?",
    "What changed that led you to stop using it?",
    "What did you switch to, if anything?",
    "What could we have done differently to keep you?",
    "What would have to change for you to consider coming back?",
];

const SERVICE_LAUNCH: &[&str] = &[
    "What made you look for outside help with [relevant area]?",
    "What did you expect from working with us before we started?",
    "Which part of our [product/service] has been most valuable so far?",
    "What part of the [relevant process] still feels harder than it should?",
    "How would you describe working with us to a peer?",
];

impl SurveyTemplate {
    pub const ALL: [SurveyTemplate; 4] = [
        SurveyTemplate::ExistingProduct,
        SurveyTemplate::NewProduct,
        SurveyTemplate::ChurnedCustomers,
        SurveyTemplate::ServiceLaunch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyTemplate::ExistingProduct => "existing-product",
            SurveyTemplate::NewProduct => "new-product",
            SurveyTemplate::ChurnedCustomers => "churned-customers",
            SurveyTemplate::ServiceLaunch => "service-launch",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SurveyTemplate::ExistingProduct => "Existing Product Feedback",
            SurveyTemplate::NewProduct => "New Product Validation",
            SurveyTemplate::ChurnedCustomers => "Churned Customer Exit Survey",
            SurveyTemplate::ServiceLaunch => "Service Launch Check-in",
        }
    }

    /// The template's question templates, in survey order
    pub fn questions(&self) -> &'static [&'static str] {
        match self {
            SurveyTemplate::ExistingProduct => EXISTING_PRODUCT,
            SurveyTemplate::NewProduct => NEW_PRODUCT,
            SurveyTemplate::ChurnedCustomers => CHURNED_CUSTOMERS,
            SurveyTemplate::ServiceLaunch => SERVICE_LAUNCH,
        }
    }
}

impl fmt::Display for SurveyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SurveyTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SurveyTemplate::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| DomainError::UnknownTemplate(s.to_string()))
    }
}
