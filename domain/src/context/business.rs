//! User-supplied business details

use crate::bank::CategoryKey;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of business the survey is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    B2bSaas,
    B2cEcommerce,
    ServiceBusiness,
    Consulting,
    Agency,
    PhysicalProduct,
    CourseEducation,
}

impl BusinessType {
    pub const ALL: [BusinessType; 7] = [
        BusinessType::B2bSaas,
        BusinessType::B2cEcommerce,
        BusinessType::ServiceBusiness,
        BusinessType::Consulting,
        BusinessType::Agency,
        BusinessType::PhysicalProduct,
        BusinessType::CourseEducation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            BusinessType::B2bSaas => "b2b-saas",
            BusinessType::B2cEcommerce => "b2c-ecommerce",
            BusinessType::ServiceBusiness => "service-business",
            BusinessType::Consulting => "consulting",
            BusinessType::Agency => "agency",
            BusinessType::PhysicalProduct => "physical-product",
            BusinessType::CourseEducation => "course-education",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusinessType::B2bSaas => "B2B SaaS",
            BusinessType::B2cEcommerce => "B2C E-commerce",
            BusinessType::ServiceBusiness => "Service Business",
            BusinessType::Consulting => "Consulting",
            BusinessType::Agency => "Agency",
            BusinessType::PhysicalProduct => "Physical Product",
            BusinessType::CourseEducation => "Course/Education",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for BusinessType {
    type Err = DomainError;

    /// Accepts either the kebab-case key or the display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        BusinessType::ALL
            .into_iter()
            .find(|t| t.key() == needle || t.label().to_lowercase() == needle)
            .ok_or_else(|| DomainError::UnknownBusinessType(s.to_string()))
    }
}

/// Fields required before questions can be generated from research areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    BusinessType,
    ProductService,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::BusinessType => write!(f, "business type"),
            MissingField::ProductService => write!(f, "product/service description"),
        }
    }
}

/// Business details entered by the user for one session.
///
/// Never persisted. `categories` has set semantics but keeps the order in
/// which areas were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContext {
    pub business_type: Option<BusinessType>,
    pub industry: String,
    pub product_service: String,
    categories: Vec<CategoryKey>,
}

impl BusinessContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_business_type(mut self, business_type: BusinessType) -> Self {
        self.business_type = Some(business_type);
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    pub fn with_product_service(mut self, product_service: impl Into<String>) -> Self {
        self.product_service = product_service.into();
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryKey>) -> Self {
        for category in categories {
            self.add_category(category);
        }
        self
    }

    pub fn categories(&self) -> &[CategoryKey] {
        &self.categories
    }

    /// Add a research area; returns false if it was already selected
    pub fn add_category(&mut self, category: CategoryKey) -> bool {
        if self.categories.contains(&category) {
            return false;
        }
        self.categories.push(category);
        true
    }

    /// Flip a research area on or off; returns whether it is now selected
    pub fn toggle_category(&mut self, category: CategoryKey) -> bool {
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
            false
        } else {
            self.categories.push(category);
            true
        }
    }

    pub fn has_category(&self, category: CategoryKey) -> bool {
        self.categories.contains(&category)
    }

    /// Fields that must be filled in before generating questions
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.business_type.is_none() {
            missing.push(MissingField::BusinessType);
        }
        if self.product_service.trim().is_empty() {
            missing.push(MissingField::ProductService);
        }
        missing
    }
}
