//! Limits applied by the selection engine and the session

use crate::bank::CategoryKey;
use std::collections::BTreeMap;

/// Default maximum size of the generated pool
pub const DEFAULT_CAPACITY: usize = 12;
/// Default number of questions auto-selected on the first generation
pub const DEFAULT_AUTO_SELECT: usize = 6;
/// Default maximum number of questions selectable one by one
pub const DEFAULT_MAX_SELECTED: usize = 10;

/// Capacity, auto-select and per-category quota settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// Maximum pool size; fresh picks beyond it are dropped from the tail
    pub capacity: usize,
    /// How many fresh questions are selected when nothing was selected yet
    pub auto_select: usize,
    /// Upper bound for toggling questions on individually
    pub max_selected: usize,
    quotas: BTreeMap<CategoryKey, usize>,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            auto_select: DEFAULT_AUTO_SELECT,
            max_selected: DEFAULT_MAX_SELECTED,
            quotas: BTreeMap::new(),
        }
    }
}

impl SelectionPolicy {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_auto_select(mut self, auto_select: usize) -> Self {
        self.auto_select = auto_select;
        self
    }

    pub fn with_max_selected(mut self, max_selected: usize) -> Self {
        self.max_selected = max_selected;
        self
    }

    /// Override how many questions are drawn from one category
    pub fn with_quota(mut self, category: CategoryKey, quota: usize) -> Self {
        self.quotas.insert(category, quota);
        self
    }

    /// Questions drawn from `category` per generation
    pub fn quota(&self, category: CategoryKey) -> usize {
        self.quotas
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_quota())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = SelectionPolicy::default();
        assert_eq!(policy.capacity, 12);
        assert_eq!(policy.auto_select, 6);
        assert_eq!(policy.max_selected, 10);
        assert_eq!(policy.quota(CategoryKey::PainPoints), 5);
    }

    #[test]
    fn test_quota_override() {
        let policy = SelectionPolicy::default().with_quota(CategoryKey::Language, 2);
        assert_eq!(policy.quota(CategoryKey::Language), 2);
        assert_eq!(policy.quota(CategoryKey::Triggers), 4);
    }
}
