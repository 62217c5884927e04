//! Commodity search predicates

use serde::{Deserialize, Serialize};

use super::entity::Commodity;

/// Field a commodity search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOption {
    /// Case-insensitive substring of the name
    Name,
    /// Exact, case-sensitive category
    Category,
    /// Exact, case-sensitive provider name
    Provider,
}

impl std::fmt::Display for SearchOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Category => write!(f, "category"),
            Self::Provider => write!(f, "provider"),
        }
    }
}

/// A single search predicate over commodities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommodityFilter {
    /// Name contains the value, ignoring case. The value is stored lowercased.
    NameContains(String),
    CategoryEquals(String),
    ProviderEquals(String),
}

impl CommodityFilter {
    /// Build the predicate for a search option and value
    pub fn new(option: SearchOption, value: impl Into<String>) -> Self {
        let value = value.into();

        match option {
            SearchOption::Name => Self::name_contains(value),
            SearchOption::Category => Self::CategoryEquals(value),
            SearchOption::Provider => Self::ProviderEquals(value),
        }
    }

    pub fn name_contains(value: impl Into<String>) -> Self {
        Self::NameContains(value.into().to_lowercase())
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self::CategoryEquals(value.into())
    }

    pub fn provider(value: impl Into<String>) -> Self {
        Self::ProviderEquals(value.into())
    }

    /// Check whether a commodity satisfies this predicate
    pub fn matches(&self, commodity: &Commodity) -> bool {
        match self {
            Self::NameContains(needle) => commodity.name().to_lowercase().contains(needle.as_str()),
            Self::CategoryEquals(category) => commodity.category() == category,
            Self::ProviderEquals(provider) => commodity.provider() == provider,
        }
    }

    /// Keep the commodities that match, preserving their order
    pub fn apply(&self, commodities: Vec<Commodity>) -> Vec<Commodity> {
        commodities.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commodity::CommodityId;

    fn commodity(id: &str, name: &str, provider: &str, category: &str) -> Commodity {
        Commodity::new(CommodityId::new(id).unwrap(), name, provider, category, 10.0).unwrap()
    }

    fn catalog() -> Vec<Commodity> {
        vec![
            commodity("1", "Galaxy S21", "Samsung", "electronics"),
            commodity("2", "Cotton Shirt", "Zara", "clothing"),
            commodity("3", "Olive Oil", "Farm Co", "food"),
        ]
    }

    fn ids(commodities: &[Commodity]) -> Vec<&str> {
        commodities.iter().map(|c| c.id().as_str()).collect()
    }

    #[test]
    fn test_search_option_deserialization() {
        let option: SearchOption = serde_json::from_str("\"provider\"").unwrap();
        assert_eq!(option, SearchOption::Provider);
        assert!(serde_json::from_str::<SearchOption>("\"price\"").is_err());
    }

    #[test]
    fn test_category_exact_match() {
        let result = CommodityFilter::category("electronics").apply(catalog());
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert!(CommodityFilter::category("Electronics").apply(catalog()).is_empty());
        assert!(CommodityFilter::category("electro").apply(catalog()).is_empty());
    }

    #[test]
    fn test_name_substring_ignores_case() {
        let result = CommodityFilter::name_contains("GALAXY").apply(catalog());
        assert_eq!(ids(&result), vec!["1"]);

        let result = CommodityFilter::name_contains("o").apply(catalog());
        assert_eq!(ids(&result), vec!["2", "3"]);
    }

    #[test]
    fn test_provider_exact_match() {
        let result = CommodityFilter::provider("Zara").apply(catalog());
        assert_eq!(ids(&result), vec!["2"]);
        assert!(CommodityFilter::provider("zara").apply(catalog()).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(CommodityFilter::new(SearchOption::Name, "laptop")
            .apply(catalog())
            .is_empty());
    }

    #[test]
    fn test_new_dispatches_by_option() {
        assert_eq!(
            CommodityFilter::new(SearchOption::Name, "ABC"),
            CommodityFilter::NameContains("abc".to_string())
        );
        assert_eq!(
            CommodityFilter::new(SearchOption::Category, "food"),
            CommodityFilter::CategoryEquals("food".to_string())
        );
        assert_eq!(
            CommodityFilter::new(SearchOption::Provider, "Zara"),
            CommodityFilter::ProviderEquals("Zara".to_string())
        );
    }
}
