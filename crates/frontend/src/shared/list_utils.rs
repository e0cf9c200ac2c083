//! Client-side list filtering.
//!
//! Lists are filtered in memory over the pages already fetched; server-side
//! filtering of these endpoints is not relied upon. Filtering borrows the
//! source list, keeps its order and never mutates it.

/// Types that support free-text search over a fixed set of fields
pub trait Searchable {
    /// Field values the search box looks into
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    /// A blank query matches everything.
    fn matches_search(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A set of filter selections for items of type `T`.
///
/// Each dimension passes everything while it is at its default
/// ("all" / empty), so `Default` is the cleared state.
pub trait ListFilter<T>: Default {
    fn matches(&self, item: &T) -> bool;

    /// Number of dimensions not at their default; drives the filter badge
    fn active_count(&self) -> usize;

    /// All-defaults configuration
    fn cleared() -> Self {
        Self::default()
    }

    fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Current free-text query
    fn search_query(&self) -> &str;

    fn set_search_query(&mut self, query: String);
}

/// Filters `items` by `filters`, preserving source order. Returned
/// references point into `items`.
pub fn apply_filters<'a, T, F>(items: &'a [T], filters: &F) -> Vec<&'a T>
where
    F: ListFilter<T>,
{
    items.iter().filter(|item| filters.matches(item)).collect()
}

/// Counts an optional selection as active when set
pub fn count_selected<T>(selection: &Option<T>) -> usize {
    usize::from(selection.is_some())
}

/// Counts a search query as active when it has non-blank text
pub fn count_query(query: &str) -> usize {
    usize::from(!query.trim().is_empty())
}

/// Optional selection passes everything when unset
pub fn selection_matches<T: PartialEq>(selection: &Option<T>, value: &T) -> bool {
    selection.as_ref().map_or(true, |selected| selected == value)
}

/// Serde adapter for filter-sheet selections: the sheet sends `"all"` (or
/// `null`) for an unset dimension, which maps to `None` and back to `"all"`.
///
/// Use with `#[serde(default, with = "all_sentinel")]` on `Option<T>` fields.
pub mod all_sentinel {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub const ALL: &str = "all";

    pub fn serialize<T, S>(selection: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match selection {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_str(ALL),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(raw) if raw.eq_ignore_ascii_case(ALL) => Ok(None),
            other => T::deserialize(other).map(Some).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Street {
        name: String,
        district: String,
        lit: bool,
    }

    impl Searchable for Street {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.district.as_str()]
        }
    }

    #[derive(Default)]
    struct StreetFilters {
        query: String,
        lit: Option<bool>,
    }

    impl ListFilter<Street> for StreetFilters {
        fn matches(&self, item: &Street) -> bool {
            selection_matches(&self.lit, &item.lit) && item.matches_search(&self.query)
        }

        fn active_count(&self) -> usize {
            count_query(&self.query) + count_selected(&self.lit)
        }

        fn search_query(&self) -> &str {
            &self.query
        }

        fn set_search_query(&mut self, query: String) {
            self.query = query;
        }
    }

    fn street(name: &str, district: &str, lit: bool) -> Street {
        Street {
            name: name.to_string(),
            district: district.to_string(),
            lit,
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let s = street("Calle de Alcalá", "Salamanca", true);
        assert!(s.matches_search("ALCA"));
        assert!(s.matches_search("  manca "));
        assert!(!s.matches_search("retiro"));
        assert!(s.matches_search("   "));
    }

    #[test]
    fn test_apply_filters_keeps_order_and_references() {
        let items = vec![
            street("Atocha", "Centro", true),
            street("Serrano", "Salamanca", false),
            street("Arenal", "Centro", true),
        ];
        let filters = StreetFilters {
            query: "centro".to_string(),
            lit: Some(true),
        };
        let result = apply_filters(&items, &filters);
        assert_eq!(result.len(), 2);
        assert!(std::ptr::eq(result[0], &items[0]));
        assert!(std::ptr::eq(result[1], &items[2]));
        assert_eq!(filters.active_count(), 2);
        assert!(!StreetFilters::cleared().is_active());
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct LitSheet {
        #[serde(default, with = "all_sentinel")]
        lit: Option<bool>,
    }

    #[test]
    fn test_all_sentinel_is_unset() {
        let parsed: LitSheet = serde_json::from_str(r#"{ "lit": "all" }"#).unwrap();
        assert_eq!(parsed, LitSheet { lit: None });
        let parsed: LitSheet = serde_json::from_str(r#"{ "lit": null }"#).unwrap();
        assert_eq!(parsed.lit, None);
        let parsed: LitSheet = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.lit, None);
        let parsed: LitSheet = serde_json::from_str(r#"{ "lit": false }"#).unwrap();
        assert_eq!(parsed.lit, Some(false));

        assert_eq!(
            serde_json::to_string(&LitSheet { lit: None }).unwrap(),
            r#"{"lit":"all"}"#
        );
        assert_eq!(
            serde_json::to_string(&LitSheet { lit: Some(true) }).unwrap(),
            r#"{"lit":true}"#
        );
    }

    #[test]
    fn test_all_sentinel_rejects_garbage() {
        assert!(serde_json::from_str::<LitSheet>(r#"{ "lit": "maybe" }"#).is_err());
    }
}
