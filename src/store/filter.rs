// Document filters - store queries evaluated over decoded JSON payloads

use regex::{Regex, RegexBuilder};
use serde_json::Value;

/// Single condition on a dotted field path.
#[derive(Debug, Clone)]
pub enum Cond {
    Eq(Value),
    Gte(f64),
    Lte(f64),
    ContainsCi(Regex),
}

/// Combined filter: every `all` clause must hold, plus at least one `any`
/// clause when the `any` group is non-empty. A document missing the addressed
/// field never matches the clause.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    all: Vec<(String, Cond)>,
    any: Vec<(String, Cond)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.all.push((path.to_string(), Cond::Eq(value.into())));
        self
    }

    pub fn gte(mut self, path: &str, bound: f64) -> Self {
        self.all.push((path.to_string(), Cond::Gte(bound)));
        self
    }

    pub fn lte(mut self, path: &str, bound: f64) -> Self {
        self.all.push((path.to_string(), Cond::Lte(bound)));
        self
    }

    /// Case-insensitive substring match against any of the given paths.
    /// The term is escaped before compilation, so it is matched as a literal.
    pub fn search_ci(mut self, paths: &[&str], term: &str) -> Self {
        if let Ok(re) = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            for path in paths {
                self.any.push((path.to_string(), Cond::ContainsCi(re.clone())));
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.any.is_empty()
    }

    pub fn matches(&self, doc: &Value) -> bool {
        self.all.iter().all(|(path, cond)| check(doc, path, cond))
            && (self.any.is_empty() || self.any.iter().any(|(path, cond)| check(doc, path, cond)))
    }
}

fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |value, segment| value.get(segment))
}

fn check(doc: &Value, path: &str, cond: &Cond) -> bool {
    let Some(value) = lookup(doc, path) else {
        return false;
    };
    match cond {
        Cond::Eq(expected) => value == expected,
        Cond::Gte(bound) => value.as_f64().is_some_and(|x| x >= *bound),
        Cond::Lte(bound) => value.as_f64().is_some_and(|x| x <= *bound),
        Cond::ContainsCi(re) => value.as_str().is_some_and(|s| re.is_match(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn venue() -> Value {
        json!({
            "name": "Sunshine Farm",
            "description": "Animals and tractor rides",
            "category": "Farm",
            "is_public": true,
            "age_range": {"min": 2, "max": 10},
            "pricing": {"type": "paid", "amount": 15.0}
        })
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::new().matches(&venue()));
        assert!(Filter::new().is_empty());
    }

    #[test]
    fn eq_on_nested_path() {
        assert!(Filter::new().eq("pricing.type", "paid").matches(&venue()));
        assert!(!Filter::new().eq("pricing.type", "free").matches(&venue()));
        assert!(Filter::new().eq("is_public", true).matches(&venue()));
    }

    #[test]
    fn missing_field_never_matches() {
        assert!(!Filter::new().eq("host_id", "u1").matches(&venue()));
        assert!(!Filter::new().gte("age_range.oldest", 1.0).matches(&venue()));
    }

    #[test]
    fn range_bounds() {
        assert!(Filter::new().gte("age_range.max", 5.0).matches(&venue()));
        assert!(!Filter::new().gte("age_range.max", 11.0).matches(&venue()));
        assert!(Filter::new().lte("age_range.min", 2.0).matches(&venue()));
        assert!(!Filter::new().lte("age_range.min", 1.0).matches(&venue()));
    }

    #[test]
    fn search_is_case_insensitive_and_ors_across_paths() {
        let filter = Filter::new().search_ci(&["name", "description"], "FARM");
        assert!(filter.matches(&venue()));

        let filter = Filter::new().search_ci(&["name", "description"], "tractor");
        assert!(filter.matches(&venue()));

        let filter = Filter::new().search_ci(&["name", "description"], "aquarium");
        assert!(!filter.matches(&venue()));
    }

    #[test]
    fn search_term_is_a_literal_not_a_pattern() {
        let doc = json!({"name": "a.b", "description": ""});
        assert!(Filter::new().search_ci(&["name"], "a.b").matches(&doc));
        let other = json!({"name": "axb", "description": ""});
        assert!(!Filter::new().search_ci(&["name"], "a.b").matches(&other));
    }

    #[test]
    fn and_combines_with_search_or() {
        let filter = Filter::new()
            .eq("category", "Farm")
            .search_ci(&["name", "description"], "sunshine");
        assert!(filter.matches(&venue()));

        let filter = Filter::new()
            .eq("category", "Indoor")
            .search_ci(&["name", "description"], "sunshine");
        assert!(!filter.matches(&venue()));
    }
}
