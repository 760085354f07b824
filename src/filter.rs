//! Multi-field filtering over the generated collections.
//!
//! Every criteria type treats `None` (or an empty search) as "All". Filtering
//! is a stable, pure projection: records are never reordered or copied.

use crate::state::{
    MatchStatus, MatchSummary, NewsArticle, NewsCategory, PlayerProfile, Position, Sport,
    TeamProfile, category_from_label, position_from_label, sport_from_label, status_from_label,
};

/// Value that means "no filter" for categorical fields when given as text.
pub const ALL_SENTINEL: &str = "All";

pub trait Criteria<R> {
    fn matches(&self, record: &R) -> bool;
}

/// Keep the records satisfying `criteria`, in their original order.
pub fn filter_records<'a, R, C>(records: impl IntoIterator<Item = &'a R>, criteria: &C) -> Vec<&'a R>
where
    R: 'a,
    C: Criteria<R> + ?Sized,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// Case-insensitive substring query. The lower-cased needle is kept next to
/// the raw input so matching never re-folds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    raw: String,
    folded: String,
}

impl TextQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.raw.push(c);
        self.folded = self.raw.to_lowercase();
    }

    pub fn pop(&mut self) -> Option<char> {
        let popped = self.raw.pop();
        if popped.is_some() {
            self.folded = self.raw.to_lowercase();
        }
        popped
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.folded.clear();
    }

    pub fn matches(&self, haystack: &str) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        if haystack.is_ascii() && self.folded.is_ascii() {
            return contains_ascii_ci(haystack, &self.folded);
        }
        haystack.to_lowercase().contains(&self.folded)
    }
}

/// Case-insensitive ASCII substring search without allocating a lowercased copy.
fn contains_ascii_ci(haystack: &str, needle: &str) -> bool {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.len() > h.len() {
        return false;
    }
    if n.is_empty() {
        return true;
    }
    h.windows(n.len())
        .any(|window| window.iter().zip(n).all(|(a, b)| a.eq_ignore_ascii_case(b)))
}

fn choice_matches<T: PartialEq>(choice: Option<T>, value: T) -> bool {
    choice.is_none_or(|wanted| wanted == value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCriteria {
    pub sport: Option<Sport>,
    pub status: Option<MatchStatus>,
}

impl Criteria<MatchSummary> for MatchCriteria {
    fn matches(&self, record: &MatchSummary) -> bool {
        choice_matches(self.sport, record.sport) && choice_matches(self.status, record.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamCriteria {
    pub search: TextQuery,
    pub sport: Option<Sport>,
}

impl Criteria<TeamProfile> for TeamCriteria {
    fn matches(&self, record: &TeamProfile) -> bool {
        self.search.matches(&record.name) && choice_matches(self.sport, record.sport)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerCriteria {
    pub search: TextQuery,
    pub sport: Option<Sport>,
    pub position: Option<Position>,
}

impl Criteria<PlayerProfile> for PlayerCriteria {
    fn matches(&self, record: &PlayerProfile) -> bool {
        self.search.matches(&record.name)
            && choice_matches(self.sport, record.sport)
            && choice_matches(self.position, record.position)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsCriteria {
    pub search: TextQuery,
    pub category: Option<NewsCategory>,
}

impl Criteria<NewsArticle> for NewsCriteria {
    fn matches(&self, record: &NewsArticle) -> bool {
        let text_hit = self.search.matches(&record.title) || self.search.matches(&record.summary);
        text_hit && choice_matches(self.category, record.category)
    }
}

/// Criteria that can be populated from loosely-typed `field=value` text.
pub trait FieldCriteria: Default {
    /// Apply one field. Returns `false` when the field name is unknown or the
    /// value names no existing category, meaning no record can ever match.
    fn set_field(&mut self, field: &str, value: &str) -> bool;
}

fn parse_choice<T>(value: &str, parse: fn(&str) -> Option<T>) -> Option<Option<T>> {
    if value.is_empty() || value == ALL_SENTINEL {
        return Some(None);
    }
    parse(value).map(Some)
}

fn assign_choice<T>(slot: &mut Option<T>, value: &str, parse: fn(&str) -> Option<T>) -> bool {
    match parse_choice(value, parse) {
        Some(choice) => {
            *slot = choice;
            true
        }
        None => false,
    }
}

impl FieldCriteria for MatchCriteria {
    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "sport" => assign_choice(&mut self.sport, value, sport_from_label),
            "status" => assign_choice(&mut self.status, value, status_from_label),
            _ => false,
        }
    }
}

impl FieldCriteria for TeamCriteria {
    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "search" | "name" => {
                self.search = TextQuery::new(value);
                true
            }
            "sport" => assign_choice(&mut self.sport, value, sport_from_label),
            _ => false,
        }
    }
}

impl FieldCriteria for PlayerCriteria {
    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "search" | "name" => {
                self.search = TextQuery::new(value);
                true
            }
            "sport" => assign_choice(&mut self.sport, value, sport_from_label),
            "position" => assign_choice(&mut self.position, value, position_from_label),
            _ => false,
        }
    }
}

impl FieldCriteria for NewsCriteria {
    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            // Search always spans both title and summary.
            "search" | "title" | "summary" => {
                self.search = TextQuery::new(value);
                true
            }
            "category" => assign_choice(&mut self.category, value, category_from_label),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query<C> {
    Where(C),
    Unsatisfiable,
}

impl<R, C: Criteria<R>> Criteria<R> for Query<C> {
    fn matches(&self, record: &R) -> bool {
        match self {
            Query::Where(criteria) => criteria.matches(record),
            Query::Unsatisfiable => false,
        }
    }
}

pub fn query_from_pairs<C: FieldCriteria>(pairs: &[(&str, &str)]) -> Query<C> {
    let mut criteria = C::default();
    for (field, value) in pairs {
        if !criteria.set_field(field, value) {
            return Query::Unsatisfiable;
        }
    }
    Query::Where(criteria)
}

#[cfg(test)]
mod tests {
    use super::{TextQuery, contains_ascii_ci};

    #[test]
    fn ascii_search_ignores_case() {
        assert!(contains_ascii_ci("Transfer Window", "transfer"));
        assert!(contains_ascii_ci("abc", ""));
        assert!(!contains_ascii_ci("ab", "abc"));
    }

    #[test]
    fn text_query_folds_non_ascii() {
        let query = TextQuery::new("ÖZ");
        assert!(query.matches("Mesut özil"));
        assert!(!query.matches("Ozil"));
    }

    #[test]
    fn text_query_edit_keeps_fold_in_sync() {
        let mut query = TextQuery::default();
        assert!(query.matches("anything"));
        query.push('B');
        query.push('e');
        assert!(query.matches("Keeling bear"));
        assert_eq!(query.pop(), Some('e'));
        assert_eq!(query.as_str(), "B");
        query.clear();
        assert!(query.is_empty());
    }
}
