// 🎯 Selection - "all" sentinel vs explicit membership as a tagged union
//
// Rules (every transition is total, never yields an empty subset):
//   toggle_all:  All        → Subset(universe)   (expands, does not clear)
//                Subset(_)  → All
//   toggle(id):  All        → Subset({id})
//                Subset(s)  → flip id; empty → All; == universe → All

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "ids")]
pub enum Selection<Id: Ord> {
    /// No filter - every item passes
    All,

    /// Explicit members; an empty subset is never produced by the transitions
    Subset(BTreeSet<Id>),
}

impl<Id: Ord> Default for Selection<Id> {
    fn default() -> Self {
        Selection::All
    }
}

impl<Id: Ord + Clone> Selection<Id> {
    /// Build from explicit ids; no ids means "all"
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Id>,
    {
        let set: BTreeSet<Id> = ids.into_iter().collect();
        if set.is_empty() {
            Selection::All
        } else {
            Selection::Subset(set)
        }
    }

    /// Build from explicit ids, keeping only ids the universe knows
    ///
    /// Unknown ids are dropped; if none survive the result is "all".
    pub fn from_ids_in<I>(ids: I, universe: &[Id]) -> Self
    where
        I: IntoIterator<Item = Id>,
    {
        Selection::from_ids(ids.into_iter().filter(|id| universe.contains(id)))
    }

    pub fn is_all(&self) -> bool {
        match self {
            Selection::All => true,
            Selection::Subset(set) => set.is_empty(),
        }
    }

    pub fn contains(&self, id: &Id) -> bool {
        match self {
            Selection::All => true,
            Selection::Subset(set) => set.is_empty() || set.contains(id),
        }
    }

    /// Toggle the "all" control
    pub fn toggle_all(&self, universe: &[Id]) -> Self {
        match self {
            Selection::All => {
                let everything: BTreeSet<Id> = universe.iter().cloned().collect();
                if everything.is_empty() {
                    Selection::All
                } else {
                    Selection::Subset(everything)
                }
            }
            Selection::Subset(_) => Selection::All,
        }
    }

    /// Toggle one individual id; ids outside the universe are ignored
    pub fn toggle(&self, id: &Id, universe: &[Id]) -> Self {
        if !universe.contains(id) {
            return self.clone();
        }

        let mut next = match self {
            Selection::All => BTreeSet::new(),
            Selection::Subset(set) => set.clone(),
        };

        if !next.remove(id) {
            next.insert(id.clone());
        }

        let full = universe.iter().all(|u| next.contains(u));
        if next.is_empty() || full {
            Selection::All
        } else {
            Selection::Subset(next)
        }
    }

    /// Ids of the universe that pass the filter, in universe order
    pub fn resolve(&self, universe: &[Id]) -> Vec<Id> {
        universe
            .iter()
            .filter(|id| self.contains(id))
            .cloned()
            .collect()
    }

    /// Items whose key passes the filter
    pub fn filter<'a, T, F>(&self, items: &'a [T], key: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> &Id,
    {
        items.iter().filter(|item| self.contains(key(item))).collect()
    }
}

impl Selection<String> {
    /// Parse a comma-separated id list; "all" or blank means no filter
    pub fn parse_list(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Selection::All;
        }

        Selection::from_ids(
            trimmed
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
                .map(|s| s.to_string()),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    fn subset(ids: &[&str]) -> Selection<String> {
        Selection::Subset(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_toggle_all_from_all_expands_to_every_id() {
        let sel: Selection<String> = Selection::All;
        let next = sel.toggle_all(&universe());

        assert_eq!(next, subset(&["a", "b", "c"]));
        assert!(!next.is_all());
    }

    #[test]
    fn test_toggle_all_from_subset_selects_all() {
        let sel = subset(&["b"]);
        assert_eq!(sel.toggle_all(&universe()), Selection::All);
    }

    #[test]
    fn test_toggle_all_with_empty_universe_stays_all() {
        let sel: Selection<String> = Selection::All;
        assert_eq!(sel.toggle_all(&[]), Selection::All);
    }

    #[test]
    fn test_toggle_from_all_selects_only_that_id() {
        let sel: Selection<String> = Selection::All;
        assert_eq!(sel.toggle(&"b".to_string(), &universe()), subset(&["b"]));
    }

    #[test]
    fn test_selecting_every_id_collapses_to_all() {
        let sel = subset(&["a", "b"]);
        assert_eq!(sel.toggle(&"c".to_string(), &universe()), Selection::All);
    }

    #[test]
    fn test_deselect_from_expanded_set_shrinks() {
        let expanded = Selection::<String>::All.toggle_all(&universe());
        let next = expanded.toggle(&"a".to_string(), &universe());

        assert_eq!(next, subset(&["b", "c"]));
    }

    #[test]
    fn test_removing_last_selection_reverts_to_all() {
        let sel = subset(&["c"]);
        let next = sel.toggle(&"c".to_string(), &universe());

        assert_eq!(next, Selection::All);
        assert_ne!(next, Selection::Subset(BTreeSet::new()));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let sel = subset(&["a"]);
        assert_eq!(sel.toggle(&"zzz".to_string(), &universe()), sel);
    }

    #[test]
    fn test_single_item_universe() {
        let universe = vec!["only".to_string()];
        let sel: Selection<String> = Selection::All;

        // Selecting the only id makes the subset equal to the universe
        assert_eq!(sel.toggle(&"only".to_string(), &universe), Selection::All);
    }

    #[test]
    fn test_resolve_and_contains() {
        let sel = subset(&["c", "a"]);

        assert_eq!(sel.resolve(&universe()), vec!["a".to_string(), "c".to_string()]);
        assert!(sel.contains(&"a".to_string()));
        assert!(!sel.contains(&"b".to_string()));
        assert!(Selection::<String>::All.contains(&"b".to_string()));
    }

    #[test]
    fn test_empty_subset_behaves_like_all() {
        let sel: Selection<String> = Selection::Subset(BTreeSet::new());

        assert!(sel.is_all());
        assert_eq!(sel.resolve(&universe()).len(), 3);
    }

    #[test]
    fn test_from_ids_and_parse_list() {
        assert_eq!(Selection::<String>::from_ids(Vec::new()), Selection::All);
        assert_eq!(Selection::parse_list("all"), Selection::All);
        assert_eq!(Selection::parse_list(""), Selection::All);
        assert_eq!(Selection::parse_list("a, b,"), subset(&["a", "b"]));
    }

    #[test]
    fn test_from_ids_in_drops_unknown_ids() {
        let picked = Selection::from_ids_in(vec!["a".to_string(), "typo".to_string()], &universe());
        assert_eq!(picked, subset(&["a"]));

        let nothing_known = Selection::from_ids_in(vec!["typo".to_string()], &universe());
        assert_eq!(nothing_known, Selection::All);
    }

    #[test]
    fn test_filter_by_key() {
        let items = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];
        let sel = subset(&["b", "c"]);

        let picked: Vec<i32> = sel.filter(&items, |(id, _)| id).iter().map(|(_, v)| *v).collect();
        assert_eq!(picked, vec![2, 3]);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&subset(&["a"])).unwrap();
        assert_eq!(json, r#"{"mode":"subset","ids":["a"]}"#);

        let all: Selection<String> = serde_json::from_str(r#"{"mode":"all"}"#).unwrap();
        assert_eq!(all, Selection::All);
    }
}
