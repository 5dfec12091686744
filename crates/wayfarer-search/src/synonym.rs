//! Synonym groups and the reverse index over them
//!
//! Each group is stored once. Every member term is indexed back to its
//! group, so looking up any member yields the whole group and membership
//! is symmetric by construction.

use std::collections::HashMap;

/// A set of interchangeable lower-case search terms.
/// The first term is the canonical key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynonymGroup {
    terms: Vec<String>,
}

impl SynonymGroup {
    /// Build a group from its terms. Terms are lower-cased, blanks and
    /// duplicates are dropped, first-seen order is kept.
    /// Returns `None` if no term survives.
    pub fn new<I, S>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !out.contains(&term) {
                out.push(term);
            }
        }

        if out.is_empty() {
            None
        } else {
            Some(SynonymGroup { terms: out })
        }
    }

    /// Canonical key of the group
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.terms[0]
    }

    #[inline]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}

/// Canonical synonym groups plus a reverse index from member term to group
#[derive(Clone, Debug, Default)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
    index: HashMap<String, usize>,
}

impl SynonymTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The travel vocabulary shipped with Wayfarer
    pub fn builtin() -> Self {
        const GROUPS: &[&[&str]] = &[
            &["beach", "beaches", "coastal", "seaside", "shore", "seashore", "ocean", "sea"],
            &["temple", "temples", "shrine", "shrines", "religious", "sacred", "spiritual", "monastery"],
            &["mountain", "mountains", "peak", "peaks", "alpine", "hiking", "trekking", "summit"],
            &["adventure", "adventurous", "exciting", "thrilling", "extreme", "outdoor", "sports"],
            &["romantic", "romance", "couple", "honeymoon", "intimate", "love", "couples"],
            &["cultural", "culture", "traditional", "heritage", "historical", "ancient", "history"],
            &["relaxation", "relaxing", "peaceful", "calm", "serene", "tranquil", "spa", "wellness"],
        ];

        let mut table = SynonymTable::new();
        for terms in GROUPS {
            table.insert_terms(terms.iter().copied());
        }
        table
    }

    /// Add a group. A term already claimed by an earlier group stays with
    /// that group in the index.
    /// Returns the number of terms newly indexed.
    pub fn insert(&mut self, group: SynonymGroup) -> usize {
        let slot = self.groups.len();
        let mut indexed = 0;

        for term in group.terms() {
            if self.index.contains_key(term) {
                tracing::debug!(term = %term, "synonym term already indexed, keeping first group");
                continue;
            }
            self.index.insert(term.clone(), slot);
            indexed += 1;
        }

        self.groups.push(group);
        indexed
    }

    /// Add a group from raw terms; blank input is ignored
    pub fn insert_terms<I, S>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match SynonymGroup::new(terms) {
            Some(group) => self.insert(group),
            None => 0,
        }
    }

    /// Builder-style variant of [`SynonymTable::insert_terms`]
    pub fn with_group<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_terms(terms);
        self
    }

    /// Group containing `term` (already normalized), if any
    pub fn lookup(&self, term: &str) -> Option<&SynonymGroup> {
        self.index.get(term).map(|&slot| &self.groups[slot])
    }

    /// Groups whose canonical key occurs inside `query`
    pub fn keyed_within<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a SynonymGroup> + 'a {
        self.groups
            .iter()
            .filter(move |group| query.contains(group.canonical()))
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_normalizes_terms() {
        let group = SynonymGroup::new(["  Lake ", "lakes", "LAKE", ""]).unwrap();
        assert_eq!(group.canonical(), "lake");
        assert_eq!(group.terms(), &["lake".to_string(), "lakes".to_string()]);
    }

    #[test]
    fn test_blank_group_rejected() {
        assert!(SynonymGroup::new(["", "   "]).is_none());
        let mut table = SynonymTable::new();
        assert_eq!(table.insert_terms(Vec::<String>::new()), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_builtin_groups_are_disjoint() {
        let table = SynonymTable::builtin();
        assert_eq!(table.len(), 7);

        let total: usize = table.groups().iter().map(|g| g.terms().len()).sum();
        assert_eq!(table.index.len(), total);
    }

    #[test]
    fn test_every_member_resolves_to_its_group() {
        let table = SynonymTable::builtin();
        for group in table.groups() {
            for term in group.terms() {
                assert_eq!(table.lookup(term), Some(group));
            }
        }
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let table = SynonymTable::builtin();
        let spa = table.lookup("spa").unwrap();
        let wellness = table.lookup("wellness").unwrap();
        assert_eq!(spa, wellness);
        assert_eq!(spa.canonical(), "relaxation");
        assert!(spa.contains("wellness"));
        assert!(!spa.contains("beach"));
    }

    #[test]
    fn test_first_group_keeps_shared_term() {
        let mut table = SynonymTable::new()
            .with_group(["lake", "water"]);
        let indexed = table.insert_terms(["river", "water"]);

        assert_eq!(indexed, 1);
        assert_eq!(table.lookup("water").unwrap().canonical(), "lake");
        assert_eq!(table.lookup("river").unwrap().canonical(), "river");
    }

    #[test]
    fn test_keyed_within() {
        let table = SynonymTable::builtin();
        let keys: Vec<&str> = table
            .keyed_within("romantic beach getaway")
            .map(|g| g.canonical())
            .collect();
        assert_eq!(keys, vec!["beach", "romantic"]);
    }
}
