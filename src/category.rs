//! Alignment categories and the enabled-category set.
//!
//! The nine categories replace the original bean-style boolean toggles with a
//! single bitmask that the partitioner iterates uniformly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which kind of anchor token a group aligns on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentCategory {
    Assignments,
    CaseGroupStatements,
    FieldInitializer,
    FieldName,
    LocalVarInitializer,
    LocalVarName,
    MethodBody,
    MethodName,
    ParameterName,
}

/// Raised when a category or policy name from configuration does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("unknown alignment category '{0}'")]
    UnknownCategory(String),
    #[error("unknown wrap policy '{0}' (expected 'always', 'never' or 'optional')")]
    UnknownPolicy(String),
}

impl AlignmentCategory {
    /// All categories in declaration order.
    pub const ALL: [AlignmentCategory; 9] = [
        AlignmentCategory::Assignments,
        AlignmentCategory::CaseGroupStatements,
        AlignmentCategory::FieldInitializer,
        AlignmentCategory::FieldName,
        AlignmentCategory::LocalVarInitializer,
        AlignmentCategory::LocalVarName,
        AlignmentCategory::MethodBody,
        AlignmentCategory::MethodName,
        AlignmentCategory::ParameterName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlignmentCategory::Assignments => "assignments",
            AlignmentCategory::CaseGroupStatements => "case-group-statements",
            AlignmentCategory::FieldInitializer => "field-initializer",
            AlignmentCategory::FieldName => "field-name",
            AlignmentCategory::LocalVarInitializer => "local-var-initializer",
            AlignmentCategory::LocalVarName => "local-var-name",
            AlignmentCategory::MethodBody => "method-body",
            AlignmentCategory::MethodName => "method-name",
            AlignmentCategory::ParameterName => "parameter-name",
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for AlignmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlignmentCategory {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| NameError::UnknownCategory(s.to_string()))
    }
}

/// The set of enabled alignment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<AlignmentCategory>", from = "Vec<AlignmentCategory>")]
pub struct CategorySet {
    bits: u16,
}

impl CategorySet {
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        AlignmentCategory::ALL.into_iter().collect()
    }

    pub fn of(categories: &[AlignmentCategory]) -> Self {
        categories.iter().copied().collect()
    }

    pub fn insert(&mut self, category: AlignmentCategory) {
        self.bits |= category.bit();
    }

    pub fn contains(&self, category: AlignmentCategory) -> bool {
        self.bits & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Enabled categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = AlignmentCategory> + '_ {
        AlignmentCategory::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<AlignmentCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = AlignmentCategory>>(iter: I) -> Self {
        let mut set = Self::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<Vec<AlignmentCategory>> for CategorySet {
    fn from(v: Vec<AlignmentCategory>) -> Self {
        v.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<AlignmentCategory> {
    fn from(set: CategorySet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for cat in AlignmentCategory::ALL {
            assert_eq!(cat.name().parse::<AlignmentCategory>(), Ok(cat));
        }
        assert!("field-nam".parse::<AlignmentCategory>().is_err());
    }

    #[test]
    fn set_semantics() {
        let mut set = CategorySet::empty();
        assert!(set.is_empty());
        set.insert(AlignmentCategory::FieldName);
        set.insert(AlignmentCategory::FieldName);
        assert_eq!(set.len(), 1);
        assert!(set.contains(AlignmentCategory::FieldName));
        assert!(!set.contains(AlignmentCategory::Assignments));
        assert_eq!(CategorySet::all().len(), 9);
    }

    #[test]
    fn iteration_order_is_declaration_order() {
        let set = CategorySet::of(&[
            AlignmentCategory::ParameterName,
            AlignmentCategory::Assignments,
        ]);
        let got: Vec<_> = set.iter().collect();
        assert_eq!(
            got,
            vec![
                AlignmentCategory::Assignments,
                AlignmentCategory::ParameterName
            ]
        );
    }
}
