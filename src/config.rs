//! Check configuration.
//!
//! A `CheckConfig` is an immutable snapshot constructed once per check
//! invocation and passed by reference into every component; there are no
//! mutable setters and no order-of-call sensitivity. String-valued options
//! are validated at the configuration boundary and rejected with a named
//! error before any scan starts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{CategorySet, NameError};
use crate::errors::{config_error, CheckError, ErrorKind};

/// Whether a method name must be wrapped onto its own line relative to the
/// return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WrapBeforeName {
    #[default]
    Always,
    Never,
    Optional,
}

impl WrapBeforeName {
    pub fn name(self) -> &'static str {
        match self {
            WrapBeforeName::Always => "always",
            WrapBeforeName::Never => "never",
            WrapBeforeName::Optional => "optional",
        }
    }
}

impl fmt::Display for WrapBeforeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WrapBeforeName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(WrapBeforeName::Always),
            "never" => Ok(WrapBeforeName::Never),
            "optional" => Ok(WrapBeforeName::Optional),
            other => Err(NameError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Line-wrap policy for method declarations and invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WrapPolicy {
    pub wrap_decl_before_name: WrapBeforeName,
    /// A declaration living entirely on one line is exempt from
    /// `wrap_decl_before_name` when this is set.
    pub allow_one_line_decl: bool,
    pub allow_multiple_parameters_per_line: bool,
    pub allow_multiple_args_per_line: bool,
}

impl Default for WrapPolicy {
    fn default() -> Self {
        Self {
            wrap_decl_before_name: WrapBeforeName::Always,
            allow_one_line_decl: true,
            allow_multiple_parameters_per_line: false,
            allow_multiple_args_per_line: false,
        }
    }
}

/// The full configuration snapshot for one check invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CheckConfig {
    /// Enabled alignment categories.
    pub categories: CategorySet,
    /// Whether the wrap-rule facet runs at all.
    pub wrap_method: bool,
    pub wrap: WrapPolicy,
    /// Whether the trailing-comment column facet runs.
    pub comment_alignment: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            categories: CategorySet::all(),
            wrap_method: true,
            wrap: WrapPolicy::default(),
            comment_alignment: true,
        }
    }
}

impl CheckConfig {
    /// A configuration running only the given alignment categories.
    pub fn alignment_only(categories: CategorySet) -> Self {
        Self {
            categories,
            wrap_method: false,
            wrap: WrapPolicy::default(),
            comment_alignment: false,
        }
    }

    /// A configuration running only the wrap facet with the given policy.
    pub fn wrap_only(wrap: WrapPolicy) -> Self {
        Self {
            categories: CategorySet::empty(),
            wrap_method: true,
            wrap,
            comment_alignment: false,
        }
    }

    /// A configuration running only the trailing-comment column facet.
    pub fn comments_only() -> Self {
        Self {
            categories: CategorySet::empty(),
            wrap_method: false,
            wrap: WrapPolicy::default(),
            comment_alignment: true,
        }
    }

    /// Parse a YAML configuration document, failing fast on unknown values.
    pub fn from_yaml(yaml: &str) -> Result<Self, CheckError> {
        serde_yaml::from_str(yaml).map_err(|e| {
            config_error(ErrorKind::InvalidConfig {
                detail: e.to_string(),
            })
        })
    }

    /// Validate the snapshot once before any scan. A configuration with no
    /// alignment categories and both facets switched off can never produce a
    /// report, so it is rejected here rather than silently passing every file.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.categories.is_empty() && !self.wrap_method && !self.comment_alignment {
            return Err(config_error(ErrorKind::InvalidConfig {
                detail: "no alignment categories and no facets enabled".into(),
            }));
        }
        Ok(())
    }
}

impl From<NameError> for CheckError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::UnknownCategory(name) => config_error(ErrorKind::InvalidPolicy {
                option: "categories".into(),
                value: name,
            }),
            NameError::UnknownPolicy(value) => config_error(ErrorKind::InvalidPolicy {
                option: "wrap-decl-before-name".into(),
                value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::AlignmentCategory;

    #[test]
    fn defaults_match_the_documented_policy() {
        let cfg = CheckConfig::default();
        assert_eq!(cfg.wrap.wrap_decl_before_name, WrapBeforeName::Always);
        assert!(cfg.wrap.allow_one_line_decl);
        assert!(!cfg.wrap.allow_multiple_parameters_per_line);
        assert!(!cfg.wrap.allow_multiple_args_per_line);
        assert_eq!(cfg.categories.len(), 9);
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = CheckConfig::from_yaml(
            "categories: [field-name, assignments]\nwrap:\n  wrap-decl-before-name: never\n",
        )
        .unwrap();
        assert!(cfg.categories.contains(AlignmentCategory::FieldName));
        assert!(cfg.categories.contains(AlignmentCategory::Assignments));
        assert_eq!(cfg.categories.len(), 2);
        assert_eq!(cfg.wrap.wrap_decl_before_name, WrapBeforeName::Never);
    }

    #[test]
    fn all_off_configuration_is_rejected() {
        let cfg = CheckConfig {
            categories: CategorySet::empty(),
            wrap_method: false,
            wrap: WrapPolicy::default(),
            comment_alignment: false,
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.kind.category(), crate::errors::ErrorCategory::Config);

        assert!(CheckConfig::default().validate().is_ok());
        assert!(CheckConfig::comments_only().validate().is_ok());
    }

    #[test]
    fn unknown_policy_value_is_rejected() {
        assert!("sometimes".parse::<WrapBeforeName>().is_err());
        let err = CheckConfig::from_yaml("wrap:\n  wrap-decl-before-name: sometimes\n");
        assert!(err.is_err());
    }
}
