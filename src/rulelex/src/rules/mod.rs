// rulelex/src/rules/mod.rs

//! Declarative token rules.
//!
//! A rule document ([`LexerSpec`]) is plain data that can be deserialized from
//! YAML or JSON. Building a [`RuleTable`] from it validates every rule,
//! compiles patterns and checks that literal ordering leaves every rule
//! reachable.

pub mod spec;
pub mod table;

pub use spec::{LexerSpec, RuleSpec, ScannerKind, DEFAULT_QUOTES, DEFAULT_SCANNERS};
pub use table::{Matcher, Rule, RuleTable, RuleTableBuilder};
