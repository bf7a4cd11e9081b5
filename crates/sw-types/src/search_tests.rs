//! Unit tests for fuzzy option matching.

use super::*;

#[test]
fn test_substring_match() {
    assert!(fuzzy_match("post", "PostgreSQL"));
    assert!(fuzzy_match("SQL", "postgresql"));
    assert!(fuzzy_match("mongo", "MongoDB"));
}

#[test]
fn test_subsequence_match() {
    // Scattered characters in order still match
    assert!(fuzzy_match("pg", "postgresql"));
    assert!(fuzzy_match("mgus", "Manage Users"));
    assert!(fuzzy_match("ghf", "GitHub Flow"));
}

#[test]
fn test_no_match() {
    assert!(!fuzzy_match("gp", "postgresql"));
    assert!(!fuzzy_match("mysql", "postgresql"));
    assert!(!fuzzy_match("xyz", "MongoDB"));
}

#[test]
fn test_empty_and_exact() {
    assert!(fuzzy_match("", "anything"));
    assert!(fuzzy_match("mysql", "mysql"));
    assert!(!fuzzy_match("mysql", ""));
}
