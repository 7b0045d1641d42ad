//! Scenario tests for validating heterogeneous records
//!
//! Records with mixed value shapes use `serde_json::Value` as the value
//! type; predicates are plain closures over `&Value`.

use linesman::{validate, Rule, RuleSet, ValueSet};
use serde_json::{json, Value};

fn roster_rules() -> RuleSet<Value> {
    RuleSet::new()
        .field_msg(
            "name",
            |v: &Value| v.as_str().is_some_and(|name| name.len() > 4),
            "wrong name",
        )
        .field_msg("number", |v: &Value| *v == json!(12), "wrong number")
        .field_msg("position", |v: &Value| *v == json!("QB"), "wrong position")
        .field_msg("ranking", |v: &Value| *v == json!("GOAT"), "GOAT")
}

fn backup_quarterback() -> ValueSet<Value> {
    ValueSet::new()
        .with("name", json!("Tom Brady"))
        .with("number", json!(11))
        .with("position", json!("RB"))
        .with("ranking", json!("last"))
}

#[test]
fn test_passes_validation() {
    let values = ValueSet::new()
        .with("name", json!("Tom Brady"))
        .with("number", json!(12))
        .with("position", json!("QB"))
        .with("ranking", json!("GOAT"));

    let errors = validate(&values, &roster_rules());
    assert!(errors.is_empty());
}

#[test]
fn test_fails_with_user_provided_errors() {
    let errors = validate(&backup_quarterback(), &roster_rules());

    // The name rule passes and contributes nothing; everything else fails
    // in rule definition order.
    assert_eq!(errors, vec!["wrong number", "wrong position", "GOAT"]);
}

#[test]
fn test_fails_with_default_error() {
    let values = ValueSet::new().with("yards", json!(250));
    let rules = RuleSet::new().field("yards", |v: &Value| {
        v.as_i64().is_some_and(|yards| yards > 1000)
    });

    let errors = validate(&values, &rules);
    assert_eq!(errors, vec!["Invalid value for yards"]);
}

#[test]
fn test_fails_with_user_provided_error_for_missing_field() {
    let mut rules = roster_rules();
    rules.insert(
        "yards",
        Rule::with_message(
            |v: &Value| v.as_i64().is_some_and(|yards| yards > 1000),
            "incorrect yardage",
        ),
    );

    let errors = validate(&backup_quarterback(), &rules);
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[3], "incorrect yardage");
}

#[test]
fn test_fails_with_default_error_for_missing_field() {
    let mut rules = roster_rules();
    rules.insert(
        "yards",
        Rule::new(|v: &Value| v.as_i64().is_some_and(|yards| yards > 1000)),
    );

    let errors = validate(&backup_quarterback(), &rules);
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[3], "No value for 'yards'");
}

#[test]
fn test_value_insertion_order_is_irrelevant() {
    let reversed = ValueSet::new()
        .with("ranking", json!("last"))
        .with("position", json!("RB"))
        .with("number", json!(11))
        .with("name", json!("Tom Brady"));

    assert_eq!(
        validate(&reversed, &roster_rules()),
        validate(&backup_quarterback(), &roster_rules())
    );
}

#[test]
fn test_ruleset_check_matches_validate() {
    let rules = roster_rules();
    let values = backup_quarterback();
    assert_eq!(rules.check(&values), validate(&values, &rules));
}

#[test]
#[should_panic(expected = "not a string")]
fn test_predicate_fault_propagates_to_caller() {
    // A predicate that assumes the wrong shape fails loudly; the
    // validator does not catch or rewrap it.
    let values = ValueSet::new().with("number", json!(12));
    let rules = RuleSet::new().field("number", |v: &Value| {
        v.as_str().expect("not a string").len() > 4
    });

    validate(&values, &rules);
}
