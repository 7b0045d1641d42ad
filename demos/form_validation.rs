//! Validate a signup form and report every problem at once.
//!
//! Run with: `cargo run --example form_validation`

use linesman::{validate, RuleSet, ValueSet};
use serde_json::{json, Value};

fn main() {
    // What the user actually submitted. The "terms" checkbox never made
    // it into the payload at all.
    let submitted: ValueSet<Value> = ValueSet::new()
        .with("username", json!("tb"))
        .with("email", json!("tom.brady-at-example.com"))
        .with("age", json!(47));

    let rules = RuleSet::new()
        .field_msg(
            "username",
            |v: &Value| v.as_str().is_some_and(|s| s.len() >= 3),
            "username must be at least 3 characters",
        )
        .field_msg(
            "email",
            |v: &Value| v.as_str().is_some_and(|s| s.contains('@')),
            "email must contain @",
        )
        .field("age", |v: &Value| v.as_i64().is_some_and(|n| n >= 18))
        .field_msg(
            "terms",
            |v: &Value| v.as_bool() == Some(true),
            "terms must be accepted",
        );

    let errors = validate(&submitted, &rules);
    if errors.is_empty() {
        println!("signup ok");
    } else {
        println!("signup rejected:");
        for error in &errors {
            println!("  - {error}");
        }
    }
}
