//! Ready-made predicates and logical combinators in rules.
//!
//! Run with: `cargo run --example predicates`

use linesman::predicate::{between, contains, gt, len_min, not_empty, PredicateExt};
use linesman::{RuleSet, ValueSet};

fn main() {
    // Homogeneous string record: predicates come from the ops module
    // instead of hand-written closures.
    let profile: ValueSet<String> = ValueSet::new()
        .with("handle", String::from("tb12"))
        .with("team", String::from(""))
        .with("email", String::from("tb12@bucs.example"));

    let profile_rules = RuleSet::new()
        .field_msg(
            "handle",
            PredicateExt::<String>::and(not_empty(), len_min(3)),
            "handle too short",
        )
        .field_msg("team", not_empty(), "team is required")
        .field("email", contains("@"));

    for error in profile_rules.check(&profile) {
        println!("profile: {error}");
    }

    // Numeric record with range and negated predicates.
    let stats: ValueSet<i64> = ValueSet::new().with("number", 0).with("interceptions", 3);

    let stat_rules = RuleSet::new()
        .field_msg("number", between(1, 99), "jersey number out of range")
        .field_msg("interceptions", gt(2).not(), "too many interceptions")
        .field("sacks", between(0, 100));

    for error in stat_rules.check(&stats) {
        println!("stats: {error}");
    }
}
