//! List-rules command implementation.

use asset_lint_rules::{all_rules, available_rule_sets};

/// Prints the built-in rules and rule sets.
pub fn run() {
    println!("Available rules:\n");
    for rule in all_rules() {
        println!(
            "  {} {:<26} {:<8} {}",
            rule.code(),
            rule.name(),
            rule.severity().to_string(),
            rule.description()
        );
    }
    println!("\nRule sets: {}", available_rule_sets().join(", "));
}
