//! Per-condition dietary guideline compliance checks.
//!
//! Rule-based checks against a product's nutrition facts, one threshold set
//! per health condition. The report is shown on detail pages next to the
//! suitability score.

use rust_decimal::Decimal;
use serde::Serialize;

use lavishbite_core::Product;

/// Result of checking a product against one condition's guidelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    /// True when every guideline check passed.
    pub compliant: bool,
    /// Share of passed checks, 0-100.
    pub score: u8,
    /// Human-readable descriptions of passed checks.
    pub passes: Vec<String>,
    /// Human-readable descriptions of failed checks.
    pub issues: Vec<String>,
}

impl ComplianceReport {
    fn from_checks(passes: Vec<String>, issues: Vec<String>) -> Self {
        let total = passes.len() + issues.len();
        let score = if total == 0 {
            0
        } else {
            // Truncating division matches the displayed integer percentage.
            u8::try_from(passes.len() * 100 / total).unwrap_or(100)
        };
        Self {
            compliant: !passes.is_empty() && issues.is_empty(),
            score,
            passes,
            issues,
        }
    }
}

/// Check `product` against the dietary guidelines for `condition`.
///
/// Conditions without a guideline table produce an empty, non-compliant
/// report rather than an error.
#[must_use]
pub fn check_compliance(product: &Product, condition: &str) -> ComplianceReport {
    let n = &product.nutrition;
    let mut passes = Vec::new();
    let mut issues = Vec::new();

    match condition {
        "cardiovascular" => {
            check_max_grams(n.saturated_fat, 2, "Low saturated fat", "Saturated fat too high", &mut passes, &mut issues);
            check_max_mg(n.sodium, 400, "Low sodium", "Sodium too high", &mut passes, &mut issues);
            check_min_grams(n.fiber, 3, "High fiber", "Fiber too low", &mut passes, &mut issues);
            if n.trans_fat.is_zero() {
                passes.push("No trans fats".to_string());
            } else {
                issues.push(format!("Contains trans fats ({}g)", n.trans_fat));
            }
        }
        "diabetes" => {
            check_max_grams(n.sugars, 5, "Low added sugars", "Sugar too high", &mut passes, &mut issues);
            check_min_grams(n.fiber, 3, "High fiber", "Fiber too low", &mut passes, &mut issues);
            if n.total_carbs <= Decimal::from(45) {
                passes.push("Moderate carbohydrates".to_string());
            } else {
                issues.push(format!("Carbs too high ({}g, max 45g)", n.total_carbs));
            }
        }
        "hypertension" => {
            check_max_mg(n.sodium, 200, "Very low sodium", "Sodium too high", &mut passes, &mut issues);
            if n.potassium >= 300 {
                passes.push("Rich in potassium".to_string());
            } else {
                issues.push(format!("Low potassium ({}mg, min 300mg)", n.potassium));
            }
            check_max_grams(n.saturated_fat, 2, "Low saturated fat", "Saturated fat too high", &mut passes, &mut issues);
        }
        _ => {}
    }

    ComplianceReport::from_checks(passes, issues)
}

fn check_max_grams(
    value: Decimal,
    max: u32,
    pass: &str,
    issue: &str,
    passes: &mut Vec<String>,
    issues: &mut Vec<String>,
) {
    if value < Decimal::from(max) {
        passes.push(pass.to_string());
    } else {
        issues.push(format!("{issue} ({value}g, max {max}g)"));
    }
}

fn check_min_grams(
    value: Decimal,
    min: u32,
    pass: &str,
    issue: &str,
    passes: &mut Vec<String>,
    issues: &mut Vec<String>,
) {
    if value >= Decimal::from(min) {
        passes.push(pass.to_string());
    } else {
        issues.push(format!("{issue} ({value}g, min {min}g)"));
    }
}

fn check_max_mg(
    value: u32,
    max: u32,
    pass: &str,
    issue: &str,
    passes: &mut Vec<String>,
    issues: &mut Vec<String>,
) {
    if value < max {
        passes.push(pass.to_string());
    } else {
        issues.push(format!("{issue} ({value}mg, max {max}mg)"));
    }
}
