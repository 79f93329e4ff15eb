//! User-facing feedback text
//!
//! Turns deviation classifications into short sentences for the presentation
//! layer.

use rust_decimal::Decimal;

use crate::display::report::format_percentage;
use crate::engine::{BucketEvaluation, BudgetAnalysis, DeviationStatus};
use crate::models::{CategoryType, FrameworkId};

/// One line of feedback for a bucket
pub fn bucket_feedback(bucket: &BucketEvaluation) -> String {
    let name = bucket.category_type.label();
    let share = format_percentage(bucket.percentage);

    let Some(status) = bucket.status else {
        return format!("{} are {} of income.", name, share);
    };

    let target = bucket.target.map(format_target).unwrap_or_default();
    let points = bucket
        .deviation
        .map(|d| format!("{:.1}", d.abs().round_dp(1)))
        .unwrap_or_default();

    match status {
        DeviationStatus::Undetermined => {
            format!("Add income to compare {} against the framework.", name.to_lowercase())
        }
        DeviationStatus::OnTarget => format!(
            "{} are {} of income, within range of the {} target.",
            name, share, target
        ),
        DeviationStatus::OverTarget => format!(
            "{} are {} of income, {} points over the {} target. {}",
            name,
            share,
            points,
            target,
            over_advice(bucket.category_type)
        ),
        DeviationStatus::UnderTarget => format!(
            "{} are {} of income, {} points under the {} target. {}",
            name,
            share,
            points,
            target,
            under_advice(bucket.category_type)
        ),
    }
}

/// A one-line verdict for the whole budget
pub fn summary_feedback(analysis: &BudgetAnalysis, symbol: &str) -> String {
    let evaluation = &analysis.evaluation;

    if analysis.total_income.is_zero() {
        return "No income recorded yet; percentages cannot be compared.".to_string();
    }

    if evaluation.framework == FrameworkId::ZeroBased {
        return if analysis.is_fully_allocated() {
            "Every unit of income has been assigned.".to_string()
        } else if analysis.unallocated.is_negative() {
            format!(
                "Budgeted {} more than income.",
                analysis.unallocated.abs().format_with_symbol(symbol)
            )
        } else {
            format!(
                "{} of income is not yet assigned.",
                analysis.unallocated.format_with_symbol(symbol)
            )
        };
    }

    if !evaluation.has_targets {
        return format!(
            "{} has no target allocation; showing shares of income only.",
            evaluation.framework.label()
        );
    }

    let off_target = evaluation
        .buckets
        .iter()
        .filter(|b| b.status != Some(DeviationStatus::OnTarget))
        .count();

    if off_target == 0 {
        format!("Your budget follows the {}.", evaluation.framework.label())
    } else {
        format!(
            "{} of {} buckets are outside the {}.",
            off_target,
            evaluation.buckets.len(),
            evaluation.framework.label()
        )
    }
}

fn format_target(target: Decimal) -> String {
    format!("{}%", target.normalize())
}

fn over_advice(category_type: CategoryType) -> &'static str {
    match category_type {
        CategoryType::Needs => "Look for fixed costs to reduce.",
        CategoryType::Wants => "Consider trimming discretionary spending.",
        CategoryType::Savings | CategoryType::Income => "You are saving ahead of plan.",
    }
}

fn under_advice(category_type: CategoryType) -> &'static str {
    match category_type {
        CategoryType::Needs => "There is room to move money elsewhere.",
        CategoryType::Wants => "There is room for discretionary spending.",
        CategoryType::Savings | CategoryType::Income => "Try to set more aside.",
    }
}
