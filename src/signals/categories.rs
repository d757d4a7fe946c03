//! Category budget lookup and oscillator classification.

use crate::config::CategoryBudgets;
use crate::models::indicators::IndicatorCategory;

/// Share of the 100-point budget allotted to a category.
pub fn category_budget(budgets: &CategoryBudgets, category: IndicatorCategory) -> f64 {
    match category {
        IndicatorCategory::Trend => budgets.trend,
        IndicatorCategory::Momentum => budgets.momentum,
        IndicatorCategory::Volatility => budgets.volatility,
        IndicatorCategory::Volume => budgets.volume,
    }
}

/// Oscillators get boosted in range-bound regimes.
pub fn is_oscillator(indicator_name: &str) -> bool {
    matches!(indicator_name, "RSI" | "Stochastic" | "Bollinger")
}
