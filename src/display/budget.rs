//! Budget target and template display formatting

use super::report::{format_money, truncate};
use crate::models::{BudgetSettings, CategoryBudget, PeriodicTemplate};

fn format_budget_section(title: &str, entries: &[CategoryBudget], symbol: &str) -> String {
    let mut output = format!("{}:\n", title);
    if entries.is_empty() {
        output.push_str("  (none)\n");
    }
    for entry in entries {
        output.push_str(&format!(
            "  {:<28} {:>12}\n",
            truncate(entry.category.as_str(), 28),
            format_money(entry.monthly_amount, symbol)
        ));
    }
    output
}

/// Format all budget targets, expenses first
pub fn format_budget_list(settings: &BudgetSettings, symbol: &str) -> String {
    if settings.is_empty() {
        return "No budgets configured.\n".to_string();
    }

    let mut output = format_budget_section("Expense budgets", &settings.expenses, symbol);
    output.push('\n');
    output.push_str(&format_budget_section("Income budgets", &settings.income, symbol));
    output
}

/// Format templates in the order given
pub fn format_template_list(templates: &[PeriodicTemplate], symbol: &str) -> String {
    if templates.is_empty() {
        return "No templates found.\n".to_string();
    }

    let mut output = format!(
        "{:12} {:8} {:8} {:18} {:>12}  {}\n",
        "ID", "Kind", "Every", "Category", "Amount", "Description"
    );
    for template in templates {
        output.push_str(&format!(
            "{:12} {:8} {:8} {:18} {:>12}  {}\n",
            template.id.to_string(),
            template.kind.to_string(),
            template.frequency.to_string(),
            truncate(&template.category, 18),
            format_money(template.amount, symbol),
            template.description
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Frequency, Money};

    #[test]
    fn test_format_budget_list() {
        let settings = BudgetSettings::from_entries(vec![
            CategoryBudget::expense("Food", Money::from_units(200)),
            CategoryBudget::income("Salary", Money::from_units(3000)),
        ]);

        let output = format_budget_list(&settings, "$");
        assert!(output.contains("Expense budgets"));
        assert!(output.contains("Food"));
        assert!(output.contains("$3000.00"));
        assert_eq!(format_budget_list(&BudgetSettings::default(), "$"), "No budgets configured.\n");
    }

    #[test]
    fn test_format_template_list() {
        let template = PeriodicTemplate::new(
            EntryKind::Expense,
            Money::from_units(900),
            "Rent",
            "Flat",
            Frequency::Monthly,
        );

        let output = format_template_list(std::slice::from_ref(&template), "$");
        assert!(output.contains(&template.id.to_string()));
        assert!(output.contains("monthly"));
        assert!(output.contains("$900.00"));
    }
}
