//! Minimal presentation adapter driving the budget ledger

use bigdecimal::BigDecimal;
use budget_core::{BudgetController, Entry, EntryKind, Ledger, Totals};
use std::str::FromStr;

fn render_percent(percent: Option<i64>) -> String {
    match percent {
        Some(pct) => format!("{}%", pct),
        None => "---".to_string(),
    }
}

fn render_entry(entry: &Entry) -> String {
    match entry.kind {
        EntryKind::Income => format!("  + {:<12} {:>10}", entry.description, entry.value),
        EntryKind::Expense => format!(
            "  - {:<12} {:>10} {:>6}",
            entry.description,
            entry.value,
            render_percent(entry.percent_of_income)
        ),
    }
}

fn render_totals(totals: &Totals) {
    println!("  Income:   {}", totals.total_income);
    println!(
        "  Expenses: {} ({})",
        totals.total_expense,
        render_percent(totals.expense_percent_of_income)
    );
    println!("  Budget:   {}", totals.net_budget);
}

fn render<C: BudgetController>(controller: &C) {
    for kind in [EntryKind::Income, EntryKind::Expense] {
        for entry in controller.get_entries(kind) {
            println!("{}", render_entry(entry));
        }
    }
    render_totals(&controller.get_totals());
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("💰 Budget Core - Widget Example\n");

    let mut ledger = Ledger::new();

    println!("📝 Expenses before any income...");
    ledger.add_entry(EntryKind::Expense, "rent", BigDecimal::from(900));
    ledger.add_entry(EntryKind::Expense, "groceries", BigDecimal::from_str("245.60")?);
    render(&ledger);

    println!("💵 Salary arrives...");
    let salary = ledger.add_entry(EntryKind::Income, "salary", BigDecimal::from(3000));
    ledger.add_entry(EntryKind::Income, "freelance", BigDecimal::from_str("450.25")?);
    render(&ledger);

    println!("🗑️  Removing salary...");
    ledger.remove_entry(salary.id, EntryKind::Income);
    render(&ledger);

    println!("📦 JSON snapshot:");
    println!("{}", serde_json::to_string_pretty(&ledger.summary())?);

    Ok(())
}
