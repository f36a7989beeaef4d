use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use ledgersift::categorize::Classifier;
use ledgersift::import::{self, DescriptionCleaner};
use ledgersift::summarize;
use ledgersift::tax;
use ledgersift::Ledger;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }
    match args[1].as_str() {
        "import" => cli_import(&args[2..]),
        "summary" | "s" => cli_summary(&args[2..]),
        "tax" => cli_tax(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ledgersift {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("LedgerSift — bank statements in, categorized ledger out");
    println!();
    println!("Usage: ledgersift <command>");
    println!();
    println!("Commands:");
    println!("  import <file.csv>...          Import statements and print the ledger");
    println!("  summary <file.csv>...         Print a financial summary with a tax estimate");
    println!("    --from <YYYY-MM-DD>         Window start (default: earliest transaction)");
    println!("    --to <YYYY-MM-DD>           Window end (default: latest transaction)");
    println!("  tax <annual_income>           Print the bracket-by-bracket tax liability");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

/// Ingest every given CSV into a fresh ledger, reporting per-file row
/// drops and cross-file duplicates as it goes.
fn build_ledger(paths: &[&String]) -> Result<Ledger> {
    let cleaner = DescriptionCleaner::new()?;
    let classifier = Classifier::with_defaults()?;
    let mut ledger = Ledger::new();

    for file_path in paths {
        let path = Path::new(file_path.as_str());
        if !path.exists() {
            anyhow::bail!("File not found: {file_path}");
        }
        let batch = import::import_csv(path, &cleaner, &classifier)?;
        let parsed = batch.transactions.len();
        let dropped = batch.stats.dropped();
        let accepted = ledger.merge(batch.statement, batch.transactions);
        let dupes = parsed - accepted;
        println!(
            "{file_path}: {parsed} rows parsed, {dropped} dropped, {dupes} duplicates skipped"
        );
    }
    Ok(ledger)
}

/// Positional arguments, with `--flag value` pairs skipped.
fn positional_args(args: &[String]) -> Vec<&String> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg.starts_with("--") {
            skip_next = true;
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        out.push(arg);
    }
    out
}

fn cli_import(args: &[String]) -> Result<()> {
    let files = positional_args(args);
    if files.is_empty() {
        anyhow::bail!("Usage: ledgersift import <file.csv>...");
    }

    let ledger = build_ledger(&files)?;
    println!();
    println!(
        "{:<12} {:>14}  {:<16} {:<20} Description",
        "Date", "Amount", "Category", "Subcategory"
    );
    println!("{}", "─".repeat(96));
    for txn in ledger.transactions() {
        println!(
            "{:<12} {:>14}  {:<16} {:<20} {}",
            txn.date.to_string(),
            format_amount(txn.amount),
            txn.category,
            txn.subcategory,
            txn.description,
        );
    }
    println!();
    println!("{} transactions in the ledger", ledger.len());
    for statement in ledger.statements() {
        println!(
            "  {} — {} ({} rows)",
            statement.source_filename,
            statement.describe_range(),
            statement.transaction_count,
        );
    }
    Ok(())
}

fn cli_summary(args: &[String]) -> Result<()> {
    let files = positional_args(args);
    if files.is_empty() {
        anyhow::bail!("Usage: ledgersift summary <file.csv>... [--from <date>] [--to <date>]");
    }

    let ledger = build_ledger(&files)?;
    if ledger.is_empty() {
        println!("No transactions imported");
        return Ok(());
    }

    let Some((earliest, latest)) = ledger.date_range() else {
        return Ok(());
    };
    let start = parse_flag_date(args, "--from")?.unwrap_or(earliest);
    let end = parse_flag_date(args, "--to")?.unwrap_or(latest);

    let window = ledger.between(start, end);
    let summary = summarize(window);

    println!();
    println!("LedgerSift — {start} to {end}");
    println!("{}", "─".repeat(44));
    println!("  Income:       {}", format_amount(summary.total_income));
    println!("  Expenses:     {}", format_amount(summary.total_expenses));
    println!("  Net Savings:  {}", format_amount(summary.net_savings));
    println!("  Savings Rate: {:.1}%", summary.savings_rate);
    println!(
        "  Transactions: {} income / {} expense",
        summary.income_count, summary.expense_count
    );

    if let Some(top) = summary.top_expense_category() {
        println!("  Top Expense:  {top}");
    }

    if !summary.expense_by_category.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in &summary.expense_by_category {
            println!("  {name:<24} {}", format_amount(*amount));
        }
    }
    if !summary.income_by_subcategory.is_empty() {
        println!();
        println!("Income by Source:");
        for (name, amount) in &summary.income_by_subcategory {
            println!("  {name:<24} {}", format_amount(*amount));
        }
    }

    // Annualize the window's income for a rough liability estimate.
    let days = (end - start).num_days();
    if days > 0 {
        let annual_income =
            summary.total_income * Decimal::from(365) / Decimal::from(days);
        let assessment = tax::compute_tax(annual_income, &tax::default_us_brackets());
        println!();
        println!("Estimated Tax Liability (annualized):");
        println!("  Annual Income:  {}", format_amount(assessment.annual_income));
        println!("  Estimated Tax:  {}", format_amount(assessment.total_tax));
        println!("  Effective Rate: {:.1}%", assessment.effective_rate);
    }
    Ok(())
}

fn cli_tax(args: &[String]) -> Result<()> {
    let income_raw = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: ledgersift tax <annual_income>"))?;
    let annual_income = Decimal::from_str(income_raw)
        .map_err(|_| anyhow::anyhow!("Invalid income amount: {income_raw}"))?;

    let assessment = tax::compute_tax(annual_income, &tax::default_us_brackets());
    println!("Annual Income:  {}", format_amount(assessment.annual_income));
    println!("Total Tax:      {}", format_amount(assessment.total_tax));
    println!("Effective Rate: {:.2}%", assessment.effective_rate);
    println!();
    println!(
        "{:>12} {:>12} {:>7} {:>16} {:>12}",
        "From", "To", "Rate", "Income in Band", "Tax"
    );
    for band in &assessment.bracket_breakdown {
        let upper = band
            .max
            .map(format_amount)
            .unwrap_or_else(|| "and up".into());
        println!(
            "{:>12} {:>12} {:>6}% {:>16} {:>12}",
            format_amount(band.min),
            upper,
            band.rate * Decimal::from(100),
            format_amount(band.income_in_bracket),
            format_amount(band.tax_amount),
        );
    }
    Ok(())
}

fn parse_flag_date(args: &[String], flag: &str) -> Result<Option<NaiveDate>> {
    let Some(raw) = args.windows(2).find(|w| w[0] == flag).map(|w| &w[1]) else {
        return Ok(None);
    };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{raw}' for {flag}, expected YYYY-MM-DD"))?;
    Ok(Some(date))
}

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
