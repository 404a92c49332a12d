//! Non-interactive command line front end over [`Tracker`].

pub mod output;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use thiserror::Error;
use uuid::Uuid;

use crate::config::{Config, ConfigManager};
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::core::services::{ExpenseSortKey, SortOrder};
use crate::core::tracker::Tracker;
use crate::core::utils::PathResolver;
use crate::domain::{parse_expense_date, BudgetDraft, ExpenseDraft, ReceiptUpload, UserProfile};
use crate::errors::TrackerError;
use crate::storage::{DirReceiptStore, JsonStorage};
use crate::utils::build_info;

const FLAGS: &[&str] = &["desc"];

const USAGE: &str = "\
Usage: expense_core_cli <command> [options]

Commands:
  summary         --user <uid> [--today YYYY-MM-DD]
  expenses        --user <uid> [--sort date|amount|description|category] [--desc]
  budgets         --user <uid>
  add-category    --user <uid> --name <name>
  add-expense     --user <uid> --amount <n> --description <text> --category <id>
                  --date YYYY-MM-DD [--receipt <file>]
  add-budget      --user <uid> --amount <n> --month <1-12> --year <yyyy>
  delete-expense  --user <uid> --id <expense id>
  version
  help

--user defaults to the last user recorded in config.json.
Data lives in $EXPENSE_CORE_HOME (default ~/.expense_core).";

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Invalid input: {0}")]
    Input(String),
}

type CliResult<T> = Result<T, CliError>;

struct Args {
    command: String,
    options: HashMap<String, String>,
    flags: HashSet<String>,
}

impl Args {
    fn parse(raw: Vec<String>) -> CliResult<Self> {
        let mut iter = raw.into_iter();
        let command = iter.next().unwrap_or_else(|| "help".to_string());
        let mut options = HashMap::new();
        let mut flags = HashSet::new();
        while let Some(arg) = iter.next() {
            let name = arg
                .strip_prefix("--")
                .ok_or_else(|| CliError::Input(format!("unexpected argument `{arg}`")))?
                .to_string();
            if FLAGS.contains(&name.as_str()) {
                flags.insert(name);
                continue;
            }
            let value = iter
                .next()
                .ok_or_else(|| CliError::Input(format!("--{name} needs a value")))?;
            options.insert(name, value);
        }
        Ok(Self {
            command,
            options,
            flags,
        })
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    fn require(&self, name: &str) -> CliResult<&str> {
        self.get(name)
            .ok_or_else(|| CliError::Input(format!("--{name} is required")))
    }

    fn parsed<T: std::str::FromStr>(&self, name: &str) -> CliResult<T> {
        let raw = self.require(name)?;
        raw.parse()
            .map_err(|_| CliError::Input(format!("--{name}: `{raw}` is not valid")))
    }
}

/// Runs one command. `args` excludes the program name.
pub fn run_cli(args: Vec<String>) -> CliResult<()> {
    let args = Args::parse(args)?;
    match args.command.as_str() {
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        "version" | "--version" => {
            println!("{}", build_info::current().summary_line());
            Ok(())
        }
        "summary" | "expenses" | "budgets" | "add-category" | "add-expense" | "add-budget"
        | "delete-expense" => run_with_tracker(&args),
        other => Err(CliError::Input(format!(
            "unknown command `{other}`; run `help` for usage"
        ))),
    }
}

fn run_with_tracker(args: &Args) -> CliResult<()> {
    let base = PathResolver::base_dir();
    let config_manager = ConfigManager::with_base_dir(base.clone())?;
    let mut config = config_manager.load()?;
    let data_dir = config.data_dir_or(&base);

    let clock: Box<dyn Clock> = match args.get("today") {
        Some(raw) => Box::new(FixedClock::new(parse_expense_date(raw)?)),
        None => Box::new(SystemClock),
    };
    let storage = JsonStorage::new(Some(data_dir.clone()))?;
    let receipts = DirReceiptStore::new(PathResolver::receipts_dir_in(&data_dir))?;
    let mut tracker = Tracker::open(Box::new(storage), Box::new(receipts), clock)?;

    let uid = match args.get("user") {
        Some(uid) => uid.to_string(),
        None => config
            .last_user
            .clone()
            .ok_or_else(|| CliError::Input("--user is required".into()))?,
    };
    tracker.login(UserProfile::new(uid.clone()));

    match args.command.as_str() {
        "summary" => print_summary(&tracker, &config)?,
        "expenses" => print_expenses(&tracker, args, &config)?,
        "budgets" => print_budgets(&tracker, &config)?,
        "add-category" => {
            let category = tracker.add_category(args.require("name")?)?;
            output::success(format!("Category `{}` added ({})", category.name, category.id));
        }
        "add-expense" => {
            let category_id: Uuid = args.parsed("category")?;
            let mut draft = ExpenseDraft::new(
                args.parsed("amount")?,
                args.require("description")?,
                category_id,
                args.require("date")?,
            );
            if let Some(path) = args.get("receipt") {
                draft = draft.with_receipt(read_receipt(Path::new(path))?);
            }
            let record = tracker.add_expense(draft)?;
            output::success(format!("Expense added ({})", record.id));
        }
        "add-budget" => {
            let draft = BudgetDraft::new(
                args.parsed("amount")?,
                args.parsed("month")?,
                args.parsed("year")?,
            );
            let budget = tracker.add_budget(draft)?;
            output::success(format!("{} added ({})", budget.display_label(), budget.id));
        }
        "delete-expense" => {
            let id: Uuid = args.parsed("id")?;
            tracker.delete_expense(id)?;
            output::success(format!("Expense {id} deleted"));
        }
        _ => unreachable!("commands are filtered by run_cli"),
    }

    if config.last_user.as_deref() != Some(uid.as_str()) {
        config.last_user = Some(uid);
        config_manager.save(&config)?;
    }
    Ok(())
}

fn read_receipt(path: &Path) -> CliResult<ReceiptUpload> {
    let bytes = fs::read(path).map_err(|err| {
        CliError::Input(format!("cannot read receipt `{}`: {err}", path.display()))
    })?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("receipt")
        .to_string();
    Ok(ReceiptUpload::new(file_name, bytes))
}

fn print_summary(tracker: &Tracker, config: &Config) -> CliResult<()> {
    let totals = tracker.period_totals()?;
    let name = tracker
        .session()
        .current_user()
        .map(|profile| profile.greeting_name().to_string())
        .unwrap_or_default();
    output::section(format!("Spending for {name}"));
    for (label, amount) in [
        ("Today", totals.today),
        ("This week", totals.this_week),
        ("This month", totals.this_month),
        ("This year", totals.this_year),
    ] {
        output::info(output::amount_row(label, amount, &config.currency));
    }
    Ok(())
}

fn print_expenses(tracker: &Tracker, args: &Args, config: &Config) -> CliResult<()> {
    let key = match args.get("sort").unwrap_or("date") {
        "date" => ExpenseSortKey::Date,
        "amount" => ExpenseSortKey::Amount,
        "description" => ExpenseSortKey::Description,
        "category" => ExpenseSortKey::Category,
        other => return Err(CliError::Input(format!("cannot sort by `{other}`"))),
    };
    let order = if args.flags.contains("desc") {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let expenses = tracker.expenses_sorted(key, order)?;
    output::section("Your Expenses");
    if expenses.is_empty() {
        output::info("You have no expenses yet.");
    }
    for expense in expenses {
        output::info(format!(
            "{}  {:<24} {:<18} {:>10.2} {}",
            expense.date,
            expense.description,
            tracker.category_name(expense.category_id),
            expense.amount,
            config.currency
        ));
    }
    Ok(())
}

fn print_budgets(tracker: &Tracker, config: &Config) -> CliResult<()> {
    let usage = tracker.budget_usage()?;
    output::section("Your Budgets");
    if usage.is_empty() {
        output::info("You have no budgets yet.");
    }
    for entry in usage {
        let line = format!(
            "Budget for {}/{}: {:.2} {cur}, spent {:.2} {cur}, remaining {:.2} {cur}",
            entry.month,
            entry.year,
            entry.limit,
            entry.spent,
            entry.remaining,
            cur = config.currency
        );
        if entry.over_budget {
            output::warning(line);
        } else {
            output::info(line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_options_and_flags() {
        let parsed = Args::parse(args(&["expenses", "--user", "u1", "--desc", "--sort", "amount"]))
            .expect("parse");
        assert_eq!(parsed.command, "expenses");
        assert_eq!(parsed.get("user"), Some("u1"));
        assert_eq!(parsed.get("sort"), Some("amount"));
        assert!(parsed.flags.contains("desc"));
    }

    #[test]
    fn missing_value_is_an_input_error() {
        let err = Args::parse(args(&["summary", "--user"])).err().expect("error");
        assert!(err.to_string().contains("--user needs a value"));
    }

    #[test]
    fn empty_args_default_to_help() {
        assert_eq!(Args::parse(Vec::new()).unwrap().command, "help");
    }
}
