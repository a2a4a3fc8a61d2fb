//! Scenario service
//!
//! A scenario is a small file naming a set of categories and the deposits,
//! withdrawals, and transfers to apply to them, in order. The runner plays
//! it against fresh categories sharing one withdrawal total and returns the
//! resulting ledgers together with what each step did.
//!
//! ```yaml
//! categories: [Food, Clothing]
//! operations:
//!   - op: deposit
//!     category: Food
//!     amount: 900
//!     description: deposit
//!   - op: withdraw
//!     category: Food
//!     amount: 105.55
//!     description: groceries
//!   - op: transfer
//!     from: Food
//!     to: Clothing
//!     amount: 50
//! chart: [Clothing, Food]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::format_ledger_report;
use crate::error::{LedgerError, LedgerResult};
use crate::models::amount::format_amount;
use crate::models::{Category, WithdrawalTotal};
use crate::reports::create_spend_chart;

/// One operation in a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Step {
    Deposit {
        category: String,
        amount: f64,
        #[serde(default)]
        description: String,
    },
    Withdraw {
        category: String,
        amount: f64,
        #[serde(default)]
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        amount: f64,
    },
}

impl Step {
    /// Names of the categories this step touches
    fn category_names(&self) -> Vec<&str> {
        match self {
            Step::Deposit { category, .. } | Step::Withdraw { category, .. } => {
                vec![category.as_str()]
            }
            Step::Transfer { from, to, .. } => vec![from.as_str(), to.as_str()],
        }
    }

    fn amount(&self) -> f64 {
        match self {
            Step::Deposit { amount, .. }
            | Step::Withdraw { amount, .. }
            | Step::Transfer { amount, .. } => *amount,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Deposit {
                category,
                amount,
                description,
            } => {
                write!(f, "deposit {} into {}", format_amount(*amount), category)?;
                if !description.is_empty() {
                    write!(f, " ({})", description)?;
                }
                Ok(())
            }
            Step::Withdraw {
                category,
                amount,
                description,
            } => {
                write!(f, "withdraw {} from {}", format_amount(*amount), category)?;
                if !description.is_empty() {
                    write!(f, " ({})", description)?;
                }
                Ok(())
            }
            Step::Transfer { from, to, amount } => {
                write!(f, "transfer {} from {} to {}", format_amount(*amount), from, to)
            }
        }
    }
}

/// A list of categories and the operations to apply to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Category names, in declaration order
    pub categories: Vec<String>,

    /// Operations applied in order
    #[serde(default)]
    pub operations: Vec<Step>,

    /// Categories to chart and their order; all categories when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<Vec<String>>,
}

impl Scenario {
    /// Load a scenario file, as JSON for `.json` files and YAML otherwise
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!("Failed to read scenario {}: {}", path.display(), e))
        })?;

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Parse a scenario from YAML
    pub fn from_yaml_str(contents: &str) -> LedgerResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Parse a scenario from JSON
    pub fn from_json_str(contents: &str) -> LedgerResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Built-in example: groceries, a transfer to clothing, and a car
    pub fn demo() -> Self {
        let deposit = |category: &str, amount: f64, description: &str| Step::Deposit {
            category: category.into(),
            amount,
            description: description.into(),
        };
        let withdraw = |category: &str, amount: f64, description: &str| Step::Withdraw {
            category: category.into(),
            amount,
            description: description.into(),
        };

        Self {
            categories: vec!["Food".into(), "Clothing".into(), "Auto".into()],
            operations: vec![
                deposit("Food", 1000.0, "deposit"),
                withdraw("Food", 10.15, "groceries"),
                withdraw("Food", 15.89, "restaurant and more food for dessert"),
                Step::Transfer {
                    from: "Food".into(),
                    to: "Clothing".into(),
                    amount: 50.0,
                },
                withdraw("Clothing", 25.55, ""),
                withdraw("Clothing", 100.0, ""),
                deposit("Auto", 1000.0, "initial deposit"),
                withdraw("Auto", 15.0, ""),
            ],
            chart: None,
        }
    }

    /// Check names and references before anything is applied
    pub fn validate(&self) -> LedgerResult<()> {
        if self.categories.is_empty() {
            return Err(LedgerError::Scenario("no categories declared".into()));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for name in &self.categories {
            if name.trim().is_empty() {
                return Err(LedgerError::Validation(
                    "Category name cannot be empty".into(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(LedgerError::duplicate_category(name.clone()));
            }
        }

        for (i, step) in self.operations.iter().enumerate() {
            if !step.amount().is_finite() {
                return Err(LedgerError::Validation(format!(
                    "operation {}: amount must be a finite number, got {}",
                    i + 1,
                    step.amount()
                )));
            }
            for name in step.category_names() {
                if !seen.contains(name) {
                    return Err(LedgerError::Scenario(format!(
                        "operation {}: {}",
                        i + 1,
                        LedgerError::category_not_found(name)
                    )));
                }
            }
            if let Step::Transfer { from, to, .. } = step {
                if from == to {
                    return Err(LedgerError::Validation(format!(
                        "operation {}: cannot transfer '{}' to itself",
                        i + 1,
                        from
                    )));
                }
            }
        }

        if matches!(&self.chart, Some(names) if names.is_empty()) {
            return Err(LedgerError::Scenario(
                "chart lists no categories; omit it to chart all of them".into(),
            ));
        }

        for name in self.chart.iter().flatten() {
            if !seen.contains(name.as_str()) {
                return Err(LedgerError::category_not_found(name.clone()));
            }
        }

        Ok(())
    }
}

/// What happened to one scenario step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Position of the step in the scenario (0-based)
    pub index: usize,

    /// The step itself
    pub step: Step,

    /// Whether the step changed the ledger
    pub applied: bool,

    /// Why the step was refused
    pub reason: Option<String>,
}

/// Categories and step results after running a scenario
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Categories in declaration order
    pub categories: Vec<Category>,

    /// The withdrawal total shared by all categories
    pub totals: WithdrawalTotal,

    /// One result per operation
    pub steps: Vec<StepResult>,

    chart_order: Vec<usize>,
}

impl ScenarioOutcome {
    /// Find a category by name
    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Steps that were refused
    pub fn rejected(&self) -> impl Iterator<Item = &StepResult> {
        self.steps.iter().filter(|s| !s.applied)
    }

    /// Ledger report of every category, in declaration order
    pub fn reports(&self) -> Vec<String> {
        self.categories.iter().map(format_ledger_report).collect()
    }

    /// Spend chart of the selected categories
    pub fn chart(&self) -> LedgerResult<String> {
        let selected: Vec<&Category> = self
            .chart_order
            .iter()
            .map(|&i| &self.categories[i])
            .collect();
        create_spend_chart(&selected, self.totals.get())
    }
}

/// Plays scenarios, optionally recording every step in the audit log
pub struct ScenarioRunner<'a> {
    audit: Option<&'a AuditLogger>,
}

impl<'a> ScenarioRunner<'a> {
    /// Create a runner without auditing
    pub fn new() -> Self {
        Self { audit: None }
    }

    /// Create a runner that appends every step to the audit log
    pub fn with_audit(logger: &'a AuditLogger) -> Self {
        Self {
            audit: Some(logger),
        }
    }

    /// Run a scenario against fresh categories
    ///
    /// Refused withdrawals and transfers are recorded in the outcome, not
    /// returned as errors.
    pub fn run(&self, scenario: &Scenario) -> LedgerResult<ScenarioOutcome> {
        scenario.validate()?;

        let totals = WithdrawalTotal::new();
        let mut categories: Vec<Category> = scenario
            .categories
            .iter()
            .map(|name| Category::new(name.as_str(), &totals))
            .collect();
        let index: HashMap<&str, usize> = scenario
            .categories
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let mut steps = Vec::with_capacity(scenario.operations.len());
        let mut audit_entries = Vec::new();

        for (i, step) in scenario.operations.iter().enumerate() {
            let (result, entry) = match step {
                Step::Deposit {
                    category,
                    amount,
                    description,
                } => {
                    let target = &mut categories[index[category.as_str()]];
                    target.deposit(*amount, description.as_str());
                    (Ok(()), AuditEntry::deposit(target, *amount, description.as_str()))
                }
                Step::Withdraw {
                    category,
                    amount,
                    description,
                } => {
                    let source = &mut categories[index[category.as_str()]];
                    let result = source.try_withdraw(*amount, description.as_str());
                    let entry =
                        AuditEntry::withdraw(source, *amount, description.as_str(), result.is_ok());
                    (result, entry)
                }
                Step::Transfer { from, to, amount } => {
                    let (source, target) =
                        pair_mut(&mut categories, index[from.as_str()], index[to.as_str()]);
                    let result = source.try_transfer(*amount, target);
                    let entry = AuditEntry::transfer(source, target, *amount, result.is_ok());
                    (result, entry)
                }
            };

            let reason = match result {
                Ok(()) => {
                    log::debug!("step {}: {}", i + 1, step);
                    None
                }
                Err(e) => {
                    log::warn!("step {} rejected: {}: {}", i + 1, step, e);
                    Some(e.to_string())
                }
            };

            steps.push(StepResult {
                index: i,
                step: step.clone(),
                applied: reason.is_none(),
                reason,
            });
            audit_entries.push(entry);
        }

        if let Some(logger) = self.audit {
            logger.log_batch(&audit_entries)?;
        }

        let chart_order = match &scenario.chart {
            Some(names) => names.iter().map(|name| index[name.as_str()]).collect(),
            None => (0..categories.len()).collect(),
        };

        log::info!(
            "ran {} operations over {} categories, {:.2} withdrawn",
            steps.len(),
            categories.len(),
            totals.get()
        );

        Ok(ScenarioOutcome {
            categories,
            totals,
            steps,
            chart_order,
        })
    }
}

impl Default for ScenarioRunner<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrow two distinct elements mutably
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
