use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;
use crate::utils::parse_period;

/// Enumeration of budgeting periods.
///
/// `Unset` is the state of a fresh record before the operator picks a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    #[serde(rename = "")]
    Unset,
    Weekly,
    Monthly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Unset => "",
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, BudgetPeriod::Unset)
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_period(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_renders_empty() {
        assert_eq!(BudgetPeriod::default(), BudgetPeriod::Unset);
        assert_eq!(BudgetPeriod::Unset.to_string(), "");
        assert!(!BudgetPeriod::Unset.is_set());
    }

    #[test]
    fn parses_recognized_literals_only() {
        assert_eq!("weekly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Weekly);
        assert_eq!("Monthly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Monthly);
        assert!("".parse::<BudgetPeriod>().is_err());
        assert!("biweekly".parse::<BudgetPeriod>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_literal() {
        assert_eq!(
            serde_json::to_string(&BudgetPeriod::Weekly).unwrap(),
            "\"weekly\""
        );
        assert_eq!(serde_json::to_string(&BudgetPeriod::Unset).unwrap(), "\"\"");
    }
}
