//! Transaction categories and their display metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Stable key used on disk and on the command line
    pub key: &'static str,
    pub name: &'static str,
    /// Hex color of the category's dashboard bar
    pub color: &'static str,
    pub icon: &'static str,
}

/// The fixed set of transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Salary,
    #[default]
    Other,
}

const FOOD: CategoryInfo = CategoryInfo {
    key: "food",
    name: "Food & Dining",
    color: "#FF6384",
    icon: "🍔",
};

const TRANSPORT: CategoryInfo = CategoryInfo {
    key: "transport",
    name: "Transportation",
    color: "#36A2EB",
    icon: "🚗",
};

const SHOPPING: CategoryInfo = CategoryInfo {
    key: "shopping",
    name: "Shopping",
    color: "#FFCE56",
    icon: "🛍️",
};

const ENTERTAINMENT: CategoryInfo = CategoryInfo {
    key: "entertainment",
    name: "Entertainment",
    color: "#4BC0C0",
    icon: "🎬",
};

const BILLS: CategoryInfo = CategoryInfo {
    key: "bills",
    name: "Bills & Utilities",
    color: "#9966FF",
    icon: "📄",
};

const HEALTH: CategoryInfo = CategoryInfo {
    key: "health",
    name: "Healthcare",
    color: "#FF9F40",
    icon: "⚕️",
};

const SALARY: CategoryInfo = CategoryInfo {
    key: "salary",
    name: "Salary",
    color: "#4CAF50",
    icon: "💼",
};

const OTHER: CategoryInfo = CategoryInfo {
    key: "other",
    name: "Other",
    color: "#95A5A6",
    icon: "📦",
};

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Salary,
        Category::Other,
    ];

    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            Category::Food => &FOOD,
            Category::Transport => &TRANSPORT,
            Category::Shopping => &SHOPPING,
            Category::Entertainment => &ENTERTAINMENT,
            Category::Bills => &BILLS,
            Category::Health => &HEALTH,
            Category::Salary => &SALARY,
            Category::Other => &OTHER,
        }
    }

    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn color(&self) -> &'static str {
        self.info().color
    }

    pub fn icon(&self) -> &'static str {
        self.info().icon
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| {
                TrackerError::Validation(format!(
                    "Unknown category '{}'. Expected one of: {}",
                    s.trim(),
                    Category::ALL.map(|c| c.key()).join(", ")
                ))
            })
    }
}
