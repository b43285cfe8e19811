//! Static prototype data shown by the screens. Nothing here is real.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub name: &'static str,
    pub initials: &'static str,
    pub amount: f64,
    pub date: &'static str,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCard {
    pub kind: &'static str,
    pub last4: &'static str,
    /// Shows the "UPGRADE PLAN" badge on the overview
    pub upgrade_badge: bool,
}

impl SavedCard {
    pub fn label(&self) -> String {
        format!("{} **** {}", self.kind, self.last4)
    }
}

pub const FEATURES: [&str; 11] = [
    "Payments",
    "Savings",
    "Invest",
    "Transfers",
    "Security",
    "FX",
    "Loans",
    "Insurance",
    "Reports",
    "Budgeting",
    "Personal",
];

pub const AVAILABLE_BALANCE: f64 = 8250.75;

pub const SAVED_CARDS: [SavedCard; 2] = [
    SavedCard {
        kind: "Business Card",
        last4: "1234",
        upgrade_badge: true,
    },
    SavedCard {
        kind: "Personal Card",
        last4: "5678",
        upgrade_badge: false,
    },
];

pub const TRANSACTIONS: [Transaction; 4] = [
    Transaction { name: "Spotify", initials: "S", amount: -10.99, date: "Oct 26" },
    Transaction { name: "Alice Johnson", initials: "AJ", amount: 250.00, date: "Oct 25" },
    Transaction { name: "Grocery Store", initials: "GS", amount: -75.43, date: "Oct 24" },
    Transaction { name: "Michael Brown", initials: "MB", amount: -50.00, date: "Oct 23" },
];

/// Monthly spending, Jan..Dec.
pub const MONTHLY_SPENDING: [(&str, u64); 12] = [
    ("Jan", 4000),
    ("Feb", 3000),
    ("Mar", 5000),
    ("Apr", 2780),
    ("May", 1890),
    ("Jun", 6390),
    ("Jul", 3490),
    ("Aug", 2000),
    ("Sep", 4500),
    ("Oct", 3200),
    ("Nov", 7100),
    ("Dec", 4300),
];

/// US dollar formatting with thousands separators: `-$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}
