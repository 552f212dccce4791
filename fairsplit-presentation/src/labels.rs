pub const TOTAL_EXPENSES: &str = "Total expenses";
pub const BALANCES: &str = "Balances";
pub const SETTLEMENTS: &str = "Settlements";
pub const PAID: &str = "paid";
pub const SHARE: &str = "share";
pub const ALL_SETTLED: &str = "All settled";
pub const NO_PARTICIPANTS: &str = "No participants";
