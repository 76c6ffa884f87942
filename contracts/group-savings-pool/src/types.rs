use soroban_sdk::{contracttype, Address, Vec};

/// Funding lifecycle of a pool.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum PoolStatus {
    Funding,   // Deposits still outstanding
    GoalMet,   // Every participant has paid in
    Withdrawn, // Pot has been paid out
}

/// Snapshot of pool configuration and progress.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PoolInfo {
    pub manager: Address,
    pub token: Address,
    pub required_amount: i128,
    pub goal_amount: i128,
    pub participants: Vec<Address>,
    pub total_deposited: i128,
    pub status: PoolStatus,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Manager,
    Token,
    RequiredAmount,
    Participants,
    TotalDeposited,
    Status,
    Deposited(Address),
}
