use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// You are not a participant in this pool.
    NotAParticipant = 1,
    /// You must deposit the exact required amount.
    WrongAmount = 2,
    /// You have already deposited.
    AlreadyDeposited = 3,
    /// Only the manager can call this function.
    NotManager = 4,
    /// The savings goal has not been met yet.
    GoalNotMet = 5,
    /// The pot has already been paid out.
    AlreadyWithdrawn = 6,
}
