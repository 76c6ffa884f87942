#![no_std]

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};

mod deposit;
mod errors;
mod payout;
mod pool;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::*;

#[contract]
pub struct GroupSavingsPoolContract;

#[contractimpl]
impl GroupSavingsPoolContract {
    /// Deploy a pool with a fixed participant list and per-head amount.
    /// The deploying harness supplies the manager, the token the pool is
    /// denominated in, the participants, and the required amount; none of
    /// these can change afterwards.
    pub fn __constructor(
        env: Env,
        manager: Address,
        token: Address,
        participants: Vec<Address>,
        required_amount: i128,
    ) {
        if storage::has_manager(&env) {
            panic!("already initialized");
        }
        if participants.is_empty() {
            panic!("participant list is empty");
        }
        if required_amount <= 0 {
            panic!("required amount must be positive");
        }

        storage::set_manager(&env, &manager);
        storage::set_token(&env, &token);
        storage::set_participants(&env, &participants);
        storage::set_required_amount(&env, required_amount);
        storage::set_total_deposited(&env, 0);
        storage::set_status(&env, PoolStatus::Funding);
    }

    // ─── Deposits ───────────────────────────────────────────────────

    /// Deposit exactly the required amount. Each participant gets one shot.
    pub fn deposit(env: Env, depositor: Address, amount: i128) -> Result<(), ContractError> {
        deposit::deposit(&env, depositor, amount)
    }

    /// Whether `addr` has already made its deposit.
    pub fn has_deposited(env: Env, addr: Address) -> bool {
        deposit::has_deposited(&env, addr)
    }

    // ─── Payout ─────────────────────────────────────────────────────

    /// Send the full pot to `recipient`. Only the manager can call this,
    /// and only once every participant has deposited.
    pub fn withdraw_pool(
        env: Env,
        manager: Address,
        recipient: Address,
    ) -> Result<(), ContractError> {
        payout::withdraw_pool(&env, manager, recipient)
    }

    // ─── Read-only state ────────────────────────────────────────────

    /// The identity allowed to withdraw the pot.
    pub fn manager(env: Env) -> Address {
        storage::get_manager(&env)
    }

    /// The token the pool is denominated in.
    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    /// Amount each participant must deposit.
    pub fn required_amount(env: Env) -> i128 {
        storage::get_required_amount(&env)
    }

    /// Aggregate target: required amount times the number of participants.
    pub fn goal_amount(env: Env) -> i128 {
        pool::goal_amount(&env)
    }

    /// The fixed participant list, as given at deployment.
    pub fn participants(env: Env) -> Vec<Address> {
        storage::get_participants(&env)
    }

    /// Whether `addr` is eligible to deposit.
    pub fn is_participant(env: Env, addr: Address) -> bool {
        pool::is_participant(&env, &addr)
    }

    /// Sum of all successful deposits. Never decreases, even after payout.
    pub fn total_deposited(env: Env) -> i128 {
        storage::get_total_deposited(&env)
    }

    /// Where the pool is in its funding lifecycle.
    pub fn status(env: Env) -> PoolStatus {
        storage::get_status(&env)
    }

    /// Full snapshot of pool configuration and progress.
    pub fn get_pool(env: Env) -> PoolInfo {
        pool::get_pool(&env)
    }
}
