use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::types::PoolStatus;
use crate::{pool, storage};

pub fn withdraw_pool(env: &Env, manager: Address, recipient: Address) -> Result<(), ContractError> {
    manager.require_auth();

    if manager != storage::get_manager(env) {
        return Err(ContractError::NotManager);
    }

    // The held balance, not the deposit history, decides whether there is
    // anything left to pay out. `total_deposited` still equals the goal
    // after a payout; the status records the drain.
    if storage::get_status(env) == PoolStatus::Withdrawn {
        return Err(ContractError::AlreadyWithdrawn);
    }

    if storage::get_total_deposited(env) != pool::goal_amount(env) {
        return Err(ContractError::GoalNotMet);
    }

    // Transfer the entire held balance, whatever it is, to the recipient
    let token_client = soroban_sdk::token::Client::new(env, &storage::get_token(env));
    let contract_addr = env.current_contract_address();
    let balance = token_client.balance(&contract_addr);
    token_client.transfer(&contract_addr, &recipient, &balance);

    storage::set_status(env, PoolStatus::Withdrawn);

    env.events()
        .publish((crate::symbol_short!("withdrawn"),), (recipient, balance));

    Ok(())
}
