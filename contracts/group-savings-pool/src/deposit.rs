use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::types::PoolStatus;
use crate::{pool, storage};

pub fn deposit(env: &Env, depositor: Address, amount: i128) -> Result<(), ContractError> {
    depositor.require_auth();

    if !pool::is_participant(env, &depositor) {
        return Err(ContractError::NotAParticipant);
    }

    if amount != storage::get_required_amount(env) {
        return Err(ContractError::WrongAmount);
    }

    if storage::has_deposited(env, &depositor) {
        return Err(ContractError::AlreadyDeposited);
    }

    // Pull the funds into the pool
    let token_client = soroban_sdk::token::Client::new(env, &storage::get_token(env));
    token_client.transfer(&depositor, &env.current_contract_address(), &amount);

    // Latch the depositor and advance the running total
    storage::set_deposited(env, &depositor);
    let total = storage::get_total_deposited(env) + amount;
    storage::set_total_deposited(env, total);

    if total == pool::goal_amount(env) {
        storage::set_status(env, PoolStatus::GoalMet);
    }

    env.events()
        .publish((crate::symbol_short!("deposited"),), (depositor, amount));

    Ok(())
}

pub fn has_deposited(env: &Env, addr: Address) -> bool {
    storage::has_deposited(env, &addr)
}
