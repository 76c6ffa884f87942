use soroban_sdk::{Address, Env};

use crate::storage;
use crate::types::PoolInfo;

pub fn is_participant(env: &Env, addr: &Address) -> bool {
    for p in storage::get_participants(env).iter() {
        if p == *addr {
            return true;
        }
    }
    false
}

/// Aggregate funding target. The participant list is taken as given at
/// deployment, duplicates included, so a duplicated address leaves the
/// goal unreachable.
pub fn goal_amount(env: &Env) -> i128 {
    storage::get_required_amount(env) * storage::get_participants(env).len() as i128
}

pub fn get_pool(env: &Env) -> PoolInfo {
    PoolInfo {
        manager: storage::get_manager(env),
        token: storage::get_token(env),
        required_amount: storage::get_required_amount(env),
        goal_amount: goal_amount(env),
        participants: storage::get_participants(env),
        total_deposited: storage::get_total_deposited(env),
        status: storage::get_status(env),
    }
}
