use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, PoolStatus};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Manager ---

pub fn get_manager(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Manager).unwrap()
}

pub fn set_manager(env: &Env, manager: &Address) {
    env.storage().instance().set(&DataKey::Manager, manager);
    extend_instance_ttl(env);
}

pub fn has_manager(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Manager)
}

// --- Token ---

pub fn get_token(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Token).unwrap()
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance_ttl(env);
}

// --- Required Amount ---

pub fn get_required_amount(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RequiredAmount)
        .unwrap()
}

pub fn set_required_amount(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::RequiredAmount, &amount);
    extend_instance_ttl(env);
}

// --- Participants ---

pub fn get_participants(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Participants)
        .unwrap()
}

pub fn set_participants(env: &Env, participants: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&DataKey::Participants, participants);
    extend_instance_ttl(env);
}

// --- Total Deposited ---

pub fn get_total_deposited(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDeposited)
        .unwrap_or(0)
}

pub fn set_total_deposited(env: &Env, total: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalDeposited, &total);
    extend_instance_ttl(env);
}

// --- Status ---

pub fn get_status(env: &Env) -> PoolStatus {
    env.storage().instance().get(&DataKey::Status).unwrap()
}

pub fn set_status(env: &Env, status: PoolStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
    extend_instance_ttl(env);
}

// --- Deposit Latch ---

pub fn has_deposited(env: &Env, addr: &Address) -> bool {
    let key = DataKey::Deposited(addr.clone());
    let deposited = env.storage().persistent().get(&key).unwrap_or(false);
    if deposited {
        extend_persistent_ttl(env, &key);
    }
    deposited
}

pub fn set_deposited(env: &Env, addr: &Address) {
    let key = DataKey::Deposited(addr.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
