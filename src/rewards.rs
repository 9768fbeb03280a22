//! Reward pool custody and payout routines.
//!
//! The pool balance is bookkeeping over tokens the contract holds in custody.
//! A payout the pool cannot cover returns `Ok(false)`; only a failing token
//! transfer is an error.

use soroban_sdk::{token, Address, Env};

use crate::error::LedgerError;
use crate::events;
use crate::storage;
use crate::types::Config;

/// Converts a ledger amount to the token's signed amount type.
pub(crate) fn token_amount(amount: u128) -> Result<i128, LedgerError> {
    i128::try_from(amount).map_err(|_| LedgerError::InvalidInput)
}

/// Moves `amount` from `funder` into contract custody and credits the pool.
pub fn fund_pool(
    env: &Env,
    config: &Config,
    funder: &Address,
    amount: u128,
) -> Result<u128, LedgerError> {
    if amount == 0 {
        return Err(LedgerError::InvalidInput);
    }
    let balance = storage::pool_balance(env)
        .checked_add(amount)
        .ok_or(LedgerError::InvalidInput)?;

    let client = token::Client::new(env, &config.reward_token);
    match client.try_transfer(funder, &env.current_contract_address(), &token_amount(amount)?) {
        Ok(Ok(())) => {}
        _ => return Err(LedgerError::TransferFailed),
    }

    storage::set_pool_balance(env, balance);
    events::emit_pool_funded(env, funder, amount, balance);
    Ok(balance)
}

/// Pays `amount` out of the pool to `recipient` if the pool covers it.
fn pay_from_pool(
    env: &Env,
    config: &Config,
    recipient: &Address,
    amount: u128,
) -> Result<bool, LedgerError> {
    let balance = storage::pool_balance(env);
    if balance < amount {
        events::emit_reward_skipped(env, recipient, amount, balance);
        return Ok(false);
    }

    let client = token::Client::new(env, &config.reward_token);
    match client.try_transfer(&env.current_contract_address(), recipient, &token_amount(amount)?) {
        Ok(Ok(())) => {}
        _ => return Err(LedgerError::TransferFailed),
    }

    storage::set_pool_balance(env, balance - amount);
    Ok(true)
}

/// Pays the fixed reviewer reward and records it on the reviewer's stats.
pub fn distribute_reviewer_reward(
    env: &Env,
    config: &Config,
    reviewer: &Address,
) -> Result<bool, LedgerError> {
    let amount = config.reviewer_reward;
    if !pay_from_pool(env, config, reviewer, amount)? {
        return Ok(false);
    }

    let stats = storage::reviewer_stats(env, reviewer)
        .with_reward(amount, env.ledger().timestamp())?;
    storage::put_reviewer_stats(env, reviewer, &stats);
    events::emit_reviewer_rewarded(env, reviewer, amount);
    Ok(true)
}

/// Pays the fixed loyalty reward and records it on the customer's loyalty
/// record for this restaurant.
pub fn distribute_loyalty_reward(
    env: &Env,
    config: &Config,
    restaurant_id: u128,
    customer: &Address,
) -> Result<bool, LedgerError> {
    let amount = config.loyalty_reward;
    if !pay_from_pool(env, config, customer, amount)? {
        return Ok(false);
    }

    let record = storage::loyalty(env, restaurant_id, customer).with_reward(amount)?;
    storage::put_loyalty(env, restaurant_id, customer, &record);
    events::emit_loyalty_rewarded(env, restaurant_id, customer, amount);
    Ok(true)
}

/// Counts one visit of `customer` at `restaurant_id`, paying the loyalty
/// reward on every fifth visit. Returns the new visit count.
pub fn record_visit(
    env: &Env,
    config: &Config,
    restaurant_id: u128,
    customer: &Address,
) -> Result<u128, LedgerError> {
    let record = storage::loyalty(env, restaurant_id, customer)
        .with_visit(env.ledger().timestamp(), config.safety_ceiling)?;
    storage::put_loyalty(env, restaurant_id, customer, &record);
    events::emit_visit_recorded(env, restaurant_id, customer, record.visit_count);

    if record.earns_reward() {
        distribute_loyalty_reward(env, config, restaurant_id, customer)?;
    }
    Ok(record.visit_count)
}
