//! Initialization and admin-gated configuration.

use soroban_sdk::{Address, Env};

use crate::error::LedgerError;
use crate::events;
use crate::rewards;
use crate::storage;
use crate::types::Config;

/// Counter cap applied at initialization. Leaves 64 bits of headroom for the
/// `average_rating * total_reviews` product.
pub const DEFAULT_SAFETY_CEILING: u128 = u64::MAX as u128;

fn check_reward(amount: u128) -> Result<(), LedgerError> {
    if amount == 0 {
        return Err(LedgerError::InvalidInput);
    }
    rewards::token_amount(amount).map(|_| ())
}

pub fn initialize(
    env: &Env,
    admin: Address,
    reward_token: Address,
    reviewer_reward: u128,
    loyalty_reward: u128,
) -> Result<(), LedgerError> {
    if storage::is_initialized(env) {
        return Err(LedgerError::AlreadyInitialized);
    }
    check_reward(reviewer_reward)?;
    check_reward(loyalty_reward)?;

    let config = Config {
        admin,
        reward_token,
        reviewer_reward,
        loyalty_reward,
        safety_ceiling: DEFAULT_SAFETY_CEILING,
    };
    storage::set_config(env, &config);
    events::emit_initialized(env, &config.admin, &config.reward_token);
    Ok(())
}

/// Loads the config and demands the admin's authorization.
pub fn require_admin(env: &Env) -> Result<Config, LedgerError> {
    let config = storage::config(env)?;
    config.admin.require_auth();
    Ok(config)
}

pub fn set_reward_amounts(
    env: &Env,
    reviewer_reward: u128,
    loyalty_reward: u128,
) -> Result<(), LedgerError> {
    let config = require_admin(env)?;
    check_reward(reviewer_reward)?;
    check_reward(loyalty_reward)?;

    let config = Config {
        reviewer_reward,
        loyalty_reward,
        ..config
    };
    storage::set_config(env, &config);
    events::emit_config_updated(env, &config.admin);
    Ok(())
}

/// Lowers (or restores) the counter cap. It can never exceed
/// [`DEFAULT_SAFETY_CEILING`].
pub fn set_safety_ceiling(env: &Env, safety_ceiling: u128) -> Result<(), LedgerError> {
    let config = require_admin(env)?;
    if safety_ceiling == 0 || safety_ceiling > DEFAULT_SAFETY_CEILING {
        return Err(LedgerError::InvalidInput);
    }

    let config = Config {
        safety_ceiling,
        ..config
    };
    storage::set_config(env, &config);
    events::emit_config_updated(env, &config.admin);
    Ok(())
}

pub fn fund_reward_pool(env: &Env, amount: u128) -> Result<u128, LedgerError> {
    let config = require_admin(env)?;
    rewards::fund_pool(env, &config, &config.admin, amount)
}
