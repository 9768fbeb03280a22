//! Contract events.
//!
//! Events are rolled back together with storage when an invocation fails,
//! so every event here describes a committed effect.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub const EVENT_INITIALIZED: Symbol = symbol_short!("init");
pub const EVENT_CONFIG_UPDATED: Symbol = symbol_short!("cfg_upd");
pub const EVENT_POOL_FUNDED: Symbol = symbol_short!("pool_fnd");
pub const EVENT_RESTAURANT_REGISTERED: Symbol = symbol_short!("rst_reg");
pub const EVENT_STATUS_TOGGLED: Symbol = symbol_short!("rst_stat");
pub const EVENT_PROFILE_MEDIA_SET: Symbol = symbol_short!("rst_prof");
pub const EVENT_REVIEW_SUBMITTED: Symbol = symbol_short!("rev_sub");
pub const EVENT_MEDIA_ATTACHED: Symbol = symbol_short!("media_add");
pub const EVENT_MEDIA_DEACTIVATED: Symbol = symbol_short!("media_off");
pub const EVENT_VISIT_RECORDED: Symbol = symbol_short!("visit");
pub const EVENT_REVIEWER_REWARDED: Symbol = symbol_short!("rwd_rev");
pub const EVENT_LOYALTY_REWARDED: Symbol = symbol_short!("rwd_loy");
pub const EVENT_REWARD_SKIPPED: Symbol = symbol_short!("rwd_skip");

pub fn emit_initialized(env: &Env, admin: &Address, reward_token: &Address) {
    env.events()
        .publish((EVENT_INITIALIZED, admin.clone()), reward_token.clone());
}

pub fn emit_config_updated(env: &Env, admin: &Address) {
    env.events().publish((EVENT_CONFIG_UPDATED,), admin.clone());
}

pub fn emit_pool_funded(env: &Env, funder: &Address, amount: u128, balance: u128) {
    env.events()
        .publish((EVENT_POOL_FUNDED, funder.clone()), (amount, balance));
}

pub fn emit_restaurant_registered(env: &Env, owner: &Address, id: u128, name: &String) {
    env.events().publish(
        (EVENT_RESTAURANT_REGISTERED, owner.clone()),
        (id, name.clone()),
    );
}

pub fn emit_status_toggled(env: &Env, id: u128, active: bool) {
    env.events().publish((EVENT_STATUS_TOGGLED, id), active);
}

pub fn emit_profile_media_set(env: &Env, id: u128, hash: &String) {
    env.events().publish((EVENT_PROFILE_MEDIA_SET, id), hash.clone());
}

pub fn emit_review_submitted(
    env: &Env,
    reviewer: &Address,
    restaurant_id: u128,
    review_id: u128,
    rating: u32,
) {
    env.events().publish(
        (EVENT_REVIEW_SUBMITTED, reviewer.clone(), restaurant_id),
        (review_id, rating),
    );
}

pub fn emit_media_attached(env: &Env, restaurant_id: u128, added: u32, media_count: u32) {
    env.events().publish(
        (EVENT_MEDIA_ATTACHED, restaurant_id),
        (added, media_count),
    );
}

pub fn emit_media_deactivated(env: &Env, media_id: u128) {
    env.events().publish((EVENT_MEDIA_DEACTIVATED, media_id), ());
}

pub fn emit_visit_recorded(env: &Env, restaurant_id: u128, customer: &Address, visits: u128) {
    env.events().publish(
        (EVENT_VISIT_RECORDED, restaurant_id, customer.clone()),
        visits,
    );
}

pub fn emit_reviewer_rewarded(env: &Env, reviewer: &Address, amount: u128) {
    env.events()
        .publish((EVENT_REVIEWER_REWARDED, reviewer.clone()), amount);
}

pub fn emit_loyalty_rewarded(env: &Env, restaurant_id: u128, customer: &Address, amount: u128) {
    env.events().publish(
        (EVENT_LOYALTY_REWARDED, restaurant_id, customer.clone()),
        amount,
    );
}

/// Published when the pool cannot cover a payout; the triggering
/// operation still succeeds.
pub fn emit_reward_skipped(env: &Env, recipient: &Address, amount: u128, balance: u128) {
    env.events().publish(
        (EVENT_REWARD_SKIPPED, recipient.clone()),
        (amount, balance),
    );
}
