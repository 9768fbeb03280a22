//! Storage layout and typed accessors.
//!
//! Counters, config and the reward pool live in instance storage; entity
//! records and indices live in persistent storage keyed by [`DataKey`].

use soroban_sdk::{contracttype, Address, Env, IntoVal, Val};

use crate::error::LedgerError;
use crate::types::{
    bump_counter, Config, LoyaltyRecord, MediaItem, MediaOwner, Restaurant, Review,
    ReviewerStats,
};

// Storage TTL constants, in ledgers.
const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280; // ~1 day
const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // ~30 days
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 17_280;
const PERSISTENT_BUMP_AMOUNT: u32 = 1_036_800; // ~60 days

/// First id handed out by every counter.
const FIRST_ID: u128 = 1;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    RewardPool,
    NextRestaurantId,
    NextReviewId,
    NextMediaId,
    Restaurant(u128),
    Review(u128),
    Media(u128),
    /// (reviewer, restaurant id) -> review id.
    ReviewerRestaurant(Address, u128),
    ReviewerStats(Address),
    /// (restaurant id, customer) -> loyalty record.
    Loyalty(u128, Address),
    /// (restaurant id, slot) -> media id.
    RestaurantMedia(u128, u32),
    /// (review id, slot) -> media id.
    ReviewMedia(u128, u32),
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn write_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    let store = env.storage().persistent();
    store.set(key, value);
    store.extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── config ──────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn config(env: &Env) -> Result<Config, LedgerError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ── counters ────────────────────────────────────────────────────

/// The id the counter at `key` will hand out next.
pub fn next_id(env: &Env, key: &DataKey) -> u128 {
    env.storage().instance().get(key).unwrap_or(FIRST_ID)
}

/// Fails with `InvalidInput` once the counter has reached the ceiling.
pub fn ensure_below_ceiling(
    env: &Env,
    key: &DataKey,
    ceiling: u128,
) -> Result<u128, LedgerError> {
    let id = next_id(env, key);
    if id >= ceiling {
        return Err(LedgerError::InvalidInput);
    }
    Ok(id)
}

/// Hands out the next id and advances the counter.
pub fn allocate_id(env: &Env, key: &DataKey, ceiling: u128) -> Result<u128, LedgerError> {
    let id = ensure_below_ceiling(env, key, ceiling)?;
    env.storage().instance().set(key, &bump_counter(id, ceiling)?);
    Ok(id)
}

/// Number of ids handed out so far.
pub fn allocated_count(env: &Env, key: &DataKey) -> u128 {
    next_id(env, key) - FIRST_ID
}

/// An id is valid when it is positive and below the counter.
pub fn is_allocated(env: &Env, key: &DataKey, id: u128) -> bool {
    id >= FIRST_ID && id < next_id(env, key)
}

// ── reward pool ─────────────────────────────────────────────────

pub fn pool_balance(env: &Env) -> u128 {
    env.storage().instance().get(&DataKey::RewardPool).unwrap_or(0)
}

pub fn set_pool_balance(env: &Env, balance: u128) {
    env.storage().instance().set(&DataKey::RewardPool, &balance);
}

// ── restaurants ─────────────────────────────────────────────────

pub fn restaurant(env: &Env, id: u128) -> Option<Restaurant> {
    env.storage().persistent().get(&DataKey::Restaurant(id))
}

/// Loads a restaurant, treating ids outside the allocated range as missing.
pub fn load_restaurant(env: &Env, id: u128) -> Result<Restaurant, LedgerError> {
    if !is_allocated(env, &DataKey::NextRestaurantId, id) {
        return Err(LedgerError::NotFound);
    }
    restaurant(env, id).ok_or(LedgerError::NotFound)
}

pub fn put_restaurant(env: &Env, restaurant: &Restaurant) {
    write_persistent(env, &DataKey::Restaurant(restaurant.id), restaurant);
}

// ── reviews ─────────────────────────────────────────────────────

pub fn review(env: &Env, id: u128) -> Option<Review> {
    env.storage().persistent().get(&DataKey::Review(id))
}

pub fn put_review(env: &Env, review: &Review) {
    write_persistent(env, &DataKey::Review(review.id), review);
}

pub fn review_id_for(env: &Env, reviewer: &Address, restaurant_id: u128) -> Option<u128> {
    env.storage()
        .persistent()
        .get(&DataKey::ReviewerRestaurant(reviewer.clone(), restaurant_id))
}

pub fn mark_reviewed(env: &Env, reviewer: &Address, restaurant_id: u128, review_id: u128) {
    write_persistent(
        env,
        &DataKey::ReviewerRestaurant(reviewer.clone(), restaurant_id),
        &review_id,
    );
}

// ── trackers ────────────────────────────────────────────────────

pub fn reviewer_stats(env: &Env, reviewer: &Address) -> ReviewerStats {
    env.storage()
        .persistent()
        .get(&DataKey::ReviewerStats(reviewer.clone()))
        .unwrap_or_default()
}

pub fn put_reviewer_stats(env: &Env, reviewer: &Address, stats: &ReviewerStats) {
    write_persistent(env, &DataKey::ReviewerStats(reviewer.clone()), stats);
}

pub fn loyalty(env: &Env, restaurant_id: u128, customer: &Address) -> LoyaltyRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Loyalty(restaurant_id, customer.clone()))
        .unwrap_or_default()
}

pub fn put_loyalty(env: &Env, restaurant_id: u128, customer: &Address, record: &LoyaltyRecord) {
    write_persistent(env, &DataKey::Loyalty(restaurant_id, customer.clone()), record);
}

// ── media ───────────────────────────────────────────────────────

pub fn media(env: &Env, id: u128) -> Option<MediaItem> {
    env.storage().persistent().get(&DataKey::Media(id))
}

pub fn put_media(env: &Env, item: &MediaItem) {
    write_persistent(env, &DataKey::Media(item.id), item);
}

pub fn slot_key(owner: MediaOwner, slot: u32) -> DataKey {
    match owner {
        MediaOwner::Restaurant(id) => DataKey::RestaurantMedia(id, slot),
        MediaOwner::Review(id) => DataKey::ReviewMedia(id, slot),
    }
}

pub fn media_at_slot(env: &Env, key: &DataKey) -> Option<MediaItem> {
    let id: u128 = env.storage().persistent().get(key)?;
    media(env, id)
}

pub fn put_slot(env: &Env, key: &DataKey, media_id: u128) {
    write_persistent(env, key, &media_id);
}
