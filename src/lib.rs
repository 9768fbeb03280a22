#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod admin;
mod error;
mod events;
mod media;
mod registry;
mod review;
mod rewards;
mod storage;
mod types;
mod validation;

pub use admin::DEFAULT_SAFETY_CEILING;
pub use error::LedgerError;
pub use types::{
    Config, LoyaltyRecord, MediaItem, MediaOwner, MediaType, Restaurant, Review, ReviewerStats,
};
pub use validation::{
    MAX_COMMENT_LENGTH, MAX_CUISINE_LENGTH, MAX_HASH_LENGTH, MAX_LOCATION_LENGTH,
    MAX_MEDIA_ITEMS, MAX_NAME_LENGTH, MIN_HASH_LENGTH,
};

use storage::DataKey;

/// Restaurant review ledger.
///
/// Tracks restaurants, one review per (reviewer, restaurant), a bounded media
/// gallery per restaurant and per review, and pays token rewards out of a
/// shared pool:
/// - reviewers earn `reviewer_reward` for every high-quality review (rating
///   4 or 5) once they have written at least three reviews
/// - customers earn `loyalty_reward` on every fifth visit to a restaurant
///
/// Every entry point is all-or-nothing: an `Err` return discards all storage
/// writes and events of the invocation.
#[contract]
pub struct RestaurantReviewLedger;

#[contractimpl]
impl RestaurantReviewLedger {
    // ── Administration ──────────────────────────────────────────────

    /// One-time setup.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to fund the pool and change settings
    /// * `reward_token` - Token contract the rewards are paid in
    /// * `reviewer_reward` - Payout per qualifying review
    /// * `loyalty_reward` - Payout per fifth visit
    ///
    /// # Errors
    /// - `AlreadyInitialized` on a second call
    /// - `InvalidInput` if a reward is zero or does not fit the token amount type
    pub fn initialize(
        env: Env,
        admin: Address,
        reward_token: Address,
        reviewer_reward: u128,
        loyalty_reward: u128,
    ) -> Result<(), LedgerError> {
        admin.require_auth();
        admin::initialize(&env, admin, reward_token, reviewer_reward, loyalty_reward)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Admin: change both payout amounts.
    pub fn set_reward_amounts(
        env: Env,
        reviewer_reward: u128,
        loyalty_reward: u128,
    ) -> Result<(), LedgerError> {
        admin::set_reward_amounts(&env, reviewer_reward, loyalty_reward)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Admin: set the cap every id and tally counter must stay below.
    pub fn set_safety_ceiling(env: Env, safety_ceiling: u128) -> Result<(), LedgerError> {
        admin::set_safety_ceiling(&env, safety_ceiling)?;
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    /// Admin: move `amount` reward tokens from the admin into contract
    /// custody. Returns the new pool balance.
    pub fn fund_reward_pool(env: Env, amount: u128) -> Result<u128, LedgerError> {
        let balance = admin::fund_reward_pool(&env, amount)?;
        storage::extend_instance_ttl(&env);
        Ok(balance)
    }

    // ── Restaurants ─────────────────────────────────────────────────

    /// Register a restaurant owned by `owner`. Returns its id.
    ///
    /// # Errors
    /// - `InvalidInput` if a text field is empty or too long, or the
    ///   restaurant counter reached the safety ceiling
    pub fn register_restaurant(
        env: Env,
        owner: Address,
        name: String,
        cuisine: String,
        location: String,
    ) -> Result<u128, LedgerError> {
        owner.require_auth();
        let id = registry::register(&env, &owner, name, cuisine, location)?;
        storage::extend_instance_ttl(&env);
        Ok(id)
    }

    /// Owner: flip the active flag. Returns the new flag.
    pub fn toggle_restaurant_status(
        env: Env,
        caller: Address,
        restaurant_id: u128,
    ) -> Result<bool, LedgerError> {
        caller.require_auth();
        storage::config(&env)?;
        registry::toggle_status(&env, &caller, restaurant_id)
    }

    /// Owner: replace the profile media hash.
    pub fn set_profile_media(
        env: Env,
        caller: Address,
        restaurant_id: u128,
        content_hash: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        storage::config(&env)?;
        registry::set_profile_media(&env, &caller, restaurant_id, content_hash)
    }

    /// Owner: append media to the restaurant gallery.
    ///
    /// `media_types` holds one tag per hash: `image`, `video` or `audio`.
    /// Returns the gallery size after the call.
    ///
    /// # Errors
    /// - `NotFound` for an unknown restaurant
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidInput` for mismatched, empty or oversized lists, or a gallery
    ///   that would exceed `MAX_MEDIA_ITEMS`
    /// - `InvalidHash` for a hash outside `MIN_HASH_LENGTH..=MAX_HASH_LENGTH`
    ///   or an unknown tag
    pub fn add_restaurant_media(
        env: Env,
        caller: Address,
        restaurant_id: u128,
        media_hashes: Vec<String>,
        media_types: Vec<Symbol>,
    ) -> Result<u32, LedgerError> {
        caller.require_auth();
        let count =
            registry::add_media(&env, &caller, restaurant_id, media_hashes, media_types)?;
        storage::extend_instance_ttl(&env);
        Ok(count)
    }

    /// Owner: record an in-person visit by `customer`. Every fifth visit
    /// pays the loyalty reward if the pool covers it. Returns the visit count.
    pub fn record_visit(
        env: Env,
        caller: Address,
        restaurant_id: u128,
        customer: Address,
    ) -> Result<u128, LedgerError> {
        caller.require_auth();
        let visits = registry::record_visit(&env, &caller, restaurant_id, &customer)?;
        storage::extend_instance_ttl(&env);
        Ok(visits)
    }

    // ── Reviews ─────────────────────────────────────────────────────

    /// Submit the caller's single review of a restaurant.
    ///
    /// Preconditions are checked in this order: restaurant exists
    /// (`NotFound`), restaurant active (`Unauthorized`), comment
    /// (`InvalidInput`), rating (`InvalidRating`), first review of this
    /// restaurant by `reviewer` (`AlreadyExists`), media list shape
    /// (`InvalidInput`), each hash and tag (`InvalidHash`),
    /// review counter below the ceiling (`InvalidInput`).
    ///
    /// A reward the pool cannot cover is skipped; a failing token transfer
    /// aborts the whole submission with `TransferFailed`.
    pub fn submit_review(
        env: Env,
        reviewer: Address,
        restaurant_id: u128,
        rating: u32,
        comment: String,
        media_hashes: Vec<String>,
        media_types: Vec<Symbol>,
    ) -> Result<u128, LedgerError> {
        reviewer.require_auth();
        let review_id = review::submit(
            &env,
            &reviewer,
            review::Submission {
                restaurant_id,
                rating,
                comment,
                media_hashes,
                media_types,
            },
        )?;
        storage::extend_instance_ttl(&env);
        Ok(review_id)
    }

    // ── Media ───────────────────────────────────────────────────────

    /// Uploader: mark a media item inactive.
    pub fn deactivate_media(env: Env, caller: Address, media_id: u128) -> Result<(), LedgerError> {
        caller.require_auth();
        storage::config(&env)?;
        media::deactivate(&env, &caller, media_id)?;
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn get_config(env: Env) -> Result<Config, LedgerError> {
        storage::config(&env)
    }

    pub fn get_restaurant(env: Env, restaurant_id: u128) -> Option<Restaurant> {
        storage::restaurant(&env, restaurant_id)
    }

    pub fn get_restaurant_count(env: Env) -> u128 {
        storage::allocated_count(&env, &DataKey::NextRestaurantId)
    }

    pub fn get_review(env: Env, review_id: u128) -> Option<Review> {
        storage::review(&env, review_id)
    }

    pub fn get_review_count(env: Env) -> u128 {
        storage::allocated_count(&env, &DataKey::NextReviewId)
    }

    /// Id of `reviewer`'s review of `restaurant_id`, if any.
    pub fn get_review_id(env: Env, reviewer: Address, restaurant_id: u128) -> Option<u128> {
        storage::review_id_for(&env, &reviewer, restaurant_id)
    }

    pub fn has_reviewed(env: Env, reviewer: Address, restaurant_id: u128) -> bool {
        storage::review_id_for(&env, &reviewer, restaurant_id).is_some()
    }

    /// Zeroed stats for an address that never reviewed.
    pub fn get_reviewer_stats(env: Env, reviewer: Address) -> ReviewerStats {
        storage::reviewer_stats(&env, &reviewer)
    }

    pub fn get_loyalty(env: Env, restaurant_id: u128, customer: Address) -> LoyaltyRecord {
        storage::loyalty(&env, restaurant_id, &customer)
    }

    pub fn get_media(env: Env, media_id: u128) -> Option<MediaItem> {
        storage::media(&env, media_id)
    }

    pub fn get_restaurant_media(env: Env, restaurant_id: u128, slot: u32) -> Option<MediaItem> {
        storage::media_at_slot(
            &env,
            &storage::slot_key(MediaOwner::Restaurant(restaurant_id), slot),
        )
    }

    pub fn get_review_media(env: Env, review_id: u128, slot: u32) -> Option<MediaItem> {
        storage::media_at_slot(&env, &storage::slot_key(MediaOwner::Review(review_id), slot))
    }

    /// The restaurant's gallery in slot order.
    pub fn get_restaurant_gallery(env: Env, restaurant_id: u128) -> Vec<MediaItem> {
        media::gallery(&env, MediaOwner::Restaurant(restaurant_id))
    }

    pub fn get_review_gallery(env: Env, review_id: u128) -> Vec<MediaItem> {
        media::gallery(&env, MediaOwner::Review(review_id))
    }

    pub fn get_reward_pool_balance(env: Env) -> u128 {
        storage::pool_balance(&env)
    }
}
