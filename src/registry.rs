//! Restaurant registration and owner-gated restaurant updates.

use soroban_sdk::{Address, Env, String, Symbol, Vec};

use crate::error::LedgerError;
use crate::events;
use crate::media;
use crate::rewards;
use crate::storage::{self, DataKey};
use crate::types::{MediaOwner, Restaurant};
use crate::validation::{
    self, MediaBatch, MAX_CUISINE_LENGTH, MAX_LOCATION_LENGTH, MAX_NAME_LENGTH,
};

pub fn register(
    env: &Env,
    owner: &Address,
    name: String,
    cuisine: String,
    location: String,
) -> Result<u128, LedgerError> {
    let config = storage::config(env)?;
    validation::check_text(&name, MAX_NAME_LENGTH)?;
    validation::check_text(&cuisine, MAX_CUISINE_LENGTH)?;
    validation::check_text(&location, MAX_LOCATION_LENGTH)?;

    let id = storage::allocate_id(env, &DataKey::NextRestaurantId, config.safety_ceiling)?;
    let restaurant = Restaurant {
        id,
        name,
        cuisine,
        location,
        owner: owner.clone(),
        active: true,
        total_reviews: 0,
        average_rating: 0,
        profile_media: None,
        media_count: 0,
        created_at: env.ledger().timestamp(),
    };
    storage::put_restaurant(env, &restaurant);
    events::emit_restaurant_registered(env, owner, id, &restaurant.name);
    Ok(id)
}

/// Loads a restaurant the caller must own.
pub fn load_owned(env: &Env, caller: &Address, id: u128) -> Result<Restaurant, LedgerError> {
    let restaurant = storage::load_restaurant(env, id)?;
    if restaurant.owner != *caller {
        return Err(LedgerError::Unauthorized);
    }
    Ok(restaurant)
}

pub fn toggle_status(env: &Env, caller: &Address, id: u128) -> Result<bool, LedgerError> {
    let restaurant = load_owned(env, caller, id)?.toggled();
    storage::put_restaurant(env, &restaurant);
    events::emit_status_toggled(env, id, restaurant.active);
    Ok(restaurant.active)
}

pub fn set_profile_media(
    env: &Env,
    caller: &Address,
    id: u128,
    hash: String,
) -> Result<(), LedgerError> {
    let restaurant = load_owned(env, caller, id)?;
    validation::check_hash(&hash)?;

    let restaurant = restaurant.with_profile_media(hash.clone());
    storage::put_restaurant(env, &restaurant);
    events::emit_profile_media_set(env, id, &hash);
    Ok(())
}

/// Appends media to the restaurant's gallery, continuing from its current
/// media count. Returns the new count.
pub fn add_media(
    env: &Env,
    caller: &Address,
    id: u128,
    media_hashes: Vec<String>,
    media_types: Vec<Symbol>,
) -> Result<u32, LedgerError> {
    let config = storage::config(env)?;
    let restaurant = load_owned(env, caller, id)?;
    let batch =
        MediaBatch::parse_for_gallery(env, &media_hashes, &media_types, restaurant.media_count)?;

    let media_count = media::attach(
        env,
        &config,
        &batch,
        MediaOwner::Restaurant(id),
        caller,
        restaurant.media_count,
    )?;
    storage::put_restaurant(env, &restaurant.with_media_count(media_count));
    events::emit_media_attached(env, id, batch.len(), media_count);
    Ok(media_count)
}

/// Owner-attested visit by `customer`; counts toward loyalty rewards.
pub fn record_visit(
    env: &Env,
    caller: &Address,
    id: u128,
    customer: &Address,
) -> Result<u128, LedgerError> {
    let config = storage::config(env)?;
    let restaurant = load_owned(env, caller, id)?;
    if !restaurant.active {
        return Err(LedgerError::Unauthorized);
    }
    rewards::record_visit(env, &config, id, customer)
}
