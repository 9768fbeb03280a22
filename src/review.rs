//! Review submission.
//!
//! One call touches the restaurant aggregate, the review ledger, the
//! reviewer's stats, the loyalty tracker and the media catalog. All
//! preconditions are checked before the first write; any error returned
//! after that point makes the host discard every write of the invocation.

use soroban_sdk::{Address, Env, String, Symbol, Vec};

use crate::error::LedgerError;
use crate::events;
use crate::media;
use crate::rewards;
use crate::storage::{self, DataKey};
use crate::types::{MediaOwner, Review};
use crate::validation::{self, MediaBatch, MAX_COMMENT_LENGTH};

/// Caller-supplied payload of a review.
pub struct Submission {
    pub restaurant_id: u128,
    pub rating: u32,
    pub comment: String,
    pub media_hashes: Vec<String>,
    pub media_types: Vec<Symbol>,
}

pub fn submit(env: &Env, reviewer: &Address, submission: Submission) -> Result<u128, LedgerError> {
    let config = storage::config(env)?;
    let Submission {
        restaurant_id,
        rating,
        comment,
        media_hashes,
        media_types,
    } = submission;

    let restaurant = storage::load_restaurant(env, restaurant_id)?;
    if !restaurant.active {
        return Err(LedgerError::Unauthorized);
    }
    validation::check_text(&comment, MAX_COMMENT_LENGTH)?;
    validation::check_rating(rating)?;
    if storage::review_id_for(env, reviewer, restaurant_id).is_some() {
        return Err(LedgerError::AlreadyExists);
    }
    let batch = MediaBatch::parse(env, &media_hashes, &media_types)?;
    let review_id =
        storage::ensure_below_ceiling(env, &DataKey::NextReviewId, config.safety_ceiling)?;

    let now = env.ledger().timestamp();
    storage::put_review(
        env,
        &Review {
            id: review_id,
            restaurant_id,
            reviewer: reviewer.clone(),
            rating,
            comment,
            timestamp: now,
            media_count: batch.len(),
        },
    );
    storage::mark_reviewed(env, reviewer, restaurant_id, review_id);
    media::attach(env, &config, &batch, MediaOwner::Review(review_id), reviewer, 0)?;

    let restaurant = restaurant.with_review(rating, config.safety_ceiling)?;
    storage::put_restaurant(env, &restaurant);

    let stats = storage::reviewer_stats(env, reviewer)
        .with_review(rating, config.safety_ceiling)?;
    storage::put_reviewer_stats(env, reviewer, &stats);
    if stats.earns_reward(rating) {
        rewards::distribute_reviewer_reward(env, &config, reviewer)?;
    }

    rewards::record_visit(env, &config, restaurant_id, reviewer)?;

    storage::allocate_id(env, &DataKey::NextReviewId, config.safety_ceiling)?;
    events::emit_review_submitted(env, reviewer, restaurant_id, review_id, rating);
    Ok(review_id)
}
