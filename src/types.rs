use soroban_sdk::{contracttype, Address, String};

use crate::error::LedgerError;

/// Ratings at or above this value count as high-quality reviews.
pub const HIGH_QUALITY_RATING: u32 = 4;

/// Increments `value` by one, refusing once it has reached `ceiling`.
pub(crate) fn bump_counter(value: u128, ceiling: u128) -> Result<u128, LedgerError> {
    if value >= ceiling {
        return Err(LedgerError::InvalidInput);
    }
    value.checked_add(1).ok_or(LedgerError::InvalidInput)
}

/// Contract-wide settings written by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Token held in custody for the reward pool.
    pub reward_token: Address,
    pub reviewer_reward: u128,
    pub loyalty_reward: u128,
    /// Cap on every counter, kept well below `u128::MAX`.
    pub safety_ceiling: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Restaurant {
    pub id: u128,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub owner: Address,
    pub active: bool,
    pub total_reviews: u128,
    /// Integer-truncated running mean on the 1..=5 scale.
    pub average_rating: u128,
    pub profile_media: Option<String>,
    pub media_count: u32,
    pub created_at: u64,
}

impl Restaurant {
    /// Folds one more rating into the aggregate.
    ///
    /// The previous sum is reconstructed as `average_rating * total_reviews`
    /// and every step is overflow-checked before the new rating is added.
    pub fn with_review(self, rating: u32, ceiling: u128) -> Result<Self, LedgerError> {
        let total_reviews = bump_counter(self.total_reviews, ceiling)?;
        let sum = self
            .average_rating
            .checked_mul(self.total_reviews)
            .and_then(|sum| sum.checked_add(u128::from(rating)))
            .ok_or(LedgerError::InvalidInput)?;

        Ok(Restaurant {
            total_reviews,
            average_rating: sum / total_reviews,
            ..self
        })
    }

    pub fn with_media_count(self, media_count: u32) -> Self {
        Restaurant {
            media_count,
            ..self
        }
    }

    pub fn with_profile_media(self, hash: String) -> Self {
        Restaurant {
            profile_media: Some(hash),
            ..self
        }
    }

    pub fn toggled(self) -> Self {
        Restaurant {
            active: !self.active,
            ..self
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Review {
    pub id: u128,
    pub restaurant_id: u128,
    pub reviewer: Address,
    pub rating: u32,
    pub comment: String,
    pub timestamp: u64,
    pub media_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReviewerStats {
    pub total_reviews: u128,
    pub high_quality_reviews: u128,
    pub total_rewards_earned: u128,
    pub last_reward_timestamp: u64,
}

impl ReviewerStats {
    pub fn with_review(self, rating: u32, ceiling: u128) -> Result<Self, LedgerError> {
        let high_quality_reviews = if rating >= HIGH_QUALITY_RATING {
            bump_counter(self.high_quality_reviews, ceiling)?
        } else {
            self.high_quality_reviews
        };

        Ok(ReviewerStats {
            total_reviews: bump_counter(self.total_reviews, ceiling)?,
            high_quality_reviews,
            ..self
        })
    }

    pub fn with_reward(self, amount: u128, now: u64) -> Result<Self, LedgerError> {
        Ok(ReviewerStats {
            total_rewards_earned: self
                .total_rewards_earned
                .checked_add(amount)
                .ok_or(LedgerError::InvalidInput)?,
            last_reward_timestamp: now,
            ..self
        })
    }

    /// Whether a review with `rating` just recorded makes the reviewer
    /// eligible for a payout.
    pub fn earns_reward(&self, rating: u32) -> bool {
        rating >= HIGH_QUALITY_RATING && self.total_reviews >= 3
    }
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoyaltyRecord {
    pub visit_count: u128,
    pub total_rewards: u128,
    pub last_visit_timestamp: u64,
}

impl LoyaltyRecord {
    pub fn with_visit(self, now: u64, ceiling: u128) -> Result<Self, LedgerError> {
        Ok(LoyaltyRecord {
            visit_count: bump_counter(self.visit_count, ceiling)?,
            last_visit_timestamp: now,
            ..self
        })
    }

    pub fn with_reward(self, amount: u128) -> Result<Self, LedgerError> {
        Ok(LoyaltyRecord {
            total_rewards: self
                .total_rewards
                .checked_add(amount)
                .ok_or(LedgerError::InvalidInput)?,
            ..self
        })
    }

    /// Every fifth visit, starting with the fifth.
    pub fn earns_reward(&self) -> bool {
        self.visit_count > 2 && self.visit_count % 5 == 0
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

/// The single entity a media item belongs to.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaOwner {
    Restaurant(u128),
    Review(u128),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MediaItem {
    pub id: u128,
    pub content_hash: String,
    pub media_type: MediaType,
    pub uploader: Address,
    pub attached_to: MediaOwner,
    pub timestamp: u64,
    pub active: bool,
}

/// One validated (hash, type) pair awaiting attachment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MediaUpload {
    pub content_hash: String,
    pub media_type: MediaType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    fn restaurant(env: &Env, total_reviews: u128, average_rating: u128) -> Restaurant {
        Restaurant {
            id: 1,
            name: String::from_str(env, "Chez Test"),
            cuisine: String::from_str(env, "French"),
            location: String::from_str(env, "Lyon"),
            owner: Address::generate(env),
            active: true,
            total_reviews,
            average_rating,
            profile_media: None,
            media_count: 0,
            created_at: 0,
        }
    }

    #[test]
    fn running_average_truncates() {
        let env = Env::default();
        let r = restaurant(&env, 0, 0).with_review(5, u128::MAX).unwrap();
        assert_eq!((r.total_reviews, r.average_rating), (1, 5));
        let r = r.with_review(4, u128::MAX).unwrap();
        assert_eq!((r.total_reviews, r.average_rating), (2, 4));
        let r = r.with_review(4, u128::MAX).unwrap();
        assert_eq!((r.total_reviews, r.average_rating), (3, 4));
    }

    #[test]
    fn sum_overflow_is_rejected() {
        let env = Env::default();
        let r = restaurant(&env, u128::MAX / 2, 5);
        assert_eq!(r.with_review(5, u128::MAX), Err(LedgerError::InvalidInput));
    }

    #[test]
    fn total_respects_ceiling() {
        let env = Env::default();
        let r = restaurant(&env, 10, 3);
        assert_eq!(r.clone().with_review(3, 10), Err(LedgerError::InvalidInput));
        assert_eq!(r.with_review(3, 11).unwrap().total_reviews, 11);
    }

    #[test]
    fn bump_counter_stops_at_ceiling() {
        assert_eq!(bump_counter(0, 1), Ok(1));
        assert_eq!(bump_counter(1, 1), Err(LedgerError::InvalidInput));
        assert_eq!(bump_counter(u128::MAX, u128::MAX), Err(LedgerError::InvalidInput));
    }

    #[test]
    fn reviewer_reward_needs_three_reviews_and_high_rating() {
        let mut stats = ReviewerStats::default();
        for _ in 0..2 {
            stats = stats.with_review(5, u128::MAX).unwrap();
            assert!(!stats.earns_reward(5));
        }
        stats = stats.with_review(3, u128::MAX).unwrap();
        assert!(!stats.earns_reward(3));
        assert_eq!(stats.high_quality_reviews, 2);

        stats = stats.with_review(4, u128::MAX).unwrap();
        assert!(stats.earns_reward(4));
        assert_eq!(stats.total_reviews, 4);
        assert_eq!(stats.high_quality_reviews, 3);
    }

    #[test]
    fn loyalty_pays_on_every_fifth_visit() {
        let mut record = LoyaltyRecord::default();
        let mut paid_on = [0u128; 3];
        let mut paid = 0;
        for now in 1..=15u64 {
            record = record.with_visit(now, u128::MAX).unwrap();
            if record.earns_reward() {
                paid_on[paid] = record.visit_count;
                paid += 1;
            }
        }
        assert_eq!(paid_on, [5, 10, 15]);
        assert_eq!(record.last_visit_timestamp, 15);
    }
}
