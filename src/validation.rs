//! Input checks shared by the entry points.

use soroban_sdk::{symbol_short, Env, String, Symbol, Vec};

use crate::error::LedgerError;
use crate::types::{MediaType, MediaUpload};

pub const MAX_NAME_LENGTH: u32 = 50;
pub const MAX_CUISINE_LENGTH: u32 = 30;
pub const MAX_LOCATION_LENGTH: u32 = 100;
pub const MAX_COMMENT_LENGTH: u32 = 500;

pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 5;

/// Bounds on an IPFS-style content hash, in bytes.
pub const MIN_HASH_LENGTH: u32 = 10;
pub const MAX_HASH_LENGTH: u32 = 100;

/// Gallery size of a single restaurant or review.
pub const MAX_MEDIA_ITEMS: u32 = 10;

pub fn check_text(text: &String, max_length: u32) -> Result<(), LedgerError> {
    if text.len() == 0 || text.len() > max_length {
        return Err(LedgerError::InvalidInput);
    }
    Ok(())
}

pub fn check_rating(rating: u32) -> Result<(), LedgerError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(LedgerError::InvalidRating);
    }
    Ok(())
}

pub fn check_hash(hash: &String) -> Result<(), LedgerError> {
    if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&hash.len()) {
        return Err(LedgerError::InvalidHash);
    }
    Ok(())
}

impl MediaType {
    /// Parses the wire tag (`image`, `video` or `audio`). An unknown tag is
    /// reported as `InvalidHash`, like any other malformed media reference.
    pub fn from_tag(tag: &Symbol) -> Result<Self, LedgerError> {
        if *tag == symbol_short!("image") {
            Ok(MediaType::Image)
        } else if *tag == symbol_short!("video") {
            Ok(MediaType::Video)
        } else if *tag == symbol_short!("audio") {
            Ok(MediaType::Audio)
        } else {
            Err(LedgerError::InvalidHash)
        }
    }
}

/// A validated sequence of at most [`MAX_MEDIA_ITEMS`] uploads.
pub struct MediaBatch {
    uploads: Vec<MediaUpload>,
}

impl MediaBatch {
    /// Checks list shape first, then each (hash, tag) pair in input order.
    pub fn parse(
        env: &Env,
        hashes: &Vec<String>,
        tags: &Vec<Symbol>,
    ) -> Result<Self, LedgerError> {
        if hashes.len() != tags.len() || hashes.len() > MAX_MEDIA_ITEMS {
            return Err(LedgerError::InvalidInput);
        }
        Self::parse_items(env, hashes, tags)
    }

    /// Like [`MediaBatch::parse`], but also requires at least one item and
    /// room for all of them next to `existing` items already attached.
    pub fn parse_for_gallery(
        env: &Env,
        hashes: &Vec<String>,
        tags: &Vec<Symbol>,
        existing: u32,
    ) -> Result<Self, LedgerError> {
        let count = hashes.len();
        if count != tags.len() || count == 0 || count > MAX_MEDIA_ITEMS {
            return Err(LedgerError::InvalidInput);
        }
        match existing.checked_add(count) {
            Some(total) if total <= MAX_MEDIA_ITEMS => {}
            _ => return Err(LedgerError::InvalidInput),
        }
        Self::parse_items(env, hashes, tags)
    }

    fn parse_items(
        env: &Env,
        hashes: &Vec<String>,
        tags: &Vec<Symbol>,
    ) -> Result<Self, LedgerError> {
        let mut uploads = Vec::new(env);
        for (content_hash, tag) in hashes.iter().zip(tags.iter()) {
            check_hash(&content_hash)?;
            let media_type = MediaType::from_tag(&tag)?;
            uploads.push_back(MediaUpload {
                content_hash,
                media_type,
            });
        }
        Ok(MediaBatch { uploads })
    }

    pub fn len(&self) -> u32 {
        self.uploads.len()
    }

    pub fn uploads(&self) -> &Vec<MediaUpload> {
        &self.uploads
    }
}
