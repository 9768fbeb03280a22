//! Media catalog: item creation, slot indexing and soft deletion.

use soroban_sdk::{Address, Env, Vec};

use crate::error::LedgerError;
use crate::events;
use crate::storage::{self, DataKey};
use crate::types::{Config, MediaItem, MediaOwner};
use crate::validation::{MediaBatch, MAX_MEDIA_ITEMS};

/// Creates one media item per upload, bound to `owner` at consecutive slots
/// starting from `first_slot`. Returns the slot count after the last item.
pub fn attach(
    env: &Env,
    config: &Config,
    batch: &MediaBatch,
    owner: MediaOwner,
    uploader: &Address,
    first_slot: u32,
) -> Result<u32, LedgerError> {
    let timestamp = env.ledger().timestamp();
    let mut slot = first_slot;

    for upload in batch.uploads().iter() {
        let id = storage::allocate_id(env, &DataKey::NextMediaId, config.safety_ceiling)?;
        let item = MediaItem {
            id,
            content_hash: upload.content_hash,
            media_type: upload.media_type,
            uploader: uploader.clone(),
            attached_to: owner,
            timestamp,
            active: true,
        };
        storage::put_media(env, &item);
        storage::put_slot(env, &storage::slot_key(owner, slot), id);
        slot = slot.checked_add(1).ok_or(LedgerError::InvalidInput)?;
    }
    Ok(slot)
}

/// Soft-deletes a media item. Only its uploader may do this; the item keeps
/// its id and slot.
pub fn deactivate(env: &Env, caller: &Address, media_id: u128) -> Result<MediaItem, LedgerError> {
    if !storage::is_allocated(env, &DataKey::NextMediaId, media_id) {
        return Err(LedgerError::NotFound);
    }
    let item = storage::media(env, media_id).ok_or(LedgerError::NotFound)?;
    if item.uploader != *caller {
        return Err(LedgerError::Unauthorized);
    }

    let item = MediaItem {
        active: false,
        ..item
    };
    storage::put_media(env, &item);
    events::emit_media_deactivated(env, media_id);
    Ok(item)
}

/// Every item attached to `owner`, in slot order.
pub fn gallery(env: &Env, owner: MediaOwner) -> Vec<MediaItem> {
    let mut items = Vec::new(env);
    for slot in 0..MAX_MEDIA_ITEMS {
        match storage::media_at_slot(env, &storage::slot_key(owner, slot)) {
            Some(item) => items.push_back(item),
            None => break,
        }
    }
    items
}
