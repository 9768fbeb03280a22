use soroban_sdk::contracterror;

/// Failure reasons returned by every ledger entry point.
///
/// Codes are stable so integrators can match on the raw `u32`. Returning any
/// of these from a contract function rolls back all storage writes and events
/// of the invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Referenced restaurant, review or media id was never allocated.
    NotFound = 1,
    /// The reviewer already reviewed this restaurant.
    AlreadyExists = 2,
    /// Rating outside 1..=5.
    InvalidRating = 3,
    /// Bad text, bad list shape, capacity exceeded, counter at its safety
    /// ceiling or arithmetic overflow.
    InvalidInput = 4,
    /// Content hash length outside 10..=100 bytes, or an unknown media tag.
    InvalidHash = 5,
    /// Caller lacks the required role, or the restaurant is inactive.
    Unauthorized = 6,
    /// A reward token transfer into or out of the pool failed.
    TransferFailed = 7,
    NotInitialized = 8,
    AlreadyInitialized = 9,
}
