use anchor_lang::prelude::*;

#[error_code]
pub enum ReputationError {
    #[msg("Worker already registered")]
    AlreadyRegistered,
    #[msg("Worker not registered")]
    NotRegistered,
    #[msg("Rating must be between 1 and 5")]
    InvalidRating,
    #[msg("Platform name cannot be empty")]
    EmptyPlatform,
    #[msg("Job type cannot be empty")]
    EmptyJobType,
    #[msg("Index out of bounds")]
    IndexOutOfBounds,
    #[msg("Platform name exceeds 32 characters")]
    PlatformTooLong,
    #[msg("Job type exceeds 32 characters")]
    JobTypeTooLong,
    #[msg("Counter overflowed")]
    CounterOverflow,
}
