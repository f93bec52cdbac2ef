use anchor_lang::prelude::*;

pub mod job;
pub mod registry;
pub mod worker;

pub use job::*;
pub use registry::*;
pub use worker::*;

/// Deserializes a program-owned account. `None` when the account was never
/// created.
pub fn load_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}
