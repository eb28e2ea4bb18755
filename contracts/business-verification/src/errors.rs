use soroban_sdk::contracterror;

/// Failure kinds returned by the registry entrypoints.
///
/// Every variant is checked before any write, so an `Err` never leaves
/// partial state behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// The business identifier is already registered.
    DuplicateBusiness = 1,
    /// No business is registered under the identifier.
    BusinessNotFound = 2,
    /// The caller is not the current admin.
    Unauthorized = 3,
    /// `initialize` was already called.
    AlreadyInitialized = 4,
    /// An admin-gated call arrived before `initialize`.
    NotInitialized = 5,
}
