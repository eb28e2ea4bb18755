//! # Business Verification Registry Contract
//!
//! Records businesses and tracks a binary verification flag assigned by a
//! single trusted admin.
//!
//! ## Record Lifecycle
//!
//! ```text
//! [Unregistered] → [Registered, unverified] → [Registered, verified] ⟲
//! ```
//!
//! Anyone may register an unused identifier and becomes its owner. Only
//! the admin may verify, and verification is never revoked. Verifying an
//! already verified business is allowed and restamps the ledger sequence.
//!
//! ## Admin
//!
//! The admin is set once by `initialize` and can be replaced by the
//! current admin at any time. The transfer is immediate: there is no
//! pending state and the previous admin cannot undo it.
//!
//! ## Check order
//!
//! Admin-gated calls reject a non-admin caller before looking up the
//! business, so an unauthorized caller cannot probe which identifiers
//! exist.

#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

pub mod errors;
pub mod events;
pub mod storage;

pub use errors::ContractError;
pub use events::{AdminChangedEvent, BusinessRegisteredEvent, BusinessVerifiedEvent};
pub use storage::{BusinessRecord, DataKey};

#[cfg(test)]
mod events_test;

#[contract]
pub struct BusinessVerificationContract;

#[contractimpl]
impl BusinessVerificationContract {
    // ── Initialization ──────────────────────────────────────────────

    /// Set the initial admin. Callable once; the caller must authorize
    /// as `admin`.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        events::emit_admin_initialized(&env, &admin);
        Ok(())
    }

    // ── Registration ────────────────────────────────────────────────

    /// Register a new business owned by `owner`.
    ///
    /// Open to any caller. The record starts unverified with a
    /// verification date of 0.
    ///
    /// * `owner` - Registering address; must authorize
    /// * `business_id` - Unique identifier, never reassigned once taken
    pub fn register_business(
        env: Env,
        owner: Address,
        business_id: String,
        name: String,
        registration_number: String,
        industry: String,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        if storage::has_business(&env, &business_id) {
            log!(&env, "business already registered", business_id);
            return Err(ContractError::DuplicateBusiness);
        }

        let record = BusinessRecord {
            owner: owner.clone(),
            name,
            registration_number: registration_number.clone(),
            industry: industry.clone(),
            verified: false,
            verification_date: 0,
        };
        storage::set_business(&env, &business_id, &record);

        events::emit_business_registered(
            &env,
            &business_id,
            &owner,
            &registration_number,
            &industry,
        );
        Ok(())
    }

    // ── Verification ────────────────────────────────────────────────

    /// Mark a business as verified at the current ledger sequence.
    ///
    /// Fails with `Unauthorized` for any non-admin caller, whether or not
    /// the business exists. Re-verifying overwrites the stored date.
    pub fn verify_business(
        env: Env,
        caller: Address,
        business_id: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        let mut record =
            storage::get_business(&env, &business_id).ok_or(ContractError::BusinessNotFound)?;

        let now = env.ledger().sequence();
        record.verified = true;
        record.verification_date = now;
        storage::set_business(&env, &business_id, &record);

        events::emit_business_verified(&env, &business_id, &caller, now);
        Ok(())
    }

    // ── Admin Transfer ──────────────────────────────────────────────

    /// Replace the admin with `new_admin`, effective immediately.
    ///
    /// `new_admin` is not validated and may equal the current admin.
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ContractError> {
        let previous = Self::require_admin(&env, &caller)?;
        storage::set_admin(&env, &new_admin);
        events::emit_admin_changed(&env, &previous, &new_admin);
        Ok(())
    }

    // ── Query Functions ─────────────────────────────────────────────

    /// Returns false for unknown identifiers.
    pub fn is_business_verified(env: Env, business_id: String) -> bool {
        storage::get_business(&env, &business_id)
            .map(|record| record.verified)
            .unwrap_or(false)
    }

    /// Get a business record by identifier.
    pub fn get_business(env: Env, business_id: String) -> Option<BusinessRecord> {
        storage::get_business(&env, &business_id)
    }

    /// Get the current admin, or `None` before initialization.
    pub fn get_admin(env: Env) -> Option<Address> {
        storage::get_admin(&env)
    }

    // ── Internal Helpers ────────────────────────────────────────────

    /// Require `caller` to authorize and be the current admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<Address, ContractError> {
        caller.require_auth();
        let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            log!(env, "caller is not admin", caller.clone());
            return Err(ContractError::Unauthorized);
        }
        Ok(admin)
    }
}
