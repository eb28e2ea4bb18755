//! Storage layout for the business verification registry.
//!
//! The admin is a single contract-wide value and lives in instance
//! storage. Business records are keyed by their identifier and live in
//! persistent storage, since the mapping grows with every registration.

use soroban_sdk::{contracttype, Address, Env, String};

/// Storage keys for the registry
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Sole authority allowed to verify businesses and transfer admin
    Admin,
    /// Business record by identifier
    Business(String),
}

/// Registered business and its verification status.
///
/// `owner`, `name`, `registration_number` and `industry` are write-once.
/// Only `verified` and `verification_date` change, and only through
/// admin verification.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessRecord {
    /// Address that registered the business
    pub owner: Address,
    /// Display name
    pub name: String,
    /// External registration identifier
    pub registration_number: String,
    /// Free-text industry category
    pub industry: String,
    /// Set by the admin, never reset
    pub verified: bool,
    /// Ledger sequence of the latest verification, 0 until verified
    pub verification_date: u32,
}

// ════════════════════════════════════════════════════════════════════
//  Admin
// ════════════════════════════════════════════════════════════════════

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

// ════════════════════════════════════════════════════════════════════
//  Businesses
// ════════════════════════════════════════════════════════════════════

pub fn has_business(env: &Env, business_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Business(business_id.clone()))
}

pub fn get_business(env: &Env, business_id: &String) -> Option<BusinessRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Business(business_id.clone()))
}

pub fn set_business(env: &Env, business_id: &String, record: &BusinessRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Business(business_id.clone()), record);
}
