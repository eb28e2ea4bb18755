//! # Registry Events
//!
//! | Topic      | Extra topic   | Payload                   |
//! |------------|---------------|---------------------------|
//! | `adm_init` | –             | `AdminChangedEvent`       |
//! | `biz_reg`  | business id   | `BusinessRegisteredEvent` |
//! | `biz_ver`  | business id   | `BusinessVerifiedEvent`   |
//! | `adm_set`  | –             | `AdminChangedEvent`       |
//!
//! Events are published only after the corresponding write.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

/// Topic for contract initialization
pub const TOPIC_ADMIN_INITIALIZED: Symbol = symbol_short!("adm_init");
/// Topic for business registration
pub const TOPIC_BUSINESS_REGISTERED: Symbol = symbol_short!("biz_reg");
/// Topic for business verification
pub const TOPIC_BUSINESS_VERIFIED: Symbol = symbol_short!("biz_ver");
/// Topic for admin transfer
pub const TOPIC_ADMIN_CHANGED: Symbol = symbol_short!("adm_set");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessRegisteredEvent {
    pub business_id: String,
    pub owner: Address,
    pub registration_number: String,
    pub industry: String,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct BusinessVerifiedEvent {
    pub business_id: String,
    pub verified_by: Address,
    /// Ledger sequence stamped into the record
    pub verification_date: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AdminChangedEvent {
    /// `None` on initialization
    pub previous: Option<Address>,
    pub new_admin: Address,
}

// ════════════════════════════════════════════════════════════════════
//  Event Emission Functions
// ════════════════════════════════════════════════════════════════════

pub fn emit_admin_initialized(env: &Env, admin: &Address) {
    let event = AdminChangedEvent {
        previous: None,
        new_admin: admin.clone(),
    };
    env.events().publish((TOPIC_ADMIN_INITIALIZED,), event);
}

pub fn emit_business_registered(
    env: &Env,
    business_id: &String,
    owner: &Address,
    registration_number: &String,
    industry: &String,
) {
    let event = BusinessRegisteredEvent {
        business_id: business_id.clone(),
        owner: owner.clone(),
        registration_number: registration_number.clone(),
        industry: industry.clone(),
    };
    env.events()
        .publish((TOPIC_BUSINESS_REGISTERED, business_id.clone()), event);
}

pub fn emit_business_verified(
    env: &Env,
    business_id: &String,
    verified_by: &Address,
    verification_date: u32,
) {
    let event = BusinessVerifiedEvent {
        business_id: business_id.clone(),
        verified_by: verified_by.clone(),
        verification_date,
    };
    env.events()
        .publish((TOPIC_BUSINESS_VERIFIED, business_id.clone()), event);
}

pub fn emit_admin_changed(env: &Env, previous: &Address, new_admin: &Address) {
    let event = AdminChangedEvent {
        previous: Some(previous.clone()),
        new_admin: new_admin.clone(),
    };
    env.events().publish((TOPIC_ADMIN_CHANGED,), event);
}
