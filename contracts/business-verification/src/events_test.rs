//! # Events Tests
//!
//! Each successful state change publishes one event with the expected
//! topics and payload.

use super::*;
use crate::events::{
    TOPIC_ADMIN_CHANGED, TOPIC_ADMIN_INITIALIZED, TOPIC_BUSINESS_REGISTERED,
    TOPIC_BUSINESS_VERIFIED,
};
use soroban_sdk::testutils::{Address as _, Events as _, Ledger as _};
use soroban_sdk::{Address, Env, IntoVal, String, TryFromVal, Val, Vec};

fn setup() -> (Env, BusinessVerificationContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(BusinessVerificationContract, ());
    let client = BusinessVerificationContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin);
    (env, client, admin)
}

/// Helper: topics and payload of the most recent event, checked to come
/// from the registry contract.
fn last_event(env: &Env, client: &BusinessVerificationContractClient) -> (Vec<Val>, Val) {
    let (contract, topics, data) = env.events().all().last().unwrap();
    assert_eq!(contract, client.address);
    (topics, data)
}

#[test]
fn test_initialize_emits_event() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(BusinessVerificationContract, ());
    let client = BusinessVerificationContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);

    client.initialize(&admin);

    let (topics, data) = last_event(&env, &client);
    let expected: Vec<Val> = (TOPIC_ADMIN_INITIALIZED,).into_val(&env);
    assert_eq!(topics, expected);
    let event = AdminChangedEvent::try_from_val(&env, &data).unwrap();
    assert_eq!(event.previous, None);
    assert_eq!(event.new_admin, admin);
}

#[test]
fn test_register_emits_event() {
    let (env, client, _admin) = setup();
    let owner = Address::generate(&env);
    let id = String::from_str(&env, "business123");

    client.register_business(
        &owner,
        &id,
        &String::from_str(&env, "Test Business"),
        &String::from_str(&env, "REG123456"),
        &String::from_str(&env, "Technology"),
    );

    let (topics, data) = last_event(&env, &client);
    let expected: Vec<Val> = (TOPIC_BUSINESS_REGISTERED, id.clone()).into_val(&env);
    assert_eq!(topics, expected);
    let event = BusinessRegisteredEvent::try_from_val(&env, &data).unwrap();
    assert_eq!(
        event,
        BusinessRegisteredEvent {
            business_id: id,
            owner,
            registration_number: String::from_str(&env, "REG123456"),
            industry: String::from_str(&env, "Technology"),
        }
    );
}

#[test]
fn test_verify_emits_event_with_ledger_sequence() {
    let (env, client, admin) = setup();
    let id = String::from_str(&env, "business123");
    client.register_business(
        &Address::generate(&env),
        &id,
        &String::from_str(&env, "Test Business"),
        &String::from_str(&env, "REG123456"),
        &String::from_str(&env, "Technology"),
    );
    env.ledger().set_sequence_number(100);

    client.verify_business(&admin, &id);

    let (topics, data) = last_event(&env, &client);
    let expected: Vec<Val> = (TOPIC_BUSINESS_VERIFIED, id.clone()).into_val(&env);
    assert_eq!(topics, expected);
    let event = BusinessVerifiedEvent::try_from_val(&env, &data).unwrap();
    assert_eq!(event.business_id, id);
    assert_eq!(event.verified_by, admin);
    assert_eq!(event.verification_date, 100);
}

#[test]
fn test_set_admin_emits_previous_and_new() {
    let (env, client, admin) = setup();
    let new_admin = Address::generate(&env);

    client.set_admin(&admin, &new_admin);

    let (topics, data) = last_event(&env, &client);
    let expected: Vec<Val> = (TOPIC_ADMIN_CHANGED,).into_val(&env);
    assert_eq!(topics, expected);
    let event = AdminChangedEvent::try_from_val(&env, &data).unwrap();
    assert_eq!(event.previous, Some(admin));
    assert_eq!(event.new_admin, new_admin);
}
