#![cfg(test)]

use crate::types::Error;
use crate::{CollectibleContract, CollectibleContractClient};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

fn setup<'a>() -> (Env, CollectibleContractClient<'a>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, CollectibleContract);
    let client = CollectibleContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let minter = Address::generate(&env);

    client.initialize(
        &admin,
        &String::from_str(&env, "Collectible"),
        &String::from_str(&env, "CLB"),
    );
    client.set_minter(&minter, &true);

    (env, client, admin, minter)
}

#[test]
fn initialize_once() {
    let (env, client, admin, _) = setup();

    assert_eq!(client.name(), String::from_str(&env, "Collectible"));
    assert_eq!(client.symbol(), String::from_str(&env, "CLB"));
    assert_eq!(client.total_supply(), 0);

    let res = client.try_initialize(
        &admin,
        &String::from_str(&env, "Again"),
        &String::from_str(&env, "AGN"),
    );
    assert_eq!(res, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn mint_assigns_sequential_ids() {
    let (env, client, _, minter) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.mint(&minter, &alice, &1), 0);
    assert_eq!(client.mint(&minter, &bob, &4), 1);
    assert_eq!(client.mint(&minter, &alice, &3), 5);

    assert_eq!(client.total_supply(), 8);
    assert_eq!(client.balance_of(&alice), 4);
    assert_eq!(client.balance_of(&bob), 4);
    assert_eq!(client.ids_of_owner(&alice), vec![&env, 0, 5, 6, 7]);
    assert_eq!(client.ids_of_owner(&bob), vec![&env, 1, 2, 3, 4]);
    assert_eq!(client.owner_of(&0), alice);
    assert_eq!(client.owner_of(&4), bob);
}

#[test]
fn mint_requires_registered_minter() {
    let (env, client, _, minter) = setup();

    let outsider = Address::generate(&env);
    let res = client.try_mint(&outsider, &outsider, &1);
    assert_eq!(res, Err(Ok(Error::NotAuthorized)));

    let res = client.try_mint(&minter, &outsider, &0);
    assert_eq!(res, Err(Ok(Error::InvalidQuantity)));
}

#[test]
fn transfer_moves_enumeration() {
    let (env, client, _, minter) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    client.mint(&minter, &alice, &3);

    client.transfer(&alice, &bob, &0);

    assert_eq!(client.owner_of(&0), bob);
    // swap-remove: the last id takes the vacated slot
    assert_eq!(client.ids_of_owner(&alice), vec![&env, 2, 1]);
    assert_eq!(client.ids_of_owner(&bob), vec![&env, 0]);

    let res = client.try_transfer(&alice, &bob, &0);
    assert_eq!(res, Err(Ok(Error::NotTokenOwner)));

    let res = client.try_transfer(&alice, &bob, &99);
    assert_eq!(res, Err(Ok(Error::TokenNotFound)));
}
