use community::*;

fn coins(pairs: &[(&str, u128)]) -> Coins {
    Coins::from_coins(pairs.iter().map(|(d, a)| Coin::new(*d, *a)).collect()).unwrap()
}

fn addr(n: u8) -> Address {
    Address::new([n; 20])
}

fn gov() -> Address {
    Address::module("gov")
}

fn new_server(bank: InMemoryBank) -> MsgServer<InMemoryBank> {
    MsgServer::new(Keeper::new(bank), gov())
}

#[test]
fn test_fund_single_coin() {
    let depositor = addr(1);
    let amount = coins(&[("utime", 2_000_000)]);

    let mut bank = InMemoryBank::new();
    bank.mint(&depositor, &amount).unwrap();
    let supply_before = bank.total_supply().unwrap();
    let mut server = new_server(bank);

    server
        .fund_community_pool(&MsgFundCommunityPool::new(depositor, amount.clone()))
        .unwrap();

    assert_eq!(server.keeper().module_account_balance(), amount);
    assert!(server.keeper().bank().balance_of(&depositor).is_empty());
    assert_eq!(server.keeper().bank().total_supply().unwrap(), supply_before);
}

#[test]
fn test_fund_multiple_coins() {
    let depositor = addr(2);
    let amount = coins(&[("utime", 3_000_000), ("usdx", 10_000_000)]);

    let mut bank = InMemoryBank::new();
    bank.mint(&depositor, &amount).unwrap();
    let mut server = new_server(bank);

    server
        .fund_community_pool(&MsgFundCommunityPool::new(depositor, amount.clone()))
        .unwrap();

    let pool = server.keeper().module_account_balance();
    assert_eq!(pool.amount_of("utime"), 3_000_000);
    assert_eq!(pool.amount_of("usdx"), 10_000_000);
    assert!(server.keeper().bank().balance_of(&depositor).is_empty());
}

#[test]
fn test_fund_partial_deposit_leaves_remainder() {
    let depositor = addr(3);

    let mut bank = InMemoryBank::new();
    bank.mint(&depositor, &coins(&[("utime", 5_000_000)])).unwrap();
    let mut server = new_server(bank);

    server
        .fund_community_pool(&MsgFundCommunityPool::new(
            depositor,
            coins(&[("utime", 2_000_000)]),
        ))
        .unwrap();

    assert_eq!(
        server.keeper().module_account_balance(),
        coins(&[("utime", 2_000_000)])
    );
    assert_eq!(
        server.keeper().bank().balance_of(&depositor),
        coins(&[("utime", 3_000_000)])
    );
}

#[test]
fn test_fund_empty_amount_rejected_without_ledger_access() {
    let depositor = addr(4);

    // depositor balance is irrelevant; the message never reaches the ledger
    let mut bank = InMemoryBank::new();
    bank.mint(&depositor, &coins(&[("utime", 1_000_000)])).unwrap();
    let mut server = new_server(bank);

    let err = server
        .fund_community_pool(&MsgFundCommunityPool::new(depositor, Coins::new()))
        .unwrap_err();
    assert!(matches!(err, CommunityError::InvalidRequest(_)));

    assert!(server.keeper().module_account_balance().is_empty());
    assert_eq!(
        server.keeper().bank().balance_of(&depositor),
        coins(&[("utime", 1_000_000)])
    );
}

#[test]
fn test_fund_insufficient_funds_leaves_state_unchanged() {
    let depositor = addr(5);
    let mut server = new_server(InMemoryBank::new());

    let err = server
        .fund_community_pool(&MsgFundCommunityPool::new(
            depositor,
            coins(&[("utime", 2_000_000)]),
        ))
        .unwrap_err();
    assert_eq!(
        err,
        CommunityError::InsufficientFunds {
            denom: "utime".to_string(),
            available: 0,
            requested: 2_000_000,
        }
    );

    assert!(server.keeper().module_account_balance().is_empty());
    assert!(server.keeper().bank().balance_of(&depositor).is_empty());
}

#[test]
fn test_fund_is_atomic_across_denoms() {
    let depositor = addr(6);

    // covers utime fully but holds no usdx at all
    let mut bank = InMemoryBank::new();
    bank.mint(&depositor, &coins(&[("utime", 3_000_000)])).unwrap();
    let mut server = new_server(bank);

    let err = server
        .fund_community_pool(&MsgFundCommunityPool::new(
            depositor,
            coins(&[("utime", 1_000_000), ("usdx", 1)]),
        ))
        .unwrap_err();
    assert!(matches!(err, CommunityError::InsufficientFunds { .. }));

    assert!(server.keeper().module_account_balance().is_empty());
    assert_eq!(
        server.keeper().bank().balance_of(&depositor),
        coins(&[("utime", 3_000_000)])
    );
}

#[test]
fn test_update_params_by_authority() {
    let mut server = new_server(InMemoryBank::new());
    let params = Params::new(1_700_000_000, 5 * TIME_UNIT, 10 * TIME_UNIT);

    server
        .update_params(&MsgUpdateParams::new(gov(), params.clone()))
        .unwrap();

    assert_eq!(server.keeper().params(), &params);
}

#[test]
fn test_update_params_wrong_authority() {
    let mut server = new_server(InMemoryBank::new());
    let before = server.keeper().params().clone();

    let err = server
        .update_params(&MsgUpdateParams::new(addr(9), Params::default()))
        .unwrap_err();
    assert!(matches!(err, CommunityError::Unauthorized { .. }));
    assert_eq!(server.keeper().params(), &before);
}

#[test]
fn test_update_params_authority_checked_before_content() {
    let mut server = new_server(InMemoryBank::new());
    let invalid = Params::new(0, MAX_STAKING_REWARDS_PER_SECOND + 1, 0);

    // both the authority and the params are wrong; authority wins
    let err = server
        .update_params(&MsgUpdateParams::new(addr(9), invalid))
        .unwrap_err();
    assert!(matches!(err, CommunityError::Unauthorized { .. }));
}

#[test]
fn test_update_params_invalid_params() {
    let mut server = new_server(InMemoryBank::new());
    let before = server.keeper().params().clone();
    let invalid = Params::new(0, MAX_STAKING_REWARDS_PER_SECOND + 1, 0);

    let err = server
        .update_params(&MsgUpdateParams::new(gov(), invalid))
        .unwrap_err();
    assert!(matches!(err, CommunityError::InvalidParams(_)));
    assert_eq!(server.keeper().params(), &before);
}

#[test]
fn test_update_params_replaces_whole_record() {
    let mut server = new_server(InMemoryBank::new());

    server
        .update_params(&MsgUpdateParams::new(
            gov(),
            Params::new(1_700_000_000, 5 * TIME_UNIT, 10 * TIME_UNIT),
        ))
        .unwrap();

    // second update zeroes fields the first one set; nothing may survive
    let replacement = Params::new(0, 7 * TIME_UNIT, 0);
    server
        .update_params(&MsgUpdateParams::new(gov(), replacement.clone()))
        .unwrap();

    assert_eq!(server.keeper().params(), &replacement);
}

#[test]
fn test_genesis_init_and_export() {
    let mut keeper = Keeper::new(InMemoryBank::new());
    let genesis = GenesisState::new(Params::new(1_700_000_000, TIME_UNIT, 0));

    keeper.init_genesis(&genesis).unwrap();
    assert_eq!(keeper.export_genesis(), genesis);

    let invalid = GenesisState::new(Params::new(0, MAX_STAKING_REWARDS_PER_SECOND + 1, 0));
    assert!(keeper.init_genesis(&invalid).is_err());
    // failed init leaves the previous params in place
    assert_eq!(keeper.export_genesis(), genesis);
}

#[test]
fn test_genesis_json_roundtrip() {
    let genesis = GenesisState::new(Params::new(1_700_000_000, 5 * TIME_UNIT, 10 * TIME_UNIT));
    let encoded = serde_json::to_string(&genesis).unwrap();
    let decoded: GenesisState = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, genesis);
}

#[test]
fn test_queries_reflect_state() {
    let depositor = addr(7);
    let amount = coins(&[("utime", 42)]);

    let mut bank = InMemoryBank::new();
    bank.mint(&depositor, &amount).unwrap();
    let mut server = new_server(bank);

    server
        .fund_community_pool(&MsgFundCommunityPool::new(depositor, amount.clone()))
        .unwrap();

    assert_eq!(server.keeper().query_balance().coins, amount);
    assert_eq!(server.keeper().query_params().params, Params::default());
}
