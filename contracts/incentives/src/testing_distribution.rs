use cosmwasm_std::{coin, coins, Addr, BankMsg, Coin, Event, Response, Uint128};
use proptest::prelude::*;

use crate::contract::{execute, query_gauge, query_retired_gauge};
use crate::distribution::{apportion, compute_release, Recipient};
use crate::msg::{ExecuteMsg, SudoMsg};
use crate::state::{Gauge, RollappGaugesMode, ENDORSEMENTS, GAUGES, ROLLAPP_GAUGES};
use crate::testing::{
    asset_target, attribute, bank_msgs, create_gauge, create_gauge_msg, create_lock,
    epoch_tick, get_address_as_str, get_message_info, plus_seconds, rollapp_target, send, setup,
    setup_with_params, upsert_rollapp, MockDeps, ONE_DAY_IN_SECONDS, ONE_HOUR_IN_SECONDS,
    ONE_WEEK_IN_SECONDS, STAKE, USDC,
};
use crate::utils::amount_of;
use crate::ContractError;

fn events<'a>(res: &'a Response, ty: &str) -> Vec<&'a Event> {
    res.events.iter().filter(|event| event.ty == ty).collect()
}

fn event_attribute<'a>(event: &'a Event, key: &str) -> Option<&'a str> {
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
}

fn skip_reason(res: &Response, gauge_id: u64) -> Option<String> {
    events(res, "gauge_skipped")
        .into_iter()
        .find(|event| event_attribute(event, "gauge_id") == Some(gauge_id.to_string().as_str()))
        .and_then(|event| event_attribute(event, "reason"))
        .map(|reason| reason.to_string())
}

fn credited(res: &Response, denom: &str) -> Uint128 {
    bank_msgs(res)
        .iter()
        .map(|msg| match msg {
            BankMsg::Send { amount, .. } => amount_of(amount, denom),
            _ => Uint128::zero(),
        })
        .sum()
}

fn gauge(deps: &MockDeps, gauge_id: u64) -> Gauge {
    query_gauge(deps.as_ref(), gauge_id).unwrap().gauge
}

fn finite_gauge(id: u64, coins: Vec<Coin>, num_epochs_paid_over: u64) -> Gauge {
    Gauge {
        id,
        owner: Addr::unchecked("owner"),
        is_perpetual: false,
        distribute_to: asset_target(STAKE, 0),
        coins,
        distributed_coins: vec![],
        num_epochs_paid_over,
        filled_epochs: 0,
        start_time: cosmwasm_std::Timestamp::from_seconds(0),
        min_lock_age: None,
        release_per_epoch: None,
    }
}

fn recipient(id: u64, weight: u128) -> Recipient {
    Recipient {
        id,
        address: Addr::unchecked(format!("addr{id}")),
        weight: Uint128::new(weight),
    }
}

#[test]
fn compute_release_test() {
    let mut gauge = finite_gauge(1, vec![coin(100, STAKE), coin(2, USDC)], 3);
    assert_eq!(compute_release(&gauge).unwrap(), coins(33, STAKE));

    gauge.filled_epochs = 2;
    gauge.distributed_coins = coins(66, STAKE);
    // the last epoch releases everything that is left
    assert_eq!(
        compute_release(&gauge).unwrap(),
        vec![coin(34, STAKE), coin(2, USDC)]
    );

    gauge.filled_epochs = 3;
    assert!(matches!(
        compute_release(&gauge),
        Err(ContractError::InvariantViolation { .. })
    ));

    gauge.filled_epochs = 1;
    gauge.distributed_coins = coins(101, STAKE);
    assert!(matches!(
        compute_release(&gauge),
        Err(ContractError::InvariantViolation { .. })
    ));

    let mut perpetual = finite_gauge(2, coins(100, STAKE), 1);
    perpetual.is_perpetual = true;
    perpetual.distributed_coins = coins(30, STAKE);
    assert_eq!(compute_release(&perpetual).unwrap(), coins(70, STAKE));

    perpetual.release_per_epoch = Some(coins(50, STAKE));
    assert_eq!(compute_release(&perpetual).unwrap(), coins(50, STAKE));

    perpetual.distributed_coins = coins(60, STAKE);
    assert_eq!(
        compute_release(&perpetual).unwrap_err(),
        ContractError::InsufficientGaugeBalance {
            gauge_id: 2,
            denom: STAKE.to_string(),
            required: Uint128::new(50),
            available: Uint128::new(40),
        }
    );
}

#[test]
fn apportion_test() {
    // 100 * 1/3 = 33 and 100 * 2/3 = 66, the remaining 1 goes to the first recipient
    let shares = apportion(
        &[coin(100, STAKE), coin(10, USDC)],
        &[recipient(1, 1), recipient(2, 2)],
    )
    .unwrap();
    assert_eq!(
        shares,
        vec![
            vec![coin(34, STAKE), coin(4, USDC)],
            vec![coin(66, STAKE), coin(6, USDC)],
        ]
    );

    // a recipient whose share rounds down to zero gets nothing
    let shares = apportion(&coins(1, STAKE), &[recipient(1, 1), recipient(2, 1)]).unwrap();
    assert_eq!(shares, vec![coins(1, STAKE), vec![]]);

    assert!(apportion(&coins(1, STAKE), &[]).unwrap().is_empty());
}

#[test]
fn finite_gauge_over_three_epochs_test() {
    let (mut deps, env) = setup();
    let locker = get_address_as_str(&deps.api, "locker");

    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_DAY_IN_SECONDS).unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(asset_target(STAKE, ONE_DAY_IN_SECONDS), coins(100, USDC), 3),
    )
    .unwrap();

    let mut env = env;
    for (epoch_id, expected) in [(1, 33), (2, 33), (3, 34)] {
        let res = epoch_tick(&mut deps, &env, epoch_id);
        assert_eq!(bank_msgs(&res), vec![send(&locker, coins(expected, USDC))]);

        let paid = events(&res, "gauge_distribution");
        assert_eq!(paid.len(), 1);
        assert_eq!(event_attribute(paid[0], "gauge_id"), Some("1"));
        assert_eq!(
            event_attribute(paid[0], "released"),
            Some(format!("{expected}{USDC}").as_str())
        );

        env = plus_seconds(&env, ONE_DAY_IN_SECONDS);
    }

    // the gauge is retired after its last epoch
    assert!(matches!(
        query_gauge(deps.as_ref(), 1),
        Err(ContractError::NotFound { .. })
    ));
    let retired = query_retired_gauge(deps.as_ref(), 1)
        .unwrap()
        .retired_gauge;
    assert_eq!(retired.epoch_id, 3);
    assert_eq!(retired.distributed_coins, coins(100, USDC));

    let info = get_message_info(&deps.api, "addr0000", &coins(100, STAKE));
    let res = execute(
        deps.as_mut(),
        env.clone(),
        info,
        ExecuteMsg::AddToGauge {
            gauge_id: 1,
            coins: coins(10, STAKE),
        },
    );
    assert_eq!(res.unwrap_err(), ContractError::GaugeTerminal { gauge_id: 1 });

    // nothing left to pay
    let res = epoch_tick(&mut deps, &env, 4);
    assert!(bank_msgs(&res).is_empty());
}

#[test]
fn rewards_split_by_locked_amount_test() {
    let (mut deps, env) = setup();
    let alice = get_address_as_str(&deps.api, "alice");
    let bob = get_address_as_str(&deps.api, "bob");

    // alice holds lock 1 and lock 3, bob holds lock 2
    create_lock(&mut deps, &env, "alice", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_lock(&mut deps, &env, "bob", coins(30, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_lock(
        &mut deps,
        &env,
        "alice",
        vec![coin(20, STAKE), coin(1000, USDC)],
        ONE_WEEK_IN_SECONDS,
    )
    .unwrap();

    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(asset_target(STAKE, ONE_DAY_IN_SECONDS), coins(101, USDC), 1),
    )
    .unwrap();

    // weights 10, 30 and 20: shares 16, 50 and 33, remainder 2 to lock 1
    let res = epoch_tick(&mut deps, &env, 1);
    let msgs = bank_msgs(&res);
    assert_eq!(msgs.len(), 2);
    assert!(msgs.contains(&send(&alice, coins(51, USDC))));
    assert!(msgs.contains(&send(&bob, coins(50, USDC))));
    assert_eq!(credited(&res, USDC), Uint128::new(101));
}

#[test]
fn lock_eligibility_test() {
    let (mut deps, env) = setup_with_params(|params| params.min_lock_age = ONE_DAY_IN_SECONDS);
    let locker = get_address_as_str(&deps.api, "locker");

    // lock 1 is eligible, lock 2 is too short for the gauge, lock 3 starts unlocking
    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_lock(&mut deps, &env, "short", coins(10, STAKE), ONE_HOUR_IN_SECONDS).unwrap();
    create_lock(&mut deps, &env, "leaving", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();

    let info = get_message_info(&deps.api, "leaving", &[]);
    execute(
        deps.as_mut(),
        env.clone(),
        info,
        ExecuteMsg::BeginUnlock { lock_id: 3 },
    )
    .unwrap();

    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(asset_target(STAKE, ONE_DAY_IN_SECONDS), coins(90, USDC), 3),
    )
    .unwrap();

    // at T+12h the lock is too young, the epoch is not used up
    let res = epoch_tick(&mut deps, &plus_seconds(&env, 12 * ONE_HOUR_IN_SECONDS), 1);
    assert!(bank_msgs(&res).is_empty());
    assert_eq!(
        skip_reason(&res, 1),
        Some("no eligible recipients".to_string())
    );
    assert_eq!(gauge(&deps, 1).filled_epochs, 0);

    // at T+25h it takes the whole release
    let res = epoch_tick(&mut deps, &plus_seconds(&env, 25 * ONE_HOUR_IN_SECONDS), 2);
    assert_eq!(bank_msgs(&res), vec![send(&locker, coins(30, USDC))]);
    assert_eq!(gauge(&deps, 1).filled_epochs, 1);
}

#[test]
fn gauge_min_lock_age_test() {
    let (mut deps, env) = setup();
    let locker = get_address_as_str(&deps.api, "locker");

    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        ExecuteMsg::CreateGauge {
            is_perpetual: false,
            distribute_to: asset_target(STAKE, 0),
            coins: coins(10, USDC),
            num_epochs_paid_over: 1,
            start_time: None,
            min_lock_age: Some(ONE_DAY_IN_SECONDS),
            release_per_epoch: None,
        },
    )
    .unwrap();

    let res = epoch_tick(&mut deps, &plus_seconds(&env, ONE_HOUR_IN_SECONDS), 1);
    assert!(bank_msgs(&res).is_empty());

    let res = epoch_tick(&mut deps, &plus_seconds(&env, ONE_DAY_IN_SECONDS), 2);
    assert_eq!(bank_msgs(&res), vec![send(&locker, coins(10, USDC))]);
}

#[test]
fn upcoming_gauge_test() {
    let (mut deps, env) = setup();
    let locker = get_address_as_str(&deps.api, "locker");

    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        ExecuteMsg::CreateGauge {
            is_perpetual: false,
            distribute_to: asset_target(STAKE, 0),
            coins: coins(10, USDC),
            num_epochs_paid_over: 2,
            start_time: Some(env.block.time.plus_seconds(ONE_DAY_IN_SECONDS)),
            min_lock_age: None,
            release_per_epoch: None,
        },
    )
    .unwrap();

    let res = epoch_tick(&mut deps, &env, 1);
    assert!(bank_msgs(&res).is_empty());
    assert_eq!(skip_reason(&res, 1), Some("upcoming".to_string()));

    let res = epoch_tick(&mut deps, &plus_seconds(&env, ONE_DAY_IN_SECONDS), 2);
    assert_eq!(bank_msgs(&res), vec![send(&locker, coins(5, USDC))]);
}

#[test]
fn perpetual_gauge_test() {
    let (mut deps, env) = setup();
    let locker = get_address_as_str(&deps.api, "locker");

    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        ExecuteMsg::CreateGauge {
            is_perpetual: true,
            distribute_to: asset_target(STAKE, 0),
            coins: coins(100, USDC),
            num_epochs_paid_over: 0,
            start_time: None,
            min_lock_age: None,
            release_per_epoch: None,
        },
    )
    .unwrap();

    // the whole balance is released
    let res = epoch_tick(&mut deps, &env, 1);
    assert_eq!(bank_msgs(&res), vec![send(&locker, coins(100, USDC))]);

    // an empty perpetual gauge waits for more funds and stays alive
    let res = epoch_tick(&mut deps, &env, 2);
    assert!(bank_msgs(&res).is_empty());
    assert_eq!(skip_reason(&res, 1), Some("nothing to release".to_string()));
    assert_eq!(gauge(&deps, 1).filled_epochs, 1);

    let info = get_message_info(&deps.api, "addr0000", &[coin(2, STAKE), coin(7, USDC)]);
    execute(
        deps.as_mut(),
        env.clone(),
        info,
        ExecuteMsg::AddToGauge {
            gauge_id: 1,
            coins: coins(7, USDC),
        },
    )
    .unwrap();

    let res = epoch_tick(&mut deps, &env, 3);
    assert_eq!(bank_msgs(&res), vec![send(&locker, coins(7, USDC))]);

    let gauge = gauge(&deps, 1);
    assert_eq!(gauge.filled_epochs, 2);
    assert_eq!(gauge.distributed_coins, coins(107, USDC));
    assert_eq!(gauge.coins, coins(107, USDC));
}

#[test]
fn perpetual_gauge_with_fixed_release_test() {
    let (mut deps, env) = setup();
    let locker = get_address_as_str(&deps.api, "locker");

    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        ExecuteMsg::CreateGauge {
            is_perpetual: true,
            distribute_to: asset_target(STAKE, 0),
            coins: coins(100, USDC),
            num_epochs_paid_over: 0,
            start_time: None,
            min_lock_age: None,
            release_per_epoch: Some(coins(40, USDC)),
        },
    )
    .unwrap();

    for epoch_id in [1, 2] {
        let res = epoch_tick(&mut deps, &env, epoch_id);
        assert_eq!(bank_msgs(&res), vec![send(&locker, coins(40, USDC))]);
    }

    // 20 left, the gauge fails closed without paying anything
    let res = epoch_tick(&mut deps, &env, 3);
    assert!(bank_msgs(&res).is_empty());
    assert_eq!(skip_reason(&res, 1), Some("failed".to_string()));
    assert_eq!(attribute(&res, "failed_gauges"), Some("1"));
    let gauge = gauge(&deps, 1);
    assert_eq!(gauge.distributed_coins, coins(80, USDC));
    assert_eq!(gauge.filled_epochs, 2);
}

#[test]
fn failing_gauge_does_not_stop_the_epoch_test() {
    let (mut deps, env) = setup();
    let locker = get_address_as_str(&deps.api, "locker");

    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    for _ in 0..2 {
        create_gauge(
            &mut deps,
            &env,
            "addr0000",
            create_gauge_msg(asset_target(STAKE, 0), coins(10, USDC), 1),
        )
        .unwrap();
    }

    // gauge 1 claims to have distributed more than it was funded with
    let mut corrupted = gauge(&deps, 1);
    corrupted.distributed_coins = coins(11, USDC);
    GAUGES.save(&mut deps.storage, 1, &corrupted).unwrap();

    let res = epoch_tick(&mut deps, &env, 1);
    assert_eq!(bank_msgs(&res), vec![send(&locker, coins(10, USDC))]);
    assert_eq!(skip_reason(&res, 1), Some("failed".to_string()));
    assert_eq!(attribute(&res, "paid_gauges"), Some("1"));
    assert_eq!(attribute(&res, "retired_gauges"), Some("1"));

    // the failing gauge is left as it was
    assert_eq!(gauge(&deps, 1), corrupted);
    assert!(query_retired_gauge(deps.as_ref(), 2).is_ok());
}

#[test]
fn rollapp_gauge_test() {
    let (mut deps, env) = setup();
    let rollapp_owner = get_address_as_str(&deps.api, "rollapp_owner");

    upsert_rollapp(&mut deps, &env, "rollapp_1", "rollapp_owner", true);
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(rollapp_target("rollapp_1"), coins(20, USDC), 2),
    )
    .unwrap();

    // no votes yet
    let res = epoch_tick(&mut deps, &env, 1);
    assert!(bank_msgs(&res).is_empty());
    assert_eq!(
        skip_reason(&res, 1),
        Some("no eligible recipients".to_string())
    );

    crate::contract::sudo(
        deps.as_mut(),
        env.clone(),
        SudoMsg::UpdateSponsorshipDistribution {
            distribution: crate::state::Distribution {
                voting_power: Uint128::new(100),
                gauges: vec![crate::state::GaugePower {
                    gauge_id: 1,
                    power: Uint128::new(100),
                }],
            },
        },
    )
    .unwrap();

    let res = epoch_tick(&mut deps, &env, 2);
    assert_eq!(bank_msgs(&res), vec![send(&rollapp_owner, coins(10, USDC))]);

    let res = epoch_tick(&mut deps, &env, 3);
    assert_eq!(bank_msgs(&res), vec![send(&rollapp_owner, coins(10, USDC))]);

    // the retired gauge gives up its rollapp slot and endorsement
    assert!(ROLLAPP_GAUGES
        .may_load(&deps.storage, "rollapp_1".to_string())
        .unwrap()
        .is_none());
    assert!(ENDORSEMENTS
        .may_load(&deps.storage, "rollapp_1".to_string())
        .unwrap()
        .is_none());

    let res = create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(rollapp_target("rollapp_1"), coins(20, USDC), 2),
    );
    assert!(res.is_ok());
}

#[test]
fn rollapp_gauge_pays_owner_in_full_test() {
    let (mut deps, env) = setup();
    let owner_1 = get_address_as_str(&deps.api, "owner_1");
    let owner_2 = get_address_as_str(&deps.api, "owner_2");

    upsert_rollapp(&mut deps, &env, "rollapp_1", "owner_1", true);
    upsert_rollapp(&mut deps, &env, "rollapp_2", "owner_2", true);
    for rollapp_id in ["rollapp_1", "rollapp_2"] {
        create_gauge(
            &mut deps,
            &env,
            "addr0000",
            create_gauge_msg(rollapp_target(rollapp_id), coins(30, USDC), 3),
        )
        .unwrap();
    }

    // endorsement power only decides whether the owner is paid, not how much
    crate::contract::sudo(
        deps.as_mut(),
        env.clone(),
        SudoMsg::UpdateSponsorshipDistribution {
            distribution: crate::state::Distribution {
                voting_power: Uint128::new(100),
                gauges: vec![
                    crate::state::GaugePower {
                        gauge_id: 1,
                        power: Uint128::new(1),
                    },
                    crate::state::GaugePower {
                        gauge_id: 2,
                        power: Uint128::new(99),
                    },
                ],
            },
        },
    )
    .unwrap();

    let res = epoch_tick(&mut deps, &env, 1);
    let msgs = bank_msgs(&res);
    assert_eq!(msgs.len(), 2);
    assert!(msgs.contains(&send(&owner_1, coins(10, USDC))));
    assert!(msgs.contains(&send(&owner_2, coins(10, USDC))));
    assert_eq!(gauge(&deps, 1).distributed_coins, coins(10, USDC));
    assert_eq!(gauge(&deps, 2).distributed_coins, coins(10, USDC));
}

#[test]
fn inactive_rollapp_test() {
    let (mut deps, env) = setup_with_params(|params| {
        params.rollapp_gauges_mode = RollappGaugesMode::ActiveRollapps
    });
    let rollapp_owner = get_address_as_str(&deps.api, "rollapp_owner");

    upsert_rollapp(&mut deps, &env, "rollapp_1", "rollapp_owner", false);
    crate::contract::sudo(
        deps.as_mut(),
        env.clone(),
        SudoMsg::UpdateSponsorshipDistribution {
            distribution: crate::state::Distribution {
                voting_power: Uint128::new(100),
                gauges: vec![crate::state::GaugePower {
                    gauge_id: 1,
                    power: Uint128::new(100),
                }],
            },
        },
    )
    .unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(rollapp_target("rollapp_1"), coins(20, USDC), 1),
    )
    .unwrap();

    let res = epoch_tick(&mut deps, &env, 1);
    assert!(bank_msgs(&res).is_empty());

    upsert_rollapp(&mut deps, &env, "rollapp_1", "rollapp_owner", true);
    let res = epoch_tick(&mut deps, &env, 2);
    assert_eq!(bank_msgs(&res), vec![send(&rollapp_owner, coins(20, USDC))]);
}

#[test]
fn rewards_merged_per_recipient_test() {
    let (mut deps, env) = setup();
    let locker = get_address_as_str(&deps.api, "locker");

    create_lock(&mut deps, &env, "locker", coins(10, STAKE), ONE_WEEK_IN_SECONDS).unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(asset_target(STAKE, 0), coins(10, USDC), 1),
    )
    .unwrap();
    create_gauge(
        &mut deps,
        &env,
        "addr0000",
        create_gauge_msg(asset_target(STAKE, 0), vec![coin(5, STAKE), coin(5, USDC)], 1),
    )
    .unwrap();

    let res = epoch_tick(&mut deps, &env, 1);
    assert_eq!(
        bank_msgs(&res),
        vec![send(&locker, vec![coin(5, STAKE), coin(15, USDC)])]
    );
    assert_eq!(events(&res, "gauge_distribution").len(), 2);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn apportion_sums_to_release_proptest(
        amount in 1u128..1_000_000_000_000_000u128,
        weights in prop::collection::vec(1u128..1_000_000_000u128, 1..20),
    ) {
        let recipients = weights
            .iter()
            .enumerate()
            .map(|(i, weight)| recipient(i as u64, *weight))
            .collect::<Vec<Recipient>>();
        let total_weight: u128 = weights.iter().sum();

        let shares = apportion(&coins(amount, STAKE), &recipients).unwrap();
        prop_assert_eq!(shares.len(), recipients.len());

        let total: Uint128 = shares.iter().map(|share| amount_of(share, STAKE)).sum();
        prop_assert_eq!(total, Uint128::new(amount));

        // everybody but the first recipient gets exactly the rounded down share
        for (share, weight) in shares.iter().zip(weights.iter()).skip(1) {
            let expected = Uint128::new(amount).multiply_ratio(*weight, total_weight);
            prop_assert_eq!(amount_of(share, STAKE), expected);
        }
    }

    #[test]
    fn finite_gauge_distributes_everything_proptest(
        amount in 1u128..1_000_000u128,
        num_epochs in 1u64..12,
        locked in prop::collection::vec(1u128..1_000u128, 1..5),
    ) {
        let (mut deps, env) = setup();

        for (i, locked) in locked.iter().enumerate() {
            create_lock(&mut deps, &env, &format!("locker{i}"), coins(*locked, STAKE), ONE_DAY_IN_SECONDS).unwrap();
        }
        create_gauge(
            &mut deps,
            &env,
            "addr0000",
            create_gauge_msg(asset_target(STAKE, 0), coins(amount, USDC), num_epochs),
        )
        .unwrap();

        let mut total = Uint128::zero();
        for epoch_id in 1..=num_epochs {
            let res = epoch_tick(&mut deps, &env, epoch_id);
            let paid = credited(&res, USDC);

            // distributed never exceeds funded
            total += paid;
            prop_assert!(total <= Uint128::new(amount));
        }

        prop_assert_eq!(total, Uint128::new(amount));
        let retired = query_retired_gauge(deps.as_ref(), 1).unwrap().retired_gauge;
        prop_assert_eq!(retired.distributed_coins, coins(amount, USDC));
    }
}
