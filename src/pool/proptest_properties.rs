//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Product preservation**: `reserve1 × reserve2` never decreases
//!    across swaps in either direction.
//! 2. **Round trip**: provide then withdraw all minted shares returns no
//!    more than was deposited.
//! 3. **Share accounting**: total shares equal the sum of balances after
//!    any sequence of provides and withdrawals.
//! 4. **Expired deadline**: an expired call changes nothing.
//! 5. **Fee ceiling**: `set_fee` succeeds iff `bps ≤ 1000`.

use proptest::prelude::*;

use crate::clock::ManualClock;
use crate::config::{PoolConfig, RatioPolicy};
use crate::domain::{
    Address, Amount, CallContext, FeeTier, Shares, SwapDirection, Timestamp,
};
use crate::error::AmmError;
use crate::ledger::InMemoryTokenLedger;
use crate::pool::Amm;
use crate::traits::{LiquidityPool, SwapPool};

const OWNER: Address = Address::repeat(0x01);
const POOL: Address = Address::repeat(0xaa);
const TOKEN1: Address = Address::repeat(0x11);
const TOKEN2: Address = Address::repeat(0x22);
const PROVIDERS: [Address; 3] = [
    Address::repeat(0xa1),
    Address::repeat(0xa2),
    Address::repeat(0xa3),
];
const NOW: Timestamp = Timestamp::from_secs(1_000_000);
const FUNDING: u128 = u128::MAX >> 8;

type TestAmm = Amm<InMemoryTokenLedger, ManualClock>;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_amm(fee_bps: u32, policy: RatioPolicy) -> TestAmm {
    let mut ledger = InMemoryTokenLedger::new();
    for token in [TOKEN1, TOKEN2] {
        for who in PROVIDERS {
            let Ok(()) = ledger.mint(token, who, Amount::new(FUNDING)) else {
                panic!("mint");
            };
            ledger.approve(token, who, POOL, Amount::MAX);
        }
    }
    let Ok(fee) = FeeTier::new(fee_bps) else {
        panic!("valid fee");
    };
    let Ok(cfg) = PoolConfig::new(OWNER, POOL) else {
        panic!("valid config");
    };
    let cfg = cfg.with_fee(fee).with_ratio_policy(policy);
    let Ok(mut amm) = Amm::new(&cfg, ledger, ManualClock::at(NOW)) else {
        panic!("amm");
    };
    let Ok(_) = amm.set_pool_tokens(OWNER, TOKEN1, TOKEN2) else {
        panic!("bind");
    };
    amm
}

fn live(caller: Address) -> CallContext {
    CallContext::new(caller, NOW)
}

fn seeded(fee_bps: u32, r1: u128, r2: u128) -> TestAmm {
    let mut amm = make_amm(fee_bps, RatioPolicy::Strict);
    let Ok(_) = amm.provide(&live(PROVIDERS[0]), Amount::new(r1), Amount::new(r2)) else {
        panic!("seed deposit");
    };
    amm
}

fn share_sum(amm: &TestAmm) -> Option<Shares> {
    amm.pool()
        .providers()
        .try_fold(Shares::ZERO, |acc, (_, s)| acc.checked_add(&s))
}

// ---------------------------------------------------------------------------
// 1. Product preservation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn product_never_decreases(
        r1 in 1_000u128..1_000_000_000_000,
        r2 in 1_000u128..1_000_000_000_000,
        fee in 0u32..=1_000,
        trades in prop::collection::vec((any::<bool>(), 1u128..1_000_000_000), 1..8),
    ) {
        let mut amm = seeded(fee, r1, r2);
        let mut k = amm.pool_details().invariant();
        for (forward, amount) in trades {
            let direction = if forward {
                SwapDirection::Token1ToToken2
            } else {
                SwapDirection::Token2ToToken1
            };
            let outcome = amm.swap(&live(PROVIDERS[1]), direction, Amount::new(amount), Amount::ZERO);
            let after = amm.pool_details().invariant();
            if outcome.is_ok() {
                prop_assert!(after >= k);
            } else {
                prop_assert_eq!(after, k);
            }
            k = after;
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Round trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn provide_withdraw_never_profits(
        r1 in 1_000u128..1_000_000_000_000,
        r2 in 1_000u128..1_000_000_000_000,
        a1 in 1u128..1_000_000_000_000,
        swap_in in 0u128..1_000_000_000,
    ) {
        let mut amm = seeded(30, r1, r2);
        if swap_in > 0 {
            let _ = amm.swap_token1(&live(PROVIDERS[2]), Amount::new(swap_in), Amount::ZERO);
        }
        let Ok(a2) = amm.equivalent_token2_estimate(Amount::new(a1)) else {
            panic!("pool is seeded");
        };
        let bob = PROVIDERS[1];
        let Ok(deposit) = amm.provide(&live(bob), Amount::new(a1), a2) else {
            return Ok(());
        };
        let Ok(back) = amm.withdraw(&live(bob), deposit.minted, Amount::ZERO, Amount::ZERO) else {
            panic!("withdraw own shares");
        };
        prop_assert!(back.amount1 <= deposit.amount1);
        prop_assert!(back.amount2 <= deposit.amount2);
    }
}

// ---------------------------------------------------------------------------
// 3. Share accounting
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn total_shares_equal_sum_of_balances(
        ops in prop::collection::vec((0usize..3, any::<bool>(), 1u128..1_000_000_000), 1..16),
    ) {
        let mut amm = make_amm(30, RatioPolicy::Lenient);
        for (who, is_provide, amount) in ops {
            let caller = PROVIDERS[who];
            if is_provide {
                let _ = amm.provide(&live(caller), Amount::new(amount), Amount::new(amount / 2 + 1));
            } else {
                let held = amm.balance_of(caller);
                let burn = Shares::new(amount).min(held);
                let _ = amm.withdraw(&live(caller), burn, Amount::ZERO, Amount::ZERO);
            }
            prop_assert_eq!(share_sum(&amm), Some(amm.total_shares()));
            let details = amm.pool_details();
            let empty = details.reserve1.is_zero() && details.reserve2.is_zero();
            prop_assert_eq!(details.total_shares.is_zero(), empty);
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Expired deadline
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn expired_calls_change_nothing(
        late_by in 1u64..1_000_000,
        amount in 1u128..1_000_000,
        op in 0u8..4,
    ) {
        let mut amm = seeded(30, 1_000_000, 1_000_000);
        let before = amm.pool().clone();
        let events = amm.events().len();
        amm.clock_mut().advance(late_by);
        let ctx = live(PROVIDERS[0]);
        let result = match op {
            0 => amm.swap_token1(&ctx, Amount::new(amount), Amount::ZERO).map(|_| ()),
            1 => amm.swap_token2(&ctx, Amount::new(amount), Amount::ZERO).map(|_| ()),
            2 => amm.provide(&ctx, Amount::new(amount), Amount::new(amount)).map(|_| ()),
            _ => amm.withdraw(&ctx, Shares::new(amount), Amount::ZERO, Amount::ZERO).map(|_| ()),
        };
        prop_assert_eq!(result, Err(AmmError::DeadlineExpired));
        prop_assert_eq!(amm.pool(), &before);
        prop_assert_eq!(amm.events().len(), events);
    }
}

// ---------------------------------------------------------------------------
// 5. Fee ceiling
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn fee_accepted_iff_within_ceiling(bps in 0u32..20_000) {
        let mut amm = make_amm(30, RatioPolicy::Strict);
        let result = amm.set_fee(OWNER, bps);
        if bps <= 1_000 {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(amm.fee().basis_points().get(), bps);
        } else {
            prop_assert_eq!(result, Err(AmmError::FeeTooHigh));
            prop_assert_eq!(amm.fee(), FeeTier::DEFAULT);
        }
    }
}
