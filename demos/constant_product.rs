//! End-to-end walk through a constant-product pool.
//!
//! Deploys a USDC/WETH pool on an in-memory ledger, seeds it, trades in
//! both directions, and withdraws, logging every committed event.
//!
//! ```text
//! cargo run --example constant_product
//! RUST_LOG=debug cargo run --example constant_product
//! ```

use cp_amm::prelude::*;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let owner = Address::repeat(0x01);
    let pool_addr = Address::repeat(0xaa);
    let lp = Address::repeat(0x0a);
    let trader = Address::repeat(0x0b);
    let usdc: Address = "0x8B0180f2101c8260d49339abfEe87927412494B4".parse()?;
    let weth: Address = "0x52eF3d68BaB452a294342DC3e5f464d7f610f72E".parse()?;

    let unit = |whole: u128| Amount::from_units(whole, 18).ok_or(AmmError::Overflow("demo amount"));

    let mut ledger = InMemoryTokenLedger::new();
    for token in [usdc, weth] {
        for who in [lp, trader] {
            ledger.mint(token, who, unit(100_000)?)?;
            ledger.approve(token, who, pool_addr, Amount::MAX);
        }
    }

    let config = PoolConfig::new(owner, pool_addr)?;
    let mut amm = Amm::new(&config, ledger, SystemClock)?;
    amm.set_pool_tokens(owner, usdc, weth)?;

    let deadline = SystemClock.now().plus_secs(300);
    let lp_ctx = CallContext::new(lp, deadline);
    let trader_ctx = CallContext::new(trader, deadline);

    amm.provide(&lp_ctx, unit(10_000)?, unit(5)?)?;
    info!(details = %amm.pool_details(), "seeded");

    let quote = amm.quote(SwapDirection::Token1ToToken2, unit(1_000)?)?;
    let bought = amm.swap_token1(&trader_ctx, unit(1_000)?, quote.amount_out())?;
    info!(result = %bought, "bought WETH");

    let sold = amm.swap_token2(&trader_ctx, bought.amount_out(), Amount::ZERO)?;
    info!(result = %sold, "sold WETH back");

    match amm.swap_token1(&trader_ctx, unit(1)?, unit(1)?) {
        Err(e) => info!(error = %e, "tight bound rejected as expected"),
        Ok(r) => info!(result = %r, "unexpected fill"),
    }

    let shares = amm.balance_of(lp);
    let estimate = amm.withdraw_estimate(shares)?;
    let withdrawal = amm.withdraw(&lp_ctx, shares, estimate.amount1, estimate.amount2)?;
    info!(
        amount1 = %withdrawal.amount1,
        amount2 = %withdrawal.amount2,
        "liquidity withdrawn with accrued fees"
    );

    for event in amm.drain_events() {
        info!(%event, "event");
    }
    Ok(())
}
