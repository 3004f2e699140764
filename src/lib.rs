#![doc(test(attr(deny(warnings))))]

//! Finance Tracker records income, named expenses, a savings goal, and a
//! budget period for a single user, derives totals from them, and appends
//! snapshots to a flat text file.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance tracker tracing initialized.");
    });
}
