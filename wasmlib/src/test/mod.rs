// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! An in-memory host for testing contracts without a ledger.
//!
//! A [`TestChain`] deploys contracts from their [`ScExports`](crate::ScExports), keeps
//! their state and the token balances of every agent, and executes calls submitted
//! through [`TestClient`]s.

mod chain;

pub use self::{
    chain::{TestChain, TestClient},
    config::ChainConfig,
};
