// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use wasmlib::{Proxy, ScImmutableArray, ScImmutableInt64, ScMutableArray, ScMutableInt64};

use crate::{consts::*, structs::DonationInfo};

/// Read-only access to the persisted contract state, as seen by views.
#[derive(Clone, Debug)]
pub struct ImmutableDonateWithFeedbackState {
    pub(crate) proxy: Proxy,
}

impl ImmutableDonateWithFeedbackState {
    /// Every donation received, in arrival order.
    pub fn log(&self) -> ScImmutableArray<DonationInfo> {
        ScImmutableArray::new(self.proxy.root(STATE_LOG))
    }

    /// The largest accepted donation so far.
    pub fn max_donation(&self) -> ScImmutableInt64 {
        ScImmutableInt64::new(self.proxy.root(STATE_MAX_DONATION))
    }

    /// The sum of all accepted donations.
    pub fn total_donation(&self) -> ScImmutableInt64 {
        ScImmutableInt64::new(self.proxy.root(STATE_TOTAL_DONATION))
    }
}

/// Read-write access to the persisted contract state, as seen by functions.
#[derive(Clone, Debug)]
pub struct MutableDonateWithFeedbackState {
    pub(crate) proxy: Proxy,
}

impl MutableDonateWithFeedbackState {
    pub fn log(&self) -> ScMutableArray<DonationInfo> {
        ScMutableArray::new(self.proxy.root(STATE_LOG))
    }

    pub fn max_donation(&self) -> ScMutableInt64 {
        ScMutableInt64::new(self.proxy.root(STATE_MAX_DONATION))
    }

    pub fn total_donation(&self) -> ScMutableInt64 {
        ScMutableInt64::new(self.proxy.root(STATE_TOTAL_DONATION))
    }
}
