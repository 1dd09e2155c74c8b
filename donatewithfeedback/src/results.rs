// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use wasmlib::{
    Proxy, ScImmutableAgentId, ScImmutableInt32, ScImmutableInt64, ScImmutableString,
    ScMutableAgentId, ScMutableInt32, ScMutableInt64, ScMutableString,
};

use crate::consts::*;

#[derive(Clone, Debug, Default)]
pub struct ImmutableDonationResults {
    pub(crate) proxy: Proxy,
}

impl ImmutableDonationResults {
    pub fn amount(&self) -> ScImmutableInt64 {
        ScImmutableInt64::new(self.proxy.root(RESULT_AMOUNT))
    }

    pub fn donator(&self) -> ScImmutableAgentId {
        ScImmutableAgentId::new(self.proxy.root(RESULT_DONATOR))
    }

    pub fn error(&self) -> ScImmutableString {
        ScImmutableString::new(self.proxy.root(RESULT_ERROR))
    }

    pub fn feedback(&self) -> ScImmutableString {
        ScImmutableString::new(self.proxy.root(RESULT_FEEDBACK))
    }

    pub fn timestamp(&self) -> ScImmutableInt64 {
        ScImmutableInt64::new(self.proxy.root(RESULT_TIMESTAMP))
    }
}

#[derive(Clone, Debug)]
pub struct MutableDonationResults {
    pub(crate) proxy: Proxy,
}

impl MutableDonationResults {
    pub fn amount(&self) -> ScMutableInt64 {
        ScMutableInt64::new(self.proxy.root(RESULT_AMOUNT))
    }

    pub fn donator(&self) -> ScMutableAgentId {
        ScMutableAgentId::new(self.proxy.root(RESULT_DONATOR))
    }

    pub fn error(&self) -> ScMutableString {
        ScMutableString::new(self.proxy.root(RESULT_ERROR))
    }

    pub fn feedback(&self) -> ScMutableString {
        ScMutableString::new(self.proxy.root(RESULT_FEEDBACK))
    }

    pub fn timestamp(&self) -> ScMutableInt64 {
        ScMutableInt64::new(self.proxy.root(RESULT_TIMESTAMP))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ImmutableDonationInfoResults {
    pub(crate) proxy: Proxy,
}

impl ImmutableDonationInfoResults {
    /// Number of donations in the log, including rejected ones.
    pub fn count(&self) -> ScImmutableInt32 {
        ScImmutableInt32::new(self.proxy.root(RESULT_COUNT))
    }

    pub fn max_donation(&self) -> ScImmutableInt64 {
        ScImmutableInt64::new(self.proxy.root(RESULT_MAX_DONATION))
    }

    pub fn total_donation(&self) -> ScImmutableInt64 {
        ScImmutableInt64::new(self.proxy.root(RESULT_TOTAL_DONATION))
    }
}

#[derive(Clone, Debug)]
pub struct MutableDonationInfoResults {
    pub(crate) proxy: Proxy,
}

impl MutableDonationInfoResults {
    pub fn count(&self) -> ScMutableInt32 {
        ScMutableInt32::new(self.proxy.root(RESULT_COUNT))
    }

    pub fn max_donation(&self) -> ScMutableInt64 {
        ScMutableInt64::new(self.proxy.root(RESULT_MAX_DONATION))
    }

    pub fn total_donation(&self) -> ScMutableInt64 {
        ScMutableInt64::new(self.proxy.root(RESULT_TOTAL_DONATION))
    }
}

impl_proxy!(
    ImmutableDonationResults,
    MutableDonationResults,
    ImmutableDonationInfoResults,
    MutableDonationInfoResults,
);
