// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use wasmlib::{
    Proxy, ScImmutableInt32, ScImmutableInt64, ScImmutableString, ScMutableInt32,
    ScMutableInt64, ScMutableString,
};

use crate::consts::*;

#[derive(Clone, Debug)]
pub struct ImmutableDonateParams {
    pub(crate) proxy: Proxy,
}

impl ImmutableDonateParams {
    /// Feedback for the person you donate to.
    pub fn feedback(&self) -> ScImmutableString {
        ScImmutableString::new(self.proxy.root(PARAM_FEEDBACK))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MutableDonateParams {
    pub(crate) proxy: Proxy,
}

impl MutableDonateParams {
    /// Feedback for the person you donate to.
    pub fn feedback(&self) -> ScMutableString {
        ScMutableString::new(self.proxy.root(PARAM_FEEDBACK))
    }
}

#[derive(Clone, Debug)]
pub struct ImmutableWithdrawParams {
    pub(crate) proxy: Proxy,
}

impl ImmutableWithdrawParams {
    /// Amount to withdraw. Missing, zero or too large means everything.
    pub fn amount(&self) -> ScImmutableInt64 {
        ScImmutableInt64::new(self.proxy.root(PARAM_AMOUNT))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MutableWithdrawParams {
    pub(crate) proxy: Proxy,
}

impl MutableWithdrawParams {
    /// Amount to withdraw. Missing, zero or too large means everything.
    pub fn amount(&self) -> ScMutableInt64 {
        ScMutableInt64::new(self.proxy.root(PARAM_AMOUNT))
    }
}

#[derive(Clone, Debug)]
pub struct ImmutableDonationParams {
    pub(crate) proxy: Proxy,
}

impl ImmutableDonationParams {
    /// Index of the donation in the log.
    pub fn nr(&self) -> ScImmutableInt32 {
        ScImmutableInt32::new(self.proxy.root(PARAM_NR))
    }
}

#[derive(Clone, Debug, Default)]
pub struct MutableDonationParams {
    pub(crate) proxy: Proxy,
}

impl MutableDonationParams {
    /// Index of the donation in the log.
    pub fn nr(&self) -> ScMutableInt32 {
        ScMutableInt32::new(self.proxy.root(PARAM_NR))
    }
}

impl_proxy!(
    ImmutableDonateParams,
    MutableDonateParams,
    ImmutableWithdrawParams,
    MutableWithdrawParams,
    ImmutableDonationParams,
    MutableDonationParams,
);
