// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Typed call descriptors for the contract's entry points.
//!
//! The `*Call` types are built by callers and carry mutable parameters and immutable
//! results. The `*Context` types are built by the export thunks for the entry point
//! being executed and carry the opposite: immutable parameters and mutable results.

use wasmlib::{ScFunc, ScFuncCallContext, ScView, ScViewCallContext};

use crate::{consts::*, params::*, results::*, state::*};

pub struct DonateCall {
    pub func: ScFunc,
    pub params: MutableDonateParams,
}

pub struct DonateContext {
    pub params: ImmutableDonateParams,
    pub state: MutableDonateWithFeedbackState,
}

pub struct WithdrawCall {
    pub func: ScFunc,
    pub params: MutableWithdrawParams,
}

pub struct WithdrawContext {
    pub params: ImmutableWithdrawParams,
    pub state: MutableDonateWithFeedbackState,
}

pub struct DonationCall {
    pub func: ScView,
    pub params: MutableDonationParams,
    pub results: ImmutableDonationResults,
}

pub struct DonationContext {
    pub params: ImmutableDonationParams,
    pub results: MutableDonationResults,
    pub state: ImmutableDonateWithFeedbackState,
}

pub struct DonationInfoCall {
    pub func: ScView,
    pub results: ImmutableDonationInfoResults,
}

pub struct DonationInfoContext {
    pub results: MutableDonationInfoResults,
    pub state: ImmutableDonateWithFeedbackState,
}

/// Builders for calls to the contract, one per entry point.
pub struct ScFuncs;

impl ScFuncs {
    pub fn donate(ctx: &impl ScFuncCallContext) -> DonateCall {
        let mut f = DonateCall {
            func: ScFunc::new(ctx, hsc_name(), hfunc_donate()),
            params: MutableDonateParams::default(),
        };
        f.func.set_ptrs(Some(&f.params), None);
        f
    }

    pub fn withdraw(ctx: &impl ScFuncCallContext) -> WithdrawCall {
        let mut f = WithdrawCall {
            func: ScFunc::new(ctx, hsc_name(), hfunc_withdraw()),
            params: MutableWithdrawParams::default(),
        };
        f.func.set_ptrs(Some(&f.params), None);
        f
    }

    pub fn donation(ctx: &impl ScViewCallContext) -> DonationCall {
        let mut f = DonationCall {
            func: ScView::new(ctx, hsc_name(), hview_donation()),
            params: MutableDonationParams::default(),
            results: ImmutableDonationResults::default(),
        };
        f.func.set_ptrs(Some(&f.params), Some(&f.results));
        f
    }

    pub fn donation_info(ctx: &impl ScViewCallContext) -> DonationInfoCall {
        let mut f = DonationInfoCall {
            func: ScView::new(ctx, hsc_name(), hview_donation_info()),
            results: ImmutableDonationInfoResults::default(),
        };
        f.func.set_ptrs(None, Some(&f.results));
        f
    }
}
