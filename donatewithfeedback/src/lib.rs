// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! The DonateWithFeedback contract.

Anyone can donate base tokens together with a message for the recipient. Every donation
is logged; the contract creator can withdraw the collected tokens. */

/// Implements [`wasmlib::ScProxy`] for containers wrapping a `proxy` field.
macro_rules! impl_proxy {
    ($($container:ty),* $(,)?) => {
        $(
            impl wasmlib::ScProxy for $container {
                fn proxy(&self) -> &wasmlib::Proxy {
                    &self.proxy
                }
            }
        )*
    };
}

pub mod consts;
pub mod contract;
pub mod donatewithfeedback;
pub mod params;
pub mod results;
pub mod state;
pub mod structs;

use wasmlib::{ensure, ScError, ScExports, ScFuncContext, ScViewContext};

pub use self::{contract::*, structs::DonationInfo};
use self::{consts::*, donatewithfeedback::*, params::*, results::*, state::*};

/// Returns the table of entry points the host dispatches calls through.
pub fn on_load() -> ScExports {
    ScExports::new(SC_NAME)
        .add_func(FUNC_DONATE, func_donate_thunk)
        .add_func(FUNC_WITHDRAW, func_withdraw_thunk)
        .add_view(VIEW_DONATION, view_donation_thunk)
        .add_view(VIEW_DONATION_INFO, view_donation_info_thunk)
}

fn func_donate_thunk(ctx: &ScFuncContext) -> Result<(), ScError> {
    ctx.log("donatewithfeedback.funcDonate");
    let f = DonateContext {
        params: ImmutableDonateParams {
            proxy: ctx.params(),
        },
        state: MutableDonateWithFeedbackState { proxy: ctx.state() },
    };
    func_donate(ctx, &f)?;
    ctx.log("donatewithfeedback.funcDonate ok");
    Ok(())
}

fn func_withdraw_thunk(ctx: &ScFuncContext) -> Result<(), ScError> {
    ctx.log("donatewithfeedback.funcWithdraw");
    ensure!(
        ctx.caller() == ctx.contract_creator(),
        ScError::AccessDenied(format!("{FUNC_WITHDRAW} is reserved to the contract creator"))
    );

    let f = WithdrawContext {
        params: ImmutableWithdrawParams {
            proxy: ctx.params(),
        },
        state: MutableDonateWithFeedbackState { proxy: ctx.state() },
    };
    func_withdraw(ctx, &f)?;
    ctx.log("donatewithfeedback.funcWithdraw ok");
    Ok(())
}

fn view_donation_thunk(ctx: &ScViewContext) -> Result<(), ScError> {
    ctx.log("donatewithfeedback.viewDonation");
    let f = DonationContext {
        params: ImmutableDonationParams {
            proxy: ctx.params(),
        },
        results: MutableDonationResults {
            proxy: ctx.results(),
        },
        state: ImmutableDonateWithFeedbackState { proxy: ctx.state() },
    };
    ensure!(f.params.nr().exists(), ScError::MissingParameter(PARAM_NR));
    view_donation(ctx, &f)?;
    ctx.log("donatewithfeedback.viewDonation ok");
    Ok(())
}

fn view_donation_info_thunk(ctx: &ScViewContext) -> Result<(), ScError> {
    ctx.log("donatewithfeedback.viewDonationInfo");
    let f = DonationInfoContext {
        results: MutableDonationInfoResults {
            proxy: ctx.results(),
        },
        state: ImmutableDonateWithFeedbackState { proxy: ctx.state() },
    };
    view_donation_info(ctx, &f)?;
    ctx.log("donatewithfeedback.viewDonationInfo ok");
    Ok(())
}
