// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use wasmlib::{ScBalances, ScColor, ScError, ScFuncContext, ScViewContext};

use crate::{contract::*, structs::DonationInfo};

/// Recorded in the log for donations that are refunded.
pub const DONATION_ERROR: &str = "error: empty feedback or donated amount = 0";

/// Records the incoming base tokens as a donation, together with the donator's feedback.
///
/// A donation without tokens or without feedback is still logged, with an error message,
/// and whatever tokens came with it are sent back.
pub fn func_donate(ctx: &ScFuncContext, f: &DonateContext) -> Result<(), ScError> {
    let mut donation = DonationInfo {
        amount: ctx.incoming().balance(ScColor::IOTA),
        donator: ctx.caller(),
        error: String::new(),
        feedback: f.params.feedback().value()?,
        timestamp: ctx.timestamp(),
    };
    if donation.amount == 0 || donation.feedback.is_empty() {
        donation.error = DONATION_ERROR.to_owned();
        if donation.amount > 0 {
            ctx.transfer_to_address(
                &donation.donator.address(),
                &ScBalances::iotas(donation.amount),
            )?;
            donation.amount = 0;
        }
    }

    let amount = donation.amount;
    f.state.log().append(donation)?;

    let largest_donation = f.state.max_donation();
    if amount > largest_donation.value()? {
        largest_donation.set_value(amount);
    }
    let total_donated = f.state.total_donation();
    let total = total_donated
        .value()?
        .checked_add(amount)
        .ok_or(ScError::Overflow)?;
    total_donated.set_value(total);
    Ok(())
}

/// Sends donated base tokens to the caller.
pub fn func_withdraw(ctx: &ScFuncContext, f: &WithdrawContext) -> Result<(), ScError> {
    let balance = ctx.balance(ScColor::IOTA);
    let mut amount = f.params.amount().value()?;
    if amount <= 0 || amount > balance {
        amount = balance;
    }
    if amount == 0 {
        ctx.log("dwf.withdraw: nothing to withdraw");
        return Ok(());
    }

    ctx.trace(&format!("dwf.withdraw: sending {amount} of {balance}"));
    ctx.transfer_to_address(&ctx.caller().address(), &ScBalances::iotas(amount))
}

pub fn view_donation(_ctx: &ScViewContext, f: &DonationContext) -> Result<(), ScError> {
    let nr = f.params.nr().value()?;
    let donation = f.state.log().get(nr)?.value()?;
    f.results.amount().set_value(donation.amount);
    f.results.donator().set_value(donation.donator);
    f.results.error().set_value(donation.error);
    f.results.feedback().set_value(donation.feedback);
    f.results.timestamp().set_value(donation.timestamp);
    Ok(())
}

pub fn view_donation_info(_ctx: &ScViewContext, f: &DonationInfoContext) -> Result<(), ScError> {
    f.results.max_donation().set_value(f.state.max_donation().value()?);
    f.results.total_donation().set_value(f.state.total_donation().value()?);
    f.results.count().set_value(f.state.log().length()?);
    Ok(())
}
