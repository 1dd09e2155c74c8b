// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Names and keys of the DonateWithFeedback contract.

use wasmlib::ScHname;

pub const SC_NAME: &str = "donatewithfeedback";

pub const PARAM_AMOUNT: &str = "amount";
pub const PARAM_FEEDBACK: &str = "feedback";
pub const PARAM_NR: &str = "nr";

pub const RESULT_AMOUNT: &str = "amount";
pub const RESULT_COUNT: &str = "count";
pub const RESULT_DONATOR: &str = "donator";
pub const RESULT_ERROR: &str = "error";
pub const RESULT_FEEDBACK: &str = "feedback";
pub const RESULT_MAX_DONATION: &str = "maxDonation";
pub const RESULT_TIMESTAMP: &str = "timestamp";
pub const RESULT_TOTAL_DONATION: &str = "totalDonation";

pub const STATE_LOG: &str = "log";
pub const STATE_MAX_DONATION: &str = "maxDonation";
pub const STATE_TOTAL_DONATION: &str = "totalDonation";

pub const FUNC_DONATE: &str = "donate";
pub const FUNC_WITHDRAW: &str = "withdraw";
pub const VIEW_DONATION: &str = "donation";
pub const VIEW_DONATION_INFO: &str = "donationInfo";

/// The hname the contract is deployed under.
pub fn hsc_name() -> ScHname {
    ScHname::new(SC_NAME)
}

pub fn hfunc_donate() -> ScHname {
    ScHname::new(FUNC_DONATE)
}

pub fn hfunc_withdraw() -> ScHname {
    ScHname::new(FUNC_WITHDRAW)
}

pub fn hview_donation() -> ScHname {
    ScHname::new(VIEW_DONATION)
}

pub fn hview_donation_info() -> ScHname {
    ScHname::new(VIEW_DONATION_INFO)
}
