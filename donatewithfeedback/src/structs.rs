// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use wasmlib::ScAgentId;

/// One entry of the donation log.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct DonationInfo {
    /// Base tokens kept by the contract. Zero for refunded donations.
    pub amount: i64,
    /// Who sent the donation.
    pub donator: ScAgentId,
    /// Why the donation was rejected, or empty.
    pub error: String,
    /// The message left for the recipient.
    pub feedback: String,
    /// When the donation was received, in nanoseconds since the Unix epoch.
    pub timestamp: i64,
}

wasmlib::bcs_value!(DonationInfo);
