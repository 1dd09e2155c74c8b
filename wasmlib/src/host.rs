// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The interface to the host executing contracts.

use std::{fmt, rc::Rc};

use crate::{ScAgentId, ScBalances, ScColor, ScDict, ScError, ScHname};

/// A shared handle to the host.
pub type HostRef = Rc<dyn ScHost>;

/// Whether an entry point is invoked as a state-mutating function or as a read-only view.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CallKind {
    /// A function, which may mutate state and receive tokens.
    Func,
    /// A view, which sees the state read-only.
    View,
}

/// A request to execute an entry point of a contract.
#[derive(Clone, Debug)]
pub struct CallRequest {
    /// The agent issuing the call.
    pub caller: ScAgentId,
    /// The hname of the contract to call.
    pub contract: ScHname,
    /// The hname of the entry point to call.
    pub function: ScHname,
    /// Whether the entry point is called as a function or a view.
    pub kind: CallKind,
    /// The encoded parameters.
    pub params: ScDict,
    /// Tokens moved from the caller to the contract before executing a function.
    /// Always empty for views.
    pub transfer: ScBalances,
}

/// The services the host provides to callers and to executing contracts.
pub trait ScHost {
    /// Executes an entry point and returns its encoded results.
    fn call(&self, request: CallRequest) -> Result<ScDict, ScError>;

    /// Returns the amount of tokens of `color` held by `agent`.
    fn balance(&self, agent: &ScAgentId, color: ScColor) -> i64;

    /// Returns all tokens held by `agent`.
    fn balances(&self, agent: &ScAgentId) -> ScBalances;

    /// Moves tokens between two agents.
    fn transfer(
        &self,
        from: &ScAgentId,
        to: &ScAgentId,
        balances: &ScBalances,
    ) -> Result<(), ScError>;

    /// Returns the current time in nanoseconds since the Unix epoch.
    fn timestamp(&self) -> i64;
}

impl fmt::Debug for dyn ScHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScHost")
    }
}
