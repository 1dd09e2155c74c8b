// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The contexts handed by the host to the entry point being executed.

use crate::{
    HostRef, Proxy, ScAddress, ScAgentId, ScBalances, ScColor, ScError, ScFuncCallContext,
    ScHname, ScViewCallContext,
};

/// What the host knows about one invocation of an entry point.
#[derive(Clone, Debug)]
pub struct Frame {
    /// The agent id of the contract being executed.
    pub contract_id: ScAgentId,
    /// The agent that called the entry point.
    pub caller: ScAgentId,
    /// The agent that deployed the contract.
    pub creator: ScAgentId,
    /// Tokens that came with the call. Already credited to the contract.
    pub incoming: ScBalances,
    /// The call parameters.
    pub params: Proxy,
    /// The container the entry point writes its results to.
    pub results: Proxy,
    /// The persisted state of the contract.
    pub state: Proxy,
}

/// The context of a state-mutating function call.
#[derive(Debug)]
pub struct ScFuncContext {
    host: HostRef,
    frame: Frame,
}

impl ScFuncContext {
    /// Creates the context for one function invocation.
    pub fn new(host: HostRef, frame: Frame) -> Self {
        ScFuncContext { host, frame }
    }

    /// Returns the agent that called this function.
    pub fn caller(&self) -> ScAgentId {
        self.frame.caller
    }

    /// Returns the agent that deployed this contract.
    pub fn contract_creator(&self) -> ScAgentId {
        self.frame.creator
    }

    /// Returns the agent id of this contract.
    pub fn account_id(&self) -> ScAgentId {
        self.frame.contract_id
    }

    /// Returns the hname of this contract.
    pub fn contract(&self) -> ScHname {
        self.frame.contract_id.hname
    }

    /// Returns the tokens that came with this call.
    pub fn incoming(&self) -> &ScBalances {
        &self.frame.incoming
    }

    /// Returns all tokens held by this contract, including the incoming ones.
    pub fn balances(&self) -> ScBalances {
        self.host.balances(&self.frame.contract_id)
    }

    /// Returns the amount of tokens of `color` held by this contract.
    pub fn balance(&self, color: ScColor) -> i64 {
        self.host.balance(&self.frame.contract_id, color)
    }

    /// Returns the current time in nanoseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.host.timestamp()
    }

    /// Returns the proxy to the call parameters.
    pub fn params(&self) -> Proxy {
        self.frame.params.clone()
    }

    /// Returns the proxy to the call results.
    pub fn results(&self) -> Proxy {
        self.frame.results.clone()
    }

    /// Returns the proxy to the contract state.
    pub fn state(&self) -> Proxy {
        self.frame.state.clone()
    }

    /// Sends tokens held by this contract to a plain account.
    pub fn transfer_to_address(
        &self,
        address: &ScAddress,
        transfer: &ScBalances,
    ) -> Result<(), ScError> {
        self.host.transfer(
            &self.frame.contract_id,
            &address.as_agent_id(),
            transfer,
        )
    }

    /// Logs an informational message on behalf of the contract.
    pub fn log(&self, message: &str) {
        log::info!("{}: {message}", self.frame.contract_id.hname);
    }

    /// Logs a debugging message on behalf of the contract.
    pub fn trace(&self, message: &str) {
        log::debug!("{}: {message}", self.frame.contract_id.hname);
    }

    /// Fails with `message` unless `condition` holds.
    pub fn require(&self, condition: bool, message: &str) -> Result<(), ScError> {
        if condition {
            Ok(())
        } else {
            Err(ScError::Panic(message.to_owned()))
        }
    }
}

impl ScViewCallContext for ScFuncContext {
    fn host(&self) -> HostRef {
        self.host.clone()
    }

    fn caller_id(&self) -> ScAgentId {
        self.frame.contract_id
    }
}

impl ScFuncCallContext for ScFuncContext {}

/// The context of a read-only view call.
#[derive(Debug)]
pub struct ScViewContext {
    host: HostRef,
    frame: Frame,
}

impl ScViewContext {
    /// Creates the context for one view invocation.
    pub fn new(host: HostRef, frame: Frame) -> Self {
        ScViewContext { host, frame }
    }

    /// Returns the agent that called this view.
    pub fn caller(&self) -> ScAgentId {
        self.frame.caller
    }

    /// Returns the agent that deployed this contract.
    pub fn contract_creator(&self) -> ScAgentId {
        self.frame.creator
    }

    /// Returns the agent id of this contract.
    pub fn account_id(&self) -> ScAgentId {
        self.frame.contract_id
    }

    /// Returns the hname of this contract.
    pub fn contract(&self) -> ScHname {
        self.frame.contract_id.hname
    }

    /// Returns all tokens held by this contract.
    pub fn balances(&self) -> ScBalances {
        self.host.balances(&self.frame.contract_id)
    }

    /// Returns the amount of tokens of `color` held by this contract.
    pub fn balance(&self, color: ScColor) -> i64 {
        self.host.balance(&self.frame.contract_id, color)
    }

    /// Returns the current time in nanoseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.host.timestamp()
    }

    /// Returns the proxy to the call parameters.
    pub fn params(&self) -> Proxy {
        self.frame.params.clone()
    }

    /// Returns the proxy to the call results.
    pub fn results(&self) -> Proxy {
        self.frame.results.clone()
    }

    /// Returns the proxy to the contract state. Views only get read-only wrappers around it.
    pub fn state(&self) -> Proxy {
        self.frame.state.clone()
    }

    /// Logs an informational message on behalf of the contract.
    pub fn log(&self, message: &str) {
        log::info!("{}: {message}", self.frame.contract_id.hname);
    }

    /// Logs a debugging message on behalf of the contract.
    pub fn trace(&self, message: &str) {
        log::debug!("{}: {message}", self.frame.contract_id.hname);
    }

    /// Fails with `message` unless `condition` holds.
    pub fn require(&self, condition: bool, message: &str) -> Result<(), ScError> {
        if condition {
            Ok(())
        } else {
            Err(ScError::Panic(message.to_owned()))
        }
    }
}

impl ScViewCallContext for ScViewContext {
    fn host(&self) -> HostRef {
        self.host.clone()
    }

    fn caller_id(&self) -> ScAgentId {
        self.frame.contract_id
    }
}
