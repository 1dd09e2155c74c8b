// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Call descriptors and the capability tokens needed to build them.

use crate::{
    CallKind, CallRequest, HostRef, Proxy, ScAgentId, ScBalances, ScError, ScHname,
    ScProxy,
};

/// Proof that views may be called in the current execution phase.
pub trait ScViewCallContext {
    /// Returns the host the calls are submitted to.
    fn host(&self) -> HostRef;

    /// Returns the agent on whose behalf calls are made.
    fn caller_id(&self) -> ScAgentId;
}

/// Proof that functions may be called in the current execution phase.
///
/// View contexts do not implement this trait, so a view cannot build a function call.
pub trait ScFuncCallContext: ScViewCallContext {}

/// A descriptor for one call to a view.
#[derive(Debug)]
pub struct ScView {
    host: HostRef,
    caller: ScAgentId,
    contract: ScHname,
    function: ScHname,
    params: Proxy,
    results: Proxy,
}

impl ScView {
    /// Creates a descriptor for calling `function` on `contract`.
    pub fn new(ctx: &impl ScViewCallContext, contract: ScHname, function: ScHname) -> Self {
        ScView {
            host: ctx.host(),
            caller: ctx.caller_id(),
            contract,
            function,
            params: Proxy::nil(),
            results: Proxy::nil(),
        }
    }

    /// Wires the descriptor to the caller's parameter and result containers.
    ///
    /// A missing side keeps a private, empty container.
    pub fn set_ptrs(&mut self, params: Option<&dyn ScProxy>, results: Option<&dyn ScProxy>) {
        if let Some(params) = params {
            self.params = params.proxy().clone();
        }
        if let Some(results) = results {
            self.results = results.proxy().clone();
        }
    }

    /// Returns the hname of the contract being called.
    pub fn contract(&self) -> ScHname {
        self.contract
    }

    /// Returns the hname of the entry point being called.
    pub fn function(&self) -> ScHname {
        self.function
    }

    /// Returns the proxy to the parameters that will be sent.
    pub fn params(&self) -> &Proxy {
        &self.params
    }

    /// Returns the proxy the results are written to.
    pub fn results(&self) -> &Proxy {
        &self.results
    }

    /// Submits the call. On success the results container holds the view's results.
    pub fn call(&self) -> Result<(), ScError> {
        self.submit(CallKind::View, ScBalances::new())
    }

    fn submit(&self, kind: CallKind, transfer: ScBalances) -> Result<(), ScError> {
        log::debug!(
            "calling {}.{} ({kind:?}) as {}",
            self.contract,
            self.function,
            self.caller
        );
        let request = CallRequest {
            caller: self.caller,
            contract: self.contract,
            function: self.function,
            kind,
            params: self.params.snapshot(),
            transfer,
        };
        let results = self.host.call(request)?;
        self.results.replace(results);
        Ok(())
    }
}

/// A descriptor for one call to a state-mutating function.
#[derive(Debug)]
pub struct ScFunc {
    view: ScView,
    transfer: ScBalances,
}

impl ScFunc {
    /// Creates a descriptor for calling `function` on `contract`.
    pub fn new(ctx: &impl ScFuncCallContext, contract: ScHname, function: ScHname) -> Self {
        ScFunc {
            view: ScView::new(ctx, contract, function),
            transfer: ScBalances::new(),
        }
    }

    /// Wires the descriptor to the caller's parameter and result containers.
    pub fn set_ptrs(&mut self, params: Option<&dyn ScProxy>, results: Option<&dyn ScProxy>) {
        self.view.set_ptrs(params, results);
    }

    /// Attaches tokens to be moved from the caller to the contract with the call.
    pub fn transfer(&mut self, transfer: ScBalances) -> &mut Self {
        self.transfer = transfer;
        self
    }

    /// Attaches `amount` base tokens to the call.
    pub fn transfer_iotas(&mut self, amount: i64) -> &mut Self {
        self.transfer(ScBalances::iotas(amount))
    }

    /// Returns the underlying view descriptor, which shares this call's containers.
    pub fn descriptor(&self) -> &ScView {
        &self.view
    }

    /// Submits the call with the attached tokens.
    pub fn call(&self) -> Result<(), ScError> {
        self.view.submit(CallKind::Func, self.transfer.clone())
    }
}
