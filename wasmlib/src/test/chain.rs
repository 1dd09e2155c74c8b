// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use tracing::{debug, info, warn};

use super::ChainConfig;
use crate::{
    CallKind, CallRequest, EntryPoint, Frame, HostRef, Proxy, ScAddress, ScAgentId, ScBalances,
    ScColor, ScDict, ScError, ScExports, ScFuncCallContext, ScFuncContext, ScHname, ScHost,
    ScViewCallContext, ScViewContext,
};

/// The name of the optional entry point run when a contract is deployed.
const INIT: &str = "init";

struct DeployedContract {
    exports: ScExports,
    creator: ScAgentId,
    state: Rc<RefCell<ScDict>>,
}

struct ChainState {
    config: ChainConfig,
    address: ScAddress,
    contracts: RefCell<BTreeMap<ScHname, DeployedContract>>,
    accounts: RefCell<BTreeMap<ScAgentId, ScBalances>>,
    clock: Cell<i64>,
    depth: Cell<usize>,
}

/// Everything a failed function call may have changed.
struct Checkpoint {
    accounts: BTreeMap<ScAgentId, ScBalances>,
    states: Vec<(Rc<RefCell<ScDict>>, ScDict)>,
}

/// A single in-memory chain hosting contracts.
///
/// Cloning a [`TestChain`] returns another handle to the same chain.
#[derive(Clone)]
pub struct TestChain {
    state: Rc<ChainState>,
}

impl Default for TestChain {
    fn default() -> Self {
        TestChain::new()
    }
}

impl TestChain {
    /// Creates a chain with the default [`ChainConfig`].
    pub fn new() -> Self {
        TestChain::with_config(ChainConfig::default())
    }

    /// Creates a chain with the given settings.
    pub fn with_config(config: ChainConfig) -> Self {
        let address = ScAddress::from_seed(&config.chain_name);
        info!(chain = %address, "starting test chain");
        TestChain {
            state: Rc::new(ChainState {
                address,
                clock: Cell::new(config.initial_timestamp),
                config,
                contracts: RefCell::new(BTreeMap::new()),
                accounts: RefCell::new(BTreeMap::new()),
                depth: Cell::new(0),
            }),
        }
    }

    /// Returns the chain settings.
    pub fn config(&self) -> &ChainConfig {
        &self.state.config
    }

    /// Returns the address shared by all contracts on this chain.
    pub fn address(&self) -> ScAddress {
        self.state.address
    }

    /// Returns the agent id of the contract with the given hname on this chain.
    pub fn contract_id(&self, contract: ScHname) -> ScAgentId {
        ScAgentId::new(self.state.address, contract)
    }

    /// Creates a plain account funded with the configured initial balance.
    pub fn new_agent(&self, name: &str) -> ScAgentId {
        let agent = ScAgentId::from_address(ScAddress::from_seed(name));
        let mut accounts = self.state.accounts.borrow_mut();
        let funded = accounts
            .entry(agent)
            .or_default()
            .add(ScColor::IOTA, self.state.config.initial_agent_balance);
        match funded {
            Ok(()) => debug!(%agent, name, "created agent"),
            Err(error) => warn!(%agent, name, %error, "agent balance left as is"),
        }
        agent
    }

    /// Returns a client submitting calls on behalf of `agent`.
    pub fn client(&self, agent: ScAgentId) -> TestClient {
        TestClient {
            chain: self.clone(),
            agent,
        }
    }

    /// Deploys a contract and runs its `init` function, if it exports one.
    pub fn deploy(&self, exports: ScExports, creator: ScAgentId) -> Result<ScAgentId, ScError> {
        self.deploy_with_params(exports, creator, ScDict::new())
    }

    /// Deploys a contract, passing `params` to its `init` function.
    pub fn deploy_with_params(
        &self,
        exports: ScExports,
        creator: ScAgentId,
        params: ScDict,
    ) -> Result<ScAgentId, ScError> {
        let hname = exports.hname();
        let has_init = exports.entry_point(ScHname::new(INIT)).is_ok();
        {
            let mut contracts = self.state.contracts.borrow_mut();
            if contracts.contains_key(&hname) {
                return Err(ScError::AlreadyDeployed(hname));
            }
            info!(contract = %hname, name = exports.name(), %creator, "deploying contract");
            contracts.insert(
                hname,
                DeployedContract {
                    exports,
                    creator,
                    state: Rc::default(),
                },
            );
        }
        if has_init {
            let request = CallRequest {
                caller: creator,
                contract: hname,
                function: ScHname::new(INIT),
                kind: CallKind::Func,
                params,
                transfer: ScBalances::new(),
            };
            if let Err(error) = self.call(request) {
                self.state.contracts.borrow_mut().remove(&hname);
                return Err(error);
            }
        }
        Ok(self.contract_id(hname))
    }

    /// Returns the amount of tokens of `color` held by `agent`.
    pub fn balance_of(&self, agent: &ScAgentId, color: ScColor) -> i64 {
        self.balance(agent, color)
    }

    /// Returns a copy of the persisted state of a contract.
    pub fn contract_state(&self, contract: ScHname) -> Option<ScDict> {
        self.state
            .contracts
            .borrow()
            .get(&contract)
            .map(|deployed| deployed.state.borrow().clone())
    }

    /// Moves the clock forward.
    pub fn advance_time(&self, nanos: i64) {
        self.state.clock.set(self.state.clock.get() + nanos);
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            accounts: self.state.accounts.borrow().clone(),
            states: self
                .state
                .contracts
                .borrow()
                .values()
                .map(|deployed| (deployed.state.clone(), deployed.state.borrow().clone()))
                .collect(),
        }
    }

    fn restore(&self, checkpoint: Checkpoint) {
        *self.state.accounts.borrow_mut() = checkpoint.accounts;
        for (state, snapshot) in checkpoint.states {
            *state.borrow_mut() = snapshot;
        }
    }

    fn run_func(
        &self,
        handler: fn(&ScFuncContext) -> Result<(), ScError>,
        frame: Frame,
        caller: ScAgentId,
    ) -> Result<ScDict, ScError> {
        let checkpoint = self.checkpoint();
        let outcome = self
            .transfer(&caller, &frame.contract_id, &frame.incoming)
            .and_then(|()| {
                let host: HostRef = Rc::new(self.clone());
                handler(&ScFuncContext::new(host, frame.clone()))
            });
        match outcome {
            Ok(()) => Ok(frame.results.snapshot()),
            Err(error) => {
                warn!(%error, "function call failed, rolling back");
                self.restore(checkpoint);
                Err(error)
            }
        }
    }
}

impl ScHost for TestChain {
    fn call(&self, request: CallRequest) -> Result<ScDict, ScError> {
        let span = tracing::debug_span!(
            "call",
            contract = %request.contract,
            function = %request.function,
            kind = ?request.kind,
        );
        let _enter = span.enter();

        let (entry_point, creator, state) = {
            let contracts = self.state.contracts.borrow();
            let deployed = contracts
                .get(&request.contract)
                .ok_or(ScError::UnknownContract(request.contract))?;
            (
                deployed.exports.entry_point(request.function)?,
                deployed.creator,
                deployed.state.clone(),
            )
        };

        let depth = self.state.depth.get();
        if depth == 0 && request.kind == CallKind::Func {
            self.advance_time(self.state.config.timestamp_step);
        }

        let contract_id = self.contract_id(request.contract);
        let mut frame = Frame {
            contract_id,
            caller: request.caller,
            creator,
            incoming: request.transfer,
            params: Proxy::from_dict(request.params),
            results: Proxy::nil(),
            state: Proxy::new(state.clone()),
        };

        self.state.depth.set(depth + 1);
        let outcome = match (request.kind, entry_point) {
            (CallKind::View, EntryPoint::Func(_)) => Err(ScError::NotAView(request.function)),
            (_, EntryPoint::Func(handler)) => self.run_func(handler, frame, request.caller),
            (_, EntryPoint::View(handler)) => {
                if frame.incoming.is_empty() {
                    // Views run against a copy, so the persisted state cannot change.
                    frame.state = Proxy::from_dict(state.borrow().clone());
                    let host: HostRef = Rc::new(self.clone());
                    handler(&ScViewContext::new(host, frame.clone()))
                        .map(|()| frame.results.snapshot())
                } else {
                    Err(ScError::TransferToView(request.function))
                }
            }
        };
        self.state.depth.set(depth);

        match &outcome {
            Ok(results) => debug!(results = results.len(), "call succeeded"),
            Err(error) => debug!(%error, "call failed"),
        }
        outcome
    }

    fn balance(&self, agent: &ScAgentId, color: ScColor) -> i64 {
        self.state
            .accounts
            .borrow()
            .get(agent)
            .map(|balances| balances.balance(color))
            .unwrap_or_default()
    }

    fn balances(&self, agent: &ScAgentId) -> ScBalances {
        self.state
            .accounts
            .borrow()
            .get(agent)
            .cloned()
            .unwrap_or_default()
    }

    fn transfer(
        &self,
        from: &ScAgentId,
        to: &ScAgentId,
        balances: &ScBalances,
    ) -> Result<(), ScError> {
        if balances.is_empty() {
            return Ok(());
        }
        let mut accounts = self.state.accounts.borrow_mut();
        let mut debited = accounts.get(from).cloned().unwrap_or_default();
        debited.remove_all(balances)?;
        let mut credited = if from == to {
            debited.clone()
        } else {
            accounts.get(to).cloned().unwrap_or_default()
        };
        credited.add_all(balances)?;
        accounts.insert(*from, debited);
        accounts.insert(*to, credited);
        debug!(%from, %to, ?balances, "transferred tokens");
        Ok(())
    }

    fn timestamp(&self) -> i64 {
        self.state.clock.get()
    }
}

/// Submits calls to a [`TestChain`] on behalf of an agent.
#[derive(Clone)]
pub struct TestClient {
    chain: TestChain,
    agent: ScAgentId,
}

impl TestClient {
    /// Returns the agent the calls are made for.
    pub fn agent(&self) -> ScAgentId {
        self.agent
    }

    /// Returns the chain the calls are submitted to.
    pub fn chain(&self) -> &TestChain {
        &self.chain
    }
}

impl ScViewCallContext for TestClient {
    fn host(&self) -> HostRef {
        Rc::new(self.chain.clone())
    }

    fn caller_id(&self) -> ScAgentId {
        self.agent
    }
}

impl ScFuncCallContext for TestClient {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{ChainConfig, TestChain};
    use crate::{
        ensure, CallKind, CallRequest, ScBalances, ScColor, ScDict, ScError, ScExports, ScFunc,
        ScFuncContext, ScHname, ScHost, ScImmutable, ScMutable, ScValue, ScView, ScViewContext,
    };

    fn store(ctx: &ScFuncContext) -> Result<(), ScError> {
        let value = ScImmutable::<i64>::new(ctx.params().root("value")).value()?;
        ScMutable::<i64>::new(ctx.state().root("value")).set_value(value);
        ensure!(value >= 0, ScError::Panic("negative value".to_owned()));
        Ok(())
    }

    fn load(ctx: &ScViewContext) -> Result<(), ScError> {
        let value = ScImmutable::<i64>::new(ctx.state().root("value")).value()?;
        ScMutable::<i64>::new(ctx.results().root("value")).set_value(value);
        Ok(())
    }

    fn scribble(ctx: &ScViewContext) -> Result<(), ScError> {
        ScMutable::<i64>::new(ctx.state().root("value")).set_value(-1);
        Ok(())
    }

    fn relay(ctx: &ScFuncContext) -> Result<(), ScError> {
        let mut call = ScFunc::new(ctx, ScHname::new("storage"), ScHname::new("store"));
        let params = crate::Proxy::nil();
        ScMutable::<i64>::new(params.root("value"))
            .set_value(ScImmutable::<i64>::new(ctx.params().root("value")).value()?);
        call.set_ptrs(Some(&params), None);
        call.call()
    }

    fn storage() -> ScExports {
        ScExports::new("storage")
            .add_func("store", store)
            .add_view("load", load)
            .add_view("scribble", scribble)
    }

    fn call_store(
        chain: &TestChain,
        agent_name: &str,
        value: i64,
        tokens: i64,
    ) -> Result<(), ScError> {
        let client = chain.client(chain.new_agent(agent_name));
        let params = crate::Proxy::nil();
        ScMutable::<i64>::new(params.root("value")).set_value(value);
        let mut call = ScFunc::new(&client, ScHname::new("storage"), ScHname::new("store"));
        call.set_ptrs(Some(&params), None);
        call.transfer_iotas(tokens);
        call.call()
    }

    fn load_value(chain: &TestChain, view: &str) -> Result<i64, ScError> {
        let client = chain.client(chain.new_agent("reader"));
        let results = crate::Proxy::nil();
        let mut call = ScView::new(&client, ScHname::new("storage"), ScHname::new(view));
        call.set_ptrs(None, Some(&results));
        call.call()?;
        Ok(ScImmutable::<i64>::new(results.root("value")).value()?)
    }

    #[test_log::test]
    fn function_results_and_state_are_kept() {
        let chain = TestChain::new();
        let creator = chain.new_agent("creator");
        chain.deploy(storage(), creator).unwrap();

        call_store(&chain, "alice", 42, 10).unwrap();

        assert_eq!(load_value(&chain, "load"), Ok(42));
        let contract = chain.contract_id(ScHname::new("storage"));
        assert_eq!(chain.balance(&contract, ScColor::IOTA), 10);
    }

    #[test_log::test]
    fn failing_function_rolls_back_state_and_tokens() {
        let chain = TestChain::new();
        chain.deploy(storage(), chain.new_agent("creator")).unwrap();
        call_store(&chain, "alice", 7, 0).unwrap();

        assert_matches!(call_store(&chain, "bob", -5, 100), Err(ScError::Panic(_)));

        assert_eq!(load_value(&chain, "load"), Ok(7));
        let bob = chain.new_agent("bob");
        // `new_agent` funds the account a second time.
        assert_eq!(
            chain.balance(&bob, ScColor::IOTA),
            2 * chain.config().initial_agent_balance
        );
    }

    #[test_log::test]
    fn views_cannot_change_state() {
        let chain = TestChain::new();
        chain.deploy(storage(), chain.new_agent("creator")).unwrap();
        call_store(&chain, "alice", 3, 0).unwrap();

        assert_eq!(load_value(&chain, "scribble"), Ok(0));
        assert_eq!(load_value(&chain, "load"), Ok(3));
    }

    #[test_log::test]
    fn functions_cannot_be_called_as_views() {
        let chain = TestChain::new();
        chain.deploy(storage(), chain.new_agent("creator")).unwrap();

        assert_matches!(load_value(&chain, "store"), Err(ScError::NotAView(_)));
        assert_matches!(
            load_value(&chain, "missing"),
            Err(ScError::UnknownEntryPoint { .. })
        );
    }

    #[test_log::test]
    fn contracts_can_call_other_contracts() {
        let chain = TestChain::new();
        let creator = chain.new_agent("creator");
        chain.deploy(storage(), creator).unwrap();
        chain
            .deploy(ScExports::new("relay").add_func("relay", relay), creator)
            .unwrap();

        let client = chain.client(chain.new_agent("alice"));
        let params = crate::Proxy::nil();
        ScMutable::<i64>::new(params.root("value")).set_value(11);
        let mut call = ScFunc::new(&client, ScHname::new("relay"), ScHname::new("relay"));
        call.set_ptrs(Some(&params), None);
        call.call().unwrap();

        assert_eq!(load_value(&chain, "load"), Ok(11));
    }

    #[test_log::test]
    fn clock_advances_once_per_top_level_function_call() {
        let config = ChainConfig::default()
            .with_initial_timestamp(1_000)
            .with_timestamp_step(10);
        let chain = TestChain::with_config(config);
        chain.deploy(storage(), chain.new_agent("creator")).unwrap();

        call_store(&chain, "alice", 1, 0).unwrap();
        load_value(&chain, "load").unwrap();
        assert_eq!(chain.timestamp(), 1_010);

        chain.advance_time(5);
        assert_eq!(chain.timestamp(), 1_015);
    }

    #[test_log::test]
    fn deploying_twice_fails() {
        let chain = TestChain::new();
        let creator = chain.new_agent("creator");
        chain.deploy(storage(), creator).unwrap();
        assert_matches!(
            chain.deploy(storage(), creator),
            Err(ScError::AlreadyDeployed(_))
        );
    }

    fn init_params(value: i64) -> ScDict {
        let mut params = ScDict::new();
        params.set(b"value", value.encode());
        params
    }

    #[test_log::test]
    fn deploying_runs_init() {
        let chain = TestChain::new();
        let creator = chain.new_agent("creator");

        chain
            .deploy_with_params(storage().add_func("init", store), creator, init_params(9))
            .unwrap();

        assert_eq!(load_value(&chain, "load"), Ok(9));
    }

    #[test_log::test]
    fn failing_init_undeploys_the_contract() {
        let chain = TestChain::new();
        let creator = chain.new_agent("creator");

        assert_matches!(
            chain.deploy_with_params(storage().add_func("init", store), creator, init_params(-1)),
            Err(ScError::Panic(_))
        );
        assert_eq!(chain.contract_state(ScHname::new("storage")), None);
        assert_matches!(
            load_value(&chain, "load"),
            Err(ScError::UnknownContract(_))
        );

        chain.deploy(storage(), creator).unwrap();
        assert_eq!(load_value(&chain, "load"), Ok(0));
    }

    #[test_log::test]
    fn views_reject_attached_tokens() {
        let chain = TestChain::new();
        chain.deploy(storage(), chain.new_agent("creator")).unwrap();
        let alice = chain.new_agent("alice");

        let request = CallRequest {
            caller: alice,
            contract: ScHname::new("storage"),
            function: ScHname::new("load"),
            kind: CallKind::View,
            params: ScDict::new(),
            transfer: ScBalances::iotas(5),
        };
        assert_matches!(chain.call(request), Err(ScError::TransferToView(_)));

        let contract = chain.contract_id(ScHname::new("storage"));
        assert_eq!(chain.balance(&contract, ScColor::IOTA), 0);
        assert_eq!(
            chain.balance(&alice, ScColor::IOTA),
            chain.config().initial_agent_balance
        );
    }

    #[test_log::test]
    fn overflowing_transfer_keeps_both_accounts() {
        let chain =
            TestChain::with_config(ChainConfig::default().with_initial_agent_balance(i64::MAX));
        chain.deploy(storage(), chain.new_agent("creator")).unwrap();
        let contract = chain.contract_id(ScHname::new("storage"));
        let alice = chain.new_agent("alice");
        let bob = chain.new_agent("bob");

        chain
            .transfer(&alice, &contract, &ScBalances::iotas(i64::MAX))
            .unwrap();
        assert_eq!(
            chain.transfer(&bob, &contract, &ScBalances::iotas(1)),
            Err(ScError::Overflow)
        );

        assert_eq!(chain.balance(&alice, ScColor::IOTA), 0);
        assert_eq!(chain.balance(&bob, ScColor::IOTA), i64::MAX);
        assert_eq!(chain.balance(&contract, ScColor::IOTA), i64::MAX);
    }

    #[test_log::test]
    fn transfer_to_self_keeps_the_balance() {
        let chain = TestChain::new();
        let alice = chain.new_agent("alice");

        chain
            .transfer(&alice, &alice, &ScBalances::iotas(10))
            .unwrap();

        assert_eq!(
            chain.balance(&alice, ScColor::IOTA),
            chain.config().initial_agent_balance
        );
    }
}
