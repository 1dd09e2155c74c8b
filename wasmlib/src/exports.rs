// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{CallKind, ScError, ScFuncContext, ScHname, ScViewContext};

/// The handler of a state-mutating function.
pub type FuncHandler = fn(&ScFuncContext) -> Result<(), ScError>;

/// The handler of a read-only view.
pub type ViewHandler = fn(&ScViewContext) -> Result<(), ScError>;

/// An exported entry point.
#[derive(Clone, Copy, Debug)]
pub enum EntryPoint {
    /// A function.
    Func(FuncHandler),
    /// A view.
    View(ViewHandler),
}

impl EntryPoint {
    /// Returns how the entry point must be invoked.
    pub fn kind(&self) -> CallKind {
        match self {
            EntryPoint::Func(_) => CallKind::Func,
            EntryPoint::View(_) => CallKind::View,
        }
    }
}

/// The table of entry points a contract exports to the host.
#[derive(Clone, Debug)]
pub struct ScExports {
    name: String,
    hname: ScHname,
    entry_points: BTreeMap<ScHname, (&'static str, EntryPoint)>,
}

impl ScExports {
    /// Starts the export table of the contract called `name`.
    pub fn new(name: &str) -> Self {
        ScExports {
            name: name.to_owned(),
            hname: ScHname::new(name),
            entry_points: BTreeMap::new(),
        }
    }

    /// Exports a function.
    pub fn add_func(mut self, name: &'static str, handler: FuncHandler) -> Self {
        self.entry_points
            .insert(ScHname::new(name), (name, EntryPoint::Func(handler)));
        self
    }

    /// Exports a view.
    pub fn add_view(mut self, name: &'static str, handler: ViewHandler) -> Self {
        self.entry_points
            .insert(ScHname::new(name), (name, EntryPoint::View(handler)));
        self
    }

    /// Returns the contract name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contract hname.
    pub fn hname(&self) -> ScHname {
        self.hname
    }

    /// Looks up the entry point registered under `function`.
    pub fn entry_point(&self, function: ScHname) -> Result<EntryPoint, ScError> {
        self.entry_points
            .get(&function)
            .map(|(_, entry_point)| *entry_point)
            .ok_or(ScError::UnknownEntryPoint {
                contract: self.hname,
                function,
            })
    }

    /// Iterates over the names of the exported entry points and how they are invoked.
    pub fn entry_points(&self) -> impl Iterator<Item = (&'static str, CallKind)> + '_ {
        self.entry_points
            .values()
            .map(|(name, entry_point)| (*name, entry_point.kind()))
    }
}
