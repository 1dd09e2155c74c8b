// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Typed bindings between smart contracts and the host runtime executing them.
//!
//! A contract talks to its host only through the types in this crate:
//!
//! - callers build a call descriptor ([`ScFunc`] or [`ScView`]) from a capability token
//!   ([`ScFuncCallContext`] or [`ScViewCallContext`]), fill its parameters through mutable
//!   proxies and read the results through immutable ones;
//! - callees receive a [`ScFuncContext`] or [`ScViewContext`] from the host and see the
//!   opposite mutability: immutable parameters, mutable results.
//!
//! All values cross the boundary as bytes in an [`ScDict`], encoded with [`ScValue`].

#![deny(missing_docs)]

mod call;
mod codec;
mod context;
mod dict;
mod ensure;
mod error;
mod exports;
mod hname;
mod host;
mod proxy;
#[cfg(feature = "test")]
pub mod test;
mod types;

#[doc(hidden)]
pub use bcs;

pub use self::{
    call::{ScFunc, ScFuncCallContext, ScView, ScViewCallContext},
    codec::{CodecError, ScValue},
    context::{Frame, ScFuncContext, ScViewContext},
    dict::ScDict,
    error::ScError,
    exports::{EntryPoint, FuncHandler, ScExports, ViewHandler},
    hname::ScHname,
    host::{CallKind, CallRequest, HostRef, ScHost},
    proxy::{Proxy, ScImmutable, ScImmutableArray, ScMutable, ScMutableArray, ScProxy},
    types::{ScAddress, ScAgentId, ScBalances, ScColor},
};

/// Read-only proxy to an `i32` value.
pub type ScImmutableInt32 = ScImmutable<i32>;
/// Read-write proxy to an `i32` value.
pub type ScMutableInt32 = ScMutable<i32>;

/// Read-only proxy to an `i64` value.
pub type ScImmutableInt64 = ScImmutable<i64>;
/// Read-write proxy to an `i64` value.
pub type ScMutableInt64 = ScMutable<i64>;

/// Read-only proxy to a string value.
pub type ScImmutableString = ScImmutable<String>;
/// Read-write proxy to a string value.
pub type ScMutableString = ScMutable<String>;

/// Read-only proxy to an agent id value.
pub type ScImmutableAgentId = ScImmutable<ScAgentId>;
/// Read-write proxy to an agent id value.
pub type ScMutableAgentId = ScMutable<ScAgentId>;

/// Read-only proxy to a hname value.
pub type ScImmutableHname = ScImmutable<ScHname>;
/// Read-write proxy to a hname value.
pub type ScMutableHname = ScMutable<ScHname>;
