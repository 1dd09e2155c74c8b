// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::{CodecError, ScHname};

/// An error raised while calling into, or executing, a contract entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScError {
    /// A stored value could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// No contract is deployed under the given hname.
    #[error("unknown contract {0}")]
    UnknownContract(ScHname),

    /// The contract does not export the given entry point.
    #[error("contract {contract} has no entry point {function}")]
    UnknownEntryPoint {
        /// The contract that was called.
        contract: ScHname,
        /// The entry point that was requested.
        function: ScHname,
    },

    /// A contract is already deployed under the given hname.
    #[error("contract {0} is already deployed")]
    AlreadyDeployed(ScHname),

    /// A function was invoked through a view call.
    #[error("entry point {0} is not a view")]
    NotAView(ScHname),

    /// Tokens were sent to a view, which cannot hold them.
    #[error("view {0} cannot receive tokens")]
    TransferToView(ScHname),

    /// The caller is not allowed to invoke the entry point.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// A mandatory parameter was not provided.
    #[error("missing mandatory parameter {0:?}")]
    MissingParameter(&'static str),

    /// An account does not hold enough tokens for a transfer.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The amount that was requested.
        requested: i64,
        /// The amount that was available.
        available: i64,
    },

    /// A token amount or counter does not fit in an `i64`.
    #[error("number overflow")]
    Overflow,

    /// An array was indexed past its end.
    #[error("index {index} out of range for array of length {length}")]
    IndexOutOfRange {
        /// The requested index.
        index: i32,
        /// The length of the array.
        length: i32,
    },

    /// A textual identifier could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The contract gave up with a message.
    #[error("{0}")]
    Panic(String),
}
