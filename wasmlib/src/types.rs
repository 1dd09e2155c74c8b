// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Identifiers and token balances shared by contracts and the host.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ScError, ScHname};

/// Length of an [`ScAddress`] in bytes.
pub const ADDRESS_LENGTH: usize = 33;
/// Length of an [`ScColor`] in bytes.
pub const COLOR_LENGTH: usize = 32;

/// The address of an account on the ledger.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash)]
pub struct ScAddress(pub [u8; ADDRESS_LENGTH]);

impl ScAddress {
    /// Builds an address whose bytes are derived from `seed`, for chains and test agents.
    pub fn from_seed(seed: &str) -> Self {
        let hname = ScHname::new(seed).to_bytes();
        let mut bytes = [0u8; ADDRESS_LENGTH];
        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = hname[index % 4] ^ (index as u8);
        }
        ScAddress(bytes)
    }

    /// Returns the agent id representing this address as a plain account.
    pub fn as_agent_id(&self) -> ScAgentId {
        ScAgentId::from_address(*self)
    }
}

impl Default for ScAddress {
    fn default() -> Self {
        ScAddress([0; ADDRESS_LENGTH])
    }
}

impl fmt::Display for ScAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for ScAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScAddress({})", hex::encode(&self.0[..8]))
    }
}

impl FromStr for ScAddress {
    type Err = ScError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|error| ScError::Parse(error.to_string()))?;
        let bytes = <[u8; ADDRESS_LENGTH]>::try_from(bytes.as_slice()).map_err(|_| {
            ScError::Parse(format!(
                "expected {ADDRESS_LENGTH} address bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(ScAddress(bytes))
    }
}

impl Serialize for ScAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ScAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            let bytes = serde_bytes_compat::deserialize(deserializer)?;
            let bytes = <[u8; ADDRESS_LENGTH]>::try_from(bytes.as_slice())
                .map_err(|_| serde::de::Error::invalid_length(bytes.len(), &"33 bytes"))?;
            Ok(ScAddress(bytes))
        }
    }
}

/// Identifies an agent: either a plain account (hname `0`) or a contract on a chain.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Default, Serialize, Deserialize)]
pub struct ScAgentId {
    /// The address of the account, or of the chain hosting the contract.
    pub address: ScAddress,
    /// The hname of the contract, or `0` for plain accounts.
    pub hname: ScHname,
}

impl ScAgentId {
    /// Creates the agent id of a contract hosted on the chain with the given address.
    pub fn new(address: ScAddress, hname: ScHname) -> Self {
        ScAgentId { address, hname }
    }

    /// Creates the agent id of a plain account.
    pub fn from_address(address: ScAddress) -> Self {
        ScAgentId {
            address,
            hname: ScHname(0),
        }
    }

    /// Returns the address part of the agent id.
    pub fn address(&self) -> ScAddress {
        self.address
    }

    /// Returns `true` if this agent is a plain account rather than a contract.
    pub fn is_address(&self) -> bool {
        self.hname == ScHname(0)
    }
}

impl fmt::Display for ScAgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.hname)
    }
}

impl fmt::Debug for ScAgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScAgentId({:?}, {})", self.address, self.hname)
    }
}

/// The color of a token.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct ScColor(pub [u8; COLOR_LENGTH]);

impl ScColor {
    /// The base token.
    pub const IOTA: ScColor = ScColor([0x00; COLOR_LENGTH]);
    /// The placeholder color for tokens minted by the current request.
    pub const MINT: ScColor = ScColor([0xff; COLOR_LENGTH]);
}

impl Default for ScColor {
    fn default() -> Self {
        ScColor::IOTA
    }
}

impl fmt::Debug for ScColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScColor::IOTA => write!(f, "IOTA"),
            ScColor::MINT => write!(f, "MINT"),
            ScColor(bytes) => write!(f, "ScColor({})", hex::encode(&bytes[..8])),
        }
    }
}

/// Token amounts per color. Amounts are never negative and zero entries are not kept.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScBalances {
    balances: BTreeMap<ScColor, i64>,
}

impl ScBalances {
    /// Creates an empty set of balances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates balances holding `amount` base tokens. A non-positive amount gives empty balances.
    pub fn iotas(amount: i64) -> Self {
        let mut balances = Self::default();
        if amount > 0 {
            balances.balances.insert(ScColor::IOTA, amount);
        }
        balances
    }

    /// Returns the amount of tokens of the given color.
    pub fn balance(&self, color: ScColor) -> i64 {
        self.balances.get(&color).copied().unwrap_or_default()
    }

    /// Adds tokens of the given color. Non-positive amounts are ignored.
    pub fn add(&mut self, color: ScColor, amount: i64) -> Result<(), ScError> {
        if amount <= 0 {
            return Ok(());
        }
        let total = self
            .balance(color)
            .checked_add(amount)
            .ok_or(ScError::Overflow)?;
        self.balances.insert(color, total);
        Ok(())
    }

    /// Adds all of `other` to these balances, leaving them untouched on failure.
    pub fn add_all(&mut self, other: &ScBalances) -> Result<(), ScError> {
        let mut total = self.clone();
        for (color, amount) in other.iter() {
            total.add(color, amount)?;
        }
        *self = total;
        Ok(())
    }

    /// Removes tokens of the given color, failing if there are not enough of them.
    pub fn remove(&mut self, color: ScColor, amount: i64) -> Result<(), ScError> {
        if amount <= 0 {
            return Ok(());
        }
        let available = self.balance(color);
        if available < amount {
            return Err(ScError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        if available == amount {
            self.balances.remove(&color);
        } else {
            self.balances.insert(color, available - amount);
        }
        Ok(())
    }

    /// Removes all of `other` from these balances, leaving them untouched on failure.
    pub fn remove_all(&mut self, other: &ScBalances) -> Result<(), ScError> {
        let mut remaining = self.clone();
        for (color, amount) in other.iter() {
            remaining.remove(color, amount)?;
        }
        *self = remaining;
        Ok(())
    }

    /// Returns `true` if no tokens are held.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Iterates over the colors held and their amounts.
    pub fn iter(&self) -> impl Iterator<Item = (ScColor, i64)> + '_ {
        self.balances
            .iter()
            .map(|(color, amount)| (*color, *amount))
    }
}

mod serde_bytes_compat {
    use serde::{de::Visitor, Deserializer};
    use std::fmt;

    struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a byte array")
        }

        fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
            Ok(v.to_vec())
        }

        fn visit_byte_buf<E: serde::de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_seq<A: serde::de::SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> Result<Self::Value, A::Error> {
            let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or_default());
            while let Some(byte) = seq.next_element()? {
                bytes.push(byte);
            }
            Ok(bytes)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        deserializer.deserialize_bytes(BytesVisitor)
    }
}
