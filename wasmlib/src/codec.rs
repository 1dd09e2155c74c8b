// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Byte encodings of the values stored in parameters, results and state.

use thiserror::Error;

use crate::{
    types::{ADDRESS_LENGTH, COLOR_LENGTH},
    ScAddress, ScAgentId, ScColor, ScHname,
};

/// An error raised while decoding a stored value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The stored bytes do not have the fixed length of the type.
    #[error("invalid {type_name} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The type that was being decoded.
        type_name: &'static str,
        /// The length of the type's encoding.
        expected: usize,
        /// The length of the stored bytes.
        actual: usize,
    },

    /// A stored string is not valid UTF-8.
    #[error("invalid UTF-8 string")]
    InvalidUtf8,

    /// A boolean is stored as something other than `0` or `1`.
    #[error("invalid bool byte {0}")]
    InvalidBool(u8),

    /// A structured value could not be (de)serialized.
    #[error("BCS error: {0}")]
    Bcs(String),
}

impl From<bcs::Error> for CodecError {
    fn from(error: bcs::Error) -> Self {
        CodecError::Bcs(error.to_string())
    }
}

/// A value that can be stored under a key.
///
/// A key that holds no bytes reads as [`Default::default`], so `decode` is never called
/// on an absent value.
pub trait ScValue: Sized + Default {
    /// Encodes the value.
    fn encode(&self) -> Vec<u8>;

    /// Decodes a value previously produced by [`ScValue::encode`].
    fn decode(bytes: &[u8]) -> Result<Self, CodecError>;
}

fn fixed<const N: usize>(type_name: &'static str, bytes: &[u8]) -> Result<[u8; N], CodecError> {
    <[u8; N]>::try_from(bytes).map_err(|_| CodecError::InvalidLength {
        type_name,
        expected: N,
        actual: bytes.len(),
    })
}

impl ScValue for i64 {
    fn encode(&self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(i64::from_le_bytes(fixed("i64", bytes)?))
    }
}

impl ScValue for i32 {
    fn encode(&self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(i32::from_le_bytes(fixed("i32", bytes)?))
    }
}

impl ScValue for bool {
    fn encode(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        match fixed::<1>("bool", bytes)? {
            [0] => Ok(false),
            [1] => Ok(true),
            [other] => Err(CodecError::InvalidBool(other)),
        }
    }
}

impl ScValue for String {
    fn encode(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }
}

impl ScValue for Vec<u8> {
    fn encode(&self) -> Vec<u8> {
        self.clone()
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bytes.to_vec())
    }
}

impl ScValue for ScHname {
    fn encode(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(ScHname::from_bytes(fixed("hname", bytes)?))
    }
}

impl ScValue for ScAddress {
    fn encode(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(ScAddress(fixed::<ADDRESS_LENGTH>("address", bytes)?))
    }
}

impl ScValue for ScAgentId {
    fn encode(&self) -> Vec<u8> {
        let mut bytes = self.address.encode();
        bytes.extend_from_slice(&self.hname.to_bytes());
        bytes
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let bytes = fixed::<{ ADDRESS_LENGTH + 4 }>("agent id", bytes)?;
        let (address, hname) = bytes.split_at(ADDRESS_LENGTH);
        Ok(ScAgentId {
            address: ScAddress::decode(address)?,
            hname: ScHname::decode(hname)?,
        })
    }
}

impl ScValue for ScColor {
    fn encode(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(ScColor(fixed::<COLOR_LENGTH>("color", bytes)?))
    }
}

/// Implements [`ScValue`] for a structured type through BCS.
///
/// Encoding panics only if BCS rejects the value, which for plain structs takes a
/// sequence longer than 2^31 elements.
#[macro_export]
macro_rules! bcs_value {
    ($type:ty) => {
        impl $crate::ScValue for $type {
            fn encode(&self) -> Vec<u8> {
                $crate::bcs::to_bytes(self).expect("BCS serialization of a plain struct cannot fail")
            }

            fn decode(bytes: &[u8]) -> Result<Self, $crate::CodecError> {
                Ok($crate::bcs::from_bytes(bytes)?)
            }
        }
    };
}
