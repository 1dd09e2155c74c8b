// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Short hashed names identifying contracts and their entry points.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// A 32-bit handle derived from a name.
///
/// Contracts are registered under the hname of their name, and each entry point is
/// dispatched by the hname of the function or view name.
#[derive(Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Default, Serialize, Deserialize)]
pub struct ScHname(pub u32);

impl ScHname {
    /// Derives the hname of `name`.
    ///
    /// Takes the first four bytes of the Keccak-256 hash, little endian. The values `0` and
    /// `u32::MAX` are reserved, so the next four bytes are used when the first ones map to
    /// either of them.
    pub fn new(name: &str) -> Self {
        let hash = Keccak256::digest(name.as_bytes());
        for chunk in hash.chunks_exact(4) {
            let value = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            if value != 0 && value != u32::MAX {
                return ScHname(value);
            }
        }
        // Every 4-byte window of the hash would have to be reserved to get here.
        ScHname(1)
    }

    /// Returns the little-endian byte representation.
    pub fn to_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Rebuilds an hname from its little-endian byte representation.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        ScHname(u32::from_le_bytes(bytes))
    }
}

impl fmt::Display for ScHname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::Debug for ScHname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScHname({self})")
    }
}

impl From<&str> for ScHname {
    fn from(name: &str) -> Self {
        ScHname::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::ScHname;

    #[test]
    fn hname_is_deterministic() {
        assert_eq!(ScHname::new("donate"), ScHname::new("donate"));
        assert_ne!(ScHname::new("donate"), ScHname::new("withdraw"));
    }

    #[test]
    fn hname_avoids_reserved_values() {
        for name in ["", "a", "donatewithfeedback", "donationInfo", "nr"] {
            let hname = ScHname::new(name);
            assert_ne!(hname.0, 0);
            assert_ne!(hname.0, u32::MAX);
        }
    }

    #[test]
    fn display_is_zero_padded_hex() {
        assert_eq!(ScHname(0x1a).to_string(), "0000001a");
        assert_eq!(format!("{:?}", ScHname(0xdeadbeef)), "ScHname(deadbeef)");
    }

    #[test]
    fn bytes_are_little_endian() {
        let hname = ScHname(0x0403_0201);
        assert_eq!(hname.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(ScHname::from_bytes([1, 2, 3, 4]), hname);
    }
}
