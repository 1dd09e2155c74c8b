// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Typed views over values stored in an [`ScDict`].
//!
//! Every proxy shares the dictionary it was created from, so a parameter proxy handed to
//! a caller and the call descriptor wired to it see the same container.

use std::{cell::RefCell, fmt, marker::PhantomData, rc::Rc};

use crate::{CodecError, ScDict, ScError, ScValue};

/// A handle to a key (or key prefix) inside a shared dictionary.
#[derive(Clone, Default)]
pub struct Proxy {
    dict: Rc<RefCell<ScDict>>,
    key: Vec<u8>,
}

impl Proxy {
    /// Creates a proxy to the root of a shared dictionary.
    pub fn new(dict: Rc<RefCell<ScDict>>) -> Self {
        Proxy {
            dict,
            key: Vec::new(),
        }
    }

    /// Creates a proxy to the root of a freshly allocated, empty dictionary.
    pub fn nil() -> Self {
        Self::default()
    }

    /// Creates a proxy owning a copy of `dict`.
    pub fn from_dict(dict: ScDict) -> Self {
        Self::new(Rc::new(RefCell::new(dict)))
    }

    /// Returns a proxy to `key` under this proxy's key.
    pub fn root(&self, key: &str) -> Proxy {
        let mut full_key = self.key.clone();
        full_key.extend_from_slice(key.as_bytes());
        Proxy {
            dict: self.dict.clone(),
            key: full_key,
        }
    }

    /// Returns a proxy to the element of an array at `index`.
    pub fn index(&self, index: i32) -> Proxy {
        let mut full_key = self.key.clone();
        full_key.push(b'#');
        full_key.extend_from_slice(index.to_string().as_bytes());
        Proxy {
            dict: self.dict.clone(),
            key: full_key,
        }
    }

    /// Returns the full key this proxy points to.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Returns `true` if a value is stored under this proxy's key.
    pub fn exists(&self) -> bool {
        self.dict.borrow().exists(&self.key)
    }

    /// Returns a copy of the bytes stored under this proxy's key.
    pub fn get(&self) -> Option<Vec<u8>> {
        self.dict.borrow().get(&self.key).map(<[u8]>::to_vec)
    }

    /// Stores bytes under this proxy's key.
    pub fn set(&self, value: Vec<u8>) {
        self.dict.borrow_mut().set(&self.key, value);
    }

    /// Removes the value stored under this proxy's key.
    pub fn delete(&self) {
        self.dict.borrow_mut().delete(&self.key);
    }

    /// Returns a copy of the whole shared dictionary.
    pub fn snapshot(&self) -> ScDict {
        self.dict.borrow().clone()
    }

    /// Replaces the whole shared dictionary.
    pub fn replace(&self, dict: ScDict) {
        *self.dict.borrow_mut() = dict;
    }

    /// Returns `true` if both proxies share the same dictionary.
    pub fn shares_dict_with(&self, other: &Proxy) -> bool {
        Rc::ptr_eq(&self.dict, &other.dict)
    }

    fn read<T: ScValue>(&self) -> Result<T, CodecError> {
        match self.dict.borrow().get(&self.key) {
            Some(bytes) => T::decode(bytes),
            None => Ok(T::default()),
        }
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proxy({:?})", String::from_utf8_lossy(&self.key))
    }
}

/// A generated wrapper around a [`Proxy`], such as a parameter or result container.
pub trait ScProxy {
    /// Returns the proxy to the container's root.
    fn proxy(&self) -> &Proxy;
}

impl ScProxy for Proxy {
    fn proxy(&self) -> &Proxy {
        self
    }
}

/// A read-only view of a single stored value.
#[derive(Debug)]
pub struct ScImmutable<T> {
    proxy: Proxy,
    _phantom: PhantomData<T>,
}

impl<T: ScValue> ScImmutable<T> {
    /// Creates a read-only view of the value under the proxy's key.
    pub fn new(proxy: Proxy) -> Self {
        ScImmutable {
            proxy,
            _phantom: PhantomData,
        }
    }

    /// Returns `true` if a value is stored.
    pub fn exists(&self) -> bool {
        self.proxy.exists()
    }

    /// Reads the value, or the type's default if none is stored.
    pub fn value(&self) -> Result<T, CodecError> {
        self.proxy.read()
    }
}

/// A read-write view of a single stored value.
#[derive(Debug)]
pub struct ScMutable<T> {
    proxy: Proxy,
    _phantom: PhantomData<T>,
}

impl<T: ScValue> ScMutable<T> {
    /// Creates a read-write view of the value under the proxy's key.
    pub fn new(proxy: Proxy) -> Self {
        ScMutable {
            proxy,
            _phantom: PhantomData,
        }
    }

    /// Returns `true` if a value is stored.
    pub fn exists(&self) -> bool {
        self.proxy.exists()
    }

    /// Reads the value, or the type's default if none is stored.
    pub fn value(&self) -> Result<T, CodecError> {
        self.proxy.read()
    }

    /// Stores a new value.
    pub fn set_value(&self, value: T) {
        self.proxy.set(value.encode());
    }

    /// Removes the stored value.
    pub fn delete(&self) {
        self.proxy.delete();
    }
}

/// A read-only view of a stored array.
///
/// The length lives under the array's key and element `i` under `key#i`.
#[derive(Debug)]
pub struct ScImmutableArray<T> {
    proxy: Proxy,
    _phantom: PhantomData<T>,
}

impl<T: ScValue> ScImmutableArray<T> {
    /// Creates a read-only view of the array under the proxy's key.
    pub fn new(proxy: Proxy) -> Self {
        ScImmutableArray {
            proxy,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements.
    pub fn length(&self) -> Result<i32, CodecError> {
        self.proxy.read()
    }

    /// Returns a read-only view of the element at `index`.
    pub fn get(&self, index: i32) -> Result<ScImmutable<T>, ScError> {
        let length = self.length()?;
        if index < 0 || index >= length {
            return Err(ScError::IndexOutOfRange { index, length });
        }
        Ok(ScImmutable::new(self.proxy.index(index)))
    }
}

/// A read-write view of a stored array.
#[derive(Debug)]
pub struct ScMutableArray<T> {
    proxy: Proxy,
    _phantom: PhantomData<T>,
}

impl<T: ScValue> ScMutableArray<T> {
    /// Creates a read-write view of the array under the proxy's key.
    pub fn new(proxy: Proxy) -> Self {
        ScMutableArray {
            proxy,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements.
    pub fn length(&self) -> Result<i32, CodecError> {
        self.proxy.read()
    }

    /// Returns a read-write view of the element at `index`.
    pub fn get(&self, index: i32) -> Result<ScMutable<T>, ScError> {
        let length = self.length()?;
        if index < 0 || index >= length {
            return Err(ScError::IndexOutOfRange { index, length });
        }
        Ok(ScMutable::new(self.proxy.index(index)))
    }

    /// Appends an element and returns its index.
    pub fn append(&self, value: T) -> Result<i32, CodecError> {
        let index = self.length()?;
        self.proxy.index(index).set(value.encode());
        self.proxy.set((index + 1).encode());
        Ok(index)
    }

    /// Removes every element.
    pub fn clear(&self) {
        let mut prefix = self.proxy.key().to_vec();
        prefix.push(b'#');
        self.proxy.dict.borrow_mut().delete_prefix(&prefix);
        self.proxy.delete();
    }

    /// Returns a read-only view of the same array.
    pub fn immutable(&self) -> ScImmutableArray<T> {
        ScImmutableArray::new(self.proxy.clone())
    }
}
