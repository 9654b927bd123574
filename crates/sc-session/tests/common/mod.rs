#![allow(dead_code)]

use sc_session::{CodeSource, MemoryStorage, SessionStore};

use std::cell::RefCell;
use std::collections::VecDeque;

/// Hands out predetermined codes, in order.
pub struct ScriptedCodes {
    codes: RefCell<VecDeque<String>>,
}

impl ScriptedCodes {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: RefCell::new(codes.iter().map(|c| c.to_string()).collect()),
        }
    }
}

impl CodeSource for ScriptedCodes {
    fn next_code(&self) -> String {
        self.codes
            .borrow_mut()
            .pop_front()
            .expect("scripted codes exhausted")
    }
}

/// Store over fresh in-memory storage, returning a handle to inspect it.
pub fn memory_store() -> (SessionStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (SessionStore::new(storage.clone()), storage)
}

pub fn scripted_store(codes: &[&str]) -> SessionStore<MemoryStorage, ScriptedCodes> {
    SessionStore::with_code_source(MemoryStorage::new(), ScriptedCodes::new(codes))
}
