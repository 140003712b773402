// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;

use rms_export::core::net::{HttpReply, Transport};
use rms_export::RmsResult;

/// Canned reply; remembers every request it was asked to make.
pub struct StubTransport {
    reply: HttpReply,
    pub seen: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl StubTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            reply: HttpReply { status, body: body.to_string() },
            seen: RefCell::new(Vec::new()),
        }
    }

    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(200, &body.to_string())
    }

    pub fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> RmsResult<HttpReply> {
        let q = query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        self.seen.borrow_mut().push((url.to_string(), q));
        Ok(self.reply.clone())
    }
}
