pub mod core;

use alloc::fmt::Debug;

use ibc_handshake_core::handler::types::error::{ErrorKind, HandlerError};
use ibc_handshake_core::primitives::prelude::*;

use crate::testapp::ibc::core::types::MockContext;

/// The outcome a test case expects from a handshake step.
pub enum Expect {
    Success,
    /// The step fails, with the given kind of error if one is named.
    Failure(Option<ErrorKind>),
}

impl Expect {
    /// Returns `true` if `res` is the outcome this expectation names.
    pub fn matches<T>(&self, res: &Result<T, HandlerError>) -> bool {
        match (self, res) {
            (Self::Success, Ok(_)) => true,
            (Self::Failure(None), Err(_)) => true,
            (Self::Failure(Some(kind)), Err(e)) => e.kind() == *kind,
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct Fixture<M: Debug> {
    pub ctx: MockContext,
    pub msg: M,
}

impl<M: Debug> Fixture<M> {
    pub fn generate_error_msg<T: Debug>(
        &self,
        expect: &Expect,
        process: &str,
        res: &Result<T, HandlerError>,
    ) -> String {
        let base_error = match expect {
            Expect::Success => "step failed!",
            Expect::Failure(_) => "step passed but was supposed to fail!",
        };
        format!(
            "{process} {base_error} \n {res:?} \n {:?} \n {:?}",
            &self.msg, &self.ctx
        )
    }
}
