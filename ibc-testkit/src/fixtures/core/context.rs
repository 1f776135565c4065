use ibc_handshake_core::client::types::Height;
use ibc_handshake_core::commitment_types::commitment::CommitmentPrefix;
use ibc_handshake_core::primitives::prelude::*;
use typed_builder::TypedBuilder;

use crate::testapp::ibc::core::types::MockContext;

/// Configuration of a [`MockContext`] instance.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = MockContext))]
pub struct MockContextConfig {
    #[builder(default = "mockA".to_string(), setter(into))]
    chain_name: String,

    #[builder(default = Height::new(0, 5).expect("Never fails"))]
    latest_height: Height,

    #[builder(default = CommitmentPrefix::from_store("ibc", 1).expect("Never fails"))]
    commitment_prefix: CommitmentPrefix,
}

impl From<MockContextConfig> for MockContext {
    fn from(params: MockContextConfig) -> Self {
        MockContext::new(params.chain_name, params.commitment_prefix)
            .advance_block_up_to_height(params.latest_height)
    }
}
