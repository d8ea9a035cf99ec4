pub mod fakes;
pub mod repo;

pub use fakes::{FailingEmbedder, FakeEmbedder, FakeGenerator};
pub use repo::{TestEnv, init_test_env};
