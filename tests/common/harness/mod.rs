//! Test harness for CLI integration tests.
//!
//! Provides isolated vaults with a stub converter, programmatic note
//! creation, and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod note;

#[allow(unused_imports)]
pub use command::NotetexCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use note::TestNote;
