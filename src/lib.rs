/// CPF (Brazilian taxpayer id) normalization and check digit validation.
pub mod cpf;

/// Balance, withdrawal counter and transaction log of the session.
/// State is modified using events, which are created by handling requests
pub mod ledger;

/// Menu options and amounts typed by the user.
pub mod command;

/// Constants the shell runs with.
pub mod config;

/// Registry interface for users and accounts, plus "in memory" implementation.
pub mod registry;

/// Interactive loop bootstrapping the core logic, shared by both binaries
/// and the integration tests.
pub mod shell;
