//! Greets the user named by the `CUSTOM_USER` environment variable.
//!
//! A set variable, even an empty one, yields `Hi, <value>`. An unset variable
//! yields `Hi USER_NOT_SPECIFIED`.

mod error;
mod greeting;

pub use error::{GreeterError, GreeterResult};
pub use greeting::{UNSPECIFIED_USER, USER_ENV_VAR, User, write_greeting};

/// Resolve the user from the process environment and greet on stdout.
pub fn run() -> GreeterResult<()> {
    let user = User::from_env();
    let stdout = std::io::stdout();
    write_greeting(&mut stdout.lock(), &user)
}
