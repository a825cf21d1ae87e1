use std::ffi::OsString;
use std::io::Write;

use crate::error::GreeterResult;

/// Environment variable holding the name to greet.
pub const USER_ENV_VAR: &str = "CUSTOM_USER";
/// Printed in place of a name when `CUSTOM_USER` is unset.
pub const UNSPECIFIED_USER: &str = "USER_NOT_SPECIFIED";

/// Who to greet, as read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum User {
    /// The variable is set. The value may be empty.
    Named(OsString),
    /// The variable is unset.
    Unspecified,
}

impl User {
    /// Resolve the user from the process environment.
    pub fn from_env() -> Self {
        Self::lookup(std::env::var_os)
    }

    /// Resolve the user through `getter`, which is called once with
    /// [`USER_ENV_VAR`].
    pub fn lookup<F>(getter: F) -> Self
    where
        F: FnOnce(&'static str) -> Option<OsString>,
    {
        match getter(USER_ENV_VAR) {
            Some(name) => Self::Named(name),
            None => Self::Unspecified,
        }
    }

    /// True when the variable was set, including set to an empty string.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    fn line(&self) -> Vec<u8> {
        match self {
            Self::Named(name) => {
                let mut line = b"Hi, ".to_vec();
                line.extend_from_slice(name.as_encoded_bytes());
                line.push(b'\n');
                line
            }
            Self::Unspecified => format!("Hi {UNSPECIFIED_USER}\n").into_bytes(),
        }
    }
}

/// Write the greeting for `user` as a single line and flush.
pub fn write_greeting<W: Write>(out: &mut W, user: &User) -> GreeterResult<()> {
    out.write_all(&user.line())?;
    out.flush()?;
    Ok(())
}
