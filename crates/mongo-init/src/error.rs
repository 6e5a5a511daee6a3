use thiserror::Error;

/// Error code the server returns when `createUser` targets an existing user.
pub const DUPLICATE_USER_CODE: i32 = 51003;

/// Code name some server versions report instead of [`DUPLICATE_USER_CODE`].
pub const DUPLICATE_KEY_CODE_NAME: &str = "DuplicateKey";

/// A failed call against the administrative API.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ServerError {
    pub code: Option<i32>,
    pub code_name: Option<String>,
    pub message: String,
}

impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            code_name: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: i32, code_name: impl Into<String>) -> Self {
        self.code = Some(code);
        self.code_name = Some(code_name.into());
        self
    }

    /// The error a server raises when creating a user that already exists.
    pub fn duplicate_user(username: &str) -> Self {
        Self::new(format!("User \"{username}\" already exists"))
            .with_code(DUPLICATE_USER_CODE, "Location51003")
    }

    /// True when the failure means the login already exists.
    pub fn is_duplicate_identity(&self) -> bool {
        self.code == Some(DUPLICATE_USER_CODE)
            || self.code_name.as_deref() == Some(DUPLICATE_KEY_CODE_NAME)
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Error creating root user {username}: {source}")]
    RootLogin {
        username: String,
        #[source]
        source: ServerError,
    },
    #[error("Connection error: {0}")]
    Connect(String),
}
