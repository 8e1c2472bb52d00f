//! Which auth modal, if any, is showing, and the form contract of the
//! server's `/auth` endpoint.

/// Endpoint both auth forms post to.
pub const AUTH_PATH: &str = "/auth";

/// Form field telling the server whether the post is a signup or a login.
pub const AUTH_MODE_FIELD: &str = "type";

pub const USERNAME_FIELD: &str = "username";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthModal {
    #[default]
    Closed,
    Signup,
    Login,
}

impl AuthModal {
    /// Modal to reopen when the server rendered an auth error.
    ///
    /// Login failures mention "login"; anything else came from signup.
    pub fn for_error(text: &str) -> Self {
        if text.to_lowercase().contains("login") {
            AuthModal::Login
        } else {
            AuthModal::Signup
        }
    }

    pub fn is_open(&self) -> bool {
        *self != AuthModal::Closed
    }

    pub fn shows_signup(&self) -> bool {
        *self == AuthModal::Signup
    }

    pub fn shows_login(&self) -> bool {
        *self == AuthModal::Login
    }

    /// Value of [`AUTH_MODE_FIELD`] for the form this modal shows.
    pub fn form_mode(&self) -> Option<&'static str> {
        match self {
            AuthModal::Signup => Some("signup"),
            AuthModal::Login => Some("login"),
            AuthModal::Closed => None,
        }
    }

    /// The other modal; closed stays closed.
    pub fn switched(self) -> Self {
        match self {
            AuthModal::Signup => AuthModal::Login,
            AuthModal::Login => AuthModal::Signup,
            AuthModal::Closed => AuthModal::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_routing() {
        assert_eq!(AuthModal::for_error("Invalid LOGIN credentials"), AuthModal::Login);
        assert_eq!(AuthModal::for_error("Username already exists!"), AuthModal::Signup);
    }

    #[test]
    fn test_form_contract_matches_auth_endpoint() {
        assert_eq!(AUTH_PATH, "/auth");
        assert_eq!(AUTH_MODE_FIELD, "type");
        assert_eq!(AuthModal::Signup.form_mode(), Some("signup"));
        assert_eq!(AuthModal::Login.form_mode(), Some("login"));
        assert_eq!(AuthModal::Closed.form_mode(), None);
    }

    #[test]
    fn test_labelled_login_error_reopens_login() {
        // the page shell prefixes the server's login error so it routes here
        assert_eq!(AuthModal::for_error("Login failed: Invalid username or password"), AuthModal::Login);
    }

    #[test]
    fn test_switching() {
        assert_eq!(AuthModal::Signup.switched(), AuthModal::Login);
        assert_eq!(AuthModal::Login.switched(), AuthModal::Signup);
        assert_eq!(AuthModal::Closed.switched(), AuthModal::Closed);
        assert!(!AuthModal::default().is_open());
    }
}
