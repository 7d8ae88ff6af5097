//! Navigation routes
//!
//! Three logical paths. The root only renders for a signed-in user; otherwise
//! it, and any path we don't know, is replaced by the sign-in screen.

/// Logical routes of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    SignIn,
    Registration,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::SignIn => "/login",
            Self::Registration => "/signup",
        }
    }

    /// Match a path exactly, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Root),
            "/login" => Some(Self::SignIn),
            "/signup" => Some(Self::Registration),
            _ => None,
        }
    }
}

/// What navigating to a path produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    /// Replace the current entry with another route
    Redirect(Route),
}

/// Resolve a path against the current credential state
pub fn resolve(path: &str, has_credential: bool) -> Resolution {
    match Route::from_path(path) {
        Some(Route::Root) if has_credential => Resolution::Render(Route::Root),
        Some(Route::Root) | None => Resolution::Redirect(Route::SignIn),
        Some(route) => Resolution::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Root, Route::SignIn, Route::Registration] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/login/"), Some(Route::SignIn));
        assert_eq!(Route::from_path(""), Some(Route::Root));
    }

    #[test]
    fn test_root_without_credential_redirects_to_sign_in() {
        assert_eq!(resolve("/", false), Resolution::Redirect(Route::SignIn));
    }

    #[test]
    fn test_root_with_credential_renders() {
        assert_eq!(resolve("/", true), Resolution::Render(Route::Root));
    }

    #[test]
    fn test_unknown_path_redirects_to_sign_in() {
        assert_eq!(resolve("/cart", false), Resolution::Redirect(Route::SignIn));
        assert_eq!(resolve("/cart", true), Resolution::Redirect(Route::SignIn));
    }

    #[test]
    fn test_forms_render_regardless_of_credential() {
        assert_eq!(resolve("/login", true), Resolution::Render(Route::SignIn));
        assert_eq!(
            resolve("/signup", false),
            Resolution::Render(Route::Registration)
        );
    }
}
