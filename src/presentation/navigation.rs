//! Route stack between screens.

use tracing::debug;

/// A screen destination with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Welcome splash shown at startup.
    Splash,
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Hospital list, greeting whoever logged in.
    Hospitals {
        /// Username forwarded from the login form.
        username: Option<String>,
    },
}

impl Route {
    /// Returns whether two routes point at the same screen, ignoring parameters.
    #[must_use]
    pub fn same_screen(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Returns route name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Login => "login",
            Self::Register => "register",
            Self::Hospitals { .. } => "hospitals",
        }
    }
}

/// Stack navigator.
///
/// Navigating to a screen already on the stack pops back to it instead of
/// pushing a second copy.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Creates navigator rooted at `root`.
    #[must_use]
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Returns the route on top of the stack.
    #[must_use]
    pub fn current(&self) -> &Route {
        // The stack never drops below its root.
        &self.stack[self.stack.len() - 1]
    }

    /// Returns number of routes on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Moves to `route`.
    pub fn navigate(&mut self, route: Route) {
        if let Some(pos) = self.stack.iter().position(|r| r.same_screen(&route)) {
            debug!(route = route.name(), depth = pos + 1, "Popping back to route");
            self.stack.truncate(pos + 1);
            self.stack[pos] = route;
        } else {
            debug!(route = route.name(), "Pushing route");
            self.stack.push(route);
        }
    }

    /// Replaces the current route without growing the stack.
    pub fn replace(&mut self, route: Route) {
        debug!(route = route.name(), "Replacing route");
        let top = self.stack.len() - 1;
        self.stack[top] = route;
    }

    /// Pops the current route.
    ///
    /// Returns `false` at the root, where there is nowhere to go back to.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospitals(username: &str) -> Route {
        Route::Hospitals {
            username: Some(username.to_string()),
        }
    }

    #[test]
    fn test_push_and_back() {
        let mut nav = Navigator::new(Route::Login);
        nav.navigate(hospitals("ann"));

        assert_eq!(nav.current(), &hospitals("ann"));
        assert!(nav.back());
        assert_eq!(nav.current(), &Route::Login);
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_navigate_to_existing_pops_back() {
        let mut nav = Navigator::new(Route::Login);
        nav.navigate(Route::Register);
        nav.navigate(Route::Login);

        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), &Route::Login);
    }

    #[test]
    fn test_navigate_replaces_params() {
        let mut nav = Navigator::new(Route::Login);
        nav.navigate(hospitals("ann"));
        nav.navigate(hospitals("bob"));

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current(), &hospitals("bob"));
    }

    #[test]
    fn test_replace_splash_with_login() {
        let mut nav = Navigator::new(Route::Splash);
        nav.replace(Route::Login);

        assert_eq!(nav.current(), &Route::Login);
        assert!(!nav.back());
    }
}
