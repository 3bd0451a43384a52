//! The app's route table.

/// Every navigable page in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    Home,
    Dashboard,
    Payment,
}

impl Route {
    /// The route's URL path.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Home => "/home",
            Route::Dashboard => "/dashboard",
            Route::Payment => "/payment",
        }
    }

    /// Reverse lookup from a URL path.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/home" => Some(Route::Home),
            "/dashboard" => Some(Route::Dashboard),
            "/payment" => Some(Route::Payment),
            _ => None,
        }
    }
}
