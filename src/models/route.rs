//! Navigation routes

use std::fmt;

/// A page of the app, addressed by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Home,
    Transfer,
    History,
    TransactionDetail(String),
}

impl Route {
    /// Resolve a path such as `/transaction/TXN001`. Unknown paths resolve to `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(trimmed);

        match trimmed {
            "/" | "" => Some(Route::Root),
            "/home" => Some(Route::Home),
            "/transfer" => Some(Route::Transfer),
            "/history" => Some(Route::History),
            other => {
                let id = other.strip_prefix("/transaction/")?;
                if id.is_empty() || id.contains('/') {
                    None
                } else {
                    Some(Route::TransactionDetail(id.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Root => f.write_str("/"),
            Route::Home => f.write_str("/home"),
            Route::Transfer => f.write_str("/transfer"),
            Route::History => f.write_str("/history"),
            Route::TransactionDetail(id) => write!(f, "/transaction/{}", id),
        }
    }
}
