use crate::app::error::{AppError, Result};

/// A single navigation entry: a URL-style path, a stable symbolic name,
/// and the view rendered while the path is current.
///
/// Views are opaque to the routing layer; it stores and hands them back
/// by identity and never looks inside.
#[derive(Debug, Clone)]
pub struct Route<V> {
    pub path: &'static str,
    pub name: &'static str,
    pub view: V,
}

/// The application's navigable surface: an ordered, immutable list of
/// routes with unique paths and names.
///
/// Built once at startup from a literal list; there is no registration
/// after construction and no wildcard or parametric matching.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table from `routes`, preserving registration order.
    ///
    /// Fails on an empty list or a duplicate path or name; construction
    /// is the single place those invariants are enforced.
    pub fn new(routes: Vec<Route<V>>) -> Result<Self> {
        if routes.is_empty() {
            return Err(AppError::RouteTable("no routes registered".to_string()));
        }
        for (i, route) in routes.iter().enumerate() {
            for earlier in &routes[..i] {
                if earlier.path == route.path {
                    return Err(AppError::RouteTable(format!(
                        "duplicate path \"{}\"",
                        route.path
                    )));
                }
                if earlier.name == route.name {
                    return Err(AppError::RouteTable(format!(
                        "duplicate name \"{}\"",
                        route.name
                    )));
                }
            }
        }
        Ok(Self { routes })
    }

    /// Exact-match lookup of `path`
    pub fn resolve(&self, path: &str) -> Result<&Route<V>> {
        self.index_of(path).map(|index| &self.routes[index])
    }

    /// The route unknown paths fall back to: the first one registered
    pub fn default_route(&self) -> &Route<V> {
        &self.routes[0]
    }

    /// All routes, in registration order
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub(crate) fn index_of(&self, path: &str) -> Result<usize> {
        self.routes
            .iter()
            .position(|route| route.path == path)
            .ok_or_else(|| AppError::UnknownPath(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            Route { path: "/", name: "timer", view: "timer view" },
            Route { path: "/settings", name: "settings", view: "settings view" },
            Route { path: "/contact", name: "contact", view: "contact view" },
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_known_paths() {
        let table = table();
        assert_eq!(table.resolve("/").unwrap().view, "timer view");
        assert_eq!(table.resolve("/settings").unwrap().view, "settings view");
        assert_eq!(table.resolve("/contact").unwrap().view, "contact view");
    }

    #[test]
    fn test_resolve_unknown_path() {
        let err = table().resolve("/missing").unwrap_err();
        assert!(matches!(err, AppError::UnknownPath(_)));
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn test_resolve_is_exact_match() {
        // No prefix or trailing-slash matching
        assert!(table().resolve("/settings/").is_err());
        assert!(table().resolve("/set").is_err());
        assert!(table().resolve("").is_err());
    }

    #[test]
    fn test_default_route_is_first() {
        assert_eq!(table().default_route().name, "timer");
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            Route { path: "/", name: "timer", view: () },
            Route { path: "/", name: "settings", view: () },
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate path"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            Route { path: "/", name: "timer", view: () },
            Route { path: "/other", name: "timer", view: () },
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate name"));
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = RouteTable::<()>::new(Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::RouteTable(_)));
    }
}
