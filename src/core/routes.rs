use serde::Serialize;

/// Static entry in the navigation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    pub path: &'static str,
}

pub const ROUTES: [RouteDef; 2] = [
    RouteDef {
        name: "home",
        path: "/",
    },
    RouteDef {
        name: "pokemon",
        path: "/pokemon/:id",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollPosition {
    pub top: u32,
}

/// A resolved front-end location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Route {
    Home,
    Pokemon { id: String },
}

impl Route {
    /// Resolves a hash-history location (`#/pokemon/25`) or a bare path.
    /// Query strings are ignored; unknown paths resolve to `None`.
    pub fn resolve(location: &str) -> Option<Route> {
        let path = location.trim().trim_start_matches('#');
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["pokemon", id] => Some(Route::Pokemon {
                id: (*id).to_string(),
            }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => ROUTES[0].name,
            Route::Pokemon { .. } => ROUTES[1].name,
        }
    }

    /// Hash-history href for this route.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Pokemon { id } => format!("#{}", ROUTES[1].path.replace(":id", id)),
        }
    }

    /// Every navigation starts at the top of the page.
    pub fn scroll_behavior(&self) -> ScrollPosition {
        ScrollPosition { top: 0 }
    }
}
