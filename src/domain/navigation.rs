use strum::{EnumIter, IntoEnumIterator};

/// Client-side route. The active tab is always derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum Route {
    #[default]
    Stock,
    Heatmap,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Stock => "/",
            Route::Heatmap => "/heatmap",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            Route::Stock => "Stock Page",
            Route::Heatmap => "Heatmap Page",
        }
    }

    /// Resolve a location pathname. Trailing slashes are ignored; unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Stock),
            "/heatmap" => Some(Route::Heatmap),
            _ => None,
        }
    }

    /// Tabs in display order.
    pub fn tabs() -> impl Iterator<Item = Route> {
        Route::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::tabs() {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn resolves_paths() {
        assert_eq!(Route::from_path(""), Some(Route::Stock));
        assert_eq!(Route::from_path("/heatmap/"), Some(Route::Heatmap));
        assert_eq!(Route::from_path("/settings"), None);
    }
}
