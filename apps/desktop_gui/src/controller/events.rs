//! Routes and discrete UI actions.

use clap::ValueEnum;
use content::domain::{CaseStudyId, Perspective};

/// In-app destinations. The enum doubles as the `--page` CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Route {
    Home,
    Cases,
    Architecture,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Cases, Route::Architecture, Route::Contact];

    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "System",
            Route::Cases => "Cases",
            Route::Architecture => "Architecture",
            Route::Contact => "Contact",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Cases => "cases",
            Route::Architecture => "architecture",
            Route::Contact => "contact",
        }
    }
}

/// One discrete user intent. Panels queue these while rendering; the app
/// shell applies them after the frame's panels have run, in queue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Navigate(Route),
    SelectCase(CaseStudyId),
    SelectPerspective {
        case: CaseStudyId,
        perspective: Perspective,
    },
    OpenExternal(String),
    SetStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_from_cli_slugs() {
        for route in Route::ALL {
            let parsed = Route::from_str(route.slug(), true).expect("slug parses");
            assert_eq!(parsed, route);
        }
        assert!(Route::from_str("nowhere", true).is_err());
    }

    #[test]
    fn nav_labels_match_the_top_bar() {
        let labels: Vec<&str> = Route::ALL.iter().map(|r| r.nav_label()).collect();
        assert_eq!(labels, vec!["System", "Cases", "Architecture", "Contact"]);
    }
}
