//! The launcher tying the five demo apps into one session.

use crate::infrastructure::{CatalogError, SeedCatalog};

use super::jobs::JobsApp;
use super::portfolio::PortfolioApp;
use super::projects::ProjectsApp;
use super::quiz::QuizApp;
use super::shop::ShopApp;

/// Which app owns the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveApp {
    Launcher,
    Shop,
    Jobs,
    Projects,
    Quiz,
    Portfolio,
}

/// One session of the suite.
///
/// Every app keeps its own state for the lifetime of the session, so leaving
/// an app and coming back finds it exactly as it was. The apps are owned and
/// passed around explicitly; there is no global registry.
#[derive(Debug)]
pub struct Suite {
    pub active: ActiveApp,
    pub launcher_cursor: usize,
    pub shop: ShopApp,
    pub jobs: JobsApp,
    pub projects: ProjectsApp,
    pub quiz: QuizApp,
    pub portfolio: PortfolioApp,
}

/// Launcher menu entries, in display order.
pub const APPS: [(ActiveApp, &str, &str); 5] = [
    (
        ActiveApp::Shop,
        "ShopNow",
        "Browse a product catalog and manage a shopping cart",
    ),
    (
        ActiveApp::Jobs,
        "JobBoard",
        "Search job listings and read the details",
    ),
    (
        ActiveApp::Projects,
        "TaskFlow",
        "Track projects and the tasks inside them",
    ),
    (
        ActiveApp::Quiz,
        "QuizMaker",
        "Build multiple-choice quizzes and take them",
    ),
    (
        ActiveApp::Portfolio,
        "Portfolio",
        "A personal profile page",
    ),
];

impl Suite {
    /// Builds the session, decoding the embedded seed catalogs.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self {
            active: ActiveApp::Launcher,
            launcher_cursor: 0,
            shop: ShopApp::new(SeedCatalog::products()?),
            jobs: JobsApp::new(SeedCatalog::jobs()?),
            projects: ProjectsApp::new(),
            quiz: QuizApp::new(),
            portfolio: PortfolioApp::new(SeedCatalog::profile()?),
        })
    }

    pub fn select_next(&mut self) {
        if self.launcher_cursor < APPS.len() - 1 {
            self.launcher_cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.launcher_cursor = self.launcher_cursor.saturating_sub(1);
    }

    pub fn launch_selected(&mut self) {
        let (app, _, _) = APPS[self.launcher_cursor];
        self.launch(app);
    }

    pub fn launch(&mut self, app: ActiveApp) {
        self.active = app;
    }

    pub fn exit_to_launcher(&mut self) {
        self.active = ActiveApp::Launcher;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_loads_seed_catalogs() {
        let suite = Suite::new().unwrap();
        assert_eq!(suite.active, ActiveApp::Launcher);
        assert!(!suite.shop.products.is_empty());
        assert!(!suite.jobs.jobs.is_empty());
        assert!(!suite.portfolio.profile.name.is_empty());
    }

    #[test]
    fn test_launch_selected_follows_cursor() {
        let mut suite = Suite::new().unwrap();
        suite.select_next();
        suite.select_next();
        suite.launch_selected();
        assert_eq!(suite.active, ActiveApp::Projects);
    }

    #[test]
    fn test_app_state_survives_exit_to_launcher() {
        let mut suite = Suite::new().unwrap();
        suite.launch(ActiveApp::Shop);
        suite.shop.add_selected_to_cart();

        suite.exit_to_launcher();
        suite.launch(ActiveApp::Shop);

        assert_eq!(suite.shop.cart_count(), 1);
    }
}
