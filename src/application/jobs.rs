//! Job board state: search, listing navigation, detail view.

use crate::domain::{Collection, Job};

/// Pages of the job board app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobsPage {
    Home,
    Listings,
    Detail,
}

#[derive(Debug)]
pub struct JobsApp {
    pub jobs: Collection<Job>,
    pub page: JobsPage,
    /// Live search input, matched case-insensitively against title, company,
    /// and location.
    pub search: String,
    pub selected: usize,
    /// Identifier of the job on the detail page. Re-resolved on every read;
    /// a stale identifier renders the not-found fallback.
    pub viewed_job: Option<String>,
    pub status_message: Option<String>,
}

impl JobsApp {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: jobs.into_iter().collect(),
            page: JobsPage::Home,
            search: String::new(),
            selected: 0,
            viewed_job: None,
            status_message: None,
        }
    }

    pub fn browse_listings(&mut self) {
        self.page = JobsPage::Listings;
        self.status_message = None;
    }

    pub fn go_home(&mut self) {
        self.page = JobsPage::Home;
        self.status_message = None;
    }

    pub fn visible_jobs(&self) -> Vec<&Job> {
        if self.search.trim().is_empty() {
            return self.jobs.iter().collect();
        }
        let needle = self.search.to_lowercase();
        self.jobs.find_all(|job| {
            job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
                || job.location.to_lowercase().contains(&needle)
        })
    }

    pub fn push_search(&mut self, ch: char) {
        self.search.push(ch);
        self.selected = 0;
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.selected = 0;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let count = self.visible_jobs().len();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn view_selected(&mut self) {
        let id = self
            .visible_jobs()
            .get(self.selected)
            .map(|job| job.id.clone());
        if let Some(id) = id {
            self.viewed_job = Some(id);
            self.page = JobsPage::Detail;
            self.status_message = None;
        }
    }

    /// The job behind the detail page, if it still exists.
    pub fn viewed(&self) -> Option<&Job> {
        self.viewed_job.as_deref().and_then(|id| self.jobs.find(id))
    }

    pub fn back_to_listings(&mut self) {
        self.page = JobsPage::Listings;
        self.viewed_job = None;
        self.status_message = None;
    }

    pub fn apply_to_viewed(&mut self) {
        if let Some(job) = self.viewed() {
            self.status_message = Some(format!("Application submitted for {}", job.title));
        }
    }
}
