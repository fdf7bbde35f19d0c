//! Project tracker state: project creation, task forms, completion progress.

use crate::domain::{aggregates, Collection, Project, Task, ValidationError, ValidationResult};
use crate::infrastructure::IdFactory;

/// Pages of the project tracker app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectsPage {
    List,
    Create,
    Detail,
}

/// Focused field of the create-project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
}

/// Focus on the detail page: one of the add-task form fields, or the task
/// list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Assignee,
    DueDate,
    TaskList,
}

#[derive(Debug)]
pub struct ProjectsApp {
    pub projects: Collection<Project>,
    pub page: ProjectsPage,
    pub selected: usize,
    /// Identifier of the project on the detail page, re-resolved per read.
    pub open_project: Option<String>,
    pub form_title: String,
    pub form_description: String,
    pub form_focus: ProjectField,
    pub task_title: String,
    pub task_assignee: String,
    pub task_due: String,
    pub task_focus: TaskField,
    pub selected_task: usize,
    pub status_message: Option<String>,
}

impl Default for ProjectsApp {
    fn default() -> Self {
        Self {
            projects: Collection::new(),
            page: ProjectsPage::List,
            selected: 0,
            open_project: None,
            form_title: String::new(),
            form_description: String::new(),
            form_focus: ProjectField::Title,
            task_title: String::new(),
            task_assignee: String::new(),
            task_due: String::new(),
            task_focus: TaskField::Title,
            selected_task: 0,
            status_message: None,
        }
    }
}

impl ProjectsApp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_create(&mut self) {
        self.page = ProjectsPage::Create;
        self.form_title.clear();
        self.form_description.clear();
        self.form_focus = ProjectField::Title;
        self.status_message = None;
    }

    pub fn cancel_create(&mut self) {
        self.page = ProjectsPage::List;
        self.status_message = None;
    }

    pub fn focus_next_form_field(&mut self) {
        self.form_focus = match self.form_focus {
            ProjectField::Title => ProjectField::Description,
            ProjectField::Description => ProjectField::Title,
        };
    }

    pub fn push_form_char(&mut self, ch: char) {
        match self.form_focus {
            ProjectField::Title => self.form_title.push(ch),
            ProjectField::Description => self.form_description.push(ch),
        }
    }

    pub fn pop_form_char(&mut self) {
        match self.form_focus {
            ProjectField::Title => self.form_title.pop(),
            ProjectField::Description => self.form_description.pop(),
        };
    }

    /// Creates the drafted project. A blank title blocks the submission
    /// before the store is touched.
    pub fn submit_project(&mut self) {
        if let Err(error) = require_filled("project title", &self.form_title) {
            self.status_message = Some(error.to_string());
            return;
        }
        let project = Project::new(
            IdFactory::new_id(),
            self.form_title.trim().to_string(),
            self.form_description.trim().to_string(),
        );
        self.projects = self.projects.add(project);
        self.page = ProjectsPage::List;
        self.status_message = Some("Project created".to_string());
    }

    pub fn select_next(&mut self) {
        if self.projects.len() > 0 && self.selected < self.projects.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn open_selected(&mut self) {
        if let Some(project) = self.projects.get(self.selected) {
            self.open_project = Some(project.id.clone());
            self.page = ProjectsPage::Detail;
            self.task_title.clear();
            self.task_assignee.clear();
            self.task_due.clear();
            self.task_focus = TaskField::Title;
            self.selected_task = 0;
            self.status_message = None;
        }
    }

    /// The project behind the detail page, if it still exists.
    pub fn open(&self) -> Option<&Project> {
        self.open_project
            .as_deref()
            .and_then(|id| self.projects.find(id))
    }

    pub fn back_to_list(&mut self) {
        self.page = ProjectsPage::List;
        self.open_project = None;
        self.status_message = None;
    }

    pub fn focus_next_task_field(&mut self) {
        self.task_focus = match self.task_focus {
            TaskField::Title => TaskField::Assignee,
            TaskField::Assignee => TaskField::DueDate,
            TaskField::DueDate => TaskField::TaskList,
            TaskField::TaskList => TaskField::Title,
        };
    }

    pub fn push_task_char(&mut self, ch: char) {
        match self.task_focus {
            TaskField::Title => self.task_title.push(ch),
            TaskField::Assignee => self.task_assignee.push(ch),
            TaskField::DueDate => self.task_due.push(ch),
            TaskField::TaskList => {}
        }
    }

    pub fn pop_task_char(&mut self) {
        match self.task_focus {
            TaskField::Title => {
                self.task_title.pop();
            }
            TaskField::Assignee => {
                self.task_assignee.pop();
            }
            TaskField::DueDate => {
                self.task_due.pop();
            }
            TaskField::TaskList => {}
        }
    }

    /// Appends the drafted task to the open project. Assignee and due date
    /// are optional; the title is not.
    pub fn submit_task(&mut self) {
        let Some(project_id) = self.open_project.clone() else {
            return;
        };
        if let Err(error) = require_filled("task title", &self.task_title) {
            self.status_message = Some(error.to_string());
            return;
        }
        let task = Task::new(
            IdFactory::new_id(),
            self.task_title.trim().to_string(),
            self.task_assignee.trim().to_string(),
            self.task_due.trim().to_string(),
        );
        self.projects = self.projects.add_item(&project_id, task);
        self.task_title.clear();
        self.task_assignee.clear();
        self.task_due.clear();
        self.task_focus = TaskField::Title;
        self.status_message = None;
    }

    pub fn select_next_task(&mut self) {
        let count = self.open().map(|project| project.tasks.len()).unwrap_or(0);
        if count > 0 && self.selected_task < count - 1 {
            self.selected_task += 1;
        }
    }

    pub fn select_previous_task(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    /// Flips the highlighted task's completion flag without disturbing
    /// sibling tasks or sibling projects.
    pub fn toggle_selected_task(&mut self) {
        let Some(project_id) = self.open_project.clone() else {
            return;
        };
        let Some(task_id) = self
            .open()
            .and_then(|project| project.tasks.get(self.selected_task))
            .map(|task| task.id.clone())
        else {
            return;
        };
        self.projects = self.projects.update_item(&project_id, &task_id, |task| Task {
            completed: !task.completed,
            ..task.clone()
        });
    }

    /// Completion ratio of the open project, recomputed on every call.
    pub fn open_progress(&self) -> f64 {
        self.open()
            .map(|project| aggregates::completion_ratio(&project.tasks))
            .unwrap_or(0.0)
    }
}

fn require_filled(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into_form(app: &mut ProjectsApp, text: &str) {
        for ch in text.chars() {
            app.push_form_char(ch);
        }
    }

    fn type_into_task(app: &mut ProjectsApp, text: &str) {
        for ch in text.chars() {
            app.push_task_char(ch);
        }
    }

    fn app_with_project(title: &str) -> ProjectsApp {
        let mut app = ProjectsApp::new();
        app.start_create();
        type_into_form(&mut app, title);
        app.submit_project();
        app
    }

    #[test]
    fn test_submit_project_requires_title() {
        let mut app = ProjectsApp::new();
        app.start_create();
        type_into_form(&mut app, "   ");
        app.submit_project();

        assert_eq!(app.page, ProjectsPage::Create);
        assert!(app.projects.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("project title cannot be empty")
        );
    }

    #[test]
    fn test_submit_project_appends_and_returns_to_list() {
        let app = app_with_project("Website Redesign");

        assert_eq!(app.page, ProjectsPage::List);
        assert_eq!(app.projects.len(), 1);
        assert_eq!(app.projects.get(0).unwrap().title, "Website Redesign");
        assert_eq!(app.status_message.as_deref(), Some("Project created"));
    }

    #[test]
    fn test_open_selected_then_deletion_yields_not_found() {
        let mut app = app_with_project("Website Redesign");
        app.open_selected();
        assert!(app.open().is_some());

        let id = app.open_project.clone().unwrap();
        app.projects = app.projects.remove(&id);

        assert_eq!(app.page, ProjectsPage::Detail);
        assert!(app.open().is_none());
    }

    #[test]
    fn test_submit_task_requires_title() {
        let mut app = app_with_project("Website Redesign");
        app.open_selected();
        app.submit_task();

        assert_eq!(
            app.status_message.as_deref(),
            Some("task title cannot be empty")
        );
        assert!(app.open().unwrap().tasks.is_empty());
    }

    #[test]
    fn test_submit_task_defaults_optional_fields() {
        let mut app = app_with_project("Website Redesign");
        app.open_selected();
        type_into_task(&mut app, "Draft wireframes");
        app.submit_task();

        let task = app.open().unwrap().tasks.get(0).unwrap();
        assert_eq!(task.title, "Draft wireframes");
        assert_eq!(task.assignee, "Unassigned");
        assert_eq!(task.due_date, "No due date");
        assert!(!task.completed);
    }

    #[test]
    fn test_progress_follows_task_completion() {
        let mut app = app_with_project("Website Redesign");
        app.open_selected();
        assert_eq!(app.open_progress(), 0.0);

        type_into_task(&mut app, "Draft wireframes");
        app.submit_task();
        type_into_task(&mut app, "Ship landing page");
        app.submit_task();
        app.toggle_selected_task();

        assert!((app.open_progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toggle_leaves_sibling_projects_untouched() {
        let mut app = app_with_project("Website Redesign");
        app.start_create();
        type_into_form(&mut app, "API Cleanup");
        app.submit_project();

        app.selected = 0;
        app.open_selected();
        type_into_task(&mut app, "Draft wireframes");
        app.submit_task();

        let sibling_before = app.projects.get(1).unwrap().clone();
        app.toggle_selected_task();
        let sibling_after = app.projects.get(1).unwrap();

        assert_eq!(sibling_after, &sibling_before);
    }

    #[test]
    fn test_toggle_twice_restores_pending_state() {
        let mut app = app_with_project("Website Redesign");
        app.open_selected();
        type_into_task(&mut app, "Draft wireframes");
        app.submit_task();

        app.toggle_selected_task();
        app.toggle_selected_task();

        assert!(!app.open().unwrap().tasks.get(0).unwrap().completed);
    }
}
