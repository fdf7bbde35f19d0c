use crate::application::{
    ActiveApp, JobsPage, PortfolioSection, ProjectsPage, QuizPage, ShopPage, Suite, TaskField,
};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(suite: &mut Suite, key: KeyCode, modifiers: KeyModifiers) {
        match suite.active {
            ActiveApp::Launcher => Self::handle_launcher(suite, key),
            ActiveApp::Shop => Self::handle_shop(suite, key),
            ActiveApp::Jobs => Self::handle_jobs(suite, key),
            ActiveApp::Projects => Self::handle_projects(suite, key),
            ActiveApp::Quiz => Self::handle_quiz(suite, key, modifiers),
            ActiveApp::Portfolio => Self::handle_portfolio(suite, key),
        }
    }

    fn handle_launcher(suite: &mut Suite, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => suite.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => suite.select_next(),
            KeyCode::Enter => suite.launch_selected(),
            _ => {}
        }
    }

    fn handle_shop(suite: &mut Suite, key: KeyCode) {
        let app = &mut suite.shop;
        match app.page {
            ShopPage::Storefront => match key {
                KeyCode::Up | KeyCode::Char('k') => app.select_previous_product(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next_product(),
                KeyCode::Char('f') => app.cycle_category(),
                KeyCode::Enter => app.add_selected_to_cart(),
                KeyCode::Char('c') => app.open_cart(),
                KeyCode::Esc => suite.exit_to_launcher(),
                _ => {}
            },
            ShopPage::Cart => match key {
                KeyCode::Up | KeyCode::Char('k') => app.select_previous_line(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next_line(),
                KeyCode::Char('+') => app.increment_selected_line(),
                KeyCode::Char('-') => app.decrement_selected_line(),
                KeyCode::Char('d') => app.remove_selected_line(),
                KeyCode::Char('x') => app.clear_cart(),
                KeyCode::Enter => app.checkout(),
                KeyCode::Esc => app.back_to_storefront(),
                _ => {}
            },
        }
    }

    fn handle_jobs(suite: &mut Suite, key: KeyCode) {
        let app = &mut suite.jobs;
        match app.page {
            JobsPage::Home => match key {
                KeyCode::Enter => app.browse_listings(),
                KeyCode::Esc => suite.exit_to_launcher(),
                _ => {}
            },
            // The listings page doubles as a live search box, so plain
            // characters feed the query and navigation sticks to the arrows.
            JobsPage::Listings => match key {
                KeyCode::Up => app.select_previous(),
                KeyCode::Down => app.select_next(),
                KeyCode::Enter => app.view_selected(),
                KeyCode::Backspace => app.pop_search(),
                KeyCode::Char(ch) => app.push_search(ch),
                KeyCode::Esc => app.go_home(),
                _ => {}
            },
            JobsPage::Detail => match key {
                KeyCode::Char('a') => app.apply_to_viewed(),
                KeyCode::Esc => app.back_to_listings(),
                _ => {}
            },
        }
    }

    fn handle_projects(suite: &mut Suite, key: KeyCode) {
        let app = &mut suite.projects;
        match app.page {
            ProjectsPage::List => match key {
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter => app.open_selected(),
                KeyCode::Char('n') => app.start_create(),
                KeyCode::Esc => suite.exit_to_launcher(),
                _ => {}
            },
            ProjectsPage::Create => match key {
                KeyCode::Tab => app.focus_next_form_field(),
                KeyCode::Backspace => app.pop_form_char(),
                KeyCode::Enter => app.submit_project(),
                KeyCode::Char(ch) => app.push_form_char(ch),
                KeyCode::Esc => app.cancel_create(),
                _ => {}
            },
            ProjectsPage::Detail => match key {
                KeyCode::Tab => app.focus_next_task_field(),
                KeyCode::Up => app.select_previous_task(),
                KeyCode::Down => app.select_next_task(),
                KeyCode::Enter => {
                    if app.task_focus == TaskField::TaskList {
                        app.toggle_selected_task();
                    } else {
                        app.submit_task();
                    }
                }
                KeyCode::Backspace => app.pop_task_char(),
                KeyCode::Char(ch) => app.push_task_char(ch),
                KeyCode::Esc => app.back_to_list(),
                _ => {}
            },
        }
    }

    fn handle_quiz(suite: &mut Suite, key: KeyCode, modifiers: KeyModifiers) {
        let app = &mut suite.quiz;
        match app.page {
            QuizPage::Home => match key {
                KeyCode::Char('n') => app.start_builder(),
                KeyCode::Enter => app.open_listing(),
                KeyCode::Esc => suite.exit_to_launcher(),
                _ => {}
            },
            QuizPage::Builder => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    match key {
                        KeyCode::Char('r') => app.mark_correct(),
                        KeyCode::Char('a') => app.add_draft_question(),
                        KeyCode::Char('d') => app.remove_draft_question(),
                        _ => {}
                    }
                    return;
                }
                match key {
                    KeyCode::Tab => app.focus_next_builder_field(),
                    KeyCode::PageDown => app.next_draft_question(),
                    KeyCode::PageUp => app.previous_draft_question(),
                    KeyCode::Backspace => app.pop_builder_char(),
                    KeyCode::Enter => app.submit_quiz(),
                    KeyCode::Char(ch) => app.push_builder_char(ch),
                    KeyCode::Esc => app.go_home(),
                    _ => {}
                }
            }
            QuizPage::Listing => match key {
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter => app.start_selected(),
                KeyCode::Char('n') => app.start_builder(),
                KeyCode::Esc => app.go_home(),
                _ => {}
            },
            QuizPage::Take => {
                if app.show_results {
                    match key {
                        KeyCode::Char('r') => app.retake(),
                        KeyCode::Esc => app.back_to_listing(),
                        _ => {}
                    }
                    return;
                }
                match key {
                    KeyCode::Char(ch @ '1'..='4') => {
                        app.select_option(ch as usize - '1' as usize);
                    }
                    KeyCode::Char('n') | KeyCode::Right => app.next_question(),
                    KeyCode::Char('p') | KeyCode::Left => app.previous_question(),
                    KeyCode::Esc => app.back_to_listing(),
                    _ => {}
                }
            }
        }
    }

    fn handle_portfolio(suite: &mut Suite, key: KeyCode) {
        let app = &mut suite.portfolio;
        match key {
            KeyCode::Right | KeyCode::Char('l') => app.next_section(),
            KeyCode::Left | KeyCode::Char('h') => app.previous_section(),
            KeyCode::Char('1') => app.jump_to(PortfolioSection::Hero),
            KeyCode::Char('2') => app.jump_to(PortfolioSection::Skills),
            KeyCode::Char('3') => app.jump_to(PortfolioSection::Experience),
            KeyCode::Char('4') => app.jump_to(PortfolioSection::Certifications),
            KeyCode::Char('5') => app.jump_to(PortfolioSection::Contact),
            KeyCode::Esc => suite.exit_to_launcher(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite() -> Suite {
        Suite::new().unwrap()
    }

    fn press(suite: &mut Suite, key: KeyCode) {
        InputHandler::handle_key_event(suite, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_launcher_enter_launches_highlighted_app() {
        let mut suite = suite();
        press(&mut suite, KeyCode::Down);
        press(&mut suite, KeyCode::Enter);
        assert_eq!(suite.active, ActiveApp::Jobs);
    }

    #[test]
    fn test_escape_walks_back_to_launcher() {
        let mut suite = suite();
        press(&mut suite, KeyCode::Enter); // launch ShopNow
        assert_eq!(suite.active, ActiveApp::Shop);

        press(&mut suite, KeyCode::Esc);
        assert_eq!(suite.active, ActiveApp::Launcher);
    }

    #[test]
    fn test_shop_enter_adds_highlighted_product() {
        let mut suite = suite();
        suite.launch(ActiveApp::Shop);
        press(&mut suite, KeyCode::Down);
        press(&mut suite, KeyCode::Enter);

        assert_eq!(suite.shop.cart_count(), 1);
    }

    #[test]
    fn test_jobs_listing_characters_feed_the_search() {
        let mut suite = suite();
        suite.launch(ActiveApp::Jobs);
        press(&mut suite, KeyCode::Enter);
        press(&mut suite, KeyCode::Char('j'));
        press(&mut suite, KeyCode::Char('k'));

        assert_eq!(suite.jobs.search, "jk");
    }

    #[test]
    fn test_quiz_answer_keys_map_to_option_indices() {
        let mut suite = suite();
        suite.launch(ActiveApp::Quiz);
        suite.quiz.quizzes = suite.quiz.quizzes.add(crate::domain::Quiz {
            id: "q".to_string(),
            title: "Quiz".to_string(),
            questions: std::iter::once(crate::domain::Question {
                id: "q1".to_string(),
                text: "?".to_string(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_option: 2,
            })
            .collect(),
        });
        press(&mut suite, KeyCode::Enter); // listing
        press(&mut suite, KeyCode::Enter); // start quiz
        press(&mut suite, KeyCode::Char('3'));

        assert_eq!(suite.quiz.selected_answer(), Some(2));
    }

    #[test]
    fn test_project_detail_enter_toggles_when_list_focused() {
        let mut suite = suite();
        suite.launch(ActiveApp::Projects);
        press(&mut suite, KeyCode::Char('n'));
        for ch in "Website Redesign".chars() {
            press(&mut suite, KeyCode::Char(ch));
        }
        press(&mut suite, KeyCode::Enter); // create project
        press(&mut suite, KeyCode::Enter); // open detail
        for ch in "Draft wireframes".chars() {
            press(&mut suite, KeyCode::Char(ch));
        }
        press(&mut suite, KeyCode::Enter); // add task

        press(&mut suite, KeyCode::Tab); // assignee
        press(&mut suite, KeyCode::Tab); // due date
        press(&mut suite, KeyCode::Tab); // task list
        press(&mut suite, KeyCode::Enter); // toggle

        let project = suite.projects.open().unwrap();
        assert!(project.tasks.get(0).unwrap().completed);
    }
}
