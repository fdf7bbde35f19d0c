use crate::application::{
    ActiveApp, BuilderFocus, JobsApp, JobsPage, PortfolioApp, PortfolioSection, ProjectField,
    ProjectsApp, ProjectsPage, QuizApp, QuizPage, ShopApp, ShopPage, Suite, TaskField, APPS,
};
use crate::domain::aggregates;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, suite: &Suite) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, suite, chunks[0]);

    match suite.active {
        ActiveApp::Launcher => render_launcher(f, suite, chunks[1]),
        ActiveApp::Shop => render_shop(f, &suite.shop, chunks[1]),
        ActiveApp::Jobs => render_jobs(f, &suite.jobs, chunks[1]),
        ActiveApp::Projects => render_projects(f, &suite.projects, chunks[1]),
        ActiveApp::Quiz => render_quiz(f, &suite.quiz, chunks[1]),
        ActiveApp::Portfolio => render_portfolio(f, &suite.portfolio, chunks[1]),
    }

    render_status_bar(f, suite, chunks[2]);
}

fn render_header(f: &mut Frame, suite: &Suite, area: Rect) {
    let title = match suite.active {
        ActiveApp::Launcher => "kiosk - demo app suite",
        ActiveApp::Shop => "ShopNow",
        ActiveApp::Jobs => "JobBoard",
        ActiveApp::Projects => "TaskFlow",
        ActiveApp::Quiz => "QuizMaker",
        ActiveApp::Portfolio => "Portfolio",
    };
    let header = Paragraph::new(title).style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_launcher(f: &mut Frame, suite: &Suite, area: Rect) {
    let mut rows = Vec::new();
    for (index, (_, name, blurb)) in APPS.iter().enumerate() {
        let style = if index == suite.launcher_cursor {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(Row::new(vec![
            Cell::from(*name).style(style.add_modifier(Modifier::BOLD)),
            Cell::from(*blurb).style(style),
        ]));
    }

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(0)])
        .block(Block::default().borders(Borders::ALL).title("Apps"))
        .column_spacing(2);
    f.render_widget(table, area);
}

// --- storefront ---

fn render_shop(f: &mut Frame, app: &ShopApp, area: Rect) {
    match app.page {
        ShopPage::Storefront => render_storefront(f, app, area),
        ShopPage::Cart => render_cart(f, app, area),
    }
}

fn render_storefront(f: &mut Frame, app: &ShopApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let filter = match &app.category {
        Some(category) => format!("Category: {}", category),
        None => "Category: All".to_string(),
    };
    f.render_widget(
        Paragraph::new(filter).style(Style::default().fg(Color::Yellow)),
        chunks[0],
    );

    let products = app.visible_products();
    let mut rows = Vec::new();
    for (index, product) in products.iter().enumerate() {
        let style = if index == app.selected_product {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(Row::new(vec![
            Cell::from(product.name.clone()).style(style),
            Cell::from(product.category.clone()).style(style),
            Cell::from(format!("${:.2}", product.price)).style(style),
            Cell::from(format!("{} in stock", product.in_stock)).style(style),
        ]));
    }
    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec!["Product", "Category", "Price", "Stock"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(Block::default().borders(Borders::ALL).title("Products"))
    .column_spacing(1);
    f.render_widget(table, chunks[1]);

    let description = products
        .get(app.selected_product)
        .map(|product| product.description.clone())
        .unwrap_or_else(|| "No products found in this category.".to_string());
    f.render_widget(
        Paragraph::new(description)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Details")),
        chunks[2],
    );
}

fn render_cart(f: &mut Frame, app: &ShopApp, area: Rect) {
    if app.cart.is_empty() {
        f.render_widget(
            Paragraph::new("Your cart is empty. Start shopping!")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Your Cart")),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let mut rows = Vec::new();
    for (index, line) in app.cart.iter().enumerate() {
        let style = if index == app.selected_line {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(Row::new(vec![
            Cell::from(line.name.clone()).style(style),
            Cell::from(format!("${:.2}", line.price)).style(style),
            Cell::from(format!("x{}", line.quantity)).style(style),
            Cell::from(format!("${:.2}", line.price * f64::from(line.quantity))).style(style),
        ]));
    }
    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Item", "Price", "Qty", "Subtotal"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(Block::default().borders(Borders::ALL).title("Your Cart"))
    .column_spacing(1);
    f.render_widget(table, chunks[0]);

    let summary = format!(
        "{} items | Total: ${:.2}",
        app.cart_count(),
        app.cart_total()
    );
    f.render_widget(
        Paragraph::new(summary)
            .alignment(Alignment::Right)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[1],
    );
}

// --- job board ---

fn render_jobs(f: &mut Frame, app: &JobsApp, area: Rect) {
    match app.page {
        JobsPage::Home => {
            f.render_widget(
                Paragraph::new(
                    "Find your dream job today.\n\n\
                     Explore job opportunities from top companies.\n\
                     Press Enter to browse the listings.",
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                area,
            );
        }
        JobsPage::Listings => render_job_listings(f, app, area),
        JobsPage::Detail => render_job_detail(f, app, area),
    }
}

fn render_job_listings(f: &mut Frame, app: &JobsApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(format!("Search: {}", app.search))
            .style(Style::default().fg(Color::Yellow)),
        chunks[0],
    );

    let jobs = app.visible_jobs();
    if jobs.is_empty() {
        f.render_widget(
            Paragraph::new("No jobs found matching your search criteria.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Listings")),
            chunks[1],
        );
        return;
    }

    let mut rows = Vec::new();
    for (index, job) in jobs.iter().enumerate() {
        let style = if index == app.selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(Row::new(vec![
            Cell::from(job.title.clone()).style(style),
            Cell::from(job.company.clone()).style(style),
            Cell::from(format!("{} | {}", job.location, job.employment_type)).style(style),
            Cell::from(job.salary.clone()).style(style),
        ]));
    }
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(20),
            Constraint::Length(24),
            Constraint::Length(22),
        ],
    )
    .header(
        Row::new(vec!["Title", "Company", "Location", "Salary"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(Block::default().borders(Borders::ALL).title("Listings"))
    .column_spacing(1);
    f.render_widget(table, chunks[1]);
}

fn render_job_detail(f: &mut Frame, app: &JobsApp, area: Rect) {
    let Some(job) = app.viewed() else {
        render_not_found(
            f,
            area,
            "Job Not Found",
            "The job you are looking for does not exist or has been removed.",
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(job.company.clone()),
        Line::from(format!(
            "{} | {} | {}",
            job.location, job.employment_type, job.salary
        )),
        Line::from(format!("Posted: {}", job.posted)),
        Line::from(""),
        Line::from(job.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Requirements",
            Style::default().fg(Color::Yellow),
        )),
    ];
    for requirement in &job.requirements {
        lines.push(Line::from(format!("- {}", requirement)));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Job Detail")),
        area,
    );
}

// --- project tracker ---

fn render_projects(f: &mut Frame, app: &ProjectsApp, area: Rect) {
    match app.page {
        ProjectsPage::List => render_project_list(f, app, area),
        ProjectsPage::Create => render_project_form(f, app, area),
        ProjectsPage::Detail => render_project_detail(f, app, area),
    }
}

fn render_project_list(f: &mut Frame, app: &ProjectsApp, area: Rect) {
    if app.projects.is_empty() {
        f.render_widget(
            Paragraph::new("No projects created yet. Press 'n' to start a new project.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Your Projects")),
            area,
        );
        return;
    }

    let mut rows = Vec::new();
    for (index, project) in app.projects.iter().enumerate() {
        let style = if index == app.selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        let completed = project.tasks.find_all(|task| task.completed).len();
        let progress = aggregates::completion_ratio(&project.tasks);
        rows.push(Row::new(vec![
            Cell::from(project.title.clone()).style(style),
            Cell::from(format!(
                "{}/{} tasks ({:.0}%)",
                completed,
                project.tasks.len(),
                progress * 100.0
            ))
            .style(style),
            Cell::from(project.description.clone()).style(style),
        ]));
    }
    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(20),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new(vec!["Project", "Progress", "Description"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(Block::default().borders(Borders::ALL).title("Your Projects"))
    .column_spacing(1);
    f.render_widget(table, area);
}

fn render_project_form(f: &mut Frame, app: &ProjectsApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(app.form_title.clone()).block(
            field_block("Project Title", app.form_focus == ProjectField::Title),
        ),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(app.form_description.clone()).block(field_block(
            "Description",
            app.form_focus == ProjectField::Description,
        )),
        chunks[1],
    );
}

fn render_project_detail(f: &mut Frame, app: &ProjectsApp, area: Rect) {
    let Some(project) = app.open() else {
        render_not_found(
            f,
            area,
            "Project Not Found",
            "The project you are looking for does not exist or has been removed.",
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let completed = project.tasks.find_all(|task| task.completed).len();
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                project.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(project.description.clone()),
        ]),
        chunks[0],
    );

    let progress = app.open_progress();
    f.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Progress: {}/{} tasks completed",
                completed,
                project.tasks.len()
            )))
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(progress),
        chunks[1],
    );

    let form = Line::from(vec![
        field_span("Title", &app.task_title, app.task_focus == TaskField::Title),
        Span::raw("  "),
        field_span(
            "Assignee",
            &app.task_assignee,
            app.task_focus == TaskField::Assignee,
        ),
        Span::raw("  "),
        field_span("Due", &app.task_due, app.task_focus == TaskField::DueDate),
    ]);
    f.render_widget(
        Paragraph::new(form).block(Block::default().borders(Borders::ALL).title("Add New Task")),
        chunks[2],
    );

    if project.tasks.is_empty() {
        f.render_widget(
            Paragraph::new("No tasks added to this project yet.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Tasks")),
            chunks[3],
        );
        return;
    }

    let mut rows = Vec::new();
    for (index, task) in project.tasks.iter().enumerate() {
        let mut style = if index == app.selected_task {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        if task.completed {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        rows.push(Row::new(vec![
            Cell::from(if task.completed { "[x]" } else { "[ ]" }).style(style),
            Cell::from(task.title.clone()).style(style),
            Cell::from(task.assignee.clone()).style(style),
            Cell::from(task.due_date.clone()).style(style),
            Cell::from(if task.completed { "Completed" } else { "Pending" }).style(style),
        ]));
    }
    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .block(Block::default().borders(Borders::ALL).title("Tasks"))
    .column_spacing(1);
    f.render_widget(table, chunks[3]);
}

// --- quiz maker ---

fn render_quiz(f: &mut Frame, app: &QuizApp, area: Rect) {
    match app.page {
        QuizPage::Home => {
            f.render_widget(
                Paragraph::new(
                    "Create engaging quizzes or challenge yourself with quizzes\n\
                     made by others.\n\n\
                     n: create a quiz | Enter: browse quizzes",
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                area,
            );
        }
        QuizPage::Builder => render_quiz_builder(f, app, area),
        QuizPage::Listing => render_quiz_listing(f, app, area),
        QuizPage::Take => render_quiz_take(f, app, area),
    }
}

fn render_quiz_builder(f: &mut Frame, app: &QuizApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(app.draft_title.clone()).block(field_block(
            "Quiz Title",
            app.builder_focus == BuilderFocus::Title,
        )),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(format!(
            "Question {} of {}",
            app.builder_question + 1,
            app.draft_questions.len()
        ))
        .style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );

    let Some(draft) = app.draft_questions.get(app.builder_question) else {
        return;
    };

    f.render_widget(
        Paragraph::new(draft.text.clone()).block(field_block(
            "Question Text",
            app.builder_focus == BuilderFocus::QuestionText,
        )),
        chunks[2],
    );

    let mut lines = Vec::new();
    for (index, option) in draft.options.iter().enumerate() {
        let focused = app.builder_focus == BuilderFocus::Option(index);
        let marker = if draft.correct_option == index {
            "(correct)"
        } else {
            "         "
        };
        let style = if focused {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{} Option {}: {}", marker, index + 1, option),
            style,
        )));
    }
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Options")),
        chunks[3],
    );
}

fn render_quiz_listing(f: &mut Frame, app: &QuizApp, area: Rect) {
    if app.quizzes.is_empty() {
        f.render_widget(
            Paragraph::new("No quizzes available yet. Why not create one?")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Quizzes")),
            area,
        );
        return;
    }

    let mut rows = Vec::new();
    for (index, quiz) in app.quizzes.iter().enumerate() {
        let style = if index == app.selected {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        rows.push(Row::new(vec![
            Cell::from(quiz.title.clone()).style(style),
            Cell::from(format!("{} Questions", quiz.questions.len())).style(style),
        ]));
    }
    let table = Table::new(rows, [Constraint::Min(24), Constraint::Length(14)])
        .block(Block::default().borders(Borders::ALL).title("Quizzes"))
        .column_spacing(1);
    f.render_widget(table, area);
}

fn render_quiz_take(f: &mut Frame, app: &QuizApp, area: Rect) {
    let Some(quiz) = app.active() else {
        render_not_found(
            f,
            area,
            "Quiz Not Found",
            "The quiz you are looking for does not exist or has been removed.",
        );
        return;
    };

    if app.show_results {
        render_quiz_results(f, app, area);
        return;
    }

    let Some(question) = quiz.questions.get(app.current_question) else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            quiz.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Question {} of {}",
            app.current_question + 1,
            quiz.questions.len()
        )),
        Line::from(""),
        Line::from(question.text.clone()),
        Line::from(""),
    ];
    for (index, option) in question.options.iter().enumerate() {
        let chosen = app.selected_answer() == Some(index);
        let style = if chosen {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{}. {}", index + 1, option),
            style,
        )));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Take Quiz")),
        area,
    );
}

fn render_quiz_results(f: &mut Frame, app: &QuizApp, area: Rect) {
    let Some(quiz) = app.active() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Quiz Results: {}", quiz.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "You scored {} out of {}!",
            app.session_score(),
            quiz.questions.len()
        )),
        Line::from(""),
    ];
    for (index, question) in quiz.questions.iter().enumerate() {
        lines.push(Line::from(format!("Q{}: {}", index + 1, question.text)));
        let answered = app.answers.get(&index).copied();
        for (option_index, option) in question.options.iter().enumerate() {
            let is_correct = option_index == question.correct_option;
            let is_chosen = answered == Some(option_index);
            let style = if is_correct {
                Style::default().fg(Color::Green)
            } else if is_chosen {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            let note = if is_correct {
                " (Correct)"
            } else if is_chosen {
                " (Your Answer)"
            } else {
                ""
            };
            lines.push(Line::from(Span::styled(
                format!("  {}{}", option, note),
                style,
            )));
        }
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Results")),
        area,
    );
}

// --- portfolio ---

fn render_portfolio(f: &mut Frame, app: &PortfolioApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let mut tabs = Vec::new();
    for section in PortfolioSection::ALL {
        let style = if section == app.section {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };
        tabs.push(Span::styled(format!(" {} ", section.label()), style));
        tabs.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let profile = &app.profile;
    let lines = match app.section {
        PortfolioSection::Hero => vec![
            Line::from(Span::styled(
                profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(profile.roles.join(" | ")),
            Line::from(""),
            Line::from(profile.summary.clone()),
        ],
        PortfolioSection::Skills => profile
            .skills
            .iter()
            .map(|skill| {
                let filled = usize::from(skill.level) / 10;
                Line::from(format!(
                    "{:<28} {}{} {}%",
                    skill.name,
                    "#".repeat(filled),
                    "-".repeat(10_usize.saturating_sub(filled)),
                    skill.level
                ))
            })
            .collect(),
        PortfolioSection::Experience => {
            let mut lines = Vec::new();
            for experience in &profile.experiences {
                lines.push(Line::from(Span::styled(
                    format!("{} - {}", experience.role, experience.company),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(experience.period.clone()));
                lines.push(Line::from(experience.summary.clone()));
                lines.push(Line::from(""));
            }
            lines
        }
        PortfolioSection::Certifications => profile
            .certifications
            .iter()
            .map(|certification| Line::from(format!("- {}", certification)))
            .collect(),
        PortfolioSection::Contact => vec![
            Line::from(format!("Email: {}", profile.email)),
            Line::from(format!("Location: {}", profile.location)),
        ],
    };

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(app.section.label()),
            ),
        chunks[1],
    );
}

// --- shared ---

fn render_not_found(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from("Press Esc to go back."),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(style)
}

fn field_span<'a>(label: &str, value: &str, focused: bool) -> Span<'a> {
    let style = if focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    };
    Span::styled(format!("{}: {}", label, value), style)
}

fn render_status_bar(f: &mut Frame, suite: &Suite, area: Rect) {
    let text = match suite.active {
        ActiveApp::Launcher => {
            "up/down: choose an app | Enter: launch | q: quit".to_string()
        }
        ActiveApp::Shop => shop_status(&suite.shop),
        ActiveApp::Jobs => jobs_status(&suite.jobs),
        ActiveApp::Projects => projects_status(&suite.projects),
        ActiveApp::Quiz => quiz_status(&suite.quiz),
        ActiveApp::Portfolio => {
            "left/right: switch section | 1-5: jump | Esc: launcher".to_string()
        }
    };

    f.render_widget(
        Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn shop_status(app: &ShopApp) -> String {
    if let Some(ref status) = app.status_message {
        return status.clone();
    }
    match app.page {
        ShopPage::Storefront => {
            "up/down: browse | f: filter category | Enter: add to cart | c: cart | Esc: launcher"
                .to_string()
        }
        ShopPage::Cart => {
            "up/down: select | +/-: quantity | d: remove | x: clear | Enter: checkout | Esc: back"
                .to_string()
        }
    }
}

fn jobs_status(app: &JobsApp) -> String {
    if let Some(ref status) = app.status_message {
        return status.clone();
    }
    match app.page {
        JobsPage::Home => "Enter: browse listings | Esc: launcher".to_string(),
        JobsPage::Listings => {
            "type to search | up/down: select | Enter: view details | Esc: home".to_string()
        }
        JobsPage::Detail => "a: apply | Esc: back to listings".to_string(),
    }
}

fn projects_status(app: &ProjectsApp) -> String {
    if let Some(ref status) = app.status_message {
        return status.clone();
    }
    match app.page {
        ProjectsPage::List => {
            "up/down: select | Enter: view project | n: new project | Esc: launcher".to_string()
        }
        ProjectsPage::Create => {
            "type into the form | Tab: next field | Enter: create | Esc: cancel".to_string()
        }
        ProjectsPage::Detail => {
            "Tab: cycle focus | Enter: add task / toggle task | up/down: select task | Esc: back"
                .to_string()
        }
    }
}

fn quiz_status(app: &QuizApp) -> String {
    if let Some(ref status) = app.status_message {
        return status.clone();
    }
    match app.page {
        QuizPage::Home => "n: create a quiz | Enter: browse quizzes | Esc: launcher".to_string(),
        QuizPage::Builder => {
            "Tab: next field | Ctrl+R: mark correct | Ctrl+A: add question | Ctrl+D: remove | \
             PgUp/PgDn: switch question | Enter: save quiz | Esc: cancel"
                .to_string()
        }
        QuizPage::Listing => {
            "up/down: select | Enter: take quiz | n: create | Esc: home".to_string()
        }
        QuizPage::Take => {
            if app.show_results {
                "r: retake | Esc: back to quizzes".to_string()
            } else {
                "1-4: choose an answer | n: next | p: previous | Esc: back".to_string()
            }
        }
    }
}
