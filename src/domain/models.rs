use serde::{Deserialize, Serialize};

use super::store::{Collection, Container, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub in_stock: u32,
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One line of the shopping cart, keyed by the product it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }
}

impl Record for CartLine {
    fn id(&self) -> &str {
        &self.product_id
    }

    fn absorb(&self, incoming: &Self) -> Self {
        Self {
            quantity: self.quantity + incoming.quantity,
            ..self.clone()
        }
    }

    fn is_retained(&self) -> bool {
        self.quantity > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted: String,
}

impl Record for Job {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub due_date: String,
    pub completed: bool,
}

impl Task {
    /// Builds a pending task, defaulting the optional fields the way the
    /// detail form presents them.
    pub fn new(id: String, title: String, assignee: String, due_date: String) -> Self {
        Self {
            id,
            title,
            assignee: if assignee.trim().is_empty() {
                "Unassigned".to_string()
            } else {
                assignee
            },
            due_date: if due_date.trim().is_empty() {
                "No due date".to_string()
            } else {
                due_date
            },
            completed: false,
        }
    }
}

impl Record for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tasks: Collection<Task>,
}

impl Project {
    pub fn new(id: String, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            tasks: Collection::new(),
        }
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Container for Project {
    type Item = Task;

    fn items(&self) -> &Collection<Task> {
        &self.tasks
    }

    fn with_items(&self, items: Collection<Task>) -> Self {
        Self {
            tasks: items,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

impl Record for Question {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Collection<Question>,
}

impl Record for Quiz {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Container for Quiz {
    type Item = Question;

    fn items(&self) -> &Collection<Question> {
        &self.questions
    }

    fn with_items(&self, items: Collection<Question>) -> Self {
        Self {
            questions: items,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub summary: String,
}

/// Static content behind the portfolio app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub roles: Vec<String>,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub certifications: Vec<String>,
    pub email: String,
    pub location: String,
}
