//! Derived summary values computed from collections on demand.
//!
//! These are pure functions of their inputs. Nothing here is cached next to a
//! collection; callers recompute at every read, so a derived figure can never
//! go stale.

use std::collections::HashMap;

use super::models::{CartLine, Question, Task};
use super::store::{Collection, Record};

pub trait Quantified {
    fn quantity(&self) -> u32;
}

pub trait Priced: Quantified {
    fn unit_price(&self) -> f64;
}

pub trait Completable {
    fn is_complete(&self) -> bool;
}

impl Quantified for CartLine {
    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl Priced for CartLine {
    fn unit_price(&self) -> f64 {
        self.price
    }
}

impl Completable for Task {
    fn is_complete(&self) -> bool {
        self.completed
    }
}

/// Sum of entry quantities. Collections without a quantity notion use
/// [`Collection::len`] directly.
pub fn total_count<T: Record + Quantified>(collection: &Collection<T>) -> u32 {
    collection.iter().map(|entry| entry.quantity()).sum()
}

/// Sum over entries of unit price times quantity.
pub fn total_value<T: Record + Priced>(collection: &Collection<T>) -> f64 {
    collection
        .iter()
        .map(|entry| entry.unit_price() * f64::from(entry.quantity()))
        .sum()
}

/// Completed entries over total entries.
///
/// Exactly `0.0` for an empty collection. Dividing by zero would yield NaN,
/// and an empty project reads as "no progress", so the zero case is a policy
/// here rather than an omission.
pub fn completion_ratio<T: Record + Completable>(collection: &Collection<T>) -> f64 {
    if collection.is_empty() {
        return 0.0;
    }
    let completed = collection.iter().filter(|entry| entry.is_complete()).count();
    completed as f64 / collection.len() as f64
}

/// Number of questions whose recorded answer matches the correct option.
///
/// `answers` maps question index to the chosen option index; unanswered
/// questions never match.
pub fn score(questions: &Collection<Question>, answers: &HashMap<usize, usize>) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| answers.get(index) == Some(&question.correct_option))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product_id: id.to_string(),
            name: format!("item {}", id),
            price,
            quantity,
        }
    }

    fn task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {}", id),
            assignee: "Unassigned".to_string(),
            due_date: "No due date".to_string(),
            completed,
        }
    }

    fn question(id: &str, correct_option: usize) -> Question {
        Question {
            id: id.to_string(),
            text: format!("question {}", id),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
            correct_option,
        }
    }

    #[test]
    fn test_total_count_sums_quantities() {
        let cart: Collection<CartLine> = Collection::new()
            .add(line("p1", 10.0, 2))
            .add(line("p2", 5.0, 3));

        assert_eq!(total_count(&cart), 5);
    }

    #[test]
    fn test_total_value_sums_price_times_quantity() {
        let cart: Collection<CartLine> = Collection::new()
            .add(line("p1", 10.0, 2))
            .add(line("p2", 5.0, 1));

        assert!((total_value(&cart) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_completion_ratio_of_empty_collection_is_zero() {
        let tasks: Collection<Task> = Collection::new();

        let ratio = completion_ratio(&tasks);
        assert_eq!(ratio, 0.0);
        assert!(!ratio.is_nan());
    }

    #[test]
    fn test_completion_ratio_tracks_added_tasks() {
        // "Website Redesign" starts empty, gains two tasks, one gets done.
        let mut tasks: Collection<Task> = Collection::new();
        assert_eq!(completion_ratio(&tasks), 0.0);

        tasks = tasks.add(task("t1", false)).add(task("t2", false));
        tasks = tasks.update("t1", |entry| Task {
            completed: true,
            ..entry.clone()
        });

        assert!((completion_ratio(&tasks) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cart_totals_follow_quantity_changes() {
        let cart: Collection<CartLine> = Collection::new().add(line("p1", 19.99, 3));
        assert!((total_value(&cart) - 59.97).abs() < 1e-9);

        let emptied = cart.update("p1", |entry| CartLine {
            quantity: 0,
            ..entry.clone()
        });
        assert!(emptied.find("p1").is_none());
        assert_eq!(total_count(&emptied), 0);
    }

    #[test]
    fn test_score_counts_only_correct_answers() {
        let questions: Collection<Question> = Collection::new()
            .add(question("q1", 1))
            .add(question("q2", 2))
            .add(question("q3", 0));

        let mut answers = HashMap::new();
        answers.insert(0, 1); // correct
        answers.insert(1, 3); // wrong; question 2 left unanswered

        assert_eq!(score(&questions, &answers), 1);
    }

    #[test]
    fn test_score_of_unanswered_quiz_is_zero() {
        let questions: Collection<Question> = Collection::new().add(question("q1", 0));

        assert_eq!(score(&questions, &HashMap::new()), 0);
    }
}
