use super::todo::Todo;

/// Counters shown above the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl Summary {
    pub fn of(todos: &[Todo]) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|todo| todo.completed).count();

        Self {
            total,
            completed,
            remaining: total - completed,
        }
    }
}
