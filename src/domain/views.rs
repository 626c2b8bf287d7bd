use super::enums::{SortMode, TaskStatus};
use super::project::Project;
use super::task::Task;
use unicode_width::UnicodeWidthStr;

/// Prefix for continuation lines of a wrapped task
pub const WRAP_MARKER: &str = "↪ ";

/// Order tasks for display. The input is left untouched and ties keep
/// their incoming relative order.
pub fn sort_tasks(tasks: &[Task], mode: SortMode) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match mode {
        SortMode::Status => {
            sorted.sort_by_key(|t| (t.status.rank(), t.order));
        }
        SortMode::Alphanumeric => {
            sorted.sort_by_cached_key(|t| t.text.to_lowercase());
        }
        SortMode::Oldest => {
            sorted.sort_by(|a, b| a.created.total_cmp(&b.created));
        }
    }
    sorted
}

/// Favourites first, then everything else, each group by name ignoring case
pub fn display_order(projects: &[Project]) -> Vec<Project> {
    let mut ordered = projects.to_vec();
    ordered.sort_by_cached_key(|p| (!p.favourite, p.name.to_lowercase()));
    ordered
}

/// Project to select once `deleted_id` is gone from `ordered`: the next one
/// in display order, else the previous one, else nothing
pub fn select_after_delete(ordered: &[Project], deleted_id: &str) -> Option<String> {
    let index = ordered.iter().position(|p| p.id == deleted_id)?;
    ordered
        .get(index + 1)
        .or_else(|| index.checked_sub(1).and_then(|i| ordered.get(i)))
        .map(|p| p.id.clone())
}

/// Badge text for a status
pub fn status_badge(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "○ Pending",
        TaskStatus::Wip => "◐ WIP",
        TaskStatus::Done => "● Done",
    }
}

/// Word-wrap `text` into lines of at most `width` display columns.
///
/// Lines are split on single spaces and filled greedily. Continuation lines
/// start with `marker` and get `width` minus the marker's width. Explicit
/// line breaks and empty lines are kept; a word wider than the limit is
/// placed on its own line unbroken.
pub fn wrap_with_marker(text: &str, width: usize, marker: &str) -> Vec<String> {
    let marker_width = marker.width();
    let mut wrapped = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            wrapped.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut first_line = true;
        for word in line.split(' ') {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let limit = if first_line {
                width
            } else {
                width.saturating_sub(marker_width)
            };
            // The continuation limit already excludes the marker
            let used = if first_line {
                current.width()
            } else {
                current.width() - marker_width
            };

            if used + 1 + word.width() > limit {
                wrapped.push(std::mem::take(&mut current));
                current.push_str(marker);
                current.push_str(word);
                first_line = false;
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }
        wrapped.push(current);
    }

    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(text: &str, status: TaskStatus, order: i64, created: f64) -> Task {
        Task {
            id: format!("id-{}", text),
            text: text.to_string(),
            status,
            order,
            created,
        }
    }

    fn project(id: &str, name: &str, favourite: bool) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            favourite,
        }
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_sort_by_status_then_order() {
        let tasks = vec![
            task("done-1", TaskStatus::Done, 1, 0.0),
            task("pending-3", TaskStatus::Pending, 3, 0.0),
            task("wip-0", TaskStatus::Wip, 0, 0.0),
            task("pending-2", TaskStatus::Pending, 2, 0.0),
            task("done-0", TaskStatus::Done, 0, 0.0),
        ];

        let sorted = sort_tasks(&tasks, SortMode::Status);
        assert_eq!(
            texts(&sorted),
            vec!["pending-2", "pending-3", "wip-0", "done-0", "done-1"]
        );
        // Input order untouched
        assert_eq!(tasks[0].text, "done-1");
    }

    #[test]
    fn test_sort_alphanumeric_is_case_insensitive_and_stable() {
        let tasks = vec![
            task("banana", TaskStatus::Pending, 0, 0.0),
            task("Apple", TaskStatus::Done, 1, 0.0),
            task("apple", TaskStatus::Pending, 2, 0.0),
            task("cherry", TaskStatus::Wip, 3, 0.0),
            task("APPLE", TaskStatus::Pending, 4, 0.0),
        ];

        let sorted = sort_tasks(&tasks, SortMode::Alphanumeric);
        assert_eq!(texts(&sorted), vec!["Apple", "apple", "APPLE", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_oldest() {
        let tasks = vec![
            task("third", TaskStatus::Pending, 0, 300.5),
            task("first", TaskStatus::Done, 1, 100.0),
            task("second", TaskStatus::Pending, 2, 200.0),
        ];

        let sorted = sort_tasks(&tasks, SortMode::Oldest);
        assert_eq!(texts(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_oldest_keeps_ties_in_input_order() {
        let tasks = vec![
            task("late", TaskStatus::Pending, 0, 50.0),
            task("tie-a", TaskStatus::Done, 1, 10.0),
            task("tie-b", TaskStatus::Pending, 2, 10.0),
            task("tie-c", TaskStatus::Wip, 3, 10.0),
        ];

        let sorted = sort_tasks(&tasks, SortMode::Oldest);
        assert_eq!(texts(&sorted), vec!["tie-a", "tie-b", "tie-c", "late"]);
    }

    #[test]
    fn test_display_order_favourites_first() {
        let projects = vec![
            project("1", "zeta", false),
            project("2", "Beta", true),
            project("3", "alpha", false),
            project("4", "Alpha fav", true),
        ];

        let names: Vec<String> = display_order(&projects).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Alpha fav", "Beta", "alpha", "zeta"]);
    }

    #[test]
    fn test_select_after_delete_prefers_next() {
        let ordered = vec![project("a", "A", false), project("b", "B", false), project("c", "C", false)];
        assert_eq!(select_after_delete(&ordered, "b"), Some("c".to_string()));
        assert_eq!(select_after_delete(&ordered, "a"), Some("b".to_string()));
    }

    #[test]
    fn test_select_after_delete_falls_back_to_previous() {
        let ordered = vec![project("a", "A", false), project("b", "B", false)];
        assert_eq!(select_after_delete(&ordered, "b"), Some("a".to_string()));
    }

    #[test]
    fn test_select_after_delete_last_remaining() {
        let ordered = vec![project("a", "A", false)];
        assert_eq!(select_after_delete(&ordered, "a"), None);
        assert_eq!(select_after_delete(&ordered, "missing"), None);
    }

    #[test]
    fn test_wrap_short_text_untouched() {
        assert_eq!(wrap_with_marker("buy milk", 20, WRAP_MARKER), vec!["buy milk"]);
    }

    #[test]
    fn test_wrap_adds_marker_to_continuations() {
        let lines = wrap_with_marker("one two three four", 9, "> ");
        assert_eq!(lines, vec!["one two", "> three", "> four"]);
    }

    #[test]
    fn test_wrap_keeps_explicit_lines() {
        let lines = wrap_with_marker("first\n\nsecond", 20, WRAP_MARKER);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_wrap_long_word_not_broken() {
        let lines = wrap_with_marker("a supercalifragilistic word", 6, "> ");
        assert_eq!(lines, vec!["a", "> supercalifragilistic", "> word"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_with_marker("", 10, WRAP_MARKER), vec![String::new()]);
    }
}
