//! List and footer templates.
//!
//! # Responsibility
//! - Hold the two injected `(data) -> markup` functions.
//! - Provide the default TodoMVC markup.
//!
//! # Invariants
//! - Default templates HTML-escape every interpolated string.
//! - `pluralize` only appends `s`; irregular plurals are not handled.

use crate::model::filter::Filter;
use crate::model::task::Task;
use std::fmt::Write;

/// Data handed to the footer template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterData<'a> {
    pub active_count: usize,
    pub active_word: String,
    pub completed_count: usize,
    pub filter: &'a Filter,
}

type ListTemplateFn = Box<dyn Fn(&[&Task]) -> String>;
type FooterTemplateFn = Box<dyn Fn(&FooterData<'_>) -> String>;

/// The two template functions used by every render.
pub struct Templates {
    todo_list: ListTemplateFn,
    footer: FooterTemplateFn,
}

impl Templates {
    pub fn new(
        todo_list: impl Fn(&[&Task]) -> String + 'static,
        footer: impl Fn(&FooterData<'_>) -> String + 'static,
    ) -> Self {
        Self {
            todo_list: Box::new(todo_list),
            footer: Box::new(footer),
        }
    }

    pub fn render_list(&self, tasks: &[&Task]) -> String {
        (self.todo_list)(tasks)
    }

    pub fn render_footer(&self, data: &FooterData<'_>) -> String {
        (self.footer)(data)
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new(todo_list_html, footer_html)
    }
}

/// Returns `word` for exactly one item, `word + "s"` otherwise.
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Default list template: one `li[data-id]` row per task.
pub fn todo_list_html(tasks: &[&Task]) -> String {
    let mut html = String::new();
    for task in tasks {
        let id = escape_html(&task.id);
        let title = escape_html(&task.title);
        let (row_class, checked) = if task.completed {
            (" class=\"completed\"", " checked")
        } else {
            ("", "")
        };
        let _ = write!(
            html,
            "<li{row_class} data-id=\"{id}\">\
             <div class=\"view\">\
             <input class=\"toggle\" type=\"checkbox\"{checked}>\
             <label>{title}</label>\
             <button class=\"destroy\"></button>\
             </div>\
             <input class=\"edit\" value=\"{title}\">\
             </li>"
        );
    }
    html
}

/// Default footer template: counter, filter links and clear button.
pub fn footer_html(data: &FooterData<'_>) -> String {
    let mut html = format!(
        "<span id=\"todo-count\"><strong>{}</strong> {} left</span><ul id=\"filters\">",
        data.active_count,
        escape_html(&data.active_word)
    );
    for (filter, href, label) in [
        (Filter::All, "#/all", "All"),
        (Filter::Active, "#/active", "Active"),
        (Filter::Completed, "#/completed", "Completed"),
    ] {
        let selected = if *data.filter == filter {
            " class=\"selected\""
        } else {
            ""
        };
        let _ = write!(html, "<li><a{selected} href=\"{href}\">{label}</a></li>");
    }
    html.push_str("</ul>");
    if data.completed_count > 0 {
        html.push_str("<button id=\"clear-completed\">Clear completed</button>");
    }
    html
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '`' => escaped.push_str("&#x60;"),
            '=' => escaped.push_str("&#x3D;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, footer_html, pluralize, todo_list_html, FooterData};
    use crate::model::filter::Filter;
    use crate::model::task::Task;

    #[test]
    fn pluralize_only_appends_s() {
        assert_eq!(pluralize(0, "item"), "items");
        assert_eq!(pluralize(1, "item"), "item");
        assert_eq!(pluralize(2, "item"), "items");
        assert_eq!(pluralize(2, "child"), "childs");
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<b class=\"x\">&'"),
            "&lt;b class&#x3D;&quot;x&quot;&gt;&amp;&#x27;"
        );
    }

    #[test]
    fn list_row_carries_id_state_and_escaped_title() {
        let mut task = Task::with_id("row-1", "<script>").unwrap();
        task.completed = true;

        let html = todo_list_html(&[&task]);
        assert!(html.starts_with("<li class=\"completed\" data-id=\"row-1\">"));
        assert!(html.contains("<input class=\"toggle\" type=\"checkbox\" checked>"));
        assert!(html.contains("<label>&lt;script&gt;</label>"));
        assert!(html.contains("<input class=\"edit\" value=\"&lt;script&gt;\">"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(todo_list_html(&[]), "");
    }

    #[test]
    fn footer_marks_selected_filter_and_hides_clear_button() {
        let filter = Filter::Active;
        let html = footer_html(&FooterData {
            active_count: 2,
            active_word: pluralize(2, "item"),
            completed_count: 0,
            filter: &filter,
        });

        assert!(html.contains("<strong>2</strong> items left"));
        assert!(html.contains("<a class=\"selected\" href=\"#/active\">Active</a>"));
        assert!(html.contains("<a href=\"#/all\">All</a>"));
        assert!(!html.contains("clear-completed"));
    }

    #[test]
    fn footer_with_unknown_filter_selects_no_link() {
        let filter = Filter::from_name("someday");
        let html = footer_html(&FooterData {
            active_count: 1,
            active_word: pluralize(1, "item"),
            completed_count: 3,
            filter: &filter,
        });

        assert!(!html.contains("selected"));
        assert!(html.contains("<button id=\"clear-completed\">Clear completed</button>"));
    }
}
