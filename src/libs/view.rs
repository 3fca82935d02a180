use super::messages::Message;
use super::notice::Notice;
use super::summary::Summary;
use super::todo::Todo;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints `todos` as a table on stdout.
    pub fn todos(todos: &[Todo]) {
        Self::table(todos).printstd();
    }

    pub fn table(todos: &[Todo]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "COMPLETED", "CREATED"]);
        for todo in todos {
            let completed = if todo.completed { "yes" } else { "no" };
            table.add_row(row![todo.id, todo.title, completed, todo.created_at.format("%Y-%m-%d %H:%M")]);
        }

        table
    }

    pub fn summary(summary: Summary) -> String {
        Message::SummaryLine {
            total: summary.total,
            completed: summary.completed,
            remaining: summary.remaining,
        }
        .to_string()
    }

    /// Renders the board as an HTML fragment.
    ///
    /// Interactive elements carry `data-action` (and `data-id` for items) so
    /// a host can turn clicks back into board events. Titles and notices are
    /// escaped; nothing user-provided reaches the markup raw.
    pub fn html(todos: &[Todo], notice: Option<&Notice>, submitting: bool) -> String {
        let summary = Summary::of(todos);
        let mut html = String::from("<section class=\"todo-board\">\n");

        html.push_str("  <form class=\"todo-form\" data-action=\"submit\">\n");
        html.push_str("    <input type=\"text\" name=\"title\" maxlength=\"255\" required>\n");
        if submitting {
            html.push_str("    <button type=\"submit\" disabled>Adding...</button>\n");
        } else {
            html.push_str("    <button type=\"submit\">Add</button>\n");
        }
        html.push_str("  </form>\n");

        if let Some(notice) = notice {
            html.push_str(&format!("  <div class=\"notice\" role=\"alert\">{}</div>\n", escape_html(notice.message())));
        }

        html.push_str(&format!(
            "  <div class=\"stats\"><span data-stat=\"total\">{}</span><span data-stat=\"completed\">{}</span><span data-stat=\"remaining\">{}</span></div>\n",
            summary.total, summary.completed, summary.remaining
        ));

        if todos.is_empty() {
            html.push_str(&format!("  <p class=\"empty-state\">{}</p>\n", escape_html(&Message::NoTodosYet.to_string())));
        } else {
            html.push_str("  <ul class=\"todo-list\">\n");
            for todo in todos {
                html.push_str(&Self::item(todo));
            }
            html.push_str("  </ul>\n");
        }

        html.push_str("</section>\n");
        html
    }

    fn item(todo: &Todo) -> String {
        let (class, checked) = if todo.completed { (" completed", " checked") } else { ("", "") };

        format!(
            "    <li class=\"todo-item{class}\" data-id=\"{id}\">\
             <input type=\"checkbox\" data-action=\"toggle\" data-id=\"{id}\"{checked}>\
             <span class=\"todo-title\">{title}</span>\
             <button type=\"button\" data-action=\"delete\" data-id=\"{id}\">Delete</button>\
             </li>\n",
            id = todo.id,
            title = escape_html(&todo.title),
        )
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
