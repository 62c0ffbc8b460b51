//! HTML page rendering.
//!
//! The page is produced by walking the event tree and writing each level
//! through its own function, so escaping and the conditional parts (links,
//! breaks, empty-collection fallbacks, the student sections) stay explicit.

use std::fmt::Write;

use syllabus_core::{Event, EventPeriod, PageConfig, ScheduleItem, Student};
use thiserror::Error;
use tracing::debug;

/// Fallback shown when the event has no periods.
pub const NO_DAYS_TEXT: &str = "No days scheduled yet.";

/// Fallback shown when a period has no items.
pub const NO_ITEMS_TEXT: &str = "No items scheduled for today.";

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Writing to the output buffer failed.
    #[error("failed to format page: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// HTML page generator.
#[derive(Debug, Clone, Default)]
pub struct HtmlGenerator {
    page: PageConfig,
}

impl HtmlGenerator {
    /// Create a new generator with the given page assets.
    #[must_use]
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    /// Render a fully resolved event into a complete HTML document.
    pub fn generate(&self, event: &Event) -> Result<String> {
        debug!(title = %event.title, "rendering page");

        let mut out = String::new();
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, r#"<html lang="en">"#)?;
        self.write_head(&mut out, &event.title)?;
        writeln!(out, "<body>")?;
        writeln!(out, r#"<div class="container-fluid">"#)?;
        write_details(&mut out, event)?;
        write_schedule(&mut out, &event.schedule)?;
        if !event.students.is_empty() {
            write_students(&mut out, &event.students)?;
            write_mailing_list(&mut out, &event.students)?;
        }
        writeln!(out, "</div>")?;
        for script in &self.page.scripts {
            writeln!(out, r#"<script src="{}"></script>"#, escape_html(script))?;
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(out)
    }

    fn write_head(&self, out: &mut String, title: &str) -> Result<()> {
        writeln!(out, "<head>")?;
        writeln!(out, r#"    <meta charset="UTF-8">"#)?;
        writeln!(
            out,
            r#"    <meta name="viewport" content="width=device-width, initial-scale=1">"#
        )?;
        writeln!(out, "    <title>{}</title>", escape_html(title))?;
        for href in &self.page.stylesheets {
            writeln!(
                out,
                r#"    <link href="{}" rel="stylesheet">"#,
                escape_html(href)
            )?;
        }
        writeln!(out, "</head>")?;
        Ok(())
    }
}

/// Write the title heading and the event details table.
pub fn write_details(out: &mut String, event: &Event) -> Result<()> {
    writeln!(out, r#"<section class="event">"#)?;
    writeln!(out, "    <h1>{}</h1>", escape_html(&event.title))?;
    writeln!(out, r#"    <table class="table">"#)?;
    writeln!(
        out,
        "        <tr><th>Location</th><td>{}</td></tr>",
        escape_html(&event.location)
    )?;
    writeln!(out, "    </table>")?;
    writeln!(out, "</section>")?;
    Ok(())
}

/// Write the schedule table, or the no-days fallback.
pub fn write_schedule(out: &mut String, schedule: &[EventPeriod]) -> Result<()> {
    writeln!(out, r#"<section class="schedule">"#)?;
    writeln!(out, "    <h2>Schedule</h2>")?;
    if schedule.is_empty() {
        writeln!(out, r#"    <p class="empty">{NO_DAYS_TEXT}</p>"#)?;
    } else {
        writeln!(out, r#"    <table class="table table-hover">"#)?;
        writeln!(out, "        <tr><th>Day</th><th>Topics</th></tr>")?;
        for period in schedule {
            write_period(out, period)?;
        }
        writeln!(out, "    </table>")?;
    }
    writeln!(out, "</section>")?;
    Ok(())
}

/// Write one schedule row: the period heading and its items.
pub fn write_period(out: &mut String, period: &EventPeriod) -> Result<()> {
    writeln!(out, "        <tr>")?;
    writeln!(
        out,
        r#"            <th scope="row">{}</th>"#,
        escape_html(&period.label)
    )?;
    writeln!(out, "            <td>")?;
    if period.is_empty() {
        writeln!(out, r#"                <p class="empty">{NO_ITEMS_TEXT}</p>"#)?;
    } else {
        writeln!(out, "                <ul>")?;
        for item in &period.items {
            write!(out, "                    ")?;
            write_item(out, item)?;
            writeln!(out)?;
        }
        writeln!(out, "                </ul>")?;
    }
    writeln!(out, "            </td>")?;
    writeln!(out, "        </tr>")?;
    Ok(())
}

/// Write a single list entry for an item. Links are only written when the
/// derived link resolved; they are attribute-escaped but otherwise left as is.
pub fn write_item(out: &mut String, item: &ScheduleItem) -> Result<()> {
    if item.is_break() {
        write!(out, r#"<li class="break"></li>"#)?;
        return Ok(());
    }

    write!(out, r#"<li class="item">{}"#, escape_html(&item.name))?;
    if !item.deck_link_path.is_empty() {
        write!(
            out,
            r#" [<a href="{}">session slides</a>]"#,
            escape_html(&item.deck_link_path)
        )?;
    }
    if !item.lab_link_path.is_empty() {
        write!(
            out,
            r#" [<a href="{}">lab/workshop</a>]"#,
            escape_html(&item.lab_link_path)
        )?;
    }
    write!(out, "</li>")?;
    Ok(())
}

/// Write the student table.
pub fn write_students(out: &mut String, students: &[Student]) -> Result<()> {
    writeln!(out, r#"<section class="students">"#)?;
    writeln!(out, "    <h2>Students</h2>")?;
    writeln!(out, r#"    <table class="table table-hover">"#)?;
    writeln!(
        out,
        "        <tr><th>Name</th><th>Email</th><th>Login</th><th>SSH</th></tr>"
    )?;
    for student in students {
        let ssh = if student.host.is_empty() {
            String::new()
        } else {
            escape_html(&format!(
                "ssh -p {} {}@{}",
                student.ssh_port, student.login, student.host
            ))
        };
        writeln!(
            out,
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td><code>{}</code></td></tr>",
            escape_html(&student.name),
            escape_html(&student.email),
            escape_html(&student.login),
            ssh
        )?;
    }
    writeln!(out, "    </table>")?;
    writeln!(out, "</section>")?;
    Ok(())
}

/// Write the copy-all field with every student mailbox.
pub fn write_mailing_list(out: &mut String, students: &[Student]) -> Result<()> {
    writeln!(out, r#"<section class="mailing-list">"#)?;
    writeln!(out, "    <h3>Email all students</h3>")?;
    writeln!(out, "    <p>Select all and copy into the clipboard.</p>")?;
    writeln!(
        out,
        r#"    <input type="text" value="{}" size="120" readonly>"#,
        escape_html(&mailing_list(students))
    )?;
    writeln!(out, "</section>")?;
    Ok(())
}

/// Join `Name <email>` for every student that has an email.
#[must_use]
pub fn mailing_list(students: &[Student]) -> String {
    students
        .iter()
        .filter_map(Student::mailbox)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, deck_link: &str, lab_link: &str) -> ScheduleItem {
        ScheduleItem {
            name: name.to_string(),
            deck_link_path: deck_link.to_string(),
            lab_link_path: lab_link.to_string(),
            ..Default::default()
        }
    }

    fn student(name: &str, email: &str, login: &str, host: &str) -> Student {
        Student {
            name: name.to_string(),
            email: email.to_string(),
            login: login.to_string(),
            host: host.to_string(),
            ssh_port: 22,
        }
    }

    fn test_event() -> Event {
        Event {
            title: "Ops & Dev <Training>".to_string(),
            location: "Stark & Wayne HQ".to_string(),
            schedule: vec![
                EventPeriod {
                    label: "Day 1".to_string(),
                    items: vec![
                        item("Intro", "/intro/index.html", ""),
                        item("", "/ignored/index.html", "/labs#!ignored.md"),
                        item("Deploy", "/deploy/index.html", "/labs#!deploy.md"),
                    ],
                },
                EventPeriod {
                    label: "Day 2".to_string(),
                    items: vec![],
                },
            ],
            students: vec![
                student("Ada", "ada@example.com", "student1", "lab.example.com"),
                student("Alan", "", "student2", "lab.example.com"),
            ],
        }
    }

    #[test]
    fn test_generate_page() {
        let html = HtmlGenerator::default().generate(&test_event()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Ops &amp; Dev &lt;Training&gt;</title>"));
        assert!(html.contains("<h1>Ops &amp; Dev &lt;Training&gt;</h1>"));
        assert!(html.contains("<td>Stark &amp; Wayne HQ</td>"));
        assert!(html.contains("bootstrap-3.2.0-dist/css/bootstrap.min.css"));
        assert!(html.contains("jquery.min.js"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = HtmlGenerator::default();
        let event = test_event();

        let first = generator.generate(&event).unwrap();
        let second = generator.generate(&event).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_period_order_preserved() {
        let html = HtmlGenerator::default().generate(&test_event()).unwrap();

        let day1 = html.find("Day 1").unwrap();
        let day2 = html.find("Day 2").unwrap();
        let intro = html.find("Intro").unwrap();
        let deploy = html.find("Deploy").unwrap();
        assert!(day1 < intro && intro < deploy && deploy < day2);
    }

    #[test]
    fn test_write_item_links() {
        let mut out = String::new();
        write_item(&mut out, &item("Deploy", "/deploy/index.html", "/labs#!deploy.md")).unwrap();
        assert_eq!(
            out,
            r#"<li class="item">Deploy [<a href="/deploy/index.html">session slides</a>] [<a href="/labs#!deploy.md">lab/workshop</a>]</li>"#
        );
    }

    #[test]
    fn test_write_item_omits_unresolved_links() {
        let mut out = String::new();
        write_item(&mut out, &item("Notes", "", "")).unwrap();
        assert_eq!(out, r#"<li class="item">Notes</li>"#);

        let mut out = String::new();
        write_item(&mut out, &item("Lab only", "", "/labs#!x.md")).unwrap();
        assert!(!out.contains("session slides"));
        assert!(out.contains("lab/workshop"));
    }

    #[test]
    fn test_write_item_link_cannot_leave_href() {
        let mut out = String::new();
        write_item(
            &mut out,
            &item("Quoted", r#"/a" onmouseover="alert(1)/index.html"#, ""),
        )
        .unwrap();

        assert_eq!(
            out,
            r#"<li class="item">Quoted [<a href="/a&quot; onmouseover=&quot;alert(1)/index.html">session slides</a>]</li>"#
        );
    }

    #[test]
    fn test_write_item_break() {
        let mut out = String::new();
        write_item(&mut out, &item("", "/deck/index.html", "/labs#!deck.md")).unwrap();
        assert_eq!(out, r#"<li class="break"></li>"#);
    }

    #[test]
    fn test_write_item_escapes_name() {
        let mut out = String::new();
        write_item(&mut out, &item("<b>Q&A</b>", "", "")).unwrap();
        assert_eq!(out, r#"<li class="item">&lt;b&gt;Q&amp;A&lt;/b&gt;</li>"#);
    }

    #[test]
    fn test_empty_period_fallback() {
        let mut out = String::new();
        write_period(
            &mut out,
            &EventPeriod {
                label: "Day 2".to_string(),
                items: vec![],
            },
        )
        .unwrap();
        assert!(out.contains(NO_ITEMS_TEXT));
        assert!(!out.contains("<ul>"));
    }

    #[test]
    fn test_write_period_escapes_label() {
        let mut out = String::new();
        write_period(
            &mut out,
            &EventPeriod {
                label: "Day <1> & more".to_string(),
                items: vec![item("Intro", "", "")],
            },
        )
        .unwrap();
        assert!(out.contains(r#"<th scope="row">Day &lt;1&gt; &amp; more</th>"#));
        assert!(!out.contains("<1>"));
    }

    #[test]
    fn test_empty_schedule_fallback() {
        let mut out = String::new();
        write_schedule(&mut out, &[]).unwrap();
        assert!(out.contains(NO_DAYS_TEXT));
        assert!(!out.contains("<table"));
    }

    #[test]
    fn test_students_sections_omitted_without_roster() {
        let mut event = test_event();
        event.students.clear();

        let html = HtmlGenerator::default().generate(&event).unwrap();
        assert!(!html.contains("<h2>Students</h2>"));
        assert!(!html.contains("Email all students"));
    }

    #[test]
    fn test_write_students() {
        let mut out = String::new();
        write_students(&mut out, &test_event().students).unwrap();

        assert!(out.contains("<td>Ada</td><td>ada@example.com</td><td>student1</td>"));
        assert!(out.contains("<td>Alan</td><td></td><td>student2</td>"));
        assert!(out.contains("<code>ssh -p 22 student1@lab.example.com</code>"));
    }

    #[test]
    fn test_write_students_escapes_fields() {
        let mut out = String::new();
        write_students(
            &mut out,
            &[student("O'Brien & Co", "<ob@example.com>", "stu\"dent1", "")],
        )
        .unwrap();

        assert!(out.contains(
            "<td>O&#39;Brien &amp; Co</td><td>&lt;ob@example.com&gt;</td><td>stu&quot;dent1</td>"
        ));
    }

    #[test]
    fn test_write_students_without_host() {
        let mut out = String::new();
        write_students(&mut out, &[student("Ada", "ada@example.com", "student1", "")]).unwrap();
        assert!(out.contains("<td><code></code></td>"));
        assert!(!out.contains("ssh -p"));
    }

    #[test]
    fn test_mailing_list_skips_missing_email() {
        let students = vec![
            student("Ada", "ada@example.com", "student1", ""),
            student("Alan", "", "student2", ""),
            student("Grace", "grace@example.com", "student3", ""),
        ];
        assert_eq!(
            mailing_list(&students),
            "Ada <ada@example.com>, Grace <grace@example.com>"
        );
        assert_eq!(mailing_list(&[]), "");
    }

    #[test]
    fn test_write_mailing_list_escapes_value() {
        let mut out = String::new();
        write_mailing_list(&mut out, &test_event().students).unwrap();
        assert!(out.contains(r#"value="Ada &lt;ada@example.com&gt;""#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted" 'single'"#), "&quot;quoted&quot; &#39;single&#39;");
    }

    #[test]
    fn test_custom_assets() {
        let generator = HtmlGenerator::new(PageConfig {
            stylesheets: vec!["css/site.css".to_string()],
            scripts: vec![],
        });
        let html = generator.generate(&test_event()).unwrap();

        assert!(html.contains(r#"<link href="css/site.css" rel="stylesheet">"#));
        assert!(!html.contains("<script"));
    }
}
