//! Shared-server roster assignment.
//!
//! When students share one lab server they get sequential anonymous logins
//! (`student1`, `student2`, ...) and the server's connection details.

use syllabus_core::{Event, Student};

/// Login name for the student at the given 1-based position.
#[must_use]
pub fn login_for(position: usize) -> String {
    format!("student{position}")
}

/// Return the roster with logins and connection details assigned.
///
/// Order and length are preserved; names and emails are left untouched.
#[must_use]
pub fn assign_students(students: Vec<Student>, host: &str, port: u16) -> Vec<Student> {
    students
        .into_iter()
        .enumerate()
        .map(|(index, student)| Student {
            login: login_for(index + 1),
            host: host.to_string(),
            ssh_port: port,
            ..student
        })
        .collect()
}

/// Return the event with its roster assigned to the shared server.
#[must_use]
pub fn assign_roster(event: Event, host: &str, port: u16) -> Event {
    let students = assign_students(event.students, host, port);
    Event { students, ..event }
}

#[cfg(test)]
mod tests {
    use syllabus_core::DEFAULT_SSH_PORT;

    use super::*;

    fn student(name: &str, email: &str) -> Student {
        Student {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_assign_students() {
        let roster = vec![
            student("Ada", "ada@example.com"),
            student("Alan", ""),
            student("Grace", "grace@example.com"),
        ];

        let assigned = assign_students(roster, "lab.example.com", 2222);

        assert_eq!(assigned.len(), 3);
        for (index, student) in assigned.iter().enumerate() {
            assert_eq!(student.login, format!("student{}", index + 1));
            assert_eq!(student.host, "lab.example.com");
            assert_eq!(student.ssh_port, 2222);
        }
        assert_eq!(assigned[0].name, "Ada");
        assert_eq!(assigned[1].name, "Alan");
        assert!(assigned[1].email.is_empty());
        assert_eq!(assigned[2].email, "grace@example.com");
    }

    #[test]
    fn test_empty_host_is_written_through() {
        let assigned = assign_students(vec![student("Ada", "")], "", DEFAULT_SSH_PORT);

        assert_eq!(assigned[0].login, "student1");
        assert_eq!(assigned[0].host, "");
        assert_eq!(assigned[0].ssh_port, 22);
    }

    #[test]
    fn test_empty_roster() {
        assert!(assign_students(vec![], "lab.example.com", 22).is_empty());
    }

    #[test]
    fn test_assign_roster_keeps_event() {
        let event = Event {
            title: "Training".to_string(),
            location: "HQ".to_string(),
            schedule: vec![],
            students: vec![student("Ada", "ada@example.com")],
        };

        let assigned = assign_roster(event, "lab.example.com", 2200);

        assert_eq!(assigned.title, "Training");
        assert_eq!(assigned.students[0].login, "student1");
        assert_eq!(assigned.students[0].ssh_port, 2200);
    }
}
