//! Static Content
//!
//! The built-in data set served through [`StaticRepository`].

use crate::domain::{NavigationEntry, Priority, Record, Status};
use crate::repository::StaticRepository;

pub fn records() -> Vec<Record> {
    vec![
        Record::new(
            "item1",
            "Project Alpha",
            "Frontend development project",
            "Today",
            Priority::High,
            Status::InProgress,
        ),
        Record::new(
            "item2",
            "Client Meeting",
            "Discuss requirements with client",
            "Yesterday",
            Priority::Medium,
            Status::Scheduled,
        ),
        Record::new(
            "item3",
            "Design Review",
            "Review UI/UX designs for mobile app",
            "2 days ago",
            Priority::High,
            Status::Pending,
        ),
        Record::new(
            "item4",
            "Sprint Planning",
            "Plan tasks for upcoming sprint",
            "3 days ago",
            Priority::Medium,
            Status::Completed,
        ),
        Record::new(
            "item5",
            "Bug Fixes",
            "Address critical bugs in production",
            "1 week ago",
            Priority::High,
            Status::InProgress,
        ),
    ]
}

pub fn navigation() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry::new("inbox", "Inbox", 5),
        NavigationEntry::new("contacts", "Contacts", 0),
        NavigationEntry::new("documents", "Documents", 2),
        NavigationEntry::new("settings", "Settings", 0),
        NavigationEntry::new("help", "Help & Support", 0),
    ]
}

pub fn record_repository() -> StaticRepository<Record> {
    StaticRepository::new(records())
}

pub fn navigation_repository() -> StaticRepository<NavigationEntry> {
    StaticRepository::new(navigation())
}

/// Signed-in user shown in the sidebar footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
}

pub const CURRENT_USER: UserProfile = UserProfile {
    name: "User Name",
    email: "user@example.com",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub author: &'static str,
    pub initials: &'static str,
    pub when: &'static str,
    pub summary: &'static str,
    pub quote: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: &'static str,
    pub size: &'static str,
    pub added: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub text: &'static str,
    pub done: bool,
}

/// Read-only listings for the detail tabs, shared by every subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFixture {
    /// Status and description shown for a navigation section
    pub section_status: Status,
    pub section_description: &'static str,
    pub started: &'static str,
    pub start_date: &'static str,
    pub due_date: &'static str,
    pub team: Vec<TeamMember>,
    /// Members beyond `team`, shown as "+N"
    pub hidden_team_count: u32,
    pub requirements: Vec<Requirement>,
    pub activity: Vec<ActivityEntry>,
    pub files: Vec<FileEntry>,
}

fn member(name: &'static str, initials: &'static str, role: &'static str) -> TeamMember {
    TeamMember { name, initials, role }
}

fn requirement(text: &'static str, done: bool) -> Requirement {
    Requirement { text, done }
}

fn file(name: &'static str, size: &'static str, added: &'static str) -> FileEntry {
    FileEntry { name, size, added }
}

impl DetailFixture {
    pub fn sample() -> Self {
        Self {
            section_status: Status::InProgress,
            section_description: "This project involves developing a responsive user interface \
                for the client's new web application. The design should follow the provided \
                Figma mockups and implement all interactive elements.",
            started: "Started 2 weeks ago",
            start_date: "October 15, 2023",
            due_date: "December 15, 2023",
            team: vec![
                member("John Doe", "JD", "Project Manager"),
                member("Jane Smith", "JS", "UI/UX Designer"),
                member("Mike Johnson", "MJ", "Frontend Developer"),
                member("Sarah Williams", "SW", "Backend Developer"),
            ],
            hidden_team_count: 3,
            requirements: vec![
                requirement("Implement responsive design for all screen sizes", true),
                requirement("Ensure accessibility compliance", true),
                requirement("Optimize performance for mobile devices", false),
                requirement("Implement state management with a single reducer", false),
                requirement("Create reusable component library", false),
            ],
            activity: vec![
                ActivityEntry {
                    author: "John Doe",
                    initials: "JD",
                    when: "2 hours ago",
                    summary: "Added new design requirements to the project.",
                    quote: Some("We need to add support for dark mode in the application."),
                },
                ActivityEntry {
                    author: "Jane Smith",
                    initials: "JS",
                    when: "Yesterday",
                    summary: "Updated the project timeline.",
                    quote: None,
                },
                ActivityEntry {
                    author: "Mike Johnson",
                    initials: "MJ",
                    when: "3 days ago",
                    summary: "Created the project and assigned team members.",
                    quote: None,
                },
            ],
            files: vec![
                file("design-specs.pdf", "2.4 MB", "Added 2 days ago"),
                file("project-timeline.xlsx", "1.8 MB", "Added 3 days ago"),
                file("requirements.docx", "1.2 MB", "Added 5 days ago"),
            ],
        }
    }

    pub fn completed_requirements(&self) -> usize {
        self.requirements.iter().filter(|r| r.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = records().iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<String> = navigation().iter().map(|e| e.id().to_string()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_record_and_navigation_ids_do_not_collide() {
        let nav: HashSet<String> = navigation().into_iter().map(|e| e.id).collect();
        assert!(records().iter().all(|r| !nav.contains(&r.id)));
    }

    #[test]
    fn test_sample_detail() {
        let fixture = DetailFixture::sample();
        assert_eq!(fixture.team.len(), 4);
        assert_eq!(fixture.completed_requirements(), 2);
        assert_eq!(fixture.files.len(), 3);
    }
}
