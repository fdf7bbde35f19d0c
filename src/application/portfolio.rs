//! Portfolio state: a fixed profile and the section selector.

use crate::domain::Profile;

/// Sections of the portfolio page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioSection {
    Hero,
    Skills,
    Experience,
    Certifications,
    Contact,
}

impl PortfolioSection {
    pub const ALL: [PortfolioSection; 5] = [
        PortfolioSection::Hero,
        PortfolioSection::Skills,
        PortfolioSection::Experience,
        PortfolioSection::Certifications,
        PortfolioSection::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortfolioSection::Hero => "About",
            PortfolioSection::Skills => "Skills",
            PortfolioSection::Experience => "Experience",
            PortfolioSection::Certifications => "Certifications",
            PortfolioSection::Contact => "Contact",
        }
    }
}

/// The content never changes at runtime; the only state is which section is
/// on screen.
#[derive(Debug)]
pub struct PortfolioApp {
    pub profile: Profile,
    pub section: PortfolioSection,
}

impl PortfolioApp {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            section: PortfolioSection::Hero,
        }
    }

    pub fn next_section(&mut self) {
        let index = Self::index_of(self.section);
        self.section = PortfolioSection::ALL[(index + 1) % PortfolioSection::ALL.len()];
    }

    pub fn previous_section(&mut self) {
        let index = Self::index_of(self.section);
        let count = PortfolioSection::ALL.len();
        self.section = PortfolioSection::ALL[(index + count - 1) % count];
    }

    pub fn jump_to(&mut self, section: PortfolioSection) {
        self.section = section;
    }

    fn index_of(section: PortfolioSection) -> usize {
        PortfolioSection::ALL
            .iter()
            .position(|candidate| *candidate == section)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Test Person".to_string(),
            roles: vec!["Developer".to_string()],
            summary: String::new(),
            skills: vec![],
            experiences: vec![],
            certifications: vec![],
            email: "test@example.dev".to_string(),
            location: "Remote".to_string(),
        }
    }

    #[test]
    fn test_starts_on_hero_section() {
        let app = PortfolioApp::new(profile());
        assert_eq!(app.section, PortfolioSection::Hero);
    }

    #[test]
    fn test_section_cycle_wraps_both_ways() {
        let mut app = PortfolioApp::new(profile());

        app.previous_section();
        assert_eq!(app.section, PortfolioSection::Contact);

        app.next_section();
        assert_eq!(app.section, PortfolioSection::Hero);
        app.next_section();
        assert_eq!(app.section, PortfolioSection::Skills);
    }

    #[test]
    fn test_jump_to_targets_one_section() {
        let mut app = PortfolioApp::new(profile());
        app.jump_to(PortfolioSection::Certifications);
        assert_eq!(app.section, PortfolioSection::Certifications);
    }
}
