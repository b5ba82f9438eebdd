use std::collections::HashSet;

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Scroll targets of the page, in document order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Promoters,
    Sectors,
    Contact,
}

impl Section {
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Promoters => "promoters",
            Section::Sectors => "sectors",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About us",
            Section::Promoters => "Promoters",
            Section::Sectors => "Sectors",
            Section::Contact => "Contact",
        }
    }
}

/// Ephemeral UI state of one rendered page.
///
/// The menu flag follows the last open/close/scroll event. A section that has
/// entered the viewport stays revealed.
#[derive(Debug, Clone)]
pub struct Shell {
    menu_open: bool,
    revealed: HashSet<Section>,
    scroll_target: Option<Section>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// The hero is visible on load.
    pub fn new() -> Self {
        Self {
            menu_open: false,
            revealed: HashSet::from([Section::Home]),
            scroll_target: None,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn on_scroll(&mut self) {
        self.close_menu();
    }

    /// Returns the anchor to scroll to. Closes the menu.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.close_menu();
        self.reveal(section);
        self.scroll_target = Some(section);

        section.anchor()
    }

    pub fn reveal(&mut self, section: Section) {
        self.revealed.insert(section);
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    pub fn scroll_target(&self) -> Option<Section> {
        self.scroll_target
    }

    /// CSS classes for a `fade-in-section` wrapper.
    pub fn section_class(&self, section: Section) -> &'static str {
        if self.is_revealed(section) {
            "fade-in-section animate-in"
        } else {
            "fade-in-section"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in Section::VARIANTS {
            assert_eq!(Section::from_str(section.anchor()).unwrap(), *section);
        }
        assert!(Section::from_str("pricing").is_err());
    }

    #[test]
    fn menu_follows_last_event() {
        let mut shell = Shell::new();
        assert!(!shell.is_menu_open());

        shell.open_menu();
        assert!(shell.is_menu_open());

        shell.on_scroll();
        assert!(!shell.is_menu_open());

        shell.toggle_menu();
        assert!(shell.is_menu_open());

        shell.close_menu();
        assert!(!shell.is_menu_open());
    }

    #[test]
    fn navigate_closes_menu_and_targets_anchor() {
        let mut shell = Shell::new();
        shell.open_menu();

        let anchor = shell.navigate(Section::Sectors);

        assert_eq!(anchor, "sectors");
        assert!(!shell.is_menu_open());
        assert_eq!(shell.scroll_target(), Some(Section::Sectors));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut shell = Shell::new();
        assert!(shell.is_revealed(Section::Home));
        assert!(!shell.is_revealed(Section::About));
        assert_eq!(shell.section_class(Section::About), "fade-in-section");

        shell.reveal(Section::About);
        shell.on_scroll();
        shell.navigate(Section::Contact);

        assert!(shell.is_revealed(Section::About));
        assert_eq!(
            shell.section_class(Section::About),
            "fade-in-section animate-in"
        );
    }
}
