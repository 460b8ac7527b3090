//! Top navigation: sections, the apps menu and the user menu.

/// Viewport width at or below which section links are hidden.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
/// Viewport width from which the apps menu is shown.
pub const LARGE_MIN_WIDTH: f64 = 1200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Analytics,
    Revenue,
    Crm,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::Analytics,
        NavSection::Revenue,
        NavSection::Crm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Analytics => "Analytics",
            NavSection::Revenue => "Revenue",
            NavSection::Crm => "CRM",
        }
    }
}

/// An entry of the apps menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppItem {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const APP_ITEMS: &[AppItem] = &[
    AppItem { title: "Link in Bio", description: "Manage your Link in Bio", href: "/link-in-bio" },
    AppItem { title: "Store", description: "Manage your Store activities", href: "/store" },
    AppItem { title: "Media Kit", description: "Manage your Media Kit", href: "/media-kit" },
    AppItem { title: "Invoicing", description: "Manage your Invoices", href: "/invoices" },
    AppItem { title: "Bookings", description: "Manage your Bookings", href: "/bookings" },
];

pub const USER_MENU_ITEMS: &[&str] = &[
    "Settings",
    "Purchase History",
    "Refer and Earn",
    "Integrations",
    "Report Bug",
    "Switch Account",
    "Sign Out",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveNav {
    Section(NavSection),
    /// Apps menu opened, no app picked yet.
    Apps,
    /// An app from the apps menu is active.
    AppsItem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active: ActiveNav,
    pub active_app_item: &'static str,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: ActiveNav::Section(NavSection::Home),
            active_app_item: APP_ITEMS[0].title,
        }
    }
}

impl NavState {
    pub fn select_section(&mut self, section: NavSection) {
        self.active = ActiveNav::Section(section);
    }

    /// Clicking the apps trigger keeps an already active app selected.
    pub fn open_apps(&mut self) {
        if !self.apps_active() {
            self.active = ActiveNav::Apps;
        }
    }

    pub fn select_app_item(&mut self, item: &AppItem) {
        self.active_app_item = item.title;
        self.active = ActiveNav::AppsItem;
    }

    pub fn is_section_active(&self, section: NavSection) -> bool {
        self.active == ActiveNav::Section(section)
    }

    pub fn apps_active(&self) -> bool {
        matches!(self.active, ActiveNav::Apps | ActiveNav::AppsItem)
    }

    /// The trigger splits into "Apps | <item>" once an app is picked.
    pub fn expanded_apps(&self) -> bool {
        self.active == ActiveNav::AppsItem
    }

    pub fn apps_display_text(&self) -> &'static str {
        if self.expanded_apps() {
            self.active_app_item
        } else {
            APP_ITEMS[0].title
        }
    }
}

/// Which parts of the nav bar fit the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLayout {
    pub show_sections: bool,
    pub show_apps: bool,
}

impl NavLayout {
    pub fn for_width(width: f64) -> Self {
        Self {
            show_sections: width > MOBILE_MAX_WIDTH,
            show_apps: width >= LARGE_MIN_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        let nav = NavState::default();
        assert!(nav.is_section_active(NavSection::Home));
        assert!(!nav.apps_active());
        assert_eq!(nav.apps_display_text(), "Link in Bio");
    }

    #[test]
    fn test_app_item_selection_expands_trigger() {
        let mut nav = NavState::default();
        nav.open_apps();
        assert_eq!(nav.active, ActiveNav::Apps);
        assert!(!nav.expanded_apps());

        nav.select_app_item(&APP_ITEMS[3]);
        assert!(nav.expanded_apps());
        assert_eq!(nav.apps_display_text(), "Invoicing");

        nav.open_apps();
        assert_eq!(nav.active, ActiveNav::AppsItem);

        nav.select_section(NavSection::Crm);
        assert!(!nav.apps_active());
        assert_eq!(nav.apps_display_text(), "Link in Bio");
        assert_eq!(nav.active_app_item, "Invoicing");
    }

    #[test]
    fn test_layout_breakpoints() {
        assert_eq!(
            NavLayout::for_width(768.0),
            NavLayout { show_sections: false, show_apps: false }
        );
        assert_eq!(
            NavLayout::for_width(1024.0),
            NavLayout { show_sections: true, show_apps: false }
        );
        assert_eq!(
            NavLayout::for_width(1440.0),
            NavLayout { show_sections: true, show_apps: true }
        );
    }

    #[test]
    fn test_menu_contents() {
        assert_eq!(APP_ITEMS.len(), 5);
        assert_eq!(USER_MENU_ITEMS.first(), Some(&"Settings"));
        assert_eq!(USER_MENU_ITEMS.last(), Some(&"Sign Out"));
        assert_eq!(NavSection::Crm.label(), "CRM");
    }
}
