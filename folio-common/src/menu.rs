//! Mobile navigation menu state

/// Font Awesome glyph shown on the menu button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    pub fn class(&self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always collapses the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Times
        } else {
            MenuIcon::Bars
        }
    }
}
