use crate::config::MENU_HEIGHT_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A document click; `inside_controls` is true when the target sits inside
    /// the menu items, either menu icon, or the logo.
    DocumentClick { inside_controls: bool },
    NavLinkClicked,
    Escape,
}

/// What the two menu icons should look like for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuPresentation {
    pub bar_visible: bool,
    pub close_visible: bool,
    pub close_raised: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => self.toggled(),
            MenuAction::DocumentClick { inside_controls } => {
                if closes_on_outside_click(self.open, inside_controls) {
                    self.closed()
                } else {
                    self
                }
            }
            MenuAction::NavLinkClicked | MenuAction::Escape => self.closed(),
        }
    }

    pub fn presentation(self) -> MenuPresentation {
        MenuPresentation {
            bar_visible: !self.open,
            close_visible: self.open,
            close_raised: self.open,
        }
    }
}

pub fn closes_on_outside_click(open: bool, inside_controls: bool) -> bool {
    open && !inside_controls
}

pub fn menu_enabled(viewport_height: f64) -> bool {
    viewport_height <= MENU_HEIGHT_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerChange {
    Attach,
    Detach,
    Keep,
}

pub fn listener_change(attached: bool, viewport_height: f64) -> ListenerChange {
    match (attached, menu_enabled(viewport_height)) {
        (false, true) => ListenerChange::Attach,
        (true, false) => ListenerChange::Detach,
        _ => ListenerChange::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_presentation() {
        let start = MenuState::default();
        let twice = start.apply(MenuAction::Toggle).apply(MenuAction::Toggle);
        assert_eq!(twice, start);
        assert_eq!(twice.presentation(), start.presentation());
    }

    #[test]
    fn open_menu_swaps_icons_and_raises_close() {
        let open = MenuState::default().toggled();
        assert!(open.is_open());
        assert_eq!(
            open.presentation(),
            MenuPresentation {
                bar_visible: false,
                close_visible: true,
                close_raised: true,
            }
        );
    }

    #[test]
    fn outside_click_only_closes_open_menu() {
        let open = MenuState::default().toggled();
        assert!(!open
            .apply(MenuAction::DocumentClick { inside_controls: false })
            .is_open());
        assert!(open
            .apply(MenuAction::DocumentClick { inside_controls: true })
            .is_open());

        let closed = MenuState::default();
        assert_eq!(
            closed.apply(MenuAction::DocumentClick { inside_controls: false }),
            closed
        );
    }

    #[test]
    fn escape_and_nav_links_close() {
        let open = MenuState::default().toggled();
        assert!(!open.apply(MenuAction::Escape).is_open());
        assert!(!open.apply(MenuAction::NavLinkClicked).is_open());
    }

    #[test]
    fn shrinking_viewport_attaches_listeners() {
        assert_eq!(listener_change(false, 1200.0), ListenerChange::Keep);
        assert_eq!(listener_change(false, 900.0), ListenerChange::Attach);
        assert_eq!(listener_change(true, 900.0), ListenerChange::Keep);
        assert_eq!(listener_change(true, 1200.0), ListenerChange::Detach);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(menu_enabled(1050.0));
        assert!(!menu_enabled(1050.5));
    }
}
