//! Mobile navigation menu as a two-state machine.

pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    HamburgerClick,
    LinkClick,
    /// A click whose target is inside neither the menu nor the hamburger.
    OutsideClick,
    Escape,
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyScroll {
    Locked,
    Unlocked,
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuTransition {
    pub state: MenuState,
    pub body: BodyScroll,
}

#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Applies `event` and returns the transition to render, or `None` when
    /// nothing changes.
    pub fn handle(&mut self, event: MenuEvent, viewport_width: f64) -> Option<MenuTransition> {
        match event {
            MenuEvent::HamburgerClick => {
                self.state = match self.state {
                    MenuState::Closed => MenuState::Open,
                    MenuState::Open => MenuState::Closed,
                };
                let body = if viewport_width < MOBILE_BREAKPOINT {
                    if self.state.is_open() {
                        BodyScroll::Locked
                    } else {
                        BodyScroll::Unlocked
                    }
                } else {
                    BodyScroll::Unchanged
                };
                Some(MenuTransition {
                    state: self.state,
                    body,
                })
            }
            MenuEvent::Resize if viewport_width <= MOBILE_BREAKPOINT => None,
            MenuEvent::LinkClick | MenuEvent::OutsideClick | MenuEvent::Escape | MenuEvent::Resize => {
                self.force_close()
            }
        }
    }

    fn force_close(&mut self) -> Option<MenuTransition> {
        if !self.state.is_open() {
            return None;
        }
        self.state = MenuState::Closed;
        Some(MenuTransition {
            state: MenuState::Closed,
            body: BodyScroll::Unlocked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: f64 = 390.0;
    const DESKTOP: f64 = 1440.0;

    fn opened(width: f64) -> MenuController {
        let mut menu = MenuController::default();
        menu.handle(MenuEvent::HamburgerClick, width);
        assert_eq!(menu.state(), MenuState::Open);
        menu
    }

    #[test]
    fn even_toggles_return_to_closed() {
        let mut menu = MenuController::default();
        for round in 1..=6 {
            menu.handle(MenuEvent::HamburgerClick, PHONE);
            let expected = if round % 2 == 0 {
                MenuState::Closed
            } else {
                MenuState::Open
            };
            assert_eq!(menu.state(), expected);
        }
    }

    #[test]
    fn body_lock_only_on_narrow_viewports() {
        let mut menu = MenuController::default();
        let open = menu.handle(MenuEvent::HamburgerClick, PHONE).unwrap();
        assert_eq!(open.body, BodyScroll::Locked);
        let closed = menu.handle(MenuEvent::HamburgerClick, PHONE).unwrap();
        assert_eq!(closed.body, BodyScroll::Unlocked);

        let wide = menu.handle(MenuEvent::HamburgerClick, DESKTOP).unwrap();
        assert_eq!(wide.body, BodyScroll::Unchanged);
    }

    #[test]
    fn external_events_force_closed() {
        for event in [MenuEvent::LinkClick, MenuEvent::OutsideClick, MenuEvent::Escape] {
            let mut menu = opened(PHONE);
            assert_eq!(
                menu.handle(event, PHONE),
                Some(MenuTransition {
                    state: MenuState::Closed,
                    body: BodyScroll::Unlocked,
                })
            );
            assert_eq!(menu.state(), MenuState::Closed);
        }
    }

    #[test]
    fn forced_close_on_closed_menu_is_a_no_op() {
        let mut menu = MenuController::default();
        assert_eq!(menu.handle(MenuEvent::Escape, PHONE), None);
        assert_eq!(menu.handle(MenuEvent::OutsideClick, PHONE), None);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn resize_closes_only_above_breakpoint() {
        let mut menu = opened(PHONE);
        assert_eq!(menu.handle(MenuEvent::Resize, MOBILE_BREAKPOINT), None);
        assert!(menu.state().is_open());

        assert!(menu.handle(MenuEvent::Resize, MOBILE_BREAKPOINT + 1.0).is_some());
        assert_eq!(menu.state(), MenuState::Closed);
    }
}
