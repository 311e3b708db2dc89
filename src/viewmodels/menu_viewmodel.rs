// ============================================================================
// MENU VIEWMODEL - Máquina de estados del menú móvil
// ============================================================================
// Sin DOM: la vista traduce eventos del navegador a `MenuEvent` y aplica el
// resultado (clase `is-open`, `aria-expanded`, foco).
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    /// Click en el botón hamburguesa
    TogglePressed,
    /// Click en un enlace dentro del menú
    LinkClicked,
    EscapePressed,
    /// Click en el documento fuera del menú y del botón
    OutsideClick { viewport_width: f64 },
    Resized { viewport_width: f64 },
}

/// Resultado de procesar un evento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTransition {
    pub state: MenuState,
    /// `true` si el estado cambió (la vista debe re-escribir el DOM)
    pub changed: bool,
    /// Devolver el foco al botón
    pub focus_toggle: bool,
}

#[derive(Debug, Clone)]
pub struct MenuViewModel {
    state: MenuState,
    breakpoint: f64,
}

impl MenuViewModel {
    pub fn new(initial: MenuState, breakpoint: f64) -> Self {
        Self {
            state: initial,
            breakpoint,
        }
    }

    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width < self.breakpoint
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuTransition {
        let previous = self.state;
        let mut focus_toggle = false;

        let next = match (event, previous) {
            (MenuEvent::TogglePressed, MenuState::Open) => MenuState::Closed,
            (MenuEvent::TogglePressed, MenuState::Closed) => MenuState::Open,
            (MenuEvent::LinkClicked, _) => MenuState::Closed,
            (MenuEvent::EscapePressed, MenuState::Open) => {
                focus_toggle = true;
                MenuState::Closed
            }
            (MenuEvent::EscapePressed, MenuState::Closed) => MenuState::Closed,
            (MenuEvent::OutsideClick { viewport_width }, MenuState::Open)
                if self.is_mobile(viewport_width) =>
            {
                MenuState::Closed
            }
            (MenuEvent::OutsideClick { .. }, state) => state,
            // Evita que un menú abierto en móvil quede "pegado" al pasar a escritorio
            (MenuEvent::Resized { viewport_width }, state) => {
                if self.is_mobile(viewport_width) {
                    state
                } else {
                    MenuState::Closed
                }
            }
        };

        self.state = next;
        MenuTransition {
            state: next,
            changed: next != previous,
            focus_toggle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREAKPOINT: f64 = 900.0;

    fn menu(initial: MenuState) -> MenuViewModel {
        MenuViewModel::new(initial, BREAKPOINT)
    }

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut vm = menu(MenuState::Closed);
        assert_eq!(vm.handle(MenuEvent::TogglePressed).state, MenuState::Open);
        assert_eq!(vm.handle(MenuEvent::TogglePressed).state, MenuState::Closed);
    }

    #[test]
    fn resize_to_desktop_always_closes() {
        for initial in [MenuState::Open, MenuState::Closed] {
            let mut vm = menu(initial);
            let t = vm.handle(MenuEvent::Resized { viewport_width: BREAKPOINT });
            assert_eq!(t.state, MenuState::Closed);
            let t = vm.handle(MenuEvent::Resized { viewport_width: 1440.0 });
            assert_eq!(t.state, MenuState::Closed);
        }
    }

    #[test]
    fn resize_within_mobile_keeps_state() {
        let mut vm = menu(MenuState::Open);
        let t = vm.handle(MenuEvent::Resized { viewport_width: 480.0 });
        assert_eq!(t.state, MenuState::Open);
        assert!(!t.changed);
    }

    #[test]
    fn escape_while_open_closes_and_focuses_toggle() {
        let mut vm = menu(MenuState::Open);
        let t = vm.handle(MenuEvent::EscapePressed);
        assert_eq!(t.state, MenuState::Closed);
        assert!(t.changed);
        assert!(t.focus_toggle);
    }

    #[test]
    fn escape_while_closed_does_nothing() {
        let mut vm = menu(MenuState::Closed);
        let t = vm.handle(MenuEvent::EscapePressed);
        assert!(!t.changed);
        assert!(!t.focus_toggle);
    }

    #[test]
    fn link_click_closes() {
        let mut vm = menu(MenuState::Open);
        assert_eq!(vm.handle(MenuEvent::LinkClicked).state, MenuState::Closed);
    }

    #[test]
    fn outside_click_closes_only_on_mobile() {
        let mut vm = menu(MenuState::Open);
        let t = vm.handle(MenuEvent::OutsideClick { viewport_width: 1200.0 });
        assert_eq!(t.state, MenuState::Open);

        let t = vm.handle(MenuEvent::OutsideClick { viewport_width: 375.0 });
        assert_eq!(t.state, MenuState::Closed);
        assert!(t.changed);
        assert!(!t.focus_toggle);
    }
}
