// SPDX-License-Identifier: MPL-2.0
//! Open/close state machine for disclosure menus.
//!
//! At most one menu is open at any time. The invariant lives in the type:
//! the controller keeps a single `Option<MenuId>` slot instead of a flag per
//! menu. Triggers and content are tied together by `MenuId`, not by layout
//! position.

/// Identifier tying a trigger to the content it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(u32);

/// One entry of a menu's content.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<A> {
    pub label: String,
    pub action: A,
}

impl<A> MenuItem<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// A registered menu: trigger label plus content items.
#[derive(Debug, Clone)]
pub struct Menu<A> {
    id: MenuId,
    label: String,
    items: Vec<MenuItem<A>>,
}

impl<A> Menu<A> {
    #[must_use]
    pub fn id(&self) -> MenuId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem<A>] {
        &self.items
    }
}

/// Where a pointer press landed, relative to the menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The trigger of a menu.
    Trigger(MenuId),
    /// Anywhere else inside a menu container, content included.
    Inside(MenuId),
    /// Outside every menu container.
    Outside,
}

/// Messages emitted by menu widgets and the window-level click listener.
#[derive(Debug, Clone)]
pub enum Message<A> {
    Toggle(MenuId),
    Select(MenuId, A),
    PointerEntered(MenuId),
    PointerLeft(MenuId),
    /// A left-button press anywhere in the window.
    PointerPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<A> {
    None,
    Selected(MenuId, A),
}

/// Tracks registered menus, the open one, and the container under the
/// pointer.
#[derive(Debug, Clone)]
pub struct Controller<A> {
    menus: Vec<Menu<A>>,
    open: Option<MenuId>,
    hovered: Option<MenuId>,
    next_id: u32,
}

impl<A> Default for Controller<A> {
    fn default() -> Self {
        Self {
            menus: Vec::new(),
            open: None,
            hovered: None,
            next_id: 0,
        }
    }
}

impl<A: Clone> Controller<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a menu. It starts closed.
    pub fn register(&mut self, label: impl Into<String>, items: Vec<MenuItem<A>>) -> MenuId {
        let id = MenuId(self.next_id);
        self.next_id += 1;
        self.menus.push(Menu {
            id,
            label: label.into(),
            items,
        });
        id
    }

    /// Forgets a menu whose owner went away. Returns `false` if unknown.
    pub fn unregister(&mut self, id: MenuId) -> bool {
        let Some(pos) = self.menus.iter().position(|menu| menu.id == id) else {
            return false;
        };
        self.menus.remove(pos);
        if self.open == Some(id) {
            self.open = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        true
    }

    /// Closes every other menu, then flips `id`.
    ///
    /// Toggling a closed menu leaves exactly that menu open; toggling the
    /// open one leaves none open.
    pub fn toggle(&mut self, id: MenuId) {
        if self.get(id).is_none() {
            log::warn!("toggle requested for unknown menu {id:?}");
            return;
        }

        let was_open = self.open == Some(id);
        if let Some(other) = self.open.filter(|open| *open != id) {
            log::debug!("menu {other:?} closed by toggle of {id:?}");
        }
        self.open = None;

        if !was_open {
            self.open = Some(id);
        }
        log::debug!("menu {id:?} toggled, open = {:?}", self.open);
    }

    /// Forces every menu closed.
    pub fn close_all(&mut self) {
        if let Some(id) = self.open.take() {
            log::debug!("menu {id:?} closed");
        }
    }

    /// Applies a pointer press to the state machine.
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Trigger(id) => self.toggle(id),
            // Presses inside a container never reach the outside handler.
            ClickTarget::Inside(_) => {}
            ClickTarget::Outside => self.close_all(),
        }
    }

    /// Resolves a window-level press from the container under the pointer.
    #[must_use]
    pub fn press_target(&self) -> ClickTarget {
        self.hovered.map_or(ClickTarget::Outside, ClickTarget::Inside)
    }

    /// Processes a menu message and returns the corresponding event.
    pub fn update(&mut self, message: Message<A>) -> Event<A> {
        match message {
            Message::Toggle(id) => {
                self.handle_click(ClickTarget::Trigger(id));
                Event::None
            }
            Message::Select(id, action) => {
                if self.get(id).is_none() {
                    log::warn!("selection from unknown menu {id:?}");
                    return Event::None;
                }
                self.close_all();
                Event::Selected(id, action)
            }
            Message::PointerEntered(id) => {
                self.hovered = Some(id);
                Event::None
            }
            Message::PointerLeft(id) => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                Event::None
            }
            Message::PointerPressed => {
                self.handle_click(self.press_target());
                Event::None
            }
        }
    }

    #[must_use]
    pub fn is_open(&self, id: MenuId) -> bool {
        self.open == Some(id)
    }

    #[must_use]
    pub fn open_menu(&self) -> Option<MenuId> {
        self.open
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        usize::from(self.open.is_some())
    }

    #[must_use]
    pub fn get(&self, id: MenuId) -> Option<&Menu<A>> {
        self.menus.iter().find(|menu| menu.id == id)
    }

    pub fn menus(&self) -> impl Iterator<Item = &Menu<A>> {
        self.menus.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        Edit,
        Delete,
    }

    fn controller_with_two() -> (Controller<Action>, MenuId, MenuId) {
        let mut controller = Controller::new();
        let a = controller.register(
            "a",
            vec![
                MenuItem::new("Edit", Action::Edit),
                MenuItem::new("Delete", Action::Delete),
            ],
        );
        let b = controller.register("b", vec![MenuItem::new("Edit", Action::Edit)]);
        (controller, a, b)
    }

    #[test]
    fn menus_start_closed() {
        let (controller, a, b) = controller_with_two();
        assert!(!controller.is_open(a));
        assert!(!controller.is_open(b));
        assert_eq!(controller.open_count(), 0);
    }

    #[test]
    fn toggle_opens_a_closed_menu() {
        let (mut controller, a, _) = controller_with_two();
        controller.toggle(a);
        assert!(controller.is_open(a));
        assert_eq!(controller.open_count(), 1);
    }

    #[test]
    fn toggle_closes_the_other_open_menu() {
        let (mut controller, a, b) = controller_with_two();
        controller.toggle(b);
        controller.toggle(a);

        assert!(controller.is_open(a));
        assert!(!controller.is_open(b));
        assert_eq!(controller.open_menu(), Some(a));
    }

    #[test]
    fn toggle_of_open_menu_leaves_none_open() {
        let (mut controller, a, _) = controller_with_two();
        controller.toggle(a);
        controller.toggle(a);
        assert_eq!(controller.open_count(), 0);
    }

    #[test]
    fn toggle_of_unknown_menu_is_ignored() {
        let (mut controller, a, _) = controller_with_two();
        controller.toggle(a);
        controller.toggle(MenuId(999));
        assert!(controller.is_open(a));
    }

    #[test]
    fn outside_click_closes_everything() {
        let (mut controller, a, _) = controller_with_two();
        controller.toggle(a);
        controller.handle_click(ClickTarget::Outside);
        assert_eq!(controller.open_count(), 0);
    }

    #[test]
    fn click_inside_open_content_keeps_it_open() {
        let (mut controller, a, _) = controller_with_two();
        controller.toggle(a);
        controller.handle_click(ClickTarget::Inside(a));
        assert!(controller.is_open(a));
    }

    #[test]
    fn pointer_press_resolves_through_hover_state() {
        let (mut controller, a, b) = controller_with_two();
        controller.update(Message::Toggle(a));

        controller.update(Message::PointerEntered(a));
        assert_eq!(controller.press_target(), ClickTarget::Inside(a));
        controller.update(Message::PointerPressed);
        assert!(controller.is_open(a));

        // Leaving a different container must not clear the hover.
        controller.update(Message::PointerLeft(b));
        assert_eq!(controller.press_target(), ClickTarget::Inside(a));

        controller.update(Message::PointerLeft(a));
        controller.update(Message::PointerPressed);
        assert_eq!(controller.open_count(), 0);
    }

    #[test]
    fn trigger_press_is_not_treated_as_outside() {
        let (mut controller, a, _) = controller_with_two();
        // The window-level press arrives before the button publishes on release.
        controller.update(Message::PointerEntered(a));
        controller.update(Message::PointerPressed);
        controller.update(Message::Toggle(a));
        assert!(controller.is_open(a));
    }

    #[test]
    fn pressing_another_trigger_moves_the_open_slot() {
        let (mut controller, a, b) = controller_with_two();
        controller.update(Message::PointerEntered(a));
        controller.update(Message::PointerPressed);
        controller.update(Message::Toggle(a));
        assert!(controller.is_open(a));

        // Containers may report enter before exit when the pointer crosses.
        controller.update(Message::PointerEntered(b));
        controller.update(Message::PointerLeft(a));
        controller.update(Message::PointerPressed);
        assert!(controller.is_open(a));
        controller.update(Message::Toggle(b));

        assert!(!controller.is_open(a));
        assert!(controller.is_open(b));
        assert_eq!(controller.open_count(), 1);

        controller.update(Message::PointerLeft(b));
        controller.update(Message::PointerPressed);
        assert_eq!(controller.open_count(), 0);
    }

    #[test]
    fn select_closes_menu_and_emits_event() {
        let (mut controller, a, _) = controller_with_two();
        controller.toggle(a);

        let event = controller.update(Message::Select(a, Action::Delete));
        assert_eq!(event, Event::Selected(a, Action::Delete));
        assert_eq!(controller.open_count(), 0);
    }

    #[test]
    fn unregister_clears_open_slot() {
        let (mut controller, a, b) = controller_with_two();
        controller.toggle(a);

        assert!(controller.unregister(a));
        assert!(!controller.unregister(a));
        assert_eq!(controller.open_count(), 0);
        assert_eq!(controller.menus().count(), 1);
        assert!(controller.get(b).is_some());
    }
}
