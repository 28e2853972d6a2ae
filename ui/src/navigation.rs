//! Screens the app can show and the capability used to switch between them.

use std::fmt;
use std::rc::Rc;

use api::ChatRoomId;
use dioxus::prelude::*;

/// A place in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Donations,
    Chat(ChatRoomId),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Donations => "Donations",
            Route::Chat(_) => "Chat",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Donations => "/donations".to_string(),
            Route::Chat(id) => format!("/chat/{id}"),
        }
    }
}

/// Something that can take the user to another screen.
///
/// Components receive this explicitly rather than reaching for global
/// routing state.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// The app's active-screen signal doubles as its navigator.
impl Navigator for Signal<Route> {
    fn navigate(&self, route: Route) {
        dioxus_logger::tracing::info!("navigating to {}", route.path());
        let mut active = *self;
        active.set(route);
    }
}

/// Shared handle to a [`Navigator`], usable as a component prop.
#[derive(Clone)]
pub struct AppNavigator(Rc<dyn Navigator>);

impl AppNavigator {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn from_rc(navigator: Rc<dyn Navigator>) -> Self {
        Self(navigator)
    }
}

impl Navigator for AppNavigator {
    fn navigate(&self, route: Route) {
        self.0.navigate(route)
    }
}

impl PartialEq for AppNavigator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AppNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppNavigator")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Remembers every route it was asked to visit.
    #[derive(Default)]
    pub struct RecordingNavigator {
        visited: RefCell<Vec<Route>>,
    }

    impl RecordingNavigator {
        pub fn visited(&self) -> Vec<Route> {
            self.visited.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: Route) {
            self.visited.borrow_mut().push(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingNavigator;
    use super::*;

    #[test]
    fn chat_route_path_carries_room_id() {
        assert_eq!(Route::Chat(ChatRoomId(42)).path(), "/chat/42");
        assert_eq!(Route::Donations.path(), "/donations");
    }

    #[test]
    fn app_navigator_forwards_and_compares_by_identity() {
        let recorder = Rc::new(RecordingNavigator::default());
        let nav = AppNavigator::from_rc(recorder.clone());
        nav.navigate(Route::Chat(ChatRoomId(3)));
        assert_eq!(recorder.visited(), vec![Route::Chat(ChatRoomId(3))]);

        assert_eq!(nav, nav.clone());
        assert_ne!(nav, AppNavigator::new(RecordingNavigator::default()));
    }
}
