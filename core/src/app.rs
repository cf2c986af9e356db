//! The application handle shared by every window of a plugin UI.

use {
    std::{
        cell::{Cell, RefCell},
        rc::Rc,
        time::Duration,
    },
    tracing::trace,
};

slotmap::new_key_type! {
    /// Handle to a registered idle callback.
    pub struct IdleCallbackKey;
}

type IdleCallback = Rc<RefCell<dyn FnMut(&App)>>;

#[derive(Default)]
struct AppState {
    idle_callbacks: RefCell<slotmap::SlotMap<IdleCallbackKey, IdleCallback>>,
    quitting: Cell<bool>,
    windows: Cell<usize>,
}

/// Shared application handle.
///
/// Cloning is cheap; all clones refer to the same application.
#[derive(Clone, Default)]
pub struct App(Rc<AppState>);

impl App {
    /// Idle interval used by [`exec`](App::exec).
    pub const IDLE_INTERVAL: Duration = Duration::from_millis(10);

    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers a callback invoked on every [`idle`](App::idle).
    ///
    /// The callback receives the application, so it never needs to capture a
    /// handle to it.
    pub fn add_idle_callback<F>(&self, callback: F) -> IdleCallbackKey
    where
        F: FnMut(&App) + 'static,
    {
        let callback: IdleCallback = Rc::new(RefCell::new(callback));
        self.0.idle_callbacks.borrow_mut().insert(callback)
    }

    /// Removes an idle callback, returning whether it was registered.
    pub fn remove_idle_callback(&self, key: IdleCallbackKey) -> bool {
        self.0.idle_callbacks.borrow_mut().remove(key).is_some()
    }

    /// Runs every idle callback once.
    ///
    /// Callbacks may add or remove idle callbacks and call [`quit`](App::quit);
    /// changes take effect on the next call.
    pub fn idle(&self) {
        let callbacks: Vec<IdleCallback> =
            self.0.idle_callbacks.borrow().values().cloned().collect();

        for callback in callbacks {
            // a callback re-entering `idle` is skipped rather than double-borrowed
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(self);
            }
        }
    }

    /// Runs [`idle`](App::idle) until [`quit`](App::quit) is called.
    pub fn exec(&self) {
        trace!("app loop started");
        while !self.is_quitting() {
            self.idle();
            if self.is_quitting() {
                break;
            }
            std::thread::sleep(Self::IDLE_INTERVAL);
        }
        trace!("app loop finished");
    }

    #[inline]
    pub fn quit(&self) {
        self.0.quitting.set(true);
    }

    #[inline]
    pub fn is_quitting(&self) -> bool {
        self.0.quitting.get()
    }

    /// Number of live windows created with this application.
    #[inline]
    pub fn window_count(&self) -> usize {
        self.0.windows.get()
    }

    pub(crate) fn add_window(&self) {
        self.0.windows.set(self.0.windows.get() + 1);
    }

    pub(crate) fn remove_window(&self) {
        self.0.windows.set(self.0.windows.get().saturating_sub(1));
    }

    /// Returns true if both handles refer to the same application.
    #[inline]
    pub fn ptr_eq(&self, other: &App) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("idle_callbacks", &self.0.idle_callbacks.borrow().len())
            .field("quitting", &self.0.quitting.get())
            .field("windows", &self.0.windows.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_runs_callbacks() {
        let app = App::new();
        let ticks = Rc::new(Cell::new(0));

        let counter = ticks.clone();
        let key = app.add_idle_callback(move |_| counter.set(counter.get() + 1));

        app.idle();
        app.idle();
        assert_eq!(ticks.get(), 2);

        assert!(app.remove_idle_callback(key));
        assert!(!app.remove_idle_callback(key));

        app.idle();
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn test_exec_until_quit() {
        let app = App::new();
        let ticks = Rc::new(Cell::new(0));

        let counter = ticks.clone();
        app.add_idle_callback(move |app| {
            counter.set(counter.get() + 1);
            if counter.get() == 3 {
                app.quit();
            }
        });

        app.exec();

        assert!(app.is_quitting());
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn test_callback_may_register_callbacks() {
        let app = App::new();
        let ticks = Rc::new(Cell::new(0));

        let counter = ticks.clone();
        app.add_idle_callback(move |app| {
            let counter = counter.clone();
            app.add_idle_callback(move |_| counter.set(counter.get() + 1));
        });

        app.idle();
        assert_eq!(ticks.get(), 0);

        app.idle();
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn test_app_freed_with_callbacks() {
        let app = App::new();
        let state = Rc::downgrade(&app.0);

        app.add_idle_callback(|app| app.quit());
        app.idle();
        assert!(app.is_quitting());

        drop(app);
        assert!(state.upgrade().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let app = App::new();
        let other = app.clone();

        other.quit();

        assert!(app.is_quitting());
        assert!(app.ptr_eq(&other));
        assert!(!app.ptr_eq(&App::new()));
    }
}
