//! The parent window collaborator: widget registry, repaint sink, input state and dispatch.

use {
    crate::{
        app::App,
        error::WindowError,
        event::{EventContext, InputEvent, Modifiers},
        geometry::Size,
        widget::{AsWidgetBase, Widget, WidgetExt},
    },
    std::cell::RefCell,
    tracing::{trace, warn},
};

slotmap::new_key_type! {
    /// Non-owning handle a window keeps for each registered widget.
    pub struct WidgetKey;
}

/// Window configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    pub title: String,
    pub size: Size,
    pub min_size: Option<Size>,
    pub resizable: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        WindowOptions {
            title: String::new(),
            size: Size::new(640, 480),
            min_size: None,
            resizable: true,
        }
    }
}

impl WindowOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_size = Some(Size::new(width, height));
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

fn validate_size(size: Size, min_size: Option<Size>) -> Result<(), WindowError> {
    if size.width <= 0 || size.height <= 0 {
        return Err(WindowError::InvalidSize {
            width: size.width,
            height: size.height,
        });
    }

    if let Some(min) = min_size {
        if size.width < min.width || size.height < min.height {
            return Err(WindowError::BelowMinimumSize {
                width: size.width,
                height: size.height,
                min_width: min.width,
                min_height: min.height,
            });
        }
    }

    Ok(())
}

#[derive(Debug)]
struct WindowState {
    widgets: slotmap::SlotMap<WidgetKey, ()>,
    // stacking order, bottom to top
    order: Vec<WidgetKey>,
    repaint_pending: bool,
    repaint_requests: u64,
    context: EventContext,
    title: String,
    size: Size,
    min_size: Option<Size>,
    resizable: bool,
    visible: bool,
}

/// A window owning a set of widgets.
///
/// Widgets borrow their window for their whole lifetime, so a window cannot be
/// dropped while any of its widgets is alive.
#[derive(Debug)]
pub struct Window {
    app: App,
    state: RefCell<WindowState>,
}

impl Window {
    /// Creates a hidden window attached to `app`.
    pub fn new(app: &App, options: WindowOptions) -> Result<Self, WindowError> {
        validate_size(options.size, options.min_size)?;

        app.add_window();
        trace!(title = %options.title, "window created");

        Ok(Window {
            app: app.clone(),
            state: RefCell::new(WindowState {
                widgets: Default::default(),
                order: Vec::new(),
                repaint_pending: false,
                repaint_requests: 0,
                context: EventContext::default(),
                title: options.title,
                size: options.size,
                min_size: options.min_size,
                resizable: options.resizable,
                visible: false,
            }),
        })
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }

    pub(crate) fn add_widget(&self) -> WidgetKey {
        let mut state = self.state.borrow_mut();
        let key = state.widgets.insert(());
        state.order.push(key);
        trace!(?key, "widget registered");
        key
    }

    pub(crate) fn remove_widget(&self, key: WidgetKey) {
        let mut state = self.state.borrow_mut();
        if state.widgets.remove(key).is_some() {
            state.order.retain(|k| *k != key);
            trace!(?key, "widget deregistered");
        }
    }

    /// Number of widgets currently registered.
    #[inline]
    pub fn widget_count(&self) -> usize {
        self.state.borrow().widgets.len()
    }

    #[inline]
    pub fn has_widget(&self, key: WidgetKey) -> bool {
        self.state.borrow().widgets.contains_key(key)
    }

    /// Registered widgets in stacking order, bottom to top.
    pub fn widget_keys(&self) -> Vec<WidgetKey> {
        self.state.borrow().order.clone()
    }

    /// Requests a repaint of the whole window.
    pub fn repaint(&self) {
        let mut state = self.state.borrow_mut();
        state.repaint_pending = true;
        state.repaint_requests += 1;
        trace!(requests = state.repaint_requests, "repaint requested");
    }

    #[inline]
    pub fn is_repaint_pending(&self) -> bool {
        self.state.borrow().repaint_pending
    }

    /// Returns whether a repaint was pending, clearing it.
    ///
    /// Any number of requests since the last call collapse into one repaint.
    pub fn take_repaint(&self) -> bool {
        std::mem::replace(&mut self.state.borrow_mut().repaint_pending, false)
    }

    /// Total repaint requests received since creation.
    #[inline]
    pub fn repaint_requests(&self) -> u64 {
        self.state.borrow().repaint_requests
    }

    /// Timestamp of the event currently or most recently dispatched.
    #[inline]
    pub fn event_timestamp(&self) -> u32 {
        self.state.borrow().context.time
    }

    /// Modifiers of the event currently or most recently dispatched.
    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.state.borrow().context.mods
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.state.borrow_mut().title = title.into();
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.state.borrow().size
    }

    /// Resizes the window, requesting a repaint if the size changed.
    pub fn set_size(&self, width: i32, height: i32) -> Result<(), WindowError> {
        let size = Size::new(width, height);
        {
            let mut state = self.state.borrow_mut();
            validate_size(size, state.min_size)?;
            if state.size == size {
                return Ok(());
            }
            state.size = size;
        }
        self.repaint();
        Ok(())
    }

    #[inline]
    pub fn is_resizable(&self) -> bool {
        self.state.borrow().resizable
    }

    #[inline]
    pub fn set_resizable(&self, resizable: bool) {
        self.state.borrow_mut().resizable = resizable;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn show(&self) {
        let became_visible = !std::mem::replace(&mut self.state.borrow_mut().visible, true);
        if became_visible {
            self.repaint();
        }
    }

    pub fn hide(&self) {
        self.state.borrow_mut().visible = false;
    }

    /// Offers `event` to `widgets`, top-most first, returning whether one handled it.
    ///
    /// The order of `widgets` is irrelevant; the window's stacking order decides.
    /// Hidden widgets and widgets of other windows are skipped. Mouse-button and
    /// scroll events only reach widgets under the pointer, motion events reach
    /// every visible widget. Pointer positions are given to each widget in its
    /// local coordinates.
    pub fn dispatch(
        &self,
        widgets: &mut [&mut dyn Widget<'_>],
        context: EventContext,
        event: &InputEvent,
    ) -> bool {
        self.state.borrow_mut().context = context;

        let mut candidates: Vec<(usize, usize)> = {
            let state = self.state.borrow();
            widgets
                .iter()
                .enumerate()
                .filter_map(|(idx, widget)| {
                    let base = widget.base();
                    if !std::ptr::eq(base.parent_window(), self) {
                        warn!(key = ?base.key(), "skipping widget of another window");
                        return None;
                    }
                    state
                        .order
                        .iter()
                        .position(|key| *key == base.key())
                        .map(|rank| (rank, idx))
                })
                .collect()
        };
        candidates.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        for (_, idx) in candidates {
            let widget = &mut *widgets[idx];
            if !widget.is_visible() {
                continue;
            }

            let local = match event.translated(widget.pos()) {
                Some(local) => local,
                None => continue,
            };
            let hit = match local {
                InputEvent::Mouse(ev) => widget.contains_point(ev.pos),
                InputEvent::Scroll(ev) => widget.contains_point(ev.pos),
                InputEvent::Motion(_) | InputEvent::Keyboard(_) | InputEvent::Special(_) => true,
            };

            if hit && widget.handle_event(&local) {
                trace!(key = ?widget.base().key(), "event handled");
                return true;
            }
        }

        false
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.app.remove_window();
        trace!("window destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_registers_with_app() {
        let app = App::new();
        {
            let _a = Window::new(&app, WindowOptions::default()).unwrap();
            let _b = Window::new(&app, WindowOptions::default()).unwrap();
            assert_eq!(app.window_count(), 2);
        }
        assert_eq!(app.window_count(), 0);
    }

    #[test]
    fn test_invalid_sizes() {
        let app = App::new();

        assert_eq!(
            Window::new(&app, WindowOptions::default().with_size(0, 100)).unwrap_err(),
            WindowError::InvalidSize {
                width: 0,
                height: 100
            }
        );
        assert_eq!(app.window_count(), 0);

        let window = Window::new(
            &app,
            WindowOptions::default()
                .with_size(300, 200)
                .with_min_size(200, 100),
        )
        .unwrap();

        assert_eq!(
            window.set_size(150, 150).unwrap_err(),
            WindowError::BelowMinimumSize {
                width: 150,
                height: 150,
                min_width: 200,
                min_height: 100
            }
        );
        assert_eq!(window.size(), Size::new(300, 200));
    }

    #[test]
    fn test_set_size_repaints_on_change() {
        let app = App::new();
        let window = Window::new(&app, WindowOptions::default().with_size(100, 100)).unwrap();

        window.set_size(100, 100).unwrap();
        assert_eq!(window.repaint_requests(), 0);

        window.set_size(200, 100).unwrap();
        assert_eq!(window.repaint_requests(), 1);
        assert_eq!(window.size(), Size::new(200, 100));
    }

    #[test]
    fn test_repaint_coalesces() {
        let app = App::new();
        let window = Window::new(&app, WindowOptions::default()).unwrap();

        assert!(!window.take_repaint());

        window.repaint();
        window.repaint();
        window.repaint();

        assert!(window.is_repaint_pending());
        assert_eq!(window.repaint_requests(), 3);
        assert!(window.take_repaint());
        assert!(!window.take_repaint());
    }

    #[test]
    fn test_show_hide() {
        let app = App::new();
        let window = Window::new(&app, WindowOptions::default().with_title("Gain")).unwrap();

        assert!(!window.is_visible());
        assert_eq!(window.title(), "Gain");

        window.show();
        window.show();
        assert!(window.is_visible());
        assert_eq!(window.repaint_requests(), 1);

        window.hide();
        assert!(!window.is_visible());
    }

    #[test]
    fn test_registry_order() {
        let app = App::new();
        let window = Window::new(&app, WindowOptions::default()).unwrap();

        let a = window.add_widget();
        let b = window.add_widget();
        let c = window.add_widget();
        assert_eq!(window.widget_keys(), vec![a, b, c]);

        window.remove_widget(b);
        window.remove_widget(b);
        assert_eq!(window.widget_keys(), vec![a, c]);
        assert_eq!(window.widget_count(), 2);
        assert!(!window.has_widget(b));
    }
}
