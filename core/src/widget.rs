//! The widget contract shared by every visual element.

use crate::{
    app::App,
    event::{
        InputEvent, KeyboardEvent, Modifiers, MotionEvent, MouseEvent, ScrollEvent, SpecialEvent,
    },
    geometry::{self, Point, Rect, Size},
    window::{WidgetKey, Window},
};

/// State common to every widget: its parent window, area and visibility.
///
/// Creating a `WidgetBase` registers it with the parent window and dropping it
/// deregisters it, so a widget is registered exactly once for its whole life.
/// The `'w` borrow guarantees the parent outlives the widget.
#[derive(Debug)]
pub struct WidgetBase<'w> {
    parent: &'w Window,
    key: WidgetKey,
    area: Rect,
    visible: bool,
}

impl<'w> WidgetBase<'w> {
    /// Creates a visible, zero-sized widget at the origin of `parent`.
    pub fn new(parent: &'w Window) -> Self {
        WidgetBase {
            parent,
            key: parent.add_widget(),
            area: geometry::zero_rect(),
            visible: true,
        }
    }

    /// The handle under which the parent window knows this widget.
    #[inline]
    pub fn key(&self) -> WidgetKey {
        self.key
    }

    #[inline]
    pub fn parent_window(&self) -> &'w Window {
        self.parent
    }

    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }
}

impl Drop for WidgetBase<'_> {
    fn drop(&mut self) {
        self.parent.remove_widget(self.key);
    }
}

/// Access to the [`WidgetBase`] embedded in a widget.
///
/// Ideally, this wouldn't be implemented directly, but rather with `derive(AsWidgetBase)`.
pub trait AsWidgetBase<'w> {
    fn base(&self) -> &WidgetBase<'w>;

    fn base_mut(&mut self) -> &mut WidgetBase<'w>;
}

impl<'w> AsWidgetBase<'w> for WidgetBase<'w> {
    #[inline]
    fn base(&self) -> &WidgetBase<'w> {
        self
    }

    #[inline]
    fn base_mut(&mut self) -> &mut WidgetBase<'w> {
        self
    }
}

/// A positioned, sized, show/hide-able region of a window: the input hooks.
///
/// The `on_*` hooks receive input. They return `true` if the event was
/// consumed, which stops dispatch, or `false` to let it propagate to widgets
/// below. By default nothing is handled, so widgets only override the hooks
/// they care about:
/// ```ignore
/// #[derive(AsWidgetBase)]
/// struct Button<'w> {
///     #[widget_base]
///     base: WidgetBase<'w>,
///     pressed: bool,
/// }
///
/// impl<'w> Widget<'w> for Button<'w> {
///     fn on_mouse(&mut self, ev: &MouseEvent) -> bool {
///         self.pressed = ev.press;
///         self.repaint();
///         true
///     }
/// }
/// ```
///
/// Geometry, visibility and repaint live in [`WidgetExt`], which every widget
/// gets for free and cannot override.
pub trait Widget<'w>: AsWidgetBase<'w> {
    fn on_keyboard(&mut self, _ev: &KeyboardEvent) -> bool {
        false
    }

    fn on_mouse(&mut self, _ev: &MouseEvent) -> bool {
        false
    }

    fn on_motion(&mut self, _ev: &MotionEvent) -> bool {
        false
    }

    fn on_scroll(&mut self, _ev: &ScrollEvent) -> bool {
        false
    }

    fn on_special(&mut self, _ev: &SpecialEvent) -> bool {
        false
    }

    /// Called after every size change with the new size.
    fn on_reshape(&mut self, _width: i32, _height: i32) {}
}

/// Geometry, visibility and parent access for every [`Widget`].
///
/// Every mutation that changes something requests a repaint of the parent
/// window, and unchanged values are ignored. Size changes request the repaint
/// before [`on_reshape`](Widget::on_reshape) runs.
pub trait WidgetExt<'w>: Widget<'w> {
    #[inline]
    fn is_visible(&self) -> bool {
        self.base().visible
    }

    fn set_visible(&mut self, visible: bool) {
        let base = self.base_mut();
        if base.visible == visible {
            return;
        }

        base.visible = visible;
        base.parent.repaint();
    }

    #[inline]
    fn show(&mut self) {
        self.set_visible(true);
    }

    #[inline]
    fn hide(&mut self) {
        self.set_visible(false);
    }

    #[inline]
    fn x(&self) -> i32 {
        self.base().area.origin.x
    }

    #[inline]
    fn y(&self) -> i32 {
        self.base().area.origin.y
    }

    #[inline]
    fn pos(&self) -> Point {
        self.base().area.origin
    }

    fn set_x(&mut self, x: i32) {
        let base = self.base_mut();
        if base.area.origin.x == x {
            return;
        }

        base.area.origin.x = x;
        base.parent.repaint();
    }

    fn set_y(&mut self, y: i32) {
        let base = self.base_mut();
        if base.area.origin.y == y {
            return;
        }

        base.area.origin.y = y;
        base.parent.repaint();
    }

    fn set_pos(&mut self, pos: Point) {
        let base = self.base_mut();
        if base.area.origin == pos {
            return;
        }

        base.area.origin = pos;
        base.parent.repaint();
    }

    #[inline]
    fn set_pos_xy(&mut self, x: i32, y: i32) {
        self.set_pos(Point::new(x, y));
    }

    #[inline]
    fn width(&self) -> i32 {
        self.base().area.size.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.base().area.size.height
    }

    #[inline]
    fn size(&self) -> Size {
        self.base().area.size
    }

    /// Changes the width; the repaint is requested before [`on_reshape`](Widget::on_reshape) runs.
    fn set_width(&mut self, width: i32) {
        let base = self.base_mut();
        if base.area.size.width == width {
            return;
        }

        base.area.size.width = width;
        base.parent.repaint();
        let height = base.area.size.height;
        self.on_reshape(width, height);
    }

    /// Changes the height; the repaint is requested before [`on_reshape`](Widget::on_reshape) runs.
    fn set_height(&mut self, height: i32) {
        let base = self.base_mut();
        if base.area.size.height == height {
            return;
        }

        base.area.size.height = height;
        base.parent.repaint();
        let width = base.area.size.width;
        self.on_reshape(width, height);
    }

    /// Changes the size; the repaint is requested before [`on_reshape`](Widget::on_reshape) runs.
    fn set_size(&mut self, size: Size) {
        let base = self.base_mut();
        if base.area.size == size {
            return;
        }

        base.area.size = size;
        base.parent.repaint();
        self.on_reshape(size.width, size.height);
    }

    #[inline]
    fn set_size_wh(&mut self, width: i32, height: i32) {
        self.set_size(Size::new(width, height));
    }

    /// Timestamp of the event the parent window is dispatching.
    #[inline]
    fn event_timestamp(&self) -> u32 {
        self.base().parent.event_timestamp()
    }

    /// Modifiers of the event the parent window is dispatching.
    #[inline]
    fn modifiers(&self) -> Modifiers {
        self.base().parent.modifiers()
    }

    #[inline]
    fn parent_app(&self) -> &'w App {
        let parent: &'w Window = self.base().parent;
        parent.app()
    }

    #[inline]
    fn parent_window(&self) -> &'w Window {
        self.base().parent
    }

    /// Whether `(x, y)`, relative to the widget's top-left corner, lies inside it.
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        geometry::local_contains(self.size(), x, y)
    }

    #[inline]
    fn contains_point(&self, pos: Point) -> bool {
        self.contains(pos.x, pos.y)
    }

    /// Asks the parent window to repaint.
    #[inline]
    fn repaint(&self) {
        self.base().parent.repaint();
    }

    /// Routes an event to the matching `on_*` hook.
    fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Keyboard(ev) => self.on_keyboard(ev),
            InputEvent::Mouse(ev) => self.on_mouse(ev),
            InputEvent::Motion(ev) => self.on_motion(ev),
            InputEvent::Scroll(ev) => self.on_scroll(ev),
            InputEvent::Special(ev) => self.on_special(ev),
        }
    }
}

impl<'w, W: Widget<'w> + ?Sized> WidgetExt<'w> for W {}

impl<'w> Widget<'w> for WidgetBase<'w> {}
