//! Core components of plugui: the widget contract and the window and application
//! handles it relies on.

pub mod app;
pub mod error;
pub mod event;
pub mod geometry;
pub mod widget;
pub mod window;

pub use euclid;

pub mod prelude {
    pub use crate::{
        app::App,
        event::{EventContext, InputEvent, Modifiers},
        geometry::{Point, Rect, Size},
        widget::{AsWidgetBase, Widget, WidgetBase, WidgetExt},
        window::{Window, WindowOptions},
    };
}
