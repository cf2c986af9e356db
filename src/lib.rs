//! Widget core for GUIs embedded in audio plugins.
//!
//! Every visual element embeds a [`WidgetBase`](widget::WidgetBase), which ties it to
//! exactly one [`Window`](window::Window) for its whole life, and implements
//! [`Widget`](widget::Widget), overriding only the input hooks it needs.

pub use plugui_core::{app, error, event, geometry, widget, window};

pub use plugui_core::euclid;

#[cfg(feature = "derive")]
#[allow(unused_imports)]
#[macro_use]
extern crate plugui_derive;

#[cfg(feature = "derive")]
pub use plugui_derive::*;

pub mod prelude {
    pub use plugui_core::prelude::*;
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use float_cmp::approx_eq;

    use crate::{
        event::{EventContext, InputEvent, MouseEvent, ScrollEvent},
        geometry::{Point, Vector},
        prelude::*,
    };

    #[test]
    fn test_widget_base_derive() {
        use crate as plugui;

        #[derive(AsWidgetBase)]
        struct Named<'w> {
            label: &'static str,
            #[widget_base]
            base: WidgetBase<'w>,
        }

        impl<'w> Widget<'w> for Named<'w> {}

        #[derive(AsWidgetBase)]
        struct Unnamed<'w>(u8, #[widget_base] WidgetBase<'w>);

        impl<'w> Widget<'w> for Unnamed<'w> {}

        let app = App::new();
        let window = Window::new(&app, WindowOptions::default()).unwrap();

        let mut named = Named {
            label: "gain",
            base: WidgetBase::new(&window),
        };
        let mut unnamed = Unnamed(7, WidgetBase::new(&window));

        named.set_pos_xy(4, 2);
        unnamed.set_size_wh(8, 8);

        assert_eq!(named.label, "gain");
        assert_eq!(unnamed.0, 7);
        assert_eq!(named.base().area().origin, Point::new(4, 2));
        assert_eq!(unnamed.base_mut().area().size, Size::new(8, 8));
        assert_eq!(window.widget_count(), 2);
    }

    #[test]
    fn test_derived_widget_overrides_hooks() {
        use crate as plugui;

        #[derive(AsWidgetBase)]
        struct Knob<'w> {
            #[widget_base]
            base: WidgetBase<'w>,
            value: f32,
        }

        impl<'w> Widget<'w> for Knob<'w> {
            fn on_scroll(&mut self, ev: &ScrollEvent) -> bool {
                self.value = (self.value + ev.delta.y * 0.1).max(0.0).min(1.0);
                self.repaint();
                true
            }
        }

        let app = App::new();
        let window = Window::new(&app, WindowOptions::default()).unwrap();
        let mut knob = Knob {
            base: WidgetBase::new(&window),
            value: 0.5,
        };
        knob.set_size_wh(32, 32);
        knob.set_pos_xy(100, 100);
        window.take_repaint();

        let scroll = InputEvent::Scroll(ScrollEvent {
            pos: Point::new(110, 110),
            delta: Vector::new(0.0, 5.0),
        });
        assert!(window.dispatch(&mut [&mut knob], EventContext::default(), &scroll));
        assert!(approx_eq!(f32, knob.value, 1.0, epsilon = 0.0001));
        assert!(window.take_repaint());

        // scrolling outside the knob reaches nothing
        let scroll = InputEvent::Scroll(ScrollEvent {
            pos: Point::new(132, 110),
            delta: Vector::new(0.0, -5.0),
        });
        assert!(!window.dispatch(&mut [&mut knob], EventContext::default(), &scroll));
        assert!(approx_eq!(f32, knob.value, 1.0, epsilon = 0.0001));
        assert!(!window.take_repaint());

        let click = InputEvent::Mouse(MouseEvent {
            button: 1,
            press: true,
            pos: Point::new(110, 110),
        });
        assert!(!window.dispatch(&mut [&mut knob], EventContext::default(), &click));
    }
}
