// A headless tour of plugui: a button and a slider in one window, driven by synthetic input.
//
// Run with `RUST_LOG=trace` to see registration, repaint and dispatch traces.

use {
    plugui::{
        event::{EventContext, InputEvent, Key, Modifiers, MotionEvent, MouseEvent, SpecialEvent},
        geometry::Point,
        prelude::*,
        AsWidgetBase,
    },
    std::{cell::Cell, rc::Rc},
    float_cmp::approx_eq,
    tracing::info,
    tracing_subscriber::EnvFilter,
};

#[derive(AsWidgetBase)]
struct Button<'w> {
    #[widget_base]
    base: WidgetBase<'w>,
    label: &'static str,
    pressed: bool,
    clicks: u32,
}

impl<'w> Button<'w> {
    fn new(window: &'w Window, label: &'static str) -> Self {
        Button {
            base: WidgetBase::new(window),
            label,
            pressed: false,
            clicks: 0,
        }
    }
}

impl<'w> Widget<'w> for Button<'w> {
    fn on_mouse(&mut self, ev: &MouseEvent) -> bool {
        if ev.button != 1 {
            return false;
        }

        if self.pressed && !ev.press {
            self.clicks += 1;
            info!(label = self.label, clicks = self.clicks, "button clicked");
        }
        self.pressed = ev.press;
        self.repaint();
        true
    }
}

#[derive(AsWidgetBase)]
struct Slider<'w> {
    #[widget_base]
    base: WidgetBase<'w>,
    value: f32,
    dragging: bool,
    // inner track width, updated on reshape
    track: i32,
}

impl<'w> Slider<'w> {
    const HANDLE: i32 = 8;

    fn new(window: &'w Window) -> Self {
        Slider {
            base: WidgetBase::new(window),
            value: 0.0,
            dragging: false,
            track: 0,
        }
    }

    fn set_value_from(&mut self, x: i32) {
        if self.track <= 0 {
            return;
        }

        let value = ((x - Self::HANDLE / 2) as f32 / self.track as f32).max(0.0).min(1.0);
        if !approx_eq!(f32, value, self.value, epsilon = 0.0001) {
            self.value = value;
            self.repaint();
        }
    }
}

impl<'w> Widget<'w> for Slider<'w> {
    fn on_mouse(&mut self, ev: &MouseEvent) -> bool {
        if ev.button != 1 {
            return false;
        }

        self.dragging = ev.press;
        if ev.press {
            self.set_value_from(ev.pos.x);
        }
        true
    }

    fn on_motion(&mut self, ev: &MotionEvent) -> bool {
        if !self.dragging {
            return false;
        }

        self.set_value_from(ev.pos.x);
        true
    }

    fn on_special(&mut self, ev: &SpecialEvent) -> bool {
        if !ev.press {
            return false;
        }

        let step = if self.modifiers().contains(Modifiers::SHIFT) { 0.01 } else { 0.1 };
        let value = match ev.key {
            Key::Left | Key::Down => self.value - step,
            Key::Right | Key::Up => self.value + step,
            Key::Home => 0.0,
            Key::End => 1.0,
            _ => return false,
        };
        self.value = value.max(0.0).min(1.0);
        self.repaint();
        true
    }

    fn on_reshape(&mut self, width: i32, _height: i32) {
        self.track = width - Self::HANDLE;
        info!(track = self.track, "slider reshaped");
    }
}

fn mouse(press: bool, x: i32, y: i32) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        button: 1,
        press,
        pos: Point::new(x, y),
    })
}

fn send(
    window: &Window,
    time: &mut u32,
    widgets: &mut [&mut dyn Widget<'_>],
    mods: Modifiers,
    event: InputEvent,
) -> bool {
    *time += 16;
    window.dispatch(widgets, EventContext { time: *time, mods }, &event)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::new();
    let window = Window::new(
        &app,
        WindowOptions::default()
            .with_title("plugui overview")
            .with_size(300, 120)
            .with_min_size(200, 80)
            .with_resizable(false),
    )?;
    window.show();

    let mut button = Button::new(&window, "bypass");
    button.set_pos_xy(10, 10);
    button.set_size_wh(80, 24);

    let mut slider = Slider::new(&window);
    slider.set_pos_xy(10, 50);
    slider.set_size_wh(208, 16);

    let mut time = 0;

    send(
        &window,
        &mut time,
        &mut [&mut button, &mut slider],
        Modifiers::empty(),
        mouse(true, 20, 20),
    );
    send(
        &window,
        &mut time,
        &mut [&mut button, &mut slider],
        Modifiers::empty(),
        mouse(false, 20, 20),
    );

    send(
        &window,
        &mut time,
        &mut [&mut button, &mut slider],
        Modifiers::empty(),
        mouse(true, 14, 58),
    );
    for x in (20..=400).step_by(60) {
        let motion = InputEvent::Motion(MotionEvent {
            pos: Point::new(x, 90),
        });
        send(
            &window,
            &mut time,
            &mut [&mut button, &mut slider],
            Modifiers::empty(),
            motion,
        );
    }
    send(
        &window,
        &mut time,
        &mut [&mut button, &mut slider],
        Modifiers::empty(),
        mouse(false, 400, 90),
    );
    info!(value = slider.value, "slider dragged");

    let left = InputEvent::Special(SpecialEvent {
        press: true,
        key: Key::Left,
    });
    send(
        &window,
        &mut time,
        &mut [&mut button, &mut slider],
        Modifiers::SHIFT,
        left,
    );
    info!(value = slider.value, "slider nudged");

    button.hide();
    let handled = send(
        &window,
        &mut time,
        &mut [&mut button, &mut slider],
        Modifiers::empty(),
        mouse(true, 20, 20),
    );
    info!(handled, "click on hidden button");

    let frames = Rc::new(Cell::new(0));
    let counter = frames.clone();
    app.add_idle_callback(move |app| {
        counter.set(counter.get() + 1);
        if counter.get() >= 3 {
            app.quit();
        }
    });
    app.exec();

    info!(
        clicks = button.clicks,
        value = slider.value,
        repaints = window.repaint_requests(),
        widgets = window.widget_count(),
        idle_frames = frames.get(),
        "done"
    );

    Ok(())
}
