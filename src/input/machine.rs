use crate::foundation::core::Point;
use crate::input::event::{InputEvent, Key, MouseButton};
use crate::view::state::{PointerState, ViewState};
use crate::view::transform::{ViewGeometry, effective_scale};

/// Seek amount for the arrow keys, in playback-position units.
const SEEK_STEP: f32 = 1.0;
/// Seek amount for the up/down keys.
const SEEK_LEAP: f32 = 10.0;
/// Seek amount for the page keys.
const SEEK_PAGE: f32 = 600.0;

/// Commands emitted to the caller, produced fresh each poll cycle.
///
/// Every field resets to its neutral value (`0`/`false`) at poll start and
/// accumulates only within that cycle; multiple key events in one cycle
/// add up.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandSet {
    /// Shutdown requested. Advisory; the engine never terminates itself.
    pub quit: bool,
    /// Toggle play/pause.
    pub toggle_play: bool,
    /// Exchange the two streams. Reflects the net swap-state change of the
    /// cycle, so an even number of swap presses cancels out.
    pub toggle_swap: bool,
    /// Seek amount in playback-position units.
    pub seek_relative: f32,
    /// Interpret `seek_relative` as a fraction from the start instead of a
    /// relative offset.
    pub seek_from_start: bool,
    /// Frame-step amount.
    pub frame_step_delta: i32,
}

/// Input-driven state machine.
///
/// Single-threaded and polled once per rendered frame: the session calls
/// [`InputMachine::begin_cycle`], applies every queued event, then reads
/// the resulting [`CommandSet`]. The machine itself is pure over tagged
/// events and never touches a backend.
#[derive(Clone, Copy, Debug)]
pub struct InputMachine {
    zoom_step: f64,
    pan_step_divisor: i32,
    view: ViewState,
    pointer: PointerState,
    commands: CommandSet,
}

impl InputMachine {
    /// Create a machine in the initial view state.
    pub fn new(geom: &ViewGeometry, zoom_step: f64, pan_step_divisor: i32) -> Self {
        Self {
            zoom_step,
            pan_step_divisor,
            view: ViewState::new(geom.video),
            pointer: PointerState::new(geom.window),
            commands: CommandSet::default(),
        }
    }

    /// Current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current pointer state.
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Commands accumulated in the current cycle.
    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    /// Reset the per-cycle command fields to neutral.
    pub fn begin_cycle(&mut self) {
        self.commands = CommandSet::default();
    }

    /// Apply one event to the persistent state and the cycle commands.
    pub fn apply(&mut self, geom: &ViewGeometry, event: InputEvent) {
        match event {
            InputEvent::MouseMotion { x, y } => self.on_motion(geom, Point::new(x, y)),
            InputEvent::MouseButtonDown { button, x, y, ctrl } => {
                self.on_button_down(geom, button, Point::new(x, y), ctrl)
            }
            InputEvent::MouseButtonUp { button } => match button {
                MouseButton::Left => self.pointer.left_down = false,
                MouseButton::Right => self.pointer.right_down = false,
            },
            InputEvent::Wheel { delta_y } => {
                if delta_y > 0 {
                    self.view.zoom_factor += self.zoom_step;
                } else if delta_y < 0 {
                    self.view.zoom_factor -= self.zoom_step;
                }
            }
            InputEvent::KeyDown { key } => self.on_key(geom, key),
            InputEvent::Quit => self.commands.quit = true,
        }
    }

    fn on_motion(&mut self, geom: &ViewGeometry, p: Point) {
        self.pointer.live = p;
        if self.pointer.left_down {
            self.pointer.tracked = p;
        }
        if self.pointer.right_down {
            let scale = effective_scale(self.view.zoom_factor);
            let delta = self.pointer.anchor - p;
            let (acx, acy) = self.pointer.center_at_anchor;
            self.view.set_center(
                geom.video,
                acx + (delta.x / scale) as i32,
                acy + (delta.y / scale) as i32,
            );
        }
    }

    fn on_button_down(&mut self, geom: &ViewGeometry, button: MouseButton, p: Point, ctrl: bool) {
        match button {
            MouseButton::Left => {
                if ctrl {
                    self.commands.seek_relative = (p.x / f64::from(geom.window.width)) as f32;
                    self.commands.seek_from_start = true;
                } else {
                    self.pointer.left_down = true;
                    self.pointer.live = p;
                    self.pointer.tracked = p;
                }
            }
            MouseButton::Right => {
                self.pointer.right_down = true;
                self.pointer.live = p;
                self.pointer.anchor = p;
                self.pointer.center_at_anchor = (self.view.center_x, self.view.center_y);
            }
        }
    }

    fn on_key(&mut self, geom: &ViewGeometry, key: Key) {
        match key {
            Key::Escape => self.commands.quit = true,
            Key::Space => self.commands.toggle_play = !self.commands.toggle_play,
            Key::Num1 => self.view.show_left = !self.view.show_left,
            Key::Num2 => self.view.show_right = !self.view.show_right,
            Key::Num3 => self.view.show_hud = !self.view.show_hud,
            Key::Num0 => self.view.subtraction_mode = !self.view.subtraction_mode,
            Key::A => self.commands.frame_step_delta += 1,
            Key::D => self.commands.frame_step_delta -= 1,
            Key::S => {
                self.view.swap_left_right = !self.view.swap_left_right;
                self.commands.toggle_swap = !self.commands.toggle_swap;
            }
            Key::Left => self.commands.seek_relative -= SEEK_STEP,
            Key::Right => self.commands.seek_relative += SEEK_STEP,
            Key::Down => self.commands.seek_relative -= SEEK_LEAP,
            Key::Up => self.commands.seek_relative += SEEK_LEAP,
            Key::PageDown => self.commands.seek_relative -= SEEK_PAGE,
            Key::PageUp => self.commands.seek_relative += SEEK_PAGE,
            Key::Plus => self.view.zoom_factor += self.zoom_step,
            Key::Minus => self.view.zoom_factor -= self.zoom_step,
            Key::Kp4 => self.pan(geom, -1, 0),
            Key::Kp6 => self.pan(geom, 1, 0),
            Key::Kp8 => self.pan(geom, 0, -1),
            Key::Kp2 => self.pan(geom, 0, 1),
            Key::Kp5 => self.view.reset_center(geom.video),
        }
    }

    fn pan(&mut self, geom: &ViewGeometry, dx: i32, dy: i32) {
        let (sx, sy) = geom.pan_step(&self.view, self.pan_step_divisor);
        self.view.set_center(
            geom.video,
            self.view.center_x + dx * sx,
            self.view.center_y + dy * sy,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/machine.rs"]
mod tests;
