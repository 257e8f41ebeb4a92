use crate::compose::compositor::Compositor;
use crate::foundation::core::VideoDims;
use crate::foundation::error::{TwinscopeError, TwinscopeResult};
use crate::frame::source::SourceFrame;
use crate::hud::overlay::{ErrorBanner, Hud};
use crate::input::machine::{CommandSet, InputMachine};
use crate::present::backend::PresentBackend;
use crate::view::state::{PointerState, ViewState};
use crate::view::transform::ViewGeometry;

/// Session-fixed display options, set once at construction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Per-channel multiplier applied to the absolute difference.
    pub amplification: i32,
    /// Zoom-factor change per wheel tick or plus/minus press.
    pub zoom_step: f64,
    /// Keypad pan moves one `pan_step_divisor`-th of the visible extent.
    pub pan_step_divisor: i32,
    /// Error banner fade-out duration in milliseconds.
    pub error_fade_ms: u64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            amplification: 2,
            zoom_step: 0.2,
            pan_step_divisor: 20,
            error_fade_ms: 4000,
        }
    }
}

impl DisplayOptions {
    /// Parse options from JSON; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> TwinscopeResult<Self> {
        let opts: Self =
            serde_json::from_str(json).map_err(|e| TwinscopeError::serde(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check the option ranges.
    pub fn validate(&self) -> TwinscopeResult<()> {
        if self.amplification < 1 {
            return Err(TwinscopeError::validation("amplification must be >= 1"));
        }
        if self.zoom_step <= 0.0 {
            return Err(TwinscopeError::validation("zoom_step must be > 0"));
        }
        if self.pan_step_divisor < 1 {
            return Err(TwinscopeError::validation("pan_step_divisor must be >= 1"));
        }
        if self.error_fade_ms == 0 {
            return Err(TwinscopeError::validation("error_fade_ms must be > 0"));
        }
        Ok(())
    }
}

/// The interactive comparison display session.
///
/// Owns the presentation backend and every resource created through it:
/// the stream texture, the label textures, and the banner texture, all
/// released on drop. The caller alternates [`Display::poll_input`] and
/// [`Display::render`] on a single thread and reads the emitted
/// [`CommandSet`] every cycle to drive its decode pipeline; the `quit`
/// command is advisory and never acted on internally.
pub struct Display<B: PresentBackend> {
    backend: B,
    geom: ViewGeometry,
    machine: InputMachine,
    compositor: Compositor,
    hud: Hud,
    banner: ErrorBanner,
}

impl<B: PresentBackend> Display<B> {
    /// Create a session for fixed video dimensions and two source labels.
    ///
    /// Fails fast on backend resource errors; such failures are
    /// unrecoverable and the session should be abandoned.
    pub fn new(
        mut backend: B,
        video: VideoDims,
        left_label: &str,
        right_label: &str,
        options: DisplayOptions,
    ) -> TwinscopeResult<Self> {
        options.validate()?;
        let geom = ViewGeometry::new(backend.window_size(), backend.drawable_size(), video)?;
        let compositor = Compositor::new(&mut backend, video, options.amplification)?;
        let hud = Hud::new(&mut backend, &geom, left_label, right_label)?;
        let machine = InputMachine::new(&geom, options.zoom_step, options.pan_step_divisor);
        Ok(Self {
            backend,
            geom,
            machine,
            compositor,
            hud,
            banner: ErrorBanner::new(options.error_fade_ms),
        })
    }

    /// Drain all pending input events without blocking and return the
    /// commands accumulated this cycle.
    ///
    /// Every per-cycle command field is reset to neutral first, even when
    /// no events arrive. When the cycle ends with a net swap toggle the
    /// label textures are exchanged so labels keep matching content.
    #[tracing::instrument(skip_all)]
    pub fn poll_input(&mut self) -> &CommandSet {
        self.machine.begin_cycle();
        while let Some(event) = self.backend.poll_event() {
            self.machine.apply(&self.geom, event);
        }
        if self.machine.commands().toggle_swap {
            self.hud.swap_labels();
        }
        self.machine.commands()
    }

    /// Run one full render pass and present it.
    ///
    /// `error_message` is a transient operational error to surface via the
    /// fading banner; empty means no new error. Render order: clear, video
    /// blit, HUD panels, compare-mode slider, error banner last.
    #[tracing::instrument(skip_all)]
    pub fn render(
        &mut self,
        left: &SourceFrame<'_>,
        right: &SourceFrame<'_>,
        left_position: f32,
        right_position: f32,
        status: &str,
        error_message: &str,
    ) -> TwinscopeResult<()> {
        if left.dims() != self.geom.video || right.dims() != self.geom.video {
            return Err(TwinscopeError::validation(
                "source frames must match the session video dimensions",
            ));
        }

        let state = *self.machine.view();
        let pointer = *self.machine.pointer();

        self.backend.clear()?;
        self.compositor.render_video(
            &mut self.backend,
            &self.geom,
            &state,
            &pointer,
            left,
            right,
        )?;
        if state.show_hud {
            self.hud.draw(
                &mut self.backend,
                &self.geom,
                &state,
                &pointer,
                left_position,
                right_position,
                status,
            )?;
        }
        self.banner.show(&mut self.backend, &self.geom, error_message)?;
        self.banner.draw(&mut self.backend, &self.geom)?;
        self.backend.present()
    }

    /// Commands accumulated by the most recent poll cycle.
    pub fn commands(&self) -> &CommandSet {
        self.machine.commands()
    }

    /// Current view state.
    pub fn view(&self) -> &ViewState {
        self.machine.view()
    }

    /// Current pointer state.
    pub fn pointer(&self) -> &PointerState {
        self.machine.pointer()
    }

    /// Session geometry.
    pub fn geometry(&self) -> &ViewGeometry {
        &self.geom
    }

    /// Borrow the presentation backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the presentation backend (event injection in tests
    /// and demos).
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: PresentBackend> Drop for Display<B> {
    fn drop(&mut self) {
        self.compositor.release(&mut self.backend);
        self.hud.release(&mut self.backend);
        self.banner.release(&mut self.backend);
    }
}
