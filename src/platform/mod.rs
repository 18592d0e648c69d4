//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the game's core thread via a
// crossbeam channel.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Core Systems    │
//  │   ↓                      │    │                  │
//  │  InputProcessor          │    │  InputSystem     │
//  │   ├─ Converts Winit      │    │  ↓               │
//  │   └─ Drops auto-repeat   │    │  SceneManager    │
//  │   ↓                      │    │  ↓               │
//  │  InputBuffer             │    │  LevelController │
//  │   ↓                      │    └──────────────────┘
//  │  RedrawRequested         │             ↑
//  │   ↓ (flush)              │             │
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Core processes at fixed TPS (independent of refresh rate)
//    → Empty buffers NOT sent
// ```
//
// Notes:
// - Focus loss releases every held key so nothing sticks.
// - If the core thread dies, the platform logs a warning but keeps
//   running so the window can still be closed.
// - Winit mandates the main thread on macOS/iOS, so this runs on the
//   thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// What the OS window looks like.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread and sends batched keyboard events to the core
/// thread.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender, settings)`
/// 2. **Execution**: `platform.run()` starts the event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,
    settings: WindowSettings,

    /// Accumulates events until `RedrawRequested`.
    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens in `resumed()`.
    pub(crate) fn new(event_sender: Sender<PlatformEvent>, settings: WindowSettings) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            settings,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends this frame's buffered events to the core thread.
    ///
    /// A disconnected channel (core thread gone) drops the events with a
    /// warning instead of panicking.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };
        let count = events.len();

        trace!(target: "platform::input", "Flushing {} events", count);

        if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                count
            );
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.request_exit(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.request_exit(event_loop);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::Focused(false) => {
                let released = self.input_processor.release_all();
                if !released.is_empty() {
                    debug!(target: "platform::input", "Focus lost, releasing {} keys", released.len());
                    self.buffer.extend(released);
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
