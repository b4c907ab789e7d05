//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::LinkgateApp;
use super::types::AppEvent;

impl ApplicationHandler<AppEvent> for LinkgateApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.shutdown();
            event_loop.exit();
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::PresentBrowser(url) => {
                if self.should_exit {
                    tracing::debug!(url = %url, "Ignoring browser request during shutdown");
                    return;
                }
                self.open_browser_window(event_loop, url);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.browsers.contains_key(&window_id) {
            if let WindowEvent::CloseRequested = event {
                self.close_browser_window(window_id);
            }
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_webview_bounds();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}
