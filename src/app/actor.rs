//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that applies UI events to the state, one at a time
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state: AppState::new(),
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                tracing::info!("Quit requested");
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Bits
            UiEvent::ToggleBit { octet, bit } => self.state.toggle_bit(octet, bit),
            UiEvent::ToggleFocused => self.state.toggle_focused(),
            UiEvent::ToggleFocusedBit(bit) => self.state.toggle_focused_bit(bit),
            UiEvent::ClearAll => self.state.reset_all(),

            // Focus
            UiEvent::MoveFocus(direction) => self.state.move_focus(direction),

            // Sizing
            UiEvent::Resize { width } => self.state.on_resize(width),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_actor_publishes_state_after_each_event() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        ui_tx.send(UiEvent::ToggleBit { octet: 0, bit: 0 }).unwrap();
        ui_tx.send(UiEvent::Resize { width: 1000 }).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();

        AppActor::new(render_tx).run(ui_rx).await;

        let initial = render_rx.recv().await.unwrap();
        assert_eq!(initial.readout.decimal, "0.0.0.0");

        let toggled = render_rx.recv().await.unwrap();
        assert_eq!(toggled.readout.decimal, "128.0.0.0");

        let resized = render_rx.recv().await.unwrap();
        assert_eq!(resized.scale.control, 20);

        // Quit doesn't publish
        assert!(render_rx.recv().await.is_none());
    }
}
