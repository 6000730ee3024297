//! Subnet Tutor - interactive IPv4 octet binary/decimal trainer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering and input mapping
//! - App Layer - state machine applying bit toggles, resets and resizes

mod models;
mod ui;
mod messages;
mod app;
mod constants;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use messages::{UiEvent, RenderState};
use messages::ui_events::{key_to_ui_event, mouse_to_ui_event};
use app::AppActor;
use constants::{APP_TITLE, APP_VERSION, LOG_FILE};
use models::{window_width_px, BITS_PER_OCTET};
use ui::{
    clear_label, header_lines, hit_test, label_style, octet_layout, render_bit_cell,
    screen_layout, too_small_lines, weight_label, Density, Fit,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = APP_VERSION, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(APP_TITLE))?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(render_tx);
    tokio::spawn(app_actor.run(ui_rx));

    // Initial scale from the current window size
    let width = match terminal::window_size() {
        Ok(size) => window_width_px(size.columns, size.width),
        Err(_) => window_width_px(terminal::size()?.0, 0),
    };
    let _ = ui_tx.send(UiEvent::Resize { width });

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let ui_event = match event::read()? {
                Event::Key(key) => key_to_ui_event(key, current_state.show_help),
                Event::Mouse(mouse) => {
                    let area = terminal.get_frame().area();
                    let target = hit_test(area, current_state.scale, mouse.column, mouse.row);
                    mouse_to_ui_event(mouse, target, current_state.show_help)
                }
                Event::Resize(columns, _) => {
                    // Pixel width is optional; 0 falls back to a column estimate
                    let pixels = terminal::window_size().map(|s| s.width).unwrap_or(0);
                    Some(UiEvent::Resize { width: window_width_px(columns, pixels) })
                }
                _ => None,
            };

            if let Some(event) = ui_event {
                let quit = matches!(event, UiEvent::Quit);
                let _ = ui_tx.send(event);
                if quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let Some(layout) = screen_layout(area, state.scale) else {
        draw_too_small(f, area);
        return;
    };

    draw_header(f, state, layout.header);
    f.render_widget(
        Paragraph::new("─".repeat(layout.separator.width as usize))
            .style(Style::default().fg(Color::DarkGray)),
        layout.separator,
    );

    for (index, panel_area) in layout.octets.iter().enumerate() {
        draw_octet_panel(f, state, index, *panel_area, layout.fit);
    }

    draw_readout(f, state, layout.readout, layout.fit);
    draw_clear_button(f, layout.clear, layout.fit);
    draw_status_bar(f, state, layout.status);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_too_small(f: &mut Frame, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);
    f.render_widget(
        Paragraph::new(too_small_lines(area)).alignment(Alignment::Center),
        middle,
    );
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    // Compact layouts clip the binary row
    let header = Paragraph::new(header_lines(&state.example)).alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_octet_panel(f: &mut Frame, state: &RenderState, index: usize, area: Rect, fit: Fit) {
    let octet = &state.address.octets[index];
    let (focus_octet, focus_bit) = state.focus;
    let is_focused = focus_octet == index;

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(fit.panel_borders())
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" Octet {} ", index + 1))
        .title_style(Style::default().bold())
        .title_top(Line::from(format!(" = {} ", octet.decimal_value())).right_aligned());
    f.render_widget(block, area);

    let layout = octet_layout(area, fit);
    for bit in 0..BITS_PER_OCTET {
        let set = octet.bit(bit);

        let label = Paragraph::new(format!("Bit {}", bit + 1))
            .alignment(Alignment::Center)
            .style(label_style(set));
        f.render_widget(label, layout.labels[bit]);

        let cell = render_bit_cell(set, is_focused && focus_bit == bit, fit.cell_height);
        f.render_widget(cell, layout.cells[bit]);

        let weight = Paragraph::new(weight_label(bit))
            .alignment(Alignment::Center)
            .style(label_style(set));
        f.render_widget(weight, layout.weights[bit]);
    }
}

fn draw_readout(f: &mut Frame, state: &RenderState, area: Rect, fit: Fit) {
    let block = Block::default()
        .borders(fit.panel_borders())
        .title(" Full IP Address ")
        .padding(fit.readout_block_padding());

    let lines = vec![
        Line::from(state.readout.binary_line()).bold(),
        Line::from(state.readout.decimal_line()).bold().fg(Color::Yellow),
    ];

    let readout = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(readout, area);
}

fn draw_clear_button(f: &mut Frame, area: Rect, fit: Fit) {
    let button = Paragraph::new(clear_label(fit))
        .alignment(Alignment::Center)
        .style(Style::default().bold());
    let button = match fit.density {
        Density::Boxed => button.block(Block::bordered().border_type(BorderType::Rounded)),
        Density::Compact => button,
    };
    f.render_widget(button, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = " click/Space:toggle | 1-8:bit | arrows:move | c:clear | ?:help | q:quit ";
    let scale = format!(" size {}/{} ", state.scale.control, state.scale.readout);

    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(scale.len() as u16),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        left,
    );
    f.render_widget(
        Paragraph::new(scale).style(Style::default().fg(Color::DarkGray)),
        right,
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 SUBNETTING EDUCATIONAL TOOL - Keyboard & Mouse

 Each octet is 8 bits. A set bit adds its weight
 (128, 64, 32, 16, 8, 4, 2, 1) to the octet's value.

 BITS
   Click a cell       Toggle that bit
   Space / Enter      Toggle the focused bit
   1 .. 8             Toggle bit N of the focused octet
   c / Delete         Clear all octets (or click Clear)

 NAVIGATION
   ← → / h l          Move between bits
   ↑ ↓ / k j          Move between octets
   Tab / Shift+Tab    Next / previous octet

 GENERAL
   ?                  Toggle this help
   q / Esc / Ctrl+C   Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Help - v{} ", APP_VERSION))
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
