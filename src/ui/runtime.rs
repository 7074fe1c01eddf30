use crate::generate::{spawn_dispatcher, GenerateClient};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Capacity of the UI → dispatcher channel. The UI guard keeps at most one
/// command outstanding.
const COMMAND_CHANNEL_CAPACITY: usize = 4;

/// Run the interactive view until the user quits or a signal arrives.
pub fn run(runtime: &Handle, client: GenerateClient, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = App::new(client.endpoint());
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    app.set_command_sender(command_tx);
    let dispatcher = spawn_dispatcher(runtime, client, command_rx, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Generation {
                request_id,
                outcome,
            }) => app.on_generation_finished(request_id, outcome),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    dispatcher.abort();
    drop(guard);
    Ok(())
}
