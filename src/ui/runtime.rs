use crate::store::UserStore;
use crate::ui::app::{App, UiCommand, UiCommandSender};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;

const COMMAND_QUEUE: usize = 32;

/// Run the interactive console until the user quits.
///
/// The draw loop stays on the calling thread; store operations run as tasks
/// on `handle` and report back through the event channel.
pub fn run(store: UserStore, tick_rate: Duration, handle: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(store.clone());
    app.set_command_sender(spawn_command_worker(handle, store, events.sender()));

    // Initial fetch, once per session.
    app.request_reload();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::StoreChanged) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Drain UI commands and run each as its own task.
///
/// Commands are not serialized: a second request may start while the
/// first is in flight, matching the store's no-busy-lock contract.
pub fn spawn_command_worker(
    handle: &Handle,
    store: UserStore,
    events: mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = tokio::sync::mpsc::channel(COMMAND_QUEUE);
    let task_handle = handle.clone();
    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            let store = store.clone();
            let events = events.clone();
            task_handle.spawn(async move {
                execute(&store, command).await;
                let _ = events.send(AppEvent::StoreChanged);
            });
        }
        tracing::debug!("Command channel closed");
    });
    tx
}

pub async fn execute(store: &UserStore, command: UiCommand) {
    match command {
        UiCommand::LoadUsers => store.load_users().await,
        UiCommand::CreateUser { candidate } => store.create_user(candidate).await,
        UiCommand::EditUser { id, user } => store.edit_user(id, user).await,
        UiCommand::DeleteUser { id } => store.delete_user(id).await,
    }
}
