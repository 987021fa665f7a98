use crate::model::{User, UserDraft, UserId};
use crate::mvi::reduce_in_place;
use crate::routing::Route;
use crate::store::{StoreState, UserStore};
use crate::ui::form::{FormDialogState, FormIntent, FormKind, FormReducer};
use crate::validation::validate;
use tokio::sync::mpsc;

/// Store operation requested by the UI thread, executed on the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    LoadUsers,
    CreateUser { candidate: User },
    EditUser { id: UserId, user: User },
    DeleteUser { id: UserId },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub struct App {
    should_quit: bool,
    store: UserStore,
    route: Route,
    selection: usize,
    /// State of the create/edit dialog (MVI pattern).
    form: FormDialogState,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    animation_tick: u8,
}

impl App {
    pub fn new(store: UserStore) -> Self {
        Self {
            should_quit: false,
            store,
            route: Route::List,
            selection: 0,
            form: FormDialogState::default(),
            command_sender: None,
            last_command_error: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn store_state(&self) -> StoreState {
        self.store.snapshot()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "Navigate");
        self.route = route;
    }

    pub fn form(&self) -> &FormDialogState {
        &self.form
    }

    pub fn form_is_open(&self) -> bool {
        self.form.is_visible()
    }

    /// Selected row, clamped to the current list length.
    pub fn selection(&self) -> usize {
        let len = self.store.snapshot().users.len();
        self.selection.min(len.saturating_sub(1))
    }

    pub fn selected_user(&self) -> Option<User> {
        self.store.snapshot().users.get(self.selection()).cloned()
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.store.snapshot().users.len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn open_selected_detail(&mut self) {
        if let Some(user) = self.selected_user() {
            self.navigate(Route::detail(user.id));
        }
    }

    pub fn back_to_list(&mut self) {
        self.navigate(Route::List);
    }

    pub fn request_reload(&mut self) -> bool {
        self.send_command(UiCommand::LoadUsers)
    }

    pub fn request_delete_selected(&mut self) -> bool {
        let Some(user) = self.selected_user() else {
            return false;
        };
        self.send_command(UiCommand::DeleteUser { id: user.id })
    }

    pub fn open_create_dialog(&mut self) {
        if self.form.is_visible() {
            return;
        }
        self.store.toggle_create_modal();
        self.dispatch_form(FormIntent::Open {
            kind: FormKind::Create,
            draft: UserDraft::default(),
        });
    }

    pub fn open_edit_dialog(&mut self) {
        if self.form.is_visible() {
            return;
        }
        let Some(user) = self.selected_user() else {
            return;
        };
        let draft = UserDraft::from_user(&user);
        let kind = FormKind::Edit(user.id);
        self.store.toggle_edit_modal(Some(user));
        self.dispatch_form(FormIntent::Open { kind, draft });
    }

    pub fn close_dialog(&mut self) {
        match self.form.kind() {
            Some(FormKind::Create) => self.store.toggle_create_modal(),
            Some(FormKind::Edit(_)) => self.store.toggle_edit_modal(None),
            None => return,
        }
        self.dispatch_form(FormIntent::Close);
    }

    /// Validate the draft and, when clean, hand it to the store.
    ///
    /// Returns true when a request was issued and the dialog closed.
    pub fn submit_form(&mut self) -> bool {
        let (Some(kind), Some(draft)) = (self.form.kind(), self.form.draft().cloned()) else {
            return false;
        };

        let errors = validate(&draft);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "Submission blocked by validation");
            self.dispatch_form(FormIntent::ShowErrors { errors });
            return false;
        }

        let command = match kind {
            FormKind::Create => UiCommand::CreateUser {
                candidate: draft.to_user(self.store.next_user_id()),
            },
            FormKind::Edit(id) => UiCommand::EditUser {
                id,
                user: draft.to_user(id),
            },
        };
        if !self.send_command(command) {
            return false;
        }
        self.close_dialog();
        true
    }

    /// Dispatch an intent to the form dialog reducer.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        reduce_in_place::<FormReducer>(&mut self.form, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
