//! Keyboard command table for the party form.
//!
//! This module maps key events to form commands per modal context, so the
//! form consults one table instead of matching keys inline.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormCommand {
    /// Leave the form (asks for confirmation first)
    Cancel,
    /// Validate and save the draft
    Save,
    /// Go to the party search screen
    Search,
    /// Generate a fresh display id now
    RegenerateId,
    /// Confirm discarding the draft
    ConfirmDiscard,
    /// Close the discard dialog and keep editing
    DismissDiscard,
}

impl FormCommand {
    /// Stable command id, used in help output.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Cancel => "cancel",
            Self::Save => "save",
            Self::Search => "search",
            Self::RegenerateId => "regenerate_id",
            Self::ConfirmDiscard => "confirm_discard",
            Self::DismissDiscard => "dismiss_discard",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Cancel => "Back (asks before discarding)",
            Self::Save => "Save party",
            Self::Search => "Search existing parties",
            Self::RegenerateId => "Regenerate party id",
            Self::ConfirmDiscard => "Discard changes and leave",
            Self::DismissDiscard => "Keep editing",
        }
    }
}

/// Context a key event is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandContext {
    /// Editing the form
    Form,
    /// Discard confirmation dialog is open
    DiscardDialog,
}

impl CommandContext {
    /// Context name for display.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::DiscardDialog => "discard_dialog",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Short label such as `Ctrl+S`.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else if self.modifiers.contains(KeyModifiers::SHIFT) {
            format!("Shift+{key}")
        } else {
            key
        }
    }
}

/// Command table that maps key events to commands for a given context.
pub struct CommandTable {
    bindings: HashMap<(CommandContext, KeyBinding), FormCommand>,
}

impl CommandTable {
    /// Create a table with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self {
            bindings: HashMap::new(),
        };

        table.register_form_shortcuts();
        table.register_dialog_shortcuts();
        table
    }

    fn register_form_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CommandContext::Form;

        self.register(ctx, K::Esc, M::NONE, FormCommand::Cancel);
        self.register(ctx, K::Char('s'), M::CONTROL, FormCommand::Save);
        self.register(ctx, K::Char('f'), M::CONTROL, FormCommand::Search);
        self.register(ctx, K::Char('g'), M::CONTROL, FormCommand::RegenerateId);
    }

    fn register_dialog_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CommandContext::DiscardDialog;

        self.register(ctx, K::Enter, M::NONE, FormCommand::ConfirmDiscard);
        self.register(ctx, K::Char('y'), M::NONE, FormCommand::ConfirmDiscard);
        self.register(ctx, K::Char('Y'), M::SHIFT, FormCommand::ConfirmDiscard);
        self.register(ctx, K::Esc, M::NONE, FormCommand::DismissDiscard);
        self.register(ctx, K::Char('n'), M::NONE, FormCommand::DismissDiscard);
        self.register(ctx, K::Char('N'), M::SHIFT, FormCommand::DismissDiscard);
    }

    fn register(
        &mut self,
        context: CommandContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        command: FormCommand,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), command);
    }

    /// Look up the command for a key event in `context`.
    #[must_use]
    pub fn lookup(&self, context: CommandContext, event: KeyEvent) -> Option<FormCommand> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// All bindings of `context`, sorted by command id then key label.
    #[must_use]
    pub fn bindings(&self, context: CommandContext) -> Vec<(KeyBinding, FormCommand)> {
        let mut found: Vec<_> = self
            .bindings
            .iter()
            .filter(|((ctx, _), _)| *ctx == context)
            .map(|((_, binding), command)| (*binding, *command))
            .collect();
        found.sort_by_key(|(binding, command)| (command.id(), binding.label()));
        found
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
