//! Runs parsed scripts against a single list.

use intlist_core::{IntList, compat};

use crate::ast::{Command, RuntimeFailure, Script, ScriptError, Spanned};

/// How list failures are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop at the first failing command and return a located error
    #[default]
    Strict,
    /// Print `-1` for failed removals and lookups and keep going
    Sentinel,
}

/// Lines printed by a script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub lines: Vec<String>,
}

impl Output {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines, each terminated by a newline
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A list plus the policy for reporting failures. The list survives across
/// runs, so several scripts can build on each other.
#[derive(Debug, Default)]
pub struct Session {
    list: IntList,
    mode: ErrorMode,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mode: ErrorMode) -> Self {
        Self {
            list: IntList::new(),
            mode,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ErrorMode {
        self.mode
    }

    #[must_use]
    pub const fn list(&self) -> &IntList {
        &self.list
    }

    #[must_use]
    pub fn into_list(self) -> IntList {
        self.list
    }

    /// Run `script` and collect what it prints
    ///
    /// # Errors
    ///
    /// Returns `ScriptError` if a command fails in strict mode; output printed
    /// before the failure is discarded. Use [`Session::run`] to keep it.
    pub fn execute(&mut self, script: &Script) -> Result<Output, ScriptError> {
        let mut output = Output::new();
        self.run(script, &mut output)?;
        Ok(output)
    }

    /// Run `script`, appending printed lines to `output`
    ///
    /// # Errors
    ///
    /// Returns `ScriptError` if a command fails in strict mode. Commands before
    /// the failing one have already taken effect and their output is kept.
    pub fn run(&mut self, script: &Script, output: &mut Output) -> Result<(), ScriptError> {
        tracing::debug!(
            filename = %script.filename,
            commands = script.commands.len(),
            mode = ?self.mode,
            "running script"
        );

        for command in &script.commands {
            tracing::trace!(command = command.node.name(), "executing");
            let printed = match self.mode {
                ErrorMode::Strict => self
                    .execute_strict(command, script)
                    .map_err(|failure| script.error_at(failure, command.span))?,
                ErrorMode::Sentinel => self.execute_sentinel(&command.node),
            };
            output.lines.extend(printed);
        }

        Ok(())
    }

    fn execute_strict(
        &mut self,
        command: &Spanned<Command>,
        script: &Script,
    ) -> Result<Option<String>, RuntimeFailure> {
        let list = &mut self.list;
        let printed = match command.node {
            Command::PushFront { value } => {
                list.push_front(value)?;
                None
            }
            Command::PushBack { value } => {
                list.push_back(value)?;
                None
            }
            Command::Insert { value, index } => {
                let insertion = list.insert_at(value, non_negative(index)?)?;
                if insertion.clamped() {
                    let pos = script.source_map.position(command.span.start);
                    tracing::warn!(
                        line = pos.line,
                        requested = insertion.requested,
                        actual = insertion.index,
                        "insert index past end, appended instead"
                    );
                }
                None
            }
            Command::RemoveFront => Some(list.remove_front()?.to_string()),
            Command::RemoveBack => Some(list.remove_back()?.to_string()),
            Command::Remove { index } => Some(list.remove_at(non_negative(index)?)?.to_string()),
            Command::Get { index } => Some(list.get_at(non_negative(index)?)?.to_string()),
            Command::Len => Some(list.len().to_string()),
            Command::Print => Some(list.to_display_string()),
            Command::Clear => {
                list.clear();
                None
            }
        };
        Ok(printed)
    }

    fn execute_sentinel(&mut self, command: &Command) -> Option<String> {
        let list = &mut self.list;
        match *command {
            Command::PushFront { value } => {
                compat::push_front(Some(list), value);
                None
            }
            Command::PushBack { value } => {
                compat::push_back(Some(list), value);
                None
            }
            Command::Insert { value, index } => {
                compat::insert_at(Some(list), value, index);
                None
            }
            Command::RemoveFront => Some(compat::remove_front(Some(list)).to_string()),
            Command::RemoveBack => Some(compat::remove_back(Some(list)).to_string()),
            Command::Remove { index } => Some(compat::remove_at(Some(list), index).to_string()),
            Command::Get { index } => Some(compat::get_at(Some(&*list), index).to_string()),
            Command::Len => Some(compat::length(Some(&*list)).to_string()),
            Command::Print => Some(compat::to_display_string(Some(&*list))),
            Command::Clear => {
                list.clear();
                None
            }
        }
    }
}

fn non_negative(index: i64) -> Result<usize, RuntimeFailure> {
    usize::try_from(index).map_err(|_| RuntimeFailure::NegativeIndex(index))
}
