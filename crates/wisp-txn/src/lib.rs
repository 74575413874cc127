//! Undo-stack transactions for wisp.
//!
//! A [`Transaction`] records compensating actions while a multi-step
//! mutation proceeds. Committing discards them; rolling back (explicitly,
//! or implicitly when the transaction is dropped uncommitted) runs them in
//! reverse order.

use std::fmt;

/// A recorded undo failed during rollback.
///
/// Remaining undo steps are still attempted; the first failure is reported.
#[derive(Debug)]
pub struct RollbackError {
    transaction: String,
    source: anyhow::Error,
}

impl RollbackError {
    /// Name of the transaction whose rollback failed.
    pub fn transaction(&self) -> &str {
        &self.transaction
    }
}

impl fmt::Display for RollbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rollback of transaction {:?} failed: {}",
            self.transaction, self.source
        )
    }
}

impl std::error::Error for RollbackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(AsRef::<dyn std::error::Error>::as_ref(&self.source))
    }
}

enum Undo {
    Infallible(Box<dyn FnOnce()>),
    Fallible(Box<dyn FnOnce() -> anyhow::Result<()>>),
}

/// A LIFO stack of compensating actions.
pub struct Transaction {
    name: String,
    undos: Vec<Undo>,
    active: bool,
}

impl Transaction {
    /// Start an empty transaction; `name` appears in rollback errors.
    pub fn begin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            undos: Vec::new(),
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a compensating action.
    pub fn push_undo(&mut self, undo: impl FnOnce() + 'static) {
        self.undos.push(Undo::Infallible(Box::new(undo)));
    }

    /// Record a compensating action that may itself fail.
    pub fn push_undo_fallible(&mut self, undo: impl FnOnce() -> anyhow::Result<()> + 'static) {
        self.undos.push(Undo::Fallible(Box::new(undo)));
    }

    /// Whether the transaction is still open.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of recorded undo steps.
    pub fn pending(&self) -> usize {
        self.undos.len()
    }

    /// Discard the undo stack: the mutation stands.
    pub fn commit(mut self) {
        self.undos.clear();
        self.active = false;
    }

    /// Run all undo steps in reverse order.
    pub fn rollback(mut self) -> Result<(), RollbackError> {
        self.active = false;
        match self.unwind() {
            None => Ok(()),
            Some(source) => Err(RollbackError {
                transaction: std::mem::take(&mut self.name),
                source,
            }),
        }
    }

    fn unwind(&mut self) -> Option<anyhow::Error> {
        let mut first_failure = None;
        while let Some(undo) = self.undos.pop() {
            match undo {
                Undo::Infallible(f) => f(),
                Undo::Fallible(f) => {
                    if let Err(err) = f() {
                        first_failure.get_or_insert(err);
                    }
                }
            }
        }
        first_failure
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        // Uncommitted transactions roll back; failures cannot surface here.
        if self.active {
            let _ = self.unwind();
        }
    }
}

impl fmt::Debug for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("name", &self.name)
            .field("active", &self.active)
            .field("pending", &self.undos.len())
            .finish()
    }
}
