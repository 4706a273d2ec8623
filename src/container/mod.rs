//! Expenses state container
//!
//! A single worker task owns [`ExpensesState`] and the use-cases. Intents are
//! queued over an unbounded channel and applied one at a time, each running to
//! completion (including its storage calls) before the next is taken. Every
//! applied intent publishes a fresh snapshot through a `watch` channel.
//!
//! ```ignore
//! let container = ExpensesContainer::new(use_cases, Arc::new(SystemClock), StatsPeriod::Month);
//! container.dispatch(ExpensesIntent::SelectPeriod(StatsPeriod::Week));
//! container.settled().await;
//! let state = container.state();
//! ```

pub mod intent;
pub mod state;

pub use intent::ExpensesIntent;
pub use state::{parse_amount, ExpensesState};

use std::sync::Arc;

use chrono::Local;
use tokio::sync::{mpsc, oneshot, watch};

use crate::models::{Expense, StatsPeriod};
use crate::services::{filter_by_period, ExpenseUseCases};
use crate::time::Clock;

enum Command {
    Intent(ExpensesIntent),
    /// Answered once every earlier command has been applied
    Barrier(oneshot::Sender<()>),
}

/// Handle to the expenses worker
///
/// Cloning the handle shares the same worker. The worker stops once every
/// handle is dropped and the queue is drained.
#[derive(Clone)]
pub struct ExpensesContainer {
    sender: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<ExpensesState>,
}

impl ExpensesContainer {
    /// Spawn the worker on the current tokio runtime.
    ///
    /// The worker loads the stored expenses before handling any intent.
    pub fn new(
        use_cases: ExpenseUseCases,
        clock: Arc<dyn Clock>,
        initial_period: StatsPeriod,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let initial = ExpensesState::new(initial_period);
        let (publisher, state) = watch::channel(initial.clone());

        let worker = ExpensesWorker {
            receiver,
            publisher,
            use_cases,
            clock,
            state: initial,
        };
        tokio::spawn(worker.run());

        Self { sender, state }
    }

    /// Queue an intent. Never blocks.
    pub fn dispatch(&self, intent: ExpensesIntent) {
        if self.sender.send(Command::Intent(intent)).is_err() {
            tracing::warn!("expenses worker has stopped; intent dropped");
        }
    }

    /// Current snapshot
    pub fn state(&self) -> ExpensesState {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever the published state changes
    pub fn subscribe(&self) -> watch::Receiver<ExpensesState> {
        self.state.clone()
    }

    /// Wait until every intent dispatched so far has been applied
    pub async fn settled(&self) {
        let (reply, done) = oneshot::channel();
        if self.sender.send(Command::Barrier(reply)).is_ok() {
            let _ = done.await;
        }
    }
}

struct ExpensesWorker {
    receiver: mpsc::UnboundedReceiver<Command>,
    publisher: watch::Sender<ExpensesState>,
    use_cases: ExpenseUseCases,
    clock: Arc<dyn Clock>,
    state: ExpensesState,
}

impl ExpensesWorker {
    async fn run(mut self) {
        tracing::debug!("expenses worker started");
        self.refresh().await;
        self.publish();

        while let Some(command) = self.receiver.recv().await {
            match command {
                Command::Intent(intent) => {
                    self.handle(intent).await;
                    self.publish();
                }
                Command::Barrier(reply) => {
                    let _ = reply.send(());
                }
            }
        }

        tracing::debug!("expenses worker stopped");
    }

    async fn handle(&mut self, intent: ExpensesIntent) {
        tracing::trace!(?intent, "applying intent");

        match intent {
            ExpensesIntent::SelectPeriod(period) => {
                self.state.selected_period = period;
                self.recompute_visible();
            }
            ExpensesIntent::OpenAddExpenseDialog => {
                self.state.is_add_dialog_open = true;
            }
            ExpensesIntent::CloseAddExpenseDialog => {
                self.state.reset_draft();
                self.state.is_add_dialog_open = false;
            }
            ExpensesIntent::SelectCategory(category) => {
                self.state.selected_category = Some(category);
                self.state.is_category_error = false;
            }
            ExpensesIntent::ChangeAmount(amount) => {
                self.state.amount_input = amount;
                self.state.is_amount_error = false;
            }
            ExpensesIntent::ChangeComment(comment) => {
                self.state.comment_input = comment;
            }
            ExpensesIntent::SubmitExpense => self.submit_expense().await,
            ExpensesIntent::RequestDeleteExpense(id) => {
                self.state.pending_delete_expense_id = Some(id);
                self.state.is_delete_dialog_open = true;
            }
            ExpensesIntent::ConfirmDeleteExpense => self.confirm_delete().await,
            ExpensesIntent::DismissDeleteExpense => {
                self.state.close_delete_dialog();
            }
            ExpensesIntent::DismissStorageError => {
                self.state.storage_error = None;
            }
        }
    }

    async fn submit_expense(&mut self) {
        let category = self.state.selected_category;
        let amount = parse_amount(&self.state.amount_input);
        self.state.is_category_error = category.is_none();
        self.state.is_amount_error = amount.is_none();

        let (Some(category), Some(amount)) = (category, amount) else {
            tracing::debug!(
                category_error = self.state.is_category_error,
                amount_error = self.state.is_amount_error,
                "expense draft rejected"
            );
            return;
        };

        let expense = Expense::new(
            category,
            amount,
            self.state.comment_input.trim(),
            self.clock.now_millis(),
        );

        match self.use_cases.add_expense.execute(expense).await {
            Ok(()) => {
                self.state.storage_error = None;
                self.state.reset_draft();
                self.state.is_add_dialog_open = false;
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save expense");
                self.state.storage_error = Some(err.to_string());
            }
        }
    }

    async fn confirm_delete(&mut self) {
        let Some(id) = self.state.pending_delete_expense_id.take() else {
            return;
        };
        self.state.is_delete_dialog_open = false;

        match self.use_cases.delete_expense.execute(&id).await {
            Ok(_) => {
                self.state.storage_error = None;
                self.refresh().await;
            }
            Err(err) => {
                tracing::error!(error = %err, expense_id = %id, "failed to delete expense");
                self.state.storage_error = Some(err.to_string());
            }
        }
    }

    async fn refresh(&mut self) {
        self.state.all_expenses = self.use_cases.get_expenses.execute().await;
        self.recompute_visible();
    }

    fn recompute_visible(&mut self) {
        let now = self.clock.now().with_timezone(&Local);
        self.state.visible_expenses =
            filter_by_period(&self.state.all_expenses, self.state.selected_period, &now);
    }

    fn publish(&self) {
        self.publisher.send_if_modified(|published| {
            if *published == self.state {
                false
            } else {
                *published = self.state.clone();
                true
            }
        });
    }
}
