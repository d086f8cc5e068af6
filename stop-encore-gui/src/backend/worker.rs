use std::sync::mpsc;

use crate::app::StopEncoreApp;
use crate::state::{AppMessage, BackgroundOperation, next_operation_id};

/// Spawn a background operation with the standard boilerplate:
/// allocates an operation ID, registers the operation on `app.operations`,
/// clones the message sender, and spawns a thread that runs the closure.
///
/// The closure receives `(op_id, message_sender)`.
/// Returns the allocated operation ID.
pub fn spawn_background_op<F>(app: &mut StopEncoreApp, description: String, work: F) -> u64
where
    F: FnOnce(u64, mpsc::Sender<AppMessage>) + Send + 'static,
{
    let op_id = next_operation_id();
    let tx = app.message_tx.clone();

    app.operations
        .push(BackgroundOperation::new(op_id, description));

    std::thread::spawn(move || {
        work(op_id, tx);
    });

    op_id
}
