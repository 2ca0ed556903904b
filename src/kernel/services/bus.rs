use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::kernel::tabs::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelMessage {
    /// The engine's live buffer changed while bound to `tab`.
    ContentChanged {
        tab: TabId,
        text: String,
        version: u64,
    },
}

#[derive(Clone)]
pub struct KernelBusSender {
    tx: Sender<KernelMessage>,
}

pub struct KernelBusReceiver {
    rx: Receiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send(&self, msg: KernelMessage) -> Result<(), mpsc::SendError<KernelMessage>> {
        self.tx.send(msg)
    }
}

impl KernelBusReceiver {
    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }
}
