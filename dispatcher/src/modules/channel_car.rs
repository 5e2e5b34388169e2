use crossbeam_channel::Sender;
use log::warn;

use crate::utilities::event::{CarCommand, CarReport, Command};
use crate::utilities::host::CarHost;

/// Car living on the far side of a channel. Sensor values are the last ones
/// the host reported; commands are forwarded as they are issued.
pub struct ChannelCar {
    id: usize,
    report: CarReport,
    pending_queue: Vec<u8>,
    command_tx: Sender<CarCommand>,
}

impl ChannelCar {
    pub fn new(id: usize, report: CarReport, command_tx: Sender<CarCommand>) -> Self {
        ChannelCar {
            id,
            report,
            pending_queue: Vec::new(),
            command_tx,
        }
    }

    pub fn update_report(&mut self, report: CarReport) {
        self.report = report;
    }

    fn send(&self, command: Command) {
        if self.command_tx.send(CarCommand { car: self.id, command }).is_err() {
            warn!("car {}: command channel closed, dropping command", self.id);
        }
    }
}

impl CarHost for ChannelCar {
    fn current_floor(&self) -> u8 {
        self.report.floor
    }

    fn load_factor(&self) -> f64 {
        self.report.load_factor
    }

    fn going_up_indicator(&mut self, on: bool) {
        self.send(Command::GoingUpIndicator(on));
    }

    fn going_down_indicator(&mut self, on: bool) {
        self.send(Command::GoingDownIndicator(on));
    }

    fn set_destination_queue(&mut self, queue: Vec<u8>) {
        self.pending_queue = queue;
    }

    fn check_destination_queue(&mut self) {
        self.send(Command::DestinationQueue(self.pending_queue.clone()));
    }
}
