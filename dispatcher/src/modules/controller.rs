/// ----- CONTROLLER MODULE -----
/// Owns the dispatcher and feeds it host events one at a time, in the order
/// they arrive on the event channel. After every event a status snapshot is
/// published for the terminal printer.

use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};

use crate::dispatch::events::ElevatorEvents;
use crate::dispatch::status::DispatchStatus;
use crate::dispatch::Dispatcher;
use crate::utilities::event::Event;

use super::channel_car::ChannelCar;

pub fn main(
    mut dispatcher: Dispatcher<ChannelCar>,
    event_rx: Receiver<Event>,
    status_tx: Sender<DispatchStatus>,
) {
    while let Ok(event) = event_rx.recv() {
        if matches!(event, Event::Shutdown) {
            info!("Controller shutting down");
            break;
        }
        if handle_event(&mut dispatcher, event) {
            // nobody listening is fine, the printer is optional
            let _ = status_tx.send(dispatcher.status());
        }
    }
}

/// Applies one event. Returns false if the event was rejected.
pub fn handle_event(dispatcher: &mut Dispatcher<ChannelCar>, event: Event) -> bool {
    if let Err(reason) = validate(dispatcher, &event) {
        warn!("Dropping event {:?}: {}", event, reason);
        return false
    }
    if let (Some(car), Some(report)) = (event.car(), event.report()) {
        dispatcher.car_mut(car).update_report(report);
    }
    match event {
        Event::HallButton { floor, direction } => dispatcher.hall_button_pressed(floor, direction),
        Event::RiderButton { car, floor } => dispatcher.rider_button_pressed(car, floor),
        Event::Idle { car, .. } => dispatcher.car_idle(car),
        Event::PassingFloor { car, floor, direction, .. } => dispatcher.passing_floor(car, floor, direction),
        Event::StoppedAtFloor { car, floor, .. } => dispatcher.stopped_at_floor(car, floor),
        Event::Shutdown => return false,
    }
    true
}

fn validate(dispatcher: &Dispatcher<ChannelCar>, event: &Event) -> Result<(), String> {
    if let Some(car) = event.car() {
        if car >= dispatcher.num_cars() {
            return Err(format!("car {} does not exist", car))
        }
    }
    let bounds = dispatcher.bounds();
    if let Some(floor) = event.floor() {
        if !bounds.contains(floor) {
            return Err(format!("floor {} is outside {}..={}", floor, bounds.bottom, bounds.top))
        }
    }
    if let Some(report) = event.report() {
        if !bounds.contains(report.floor) {
            return Err(format!("reported floor {} is outside {}..={}", report.floor, bounds.bottom, bounds.top))
        }
        if !(0.0..=1.0).contains(&report.load_factor) {
            return Err(format!("load factor {} is outside [0, 1]", report.load_factor))
        }
    }
    Ok(())
}
