use std::thread;

use anyhow::{anyhow, Context};
use crossbeam_channel::unbounded;
use log::{debug, info};

use shared_resources::config::Config;

use crate::dispatch::status::DispatchStatus;
use crate::dispatch::Dispatcher;
use crate::utilities::debug::Debug;
use crate::utilities::event::CarReport;

pub mod channel_car;
pub mod controller;
pub mod simulator;

use self::channel_car::ChannelCar;

/// Runs the controller against the simulated building until the scenario's
/// last tick. Returns the final controller state.
pub fn run(config: Config, show_status: bool) -> anyhow::Result<Option<DispatchStatus>> {
    let bounds = config.simulation.bounds()?;
    let num_cars = config.simulation.num_cars as usize;

    // INITIALIZE CHANNELS
    let (event_tx, event_rx) = unbounded();
    let (command_tx, command_rx) = unbounded();
    let (status_tx, status_rx) = unbounded();

    // INITIALIZE DISPATCHER
    let start = CarReport { floor: bounds.bottom, load_factor: 0.0 };
    let cars = (0..num_cars)
        .map(|id| ChannelCar::new(id, start, command_tx.clone()))
        .collect();
    drop(command_tx);
    let floors: Vec<u8> = bounds.floors().collect();
    let dispatcher = Dispatcher::new(cars, &floors, config.dispatch.clone())?;

    // INITIALIZE THREAD FOR CONTROLLER
    let controller_handle = thread::Builder::new()
        .name("controller".to_string())
        .spawn(move || controller::main(dispatcher, event_rx, status_tx))
        .context("could not spawn controller thread")?;

    // INITIALIZE THREAD FOR SIMULATED BUILDING
    let simulation = config.simulation.clone();
    let scenario = config.scenario.clone();
    let simulator_handle = thread::Builder::new()
        .name("simulator".to_string())
        .spawn(move || simulator::main(simulation, bounds, scenario, event_tx, command_rx))
        .context("could not spawn simulator thread")?;

    let mut debug = Debug::new();
    let mut last_status = None;
    for status in status_rx.iter() {
        if show_status {
            debug.printstatus(&status)?;
        }
        last_status = Some(status);
    }

    controller_handle.join().map_err(|_| anyhow!("controller thread panicked"))?;
    simulator_handle.join().map_err(|_| anyhow!("simulator thread panicked"))?;

    if let Some(status) = &last_status {
        info!(
            "Outstanding calls: up {:?}, down {:?}, riders {:?}",
            status.up_calls,
            status.down_calls,
            status.cars.iter().map(|car| car.rider_calls.clone()).collect::<Vec<_>>(),
        );
        debug!("Final status: {}", serde_json::to_string(status)?);
    }
    Ok(last_status)
}
