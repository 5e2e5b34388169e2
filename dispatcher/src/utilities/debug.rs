use std::io::{stdout, Result, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand};

use shared_resources::direction::Direction;

use crate::dispatch::status::DispatchStatus;

// header and separator lines around the two tables
const FIXED_LINES: u16 = 12;

fn yes_no(on: bool) -> &'static str {
    if on { "x" } else { "" }
}

/// Redraws the controller state in place on the terminal.
pub struct Debug {
    stdout: Stdout,
    printed_lines: u16,
}

impl Debug {
    pub fn new() -> Self {
        Debug {
            stdout: stdout(),
            printed_lines: 0,
        }
    }

    pub fn printstatus(&mut self, status: &DispatchStatus) -> Result<()> {
        if self.printed_lines > 0 {
            self.stdout.execute(cursor::MoveUp(self.printed_lines))?;
        }
        self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        writeln!(self.stdout, "+--------------------------------------+")?;
        writeln!(self.stdout, "| HALL CALLS                           |")?;
        writeln!(self.stdout, "+------------+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} |", "FLOOR", "HALL UP", "HALL DOWN")?;
        writeln!(self.stdout, "+------------+------------+------------+")?;
        for floor in status.bounds.floors().rev() {
            writeln!(self.stdout, "| {0:<10} | {1:<10} | {2:<10} |",
                floor,
                yes_no(status.has_call(floor, Direction::Up)),
                yes_no(status.has_call(floor, Direction::Down)))?;
        }
        writeln!(self.stdout, "+------------+------------+------------+\n")?;

        writeln!(self.stdout, "+------+-------+-------+------+-----------+-----------+-------+------------------+")?;
        writeln!(self.stdout, "| {0:<4} | {1:<5} | {2:<5} | {3:<4} | {4:<9} | {5:<9} | {6:<5} | {7:<16} |",
            "CAR", "FLOOR", "DEST", "HOME", "DIRECTION", "INDICATOR", "LOAD", "RIDER CALLS")?;
        writeln!(self.stdout, "+------+-------+-------+------+-----------+-----------+-------+------------------+")?;
        for car in &status.cars {
            let destination = car.destination.map(|f| f.to_string()).unwrap_or_else(|| String::from("-"));
            let rider_calls = car.rider_calls.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(",");
            writeln!(self.stdout, "| {0:<4} | {1:<5} | {2:<5} | {3:<4} | {4:<9} | {5:<9} | {6:<5.2} | {7:<16} |",
                car.id,
                car.floor,
                destination,
                car.home_floor,
                car.direction.as_string().unwrap_or_else(|| String::from("idle")),
                car.indicators.as_string(),
                car.load_factor,
                rider_calls)?;
        }
        writeln!(self.stdout, "+------+-------+-------+------+-----------+-----------+-------+------------------+")?;
        match status.average_load {
            Some(average) => writeln!(self.stdout, "average recorded load: {:.2}", average)?,
            None => writeln!(self.stdout, "average recorded load: -")?,
        }

        self.printed_lines = FIXED_LINES + status.bounds.num_floors() + status.cars.len() as u16;
        self.stdout.flush()
    }
}

impl Default for Debug {
    fn default() -> Self {
        Debug::new()
    }
}
