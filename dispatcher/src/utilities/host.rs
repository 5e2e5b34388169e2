/// A car as seen from the dispatcher. The host owns motion, doors and
/// passenger load; the dispatcher only reads sensors and hands out targets.
pub trait CarHost {
    fn current_floor(&self) -> u8;

    /// Fraction of capacity in use, in `[0, 1]`.
    fn load_factor(&self) -> f64;

    fn going_up_indicator(&mut self, on: bool);

    fn going_down_indicator(&mut self, on: bool);

    /// Replace the pending stops. Takes effect on `check_destination_queue`.
    fn set_destination_queue(&mut self, queue: Vec<u8>);

    fn check_destination_queue(&mut self);
}

pub trait FloorHost {
    fn floor_num(&self) -> u8;
}

impl FloorHost for u8 {
    fn floor_num(&self) -> u8 {
        *self
    }
}
