mod clock;
mod logging;

pub use clock::FrameClock;
pub use logging::init_logging;
