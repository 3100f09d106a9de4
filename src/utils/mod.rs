pub mod logger;
pub mod stats;

pub use self::logger::init as init_logger;
