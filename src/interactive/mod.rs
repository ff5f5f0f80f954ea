pub mod app;

pub use self::app::Session;
