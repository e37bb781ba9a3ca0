//! 命令定义和实现

pub mod audio;
pub mod config;
pub mod conveyor;
pub mod gpio;
pub mod r#move;
pub mod program;
pub mod smoke;
pub mod state;
pub mod stop;

pub use audio::AudioCommand;
pub use config::ConfigCommand;
pub use conveyor::ConveyorCommand;
pub use gpio::GpioCommand;
pub use r#move::MoveCommand;
pub use program::ProgramCommand;
pub use smoke::SmokeCommand;
pub use state::StateCommand;
pub use stop::StopCommand;
