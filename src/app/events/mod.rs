//! AppIntent-, AppCommand- und AppEffect-Enums für den Intent/Command-Datenfluss.

mod command;
mod effect;
mod intent;

pub use command::AppCommand;
pub use effect::AppEffect;
pub use intent::AppIntent;
