// Configuration: environment variables and shared app state

pub mod environment;
pub mod state;
