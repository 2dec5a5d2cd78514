use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("event for car {car} but only {cars} cars are attached")]
    UnknownCar { car: usize, cars: usize },

    #[error("a building needs at least one floor")]
    NoFloors,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
