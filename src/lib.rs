pub mod dispatch {
    pub mod dispatcher;
    pub mod program;
    pub mod queue_planner;
    pub mod request_registry;
    pub mod stop_decider;
}

pub mod host {
    pub mod binding;
    pub mod car;
    pub mod floor;
    pub mod sim;
}

pub mod util {
    pub mod config;
    pub mod constants;
    pub mod direction;
    pub mod error;
    pub mod logging;
}
