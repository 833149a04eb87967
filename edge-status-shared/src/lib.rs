pub mod models {
    pub mod errors;
    pub mod request;
    pub mod status;
}

pub mod services {
    pub mod status_service;
}

pub mod utilities {
    pub mod clock;
    pub mod config;
    pub mod logging;
    pub mod responses;
    pub mod test;
}
